//! File system quote store

use crate::domain::{Quote, QuoteCollection};
use crate::error::{MottoError, Result};
use crate::infrastructure::Prefs;
use std::fs;
use std::path::{Path, PathBuf};

/// Abstract repository for quote store operations
pub trait QuoteRepository {
    /// Get the root directory of this store
    fn root(&self) -> &Path;

    /// Load the quote collection, self-healing malformed data to defaults
    fn load_quotes(&self) -> Result<QuoteCollection>;

    /// Overwrite the persisted collection
    fn save_quotes(&self, collection: &QuoteCollection) -> Result<()>;

    /// Load persisted preferences
    fn load_prefs(&self) -> Result<Prefs>;

    /// Save persisted preferences
    fn save_prefs(&self, prefs: &Prefs) -> Result<()>;

    /// Check if the .motto directory exists
    fn is_initialized(&self) -> bool;

    /// Create the .motto directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of QuoteRepository
#[derive(Debug, Clone)]
pub struct FileSystemStore {
    pub root: PathBuf,
}

impl FileSystemStore {
    /// Create a new store with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemStore { root }
    }

    /// Discover the store root by walking up from the current directory.
    /// First checks the MOTTO_HOME environment variable, then falls back to
    /// discovery.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("MOTTO_HOME") {
            let path = PathBuf::from(root_path);
            if Self::has_motto_dir(&path) {
                return Ok(FileSystemStore::new(path));
            } else {
                return Err(MottoError::Config(format!(
                    "MOTTO_HOME is set to '{}' but no .motto directory found. \
                    Run 'motto init' in that directory or unset MOTTO_HOME.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the store root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_motto_dir(&current) {
                return Ok(FileSystemStore::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(MottoError::NotMottoDirectory(start.to_path_buf()));
                }
            }
        }
    }

    fn has_motto_dir(path: &Path) -> bool {
        path.join(".motto").is_dir()
    }

    fn quotes_path(&self) -> PathBuf {
        self.root.join(".motto").join("quotes.json")
    }

    fn heal_to_defaults(&self) -> Result<QuoteCollection> {
        let defaults = QuoteCollection::defaults();
        self.save_quotes(&defaults)?;
        Ok(defaults)
    }
}

impl QuoteRepository for FileSystemStore {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_quotes(&self) -> Result<QuoteCollection> {
        let path = self.quotes_path();

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(_) => return self.heal_to_defaults(),
        };

        // Parse-then-validate: anything that is not an array of
        // {text, category} objects is discarded wholesale.
        match serde_json::from_str::<Vec<Quote>>(&contents) {
            Ok(quotes) => Ok(QuoteCollection::new(quotes)),
            Err(_) => self.heal_to_defaults(),
        }
    }

    fn save_quotes(&self, collection: &QuoteCollection) -> Result<()> {
        let motto_dir = self.root.join(".motto");
        if !motto_dir.exists() {
            fs::create_dir(&motto_dir)?;
        }

        let mut contents = serde_json::to_string_pretty(collection)?;
        contents.push('\n');
        fs::write(self.quotes_path(), contents)?;
        Ok(())
    }

    fn load_prefs(&self) -> Result<Prefs> {
        Prefs::load_from_dir(&self.root)
    }

    fn save_prefs(&self, prefs: &Prefs) -> Result<()> {
        prefs.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_motto_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let motto_dir = self.root.join(".motto");

        if motto_dir.exists() {
            return Err(MottoError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&motto_dir)?;
        Ok(())
    }
}
