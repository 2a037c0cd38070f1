//! Initialize quote store use case

use crate::domain::QuoteCollection;
use crate::error::Result;
use crate::infrastructure::{FileSystemStore, Prefs, QuoteRepository};
use std::fs;
use std::path::Path;

/// Initialize a new quote store at the specified path.
pub fn init(path: &Path) -> Result<()> {
    // Create the directory if it doesn't exist
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let store = FileSystemStore::new(path.to_path_buf());

    // Create .motto directory
    store.initialize()?;

    // Seed with the built-in defaults and default preferences
    let defaults = QuoteCollection::defaults();
    store.save_quotes(&defaults)?;
    store.save_prefs(&Prefs::default())?;

    println!("Initialized motto quote store at {}", path.display());
    println!("Seeded {} default quotes", defaults.len());

    Ok(())
}
