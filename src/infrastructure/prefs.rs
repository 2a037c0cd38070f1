//! Persisted user preferences

use crate::domain::{filter, CategoryFilter};
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prefs {
    pub selected_category: String,
    pub created: DateTime<Utc>,
}

impl Default for Prefs {
    fn default() -> Self {
        Prefs {
            selected_category: filter::ALL_SENTINEL.to_string(),
            created: Utc::now(),
        }
    }
}

impl Prefs {
    /// The filter currently in effect. An unparseable stored value degrades
    /// to no filter rather than failing.
    pub fn filter(&self) -> CategoryFilter {
        CategoryFilter::from_str(&self.selected_category).unwrap_or(CategoryFilter::All)
    }

    pub fn set_filter(&mut self, filter: &CategoryFilter) {
        self.selected_category = filter.to_string();
    }

    /// Load prefs from .motto/config.toml in the given directory.
    ///
    /// A missing or malformed file self-heals: defaults are written back and
    /// returned. The caller is responsible for having checked that the .motto
    /// directory itself exists.
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let prefs_path = path.join(".motto").join("config.toml");

        let contents = match fs::read_to_string(&prefs_path) {
            Ok(contents) => contents,
            Err(_) => {
                let prefs = Prefs::default();
                prefs.save_to_dir(path)?;
                return Ok(prefs);
            }
        };

        match toml::from_str(&contents) {
            Ok(prefs) => Ok(prefs),
            Err(_) => {
                let prefs = Prefs::default();
                prefs.save_to_dir(path)?;
                Ok(prefs)
            }
        }
    }

    /// Save prefs to .motto/config.toml in the given directory.
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let motto_dir = path.join(".motto");
        let prefs_path = motto_dir.join("config.toml");

        if !motto_dir.exists() {
            fs::create_dir(&motto_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&prefs_path, contents)?;

        Ok(())
    }
}
