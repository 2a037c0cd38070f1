//! Filter preference management use case

use crate::domain::CategoryFilter;
use crate::error::{MottoError, Result};
use crate::infrastructure::{FileSystemStore, QuoteRepository};
use std::str::FromStr;

/// Service for reading and updating the persisted filter category
pub struct FilterService {
    store: FileSystemStore,
}

impl FilterService {
    pub fn new(store: FileSystemStore) -> Self {
        FilterService { store }
    }

    /// The currently persisted filter.
    pub fn get(&self) -> Result<CategoryFilter> {
        Ok(self.store.load_prefs()?.filter())
    }

    /// Persist a new filter value. `all` (any case) clears the restriction.
    pub fn set(&self, value: &str) -> Result<CategoryFilter> {
        let filter = CategoryFilter::from_str(value).map_err(MottoError::Config)?;

        let mut prefs = self.store.load_prefs()?;
        prefs.set_filter(&filter);
        self.store.save_prefs(&prefs)?;

        Ok(filter)
    }

    /// Reset to the unrestricted sentinel.
    pub fn clear(&self) -> Result<()> {
        let mut prefs = self.store.load_prefs()?;
        prefs.set_filter(&CategoryFilter::All);
        self.store.save_prefs(&prefs)?;
        Ok(())
    }
}
