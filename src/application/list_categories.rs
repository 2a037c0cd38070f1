//! List categories use case

use crate::error::Result;
use crate::infrastructure::{FileSystemStore, QuoteRepository};

/// Service for deriving the distinct categories present in the store.
pub struct CategoriesService {
    store: FileSystemStore,
}

impl CategoriesService {
    pub fn new(store: FileSystemStore) -> Self {
        CategoriesService { store }
    }

    /// Distinct categories in order of first appearance.
    pub fn execute(&self) -> Result<Vec<String>> {
        Ok(self.store.load_quotes()?.categories())
    }
}
