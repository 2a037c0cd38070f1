//! Import quotes use case

use crate::domain::Quote;
use crate::error::{MottoError, Result};
use crate::infrastructure::{FileSystemStore, QuoteRepository};
use std::fs;
use std::path::Path;

/// Service for merging an exported JSON file into the store
pub struct ImportQuotesService {
    store: FileSystemStore,
}

impl ImportQuotesService {
    pub fn new(store: FileSystemStore) -> Self {
        ImportQuotesService { store }
    }

    /// Read the file and merge its quotes, returning how many were added.
    pub fn execute(&self, file: &Path) -> Result<usize> {
        let contents = fs::read_to_string(file)?;
        self.merge_serialized(&contents)
    }

    /// Parse-then-validate, then append. The payload is rejected as a whole
    /// when it is not a JSON array of {text, category} objects; the
    /// collection is never partially updated. Element fields are taken
    /// as-is, with no trimming or emptiness checks.
    pub fn merge_serialized(&self, payload: &str) -> Result<usize> {
        let value: serde_json::Value = serde_json::from_str(payload)
            .map_err(|e| MottoError::ImportFormat(format!("not valid JSON: {}", e)))?;

        if !value.is_array() {
            return Err(MottoError::ImportFormat(
                "top-level value must be a JSON array".to_string(),
            ));
        }

        let quotes: Vec<Quote> = serde_json::from_value(value).map_err(|e| {
            MottoError::ImportFormat(format!(
                "array elements must be objects with text and category: {}",
                e
            ))
        })?;

        let mut collection = self.store.load_quotes()?;
        let merged = collection.merge(quotes);
        self.store.save_quotes(&collection)?;

        Ok(merged)
    }
}
