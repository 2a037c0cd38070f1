//! Export quotes use case

use crate::error::Result;
use crate::infrastructure::{FileSystemStore, QuoteRepository};
use std::fs;
use std::path::Path;

/// Service for writing the collection out as a JSON file
pub struct ExportQuotesService {
    store: FileSystemStore,
}

impl ExportQuotesService {
    pub fn new(store: FileSystemStore) -> Self {
        ExportQuotesService { store }
    }

    /// Write the full collection, pretty-printed, to `output`. Returns the
    /// number of quotes exported.
    pub fn execute(&self, output: &Path) -> Result<usize> {
        let collection = self.store.load_quotes()?;

        let mut contents = serde_json::to_string_pretty(&collection)?;
        contents.push('\n');
        fs::write(output, contents)?;

        Ok(collection.len())
    }
}
