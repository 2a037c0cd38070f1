//! Add quote use case

use crate::domain::Quote;
use crate::error::{MottoError, Result};
use crate::infrastructure::{FileSystemStore, QuoteRepository};

/// Service for adding a single quote to the store
pub struct AddQuoteService {
    store: FileSystemStore,
}

impl AddQuoteService {
    pub fn new(store: FileSystemStore) -> Self {
        AddQuoteService { store }
    }

    /// Validate, append, and persist. Nothing is written when validation
    /// fails, so the collection is never left partially updated.
    pub fn execute(&self, text: &str, category: &str) -> Result<Quote> {
        let quote = Quote::new(text, category).map_err(MottoError::Validation)?;

        let mut collection = self.store.load_quotes()?;
        collection.push(quote.clone());
        self.store.save_quotes(&collection)?;

        Ok(quote)
    }
}
