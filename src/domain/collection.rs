//! Ordered quote collection with random selection

use crate::domain::{CategoryFilter, Quote};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// The ordered set of quotes known to the store. Insertion order is
/// preserved; order carries no meaning beyond display. Serializes as a
/// bare JSON array of quote objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct QuoteCollection {
    quotes: Vec<Quote>,
}

impl QuoteCollection {
    pub fn new(quotes: Vec<Quote>) -> Self {
        QuoteCollection { quotes }
    }

    /// The built-in collection used whenever persisted data is absent or
    /// malformed.
    pub fn defaults() -> Self {
        QuoteCollection::new(vec![
            Quote {
                text: "The best way to get started is to quit talking and begin doing."
                    .to_string(),
                category: "Motivation".to_string(),
            },
            Quote {
                text: "Success is not in what you have, but who you are.".to_string(),
                category: "Success".to_string(),
            },
            Quote {
                text: "Your time is limited, so don’t waste it living someone else’s life."
                    .to_string(),
                category: "Life".to_string(),
            },
        ])
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Append a single quote.
    pub fn push(&mut self, quote: Quote) {
        self.quotes.push(quote);
    }

    /// Append every quote from an imported batch, returning how many were
    /// merged. Elements are taken as-is; duplicates are permitted.
    pub fn merge(&mut self, quotes: Vec<Quote>) -> usize {
        let merged = quotes.len();
        self.quotes.extend(quotes);
        merged
    }

    /// Distinct category values in order of first appearance.
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for quote in &self.quotes {
            if !categories.contains(&quote.category) {
                categories.push(quote.category.clone());
            }
        }
        categories
    }

    /// Pick uniformly at random among quotes matching the filter.
    ///
    /// Returns `None` when nothing matches; the caller renders the empty
    /// state rather than treating this as an error.
    pub fn pick_random<R: Rng + ?Sized>(
        &self,
        filter: &CategoryFilter,
        rng: &mut R,
    ) -> Option<&Quote> {
        let eligible: Vec<&Quote> = self.quotes.iter().filter(|q| filter.matches(q)).collect();
        eligible.choose(rng).copied()
    }
}
