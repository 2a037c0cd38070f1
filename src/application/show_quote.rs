//! Show quote use case

use crate::domain::{CategoryFilter, Quote};
use crate::error::{MottoError, Result};
use crate::infrastructure::{FileSystemStore, QuoteRepository, SessionCache};
use rand::thread_rng;
use std::str::FromStr;

/// Result of a show request: the picked quote (if any quote matched) and
/// the filter that was in effect, so the caller can render the empty state.
#[derive(Debug, Clone)]
pub struct ShowOutcome {
    pub quote: Option<Quote>,
    pub filter: CategoryFilter,
}

/// Service for picking and displaying quotes
pub struct ShowQuoteService {
    store: FileSystemStore,
    session: SessionCache,
}

impl ShowQuoteService {
    pub fn new(store: FileSystemStore, session: SessionCache) -> Self {
        ShowQuoteService { store, session }
    }

    /// Pick a fresh uniform-random quote.
    ///
    /// The saved filter preference applies unless `category_override` is
    /// given; the override is not persisted. The picked quote becomes the
    /// session's last quote.
    pub fn pick_new(&self, category_override: Option<&str>) -> Result<ShowOutcome> {
        let filter = match category_override {
            Some(category) => {
                CategoryFilter::from_str(category).map_err(MottoError::Validation)?
            }
            None => self.store.load_prefs()?.filter(),
        };

        let collection = self.store.load_quotes()?;
        let quote = collection.pick_random(&filter, &mut thread_rng()).cloned();

        if let Some(ref quote) = quote {
            self.session.remember(quote)?;
        }

        Ok(ShowOutcome { quote, filter })
    }

    /// Restore the session's last quote, falling back to a fresh pick when
    /// nothing is cached.
    pub fn current(&self) -> Result<ShowOutcome> {
        if let Some(quote) = self.session.last_quote() {
            let filter = self.store.load_prefs()?.filter();
            return Ok(ShowOutcome {
                quote: Some(quote),
                filter,
            });
        }

        self.pick_new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::Prefs;
    use tempfile::TempDir;

    struct Fixture {
        _temp: TempDir,
        store: FileSystemStore,
        session: SessionCache,
    }

    fn fixture() -> Fixture {
        let temp = TempDir::new().unwrap();
        let store = FileSystemStore::new(temp.path().to_path_buf());
        store.initialize().unwrap();
        let session = SessionCache::at_path(temp.path().join("session.json"));
        Fixture {
            _temp: temp,
            store,
            session,
        }
    }

    #[test]
    fn test_pick_new_remembers_quote() {
        let f = fixture();
        let service = ShowQuoteService::new(f.store.clone(), f.session.clone());

        let outcome = service.pick_new(None).unwrap();
        let quote = outcome.quote.unwrap();
        assert_eq!(f.session.last_quote(), Some(quote));
    }

    #[test]
    fn test_pick_new_with_override_restricts() {
        let f = fixture();
        let service = ShowQuoteService::new(f.store, f.session);

        // Exactly one default quote has this category, so the pick is
        // deterministic regardless of RNG state.
        for _ in 0..10 {
            let outcome = service.pick_new(Some("Success")).unwrap();
            assert_eq!(outcome.quote.unwrap().category, "Success");
        }
    }

    #[test]
    fn test_pick_new_no_match_is_empty_not_error() {
        let f = fixture();
        let service = ShowQuoteService::new(f.store, f.session.clone());

        let outcome = service.pick_new(Some("NoSuchCategory")).unwrap();
        assert!(outcome.quote.is_none());
        assert_eq!(
            outcome.filter,
            CategoryFilter::Category("NoSuchCategory".to_string())
        );
        // Nothing cached for an empty pick
        assert!(f.session.last_quote().is_none());
    }

    #[test]
    fn test_pick_new_honors_saved_filter() {
        let f = fixture();
        let mut prefs = Prefs::default();
        prefs.set_filter(&CategoryFilter::Category("Life".to_string()));
        f.store.save_prefs(&prefs).unwrap();

        let service = ShowQuoteService::new(f.store, f.session);
        for _ in 0..10 {
            let outcome = service.pick_new(None).unwrap();
            assert_eq!(outcome.quote.unwrap().category, "Life");
        }
    }

    #[test]
    fn test_current_restores_cached_quote() {
        let f = fixture();
        let cached = Quote::new("Cached", "Session").unwrap();
        f.session.remember(&cached).unwrap();

        let service = ShowQuoteService::new(f.store, f.session);
        let outcome = service.current().unwrap();
        assert_eq!(outcome.quote, Some(cached));
    }

    #[test]
    fn test_current_falls_back_to_pick() {
        let f = fixture();
        let service = ShowQuoteService::new(f.store, f.session.clone());

        let outcome = service.current().unwrap();
        let quote = outcome.quote.unwrap();
        // The fallback pick is now cached for the session
        assert_eq!(f.session.last_quote(), Some(quote));
    }
}
