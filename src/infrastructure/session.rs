//! Session-scoped cache for the last displayed quote

use crate::domain::Quote;
use crate::error::Result;
use std::collections::hash_map::DefaultHasher;
use std::fs;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

/// Remembers the last quote shown within the current session so a bare
/// invocation can re-display it instead of picking a new one.
///
/// The cache lives in the OS temp directory, keyed by a hash of the store
/// root and a session id (`MOTTO_SESSION`, default `default`). The temp
/// directory stands in for session storage: it does not survive a reboot.
#[derive(Debug, Clone)]
pub struct SessionCache {
    path: PathBuf,
}

impl SessionCache {
    /// Session cache for the store rooted at `root`.
    pub fn for_store(root: &Path) -> Self {
        let canonical = fs::canonicalize(root).unwrap_or_else(|_| root.to_path_buf());
        let mut hasher = DefaultHasher::new();
        canonical.hash(&mut hasher);

        let session_id = std::env::var("MOTTO_SESSION")
            .unwrap_or_else(|_| "default".to_string());
        let session_id: String = session_id
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
            .collect();

        let filename = format!("motto-{:016x}-{}.json", hasher.finish(), session_id);
        SessionCache {
            path: std::env::temp_dir().join(filename),
        }
    }

    /// Cache backed by an explicit file path.
    pub fn at_path(path: PathBuf) -> Self {
        SessionCache { path }
    }

    /// The last quote displayed this session, if any. An unreadable or
    /// unparseable cache file is treated as absent.
    pub fn last_quote(&self) -> Option<Quote> {
        let contents = fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&contents).ok()
    }

    /// Record the quote just displayed.
    pub fn remember(&self, quote: &Quote) -> Result<()> {
        let contents = serde_json::to_string(quote)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }

    /// Forget the cached quote, if any.
    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_empty_cache_has_no_quote() {
        let temp = TempDir::new().unwrap();
        let cache = SessionCache::at_path(temp.path().join("session.json"));
        assert!(cache.last_quote().is_none());
    }

    #[test]
    fn test_remember_and_restore() {
        let temp = TempDir::new().unwrap();
        let cache = SessionCache::at_path(temp.path().join("session.json"));

        let quote = Quote::new("Hello", "Wisdom").unwrap();
        cache.remember(&quote).unwrap();
        assert_eq!(cache.last_quote(), Some(quote));
    }

    #[test]
    fn test_corrupt_cache_treated_as_absent() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("session.json");
        fs::write(&path, "{{ nope").unwrap();

        let cache = SessionCache::at_path(path);
        assert!(cache.last_quote().is_none());
    }

    #[test]
    fn test_clear_removes_cache() {
        let temp = TempDir::new().unwrap();
        let cache = SessionCache::at_path(temp.path().join("session.json"));

        cache.remember(&Quote::new("Hello", "Wisdom").unwrap()).unwrap();
        cache.clear().unwrap();
        assert!(cache.last_quote().is_none());

        // Clearing an already-empty cache is fine
        cache.clear().unwrap();
    }

    #[test]
    fn test_for_store_distinguishes_roots() {
        let temp_a = TempDir::new().unwrap();
        let temp_b = TempDir::new().unwrap();
        let cache_a = SessionCache::for_store(temp_a.path());
        let cache_b = SessionCache::for_store(temp_b.path());
        assert_ne!(cache_a.path, cache_b.path);
    }
}
