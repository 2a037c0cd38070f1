//! Infrastructure layer - External I/O and persistence

pub mod prefs;
pub mod session;
pub mod store;

pub use prefs::Prefs;
pub use session::SessionCache;
pub use store::{FileSystemStore, QuoteRepository};
