//! Domain layer - Business logic and domain models

pub mod collection;
pub mod filter;
pub mod quote;

pub use collection::QuoteCollection;
pub use filter::CategoryFilter;
pub use quote::Quote;
