//! Application layer - Use cases and orchestration

pub mod add_quote;
pub mod export_quotes;
pub mod import_quotes;
pub mod init;
pub mod list_categories;
pub mod manage_filter;
pub mod show_quote;

pub use add_quote::AddQuoteService;
pub use export_quotes::ExportQuotesService;
pub use import_quotes::ImportQuotesService;
pub use list_categories::CategoriesService;
pub use manage_filter::FilterService;
pub use show_quote::{ShowOutcome, ShowQuoteService};
