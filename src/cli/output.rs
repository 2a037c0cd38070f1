//! Output formatting utilities

use crate::domain::{CategoryFilter, Quote};

/// Format a quote for display
pub fn format_quote(quote: &Quote) -> String {
    format!("\"{}\"\nCategory: {}\n", quote.text, quote.category)
}

/// Format the category list for display
pub fn format_category_list(categories: &[String]) -> String {
    if categories.is_empty() {
        return "No categories found".to_string();
    }

    let mut output = String::new();
    for category in categories {
        output.push_str(category);
        output.push('\n');
    }
    output
}

/// Empty-state message when no quote matches the active filter
pub fn empty_pick_message(filter: &CategoryFilter) -> String {
    match filter {
        CategoryFilter::All => "No quotes found".to_string(),
        CategoryFilter::Category(category) => {
            format!("No quotes in category '{}'", category)
        }
    }
}
