//! Quote value object

use serde::{Deserialize, Serialize};

/// A single quote: its text and the category it belongs to.
///
/// Quotes are immutable once created; the collection only appends them.
/// There is no identifier and duplicates are permitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub category: String,
}

impl Quote {
    /// Build a quote from user input, trimming both fields.
    ///
    /// Returns an error message when either field is empty after trimming.
    /// Deserialized quotes (persisted or imported) bypass this check.
    pub fn new(text: &str, category: &str) -> std::result::Result<Self, String> {
        let text = text.trim();
        let category = category.trim();

        if text.is_empty() {
            return Err("Quote text cannot be empty".to_string());
        }
        if category.is_empty() {
            return Err("Quote category cannot be empty".to_string());
        }

        Ok(Quote {
            text: text.to_string(),
            category: category.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_fields() {
        let quote = Quote::new("  Hello  ", " Wisdom ").unwrap();
        assert_eq!(quote.text, "Hello");
        assert_eq!(quote.category, "Wisdom");
    }

    #[test]
    fn test_empty_text_rejected() {
        let result = Quote::new("   ", "Wisdom");
        assert_eq!(result.unwrap_err(), "Quote text cannot be empty");
    }

    #[test]
    fn test_empty_category_rejected() {
        let result = Quote::new("Hello", "");
        assert_eq!(result.unwrap_err(), "Quote category cannot be empty");
    }

    #[test]
    fn test_serde_wire_shape() {
        let quote = Quote::new("Hello", "Wisdom").unwrap();
        let json = serde_json::to_string(&quote).unwrap();
        assert_eq!(json, r#"{"text":"Hello","category":"Wisdom"}"#);

        let back: Quote = serde_json::from_str(&json).unwrap();
        assert_eq!(back, quote);
    }
}
