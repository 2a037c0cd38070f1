//! Category filter for random selection

use crate::domain::Quote;
use std::fmt;
use std::str::FromStr;

/// Sentinel value meaning "no filter".
pub const ALL_SENTINEL: &str = "all";

/// Restricts random selection to a single category, or allows everything.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    /// Whether the given quote is eligible under this filter.
    ///
    /// Category comparison is exact; only the `all` sentinel is case-insensitive.
    pub fn matches(&self, quote: &Quote) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(category) => quote.category == *category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Filter category cannot be empty".to_string());
        }
        if s.eq_ignore_ascii_case(ALL_SENTINEL) {
            return Ok(CategoryFilter::All);
        }
        Ok(CategoryFilter::Category(s.to_string()))
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "{}", ALL_SENTINEL),
            CategoryFilter::Category(category) => write!(f, "{}", category),
        }
    }
}
