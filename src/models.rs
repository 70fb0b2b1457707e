//! Frontend Models
//!
//! Data structures shared with the items client, plus UI-only choices.

pub use items_client::{Item, ItemError, NewItem};

/// Category options offered by the form and the filter
pub const CATEGORIES: &[&str] = &["Produce", "Dairy", "Dessert"];

/// Which rows the shopping list shows
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub const ALL_LABEL: &'static str = "All";

    /// Parse the value of the filter `<select>`
    pub fn from_value(value: &str) -> Self {
        if value.is_empty() || value == Self::ALL_LABEL {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(value.to_string())
        }
    }

    pub fn as_value(&self) -> &str {
        match self {
            CategoryFilter::All => Self::ALL_LABEL,
            CategoryFilter::Only(category) => category,
        }
    }
}
