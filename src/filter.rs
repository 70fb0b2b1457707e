//! List Filtering
//!
//! Helper functions for deciding which rows are rendered.

use crate::models::{CategoryFilter, Item};

/// Whether the filter shows `item`
pub fn is_visible(item: &Item, filter: &CategoryFilter) -> bool {
    match filter {
        CategoryFilter::All => true,
        CategoryFilter::Only(category) => item.category == *category,
    }
}

/// Items matching the filter, in list order
pub fn visible_items(items: &[Item], filter: &CategoryFilter) -> Vec<Item> {
    items
        .iter()
        .filter(|item| is_visible(item, filter))
        .cloned()
        .collect()
}
