//! Wire Models
//!
//! Data structures matching the backend's JSON representation.

use serde::{Deserialize, Serialize};

/// Shopping list item (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub name: String,
    pub category: String,
    #[serde(rename = "isInCart")]
    pub is_in_cart: bool,
}

impl Item {
    pub fn new(id: u32, name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            is_in_cart: false,
        }
    }
}

/// Body of `POST /items`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub category: String,
    #[serde(rename = "isInCart")]
    pub is_in_cart: bool,
}

impl NewItem {
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            is_in_cart: false,
        }
    }
}

/// Body of `PATCH /items/{id}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartPatch {
    #[serde(rename = "isInCart")]
    pub is_in_cart: bool,
}

impl CartPatch {
    /// Patch that flips the item's current cart membership
    pub fn toggle(item: &Item) -> Self {
        Self { is_in_cart: !item.is_in_cart }
    }
}
