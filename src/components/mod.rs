//! UI Components
//!
//! Leptos components for the shopping list.

mod item_row;
mod shopping_list;
mod item_form;
mod category_filter;
mod error_banner;

pub use item_row::ItemRow;
pub use shopping_list::ShoppingList;
pub use item_form::ItemForm;
pub use category_filter::CategoryFilterSelect;
pub use error_banner::ErrorBanner;
