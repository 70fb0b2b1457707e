//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store owns
//! the authoritative item list; rows only ever ask for changes.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{CategoryFilter, Item};

/// A failure shown to the user until dismissed
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub seq: u32,
    pub message: String,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All items, in backend order
    pub items: Vec<Item>,
    /// Active category filter
    pub filter: CategoryFilter,
    /// Whether the initial load has finished
    pub loaded: bool,
    /// Most recent reported failure
    pub notice: Option<Notice>,
    /// Sequence for notices
    pub notice_seq: u32,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Reconciliation
// ========================

/// Replace the item with the same id. Returns false if no such item is listed.
pub fn replace_item(items: &mut [Item], updated: Item) -> bool {
    match items.iter_mut().find(|item| item.id == updated.id) {
        Some(slot) => {
            *slot = updated;
            true
        }
        None => false,
    }
}

/// Remove the item with `id`. Returns false if it was already gone.
pub fn remove_item(items: &mut Vec<Item>, id: u32) -> bool {
    let before = items.len();
    items.retain(|item| item.id != id);
    items.len() != before
}

/// Append a newly created item unless its id is already listed
pub fn append_item(items: &mut Vec<Item>, item: Item) -> bool {
    if items.iter().any(|existing| existing.id == item.id) {
        return false;
    }
    items.push(item);
    true
}

// ========================
// Store Helper Functions
// ========================

pub fn store_set_items(store: &AppStore, items: Vec<Item>) {
    store.items().set(items);
    store.loaded().set(true);
}

/// Update an item in the store by ID
pub fn store_update_item(store: &AppStore, updated_item: Item) {
    let id = updated_item.id;
    if !replace_item(&mut store.items().write(), updated_item) {
        tracing::debug!(id, "updated item is no longer listed");
    }
}

/// Remove an item from the store by ID
pub fn store_remove_item(store: &AppStore, item_id: u32) {
    if !remove_item(&mut store.items().write(), item_id) {
        tracing::debug!(id = item_id, "deleted item was already removed");
    }
}

/// Add a created item to the store
pub fn store_add_item(store: &AppStore, item: Item) {
    append_item(&mut store.items().write(), item);
}

pub fn store_set_filter(store: &AppStore, filter: CategoryFilter) {
    store.filter().set(filter);
}

/// Show a notice; returns its sequence number
pub fn store_push_notice(store: &AppStore, message: String) -> u32 {
    let seq = store.notice_seq().get_untracked() + 1;
    store.notice_seq().set(seq);
    store.notice().set(Some(Notice { seq, message }));
    seq
}

/// Clear the notice if it is still the one identified by `seq`
pub fn store_dismiss_notice(store: &AppStore, seq: u32) {
    let current = store.notice().with_untracked(|n| n.as_ref().map(|n| n.seq));
    if current == Some(seq) {
        store.notice().set(None);
    }
}
