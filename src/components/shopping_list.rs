//! Shopping List Component
//!
//! Owns the rendering of the authoritative list: loads it once, then
//! reconciles row callbacks into the store.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::ItemRow;
use crate::context::use_app_context;
use crate::filter::{is_visible, visible_items};
use crate::models::Item;
use crate::store::{self, use_app_store, AppStateStoreFields};

#[component]
pub fn ShoppingList() -> impl IntoView {
    let ctx = use_app_context();
    let app_store = use_app_store();

    // Load items on mount
    Effect::new(move |_| {
        let ctx = ctx.clone();
        spawn_local(async move {
            match ctx.backend().list_items().await {
                Ok(items) => {
                    tracing::info!(count = items.len(), "loaded items");
                    store::store_set_items(&app_store, items);
                }
                Err(err) => {
                    tracing::warn!(error = %err, "failed to load items");
                    ctx.report(err);
                }
            }
        });
    });

    let on_update_item = Callback::new(move |updated: Item| {
        store::store_update_item(&app_store, updated);
    });
    let on_delete_item = Callback::new(move |deleted: Item| {
        store::store_remove_item(&app_store, deleted.id);
    });

    let visible = move || visible_items(&app_store.items().read(), &app_store.filter().read());

    // Every listed item keeps a mounted row; the filter only hides it, so a
    // row's in-flight requests are cancelled only once the item leaves the list
    view! {
        <ul class="items">
            <For
                each=move || app_store.items().get()
                key=|item| item.id
                children=move |item: Item| {
                    let id = item.id;
                    // Follow the store's copy; fall back to the last seen one
                    let row = Signal::derive(move || {
                        app_store
                            .items()
                            .read()
                            .iter()
                            .find(|i| i.id == id)
                            .cloned()
                            .unwrap_or_else(|| item.clone())
                    });
                    let hidden = Signal::derive(move || {
                        let filter = app_store.filter().read();
                        row.with(|item| !is_visible(item, &filter))
                    });
                    view! {
                        <ItemRow
                            item=row
                            hidden=hidden
                            on_update_item=on_update_item
                            on_delete_item=on_delete_item
                        />
                    }
                }
            />
        </ul>
        <Show when=move || app_store.loaded().get() && visible().is_empty()>
            <p class="empty">
                {move || if app_store.items().read().is_empty() {
                    "Your shopping list is empty."
                } else {
                    "No items in this category."
                }}
            </p>
        </Show>
    }
}
