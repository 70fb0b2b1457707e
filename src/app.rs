//! Shopping List App
//!
//! Root component: provides the store and the backend, then lays out the
//! form, the filter and the list.

use leptos::prelude::*;
use reactive_stores::Store;

use items_client::ClientConfig;

use crate::components::{CategoryFilterSelect, ErrorBanner, ItemForm, ShoppingList};
use crate::context::AppContext;
use crate::models::ItemError;
use crate::store::{self, AppState};

#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    let app_store = Store::new(AppState::default());
    provide_context(app_store);

    // Every failed request ends up in the banner
    let report = Callback::new(move |err: ItemError| {
        store::store_push_notice(&app_store, err.to_string());
    });

    tracing::info!(base_url = %config.base_url(), "using items backend");
    provide_context(AppContext::with_config(config, report));

    view! {
        <div class="app">
            <header>
                <h1>"Shopster"</h1>
            </header>
            <ErrorBanner />
            <div class="shopping-list">
                <ItemForm />
                <CategoryFilterSelect />
                <ShoppingList />
            </div>
        </div>
    }
}
