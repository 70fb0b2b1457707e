//! Category Filter Component
//!
//! Select box narrowing the list to one category.

use leptos::prelude::*;

use crate::models::{CategoryFilter, CATEGORIES};
use crate::store::{self, use_app_store, AppStateStoreFields};

#[component]
pub fn CategoryFilterSelect() -> impl IntoView {
    let app_store = use_app_store();

    view! {
        <div class="filter">
            <select
                name="filter"
                prop:value=move || app_store.filter().read().as_value().to_string()
                on:change=move |ev| {
                    let filter = CategoryFilter::from_value(&event_target_value(&ev));
                    store::store_set_filter(&app_store, filter);
                }
            >
                <option value=CategoryFilter::ALL_LABEL>"Filter by category"</option>
                {CATEGORIES
                    .iter()
                    .map(|category| view! { <option value=*category>{*category}</option> })
                    .collect_view()}
            </select>
        </div>
    }
}
