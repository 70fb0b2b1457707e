//! Item Form Component
//!
//! Form for adding a new item to the list.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::models::{NewItem, CATEGORIES};
use crate::store::{self, use_app_store};

#[component]
pub fn ItemForm() -> impl IntoView {
    let ctx = use_app_context();
    let app_store = use_app_store();

    let (name, set_name) = signal(String::new());
    let (category, set_category) = signal(String::from(CATEGORIES[0]));

    let create_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = name.get().trim().to_string();
        if text.is_empty() { return; }
        let new_item = NewItem::new(text, category.get());

        let ctx = ctx.clone();
        spawn_local(async move {
            match ctx.backend().create_item(&new_item).await {
                Ok(created) => {
                    tracing::info!(id = created.id, "created item");
                    store::store_add_item(&app_store, created);
                    set_name.set(String::new());
                }
                Err(err) => {
                    tracing::warn!(error = %err, "failed to create item");
                    ctx.report(err);
                }
            }
        });
    };

    view! {
        <form class="new-item-form" on:submit=create_item>
            <label>
                "Name:"
                <input
                    type="text"
                    name="name"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Category:"
                <select
                    name="category"
                    prop:value=move || category.get()
                    on:change=move |ev| set_category.set(event_target_value(&ev))
                >
                    {CATEGORIES
                        .iter()
                        .map(|c| view! { <option value=*c>{*c}</option> })
                        .collect_view()}
                </select>
            </label>
            <button type="submit">"Add to List"</button>
        </form>
    }
}
