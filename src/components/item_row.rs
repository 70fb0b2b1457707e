//! Item Row Component
//!
//! One shopping list entry with "add to cart" and "delete" buttons.
//! The row never edits its item: it asks the backend, then hands the
//! result to the parent through `on_update_item` / `on_delete_item`.

use leptos::prelude::*;
use leptos::task::spawn_local;
use tokio_util::sync::CancellationToken;

use crate::actions;
use crate::context::use_app_context;
use crate::models::Item;

/// Class and label of the cart toggle button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartButton {
    pub class: &'static str,
    pub label: &'static str,
}

/// `<li>` class for an item
pub fn row_class(item: &Item) -> &'static str {
    if item.is_in_cart { "in-cart" } else { "" }
}

pub fn cart_button(item: &Item) -> CartButton {
    if item.is_in_cart {
        CartButton { class: "remove", label: "Remove From Cart" }
    } else {
        CartButton { class: "add", label: "Add to Cart" }
    }
}

/// A single item row in the shopping list
///
/// `item` tracks the parent's copy, so a reconciled update re-renders the
/// row in place without tearing it down. `hidden` rows stay mounted.
#[component]
pub fn ItemRow(
    #[prop(into)] item: Signal<Item>,
    #[prop(into)] hidden: Signal<bool>,
    #[prop(into)] on_update_item: Callback<Item>,
    #[prop(into)] on_delete_item: Callback<Item>,
) -> impl IntoView {
    let ctx = use_app_context();

    // Late responses for a removed row are dropped
    let token = CancellationToken::new();
    on_cleanup({
        let token = token.clone();
        move || token.cancel()
    });

    let toggle = {
        let ctx = ctx.clone();
        let token = token.clone();
        move |_| {
            let ctx = ctx.clone();
            let token = token.clone();
            let current = item.get_untracked();
            spawn_local(async move {
                let backend = ctx.backend();
                actions::toggle_cart_status(&*backend, &current, &token)
                    .await
                    .settle(|updated| on_update_item.run(updated), |err| ctx.report(err));
            });
        }
    };

    let delete = move |_| {
        let ctx = ctx.clone();
        let token = token.clone();
        let current = item.get_untracked();
        spawn_local(async move {
            let backend = ctx.backend();
            actions::delete_item(&*backend, &current, &token)
                .await
                .settle(|deleted| on_delete_item.run(deleted), |err| ctx.report(err));
        });
    };

    view! {
        <li
            class=move || item.with(row_class)
            style:display=move || if hidden.get() { "none" } else { "" }
        >
            <span>{move || item.with(|i| i.name.clone())}</span>
            <span class="category">{move || item.with(|i| i.category.clone())}</span>
            <button class=move || item.with(cart_button).class on:click=toggle>
                {move || item.with(cart_button).label}
            </button>
            <button class="remove" on:click=delete>
                "Delete"
            </button>
        </li>
    }
}
