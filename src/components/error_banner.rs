//! Error Banner Component
//!
//! Shows the latest reported request failure and clears it after a while.

use std::time::Duration;

use gloo_timers::future::sleep;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::store::{self, use_app_store, AppStateStoreFields};

const DISMISS_AFTER: Duration = Duration::from_secs(5);

#[component]
pub fn ErrorBanner() -> impl IntoView {
    let app_store = use_app_store();

    // Auto-dismiss each new notice
    Effect::new(move |_| {
        if let Some(seq) = app_store.notice().with(|n| n.as_ref().map(|n| n.seq)) {
            spawn_local(async move {
                sleep(DISMISS_AFTER).await;
                store::store_dismiss_notice(&app_store, seq);
            });
        }
    });

    view! {
        {move || app_store.notice().get().map(|notice| {
            let seq = notice.seq;
            view! {
                <div class="error-banner" role="alert">
                    <span>{notice.message}</span>
                    <button
                        class="dismiss-btn"
                        on:click=move |_| store::store_dismiss_notice(&app_store, seq)
                    >
                        "×"
                    </button>
                </div>
            }
        })}
    }
}
