//! Shopping List Frontend Entry Point

mod models;
mod context;
mod store;
mod filter;
mod actions;
mod logging;
mod components;
mod app;

use app::App;
use items_client::ClientConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = logging::init() {
        leptos::logging::warn!("logging already initialised: {}", err);
    }

    let config = match ClientConfig::from_build_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(error = %err, "invalid CART_API_BASE, using default backend");
            ClientConfig::default()
        }
    };

    mount_to_body(move || view! { <App config=config /> });
}
