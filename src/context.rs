//! Application Context
//!
//! Shared services provided via Leptos Context API.

use std::sync::Arc;

use leptos::prelude::*;
use items_client::{ClientConfig, ItemsBackend, ItemsClient};

use crate::models::ItemError;

/// App-wide services provided via context
#[derive(Clone)]
pub struct AppContext {
    /// Backend for the items resource
    backend: Arc<dyn ItemsBackend>,
    /// Hook receiving every failed request
    report: Callback<ItemError>,
}

impl AppContext {
    pub fn new(backend: Arc<dyn ItemsBackend>, report: Callback<ItemError>) -> Self {
        Self { backend, report }
    }

    /// Context backed by the HTTP client for `config`
    pub fn with_config(config: ClientConfig, report: Callback<ItemError>) -> Self {
        Self::new(Arc::new(ItemsClient::new(config)), report)
    }

    pub fn backend(&self) -> Arc<dyn ItemsBackend> {
        Arc::clone(&self.backend)
    }

    /// Hand a failure to the host
    pub fn report(&self, err: ItemError) {
        self.report.run(err);
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
