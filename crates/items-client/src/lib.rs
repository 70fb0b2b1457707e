//! Items REST Client
//!
//! Typed access to the `items` resource of the shopping list backend.
//! Compiles for wasm32 (fetch) and natively (hyper), so the same client
//! backs the browser UI and the integration tests.

mod backend;
mod client;
mod config;
mod error;
mod models;

pub use backend::ItemsBackend;
pub use client::ItemsClient;
pub use config::{ClientConfig, ConfigError, DEFAULT_BASE_URL};
pub use error::{ItemError, ItemResult, Operation};
pub use models::{CartPatch, Item, NewItem};
