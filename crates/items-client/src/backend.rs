//! Backend Abstraction
//!
//! The operations the UI needs from the `items` resource. The browser
//! build uses [`ItemsClient`](crate::ItemsClient); tests plug in fakes.

use async_trait::async_trait;

use crate::error::ItemResult;
use crate::models::{Item, NewItem};

/// Async access to the items resource.
///
/// Futures are not `Send` so the trait can be implemented over the
/// browser's fetch API.
#[async_trait(?Send)]
pub trait ItemsBackend: Send + Sync {
    /// `GET /items`
    async fn list_items(&self) -> ItemResult<Vec<Item>>;

    /// `POST /items`
    async fn create_item(&self, item: &NewItem) -> ItemResult<Item>;

    /// `PATCH /items/{id}` with `{"isInCart": in_cart}`, returns the server's item
    async fn set_in_cart(&self, id: u32, in_cart: bool) -> ItemResult<Item>;

    /// `DELETE /items/{id}`
    async fn delete_item(&self, id: u32) -> ItemResult<()>;
}
