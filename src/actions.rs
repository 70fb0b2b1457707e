//! Row Actions
//!
//! The two requests an item row can make. Each runs as a task that may be
//! cancelled when the row goes away; nothing here mutates the item itself.

use items_client::{CartPatch, ItemsBackend};
use tokio_util::sync::CancellationToken;

use crate::models::{Item, ItemError};

/// How a row action finished
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// Backend accepted the request
    Done(T),
    /// Backend rejected it or it never arrived
    Failed(ItemError),
    /// The owning row was torn down first
    Cancelled,
}

impl<T> Outcome<T> {
    fn from_result(result: Option<Result<T, ItemError>>) -> Self {
        match result {
            Some(Ok(value)) => Outcome::Done(value),
            Some(Err(err)) => Outcome::Failed(err),
            None => Outcome::Cancelled,
        }
    }

    /// Route the outcome: success to `on_done`, failure to `on_error`.
    /// A cancelled action calls neither.
    pub fn settle(self, on_done: impl FnOnce(T), on_error: impl FnOnce(ItemError)) {
        match self {
            Outcome::Done(value) => on_done(value),
            Outcome::Failed(err) => {
                tracing::warn!(error = %err, "item request failed");
                on_error(err);
            }
            Outcome::Cancelled => tracing::debug!("item request cancelled"),
        }
    }
}

/// Ask the backend to flip `isInCart`; yields the server's item
pub async fn toggle_cart_status(
    backend: &dyn ItemsBackend,
    item: &Item,
    token: &CancellationToken,
) -> Outcome<Item> {
    let patch = CartPatch::toggle(item);
    tracing::debug!(id = item.id, in_cart = patch.is_in_cart, "toggle cart status");
    let result = token
        .run_until_cancelled(backend.set_in_cart(item.id, patch.is_in_cart))
        .await;
    Outcome::from_result(result)
}

/// Ask the backend to delete the item; yields the original item
pub async fn delete_item(
    backend: &dyn ItemsBackend,
    item: &Item,
    token: &CancellationToken,
) -> Outcome<Item> {
    tracing::debug!(id = item.id, "delete item");
    let result = token
        .run_until_cancelled(backend.delete_item(item.id))
        .await;
    Outcome::from_result(result.map(|r| r.map(|()| item.clone())))
}
