//! HTTP Client
//!
//! `reqwest` implementation of [`ItemsBackend`].

use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::backend::ItemsBackend;
use crate::config::ClientConfig;
use crate::error::{ItemError, ItemResult, Operation};
use crate::models::{CartPatch, Item, NewItem};

#[derive(Debug, Clone)]
pub struct ItemsClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl ItemsClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }
}

/// Non-2xx responses are rejected without looking at the body
fn check_status(operation: Operation, response: Response) -> ItemResult<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        tracing::debug!(%operation, %status, "request rejected");
        Err(ItemError::Rejected {
            operation,
            status: status.as_u16(),
        })
    }
}

async fn decode<T: DeserializeOwned>(operation: Operation, response: Response) -> ItemResult<T> {
    let body = response
        .bytes()
        .await
        .map_err(|e| ItemError::transport(operation, e))?;
    serde_json::from_slice(&body).map_err(|e| ItemError::transport(operation, e))
}

#[async_trait(?Send)]
impl ItemsBackend for ItemsClient {
    async fn list_items(&self) -> ItemResult<Vec<Item>> {
        let op = Operation::Load;
        let url = self.config.items_url();
        tracing::debug!(%url, "GET");
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ItemError::transport(op, e))?;
        decode(op, check_status(op, response)?).await
    }

    async fn create_item(&self, item: &NewItem) -> ItemResult<Item> {
        let op = Operation::Create;
        let url = self.config.items_url();
        tracing::debug!(%url, name = %item.name, "POST");
        let response = self
            .http
            .post(url)
            .json(item)
            .send()
            .await
            .map_err(|e| ItemError::transport(op, e))?;
        decode(op, check_status(op, response)?).await
    }

    async fn set_in_cart(&self, id: u32, in_cart: bool) -> ItemResult<Item> {
        let op = Operation::Toggle;
        let url = self.config.item_url(id);
        tracing::debug!(%url, in_cart, "PATCH");
        let response = self
            .http
            .patch(url)
            .json(&CartPatch { is_in_cart: in_cart })
            .send()
            .await
            .map_err(|e| ItemError::transport(op, e))?;
        decode(op, check_status(op, response)?).await
    }

    async fn delete_item(&self, id: u32) -> ItemResult<()> {
        let op = Operation::Delete;
        let url = self.config.item_url(id);
        tracing::debug!(%url, "DELETE");
        let response = self
            .http
            .delete(url)
            .send()
            .await
            .map_err(|e| ItemError::transport(op, e))?;
        let response = check_status(op, response)?;
        if response.status() == StatusCode::NO_CONTENT {
            return Ok(());
        }
        let body = response
            .bytes()
            .await
            .map_err(|e| ItemError::transport(op, e))?;
        // Body is optional; when present it has to be JSON, then it is dropped
        if !body.iter().all(u8::is_ascii_whitespace) {
            serde_json::from_slice::<serde_json::Value>(&body)
                .map_err(|e| ItemError::transport(op, e))?;
        }
        Ok(())
    }
}
