// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::consts::rpc::{GET_DYNAMIC_FIELDS, GET_OBJECT, GET_TRANSACTION_BLOCK};
use crate::response::{DynamicFieldInfo, ObjectResponse, Page, TransactionResponse};
use crate::types::ObjectId;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use sui_hero_kit_config::SuiConfig;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RpcError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("RPC error {code} from {method}: {message}")]
    Rpc {
        method: String,
        code: i64,
        message: String,
    },

    #[error("Failed to decode {method} response: {source}")]
    Decode {
        method: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{0} returned neither result nor error")]
    EmptyResult(String),
}

/// Which parts of an object the node should include.
#[derive(Debug, Clone, Copy, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectDataOptions {
    pub show_type: bool,
    pub show_content: bool,
    pub show_owner: bool,
    pub show_display: bool,
}

impl ObjectDataOptions {
    pub fn content_and_type() -> Self {
        Self {
            show_type: true,
            show_content: true,
            ..Default::default()
        }
    }
}

/// Which parts of a transaction the node should include.
#[derive(Debug, Clone, Copy, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionBlockOptions {
    pub show_input: bool,
    pub show_effects: bool,
    pub show_events: bool,
    pub show_object_changes: bool,
    pub show_balance_changes: bool,
}

impl TransactionBlockOptions {
    /// Input, effects, object changes and balance changes.
    pub fn changes() -> Self {
        Self {
            show_input: true,
            show_effects: true,
            show_object_changes: true,
            show_balance_changes: true,
            ..Default::default()
        }
    }
}

/// Read-only fullnode queries.
pub trait SuiQuery {
    fn get_object(
        &self,
        id: &ObjectId,
        options: ObjectDataOptions,
    ) -> impl Future<Output = Result<ObjectResponse, RpcError>> + Send;

    /// One page of the dynamic fields attached to `parent`.
    fn get_dynamic_fields(
        &self,
        parent: &ObjectId,
        cursor: Option<&str>,
        limit: Option<usize>,
    ) -> impl Future<Output = Result<Page<DynamicFieldInfo>, RpcError>> + Send;

    fn get_transaction_block(
        &self,
        digest: &str,
        options: TransactionBlockOptions,
    ) -> impl Future<Output = Result<TransactionResponse, RpcError>> + Send;
}

#[derive(Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

#[derive(Deserialize)]
struct RpcEnvelope<T> {
    result: Option<T>,
    error: Option<RpcErrorObject>,
}

/// JSON-RPC 2.0 client for a fullnode.
#[derive(Debug)]
pub struct SuiRpcClient {
    url: String,
    client: Client,
    request_id: AtomicU64,
}

impl SuiRpcClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, RpcError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(RpcError::ClientBuild)?;

        Ok(Self {
            url: url.into(),
            client,
            request_id: AtomicU64::new(1),
        })
    }

    pub fn from_config(config: &SuiConfig) -> Result<Self, RpcError> {
        Self::new(
            config.fullnode_url(),
            Duration::from_secs(config.rpc_timeout_secs),
        )
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Send one JSON-RPC request and decode its `result`.
    pub async fn call<T: DeserializeOwned>(&self, method: &str, params: Value) -> Result<T, RpcError> {
        let id = self.request_id.fetch_add(1, Ordering::Relaxed);
        let body = json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": method,
            "params": params,
        });

        tracing::debug!(method, id, url = %self.url, "Sending RPC request");

        let text = self
            .client
            .post(&self.url)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let envelope: RpcEnvelope<T> =
            serde_json::from_str(&text).map_err(|source| RpcError::Decode {
                method: method.to_string(),
                source,
            })?;

        match envelope {
            RpcEnvelope {
                error: Some(error), ..
            } => {
                tracing::warn!(method, code = error.code, message = %error.message, "RPC returned an error");
                Err(RpcError::Rpc {
                    method: method.to_string(),
                    code: error.code,
                    message: error.message,
                })
            }
            RpcEnvelope {
                result: Some(result),
                ..
            } => Ok(result),
            _ => Err(RpcError::EmptyResult(method.to_string())),
        }
    }
}

impl SuiQuery for SuiRpcClient {
    async fn get_object(
        &self,
        id: &ObjectId,
        options: ObjectDataOptions,
    ) -> Result<ObjectResponse, RpcError> {
        self.call(GET_OBJECT, json!([id, options])).await
    }

    async fn get_dynamic_fields(
        &self,
        parent: &ObjectId,
        cursor: Option<&str>,
        limit: Option<usize>,
    ) -> Result<Page<DynamicFieldInfo>, RpcError> {
        self.call(GET_DYNAMIC_FIELDS, json!([parent, cursor, limit]))
            .await
    }

    async fn get_transaction_block(
        &self,
        digest: &str,
        options: TransactionBlockOptions,
    ) -> Result<TransactionResponse, RpcError> {
        self.call(GET_TRANSACTION_BLOCK, json!([digest, options]))
            .await
    }
}
