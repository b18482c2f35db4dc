use crate::fixtures::FixtureLoader;
use serde::de::DeserializeOwned;
use serde_json::json;
use std::path::PathBuf;
use sui_hero_kit::response::{DynamicFieldInfo, ObjectResponse, Page, TransactionResponse};
use sui_hero_kit::rpc::{ObjectDataOptions, RpcError, SuiQuery, TransactionBlockOptions};
use sui_hero_kit::types::ObjectId;

/// `SuiQuery` that answers from recorded responses.
///
/// Layout under the fixtures directory:
/// - `objects/<id>.json`: `sui_getObject` result
/// - `dynamic_fields/<id>.json`: first page of `suix_getDynamicFields`
/// - `transactions/<digest>.json`: `sui_getTransactionBlock` result
///
/// Unknown objects answer like a fullnode does (`notExists`), unknown
/// transactions with an RPC error.
pub struct ReplayNode {
    loader: FixtureLoader,
}

impl ReplayNode {
    pub fn new(loader: FixtureLoader) -> Self {
        Self { loader }
    }

    fn replay<T: DeserializeOwned>(&self, method: &str, path: PathBuf) -> Result<T, RpcError> {
        let value = self.loader.load(&path).map_err(|e| RpcError::Rpc {
            method: method.to_string(),
            code: -32602,
            message: format!("{e:#}"),
        })?;

        serde_json::from_value(value).map_err(|source| RpcError::Decode {
            method: method.to_string(),
            source,
        })
    }
}

impl SuiQuery for ReplayNode {
    async fn get_object(
        &self,
        id: &ObjectId,
        _options: ObjectDataOptions,
    ) -> Result<ObjectResponse, RpcError> {
        let path = PathBuf::from("objects").join(format!("{id}.json"));
        if !self.loader.exists(&path) {
            return serde_json::from_value(
                json!({ "error": { "code": "notExists", "object_id": id.to_string() } }),
            )
            .map_err(|source| RpcError::Decode {
                method: "sui_getObject".to_string(),
                source,
            });
        }
        self.replay("sui_getObject", path)
    }

    async fn get_dynamic_fields(
        &self,
        parent: &ObjectId,
        _cursor: Option<&str>,
        _limit: Option<usize>,
    ) -> Result<Page<DynamicFieldInfo>, RpcError> {
        let path = PathBuf::from("dynamic_fields").join(format!("{parent}.json"));
        if !self.loader.exists(&path) {
            return Ok(Page {
                data: Vec::new(),
                next_cursor: None,
                has_next_page: false,
            });
        }
        self.replay("suix_getDynamicFields", path)
    }

    async fn get_transaction_block(
        &self,
        digest: &str,
        _options: TransactionBlockOptions,
    ) -> Result<TransactionResponse, RpcError> {
        self.replay(
            "sui_getTransactionBlock",
            PathBuf::from("transactions").join(format!("{digest}.json")),
        )
    }
}
