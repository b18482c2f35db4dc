// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use super::client::{ObjectDataOptions, RpcError, SuiQuery, TransactionBlockOptions};
use crate::classify::{filter_by_type, project_ids};
use crate::error::ParseError;
use crate::response::{ObjectResponse, TransactionResponse};
use crate::types::ObjectId;
use sui_hero_kit_config::PackageConfig;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error(transparent)]
    Rpc(#[from] RpcError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Fetch a hero with its content and type.
///
/// Fails with `ObjectNotFound` when the node returns no data for `id`.
pub async fn get_hero<Q: SuiQuery>(query: &Q, id: &ObjectId) -> Result<ObjectResponse, QueryError> {
    let response = query
        .get_object(id, ObjectDataOptions::content_and_type())
        .await?;

    if response.data.is_none() {
        let code = response.error.as_ref().map(|e| e.code.clone());
        tracing::debug!(object_id = %id, code = ?code, "Hero object not found");
        return Err(ParseError::ObjectNotFound {
            object_id: Some(id.to_string()),
            code,
        }
        .into());
    }

    Ok(response)
}

/// Ids of the swords attached to a hero as dynamic object fields.
///
/// Only the first page of dynamic fields is read.
pub async fn get_hero_sword_ids<Q: SuiQuery>(
    query: &Q,
    package: &PackageConfig,
    id: &ObjectId,
) -> Result<Vec<ObjectId>, QueryError> {
    let page = query.get_dynamic_fields(id, None, None).await?;

    if page.has_next_page {
        tracing::debug!(
            object_id = %id,
            "Hero has more dynamic fields than one page; only the first page is used"
        );
    }

    let swords = filter_by_type(&page.data, &package.sword_type());
    Ok(project_ids(swords)?)
}

/// Fetch a transaction with its input, effects, object changes and balance changes.
pub async fn get_transaction_changes<Q: SuiQuery>(
    query: &Q,
    digest: &str,
) -> Result<TransactionResponse, QueryError> {
    Ok(query
        .get_transaction_block(digest, TransactionBlockOptions::changes())
        .await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::{DynamicFieldInfo, Page};
    use serde_json::{Value, json};
    use std::collections::HashMap;

    /// In-memory node keyed by object id / digest.
    #[derive(Default)]
    struct FakeNode {
        objects: HashMap<ObjectId, Value>,
        dynamic_fields: HashMap<ObjectId, Value>,
        transactions: HashMap<String, Value>,
    }

    fn decode<T: serde::de::DeserializeOwned>(value: Option<&Value>, method: &str) -> Result<T, RpcError> {
        match value {
            Some(value) => serde_json::from_value(value.clone()).map_err(|source| RpcError::Decode {
                method: method.to_string(),
                source,
            }),
            None => Err(RpcError::Rpc {
                method: method.to_string(),
                code: -32602,
                message: "unknown".to_string(),
            }),
        }
    }

    impl SuiQuery for FakeNode {
        async fn get_object(
            &self,
            id: &ObjectId,
            _options: ObjectDataOptions,
        ) -> Result<ObjectResponse, RpcError> {
            let not_found = json!({ "error": { "code": "notExists", "object_id": id.to_string() } });
            decode(Some(self.objects.get(id).unwrap_or(&not_found)), "sui_getObject")
        }

        async fn get_dynamic_fields(
            &self,
            parent: &ObjectId,
            _cursor: Option<&str>,
            _limit: Option<usize>,
        ) -> Result<Page<DynamicFieldInfo>, RpcError> {
            let empty = json!({ "data": [], "nextCursor": null, "hasNextPage": false });
            decode(Some(self.dynamic_fields.get(parent).unwrap_or(&empty)), "suix_getDynamicFields")
        }

        async fn get_transaction_block(
            &self,
            digest: &str,
            _options: TransactionBlockOptions,
        ) -> Result<TransactionResponse, RpcError> {
            decode(self.transactions.get(digest), "sui_getTransactionBlock")
        }
    }

    fn hero_id() -> ObjectId {
        "0x1f".parse().unwrap()
    }

    fn field(object_type: &str, object_id: &str) -> Value {
        json!({
            "name": { "type": "0x1::string::String", "value": object_id },
            "type": "DynamicObject",
            "objectType": object_type,
            "objectId": object_id,
            "version": 3,
            "digest": "d"
        })
    }

    #[tokio::test]
    async fn test_get_hero() {
        let mut node = FakeNode::default();
        node.objects.insert(
            hero_id(),
            json!({ "data": { "objectId": "0x1f", "version": "1", "digest": "d" } }),
        );

        let response = get_hero(&node, &hero_id()).await.unwrap();
        assert_eq!(response.data.unwrap().object_id, hero_id());
    }

    #[tokio::test]
    async fn test_get_hero_not_found() {
        let node = FakeNode::default();
        let err = get_hero(&node, &hero_id()).await.unwrap_err();
        assert!(matches!(
            err,
            QueryError::Parse(ParseError::ObjectNotFound { code: Some(ref code), .. }) if code == "notExists"
        ));
    }

    #[tokio::test]
    async fn test_get_hero_sword_ids_filters_by_sword_type() {
        let package = PackageConfig::new("0xabc");
        let mut node = FakeNode::default();
        node.dynamic_fields.insert(
            hero_id(),
            json!({
                "data": [
                    field("0xabc::blacksmith::Sword", "0x51"),
                    field("0xabc::hero::Weapon", "0x52"),
                    field("0xdef::blacksmith::Sword", "0x53"),
                    field("0xabc::blacksmith::Sword", "0x54")
                ],
                "nextCursor": "0x54",
                "hasNextPage": true
            }),
        );

        let ids = get_hero_sword_ids(&node, &package, &hero_id()).await.unwrap();
        assert_eq!(ids, vec!["0x51".parse().unwrap(), "0x54".parse().unwrap()]);
    }

    #[tokio::test]
    async fn test_get_hero_sword_ids_without_fields() {
        let node = FakeNode::default();
        let ids = get_hero_sword_ids(&node, &PackageConfig::new("0xabc"), &hero_id())
            .await
            .unwrap();
        assert!(ids.is_empty());
    }

    #[tokio::test]
    async fn test_get_transaction_changes_propagates_rpc_error() {
        let node = FakeNode::default();
        assert!(matches!(
            get_transaction_changes(&node, "missing").await,
            Err(QueryError::Rpc(RpcError::Rpc { .. }))
        ));
    }
}
