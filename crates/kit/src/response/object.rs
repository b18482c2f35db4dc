// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use super::Owner;
use crate::error::ParseError;
use crate::types::ObjectId;
use crate::utils::serde_helpers::u64_from_str_or_num;
use serde::Deserialize;
use serde_json::Value;

/// Response of `sui_getObject`.
#[derive(Debug, Clone, Deserialize)]
pub struct ObjectResponse {
    #[serde(default)]
    pub data: Option<ObjectData>,
    #[serde(default)]
    pub error: Option<ObjectResponseError>,
}

impl ObjectResponse {
    /// The data payload, or `ObjectNotFound` when the node returned none.
    pub fn require_data(&self) -> Result<&ObjectData, ParseError> {
        self.data.as_ref().ok_or_else(|| ParseError::ObjectNotFound {
            object_id: self.error.as_ref().and_then(|e| e.object_id.clone()),
            code: self.error.as_ref().map(|e| e.code.clone()),
        })
    }
}

/// Error object returned in place of `data`, e.g. `{"code": "notExists", "object_id": "0x.."}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ObjectResponseError {
    pub code: String,
    #[serde(default, alias = "objectId")]
    pub object_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectData {
    pub object_id: ObjectId,
    #[serde(deserialize_with = "u64_from_str_or_num")]
    pub version: u64,
    pub digest: String,
    /// Present when requested with `showType`
    #[serde(rename = "type", default)]
    pub object_type: Option<String>,
    /// Present when requested with `showOwner`
    #[serde(default)]
    pub owner: Option<Owner>,
    /// Present when requested with `showContent`; decoded by [`crate::schema`]
    #[serde(default)]
    pub content: Option<Value>,
}

impl ObjectData {
    /// Move type of the object, from `type` or, failing that, from the content.
    pub fn move_type(&self) -> Option<&str> {
        self.object_type.as_deref().or_else(|| {
            self.content
                .as_ref()
                .and_then(|content| content.get("type"))
                .and_then(Value::as_str)
        })
    }
}
