// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::types::ObjectId;
use crate::utils::serde_helpers::u64_from_str_or_num;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum DynamicFieldKind {
    DynamicField,
    DynamicObject,
}

/// Key a child was attached under, e.g. `{"type": "0x1::string::String", "value": "sword"}`.
#[derive(Debug, Clone, Deserialize)]
pub struct DynamicFieldName {
    #[serde(rename = "type")]
    pub name_type: String,
    pub value: Value,
}

/// One entry of `suix_getDynamicFields`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicFieldInfo {
    pub name: DynamicFieldName,
    #[serde(default)]
    pub bcs_name: Option<String>,
    #[serde(rename = "type")]
    pub kind: DynamicFieldKind,
    pub object_type: String,
    pub object_id: ObjectId,
    #[serde(deserialize_with = "u64_from_str_or_num")]
    pub version: u64,
    pub digest: String,
}
