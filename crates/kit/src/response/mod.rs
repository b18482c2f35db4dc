// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Serde models of the fullnode JSON-RPC responses we consume.
//!
//! Only the fields this crate reads are modelled; everything else in the
//! payload is ignored. Field names follow the camelCase wire format.

pub mod dynamic_field;
pub mod object;
pub mod owner;
pub mod transaction;

pub use dynamic_field::{DynamicFieldInfo, DynamicFieldKind, DynamicFieldName};
pub use object::{ObjectData, ObjectResponse, ObjectResponseError};
pub use owner::Owner;
pub use transaction::{
    BalanceChange, ExecutionStatus, ExecutionStatusKind, ObjectChange, TransactionEffects,
    TransactionResponse,
};

use serde::Deserialize;

/// One page of a paginated query.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub next_cursor: Option<String>,
    #[serde(default)]
    pub has_next_page: bool,
}
