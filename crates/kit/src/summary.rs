// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! What a hero transaction did: the objects it minted and how much SUI moved.

use crate::classify::{CreatedObjects, sui_balance_change};
use crate::error::ParseError;
use crate::response::TransactionResponse;
use crate::utils::serde_helpers::{i128_as_string, option_i128_as_string};
use serde::Serialize;
use std::path::{Path, PathBuf};
use sui_hero_kit_config::PackageConfig;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("Failed to read transaction file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode transaction file '{path}': {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionSummary {
    pub digest: String,
    pub succeeded: bool,
    pub sender: String,
    #[serde(flatten)]
    pub created: CreatedObjects,
    #[serde(rename = "senderSUIBalanceChange", serialize_with = "i128_as_string")]
    pub sender_balance_change: i128,
    #[serde(
        rename = "recipientSUIBalanceChange",
        skip_serializing_if = "Option::is_none",
        serialize_with = "option_i128_as_string"
    )]
    pub recipient_balance_change: Option<i128>,
}

/// Summarize `response` for the hero package.
///
/// `sender` overrides the sender reported in the transaction input; one of
/// the two must be present. The recipient delta is only computed when a
/// recipient is given.
pub fn summarize_transaction(
    response: &TransactionResponse,
    package: &PackageConfig,
    sender: Option<&str>,
    recipient: Option<&str>,
) -> Result<TransactionSummary, ParseError> {
    let sender = sender
        .or_else(|| response.sender())
        .ok_or_else(|| ParseError::shape("transaction.data.sender", "missing key"))?;

    let balance_changes = response.balance_changes();
    let sender_balance_change = sui_balance_change(balance_changes, sender)?;
    let recipient_balance_change = recipient
        .map(|recipient| sui_balance_change(balance_changes, recipient))
        .transpose()?;

    Ok(TransactionSummary {
        digest: response.digest.clone(),
        succeeded: response.succeeded(),
        sender: sender.to_string(),
        created: CreatedObjects::from_changes(response.object_changes(), package),
        sender_balance_change,
        recipient_balance_change,
    })
}

/// Read a `sui_getTransactionBlock` response saved as JSON.
pub fn load_transaction_file(path: impl AsRef<Path>) -> Result<TransactionResponse, SummaryError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| SummaryError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| SummaryError::Decode {
        path: path.to_path_buf(),
        source,
    })
}
