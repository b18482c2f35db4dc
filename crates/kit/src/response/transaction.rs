// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use super::Owner;
use crate::types::ObjectId;
use crate::utils::serde_helpers::u64_from_str_or_num;
use serde::Deserialize;

/// Creation, mutation or deletion of an object as a side effect of a transaction.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ObjectChange {
    Published {
        package_id: ObjectId,
        #[serde(deserialize_with = "u64_from_str_or_num")]
        version: u64,
        digest: String,
        #[serde(default)]
        modules: Vec<String>,
    },
    Transferred {
        sender: String,
        recipient: Owner,
        object_type: String,
        object_id: ObjectId,
        #[serde(deserialize_with = "u64_from_str_or_num")]
        version: u64,
        digest: String,
    },
    Mutated {
        sender: String,
        owner: Owner,
        object_type: String,
        object_id: ObjectId,
        #[serde(deserialize_with = "u64_from_str_or_num")]
        version: u64,
        digest: String,
    },
    Deleted {
        sender: String,
        object_type: String,
        object_id: ObjectId,
        #[serde(deserialize_with = "u64_from_str_or_num")]
        version: u64,
    },
    Wrapped {
        sender: String,
        object_type: String,
        object_id: ObjectId,
        #[serde(deserialize_with = "u64_from_str_or_num")]
        version: u64,
    },
    Created {
        sender: String,
        owner: Owner,
        object_type: String,
        object_id: ObjectId,
        #[serde(deserialize_with = "u64_from_str_or_num")]
        version: u64,
        digest: String,
    },
}

impl ObjectChange {
    /// Move type of the changed object; packages have none.
    pub fn object_type(&self) -> Option<&str> {
        match self {
            ObjectChange::Published { .. } => None,
            ObjectChange::Transferred { object_type, .. }
            | ObjectChange::Mutated { object_type, .. }
            | ObjectChange::Deleted { object_type, .. }
            | ObjectChange::Wrapped { object_type, .. }
            | ObjectChange::Created { object_type, .. } => Some(object_type.as_str()),
        }
    }

    /// Id of the changed object, or of the package for `published`.
    pub fn object_id(&self) -> ObjectId {
        match self {
            ObjectChange::Published { package_id, .. } => *package_id,
            ObjectChange::Transferred { object_id, .. }
            | ObjectChange::Mutated { object_id, .. }
            | ObjectChange::Deleted { object_id, .. }
            | ObjectChange::Wrapped { object_id, .. }
            | ObjectChange::Created { object_id, .. } => *object_id,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, ObjectChange::Created { .. })
    }
}

/// Net change of one coin type's balance for one owner.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceChange {
    pub owner: Owner,
    pub coin_type: String,
    /// Signed decimal string
    pub amount: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionStatusKind {
    Success,
    Failure,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExecutionStatus {
    pub status: ExecutionStatusKind,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TransactionEffects {
    pub status: ExecutionStatus,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TransactionData {
    pub sender: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TransactionBlock {
    pub data: TransactionData,
}

/// Response of `sui_getTransactionBlock` / `sui_executeTransactionBlock`.
///
/// Every section is optional because the node only includes what the
/// request options asked for.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResponse {
    pub digest: String,
    #[serde(default)]
    pub transaction: Option<TransactionBlock>,
    #[serde(default)]
    pub effects: Option<TransactionEffects>,
    #[serde(default)]
    pub object_changes: Option<Vec<ObjectChange>>,
    #[serde(default)]
    pub balance_changes: Option<Vec<BalanceChange>>,
}

impl TransactionResponse {
    /// `true` only when effects were returned and report success.
    pub fn succeeded(&self) -> bool {
        self.effects
            .as_ref()
            .is_some_and(|effects| effects.status.status == ExecutionStatusKind::Success)
    }

    /// Sender, when the response includes the transaction input.
    pub fn sender(&self) -> Option<&str> {
        self.transaction.as_ref().map(|tx| tx.data.sender.as_str())
    }

    pub fn object_changes(&self) -> &[ObjectChange] {
        self.object_changes.as_deref().unwrap_or_default()
    }

    pub fn balance_changes(&self) -> &[BalanceChange] {
        self.balance_changes.as_deref().unwrap_or_default()
    }
}
