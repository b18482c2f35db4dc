// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::utils::serde_helpers::u64_from_str_or_num;
use serde::Deserialize;

/// Owner of an object or of a balance change.
///
/// Fullnodes send `{"AddressOwner": "0x.."}`, some SDK layers flatten an
/// address owner to the bare string, and immutable objects are the literal
/// `"Immutable"`. All three decode into this enum.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "OwnerRepr")]
pub enum Owner {
    AddressOwner(String),
    ObjectOwner(String),
    Shared { initial_shared_version: u64 },
    Immutable,
}

impl Owner {
    /// The owning account, for address-owned records.
    pub fn address(&self) -> Option<&str> {
        match self {
            Owner::AddressOwner(address) => Some(address.as_str()),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OwnerRepr {
    Plain(String),
    Tagged(TaggedOwner),
}

#[derive(Deserialize)]
enum TaggedOwner {
    AddressOwner(String),
    ObjectOwner(String),
    Shared {
        #[serde(deserialize_with = "u64_from_str_or_num")]
        initial_shared_version: u64,
    },
}

impl From<OwnerRepr> for Owner {
    fn from(repr: OwnerRepr) -> Self {
        match repr {
            OwnerRepr::Plain(s) if s == "Immutable" => Owner::Immutable,
            OwnerRepr::Plain(address) => Owner::AddressOwner(address),
            OwnerRepr::Tagged(TaggedOwner::AddressOwner(address)) => Owner::AddressOwner(address),
            OwnerRepr::Tagged(TaggedOwner::ObjectOwner(id)) => Owner::ObjectOwner(id),
            OwnerRepr::Tagged(TaggedOwner::Shared {
                initial_shared_version,
            }) => Owner::Shared {
                initial_shared_version,
            },
        }
    }
}
