// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Classification of heterogeneous response records.
//!
//! Query responses hand back lists of records tagged with a Move type
//! (dynamic fields, object changes, balance changes). The helpers here filter
//! those lists by type and project them into ids or balance totals. They are
//! pure: inputs are never mutated, output order follows input order, and
//! records that do not match are dropped without error.

use crate::consts::SUI_COIN_TYPE;
use crate::error::ParseError;
use crate::response::{BalanceChange, DynamicFieldInfo, ObjectChange};
use crate::types::{ObjectId, SuiAddress, TypeFilter};
use crate::utils::serde_helpers::i128_as_string;
use crate::utils::{checked_sum, parse_amount};
use serde::Serialize;
use serde_json::Value;
use std::borrow::Cow;
use sui_hero_kit_config::PackageConfig;

/// A record carrying a string type discriminant.
pub trait TaggedRecord {
    /// Type used for classification; `None` means the record never matches.
    fn discriminant(&self) -> Option<&str>;

    /// Object id carried by the record, or why it could not be read.
    fn record_id(&self) -> Result<ObjectId, String>;
}

impl TaggedRecord for DynamicFieldInfo {
    fn discriminant(&self) -> Option<&str> {
        Some(self.object_type.as_str())
    }

    fn record_id(&self) -> Result<ObjectId, String> {
        Ok(self.object_id)
    }
}

impl TaggedRecord for ObjectChange {
    fn discriminant(&self) -> Option<&str> {
        self.object_type()
    }

    fn record_id(&self) -> Result<ObjectId, String> {
        Ok(self.object_id())
    }
}

/// Untyped records: the discriminant is `objectType`, falling back to `type`.
impl TaggedRecord for Value {
    fn discriminant(&self) -> Option<&str> {
        self.get("objectType")
            .and_then(Value::as_str)
            .or_else(|| self.get("type").and_then(Value::as_str))
    }

    fn record_id(&self) -> Result<ObjectId, String> {
        let raw = self
            .get("objectId")
            .ok_or_else(|| "missing objectId".to_string())?
            .as_str()
            .ok_or_else(|| "objectId is not a string".to_string())?;
        raw.parse().map_err(|e| format!("invalid objectId: {}", e))
    }
}

/// A record describing a balance change for one owner and coin type.
pub trait BalanceRecord {
    fn coin_type(&self) -> Option<&str>;
    fn owner_address(&self) -> Option<&str>;
    /// Signed decimal amount as transmitted
    fn amount(&self) -> Option<Cow<'_, str>>;
}

impl BalanceRecord for BalanceChange {
    fn coin_type(&self) -> Option<&str> {
        Some(self.coin_type.as_str())
    }

    fn owner_address(&self) -> Option<&str> {
        self.owner.address()
    }

    fn amount(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.amount.as_str()))
    }
}

/// Untyped balance records: `{coinType, owner, amount}` where `owner` is
/// either a bare address or `{"AddressOwner": ..}`.
impl BalanceRecord for Value {
    fn coin_type(&self) -> Option<&str> {
        self.get("coinType").and_then(Value::as_str)
    }

    fn owner_address(&self) -> Option<&str> {
        let owner = self.get("owner")?;
        owner
            .as_str()
            .or_else(|| owner.get("AddressOwner").and_then(Value::as_str))
    }

    fn amount(&self) -> Option<Cow<'_, str>> {
        match self.get("amount")? {
            Value::String(s) => Some(Cow::Borrowed(s.as_str())),
            Value::Number(n) if n.is_i64() || n.is_u64() => Some(Cow::Owned(n.to_string())),
            _ => None,
        }
    }
}

/// Stable subsequence of `records` whose discriminant equals `type_id`.
pub fn filter_by_type<'a, R: TaggedRecord>(records: &'a [R], type_id: &str) -> Vec<&'a R> {
    filter_by(records, &TypeFilter::exact(type_id))
}

/// Stable subsequence of `records` whose discriminant satisfies `filter`.
pub fn filter_by<'a, R: TaggedRecord>(records: &'a [R], filter: &TypeFilter) -> Vec<&'a R> {
    let matched: Vec<&R> = records
        .iter()
        .filter(|record| record.discriminant().is_some_and(|t| filter.matches(t)))
        .collect();

    tracing::debug!(
        filter = %filter,
        total = records.len(),
        matched = matched.len(),
        "Filtered records by type"
    );

    matched
}

/// Object ids of `records`, in order.
///
/// Fails with `MalformedRecord` on the first record without a readable id;
/// the index is the record's position in `records`.
pub fn project_ids<'a, R, I>(records: I) -> Result<Vec<ObjectId>, ParseError>
where
    R: TaggedRecord + 'a,
    I: IntoIterator<Item = &'a R>,
{
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            record
                .record_id()
                .map_err(|reason| ParseError::MalformedRecord { index, reason })
        })
        .collect()
}

/// Ids of objects of `type_id` created by a transaction.
///
/// Transferred, mutated, wrapped and deleted objects of the same type are
/// not included.
pub fn created_object_ids(changes: &[ObjectChange], type_id: &str) -> Vec<ObjectId> {
    filter_by_type(changes, type_id)
        .into_iter()
        .filter(|change| change.is_created())
        .map(ObjectChange::object_id)
        .collect()
}

/// Heroes and swords minted by a transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedObjects {
    pub heroes_ids: Vec<ObjectId>,
    pub swords_ids: Vec<ObjectId>,
}

impl CreatedObjects {
    pub fn from_changes(changes: &[ObjectChange], package: &PackageConfig) -> Self {
        let heroes_ids = created_object_ids(changes, &package.hero_type());
        let swords_ids = created_object_ids(changes, &package.sword_type());

        tracing::debug!(
            heroes = heroes_ids.len(),
            swords = swords_ids.len(),
            "Parsed created objects"
        );

        Self {
            heroes_ids,
            swords_ids,
        }
    }
}

/// Addresses compare equal as strings, or as parsed addresses when both
/// sides parse (so `0x7` matches its 64-digit form).
fn same_owner(a: &str, b: &str) -> bool {
    if a == b {
        return true;
    }
    match (a.parse::<SuiAddress>(), b.parse::<SuiAddress>()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Net change of `coin_type` for `owner` across `records`.
///
/// Zero when nothing matches. Amounts are summed exactly as `i128`; a matched
/// record with a missing or non-integer amount is an error, not a zero.
pub fn sum_by_owner<R: BalanceRecord>(
    records: &[R],
    coin_type: &str,
    owner: &str,
) -> Result<i128, ParseError> {
    let mut amounts = Vec::new();

    for (index, record) in records.iter().enumerate() {
        if record.coin_type() != Some(coin_type) {
            continue;
        }
        if !record.owner_address().is_some_and(|o| same_owner(o, owner)) {
            continue;
        }

        let raw = record.amount().ok_or_else(|| ParseError::MalformedRecord {
            index,
            reason: "missing or non-integer amount".to_string(),
        })?;
        let amount = parse_amount(&raw).map_err(|source| ParseError::InvalidAmount { index, source })?;
        amounts.push(amount);
    }

    let matched = amounts.len();
    let total = checked_sum(amounts).map_err(|_| ParseError::AmountOverflow {
        owner: owner.to_string(),
    })?;

    tracing::debug!(coin_type, owner, matched, total = %total, "Summed balance changes");
    Ok(total)
}

/// Net SUI change for `owner`.
pub fn sui_balance_change<R: BalanceRecord>(records: &[R], owner: &str) -> Result<i128, ParseError> {
    sum_by_owner(records, SUI_COIN_TYPE, owner)
}

/// SUI deltas of the two parties of a transfer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceDeltas {
    #[serde(rename = "senderSUIBalanceChange", serialize_with = "i128_as_string")]
    pub sender: i128,
    #[serde(rename = "recipientSUIBalanceChange", serialize_with = "i128_as_string")]
    pub recipient: i128,
}

impl BalanceDeltas {
    pub fn from_changes<R: BalanceRecord>(
        records: &[R],
        sender: &str,
        recipient: &str,
    ) -> Result<Self, ParseError> {
        Ok(Self {
            sender: sui_balance_change(records, sender)?,
            recipient: sui_balance_change(records, recipient)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tagged(records: Value) -> Vec<Value> {
        serde_json::from_value(records).unwrap()
    }

    fn created(object_type: &str, object_id: &str) -> Value {
        json!({
            "type": "created",
            "sender": "0x7",
            "owner": { "AddressOwner": "0x7" },
            "objectType": object_type,
            "objectId": object_id,
            "version": "3",
            "digest": "d"
        })
    }

    #[test]
    fn test_filter_then_project() {
        let records = tagged(json!([
            { "type": "A", "objectId": "0x1" },
            { "type": "B", "objectId": "0x2" },
            { "type": "A", "objectId": "0x3" }
        ]));

        let matched = filter_by_type(&records, "A");
        assert_eq!(matched, vec![&records[0], &records[2]]);

        let ids = project_ids(matched).unwrap();
        assert_eq!(ids, vec!["0x1".parse().unwrap(), "0x3".parse().unwrap()]);
    }

    #[test]
    fn test_filter_with_complement_is_a_permutation() {
        let records = tagged(json!([
            { "type": "A" }, { "type": "B" }, { "type": "A" }, { "objectType": "C" }, {}
        ]));

        let matched = filter_by_type(&records, "A");
        let rest: Vec<&Value> = records
            .iter()
            .filter(|r| r.discriminant() != Some("A"))
            .collect();

        assert!(matched.iter().all(|r| r.discriminant() == Some("A")));
        assert_eq!(matched.len() + rest.len(), records.len());
        for record in &records {
            assert!(matched.contains(&record) || rest.contains(&record));
        }
    }

    #[test]
    fn test_filter_empty_input() {
        let records: Vec<Value> = Vec::new();
        assert!(filter_by_type(&records, "A").is_empty());
    }

    #[test]
    fn test_filter_prefers_object_type_over_type() {
        let records = vec![created("0xabc::hero::Hero", "0x1")];
        assert_eq!(filter_by_type(&records, "0xabc::hero::Hero").len(), 1);
        assert!(filter_by_type(&records, "created").is_empty());
    }

    #[test]
    fn test_filter_by_prefix() {
        let records = tagged(json!([
            { "objectType": "0x2::coin::Coin<0x2::sui::SUI>" },
            { "objectType": "0xabc::hero::Hero" },
            { "objectType": "0x2::coin::Coin<0xabc::gold::GOLD>" }
        ]));
        let coins = filter_by(&records, &TypeFilter::prefix("0x2::coin::Coin<"));
        assert_eq!(coins, vec![&records[0], &records[2]]);
    }

    #[test]
    fn test_project_ids_missing_id() {
        let records = tagged(json!([
            { "type": "A", "objectId": "0x1" },
            { "type": "A" }
        ]));
        assert_eq!(
            project_ids(&records).unwrap_err(),
            ParseError::MalformedRecord {
                index: 1,
                reason: "missing objectId".to_string(),
            }
        );
    }

    #[test]
    fn test_project_ids_invalid_id() {
        let records = tagged(json!([{ "type": "A", "objectId": "hero-1" }]));
        assert!(matches!(
            project_ids(&records),
            Err(ParseError::MalformedRecord { index: 0, .. })
        ));
    }

    #[test]
    fn test_created_object_ids_skips_other_changes() {
        let changes: Vec<ObjectChange> = serde_json::from_value(json!([
            created("0xabc::hero::Hero", "0x1"),
            {
                "type": "mutated",
                "sender": "0x7",
                "owner": { "AddressOwner": "0x7" },
                "objectType": "0xabc::hero::Hero",
                "objectId": "0x2",
                "version": "3",
                "digest": "d"
            },
            created("0xabc::blacksmith::Sword", "0x3"),
            created("0xabc::hero::Hero", "0x4")
        ]))
        .unwrap();

        let ids = created_object_ids(&changes, "0xabc::hero::Hero");
        assert_eq!(ids, vec!["0x1".parse().unwrap(), "0x4".parse().unwrap()]);

        let created = CreatedObjects::from_changes(&changes, &PackageConfig::new("0xabc"));
        assert_eq!(created.heroes_ids, ids);
        assert_eq!(created.swords_ids, vec!["0x3".parse().unwrap()]);
    }

    #[test]
    fn test_created_objects_serialization() {
        let created = CreatedObjects {
            heroes_ids: vec!["0x1".parse().unwrap()],
            swords_ids: vec![],
        };
        let json = serde_json::to_value(&created).unwrap();
        assert_eq!(json["swordsIds"], json!([]));
        assert_eq!(json["heroesIds"].as_array().unwrap().len(), 1);
    }

    fn balances() -> Vec<Value> {
        tagged(json!([
            { "coinType": "X", "owner": "alice", "amount": "100" },
            { "coinType": "X", "owner": "bob", "amount": "50" },
            { "coinType": "Y", "owner": "alice", "amount": "999" }
        ]))
    }

    #[test]
    fn test_sum_by_owner_filters_coin_and_owner() {
        assert_eq!(sum_by_owner(&balances(), "X", "alice").unwrap(), 100);
        assert_eq!(sum_by_owner(&balances(), "X", "bob").unwrap(), 50);
        assert_eq!(sum_by_owner(&balances(), "Y", "alice").unwrap(), 999);
    }

    #[test]
    fn test_sum_by_owner_no_match_is_zero() {
        assert_eq!(sum_by_owner(&balances(), "X", "carol").unwrap(), 0);
        assert_eq!(sum_by_owner(&balances(), "Z", "alice").unwrap(), 0);
        let empty: Vec<Value> = Vec::new();
        assert_eq!(sum_by_owner(&empty, "X", "alice").unwrap(), 0);
    }

    #[test]
    fn test_sum_by_owner_is_order_independent() {
        let mut records = tagged(json!([
            { "coinType": "X", "owner": "alice", "amount": "-30" },
            { "coinType": "X", "owner": "alice", "amount": "100" },
            { "coinType": "X", "owner": "bob", "amount": "7" },
            { "coinType": "X", "owner": "alice", "amount": "5" }
        ]));
        let forward = sum_by_owner(&records, "X", "alice").unwrap();
        records.reverse();
        assert_eq!(sum_by_owner(&records, "X", "alice").unwrap(), forward);
        records.rotate_left(1);
        assert_eq!(sum_by_owner(&records, "X", "alice").unwrap(), forward);
        assert_eq!(forward, 75);
    }

    #[test]
    fn test_sum_by_owner_near_i128_bounds_is_order_independent() {
        let amounts = [i128::MAX.to_string(), "1".to_string(), "-1".to_string()];
        let orders = [[0, 1, 2], [0, 2, 1], [1, 0, 2], [1, 2, 0], [2, 0, 1], [2, 1, 0]];

        for order in orders {
            let records: Vec<Value> = order
                .iter()
                .map(|&i| json!({ "coinType": "X", "owner": "alice", "amount": amounts[i] }))
                .collect();
            assert_eq!(
                sum_by_owner(&records, "X", "alice").unwrap(),
                i128::MAX,
                "order {:?}",
                order
            );
        }

        let records = tagged(json!([
            { "coinType": "X", "owner": "alice", "amount": i128::MAX.to_string() },
            { "coinType": "X", "owner": "alice", "amount": "1" }
        ]));
        assert!(matches!(
            sum_by_owner(&records, "X", "alice"),
            Err(ParseError::AmountOverflow { .. })
        ));
    }

    #[test]
    fn test_null_object_type_falls_back_to_type() {
        let records = tagged(json!([
            { "type": "A", "objectType": null, "objectId": "0x1" },
            { "type": "B", "objectId": "0x2" }
        ]));
        let matched = filter_by_type(&records, "A");
        assert_eq!(matched.len(), 1);
        assert_eq!(project_ids(matched).unwrap(), vec!["0x1".parse::<ObjectId>().unwrap()]);
    }

    #[test]
    fn test_sum_by_owner_is_exact_beyond_f64() {
        let records = tagged(json!([
            { "coinType": "X", "owner": "alice", "amount": "9007199254740993" },
            { "coinType": "X", "owner": "alice", "amount": "18446744073709551615" }
        ]));
        assert_eq!(
            sum_by_owner(&records, "X", "alice").unwrap(),
            9_007_199_254_740_993i128 + u64::MAX as i128
        );
    }

    #[test]
    fn test_sum_by_owner_invalid_amount() {
        let records = tagged(json!([
            { "coinType": "X", "owner": "bob", "amount": "oops" },
            { "coinType": "X", "owner": "alice", "amount": "1.5" }
        ]));
        // bob's record does not match and is never parsed
        assert!(matches!(
            sum_by_owner(&records, "X", "alice"),
            Err(ParseError::InvalidAmount { index: 1, .. })
        ));
    }

    #[test]
    fn test_sum_by_owner_missing_amount() {
        let records = tagged(json!([{ "coinType": "X", "owner": "alice" }]));
        assert!(matches!(
            sum_by_owner(&records, "X", "alice"),
            Err(ParseError::MalformedRecord { index: 0, .. })
        ));
    }

    #[test]
    fn test_sum_by_owner_numeric_amount() {
        let records = tagged(json!([{ "coinType": "X", "owner": "alice", "amount": -12 }]));
        assert_eq!(sum_by_owner(&records, "X", "alice").unwrap(), -12);
    }

    #[test]
    fn test_sum_by_owner_overflow() {
        let max = i128::MAX.to_string();
        let records = tagged(json!([
            { "coinType": "X", "owner": "alice", "amount": max },
            { "coinType": "X", "owner": "alice", "amount": "1" }
        ]));
        assert_eq!(
            sum_by_owner(&records, "X", "alice").unwrap_err(),
            ParseError::AmountOverflow {
                owner: "alice".to_string()
            }
        );
    }

    #[test]
    fn test_balance_deltas_from_typed_changes() {
        let sender = format!("0x{}7", "0".repeat(63));
        let changes: Vec<BalanceChange> = serde_json::from_value(json!([
            { "owner": { "AddressOwner": sender }, "coinType": SUI_COIN_TYPE, "amount": "-1002000" },
            { "owner": { "AddressOwner": "0x9" }, "coinType": SUI_COIN_TYPE, "amount": "1000000" },
            { "owner": { "ObjectOwner": "0x7" }, "coinType": SUI_COIN_TYPE, "amount": "5" },
            { "owner": { "AddressOwner": "0x9" }, "coinType": "0xabc::gold::GOLD", "amount": "42" }
        ]))
        .unwrap();

        // short and long forms of the sender address both match
        let deltas = BalanceDeltas::from_changes(&changes, "0x7", "0x9").unwrap();
        assert_eq!(deltas.sender, -1_002_000);
        assert_eq!(deltas.recipient, 1_000_000);

        let json = serde_json::to_value(deltas).unwrap();
        assert_eq!(json["senderSUIBalanceChange"], json!("-1002000"));
        assert_eq!(json["recipientSUIBalanceChange"], json!("1000000"));
    }
}
