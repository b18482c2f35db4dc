// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Serde adapters for numbers the RPC sends either as JSON numbers or as
//! decimal strings (u64 values are usually stringified).

use serde::{Deserialize, Deserializer, Serializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrU64 {
    String(String),
    Number(u64),
}

/// Deserialize a `u64` from `"42"` or `42`.
pub fn u64_from_str_or_num<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match StringOrU64::deserialize(deserializer)? {
        StringOrU64::String(s) => s.parse().map_err(serde::de::Error::custom),
        StringOrU64::Number(n) => Ok(n),
    }
}

/// Serialize a `u64` as a decimal string, the way the RPC renders it.
pub fn u64_as_string<S>(value: &u64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_string())
}

/// Serialize an `i128` as a decimal string.
pub fn i128_as_string<S>(value: &i128, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_string())
}

/// Serialize an `Option<i128>` as a decimal string or `null`.
pub fn option_i128_as_string<S>(value: &Option<i128>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(value) => i128_as_string(value, serializer),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Deserialize)]
    struct Version {
        #[serde(deserialize_with = "u64_from_str_or_num")]
        version: u64,
    }

    #[derive(Serialize)]
    struct Delta {
        #[serde(serialize_with = "i128_as_string")]
        amount: i128,
    }

    #[test]
    fn test_u64_from_string() {
        let v: Version = serde_json::from_str(r#"{"version":"18446744073709551615"}"#).unwrap();
        assert_eq!(v.version, u64::MAX);
    }

    #[test]
    fn test_u64_from_number() {
        let v: Version = serde_json::from_str(r#"{"version":12}"#).unwrap();
        assert_eq!(v.version, 12);
    }

    #[test]
    fn test_u64_rejects_garbage() {
        assert!(serde_json::from_str::<Version>(r#"{"version":"twelve"}"#).is_err());
        assert!(serde_json::from_str::<Version>(r#"{"version":-1}"#).is_err());
    }

    #[test]
    fn test_i128_as_string() {
        let json = serde_json::to_string(&Delta { amount: -5 }).unwrap();
        assert_eq!(json, r#"{"amount":"-5"}"#);
    }
}
