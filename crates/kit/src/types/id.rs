// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Byte length of object ids and addresses.
pub const ID_LENGTH: usize = 32;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum IdParseError {
    #[error("Identifier '{0}' must start with 0x")]
    MissingPrefix(String),

    #[error("Identifier '{0}' has no hex digits")]
    Empty(String),

    #[error("Identifier '{value}' is longer than {max} hex digits")]
    TooLong { value: String, max: usize },

    #[error("Identifier '{value}' is not valid hex: {source}")]
    InvalidHex {
        value: String,
        #[source]
        source: hex::FromHexError,
    },
}

/// Parse `0x`-prefixed hex, left-padding short forms such as `0x2` to 32 bytes.
fn parse_id_bytes(s: &str) -> Result<[u8; ID_LENGTH], IdParseError> {
    let hex_str = s
        .strip_prefix("0x")
        .ok_or_else(|| IdParseError::MissingPrefix(s.to_string()))?;

    if hex_str.is_empty() {
        return Err(IdParseError::Empty(s.to_string()));
    }
    if hex_str.len() > ID_LENGTH * 2 {
        return Err(IdParseError::TooLong {
            value: s.to_string(),
            max: ID_LENGTH * 2,
        });
    }

    let padded = format!("{:0>width$}", hex_str, width = ID_LENGTH * 2);
    let mut bytes = [0u8; ID_LENGTH];
    hex::decode_to_slice(&padded, &mut bytes).map_err(|source| IdParseError::InvalidHex {
        value: s.to_string(),
        source,
    })?;

    Ok(bytes)
}

/// Defines a 32-byte identifier newtype rendered as `0x` + 64 lowercase hex.
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name([u8; ID_LENGTH]);

        impl $name {
            pub const fn new(bytes: [u8; ID_LENGTH]) -> Self {
                Self(bytes)
            }

            pub fn as_bytes(&self) -> &[u8; ID_LENGTH] {
                &self.0
            }
        }

        impl From<[u8; ID_LENGTH]> for $name {
            fn from(bytes: [u8; ID_LENGTH]) -> Self {
                Self(bytes)
            }
        }

        impl FromStr for $name {
            type Err = IdParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse_id_bytes(s).map(Self)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "0x{}", hex::encode(self.0))
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(&self.to_string())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

define_id!(
    /// Identifier of an on-chain object (also used for package ids).
    ObjectId
);

define_id!(
    /// Account address.
    SuiAddress
);

impl From<SuiAddress> for ObjectId {
    fn from(address: SuiAddress) -> Self {
        Self(address.0)
    }
}

impl From<ObjectId> for SuiAddress {
    fn from(id: ObjectId) -> Self {
        Self(id.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = "0x00000000000000000000000000000000000000000000000000000000000000a2";

    #[test]
    fn test_short_form_is_padded() {
        let id: ObjectId = "0xa2".parse().unwrap();
        assert_eq!(id.to_string(), FULL);
        assert_eq!(id, FULL.parse().unwrap());
    }

    #[test]
    fn test_display_is_lowercase() {
        let id: ObjectId = "0xABCDEF".parse().unwrap();
        assert!(id.to_string().ends_with("abcdef"));
        assert_eq!(id.to_string().len(), 66);
    }

    #[test]
    fn test_missing_prefix() {
        assert!(matches!(
            "a2".parse::<ObjectId>(),
            Err(IdParseError::MissingPrefix(_))
        ));
    }

    #[test]
    fn test_empty() {
        assert!(matches!(
            "0x".parse::<SuiAddress>(),
            Err(IdParseError::Empty(_))
        ));
    }

    #[test]
    fn test_too_long() {
        let value = format!("0x{}", "1".repeat(65));
        assert!(matches!(
            value.parse::<ObjectId>(),
            Err(IdParseError::TooLong { max: 64, .. })
        ));
    }

    #[test]
    fn test_invalid_hex() {
        assert!(matches!(
            "0xnothex".parse::<ObjectId>(),
            Err(IdParseError::InvalidHex { .. })
        ));
    }

    #[test]
    fn test_hex_errors_compare_by_value() {
        let first = "0xnothex".parse::<ObjectId>().unwrap_err();
        assert_eq!(first.clone(), first);
        assert_ne!(first, "0xzz".parse::<ObjectId>().unwrap_err());
    }

    #[test]
    fn test_serde_roundtrip_uses_canonical_form() {
        let id: ObjectId = serde_json::from_str("\"0xa2\"").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), format!("\"{}\"", FULL));
    }

    #[test]
    fn test_address_object_id_conversion() {
        let address: SuiAddress = "0x5".parse().unwrap();
        let id = ObjectId::from(address);
        assert_eq!(id.to_string(), address.to_string());
    }
}
