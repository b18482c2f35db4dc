// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use thiserror::Error;

/// Longest hex body of a 32-byte object id.
const MAX_HEX_LEN: usize = 64;

#[derive(Debug, Error)]
pub enum PackageError {
    #[error("{var} must start with 0x, got '{value}'")]
    MissingPrefix { var: &'static str, value: String },

    #[error("{var} is not a valid object id: '{value}'")]
    InvalidId { var: &'static str, value: String },
}

/// On-chain identifiers of the published hero package and its shared objects.
#[derive(Debug, Clone)]
pub struct PackageConfig {
    /// Published package
    ///
    /// Env: PACKAGE_ID (required)
    pub package_id: String,

    /// Transfer policy object
    ///
    /// Env: POLICY_ID
    pub policy_id: Option<String>,

    /// Package holding the `Display` definitions
    ///
    /// Env: DISPLAY_PACKAGE_ID
    pub display_package_id: Option<String>,

    /// `Publisher` object created on publish
    ///
    /// Env: PUBLISHER_ID
    pub publisher_id: Option<String>,

    /// Shared heroes registry
    ///
    /// Env: HEROES_REGISTRY_ID
    pub heroes_registry_id: Option<String>,

    /// Shared version object
    ///
    /// Env: VERSION_ID
    pub version_id: Option<String>,
}

impl PackageConfig {
    pub fn new(package_id: impl Into<String>) -> Self {
        Self {
            package_id: package_id.into(),
            policy_id: None,
            display_package_id: None,
            publisher_id: None,
            heroes_registry_id: None,
            version_id: None,
        }
    }

    /// Fully-qualified name of a type or function in this package.
    pub fn qualified(&self, module: &str, name: &str) -> String {
        format!("{}::{}::{}", self.package_id, module, name)
    }

    pub fn hero_type(&self) -> String {
        self.qualified("hero", "Hero")
    }

    pub fn weapon_type(&self) -> String {
        self.qualified("hero", "Weapon")
    }

    pub fn sword_type(&self) -> String {
        self.qualified("blacksmith", "Sword")
    }

    pub(crate) fn validate(&self) -> Result<(), PackageError> {
        validate_id("PACKAGE_ID", &self.package_id)?;

        let optional = [
            ("POLICY_ID", &self.policy_id),
            ("DISPLAY_PACKAGE_ID", &self.display_package_id),
            ("PUBLISHER_ID", &self.publisher_id),
            ("HEROES_REGISTRY_ID", &self.heroes_registry_id),
            ("VERSION_ID", &self.version_id),
        ];
        for (var, value) in optional {
            if let Some(value) = value {
                validate_id(var, value)?;
            }
        }

        Ok(())
    }
}

fn validate_id(var: &'static str, value: &str) -> Result<(), PackageError> {
    let Some(hex) = value.strip_prefix("0x") else {
        return Err(PackageError::MissingPrefix {
            var,
            value: value.to_string(),
        });
    };

    if hex.is_empty() || hex.len() > MAX_HEX_LEN || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(PackageError::InvalidId {
            var,
            value: value.to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_names() {
        let config = PackageConfig::new("0xabc");
        assert_eq!(config.hero_type(), "0xabc::hero::Hero");
        assert_eq!(config.weapon_type(), "0xabc::hero::Weapon");
        assert_eq!(config.sword_type(), "0xabc::blacksmith::Sword");
        assert_eq!(config.qualified("hero", "mint_hero"), "0xabc::hero::mint_hero");
    }

    #[test]
    fn test_validate_valid() {
        let mut config = PackageConfig::new("0x2");
        config.version_id = Some("0xdeadbeef".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_missing_prefix() {
        let config = PackageConfig::new("abc");
        assert!(matches!(
            config.validate(),
            Err(PackageError::MissingPrefix { var: "PACKAGE_ID", .. })
        ));
    }

    #[test]
    fn test_validate_bare_prefix() {
        let config = PackageConfig::new("0x");
        assert!(matches!(
            config.validate(),
            Err(PackageError::InvalidId { .. })
        ));
    }

    #[test]
    fn test_validate_non_hex() {
        let config = PackageConfig::new("0xzz");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_too_long() {
        let config = PackageConfig::new(format!("0x{}", "a".repeat(65)));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_optional_id() {
        let mut config = PackageConfig::new("0x2");
        config.heroes_registry_id = Some("registry".to_string());
        assert!(matches!(
            config.validate(),
            Err(PackageError::MissingPrefix {
                var: "HEROES_REGISTRY_ID",
                ..
            })
        ));
    }
}
