// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

mod args;
mod error;
mod log;
mod package;
mod sui;

pub use args::Args;
pub use error::ConfigError;
pub use log::LogConfig;
pub use package::{PackageConfig, PackageError};
pub use sui::{SuiConfig, SuiError, SuiNetwork};

use serde::Deserialize;
use std::path::Path;

/// Raw environment variables, as they appear in the bootcamp `.env` files.
///
/// envy lowercases variable names, so `PACKAGE_ID` lands in `package_id`.
#[derive(Debug, Deserialize)]
struct EnvVars {
    sui_network: Option<String>,
    package_id: String,
    policy_id: Option<String>,
    display_package_id: Option<String>,
    publisher_id: Option<String>,
    heroes_registry_id: Option<String>,
    version_id: Option<String>,
    rpc_timeout_secs: Option<u64>,

    log_level: Option<String>,
    log_json: Option<bool>,
    log_strip_ansi: Option<bool>,
    log_write: Option<bool>,
    log_write_path: Option<String>,
    log_write_max_file_size: Option<u64>,
    log_write_max_files: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct KitConfig {
    pub sui: SuiConfig,
    pub package: PackageConfig,
    pub log: LogConfig,
}

impl KitConfig {
    /// Load `env_file` (if it exists) into the process environment, then read
    /// and validate the configuration.
    pub fn load(env_file: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let env_file = env_file.as_ref();
        if env_file.exists() {
            dotenv::from_path(env_file)?;
        }
        Self::from_env()
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let vars = envy::from_env::<EnvVars>()?;
        Self::from_vars(vars)
    }

    /// Build from explicit key/value pairs instead of the process environment.
    pub fn from_env_iter<I>(iter: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let vars = envy::from_iter::<_, EnvVars>(iter)?;
        Self::from_vars(vars)
    }

    fn from_vars(vars: EnvVars) -> Result<Self, ConfigError> {
        let network = match vars.sui_network {
            Some(raw) => raw.parse::<SuiNetwork>()?,
            None => SuiNetwork::default(),
        };

        let mut sui = SuiConfig {
            network,
            ..Default::default()
        };
        if let Some(timeout) = vars.rpc_timeout_secs {
            sui.rpc_timeout_secs = timeout;
        }

        let package = PackageConfig {
            package_id: vars.package_id,
            policy_id: vars.policy_id,
            display_package_id: vars.display_package_id,
            publisher_id: vars.publisher_id,
            heroes_registry_id: vars.heroes_registry_id,
            version_id: vars.version_id,
        };

        let defaults = LogConfig::default();
        let log = LogConfig {
            level: vars.log_level.unwrap_or(defaults.level),
            json: vars.log_json.unwrap_or(defaults.json),
            strip_ansi: vars.log_strip_ansi.unwrap_or(defaults.strip_ansi),
            write_to_file: vars.log_write.unwrap_or(defaults.write_to_file),
            write_path: vars.log_write_path.unwrap_or(defaults.write_path),
            write_max_file_size: vars
                .log_write_max_file_size
                .unwrap_or(defaults.write_max_file_size),
            write_max_files: vars.log_write_max_files.unwrap_or(defaults.write_max_files),
        };

        let config = Self { sui, package, log };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.sui.validate()?;
        self.package.validate()?;
        self.log.validate()?;
        Ok(())
    }
}
