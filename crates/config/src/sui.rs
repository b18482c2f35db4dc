// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::ConfigError;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SuiError {
    #[error("SUI_NETWORK cannot be empty")]
    EmptyNetwork,

    #[error("Invalid SUI_NETWORK '{value}': {source}")]
    InvalidUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Invalid URL scheme '{0}'. Must be http:// or https://")]
    InvalidScheme(String),
}

/// Network the fullnode RPC calls are sent to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SuiNetwork {
    #[default]
    Devnet,
    Testnet,
    Mainnet,
    Localnet,
    /// Any other fullnode, given by URL
    Custom(url::Url),
}

impl SuiNetwork {
    /// Fullnode JSON-RPC URL for this network.
    pub fn fullnode_url(&self) -> String {
        match self {
            SuiNetwork::Devnet => "https://fullnode.devnet.sui.io:443".to_string(),
            SuiNetwork::Testnet => "https://fullnode.testnet.sui.io:443".to_string(),
            SuiNetwork::Mainnet => "https://fullnode.mainnet.sui.io:443".to_string(),
            SuiNetwork::Localnet => "http://127.0.0.1:9000".to_string(),
            SuiNetwork::Custom(url) => url.to_string(),
        }
    }
}

impl FromStr for SuiNetwork {
    type Err = SuiError;

    /// Accepts a well-known network name (case-insensitive) or an http(s) URL.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(SuiError::EmptyNetwork);
        }

        match trimmed.to_lowercase().as_str() {
            "devnet" => return Ok(SuiNetwork::Devnet),
            "testnet" => return Ok(SuiNetwork::Testnet),
            "mainnet" => return Ok(SuiNetwork::Mainnet),
            "localnet" => return Ok(SuiNetwork::Localnet),
            _ => {}
        }

        let parsed = url::Url::parse(trimmed).map_err(|source| SuiError::InvalidUrl {
            value: trimmed.to_string(),
            source,
        })?;

        match parsed.scheme() {
            "http" | "https" => Ok(SuiNetwork::Custom(parsed)),
            scheme => Err(SuiError::InvalidScheme(scheme.to_string())),
        }
    }
}

impl fmt::Display for SuiNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuiNetwork::Devnet => f.write_str("devnet"),
            SuiNetwork::Testnet => f.write_str("testnet"),
            SuiNetwork::Mainnet => f.write_str("mainnet"),
            SuiNetwork::Localnet => f.write_str("localnet"),
            SuiNetwork::Custom(url) => write!(f, "{}", url),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SuiConfig {
    /// Fullnode to query
    ///
    /// Env: SUI_NETWORK
    /// Valid values: devnet, testnet, mainnet, localnet, or an http(s):// URL
    /// Default: devnet
    pub network: SuiNetwork,

    /// Timeout for a single RPC request, in seconds
    ///
    /// Env: RPC_TIMEOUT_SECS
    /// Default: 30
    pub rpc_timeout_secs: u64,
}

impl SuiConfig {
    pub fn fullnode_url(&self) -> String {
        self.network.fullnode_url()
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.rpc_timeout_secs == 0 {
            return Err(ConfigError::ValidateError(
                "RPC_TIMEOUT_SECS must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for SuiConfig {
    fn default() -> Self {
        Self {
            network: SuiNetwork::default(),
            rpc_timeout_secs: 30,
        }
    }
}
