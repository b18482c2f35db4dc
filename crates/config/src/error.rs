// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration from environment: {0}")]
    EnvError(#[from] envy::Error),

    #[error("Failed to read .env file: {0}")]
    EnvFileError(#[from] dotenv::Error),

    #[error("Sui configuration error: {0}")]
    SuiError(#[from] crate::sui::SuiError),

    #[error("Package configuration error: {0}")]
    PackageError(#[from] crate::package::PackageError),

    #[error("Invalid configuration: {0}")]
    ValidateError(String),
}
