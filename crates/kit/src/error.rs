// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use thiserror::Error;

/// Failures raised while extracting data from an already-fetched response.
///
/// None of these are transient: they mean the response does not carry what
/// the caller asked for, or its shape has drifted from what we decode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error(
        "Object not found: {} ({})",
        .object_id.as_deref().unwrap_or("unknown id"),
        .code.as_deref().unwrap_or("no data in response")
    )]
    ObjectNotFound {
        object_id: Option<String>,
        code: Option<String>,
    },

    #[error("Malformed record at index {index}: {reason}")]
    MalformedRecord { index: usize, reason: String },

    #[error("Shape mismatch at '{path}': {reason}")]
    ShapeMismatch { path: String, reason: String },

    #[error("Invalid amount at index {index}: {source}")]
    InvalidAmount {
        index: usize,
        #[source]
        source: crate::utils::AmountError,
    },

    #[error("Balance sum for owner {owner} overflowed")]
    AmountOverflow { owner: String },
}

impl ParseError {
    pub(crate) fn shape(path: impl Into<String>, reason: impl Into<String>) -> Self {
        ParseError::ShapeMismatch {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
