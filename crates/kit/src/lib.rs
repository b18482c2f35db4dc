// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod classify;
pub mod consts;
pub mod entities;
pub mod error;
pub mod logging;
pub mod response;
pub mod rpc;
pub mod schema;
pub mod summary;
pub mod types;
pub mod utils;

pub use error::ParseError;
