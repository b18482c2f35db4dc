// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Read-only access to a fullnode.
//!
//! [`SuiQuery`] is the seam between fetching and parsing: the query helpers
//! in [`queries`] are generic over it, [`SuiRpcClient`] implements it over
//! HTTP JSON-RPC, and tests implement it in memory.

pub mod client;
pub mod queries;

pub use client::{ObjectDataOptions, RpcError, SuiQuery, SuiRpcClient, TransactionBlockOptions};
pub use queries::{QueryError, get_hero, get_hero_sword_ids, get_transaction_changes};
