// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod amount;
pub mod serde_helpers;

pub use amount::{AmountError, checked_sum, parse_amount};
