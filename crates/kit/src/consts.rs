// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Well-known on-chain names.

/// Coin type of the native gas coin, as the fullnode reports it in balance changes.
pub const SUI_COIN_TYPE: &str = "0x2::sui::SUI";

/// Move module and type names of the hero bootcamp package.
pub mod hero {
    pub const HERO_MODULE: &str = "hero";
    pub const BLACKSMITH_MODULE: &str = "blacksmith";

    pub const HERO_STRUCT: &str = "Hero";
    pub const WEAPON_STRUCT: &str = "Weapon";
    pub const SWORD_STRUCT: &str = "Sword";
}

/// JSON-RPC method names.
pub mod rpc {
    pub const GET_OBJECT: &str = "sui_getObject";
    pub const GET_DYNAMIC_FIELDS: &str = "suix_getDynamicFields";
    pub const GET_TRANSACTION_BLOCK: &str = "sui_getTransactionBlock";
}
