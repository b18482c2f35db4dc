// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Identifier and type-tag wrappers shared by the response models
//!
//! Every object id, address and Move type string that crosses the library
//! boundary goes through one of these types so that formatting and
//! normalisation live in a single place.

pub mod id;
pub mod type_tag;

pub use id::{IdParseError, ObjectId, SuiAddress};
pub use type_tag::{StructTag, TypeFilter, TypeTagError};
