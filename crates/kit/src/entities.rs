// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Typed views of the hero package's objects.

use crate::consts::hero::{BLACKSMITH_MODULE, HERO_MODULE, HERO_STRUCT, SWORD_STRUCT, WEAPON_STRUCT};
use crate::error::ParseError;
use crate::response::ObjectResponse;
use crate::schema::{FieldPath, ObjectSchema, parse_object_fields};
use crate::types::{ObjectId, TypeFilter};
use crate::utils::serde_helpers::{u64_as_string, u64_from_str_or_num};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use sui_hero_kit_config::PackageConfig;

/// A Move struct that can be decoded from object content.
pub trait MoveEntity: DeserializeOwned {
    const MODULE: &'static str;
    const STRUCT: &'static str;

    /// Field layout, without a type constraint.
    fn schema() -> ObjectSchema;

    /// Field layout, constrained to this struct in `package`.
    fn schema_for(package: &PackageConfig) -> ObjectSchema {
        Self::schema().with_type(TypeFilter::exact(
            package.qualified(Self::MODULE, Self::STRUCT),
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub id: ObjectId,
    #[serde(
        serialize_with = "u64_as_string",
        deserialize_with = "u64_from_str_or_num"
    )]
    pub health: u64,
    #[serde(
        serialize_with = "u64_as_string",
        deserialize_with = "u64_from_str_or_num"
    )]
    pub stamina: u64,
}

impl MoveEntity for Hero {
    const MODULE: &'static str = HERO_MODULE;
    const STRUCT: &'static str = HERO_STRUCT;

    fn schema() -> ObjectSchema {
        ObjectSchema::new()
            .field("id", FieldPath::new(["id", "id"]))
            .field("health", FieldPath::new(["health"]))
            .field("stamina", FieldPath::new(["stamina"]))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    pub id: ObjectId,
    pub name: String,
    #[serde(
        serialize_with = "u64_as_string",
        deserialize_with = "u64_from_str_or_num"
    )]
    pub attack: u64,
}

impl MoveEntity for Weapon {
    const MODULE: &'static str = HERO_MODULE;
    const STRUCT: &'static str = WEAPON_STRUCT;

    fn schema() -> ObjectSchema {
        ObjectSchema::new()
            .field("id", FieldPath::new(["id", "id"]))
            .field("name", FieldPath::new(["name"]))
            .field("attack", FieldPath::new(["attack"]))
    }
}

/// Sword forged by the blacksmith module and attached to heroes as a dynamic field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sword {
    pub id: ObjectId,
    #[serde(
        serialize_with = "u64_as_string",
        deserialize_with = "u64_from_str_or_num"
    )]
    pub attack: u64,
}

impl MoveEntity for Sword {
    const MODULE: &'static str = BLACKSMITH_MODULE;
    const STRUCT: &'static str = SWORD_STRUCT;

    fn schema() -> ObjectSchema {
        ObjectSchema::new()
            .field("id", FieldPath::new(["id", "id"]))
            .field("attack", FieldPath::new(["attack"]))
    }
}

/// Decode `T` from a `sui_getObject` response using `schema`.
pub fn parse_entity_with<T: MoveEntity>(
    response: &ObjectResponse,
    schema: &ObjectSchema,
) -> Result<T, ParseError> {
    parse_object_fields(response, schema)?.decode()
}

/// Decode `T` from a `sui_getObject` response, without checking the type.
pub fn parse_entity<T: MoveEntity>(response: &ObjectResponse) -> Result<T, ParseError> {
    parse_entity_with(response, &T::schema())
}

/// Map the content of a hero object to a [`Hero`].
pub fn parse_hero_content(response: &ObjectResponse) -> Result<Hero, ParseError> {
    parse_entity(response)
}
