// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Schema-validated decoding of object content.
//!
//! `sui_getObject` returns Move object content as loosely typed JSON:
//!
//! ```json
//! { "dataType": "moveObject", "type": "0x..::hero::Hero",
//!   "fields": { "id": { "id": "0x.." }, "health": "100" } }
//! ```
//!
//! An [`ObjectSchema`] names the output fields and the path to each inside
//! `fields`. [`parse_object_fields`] walks those paths and fails with
//! `ShapeMismatch` instead of guessing when the content does not line up.

use crate::error::ParseError;
use crate::response::ObjectResponse;
use crate::types::{ObjectId, TypeFilter};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("Invalid field path '{0}': segments must be non-empty")]
    InvalidPath(String),
}

/// Path of keys from the content `fields` object to a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath(Vec<String>);

impl FieldPath {
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }
}

impl FromStr for FieldPath {
    type Err = SchemaError;

    /// Parse a dotted path such as `id.id`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let segments: Vec<&str> = s.split('.').collect();
        if segments.iter().any(|segment| segment.is_empty()) {
            return Err(SchemaError::InvalidPath(s.to_string()));
        }
        Ok(Self::new(segments))
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("."))
    }
}

/// Expected type and field layout of an object.
#[derive(Debug, Clone, Default)]
pub struct ObjectSchema {
    object_type: Option<TypeFilter>,
    fields: Vec<(String, FieldPath)>,
}

impl ObjectSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require the object's Move type to satisfy `filter`.
    pub fn with_type(mut self, filter: impl Into<TypeFilter>) -> Self {
        self.object_type = Some(filter.into());
        self
    }

    /// Add an output field; a later field with the same name replaces the earlier one.
    pub fn field(mut self, name: impl Into<String>, path: FieldPath) -> Self {
        let name = name.into();
        match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = path,
            None => self.fields.push((name, path)),
        }
        self
    }

    pub fn object_type(&self) -> Option<&TypeFilter> {
        self.object_type.as_ref()
    }

    pub fn fields(&self) -> &[(String, FieldPath)] {
        &self.fields
    }
}

impl From<TypeFilter> for ObjectSchema {
    fn from(filter: TypeFilter) -> Self {
        Self::new().with_type(filter)
    }
}

/// Flat record extracted from an object, fields in schema order.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub object_id: ObjectId,
    pub object_type: Option<String>,
    pub fields: Map<String, Value>,
}

impl Entity {
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Decode the flat record into a typed struct.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, ParseError> {
        serde_json::from_value(Value::Object(self.fields.clone()))
            .map_err(|e| ParseError::shape("content.fields", e.to_string()))
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Walk `path` from `fields`.
///
/// Nested Move structs are rendered as `{"type": .., "fields": {..}}`; when a
/// key is not found directly on such a struct, its `fields` are searched, so
/// `weapon.attack` resolves through `weapon.fields.attack`.
fn resolve<'a>(fields: &'a Map<String, Value>, path: &FieldPath) -> Result<&'a Value, ParseError> {
    let mut current = fields;
    let mut walked = String::from("content.fields");
    let segments = path.segments();

    for (i, segment) in segments.iter().enumerate() {
        walked.push('.');
        walked.push_str(segment);

        let value = current
            .get(segment)
            .or_else(|| {
                current
                    .get("fields")
                    .and_then(Value::as_object)
                    .and_then(|nested| nested.get(segment))
            })
            .ok_or_else(|| ParseError::shape(&walked, "missing key"))?;

        if i + 1 == segments.len() {
            return Ok(value);
        }

        current = value.as_object().ok_or_else(|| {
            ParseError::shape(&walked, format!("expected an object, found {}", kind_of(value)))
        })?;
    }

    Err(ParseError::shape(walked, "empty field path"))
}

/// Extract the fields named by `schema` from a `sui_getObject` response.
///
/// Errors:
/// - `ObjectNotFound` when the response has no data payload
/// - `ShapeMismatch` when the content is absent, is not a Move object, has
///   the wrong type, or a schema path does not resolve
pub fn parse_object_fields(
    response: &ObjectResponse,
    schema: &ObjectSchema,
) -> Result<Entity, ParseError> {
    let data = response.require_data()?;

    if let Some(filter) = schema.object_type() {
        let actual = data.move_type().ok_or_else(|| {
            ParseError::shape("type", "object type not in response (request showType)")
        })?;
        if !filter.matches(actual) {
            return Err(ParseError::shape(
                "type",
                format!("expected {}, found {}", filter, actual),
            ));
        }
    }

    let content = data.content.as_ref().ok_or_else(|| {
        ParseError::shape("content", "content not in response (request showContent)")
    })?;

    match content.get("dataType").and_then(Value::as_str) {
        Some("moveObject") => {}
        Some(other) => {
            return Err(ParseError::shape(
                "content.dataType",
                format!("expected moveObject, found {}", other),
            ));
        }
        None => return Err(ParseError::shape("content.dataType", "missing key")),
    }

    let fields = content
        .get("fields")
        .and_then(Value::as_object)
        .ok_or_else(|| ParseError::shape("content.fields", "missing or not an object"))?;

    let mut out = Map::new();
    for (name, path) in schema.fields() {
        let value = resolve(fields, path)?;
        out.insert(name.clone(), value.clone());
    }

    tracing::trace!(
        object_id = %data.object_id,
        fields = out.len(),
        "Parsed object fields"
    );

    Ok(Entity {
        object_id: data.object_id,
        object_type: data.move_type().map(str::to_string),
        fields: out,
    })
}
