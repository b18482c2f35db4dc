// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use super::id::{IdParseError, ObjectId};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TypeTagError {
    #[error("Type '{0}' is not of the form address::module::name")]
    MissingSeparator(String),

    #[error("Invalid package address in type '{value}': {source}")]
    InvalidAddress {
        value: String,
        #[source]
        source: IdParseError,
    },

    #[error("Invalid identifier '{ident}' in type '{value}'")]
    InvalidIdentifier { value: String, ident: String },

    #[error("Unbalanced type parameters in '{0}'")]
    UnbalancedTypeParams(String),
}

/// A type argument of a generic struct.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeParam {
    Struct(StructTag),
    /// Primitive or vector type, compared verbatim
    Other(String),
}

impl fmt::Display for TypeParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeParam::Struct(tag) => write!(f, "{}", tag),
            TypeParam::Other(s) => f.write_str(s),
        }
    }
}

/// Fully-qualified Move struct type, e.g. `0x2::coin::Coin<0x2::sui::SUI>`.
///
/// Equality is structural: `0x2::sui::SUI` and the 64-digit form of the same
/// address compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StructTag {
    pub address: ObjectId,
    pub module: String,
    pub name: String,
    pub type_params: Vec<TypeParam>,
}

impl StructTag {
    pub fn new(address: ObjectId, module: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            address,
            module: module.into(),
            name: name.into(),
            type_params: Vec::new(),
        }
    }

    pub fn with_type_param(mut self, param: TypeParam) -> Self {
        self.type_params.push(param);
        self
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Split `a, b<c, d>, e` on top-level commas.
fn split_type_params(s: &str, whole: &str) -> Result<Vec<String>, TypeTagError> {
    let mut params = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in s.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| TypeTagError::UnbalancedTypeParams(whole.to_string()))?;
            }
            ',' if depth == 0 => {
                params.push(s[start..i].trim().to_string());
                start = i + 1;
            }
            _ => {}
        }
    }

    if depth != 0 {
        return Err(TypeTagError::UnbalancedTypeParams(whole.to_string()));
    }
    params.push(s[start..].trim().to_string());

    if params.iter().any(|p| p.is_empty()) {
        return Err(TypeTagError::UnbalancedTypeParams(whole.to_string()));
    }
    Ok(params)
}

impl FromStr for StructTag {
    type Err = TypeTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        let (head, params) = match s.find('<') {
            Some(open) => {
                let inner = s[open + 1..]
                    .strip_suffix('>')
                    .ok_or_else(|| TypeTagError::UnbalancedTypeParams(s.to_string()))?;
                (&s[..open], Some(inner))
            }
            None => (s, None),
        };

        let parts: Vec<&str> = head.split("::").collect();
        let [address, module, name] = parts.as_slice() else {
            return Err(TypeTagError::MissingSeparator(s.to_string()));
        };

        let address = address
            .parse::<ObjectId>()
            .map_err(|source| TypeTagError::InvalidAddress {
                value: s.to_string(),
                source,
            })?;

        for ident in [module, name] {
            if !is_identifier(ident) {
                return Err(TypeTagError::InvalidIdentifier {
                    value: s.to_string(),
                    ident: ident.to_string(),
                });
            }
        }

        let type_params = match params {
            Some(inner) => split_type_params(inner, s)?
                .into_iter()
                .map(|param| match param.parse::<StructTag>() {
                    Ok(tag) => TypeParam::Struct(tag),
                    Err(_) => TypeParam::Other(param),
                })
                .collect(),
            None => Vec::new(),
        };

        Ok(Self {
            address,
            module: module.to_string(),
            name: name.to_string(),
            type_params,
        })
    }
}

impl fmt::Display for StructTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}::{}", self.address, self.module, self.name)?;
        if !self.type_params.is_empty() {
            let params: Vec<String> = self.type_params.iter().map(|p| p.to_string()).collect();
            write!(f, "<{}>", params.join(", "))?;
        }
        Ok(())
    }
}

/// Predicate over a record's type discriminant.
///
/// An empty type id never matches anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeFilter {
    /// String equality
    Exact(String),
    /// String prefix, e.g. `0x2::coin::Coin<` for every coin
    Prefix(String),
    /// Structural equality after address normalisation
    Struct(StructTag),
}

impl TypeFilter {
    pub fn exact(type_id: impl Into<String>) -> Self {
        TypeFilter::Exact(type_id.into())
    }

    pub fn prefix(prefix: impl Into<String>) -> Self {
        TypeFilter::Prefix(prefix.into())
    }

    pub fn matches(&self, candidate: &str) -> bool {
        match self {
            TypeFilter::Exact(type_id) => !type_id.is_empty() && candidate == type_id,
            TypeFilter::Prefix(prefix) => !prefix.is_empty() && candidate.starts_with(prefix.as_str()),
            TypeFilter::Struct(tag) => candidate
                .parse::<StructTag>()
                .map(|parsed| &parsed == tag)
                .unwrap_or(false),
        }
    }
}

impl From<StructTag> for TypeFilter {
    fn from(tag: StructTag) -> Self {
        TypeFilter::Struct(tag)
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeFilter::Exact(type_id) => f.write_str(type_id),
            TypeFilter::Prefix(prefix) => write!(f, "{}*", prefix),
            TypeFilter::Struct(tag) => write!(f, "{}", tag),
        }
    }
}
