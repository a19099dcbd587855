// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Semantic types and the storage-to-semantic mapping table.
//!
//! A [`SemanticType`] is the logical type exposed in generated signatures.
//! The mapper turns a physical [`StorageType`] into one, honoring the
//! time-zone-aware setting; everything it cannot place maps to the untyped
//! fallback so a single unrecognized column never aborts decoration of the
//! whole class.

use std::fmt;

use tracing::trace;

use crate::{config::GeneratorConfig, schema::StorageType};

/// Logical type appearing in a generated method signature.
///
/// `Known`, `Untyped` and `Union` are value types; `Nilable`, `Pair` and
/// `Void` are the shape constructors the method-set synthesizer builds
/// signatures out of.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SemanticType {
    /// A named type, rendered verbatim (e.g. `i64`, `String`, `Money`).
    Known(String),
    /// The dynamic fallback, rendered as `Value`.
    Untyped,
    /// A disjunction of member types, rendered `A | B`.
    Union(Vec<SemanticType>),
    /// An optional value, rendered `Option<T>`.
    Nilable(Box<SemanticType>),
    /// A two-element ordered pair, rendered `(A, B)`.
    Pair(Box<SemanticType>, Box<SemanticType>),
    /// No value, rendered `()`.
    Void
}

impl SemanticType {
    /// A named type.
    #[must_use]
    pub fn known(name: impl Into<String>) -> Self {
        Self::Known(name.into())
    }

    /// The boolean type used by every predicate method.
    #[must_use]
    pub fn boolean() -> Self {
        Self::known("bool")
    }

    /// Wrap a type in the optional constructor.
    ///
    /// Collapsing invariants: an optional untyped value is still untyped,
    /// and wrapping an already-optional type is a no-op.
    #[must_use]
    pub fn nilable(inner: Self) -> Self {
        match inner {
            Self::Untyped => Self::Untyped,
            nilable @ Self::Nilable(_) => nilable,
            other => Self::Nilable(Box::new(other))
        }
    }

    /// Build a two-element pair.
    #[must_use]
    pub fn pair(left: Self, right: Self) -> Self {
        Self::Pair(Box::new(left), Box::new(right))
    }

    /// Whether this is the untyped fallback.
    #[must_use]
    pub fn is_untyped(&self) -> bool {
        matches!(self, Self::Untyped)
    }
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(name) => f.write_str(name),
            Self::Untyped => f.write_str("Value"),
            Self::Union(members) => {
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" | ")?;
                    }
                    write!(f, "{member}")?;
                }
                Ok(())
            }
            Self::Nilable(inner) => write!(f, "Option<{inner}>"),
            Self::Pair(left, right) => write!(f, "({left}, {right})"),
            Self::Void => f.write_str("()")
        }
    }
}

/// Map a physical column type to its semantic output type.
///
/// Fixed table, with the time-zone-aware substitution applied uniformly to
/// all three date/time storage variants:
///
/// | storage | semantic |
/// |---------|----------|
/// | integer | `i64` |
/// | string | `String` |
/// | date | `NaiveDate` |
/// | decimal | `BigDecimal` |
/// | float | `f64` |
/// | boolean | `bool` |
/// | datetime / time / timestamp | `NaiveDateTime`, or `DateTime<Utc>` when time-zone aware |
/// | anything else | untyped |
#[must_use]
pub fn column_type(storage: &StorageType, config: &GeneratorConfig) -> SemanticType {
    match storage {
        StorageType::Integer => SemanticType::known("i64"),
        StorageType::String => SemanticType::known("String"),
        StorageType::Date => SemanticType::known("NaiveDate"),
        StorageType::Decimal => SemanticType::known("BigDecimal"),
        StorageType::Float => SemanticType::known("f64"),
        StorageType::Boolean => SemanticType::boolean(),
        StorageType::DateTime | StorageType::Time | StorageType::Timestamp => {
            if config.time_zone_aware {
                SemanticType::known("DateTime<Utc>")
            } else {
                SemanticType::known("NaiveDateTime")
            }
        }
        StorageType::Other(tag) => {
            trace!(%tag, "unmapped storage type, falling back to untyped");
            SemanticType::Untyped
        }
    }
}

/// Convert a parsed Rust type into a semantic type.
///
/// Plain type paths become [`SemanticType::Known`]. A path carrying generic
/// arguments is an opaque payload and becomes untyped rather than being
/// expanded, as does any non-path type.
#[must_use]
pub fn from_syn_type(ty: &syn::Type) -> SemanticType {
    match ty {
        syn::Type::Path(type_path) => {
            let parameterized = type_path
                .path
                .segments
                .iter()
                .any(|segment| !segment.arguments.is_empty());
            if parameterized {
                return SemanticType::Untyped;
            }
            let name = type_path
                .path
                .segments
                .iter()
                .map(|segment| segment.ident.to_string())
                .collect::<Vec<_>>()
                .join("::");
            SemanticType::Known(name)
        }
        syn::Type::Paren(inner) => from_syn_type(&inner.elem),
        syn::Type::Tuple(tuple) if tuple.elems.is_empty() => SemanticType::Void,
        _ => SemanticType::Untyped
    }
}
