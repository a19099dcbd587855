// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Custom-typed attribute declarations.

use darling::FromMeta;

/// An attribute whose value type is controlled by a custom caster.
///
/// Declared on the model struct as:
///
/// ```rust,ignore
/// #[attribute(name = "cost", caster = "Money::Type")]
/// ```
///
/// `caster` names a [`crate::CasterRegistry`] entry. When the attribute
/// shares its name with a column, the caster's type replaces the mapped
/// column type while the column keeps deciding nullability.
#[derive(Debug, Clone, PartialEq, Eq, FromMeta)]
pub struct AttributeOverride {
    /// Attribute name.
    pub name:   String,
    /// Caster registry key.
    pub caster: String
}
