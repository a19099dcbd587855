// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Model-level attribute parsing.
//!
//! This module handles parsing of the `#[model(...)]` attribute using
//! darling, and provides the main [`ModelDef`] snapshot consumed by the
//! generator.

use convert_case::{Case, Casing};
use darling::FromMeta;
use syn::{Ident, ItemStruct, Meta};

use super::{alias::AliasSpec, attribute::AttributeOverride};
use crate::error::Error;

/// Arguments of the `#[model(...)]` attribute.
///
/// Internal struct used by darling for parsing; the public API is
/// [`ModelDef`], which combines these arguments with the other
/// declarations on the struct.
#[derive(Debug, Default, FromMeta)]
#[darling(default)]
struct ModelArgs {
    /// Backing table name. Defaults to the naive plural of the
    /// snake-cased struct name.
    table: Option<String>,

    /// Marks a base record that shares configuration with descendants
    /// but is never decorated itself.
    abstract_record: bool
}

/// Complete parsed model definition.
///
/// An immutable snapshot of everything the struct declares. Decoration is
/// a pure function of this snapshot, the schema and the caster registry.
///
/// # Declarations
///
/// | Declaration | Effect |
/// |-------------|--------|
/// | `#[model(table = "...")]` | Backing table |
/// | `#[model(abstract_record)]` | Excluded from decoration |
/// | `#[strong_types]` | Narrow signatures to precise types |
/// | `#[alias("a" => "b")]` | Alternate accessor name |
/// | `#[attribute(name = "...", caster = "...")]` | Custom-typed attribute |
#[derive(Debug, Clone)]
pub struct ModelDef {
    /// Struct identifier (e.g. `Post`).
    pub ident: Ident,

    /// Backing table name (e.g. `"posts"`).
    pub table: String,

    /// Whether this is an abstract base record.
    pub is_abstract: bool,

    /// Whether the strong-typing capability marker is present.
    ///
    /// Without it every generated signature degrades to the untyped
    /// fallback; predicates stay boolean either way.
    pub strong_types: bool,

    /// Declared aliases, in declaration order.
    pub aliases: Vec<AliasSpec>,

    /// Declared custom-typed attributes, in declaration order.
    pub attributes: Vec<AttributeOverride>
}

impl ModelDef {
    /// Whether a struct participates in gathering at all.
    #[must_use]
    pub fn is_model(item: &ItemStruct) -> bool {
        item.attrs.iter().any(|attr| attr.path().is_ident("model"))
    }

    /// Parse a model definition from a struct item.
    ///
    /// # Errors
    ///
    /// Fails when the `#[model(...)]`, `#[alias(...)]` or
    /// `#[attribute(...)]` arguments are malformed.
    pub fn from_item(item: &ItemStruct) -> Result<Self, Error> {
        let mut args = ModelArgs::default();
        let mut strong_types = false;
        let mut aliases = Vec::new();
        let mut attributes = Vec::new();

        for attr in &item.attrs {
            if attr.path().is_ident("model") {
                args = match &attr.meta {
                    Meta::Path(_) => ModelArgs::default(),
                    meta => ModelArgs::from_meta(meta)?
                };
            } else if attr.path().is_ident("strong_types") {
                strong_types = true;
            } else if attr.path().is_ident("alias") {
                aliases.push(attr.parse_args::<AliasSpec>().map_err(Error::Source)?);
            } else if attr.path().is_ident("attribute") {
                attributes.push(AttributeOverride::from_meta(&attr.meta)?);
            }
        }

        let table = args
            .table
            .unwrap_or_else(|| default_table(&item.ident));

        Ok(Self {
            ident: item.ident.clone(),
            table,
            is_abstract: args.abstract_record,
            strong_types,
            aliases,
            attributes
        })
    }

    /// Model name as a string.
    #[must_use]
    pub fn name_str(&self) -> String {
        self.ident.to_string()
    }
}

/// Derive the default table name from the struct identifier.
///
/// Naive pluralization: snake case plus `s`. Pass `table` explicitly where
/// the real table name differs.
fn default_table(ident: &Ident) -> String {
    format!("{}s", ident.to_string().to_case(Case::Snake))
}
