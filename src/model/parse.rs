// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Model source parsing.
//!
//! This is the gathering stage: a source file may declare any number of
//! structs, and only those carrying `#[model(...)]` participate. Abstract
//! records are gathered but filtered out by [`processable`] before
//! decoration; a later stage never sees them.

mod alias;
mod attribute;
mod model;

use tracing::debug;

pub use self::{alias::AliasSpec, attribute::AttributeOverride, model::ModelDef};
use crate::error::Error;

/// Parse every model declared in `source`.
///
/// Structs without a `#[model(...)]` attribute are ignored; all other
/// items are irrelevant to gathering. Abstract records are included;
/// filter with [`processable`].
///
/// # Errors
///
/// Fails when the source is not valid Rust syntax or a model attribute is
/// malformed.
pub fn parse_models(source: &str) -> Result<Vec<ModelDef>, Error> {
    let file: syn::File = syn::parse_str(source)?;

    let mut models = Vec::new();
    for item in &file.items {
        if let syn::Item::Struct(item) = item
            && ModelDef::is_model(item)
        {
            models.push(ModelDef::from_item(item)?);
        }
    }
    Ok(models)
}

/// Filter gathered models down to the ones decoration applies to.
///
/// Abstract records declare shared configuration for their descendants and
/// have no table of their own.
#[must_use]
pub fn processable(models: &[ModelDef]) -> Vec<&ModelDef> {
    models
        .iter()
        .filter(|model| {
            if model.is_abstract {
                debug!(model = %model.ident, "skipping abstract record");
                false
            } else {
                true
            }
        })
        .collect()
}
