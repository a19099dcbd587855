// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Signature generation pipeline.
//!
//! Data flows one direction: schema and DSL state through attribute and
//! alias resolution, into method-set synthesis, out through the emitter.
//! Decorating one model is a pure function of its snapshot, the schema,
//! the caster registry and the generator configuration.

pub mod alias;
pub mod emit;
pub mod methods;
pub mod resolve;

use self::emit::Decoration;
use crate::{
    caster::CasterRegistry, config::GeneratorConfig, model::ModelDef, render, schema::Schema
};

/// Decorates models with their generated-methods namespace.
pub struct Generator<'a> {
    schema:  &'a Schema,
    casters: &'a CasterRegistry,
    config:  GeneratorConfig
}

impl<'a> Generator<'a> {
    /// Create a generator over one snapshot of schema and caster state.
    #[must_use]
    pub fn new(schema: &'a Schema, casters: &'a CasterRegistry, config: GeneratorConfig) -> Self {
        Self {
            schema,
            casters,
            config
        }
    }

    /// Decorate one model.
    ///
    /// Never fails: unknown storage types, opaque casters and colliding
    /// aliases degrade per attribute instead of aborting the class. A
    /// model with nothing to resolve yields an empty namespace.
    #[must_use]
    pub fn decorate(&self, model: &ModelDef) -> Decoration {
        let descriptors = resolve::resolve(model, self.schema, self.casters, &self.config);
        let aliases = alias::resolve(model, &descriptors);

        let mut signatures = Vec::new();
        for descriptor in &descriptors {
            signatures.extend(methods::synthesize(descriptor, model.strong_types));
        }
        for (alias_name, target) in &aliases {
            signatures.extend(methods::synthesize_alias(
                alias_name,
                target,
                model.strong_types
            ));
        }

        emit::emit(model.name_str(), signatures)
    }

    /// Decorate one model and render the result.
    #[must_use]
    pub fn render(&self, model: &ModelDef) -> String {
        render::render(&self.decorate(model))
    }
}
