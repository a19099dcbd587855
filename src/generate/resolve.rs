// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Attribute resolution.
//!
//! Walks a model's column-backed and custom-typed attributes and produces
//! one [`AttributeDescriptor`] per resolvable attribute. Column-backed
//! attributes are resolved first so that later stages (custom overrides,
//! alias-collision checks) see the complete set.

use tracing::debug;

use crate::{
    caster::CasterRegistry,
    config::GeneratorConfig,
    model::ModelDef,
    schema::Schema,
    typing::{self, SemanticType}
};

/// A resolved attribute: name, effective value type and nullability.
///
/// Derived per decoration call, never stored. Names are unique within the
/// owning model's resolved set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeDescriptor {
    /// Attribute name.
    pub name:       String,
    /// Effective in-memory type.
    pub value_type: SemanticType,
    /// Whether the attribute may be absent.
    pub nullable:   bool
}

/// Resolve every attribute of `model`.
///
/// A model whose table is missing from the schema resolves to an empty
/// set; that is not an error, the class simply has nothing to decorate.
#[must_use]
pub fn resolve(
    model: &ModelDef,
    schema: &Schema,
    casters: &CasterRegistry,
    config: &GeneratorConfig
) -> Vec<AttributeDescriptor> {
    let mut descriptors = Vec::new();

    match schema.get(&model.table) {
        Some(table) => {
            for column in table.columns() {
                descriptors.push(AttributeDescriptor {
                    name:       column.name.clone(),
                    value_type: typing::column_type(&column.storage, config),
                    nullable:   column.nullable
                });
            }
        }
        None => {
            debug!(model = %model.ident, table = %model.table, "no table for model");
        }
    }

    for declared in &model.attributes {
        let value_type = match casters.get(&declared.caster) {
            Some(caster) => caster.value_type(),
            None => {
                debug!(
                    attribute = %declared.name,
                    caster = %declared.caster,
                    "caster exposes no introspectable signature"
                );
                SemanticType::Untyped
            }
        };

        // A custom type replaces the mapped column type; the column, when
        // present, keeps deciding nullability.
        match descriptors.iter_mut().find(|d| d.name == declared.name) {
            Some(descriptor) => descriptor.value_type = value_type,
            None => descriptors.push(AttributeDescriptor {
                name: declared.name.clone(),
                value_type,
                nullable: true
            })
        }
    }

    descriptors
}
