// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Alias resolution.
//!
//! Runs after attribute resolution so every canonical attribute is already
//! known. An alias either resolves cleanly to its target descriptor or is
//! dropped in full; no partial method subset is ever emitted for a
//! colliding alias.

use std::collections::HashSet;

use tracing::debug;

use crate::{
    generate::{methods, resolve::AttributeDescriptor},
    model::ModelDef
};

/// Resolve declared aliases against the model's descriptor set.
///
/// Drops aliases whose target does not resolve (external or unsupported)
/// and aliases whose derived method names would collide with a method
/// already generated for the target attribute itself, most commonly an
/// alias ending in the predicate suffix.
#[must_use]
pub fn resolve<'a>(
    model: &ModelDef,
    descriptors: &'a [AttributeDescriptor]
) -> Vec<(String, &'a AttributeDescriptor)> {
    let mut resolved = Vec::new();

    for alias in &model.aliases {
        let Some(target) = descriptors.iter().find(|d| d.name == alias.target_name) else {
            debug!(
                alias = %alias.alias_name,
                target = %alias.target_name,
                "dropping alias with unresolvable target"
            );
            continue;
        };

        let canonical: HashSet<String> = methods::method_names(&target.name).into_iter().collect();
        let collides = methods::alias_method_names(&alias.alias_name)
            .iter()
            .any(|name| canonical.contains(name));
        if collides {
            debug!(
                alias = %alias.alias_name,
                target = %alias.target_name,
                "dropping alias colliding with generated method"
            );
            continue;
        }

        resolved.push((alias.alias_name.clone(), target));
    }

    resolved
}
