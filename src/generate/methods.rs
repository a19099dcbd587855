// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Method-set synthesis.
//!
//! For every resolved attribute the framework generates a fixed family of
//! accessor, mutator, predicate and dirty-tracking methods. This module
//! derives their names and nullability-aware signatures; it knows nothing
//! about sorting or rendering.

use crate::{generate::resolve::AttributeDescriptor, typing::SemanticType};

/// Which member of the generated family a signature is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodKind {
    /// `name`
    Reader,
    /// `name=`
    Writer,
    /// `name?`
    Predicate,
    /// `name_before_last_save`
    BeforeLastSave,
    /// `name_before_type_cast`
    BeforeTypeCast,
    /// `name_came_from_user?`
    CameFromUser,
    /// `name_change`
    Change,
    /// `name_change_to_be_saved`
    ChangeToBeSaved,
    /// `name_changed?`
    Changed,
    /// `name_in_database`
    InDatabase,
    /// `name_previous_change`
    PreviousChange,
    /// `name_previously_changed?`
    PreviouslyChanged,
    /// `name_previously_was` (canonical attributes only)
    PreviouslyWas,
    /// `name_was`
    Was,
    /// `name_will_change!`
    WillChange,
    /// `restore_name!`
    Restore,
    /// `saved_change_to_name`
    SavedChange,
    /// `saved_change_to_name?`
    SavedChangePredicate,
    /// `will_save_change_to_name?`
    WillSaveChangePredicate
}

/// One generated method signature. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSignature {
    /// Full method name, including any `=`, `?` or `!` suffix.
    pub name:   String,
    /// Family member.
    pub kind:   MethodKind,
    /// Positional parameters as `(name, type)` pairs.
    pub params: Vec<(String, SemanticType)>,
    /// Return type.
    pub ret:    SemanticType
}

/// Synthesize the full method family for a canonical attribute.
#[must_use]
pub fn synthesize(descriptor: &AttributeDescriptor, strong_types: bool) -> Vec<MethodSignature> {
    family(&descriptor.name, descriptor, strong_types, true)
}

/// Synthesize the method family for an alias of `target`.
///
/// Identical to the canonical family except that `_previously_was` is
/// canonical-only and not derived for aliases.
#[must_use]
pub fn synthesize_alias(
    alias_name: &str,
    target: &AttributeDescriptor,
    strong_types: bool
) -> Vec<MethodSignature> {
    family(alias_name, target, strong_types, false)
}

/// Every method name the canonical family derives from `name`.
///
/// Used for alias-collision checks, which only care about names.
#[must_use]
pub fn method_names(name: &str) -> Vec<String> {
    synthesize(&probe(name), false)
        .into_iter()
        .map(|m| m.name)
        .collect()
}

/// Every method name the alias family derives from `name`.
#[must_use]
pub fn alias_method_names(name: &str) -> Vec<String> {
    synthesize_alias(name, &probe(name), false)
        .into_iter()
        .map(|m| m.name)
        .collect()
}

fn probe(name: &str) -> AttributeDescriptor {
    AttributeDescriptor {
        name:       name.to_string(),
        value_type: SemanticType::Untyped,
        nullable:   true
    }
}

fn family(
    name: &str,
    descriptor: &AttributeDescriptor,
    strong_types: bool,
    canonical: bool
) -> Vec<MethodSignature> {
    let base = if strong_types {
        descriptor.value_type.clone()
    } else {
        SemanticType::Untyped
    };

    // Reader and writer follow column nullability; the dirty-tracking
    // helpers may legitimately be empty, so they stay optional no matter
    // what the column says.
    let accessor = if descriptor.nullable {
        SemanticType::nilable(base.clone())
    } else {
        base.clone()
    };
    let tracked = SemanticType::nilable(base.clone());
    let change = change_shape(&base);

    let mut methods = vec![
        method(name, MethodKind::Reader, accessor.clone()),
        MethodSignature {
            name:   format!("{name}="),
            kind:   MethodKind::Writer,
            params: vec![("value".to_string(), accessor.clone())],
            ret:    accessor
        },
        method(&format!("{name}?"), MethodKind::Predicate, SemanticType::boolean()),
        method(
            &format!("{name}_before_last_save"),
            MethodKind::BeforeLastSave,
            tracked.clone()
        ),
        method(
            &format!("{name}_before_type_cast"),
            MethodKind::BeforeTypeCast,
            SemanticType::Untyped
        ),
        method(
            &format!("{name}_came_from_user?"),
            MethodKind::CameFromUser,
            SemanticType::boolean()
        ),
        method(&format!("{name}_change"), MethodKind::Change, change.clone()),
        method(
            &format!("{name}_change_to_be_saved"),
            MethodKind::ChangeToBeSaved,
            change.clone()
        ),
        method(
            &format!("{name}_changed?"),
            MethodKind::Changed,
            SemanticType::boolean()
        ),
        method(
            &format!("{name}_in_database"),
            MethodKind::InDatabase,
            tracked.clone()
        ),
        method(
            &format!("{name}_previous_change"),
            MethodKind::PreviousChange,
            change.clone()
        ),
        method(
            &format!("{name}_previously_changed?"),
            MethodKind::PreviouslyChanged,
            SemanticType::boolean()
        ),
    ];

    if canonical {
        methods.push(method(
            &format!("{name}_previously_was"),
            MethodKind::PreviouslyWas,
            tracked.clone()
        ));
    }

    methods.extend([
        method(&format!("{name}_was"), MethodKind::Was, tracked),
        method(
            &format!("{name}_will_change!"),
            MethodKind::WillChange,
            SemanticType::Void
        ),
        method(&format!("restore_{name}!"), MethodKind::Restore, SemanticType::Void),
        method(
            &format!("saved_change_to_{name}"),
            MethodKind::SavedChange,
            change
        ),
        method(
            &format!("saved_change_to_{name}?"),
            MethodKind::SavedChangePredicate,
            SemanticType::boolean()
        ),
        method(
            &format!("will_save_change_to_{name}?"),
            MethodKind::WillSaveChangePredicate,
            SemanticType::boolean()
        ),
    ]);

    methods
}

fn method(name: &str, kind: MethodKind, ret: SemanticType) -> MethodSignature {
    MethodSignature {
        name: name.to_string(),
        kind,
        params: Vec::new(),
        ret
    }
}

/// Shape of the `_change` family: an optional `(was, now)` pair, each side
/// independently optional. Collapses to untyped along with its base.
fn change_shape(base: &SemanticType) -> SemanticType {
    if base.is_untyped() {
        return SemanticType::Untyped;
    }
    SemanticType::nilable(SemanticType::pair(
        SemanticType::nilable(base.clone()),
        SemanticType::nilable(base.clone())
    ))
}
