// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Signature emission.
//!
//! Assembles synthesized signatures into a [`Decoration`]: the synthetic
//! namespace included into the target class, with methods sorted
//! lexicographically by full name so output is byte-stable across runs.
//! Layout is the printer's concern; the emitter only supplies structure
//! and order.

use crate::generate::methods::MethodSignature;

/// The generated-methods namespace for one class.
///
/// Owned by the emitter for the duration of one decoration call; never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoration {
    /// Target class name (e.g. `Post`).
    pub class_name: String,
    /// Method signatures, sorted by name.
    pub methods:    Vec<MethodSignature>
}

impl Decoration {
    /// Name of the synthetic namespace.
    #[must_use]
    pub fn module_name(&self) -> String {
        format!("{}::GeneratedAttributeMethods", self.class_name)
    }
}

/// Build the decoration for `class_name`.
///
/// Sorting is bytewise over the full method name; the `=`, `?` and `!`
/// suffixes are ordinary characters.
#[must_use]
pub fn emit(class_name: impl Into<String>, mut methods: Vec<MethodSignature>) -> Decoration {
    methods.sort_by(|a, b| a.name.cmp(&b.name));
    Decoration {
        class_name: class_name.into(),
        methods
    }
}
