// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Crate error type.
//!
//! Only the parsing front end is fallible. Decoration itself never fails:
//! unknown storage types, opaque casters and unresolvable aliases all
//! degrade silently instead of aborting the class being decorated.

use thiserror::Error;

/// Errors produced while parsing model source or caster signatures.
#[derive(Debug, Error)]
pub enum Error {
    /// The model source is not syntactically valid.
    #[error("failed to parse model source: {0}")]
    Source(#[from] syn::Error),

    /// A `#[model(...)]` or `#[attribute(...)]` attribute is malformed.
    #[error("invalid model attribute: {0}")]
    Attribute(#[from] darling::Error),

    /// A caster method signature does not match the
    /// `(name: Type, ...) -> Type` grammar.
    #[error("invalid caster signature `{signature}`: {source}")]
    Signature {
        /// The offending signature text.
        signature: String,
        /// Underlying parse failure.
        source:    syn::Error
    }
}
