// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Custom type-caster registry and signature introspection.
//!
//! A caster converts a value between its storage and in-memory
//! representations. The collaborating framework populates a
//! [`CasterRegistry`] with whatever signatures each caster exposes; the
//! attribute resolver then asks the registry for the caster's effective
//! in-memory type.
//!
//! Signatures use a small grammar parsed with syn:
//!
//! ```text
//! (value: Numeric) -> Money
//! (value: Numeric) -> Money | Numeric
//! ```
//!
//! Introspection order is fixed: `deserialize`'s return type wins, then
//! `cast`'s return type, then the type of `serialize`'s first
//! parameter. `serialize` accepts the in-memory type and returns the
//! persisted one, so its return type is never used.

use std::collections::HashMap;

use syn::{
    Ident, Token, parenthesized,
    parse::{Parse, ParseStream}
};

use crate::{
    error::Error,
    typing::{self, SemanticType}
};

/// One caster method signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSig {
    /// Positional parameters as `(name, type)` pairs.
    pub params: Vec<(String, SemanticType)>,
    /// Return type.
    pub ret:    SemanticType
}

impl MethodSig {
    /// Parse a signature from the `(name: Type, ...) -> Type` grammar.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Signature`] when the text does not match the
    /// grammar.
    pub fn parse(signature: &str) -> Result<Self, Error> {
        syn::parse_str(signature).map_err(|source| {
            Error::Signature {
                signature: signature.to_string(),
                source
            }
        })
    }

    /// Type of the first positional parameter, if any.
    #[must_use]
    pub fn first_param(&self) -> Option<&SemanticType> {
        self.params.first().map(|(_, ty)| ty)
    }
}

impl Parse for MethodSig {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let content;
        parenthesized!(content in input);

        let mut params = Vec::new();
        while !content.is_empty() {
            let name: Ident = content.parse()?;
            content.parse::<Token![:]>()?;
            params.push((name.to_string(), parse_union(&content)?));
            if content.is_empty() {
                break;
            }
            content.parse::<Token![,]>()?;
        }

        input.parse::<Token![->]>()?;
        let ret = parse_union(input)?;
        Ok(Self {
            params,
            ret
        })
    }
}

/// Parse a type, or a `|`-separated union of types.
fn parse_union(input: ParseStream) -> syn::Result<SemanticType> {
    let mut members = vec![typing::from_syn_type(&input.parse::<syn::Type>()?)];
    while input.peek(Token![|]) {
        input.parse::<Token![|]>()?;
        members.push(typing::from_syn_type(&input.parse::<syn::Type>()?));
    }
    if members.len() == 1 {
        Ok(members.remove(0))
    } else {
        Ok(SemanticType::Union(members))
    }
}

/// Signatures one caster exposes.
///
/// Every entry is optional: a caster whose methods carry no inspectable
/// signature contributes nothing and resolves to the untyped fallback.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CasterSig {
    deserialize: Option<MethodSig>,
    cast:        Option<MethodSig>,
    serialize:   Option<MethodSig>
}

impl CasterSig {
    /// A caster with no inspectable signatures.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the `deserialize` signature.
    #[must_use]
    pub fn with_deserialize(mut self, sig: MethodSig) -> Self {
        self.deserialize = Some(sig);
        self
    }

    /// Attach the `cast` signature.
    #[must_use]
    pub fn with_cast(mut self, sig: MethodSig) -> Self {
        self.cast = Some(sig);
        self
    }

    /// Attach the `serialize` signature.
    #[must_use]
    pub fn with_serialize(mut self, sig: MethodSig) -> Self {
        self.serialize = Some(sig);
        self
    }

    /// The caster's effective in-memory type.
    ///
    /// `deserialize` and `cast` return the in-memory type directly;
    /// `serialize` accepts it as its single positional parameter.
    #[must_use]
    pub fn value_type(&self) -> SemanticType {
        if let Some(sig) = &self.deserialize {
            return sig.ret.clone();
        }
        if let Some(sig) = &self.cast {
            return sig.ret.clone();
        }
        if let Some(ty) = self.serialize.as_ref().and_then(MethodSig::first_param) {
            return ty.clone();
        }
        SemanticType::Untyped
    }
}

/// All casters visible to one decoration run, keyed by caster path.
#[derive(Debug, Clone, Default)]
pub struct CasterRegistry {
    entries: HashMap<String, CasterSig>
}

impl CasterRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a caster under its path (e.g. `"Money::Type"`).
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, sig: CasterSig) -> Self {
        self.entries.insert(name.into(), sig);
        self
    }

    /// Look up a caster by path.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CasterSig> {
        self.entries.get(name)
    }
}
