// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Alias declarations.

use syn::{
    LitStr, Token,
    parse::{Parse, ParseStream}
};

/// An alternate attribute name mapped to a canonical one.
///
/// Declared on the model struct as:
///
/// ```rust,ignore
/// #[alias("author" => "name")]
/// ```
///
/// Both sides are strings, not identifiers, because accessor names may
/// carry the `?`, `!` or `=` suffix (`#[alias("body?" => "body")]` is the
/// canonical collision example).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasSpec {
    /// The alternate name.
    pub alias_name:  String,
    /// The canonical attribute it resolves to.
    pub target_name: String
}

impl Parse for AliasSpec {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let alias: LitStr = input.parse()?;
        input.parse::<Token![=>]>()?;
        let target: LitStr = input.parse()?;
        Ok(Self {
            alias_name:  alias.value(),
            target_name: target.value()
        })
    }
}
