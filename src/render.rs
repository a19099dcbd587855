// SPDX-FileCopyrightText: 2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Declaration rendering.
//!
//! Turns an already-sorted [`Decoration`] into the final interface text:
//! an include stanza for the target class followed by the namespace body,
//! two-space indent, one blank line between methods. The renderer never
//! re-sorts; order is the emitter's contract.

use crate::generate::{emit::Decoration, methods::MethodSignature};

/// Render a decoration into interface-declaration text.
///
/// Output ends with a trailing newline and is byte-identical for
/// identical input.
#[must_use]
pub fn render(decoration: &Decoration) -> String {
    let module = decoration.module_name();

    let mut out = String::new();
    out.push_str(&format!("class {}\n", decoration.class_name));
    out.push_str(&format!("  include {module}\n"));
    out.push_str("end\n\n");

    out.push_str(&format!("module {module}\n"));
    for (index, method) in decoration.methods.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        out.push_str(&format!("  {}\n", method_line(method)));
    }
    out.push_str("end\n");
    out
}

/// One `def` line: `def name(params) -> ret`.
fn method_line(method: &MethodSignature) -> String {
    let params = method
        .params
        .iter()
        .map(|(name, ty)| format!("{name}: {ty}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("def {}({}) -> {}", method.name, params, method.ret)
}
