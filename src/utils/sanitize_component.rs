// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 The notepack authors

//! Filesystem-safe path component sanitization.

/// Produce a filesystem-safe path component.
///
/// Transliterates Unicode to ASCII with `deunicode`, keeps ASCII
/// alphanumerics plus `-`, `_`, and `.`, maps everything else to `_`,
/// collapses runs of `_` and `.`, and trims trailing dots. Returns an
/// empty string when nothing usable remains; callers supply their own
/// fallback.
pub fn sanitize_component(value: &str) -> String {
    let transliterated = deunicode::deunicode(value);
    let mut out = String::with_capacity(transliterated.len());
    let mut last: Option<char> = None;

    for ch in transliterated.chars() {
        let mapped = if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' || ch == '.' {
            ch
        } else {
            '_'
        };

        // Collapse runs of `_` and `.` so names stay readable.
        if (mapped == '_' || mapped == '.') && last == Some(mapped) {
            continue;
        }
        out.push(mapped);
        last = Some(mapped);
    }

    // Avoid a stray underscore immediately before a dot.
    while let Some(pos) = out.find("_.") {
        out.remove(pos);
    }

    while out.ends_with('.') || out.ends_with('_') {
        out.pop();
    }

    if out == "." || out == ".." {
        return String::new();
    }

    out
}
