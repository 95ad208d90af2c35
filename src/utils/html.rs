// ABOUTME: HTML escaping utilities to prevent XSS in server-rendered templates
// ABOUTME: Provides attribute-safe escaping for values injected into HTML templates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Entity replacement for an HTML-special character, if it needs one
const fn entity(ch: char) -> Option<&'static str> {
    match ch {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#x27;"),
        _ => None,
    }
}

/// Escape a string for safe insertion into HTML attribute values.
///
/// Replaces all five HTML-special characters with their entities. Stricter
/// than the minimal double-quoted-attribute set: values rendered here also
/// land in contexts like `content="2;url=..."`, where attribute breakout and
/// markup injection must both be impossible.
#[must_use]
pub fn escape_html_attribute(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match entity(ch) {
            Some(replacement) => escaped.push_str(replacement),
            None => escaped.push(ch),
        }
    }
    escaped
}
