//! Replacement strategies.
//!
//! Two ways of producing the replacement text for a match: the
//! case-preserving path, which mirrors the matched text's casing onto a
//! literal template, and the backreference path, which expands `$N` markers
//! with captured group values. Which one runs is decided per rule by the
//! driver: the backreference path is taken when the template carries a
//! marker or `matchCase` is off.
//!
//! License: MIT OR Apache-2.0

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Probe for a backreference marker: `$` immediately followed by a digit.
static BACKREF_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$\d").unwrap());

/// True if `template` contains a positional backreference marker.
pub fn has_backref(template: &str) -> bool {
    BACKREF_MARKER.is_match(template)
}

/// Rewrites `replacement` so its casing mirrors `matched`.
///
/// Three tiers, checked in order: an all-caps match upper-cases the whole
/// replacement; a match starting with a capital capitalizes only the
/// replacement's first character, leaving the rest as supplied; anything
/// else lower-cases the replacement.
pub fn preserve_case(matched: &str, replacement: &str) -> String {
    if matched == matched.to_uppercase() {
        return replacement.to_uppercase();
    }
    if starts_upper(matched) {
        return capitalize(replacement);
    }
    replacement.to_lowercase()
}

fn starts_upper(s: &str) -> bool {
    match s.chars().next() {
        Some(c) => c.to_uppercase().to_string() == c.to_string(),
        None => false,
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Expands `$N` markers in `template` with captured group values.
///
/// Numbering follows the compiled matcher: group 1 is the matcher's own
/// wrap of the whole term, so the first group the rule author wrote is
/// addressed as `$2`, the second as `$3`, and so on. Each marker is
/// substituted once, at its first occurrence. A term with no groups of its
/// own uses the template as written.
pub fn expand_backrefs(caps: &Captures<'_>, template: &str) -> String {
    if caps.len() <= 2 {
        return template.to_string();
    }
    let mut expanded = template.to_string();
    for i in 2..caps.len() {
        if let Some(group) = caps.get(i) {
            expanded = expanded.replacen(&format!("${}", i), group.as_str(), 1);
        }
    }
    expanded
}
