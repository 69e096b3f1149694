//! Option resolution for substitution rules.
//!
//! Options are merged in three layers: hard defaults, then the job's global
//! options, then each rule's local options. Resolution is pure and returns a
//! fresh value every call; nothing is shared between jobs.
//!
//! License: MIT OR Apache-2.0

use serde::Deserialize;

use crate::errors::ResubError;

/// Default bypass delimiter.
pub const DEFAULT_BYPASS: char = '|';

/// Wire-level option set as it appears in YAML/JSON config files.
///
/// Every field is optional so that a partial set overlays cleanly on the
/// layer below it. Keys are camelCase on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubOptions {
    /// Match letter case exactly. Default: false.
    pub case_sensitive: Option<bool>,
    /// Mirror the matched text's casing in the replacement. Default: true.
    pub match_case: Option<bool>,
    /// Only match the term as a complete word. Default: true.
    pub isolated_word: Option<bool>,
    /// Bypass delimiter; must be exactly one character. Default: `"|"`.
    pub bypass: Option<String>,
}

/// Fully-populated options after the merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOptions {
    pub case_sensitive: bool,
    pub match_case: bool,
    pub isolated_word: bool,
    pub bypass: char,
}

impl Default for ResolvedOptions {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            match_case: true,
            isolated_word: true,
            bypass: DEFAULT_BYPASS,
        }
    }
}

/// Flags handed to the pattern engine.
///
/// Application is always global (every occurrence in the text); only case
/// sensitivity varies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchFlags {
    pub case_insensitive: bool,
}

impl ResolvedOptions {
    /// Derives the pattern-engine flags for these options.
    pub fn match_flags(&self) -> MatchFlags {
        MatchFlags {
            case_insensitive: !self.case_sensitive,
        }
    }
}

/// Overlays `local` on top of already-resolved `base` options.
///
/// The global layer is produced by resolving the job's options against
/// `ResolvedOptions::default()`; each rule's layer resolves against that.
/// A `bypass` value that is not exactly one character is a config error.
pub fn resolve(
    local: Option<&SubOptions>,
    base: &ResolvedOptions,
) -> Result<ResolvedOptions, ResubError> {
    let mut resolved = base.clone();
    if let Some(local) = local {
        if let Some(v) = local.case_sensitive {
            resolved.case_sensitive = v;
        }
        if let Some(v) = local.match_case {
            resolved.match_case = v;
        }
        if let Some(v) = local.isolated_word {
            resolved.isolated_word = v;
        }
        if let Some(b) = &local.bypass {
            resolved.bypass = single_char(b)?;
        }
    }
    Ok(resolved)
}

fn single_char(s: &str) -> Result<char, ResubError> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ResubError::Config(
            "bypass option needs to be a one-character string".to_string(),
        )),
    }
}
