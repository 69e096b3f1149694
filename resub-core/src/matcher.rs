//! matcher.rs - Compiles search terms into executable matchers.
//!
//! A literal search term becomes an alternation of two branches. The first
//! branch is the bypass-span exclusion: it consumes `|…|` spans whole, so
//! nothing inside a span can be matched by the term. The second branch
//! wraps the term itself in capture group 1, with `\b` anchors when word
//! isolation is on. Group 1 being unset after a match therefore means the
//! attempt landed on a bypass span and the replacement layer must leave it
//! untouched. Precompiled search terms skip all of this and run verbatim
//! with their own flags.
//!
//! License: MIT OR Apache-2.0

use log::debug;
use regex::RegexBuilder;

use crate::bypass::BypassCodec;
use crate::config::SearchTerm;
use crate::errors::ResubError;
use crate::options::ResolvedOptions;

// 10 MB ceiling for a compiled matcher.
const MATCHER_SIZE_LIMIT: usize = 10 * (1 << 20);

/// An executable matcher for one rule.
#[derive(Debug, Clone)]
pub struct Matcher {
    /// The compiled pattern.
    pub regex: regex::Regex,
    /// True when the rule supplied a precompiled pattern: no bypass
    /// exclusion, no word isolation, native single-invocation replacement.
    pub verbatim: bool,
}

/// Builds the matcher for `search` under `options`, excluding spans
/// delimited by the job's global bypass character.
pub fn build(
    search: &SearchTerm,
    options: &ResolvedOptions,
    codec: &BypassCodec,
) -> Result<Matcher, ResubError> {
    match search {
        SearchTerm::Precompiled(regex) => Ok(Matcher {
            regex: regex.clone(),
            verbatim: true,
        }),
        SearchTerm::Literal(term) => {
            let boundary = if options.isolated_word { r"\b" } else { "" };
            let pattern = format!(
                "{}|{}({}){}",
                codec.exclusion_fragment(),
                boundary,
                term,
                boundary
            );
            let regex = RegexBuilder::new(&pattern)
                .case_insensitive(options.match_flags().case_insensitive)
                .size_limit(MATCHER_SIZE_LIMIT)
                .build()
                .map_err(|e| ResubError::Pattern(term.clone(), e))?;
            debug!("Compiled matcher for '{}' as /{}/", term, regex.as_str());
            Ok(Matcher {
                regex,
                verbatim: false,
            })
        }
    }
}
