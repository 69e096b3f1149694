//! engine.rs - The substitution driver.
//!
//! A job runs as a straight line: resolve global options, compile every
//! rule, apply the rules in submission order over the evolving text, then
//! strip bypass delimiters. Any failure aborts the whole job before any
//! text is touched; a partial result is never returned.
//!
//! The engine holds no mutable state. Once constructed it can be applied
//! to any number of independent texts, from any number of threads.
//!
//! License: MIT OR Apache-2.0

use std::fmt;
use std::sync::Arc;

use log::debug;
use regex::Captures;

use crate::bypass::BypassCodec;
use crate::config::{ReplaceFn, Replacement, SearchTerm, Sub, SubstitutionConfig};
use crate::errors::ResubError;
use crate::matcher::{self, Matcher};
use crate::options::{self, ResolvedOptions};
use crate::replacer;

/// Replacement strategy chosen for one rule at compile time.
#[derive(Clone)]
enum Strategy {
    /// Literal template; casing mirrored from the matched text.
    MatchCase(String),
    /// Template applied as written, `$N` markers expanded positionally.
    Expand(String),
    /// Caller-supplied callback; its return value is used verbatim.
    Callback(Arc<ReplaceFn>),
}

/// One rule, ready to run.
struct CompiledSub {
    matcher: Matcher,
    strategy: Strategy,
}

impl CompiledSub {
    fn apply(&self, text: &str) -> String {
        if self.matcher.verbatim {
            // Precompiled pattern: native single-invocation find/replace,
            // template semantics included.
            return match &self.strategy {
                Strategy::Callback(f) => self
                    .matcher
                    .regex
                    .replace(text, |caps: &Captures<'_>| f(caps))
                    .into_owned(),
                Strategy::MatchCase(template) | Strategy::Expand(template) => self
                    .matcher
                    .regex
                    .replace(text, template.as_str())
                    .into_owned(),
            };
        }

        self.matcher
            .regex
            .replace_all(text, |caps: &Captures<'_>| {
                match caps.get(1) {
                    // The bypass-span branch matched; restore it verbatim.
                    None => caps[0].to_string(),
                    Some(term) => match &self.strategy {
                        Strategy::MatchCase(template) => {
                            replacer::preserve_case(term.as_str(), template)
                        }
                        Strategy::Expand(template) => replacer::expand_backrefs(caps, template),
                        Strategy::Callback(f) => f(caps),
                    },
                }
            })
            .into_owned()
    }
}

/// A fully-compiled substitution job, reusable across any number of texts.
pub struct SubstitutionEngine {
    codec: BypassCodec,
    rules: Vec<CompiledSub>,
}

impl SubstitutionEngine {
    /// Compiles `config` into an engine.
    ///
    /// All configuration and pattern errors surface here; `substitute`
    /// itself cannot fail.
    pub fn new(config: &SubstitutionConfig) -> Result<Self, ResubError> {
        let global = options::resolve(config.options.as_ref(), &ResolvedOptions::default())?;
        let codec = BypassCodec::new(global.bypass)?;

        let mut rules = Vec::with_capacity(config.subs.len());
        for sub in &config.subs {
            rules.push(compile_sub(sub, &global, &codec)?);
        }
        debug!("Compiled {} substitution rules.", rules.len());

        Ok(Self { codec, rules })
    }

    /// Applies every rule in submission order, then strips bypass
    /// delimiters from the result.
    pub fn substitute(&self, text: &str) -> String {
        let mut text = text.to_string();
        for rule in &self.rules {
            text = rule.apply(&text);
        }
        self.codec.strip(&text)
    }
}

impl fmt::Debug for SubstitutionEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Compiled rules may hold callbacks, so only their count is shown.
        f.debug_struct("SubstitutionEngine")
            .field("codec", &self.codec)
            .field("rules", &self.rules.len())
            .finish()
    }
}

fn compile_sub(
    sub: &Sub,
    global: &ResolvedOptions,
    codec: &BypassCodec,
) -> Result<CompiledSub, ResubError> {
    // A precompiled search term carries its own flags; local options are
    // not resolved for it, so they cannot reject it either.
    let resolved = match &sub.search {
        SearchTerm::Precompiled(_) => global.clone(),
        SearchTerm::Literal(_) => options::resolve(sub.options.as_ref(), global)?,
    };
    let matcher = matcher::build(&sub.search, &resolved, codec)?;
    let strategy = match &sub.replace {
        Replacement::Callback(f) => Strategy::Callback(Arc::clone(f)),
        Replacement::Template(template) => {
            if replacer::has_backref(template) || !resolved.match_case {
                Strategy::Expand(template.clone())
            } else {
                Strategy::MatchCase(template.clone())
            }
        }
    };
    Ok(CompiledSub { matcher, strategy })
}

/// One-shot substitution: compiles `config` and applies it to `text`.
pub fn substitute(text: &str, config: &SubstitutionConfig) -> Result<String, ResubError> {
    Ok(SubstitutionEngine::new(config)?.substitute(text))
}
