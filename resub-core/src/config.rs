//! Configuration management for `resub-core`.
//!
//! This module defines substitution rules and job-level configuration, and
//! handles loading them from YAML or JSON files. A config can also be
//! supplied inline or produced by a zero-argument provider; see
//! [`ConfigSource`].
//!
//! License: MIT OR Apache-2.0

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{debug, info};
use regex::{Captures, Regex};
use serde::{Deserialize, Deserializer};

use crate::errors::ResubError;
use crate::options::SubOptions;

/// A search term.
///
/// Config files can only carry pattern fragments as strings; a precompiled
/// regex comes in through the API and skips all option-driven matcher
/// construction, running with its own semantics verbatim.
#[derive(Debug, Clone)]
pub enum SearchTerm {
    Literal(String),
    Precompiled(Regex),
}

impl SearchTerm {
    /// The pattern text, for diagnostics.
    pub fn as_str(&self) -> &str {
        match self {
            SearchTerm::Literal(s) => s,
            SearchTerm::Precompiled(re) => re.as_str(),
        }
    }
}

impl From<&str> for SearchTerm {
    fn from(s: &str) -> Self {
        SearchTerm::Literal(s.to_string())
    }
}

impl From<String> for SearchTerm {
    fn from(s: String) -> Self {
        SearchTerm::Literal(s)
    }
}

impl From<Regex> for SearchTerm {
    fn from(re: Regex) -> Self {
        SearchTerm::Precompiled(re)
    }
}

impl<'de> Deserialize<'de> for SearchTerm {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(SearchTerm::Literal(String::deserialize(deserializer)?))
    }
}

/// Signature of a caller-supplied replacement callback. It receives the
/// full capture set of a match and its return value is used verbatim.
pub type ReplaceFn = dyn Fn(&Captures<'_>) -> String + Send + Sync;

/// A replacement: a template string (possibly carrying `$N` backreference
/// markers) or a caller-supplied callback.
#[derive(Clone)]
pub enum Replacement {
    Template(String),
    Callback(Arc<ReplaceFn>),
}

impl Replacement {
    /// Wraps a closure as a replacement callback.
    pub fn callback<F>(f: F) -> Self
    where
        F: Fn(&Captures<'_>) -> String + Send + Sync + 'static,
    {
        Replacement::Callback(Arc::new(f))
    }
}

impl fmt::Debug for Replacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Replacement::Template(t) => f.debug_tuple("Template").field(t).finish(),
            Replacement::Callback(_) => f.write_str("Callback(..)"),
        }
    }
}

impl From<&str> for Replacement {
    fn from(s: &str) -> Self {
        Replacement::Template(s.to_string())
    }
}

impl From<String> for Replacement {
    fn from(s: String) -> Self {
        Replacement::Template(s)
    }
}

impl<'de> Deserialize<'de> for Replacement {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Replacement::Template(String::deserialize(deserializer)?))
    }
}

/// One substitution rule. Immutable once submitted to a job.
#[derive(Debug, Clone, Deserialize)]
pub struct Sub {
    pub search: SearchTerm,
    pub replace: Replacement,
    #[serde(default)]
    pub options: Option<SubOptions>,
}

impl Sub {
    pub fn new(search: impl Into<SearchTerm>, replace: impl Into<Replacement>) -> Self {
        Self {
            search: search.into(),
            replace: replace.into(),
            options: None,
        }
    }

    pub fn with_options(mut self, options: SubOptions) -> Self {
        self.options = Some(options);
        self
    }
}

/// Top-level job configuration: optional global options plus an ordered
/// list of substitution rules. Rule order is semantically significant;
/// later rules see the output of earlier ones.
#[derive(Debug, Clone, Deserialize)]
pub struct SubstitutionConfig {
    #[serde(default)]
    pub options: Option<SubOptions>,
    pub subs: Vec<Sub>,
}

impl SubstitutionConfig {
    /// Loads a config from a `.yml`/`.yaml` (YAML) or `.json` (JSON) file.
    ///
    /// Any other extension, an unreadable path, or a parse failure is a
    /// [`ResubError::Loader`] naming the offending path. No fallback config
    /// is ever substituted.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ResubError> {
        let path = path.as_ref();
        info!("Loading substitution config from: {}", path.display());
        let loader_err =
            |reason: String| ResubError::Loader(path.display().to_string(), reason);

        let text =
            std::fs::read_to_string(path).map_err(|e| loader_err(e.to_string()))?;
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        let config: SubstitutionConfig = match ext {
            "yml" | "yaml" => {
                serde_yml::from_str(&text).map_err(|e| loader_err(e.to_string()))?
            }
            "json" => serde_json::from_str(&text).map_err(|e| loader_err(e.to_string()))?,
            _ => {
                return Err(loader_err(format!(
                    "unsupported config extension '{}', expected .yml, .yaml or .json",
                    ext
                )))
            }
        };

        debug!(
            "Loaded {} substitution rules from {}.",
            config.subs.len(),
            path.display()
        );
        Ok(config)
    }
}

/// Where a job configuration comes from: supplied inline, loaded from a
/// YAML/JSON file path, or produced by a zero-argument provider.
pub enum ConfigSource {
    Inline(SubstitutionConfig),
    File(PathBuf),
    Provider(Box<dyn Fn() -> SubstitutionConfig + Send + Sync>),
}

impl ConfigSource {
    /// Resolves this source into a concrete configuration.
    pub fn resolve(self) -> Result<SubstitutionConfig, ResubError> {
        match self {
            ConfigSource::Inline(config) => Ok(config),
            ConfigSource::File(path) => SubstitutionConfig::load_from_file(path),
            ConfigSource::Provider(provider) => Ok(provider()),
        }
    }
}

impl From<SubstitutionConfig> for ConfigSource {
    fn from(config: SubstitutionConfig) -> Self {
        ConfigSource::Inline(config)
    }
}

impl From<PathBuf> for ConfigSource {
    fn from(path: PathBuf) -> Self {
        ConfigSource::File(path)
    }
}

impl fmt::Debug for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Inline(config) => f.debug_tuple("Inline").field(config).finish(),
            ConfigSource::File(path) => f.debug_tuple("File").field(path).finish(),
            ConfigSource::Provider(_) => f.write_str("Provider(..)"),
        }
    }
}
