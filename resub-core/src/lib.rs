// resub-core/src/lib.rs
//! # resub Core Library
//!
//! `resub-core` is a text substitution engine: given a body of text and an
//! ordered list of search/replace rules, it produces a modified copy of the
//! text, honoring per-rule and global options for case sensitivity,
//! word-boundary isolation, case-preserving replacement, and a bypass
//! mechanism that lets specific passages opt out of substitution.
//!
//! The library is pure and stateless: whole text in, whole text out, with
//! no shared mutable state between invocations. The only I/O it performs is
//! loading a configuration file when asked to.
//!
//! ## Modules
//!
//! * `config`: Defines [`Sub`] rules, [`SubstitutionConfig`] jobs and the
//!   [`ConfigSource`] dispatch (inline / file / provider).
//! * `options`: Three-layer option resolution (defaults → global → rule).
//! * `bypass`: The bypass-span codec (`|word|` passes through untouched).
//! * `matcher`: Compiles search terms into executable matchers.
//! * `replacer`: Case-preserving and backreference replacement strategies.
//! * `engine`: The [`SubstitutionEngine`] driver tying it all together.
//! * `errors`: The [`ResubError`] taxonomy.
//!
//! ## Usage Example
//!
//! ```rust
//! use resub_core::{Sub, SubstitutionConfig, substitute};
//!
//! fn main() -> Result<(), resub_core::ResubError> {
//!     let config = SubstitutionConfig {
//!         options: None,
//!         subs: vec![
//!             Sub::new("lion", "tiger"),
//!             Sub::new("bo(o+)", "ho$2"),
//!         ],
//!     };
//!
//!     let out = substitute("The Lion said boo, but not |lion| here.", &config)?;
//!     assert_eq!(out, "The Tiger said hoo, but not lion here.");
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return [`ResubError`]: `Config` for unusable
//! options, `Pattern` for a search term that does not compile, and `Loader`
//! for configuration files that cannot be read or parsed. Errors surface
//! synchronously before any text is touched; there are no retries and no
//! partial results.
//!
//! ## Concurrency
//!
//! A [`SubstitutionEngine`] is `Send + Sync` and holds no mutable state, so
//! one instance can process any number of independent texts in parallel.
//! Within a single text, rules run strictly in submission order.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod bypass;
pub mod config;
pub mod engine;
pub mod errors;
pub mod matcher;
pub mod options;
pub mod replacer;

/// Re-exports the public configuration types for describing substitution jobs.
pub use config::{ConfigSource, ReplaceFn, Replacement, SearchTerm, Sub, SubstitutionConfig};

/// Re-exports the custom error type for clear error reporting.
pub use errors::ResubError;

/// Re-exports option types and the resolver.
pub use options::{resolve, MatchFlags, ResolvedOptions, SubOptions, DEFAULT_BYPASS};

/// Re-exports the bypass-span codec.
pub use bypass::BypassCodec;

/// Re-exports the compiled engine and the one-shot entry point.
pub use engine::{substitute, SubstitutionEngine};
