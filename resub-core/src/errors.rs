//! errors.rs - Custom error types for the resub-core library.
//!
//! Every fallible operation in the core returns one of these variants;
//! there are no retries and no partial results anywhere in the library.
//!
//! License: MIT OR Apache-2.0

use thiserror::Error;

/// This enum represents all possible error types in the `resub-core` library.
///
/// Marked `#[non_exhaustive]` so new variants can be added in future
/// versions without breaking downstream matches.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ResubError {
    /// The job's options are unusable, e.g. a multi-character bypass string.
    #[error("invalid substitution config: {0}")]
    Config(String),

    /// A search term did not compile as a pattern fragment.
    #[error("failed to compile search term '{0}': {1}")]
    Pattern(String, regex::Error),

    /// A configuration file could not be read or parsed.
    #[error("failed to load config from '{0}': {1}")]
    Loader(String, String),
}
