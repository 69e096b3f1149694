//! Bypass span handling.
//!
//! A bypass span is a maximal non-greedy run of text between two instances
//! of the bypass delimiter, e.g. `|word|`. Matchers exclude whole spans at
//! match time (see the matcher module); once every rule has run, `strip`
//! removes the delimiters and restores the content verbatim.
//!
//! License: MIT OR Apache-2.0

use regex::Regex;

use crate::errors::ResubError;

/// Locates bypass spans for one delimiter character.
#[derive(Debug, Clone)]
pub struct BypassCodec {
    delimiter: char,
    span: Regex,
}

impl BypassCodec {
    /// Builds a codec for `delimiter`.
    pub fn new(delimiter: char) -> Result<Self, ResubError> {
        let escaped = regex::escape(&delimiter.to_string());
        // Span content is non-empty and non-greedy; `.` stays within a line.
        let pattern = format!("{}(.+?){}", escaped, escaped);
        let span = Regex::new(&pattern)
            .map_err(|e| ResubError::Pattern(pattern.clone(), e))?;
        Ok(Self { delimiter, span })
    }

    /// The delimiter this codec was built for.
    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Pattern fragment matching one whole span, delimiters included.
    ///
    /// The matcher builder uses this as the exclusion branch of its
    /// alternation so that nothing inside a span can be matched by a rule.
    pub fn exclusion_fragment(&self) -> String {
        let escaped = regex::escape(&self.delimiter.to_string());
        format!("{}.+?{}", escaped, escaped)
    }

    /// Removes the delimiters of every span, restoring content verbatim.
    ///
    /// Text without the delimiter passes through unchanged. An unpaired
    /// trailing delimiter belongs to no span and stays as literal text.
    pub fn strip(&self, text: &str) -> String {
        self.span.replace_all(text, "$1").into_owned()
    }
}
