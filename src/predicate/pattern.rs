//! Regular expression predicates
//!
//! Patterns use the syntax of the [`regex`] crate, an RE2-style dialect
//! without backreferences or look-around. Patterns are compiled once, when
//! the predicate is built, and invalid patterns are rejected right there with
//! a [`PatternError`]. Checking a string never fails.

use super::combinators::Predicate;
use regex::{Regex, RegexBuilder};
use std::fmt;

/// Error returned when a pattern cannot be compiled.
///
/// Carries the pattern as it was given and the compiler's complaint.
///
/// # Example
///
/// ```rust
/// use sluice::predicate::match_regex;
///
/// let err = match_regex("[").unwrap_err();
/// assert_eq!(err.pattern(), "[");
/// assert!(err.to_string().starts_with("invalid pattern `[`"));
/// ```
#[derive(Debug, Clone)]
pub struct PatternError {
    pattern: String,
    reason: regex::Error,
}

impl PatternError {
    fn new(pattern: &str, reason: regex::Error) -> Self {
        Self {
            pattern: pattern.to_string(),
            reason,
        }
    }

    /// The pattern that failed to compile.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The underlying compilation error.
    pub fn reason(&self) -> &regex::Error {
        &self.reason
    }
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid pattern `{}`: {}", self.pattern, self.reason)
    }
}

impl std::error::Error for PatternError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.reason)
    }
}

/// Compile options for [`match_regex_with`].
///
/// The default configuration compiles exactly like [`match_regex`]: case
/// sensitive, Unicode aware, `^`/`$` anchored to the whole input and the
/// regex crate's default size limit.
///
/// # Example
///
/// ```rust
/// use sluice::predicate::*;
///
/// let config = RegexConfig::new().with_case_insensitive(true);
/// let p = match_regex_with("^error", &config).unwrap();
/// assert!(p.check("ERROR: disk full"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegexConfig {
    case_insensitive: bool,
    multi_line: bool,
    dot_matches_new_line: bool,
    ignore_whitespace: bool,
    unicode: bool,
    size_limit: Option<usize>,
}

impl Default for RegexConfig {
    fn default() -> Self {
        Self {
            case_insensitive: false,
            multi_line: false,
            dot_matches_new_line: false,
            ignore_whitespace: false,
            unicode: true,
            size_limit: None,
        }
    }
}

impl RegexConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Match letters regardless of case (`i` flag).
    pub fn with_case_insensitive(mut self, yes: bool) -> Self {
        self.case_insensitive = yes;
        self
    }

    /// Let `^` and `$` match at line boundaries (`m` flag).
    ///
    /// # Example
    ///
    /// ```rust
    /// use sluice::predicate::*;
    ///
    /// let config = RegexConfig::new().with_multi_line(true);
    /// let p = match_regex_with("^WARN", &config).unwrap();
    /// assert!(p.check("INFO ok\nWARN low disk"));
    /// ```
    pub fn with_multi_line(mut self, yes: bool) -> Self {
        self.multi_line = yes;
        self
    }

    /// Let `.` match `\n` (`s` flag).
    pub fn with_dot_matches_new_line(mut self, yes: bool) -> Self {
        self.dot_matches_new_line = yes;
        self
    }

    /// Ignore whitespace and allow `#` comments in the pattern (`x` flag).
    pub fn with_ignore_whitespace(mut self, yes: bool) -> Self {
        self.ignore_whitespace = yes;
        self
    }

    /// Toggle Unicode-aware matching (`u` flag). Enabled by default.
    pub fn with_unicode(mut self, yes: bool) -> Self {
        self.unicode = yes;
        self
    }

    /// Cap the size, in bytes, of the compiled program.
    ///
    /// Patterns that compile to something larger are rejected with a
    /// [`PatternError`].
    pub fn with_size_limit(mut self, bytes: usize) -> Self {
        self.size_limit = Some(bytes);
        self
    }

    /// Whether matching ignores case.
    pub fn case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    /// Whether `^` and `$` match at line boundaries.
    pub fn multi_line(&self) -> bool {
        self.multi_line
    }

    /// Whether `.` matches `\n`.
    pub fn dot_matches_new_line(&self) -> bool {
        self.dot_matches_new_line
    }

    /// Whether whitespace in the pattern is ignored.
    pub fn ignore_whitespace(&self) -> bool {
        self.ignore_whitespace
    }

    /// Whether matching is Unicode aware.
    pub fn unicode(&self) -> bool {
        self.unicode
    }

    /// The compiled size cap, if one was set.
    pub fn size_limit(&self) -> Option<usize> {
        self.size_limit
    }

    fn builder(&self, pattern: &str) -> RegexBuilder {
        let mut builder = RegexBuilder::new(pattern);
        builder
            .case_insensitive(self.case_insensitive)
            .multi_line(self.multi_line)
            .dot_matches_new_line(self.dot_matches_new_line)
            .ignore_whitespace(self.ignore_whitespace)
            .unicode(self.unicode);
        if let Some(limit) = self.size_limit {
            builder.size_limit(limit);
        }
        builder
    }
}

/// Predicate that checks if a string matches a compiled pattern.
///
/// Clones share the compiled program.
#[derive(Clone, Debug)]
pub struct MatchRegex {
    regex: Regex,
}

impl MatchRegex {
    /// The source pattern this predicate was compiled from.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl Predicate<str> for MatchRegex {
    #[inline]
    fn check(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }
}

impl Predicate<String> for MatchRegex {
    #[inline]
    fn check(&self, value: &String) -> bool {
        self.regex.is_match(value)
    }
}

/// Create a predicate that checks if a string matches `pattern` anywhere.
///
/// This is a search, not a full match: anchor the pattern with `^...$` to
/// require the whole string to match.
///
/// # Errors
///
/// Returns [`PatternError`] if `pattern` is not valid regex syntax.
///
/// # Example
///
/// ```rust
/// use sluice::predicate::*;
///
/// let p = match_regex("a+").unwrap();
/// assert!(p.check("baaab"));
/// assert!(!p.check("bbb"));
///
/// assert!(match_regex("[").is_err());
/// ```
pub fn match_regex(pattern: &str) -> Result<MatchRegex, PatternError> {
    match_regex_with(pattern, &RegexConfig::default())
}

/// Create a pattern predicate with explicit compile options.
///
/// # Errors
///
/// Returns [`PatternError`] if `pattern` is not valid regex syntax or its
/// compiled form exceeds the configured size limit.
pub fn match_regex_with(pattern: &str, config: &RegexConfig) -> Result<MatchRegex, PatternError> {
    match config.builder(pattern).build() {
        Ok(regex) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(pattern = %pattern, "compiled pattern");
            Ok(MatchRegex { regex })
        }
        Err(err) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(pattern = %pattern, error = %err, "rejected pattern");
            Err(PatternError::new(pattern, err))
        }
    }
}
