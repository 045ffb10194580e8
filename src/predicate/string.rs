//! String predicates
//!
//! Substring, prefix and suffix tests. Every predicate here works on both
//! `str` and `String` inputs.

use super::combinators::Predicate;

/// Predicate that checks if string starts with a prefix.
#[derive(Clone, Debug)]
pub struct StartsWith<S>(pub S);

impl<S: AsRef<str> + Send + Sync> Predicate<str> for StartsWith<S> {
    #[inline]
    fn check(&self, value: &str) -> bool {
        value.starts_with(self.0.as_ref())
    }
}

impl<S: AsRef<str> + Send + Sync> Predicate<String> for StartsWith<S> {
    #[inline]
    fn check(&self, value: &String) -> bool {
        value.starts_with(self.0.as_ref())
    }
}

/// Create a predicate that checks if string starts with prefix.
///
/// A string starts with itself, and every string starts with `""`.
///
/// # Example
///
/// ```rust
/// use sluice::predicate::*;
///
/// assert!(starts_with("http").check("https://example.com"));
/// assert!(starts_with("http").check("http"));
/// assert!(!starts_with("http").check("ftp://example.com"));
/// assert!(starts_with("").check("anything"));
/// ```
pub fn starts_with<S: AsRef<str> + Send + Sync>(prefix: S) -> StartsWith<S> {
    StartsWith(prefix)
}

/// Predicate that checks if string ends with a suffix.
#[derive(Clone, Debug)]
pub struct EndsWith<S>(pub S);

impl<S: AsRef<str> + Send + Sync> Predicate<str> for EndsWith<S> {
    #[inline]
    fn check(&self, value: &str) -> bool {
        value.ends_with(self.0.as_ref())
    }
}

impl<S: AsRef<str> + Send + Sync> Predicate<String> for EndsWith<S> {
    #[inline]
    fn check(&self, value: &String) -> bool {
        value.ends_with(self.0.as_ref())
    }
}

/// Create a predicate that checks if string ends with suffix.
///
/// A string ends with itself, and every string ends with `""`.
///
/// # Example
///
/// ```rust
/// use sluice::predicate::*;
///
/// assert!(ends_with(".rs").check("main.rs"));
/// assert!(!ends_with(".rs").check("main.py"));
/// assert!(ends_with("").check(""));
/// ```
pub fn ends_with<S: AsRef<str> + Send + Sync>(suffix: S) -> EndsWith<S> {
    EndsWith(suffix)
}

/// Predicate that checks if string contains a substring.
#[derive(Clone, Debug)]
pub struct Contains<S>(pub S);

impl<S: AsRef<str> + Send + Sync> Predicate<str> for Contains<S> {
    #[inline]
    fn check(&self, value: &str) -> bool {
        contains_substring(value, self.0.as_ref())
    }
}

impl<S: AsRef<str> + Send + Sync> Predicate<String> for Contains<S> {
    #[inline]
    fn check(&self, value: &String) -> bool {
        contains_substring(value, self.0.as_ref())
    }
}

/// Create a predicate that checks if string contains substring.
///
/// Unlike [`str::contains`], the empty string is never found: an empty
/// `substring` or an empty input both yield false.
///
/// # Example
///
/// ```rust
/// use sluice::predicate::*;
///
/// assert!(contains("@").check("user@example.com"));
/// assert!(!contains("@").check("invalid"));
/// assert!(!contains("").check("anything"));
/// assert!(!contains("x").check(""));
/// ```
pub fn contains<S: AsRef<str> + Send + Sync>(substring: S) -> Contains<S> {
    Contains(substring)
}

// Empty needle or haystack never matches.
fn contains_substring(haystack: &str, needle: &str) -> bool {
    !needle.is_empty()
        && !haystack.is_empty()
        && needle.len() <= haystack.len()
        && haystack.contains(needle)
}
