//! Validation helpers for predicates
//!
//! Turns a predicate check into a `Result`, so predicates slot into code that
//! propagates errors with `?`.

use super::combinators::Predicate;

/// Validate a value using a predicate.
///
/// Returns `Ok(value)` if the predicate is satisfied, otherwise `Err(error)`.
///
/// # Example
///
/// ```rust
/// use sluice::predicate::*;
///
/// assert_eq!(validate(42, between(1, 100), "out of range"), Ok(42));
/// assert_eq!(validate(0, between(1, 100), "out of range"), Err("out of range"));
/// ```
pub fn validate<T, E, P>(value: T, predicate: P, error: E) -> Result<T, E>
where
    P: Predicate<T>,
{
    if predicate.check(&value) {
        Ok(value)
    } else {
        Err(error)
    }
}

/// Validate a value with an error factory.
///
/// Like `validate`, but takes a closure to generate the error,
/// allowing access to the rejected value when constructing the error.
///
/// # Example
///
/// ```rust
/// use sluice::predicate::*;
///
/// let result = validate_with(
///     String::from("ftp://example.com"),
///     starts_with("https://"),
///     |url| format!("'{}' is not an https url", url),
/// );
/// assert_eq!(result, Err("'ftp://example.com' is not an https url".to_string()));
/// ```
pub fn validate_with<T, E, P, F>(value: T, predicate: P, error_fn: F) -> Result<T, E>
where
    P: Predicate<T>,
    F: FnOnce(&T) -> E,
{
    if predicate.check(&value) {
        Ok(value)
    } else {
        Err(error_fn(&value))
    }
}
