//! Equality predicates
//!
//! Predicates that only need `PartialEq`: matching a single target, the
//! type's zero value, or membership in a list.

use super::combinators::Predicate;

/// Predicate for equality.
#[derive(Clone, Copy, Debug)]
pub struct Eq<T>(pub T);

impl<T: PartialEq + Send + Sync> Predicate<T> for Eq<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value == self.0
    }
}

/// Create a predicate that checks for equality.
///
/// # Example
///
/// ```rust
/// use sluice::predicate::*;
///
/// assert!(eq(5).check(&5));
/// assert!(!eq(5).check(&4));
/// assert!(eq("admin").check(&"admin"));
/// ```
pub fn eq<T: PartialEq + Send + Sync>(value: T) -> Eq<T> {
    Eq(value)
}

/// Predicate that checks for the zero (`Default`) value of a type.
#[derive(Clone, Copy, Debug)]
pub struct IsZero<T> {
    zero: T,
}

impl<T: PartialEq + Send + Sync> Predicate<T> for IsZero<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value == self.zero
    }
}

/// Create a predicate that checks if a value equals `T::default()`.
///
/// The default is computed once, when the predicate is built.
///
/// # Example
///
/// ```rust
/// use sluice::predicate::*;
///
/// assert!(is_zero::<i32>().check(&0));
/// assert!(!is_zero::<i32>().check(&5));
/// assert!(is_zero::<String>().check(&String::new()));
/// ```
pub fn is_zero<T>() -> IsZero<T>
where
    T: PartialEq + Default + Send + Sync,
{
    IsZero { zero: T::default() }
}

/// Predicate that checks membership in a fixed list.
#[derive(Clone, Debug)]
pub struct In<T> {
    items: Vec<T>,
}

impl<T: PartialEq + Send + Sync> Predicate<T> for In<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.items.iter().any(|item| item == value)
    }
}

/// Create a predicate that checks if a value equals any element of `items`.
///
/// An empty list produces a predicate that is always false. Each check is a
/// linear scan.
///
/// # Example
///
/// ```rust
/// use sluice::predicate::*;
///
/// let weekend = is_in(["sat", "sun"]);
/// assert!(weekend.check(&"sun"));
/// assert!(!weekend.check(&"mon"));
/// ```
pub fn is_in<T, I>(items: I) -> In<T>
where
    T: PartialEq + Send + Sync,
    I: IntoIterator<Item = T>,
{
    In {
        items: items.into_iter().collect(),
    }
}
