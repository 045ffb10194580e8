//! Core predicate trait and negation
//!
//! This module provides the `Predicate` trait every constructor in the catalog
//! returns, plus `Not`, the single way of composing predicates.

/// A reusable boolean test over values of type T.
///
/// Predicates are pure: `check` borrows both the predicate and the value, so
/// neither is ever mutated. The `Send + Sync` supertraits mean a constructed
/// predicate can be shared between threads without synchronization.
///
/// # Example
///
/// ```rust
/// use sluice::predicate::*;
///
/// let is_adult = ge(18);
/// assert!(is_adult.check(&25));
/// assert!(!is_adult.check(&12));
/// ```
pub trait Predicate<T: ?Sized>: Send + Sync {
    /// Check if the value satisfies this predicate.
    fn check(&self, value: &T) -> bool;
}

// Blanket impl for closures
impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        self(value)
    }
}

/// Extension methods available on every predicate.
///
/// # Example
///
/// ```rust
/// use sluice::predicate::*;
///
/// let p = between(0, 100).not();
/// assert!(p.check(&-5));
/// assert!(!p.check(&50));
/// ```
pub trait PredicateExt<T: ?Sized>: Predicate<T> + Sized {
    /// Invert the predicate.
    ///
    /// Returns a predicate that is true exactly when the original is false.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sluice::predicate::*;
    ///
    /// let non_positive = gt(0).not();
    /// assert!(non_positive.check(&0));
    /// assert!(!non_positive.check(&4));
    /// ```
    fn not(self) -> Not<Self> {
        Not(self)
    }

    /// Borrow the predicate as a plain closure.
    ///
    /// Handy for iterator adapters such as `filter`, `find` or `retain`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sluice::predicate::*;
    ///
    /// let small = lt(3);
    /// let picked: Vec<i32> = vec![1, 5, 2, 8].into_iter().filter(small.as_fn()).collect();
    /// assert_eq!(picked, vec![1, 2]);
    /// ```
    fn as_fn(&self) -> impl Fn(&T) -> bool + '_ {
        move |value: &T| self.check(value)
    }
}

impl<T: ?Sized, P: Predicate<T>> PredicateExt<T> for P {}

/// NOT combinator - inverts the predicate.
#[derive(Clone, Copy, Debug)]
pub struct Not<P>(pub P);

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Not<P> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        !self.0.check(value)
    }
}

// Send + Sync are auto-derived when P is Send + Sync

/// Create a predicate that negates another predicate.
///
/// Free-function form of [`PredicateExt::not`]. Prefer it for predicates
/// that implement `Predicate` for more than one input type (string
/// predicates work on both `str` and `String`, `is_even` on every integer),
/// where the method form needs a type annotation.
///
/// # Example
///
/// ```rust
/// use sluice::predicate::*;
///
/// let not_blank = not(|s: &str| s.trim().is_empty());
/// assert!(not_blank.check("text"));
/// assert!(!not_blank.check("   "));
/// ```
pub fn not<P>(predicate: P) -> Not<P> {
    Not(predicate)
}
