//! Number predicates
//!
//! Ordering comparisons against a captured bound, inclusive ranges and parity.

use super::combinators::Predicate;

/// Predicate for greater than.
#[derive(Clone, Copy, Debug)]
pub struct Gt<T>(pub T);

impl<T: PartialOrd + Send + Sync> Predicate<T> for Gt<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value > self.0
    }
}

/// Create a predicate that checks if value is greater than threshold.
///
/// # Example
///
/// ```rust
/// use sluice::predicate::*;
///
/// assert!(gt(5).check(&6));
/// assert!(!gt(5).check(&5));
/// assert!(!gt(5).check(&4));
/// ```
pub fn gt<T: PartialOrd + Send + Sync>(value: T) -> Gt<T> {
    Gt(value)
}

/// Predicate for greater than or equal.
#[derive(Clone, Copy, Debug)]
pub struct Ge<T>(pub T);

impl<T: PartialOrd + Send + Sync> Predicate<T> for Ge<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value >= self.0
    }
}

/// Create a predicate that checks if value is greater than or equal to threshold.
///
/// # Example
///
/// ```rust
/// use sluice::predicate::*;
///
/// assert!(ge(5).check(&6));
/// assert!(ge(5).check(&5));
/// assert!(!ge(5).check(&4));
/// ```
pub fn ge<T: PartialOrd + Send + Sync>(value: T) -> Ge<T> {
    Ge(value)
}

/// Predicate for less than.
#[derive(Clone, Copy, Debug)]
pub struct Lt<T>(pub T);

impl<T: PartialOrd + Send + Sync> Predicate<T> for Lt<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value < self.0
    }
}

/// Create a predicate that checks if value is less than threshold.
///
/// # Example
///
/// ```rust
/// use sluice::predicate::*;
///
/// assert!(lt(5).check(&4));
/// assert!(!lt(5).check(&5));
/// ```
pub fn lt<T: PartialOrd + Send + Sync>(value: T) -> Lt<T> {
    Lt(value)
}

/// Predicate for less than or equal.
#[derive(Clone, Copy, Debug)]
pub struct Le<T>(pub T);

impl<T: PartialOrd + Send + Sync> Predicate<T> for Le<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value <= self.0
    }
}

/// Create a predicate that checks if value is less than or equal to threshold.
pub fn le<T: PartialOrd + Send + Sync>(value: T) -> Le<T> {
    Le(value)
}

/// Predicate for value in range (inclusive).
#[derive(Clone, Copy, Debug)]
pub struct Between<T> {
    min: T,
    max: T,
}

impl<T: PartialOrd + Send + Sync> Predicate<T> for Between<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value >= self.min && *value <= self.max
    }
}

/// Create a predicate that checks if value is between min and max (inclusive).
///
/// The bounds are not validated: when `min > max` no value can satisfy the
/// predicate and it is always false.
///
/// # Example
///
/// ```rust
/// use sluice::predicate::*;
///
/// let p = between(0, 100);
/// assert!(p.check(&0));
/// assert!(p.check(&100));
/// assert!(!p.check(&101));
///
/// assert!(!between(10, 1).check(&5));
/// ```
pub fn between<T: PartialOrd + Send + Sync>(min: T, max: T) -> Between<T> {
    Between { min, max }
}

/// Predicate that checks if an integer is even.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsEven;

macro_rules! impl_is_even {
    ($($int:ty),* $(,)?) => {
        $(
            impl Predicate<$int> for IsEven {
                #[inline]
                fn check(&self, value: &$int) -> bool {
                    *value % 2 == 0
                }
            }
        )*
    };
}

impl_is_even!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Create a predicate that checks if an integer is even.
///
/// Uses Rust's remainder operator, which truncates toward zero: `-3 % 2` is
/// `-1`, so negative odd numbers are rejected and negative even numbers
/// accepted, same as positives. Zero is even.
///
/// # Example
///
/// ```rust
/// use sluice::predicate::*;
///
/// assert!(is_even().check(&4i32));
/// assert!(is_even().check(&-4i32));
/// assert!(!is_even().check(&-3i32));
/// assert!(is_even().check(&0u64));
/// ```
pub fn is_even() -> IsEven {
    IsEven
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gt() {
        assert!(gt(5).check(&6));
        assert!(!gt(5).check(&5));
        assert!(!gt(5).check(&4));
    }

    #[test]
    fn test_ge() {
        assert!(ge(5).check(&6));
        assert!(ge(5).check(&5));
        assert!(!ge(5).check(&4));
    }

    #[test]
    fn test_lt() {
        assert!(lt(5).check(&4));
        assert!(!lt(5).check(&5));
        assert!(!lt(5).check(&6));
    }

    #[test]
    fn test_le() {
        assert!(le(5).check(&4));
        assert!(le(5).check(&5));
        assert!(!le(5).check(&6));
    }

    #[test]
    fn test_comparisons_at_integer_limits() {
        assert!(!gt(i64::MAX).check(&i64::MAX));
        assert!(ge(i64::MIN).check(&i64::MIN));
        assert!(!lt(i64::MIN).check(&i64::MIN));
        assert!(le(i64::MAX).check(&i64::MAX));
    }

    #[test]
    fn test_between() {
        let p = between(0, 100);
        assert!(p.check(&0));
        assert!(p.check(&50));
        assert!(p.check(&100));
        assert!(!p.check(&-1));
        assert!(!p.check(&101));
    }

    #[test]
    fn test_between_single_point() {
        let p = between(7, 7);
        assert!(p.check(&7));
        assert!(!p.check(&6));
        assert!(!p.check(&8));
    }

    #[test]
    fn test_between_inverted_bounds() {
        let p = between(10, 1);
        for x in -5..=15 {
            assert!(!p.check(&x), "{} should not be in an inverted range", x);
        }
    }

    #[test]
    fn test_between_with_floats() {
        let p = between(0.0_f64, 1.0_f64);
        assert!(p.check(&0.5));
        assert!(p.check(&1.0));
        assert!(!p.check(&1.1));
        assert!(!p.check(&f64::NAN));
    }

    #[test]
    fn test_is_even() {
        assert!(is_even().check(&0i32));
        assert!(is_even().check(&2i32));
        assert!(!is_even().check(&1i32));
        assert!(!is_even().check(&7i32));
    }

    #[test]
    fn test_is_even_negative() {
        assert!(is_even().check(&-2i32));
        assert!(is_even().check(&-100i32));
        assert!(!is_even().check(&-1i32));
        assert!(!is_even().check(&-7i32));
        assert!(is_even().check(&i32::MIN));
        assert!(!is_even().check(&i32::MAX));
    }

    #[test]
    fn test_is_even_unsigned() {
        assert!(is_even().check(&10u8));
        assert!(!is_even().check(&u64::MAX));
        assert!(is_even().check(&0usize));
    }
}
