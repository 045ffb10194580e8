//! Property-based tests for the predicate catalog

use proptest::prelude::*;
use sluice::predicate::*;
use std::collections::HashMap;

proptest! {
    #[test]
    fn prop_comparisons_match_operators(n in any::<i64>(), x in any::<i64>()) {
        prop_assert_eq!(gt(n).check(&x), x > n);
        prop_assert_eq!(ge(n).check(&x), x >= n);
        prop_assert_eq!(lt(n).check(&x), x < n);
        prop_assert_eq!(le(n).check(&x), x <= n);
    }

    #[test]
    fn prop_between_is_inclusive(a in -1000i32..1000, b in -1000i32..1000, x in -1500i32..1500) {
        let (min, max) = if a <= b { (a, b) } else { (b, a) };
        prop_assert_eq!(between(min, max).check(&x), x >= min && x <= max);
    }

    #[test]
    fn prop_between_inverted_is_always_false(min in any::<i32>(), max in any::<i32>(), x in any::<i32>()) {
        prop_assume!(min > max);
        prop_assert!(!between(min, max).check(&x));
    }

    #[test]
    fn prop_is_even_matches_multiples_of_two(k in -1_000_000i64..1_000_000) {
        prop_assert!(is_even().check(&(2 * k)));
        prop_assert!(!is_even().check(&(2 * k + 1)));
    }

    #[test]
    fn prop_not_inverts(n in any::<i32>(), x in any::<i32>()) {
        let p = gt(n);
        prop_assert_eq!(not(p).check(&x), !p.check(&x));
        prop_assert_eq!(not(not(p)).check(&x), p.check(&x));
    }

    #[test]
    fn prop_eq_matches_native_equality(a in any::<u16>(), b in any::<u16>()) {
        prop_assert_eq!(eq(a).check(&b), a == b);
    }

    #[test]
    fn prop_is_in_matches_membership(items in prop::collection::vec(0u8..20, 0..10), x in 0u8..20) {
        let expected = items.contains(&x);
        prop_assert_eq!(is_in(items).check(&x), expected);
    }

    #[test]
    fn prop_is_in_empty_is_false(x in any::<i32>()) {
        prop_assert!(!is_in(Vec::<i32>::new()).check(&x));
    }

    #[test]
    fn prop_empty_affixes_always_match(s in ".*") {
        prop_assert!(starts_with("").check(s.as_str()));
        prop_assert!(ends_with("").check(s.as_str()));
        prop_assert!(!contains("").check(s.as_str()));
    }

    #[test]
    fn prop_string_contains_its_pieces(prefix in "[a-z]{0,5}", middle in "[a-z]{1,5}", suffix in "[a-z]{0,5}") {
        let s = format!("{}{}{}", prefix, middle, suffix);
        prop_assert!(starts_with(prefix.as_str()).check(&s));
        prop_assert!(ends_with(suffix.as_str()).check(&s));
        prop_assert!(contains(middle.as_str()).check(&s));
    }

    #[test]
    fn prop_has_key_value_matches_lookup(
        entries in prop::collection::hash_map(0u8..16, 0u8..4, 0..8),
        key in 0u8..16,
        value in 0u8..4,
    ) {
        let m: HashMap<u8, u8> = entries;
        prop_assert_eq!(has_key(key).check(&m), m.contains_key(&key));
        prop_assert_eq!(has_value(value).check(&m), m.values().any(|v| *v == value));
        prop_assert_eq!(has_key_value(key, value).check(&m), m.get(&key) == Some(&value));
    }

    #[test]
    fn prop_literal_pattern_agrees_with_contains(needle in "[a-z]{1,4}", hay in "[a-z]{0,12}") {
        let p = match_regex(&needle).unwrap();
        prop_assert_eq!(p.check(hay.as_str()), contains(needle.as_str()).check(hay.as_str()));
    }
}
