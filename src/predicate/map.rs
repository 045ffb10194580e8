//! Map predicates
//!
//! Key, value and entry lookups on `HashMap` and `BTreeMap`.

use super::combinators::Predicate;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// Predicate that checks if a map contains a key.
#[derive(Clone, Copy, Debug)]
pub struct HasKey<K>(pub K);

impl<K, V, S> Predicate<HashMap<K, V, S>> for HasKey<K>
where
    K: Eq + Hash + Send + Sync,
    S: BuildHasher,
{
    #[inline]
    fn check(&self, value: &HashMap<K, V, S>) -> bool {
        value.contains_key(&self.0)
    }
}

impl<K, V> Predicate<BTreeMap<K, V>> for HasKey<K>
where
    K: Ord + Send + Sync,
{
    #[inline]
    fn check(&self, value: &BTreeMap<K, V>) -> bool {
        value.contains_key(&self.0)
    }
}

/// Create a predicate that checks if a map contains `key`.
///
/// The value stored under the key is not inspected.
///
/// # Example
///
/// ```rust
/// use sluice::predicate::*;
/// use std::collections::HashMap;
///
/// let headers = HashMap::from([("host", "example.com")]);
/// assert!(has_key("host").check(&headers));
/// assert!(!has_key("accept").check(&headers));
/// ```
pub fn has_key<K: Send + Sync>(key: K) -> HasKey<K> {
    HasKey(key)
}

/// Predicate that checks if a map holds a value.
#[derive(Clone, Copy, Debug)]
pub struct HasValue<V>(pub V);

impl<K, V, S> Predicate<HashMap<K, V, S>> for HasValue<V>
where
    V: PartialEq + Send + Sync,
{
    #[inline]
    fn check(&self, value: &HashMap<K, V, S>) -> bool {
        value.values().any(|v| *v == self.0)
    }
}

impl<K, V> Predicate<BTreeMap<K, V>> for HasValue<V>
where
    V: PartialEq + Send + Sync,
{
    #[inline]
    fn check(&self, value: &BTreeMap<K, V>) -> bool {
        value.values().any(|v| *v == self.0)
    }
}

/// Create a predicate that checks if any value in a map equals `value`.
///
/// Scans every entry on each check.
///
/// # Example
///
/// ```rust
/// use sluice::predicate::*;
/// use std::collections::BTreeMap;
///
/// let owners = BTreeMap::from([("db", "alice"), ("web", "bob")]);
/// assert!(has_value("bob").check(&owners));
/// assert!(!has_value("carol").check(&owners));
/// ```
pub fn has_value<V: PartialEq + Send + Sync>(value: V) -> HasValue<V> {
    HasValue(value)
}

/// Predicate that checks if a map holds a specific entry.
#[derive(Clone, Copy, Debug)]
pub struct HasKeyValue<K, V> {
    key: K,
    value: V,
}

impl<K, V, S> Predicate<HashMap<K, V, S>> for HasKeyValue<K, V>
where
    K: Eq + Hash + Send + Sync,
    V: PartialEq + Send + Sync,
    S: BuildHasher,
{
    #[inline]
    fn check(&self, value: &HashMap<K, V, S>) -> bool {
        value.get(&self.key) == Some(&self.value)
    }
}

impl<K, V> Predicate<BTreeMap<K, V>> for HasKeyValue<K, V>
where
    K: Ord + Send + Sync,
    V: PartialEq + Send + Sync,
{
    #[inline]
    fn check(&self, value: &BTreeMap<K, V>) -> bool {
        value.get(&self.key) == Some(&self.value)
    }
}

/// Create a predicate that checks if `key` is present and mapped to `value`.
///
/// # Example
///
/// ```rust
/// use sluice::predicate::*;
/// use std::collections::HashMap;
///
/// let env = HashMap::from([("MODE", "prod")]);
/// assert!(has_key_value("MODE", "prod").check(&env));
/// assert!(!has_key_value("MODE", "dev").check(&env));
/// assert!(!has_key_value("PORT", "prod").check(&env));
/// ```
pub fn has_key_value<K, V>(key: K, value: V) -> HasKeyValue<K, V>
where
    K: Send + Sync,
    V: PartialEq + Send + Sync,
{
    HasKeyValue { key, value }
}
