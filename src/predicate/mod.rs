//! Predicate builders for filtering, searching and validation
//!
//! Every function in this module is a small factory: it captures its
//! parameters (a bound, a pattern, a list, a key) and returns a value
//! implementing [`Predicate`], a reusable boolean test.
//!
//! Predicates hold only immutable data, so a single instance can be checked
//! any number of times and from any number of threads. The only fallible
//! constructor is [`match_regex`], which compiles its pattern up front and
//! reports a [`PatternError`] if the pattern is invalid.
//!
//! # Example
//!
//! ```rust
//! use sluice::predicate::*;
//!
//! let valid_port = between(1, 65535);
//! assert!(valid_port.check(&8080));
//! assert!(!valid_port.check(&0));
//!
//! let internal = ends_with(".internal");
//! assert!(internal.check("db.internal"));
//! assert!(not(internal).check("example.com"));
//! ```
//!
//! # Filtering
//!
//! ```rust
//! use sluice::predicate::*;
//!
//! let version = match_regex(r"^v\d+").unwrap();
//! let tags = ["v1", "latest", "v2-rc"];
//! let versions: Vec<&str> = tags.into_iter().filter(|t| version.check(*t)).collect();
//! assert_eq!(versions, vec!["v1", "v2-rc"]);
//! ```

mod combinators;
mod equality;
mod map;
mod number;
mod pattern;
mod string;
mod validation;

pub mod prelude;

// Re-export core trait
pub use combinators::{Predicate, PredicateExt};

// Re-export negation
pub use combinators::{not, Not};

// Re-export equality predicates
pub use equality::{eq, is_in, is_zero, Eq, In, IsZero};

// Re-export number predicates
pub use number::{between, ge, gt, is_even, le, lt, Between, Ge, Gt, IsEven, Le, Lt};

// Re-export string predicates
pub use string::{contains, ends_with, starts_with, Contains, EndsWith, StartsWith};

// Re-export pattern predicates
pub use pattern::{match_regex, match_regex_with, MatchRegex, PatternError, RegexConfig};

// Re-export map predicates
pub use map::{has_key, has_key_value, has_value, HasKey, HasKeyValue, HasValue};

// Re-export validation helpers
pub use validation::{validate, validate_with};
