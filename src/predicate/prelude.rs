//! Predicate prelude for convenient imports
//!
//! Re-exports the predicate traits and every constructor, without the
//! concrete predicate struct names.
//!
//! # Example
//!
//! ```rust
//! use sluice::predicate::prelude::*;
//!
//! let ok = is_in(["GET", "HEAD"]);
//! assert!(ok.check(&"GET"));
//! assert!(ok.not().check(&"POST"));
//! ```

// Core traits
pub use super::combinators::{not, Predicate, PredicateExt};

// Constructors
pub use super::equality::{eq, is_in, is_zero};
pub use super::map::{has_key, has_key_value, has_value};
pub use super::number::{between, ge, gt, is_even, le, lt};
pub use super::pattern::{match_regex, match_regex_with, PatternError, RegexConfig};
pub use super::string::{contains, ends_with, starts_with};

// Validation helpers
pub use super::validation::{validate, validate_with};
