//! # Sluice
//!
//! > *Let through what passes, hold back the rest*
//!
//! A Rust library of predicate builders: small factories that capture a
//! target value, bound, pattern, list or key and hand back a reusable boolean
//! test for filtering, searching or validation.
//!
//! ## Quick Example
//!
//! ```rust
//! use sluice::predicate::*;
//!
//! let adult = ge(18);
//! let email = match_regex(r"^[^@\s]+@[^@\s]+$").unwrap();
//!
//! assert!(adult.check(&30));
//! assert!(email.check("ada@example.com"));
//! assert!(!email.check("not an email"));
//!
//! // Negation is the one combinator
//! let minor = adult.not();
//! assert!(minor.check(&12));
//! ```
//!
//! ## Guarantees
//!
//! - Predicates never mutate their captured parameters or the values they
//!   check, and every predicate is `Send + Sync`.
//! - Only [`predicate::match_regex`] can fail, and only while building the
//!   predicate. Checking a value never fails.
//!
//! ## Features
//!
//! - `tracing`: log pattern compilation through the `tracing` crate.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod predicate;

// Re-exports
pub use predicate::{PatternError, Predicate, PredicateExt};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::predicate::prelude::*;
}
