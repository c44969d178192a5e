//! Form field validation.
//!
//! This module provides the pure constraint predicate used by the input
//! collector. Validation has no side effects and never fails: every check
//! reduces to a boolean.

mod rules;

pub use rules::{Constraints, FieldValue, validate};
