#![deny(missing_docs)]

//! # Process Types Core
//!
//! Post-processing for TypeScript type definitions emitted by an OpenAPI
//! client generator: an ordered rule table and the in-place file transformer.

/// Shared error types.
pub mod error;

/// Rule table construction.
pub mod rules;

/// In-place file rewriting.
pub mod transformer;

pub use error::{AppError, AppResult};
pub use rules::{build_date_rules, build_rule_table, Rule, RuleTable, DATE_FIELDS};
pub use transformer::{process, transform, Outcome, MARKER};
