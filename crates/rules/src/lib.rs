//! Tiered clinical alerting rule engine.
//!
//! This crate provides:
//! - Condition parsing for declarative threshold rules (`temperature > 40`)
//! - A two-tier rule engine with per-parameter normal-range checks
//! - YAML rule-set definition with serde deserialization
//! - Filesystem loader for rule-set documents
//! - Rule-set validation with structured errors and suggestions

pub mod condition;
pub mod engine;
pub mod error;
pub mod loader;
pub mod schema;
pub mod validation;

pub use condition::{Comparison, ThresholdRule};
pub use engine::{AlertEngine, RuleSet};
pub use error::{Result, RuleError};
pub use schema::{NormalRange, RuleSetConfig, TierConfig};
