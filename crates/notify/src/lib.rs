//! Rendering of alert evaluations for humans.
//!
//! This crate provides:
//! - Deterministic, severity-sorted plain-text report formatting
//! - An overall triage recommendation derived from an alert list

pub mod report;

pub use report::{format_alerts, overall_recommendation, Recommendation, NO_ALERTS_MESSAGE};
