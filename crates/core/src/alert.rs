//! Alert records produced by the rule engine.

use serde::Serialize;

use crate::severity::Severity;

/// A single alert raised for one vital-sign parameter.
///
/// Alerts are produced fresh per evaluation call and never mutated after
/// creation; they have no identity beyond the call that produced them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alert {
    /// Vital-sign parameter name (e.g. `"heart_rate"`).
    pub parameter: String,
    /// Observed value.
    pub value: f64,
    /// Threshold description the value was compared against: the literal
    /// rule threshold for tier alerts, or `"< min"` / `"> max"` for range
    /// alerts.
    pub threshold: String,
    /// Severity tier that produced the alert.
    pub severity: Severity,
    /// Human-readable explanation of why the alert fired.
    pub message: String,
    /// Recommended clinical action.
    pub action: String,
}
