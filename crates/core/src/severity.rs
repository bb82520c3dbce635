//! Alert severity levels.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Ordinal severity of an alert.
///
/// Variants are declared lowest first so the derived `Ord` gives
/// `Low < Medium < High`; report sorting relies on this ordering.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Informational: a value outside its normal range.
    Low,
    /// A medium-tier threshold rule matched.
    Medium,
    /// A high-tier threshold rule matched.
    High,
}

impl Severity {
    /// Lowercase label used in serialized alerts and log fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
