//! Vital-sign vocabulary and reading types.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Vital-sign readings for one evaluation call, keyed by parameter name.
///
/// No ordering guarantee is required on input; the engine iterates its own
/// rule tiers and range table, never this map.
pub type Vitals = HashMap<String, f64>;

/// The canonical monitored vital-sign parameters.
pub const VITAL_PARAMETERS: &[&str] = &[
    "temperature",
    "heart_rate",
    "blood_pressure_systolic",
    "blood_pressure_diastolic",
    "oxygen_saturation",
    "respiratory_rate",
];

/// A single named vital-sign observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VitalReading {
    /// Parameter name (e.g. `"oxygen_saturation"`).
    pub parameter: String,
    /// Observed value.
    pub value: f64,
}

/// Collect individual readings into the map form `evaluate` consumes.
///
/// A later reading for the same parameter overwrites an earlier one.
pub fn collect_readings(readings: impl IntoIterator<Item = VitalReading>) -> Vitals {
    readings
        .into_iter()
        .map(|r| (r.parameter, r.value))
        .collect()
}
