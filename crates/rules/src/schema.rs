//! Rule-set document schema with serde deserialization.
//!
//! A rule set is declared as a YAML document: two ordered tiers of rule
//! strings plus the per-parameter normal-range table. Any omitted section
//! falls back to the built-in clinical defaults.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Inclusive normal bounds for one vital-sign parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NormalRange {
    pub min: f64,
    pub max: f64,
}

impl NormalRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// True when `value` lies strictly outside the bounds.
    pub fn is_outside(&self, value: f64) -> bool {
        value < self.min || value > self.max
    }
}

/// Top-level rule-set document.
///
/// The range table is an ordered map so the engine's range scan (and thus
/// low-alert emission) follows declaration order deterministically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleSetConfig {
    #[serde(default)]
    pub tiers: TierConfig,
    #[serde(default = "default_normal_ranges")]
    pub normal_ranges: IndexMap<String, NormalRange>,
}

/// The two ordered rule tiers, highest priority first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TierConfig {
    #[serde(default = "default_high_tier")]
    pub high: Vec<String>,
    #[serde(default = "default_medium_tier")]
    pub medium: Vec<String>,
}

impl Default for TierConfig {
    fn default() -> Self {
        Self {
            high: default_high_tier(),
            medium: default_medium_tier(),
        }
    }
}

impl Default for RuleSetConfig {
    fn default() -> Self {
        Self {
            tiers: TierConfig::default(),
            normal_ranges: default_normal_ranges(),
        }
    }
}

// ── Clinical defaults ───────────────────────────────────────────────

fn default_high_tier() -> Vec<String> {
    [
        "temperature > 40",
        "heart_rate > 140",
        "blood_pressure_systolic > 180",
        "blood_pressure_diastolic > 120",
        "oxygen_saturation < 85",
        "respiratory_rate > 30",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_medium_tier() -> Vec<String> {
    [
        "temperature > 38.5",
        "heart_rate > 120",
        "blood_pressure_systolic > 160",
        "blood_pressure_diastolic > 100",
        "oxygen_saturation < 90",
        "respiratory_rate > 25",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_normal_ranges() -> IndexMap<String, NormalRange> {
    IndexMap::from([
        ("temperature".to_string(), NormalRange::new(35.0, 39.0)), // °C
        ("heart_rate".to_string(), NormalRange::new(50.0, 120.0)), // bpm
        ("blood_pressure_systolic".to_string(), NormalRange::new(90.0, 160.0)), // mmHg
        ("blood_pressure_diastolic".to_string(), NormalRange::new(60.0, 100.0)), // mmHg
        ("oxygen_saturation".to_string(), NormalRange::new(90.0, 100.0)), // %
        ("respiratory_rate".to_string(), NormalRange::new(12.0, 20.0)), // breaths/min
    ])
}
