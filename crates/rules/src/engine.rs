//! Tiered alert engine: high/medium threshold tiers plus normal-range scan.
//!
//! Evaluation order is the priority policy:
//! 1. every high-tier rule; each match emits a `high` alert
//! 2. the medium tier, only when the high tier produced nothing; a single
//!    high alert suppresses the entire medium tier
//! 3. the normal-range scan, always, skipping parameters already flagged by
//!    a tier rule

use indexmap::IndexMap;
use tracing::debug;

use vitalwatch_core::{Alert, Severity, Vitals};

use crate::condition::ThresholdRule;
use crate::error::Result;
use crate::schema::{NormalRange, RuleSetConfig};

/// The two ordered rule tiers plus the normal-range table.
///
/// Constructed once (defaults or caller-supplied config) and read-only for
/// the engine's lifetime. Runtime reconfiguration is a whole-engine
/// replacement, never in-place mutation.
#[derive(Debug, Clone)]
pub struct RuleSet {
    high: Vec<ThresholdRule>,
    medium: Vec<ThresholdRule>,
    normal_ranges: IndexMap<String, NormalRange>,
}

impl RuleSet {
    /// Parse every rule string in `config` into a ready-to-evaluate rule set.
    ///
    /// Fails on the first malformed rule; a half-built rule set is never
    /// returned.
    pub fn from_config(config: &RuleSetConfig) -> Result<Self> {
        let high = parse_tier(&config.tiers.high)?;
        let medium = parse_tier(&config.tiers.medium)?;
        debug!(
            high = high.len(),
            medium = medium.len(),
            ranges = config.normal_ranges.len(),
            "rule set ready"
        );
        Ok(Self {
            high,
            medium,
            normal_ranges: config.normal_ranges.clone(),
        })
    }

    /// The built-in clinical default rule set.
    pub fn clinical_defaults() -> Self {
        // The default rule strings are compiled in; parsing them cannot fail.
        Self::from_config(&RuleSetConfig::default()).expect("built-in clinical defaults parse")
    }

    /// High-tier rules in declaration order.
    pub fn high(&self) -> &[ThresholdRule] {
        &self.high
    }

    /// Medium-tier rules in declaration order.
    pub fn medium(&self) -> &[ThresholdRule] {
        &self.medium
    }

    /// The normal-range table in declaration order.
    pub fn normal_ranges(&self) -> &IndexMap<String, NormalRange> {
        &self.normal_ranges
    }
}

fn parse_tier(rules: &[String]) -> Result<Vec<ThresholdRule>> {
    rules.iter().map(|r| ThresholdRule::parse(r)).collect()
}

/// Evaluates patient vitals against an immutable [`RuleSet`].
///
/// `evaluate` is a pure function of its inputs; an engine may be shared
/// read-only across threads without synchronization.
#[derive(Debug, Clone)]
pub struct AlertEngine {
    rules: RuleSet,
}

impl AlertEngine {
    /// Engine over the built-in clinical defaults.
    pub fn new() -> Self {
        Self {
            rules: RuleSet::clinical_defaults(),
        }
    }

    /// Engine over a caller-supplied configuration.
    ///
    /// Surfaces the first rule parse failure; callers must not fall back to
    /// an empty rule set.
    pub fn from_config(config: &RuleSetConfig) -> Result<Self> {
        Ok(Self {
            rules: RuleSet::from_config(config)?,
        })
    }

    /// The rule set this engine evaluates against.
    pub fn rule_set(&self) -> &RuleSet {
        &self.rules
    }

    /// Evaluate one patient's vitals, returning alerts in tier order:
    /// high matches first, then medium, then range alerts.
    ///
    /// Parameters absent from `vitals` are silently skipped at every stage;
    /// unknown parameters in `vitals` are ignored. Never fails.
    pub fn evaluate(&self, vitals: &Vitals) -> Vec<Alert> {
        let mut alerts = Vec::new();

        for rule in &self.rules.high {
            if let Some(&value) = vitals.get(&rule.parameter) {
                if rule.matches(value) {
                    alerts.push(tier_alert(rule, value, Severity::High));
                }
            }
        }

        // Any high alert suppresses the entire medium tier.
        if alerts.is_empty() {
            for rule in &self.rules.medium {
                if let Some(&value) = vitals.get(&rule.parameter) {
                    if rule.matches(value) {
                        alerts.push(tier_alert(rule, value, Severity::Medium));
                    }
                }
            }
        }

        // Range scan always runs, but a parameter already flagged by a tier
        // rule is not flagged again.
        for (parameter, range) in &self.rules.normal_ranges {
            let Some(&value) = vitals.get(parameter) else {
                continue;
            };
            if !range.is_outside(value) {
                continue;
            }
            if alerts.iter().any(|a| &a.parameter == parameter) {
                continue;
            }
            alerts.push(range_alert(parameter, value, range));
        }

        alerts
    }
}

impl Default for AlertEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the alert for a tier rule match.
fn tier_alert(rule: &ThresholdRule, value: f64, severity: Severity) -> Alert {
    let (label, action) = match severity {
        Severity::High => ("CRITICAL", "Requires immediate medical attention!"),
        _ => ("Alert", "Close monitoring recommended."),
    };
    Alert {
        parameter: rule.parameter.clone(),
        value,
        threshold: rule.threshold.to_string(),
        severity,
        message: format!(
            "{label}: {} = {} ({} {})",
            rule.parameter,
            value,
            rule.comparison.symbol(),
            rule.threshold
        ),
        action: action.to_string(),
    }
}

/// Build the low-severity alert for a value outside its normal range.
fn range_alert(parameter: &str, value: f64, range: &NormalRange) -> Alert {
    let (threshold, message) = if value < range.min {
        (
            format!("< {}", range.min),
            format!("Low value: {parameter} = {value} (min: {})", range.min),
        )
    } else {
        (
            format!("> {}", range.max),
            format!("High value: {parameter} = {value} (max: {})", range.max),
        )
    };
    Alert {
        parameter: parameter.to_string(),
        value,
        threshold,
        severity: Severity::Low,
        message,
        action: "Routine monitoring advised.".to_string(),
    }
}
