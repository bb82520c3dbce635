//! Rule-set validation with structured errors and suggestions.
//!
//! Validates a [`RuleSetConfig`] before engine construction: rule grammar,
//! parameter vocabulary, and range sanity. Returns a [`ValidationResult`]
//! with errors (block construction) and warnings (advisory).

use serde::{Deserialize, Serialize};

use vitalwatch_core::VITAL_PARAMETERS;

use crate::condition::ThresholdRule;
use crate::schema::RuleSetConfig;

// ── Result types ────────────────────────────────────────────────────

/// Overall validation outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

/// A blocking validation error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationError {
    /// Path-like location, e.g. `"tiers.high[2]"`.
    pub path: String,
    pub message: String,
    /// Optional "Did you mean …?" suggestion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

/// A non-blocking advisory warning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationResult {
    fn new() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    fn error(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.valid = false;
        self.errors.push(ValidationError {
            path: path.into(),
            message: message.into(),
            suggestion: None,
        });
    }

    fn error_with_suggestion(
        &mut self,
        path: impl Into<String>,
        message: impl Into<String>,
        suggestion: impl Into<String>,
    ) {
        self.valid = false;
        self.errors.push(ValidationError {
            path: path.into(),
            message: message.into(),
            suggestion: Some(suggestion.into()),
        });
    }

    fn warn(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ValidationWarning {
            path: path.into(),
            message: message.into(),
        });
    }
}

// ── Public API ──────────────────────────────────────────────────────

/// Validate a rule-set configuration.
pub fn validate_config(config: &RuleSetConfig) -> ValidationResult {
    let mut result = ValidationResult::new();
    validate_tier(&config.tiers.high, "tiers.high", config, &mut result);
    validate_tier(&config.tiers.medium, "tiers.medium", config, &mut result);
    validate_ranges(config, &mut result);

    if config.tiers.high.is_empty() && config.tiers.medium.is_empty() {
        result.warn(
            "tiers",
            "Both tiers are empty; only normal-range alerts can fire",
        );
    }
    result
}

/// Parse raw YAML and validate. Returns parse errors merged with validation errors.
pub fn validate_yaml(yaml: &str) -> ValidationResult {
    match serde_yaml::from_str::<RuleSetConfig>(yaml) {
        Ok(config) => validate_config(&config),
        Err(e) => {
            let mut result = ValidationResult::new();
            result.error("", format!("YAML parse error: {e}"));
            result
        }
    }
}

// ── Tier validation ─────────────────────────────────────────────────

fn validate_tier(
    rules: &[String],
    tier_path: &str,
    config: &RuleSetConfig,
    result: &mut ValidationResult,
) {
    for (i, raw) in rules.iter().enumerate() {
        let path = format!("{tier_path}[{i}]");
        match ThresholdRule::parse(raw) {
            Ok(rule) => {
                validate_parameter_name(&rule.parameter, &path, result);
                if !config.normal_ranges.contains_key(&rule.parameter) {
                    result.warn(
                        &path,
                        format!(
                            "No normal range configured for '{}'; the range scan never covers it",
                            rule.parameter
                        ),
                    );
                }
            }
            Err(e) => result.error(&path, format!("Invalid rule '{raw}': {e}")),
        }
    }
}

// ── Range validation ────────────────────────────────────────────────

fn validate_ranges(config: &RuleSetConfig, result: &mut ValidationResult) {
    for (parameter, range) in &config.normal_ranges {
        let path = format!("normal_ranges.{parameter}");
        validate_parameter_name(parameter, &path, result);

        if !range.min.is_finite() || !range.max.is_finite() {
            result.error(&path, "Range bounds must be finite numbers");
        } else if range.min > range.max {
            result.error(
                &path,
                format!("min {} exceeds max {}", range.min, range.max),
            );
        }
    }
}

// ── Parameter vocabulary ────────────────────────────────────────────

/// Validate a parameter name against the canonical vital-sign vocabulary.
fn validate_parameter_name(name: &str, path: &str, result: &mut ValidationResult) {
    if !VITAL_PARAMETERS.contains(&name) {
        match fuzzy_match(name, VITAL_PARAMETERS) {
            Some(s) => result.error_with_suggestion(
                path,
                format!("Unknown vital-sign parameter '{name}'"),
                format!("Did you mean '{s}'?"),
            ),
            None => result.error(path, format!("Unknown vital-sign parameter '{name}'")),
        }
    }
}

/// Find the closest match using Levenshtein distance. Returns None if best
/// distance exceeds half the candidate length (too dissimilar).
fn fuzzy_match<'a>(input: &str, candidates: &[&'a str]) -> Option<&'a str> {
    let input_lower = input.to_lowercase();
    let mut best: Option<(&str, usize)> = None;

    for &candidate in candidates {
        let dist = levenshtein(&input_lower, &candidate.to_lowercase());
        match best {
            None => best = Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => best = Some((candidate, dist)),
            _ => {}
        }
    }

    best.and_then(|(name, dist)| {
        let max_len = input.len().max(name.len());
        if dist <= max_len / 2 {
            Some(name)
        } else {
            None
        }
    })
}

/// Levenshtein edit distance between two strings.
fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let m = a.len();
    let n = b.len();

    let mut prev = (0..=n).collect::<Vec<_>>();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1)
                .min(curr[j - 1] + 1)
                .min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

// ── Tests ───────────────────────────────────────────────────────────
