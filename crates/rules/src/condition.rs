//! Threshold condition parsing and evaluation.
//!
//! Rules are declared as compact strings (`temperature > 40`) and parsed
//! once into [`ThresholdRule`] values at engine construction, so a malformed
//! rule is a startup failure instead of an intermittent runtime one.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RuleError};

/// Comparison operators supported by the rule grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparison {
    /// Strictly greater than the threshold (`>`).
    Above,
    /// Strictly less than the threshold (`<`).
    Below,
}

impl Comparison {
    /// The source-text symbol for this comparison.
    pub fn symbol(&self) -> char {
        match self {
            Comparison::Above => '>',
            Comparison::Below => '<',
        }
    }

    /// Apply the comparison to an observed value. Both comparisons are strict.
    pub fn evaluate(&self, value: f64, threshold: f64) -> bool {
        match self {
            Comparison::Above => value > threshold,
            Comparison::Below => value < threshold,
        }
    }
}

/// A parsed threshold rule: parameter, comparison, numeric threshold.
///
/// Immutable once constructed. Invariants held by [`ThresholdRule::parse`]:
/// the comparison is one of the two supported operators and the threshold is
/// a finite non-negative number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdRule {
    /// Vital-sign parameter the rule applies to.
    pub parameter: String,
    /// Comparison operator.
    pub comparison: Comparison,
    /// Numeric threshold the observed value is compared against.
    pub threshold: f64,
}

impl ThresholdRule {
    /// Parse a rule string of the form `<parameter> <op> <number>`.
    ///
    /// The parameter is a run of ASCII letters and underscores, the operator
    /// is `>` or `<`, and the number is a non-negative decimal with an
    /// optional fractional part. Whitespace around the operator is optional.
    ///
    /// # Errors
    ///
    /// [`RuleError::UnsupportedOperator`] when the rule is comparison-shaped
    /// but uses a single symbol outside `>` / `<` (e.g. `=`);
    /// [`RuleError::MalformedRule`] for every other shape failure, including
    /// operator digraphs like `>>` or `>=`.
    pub fn parse(input: &str) -> Result<Self> {
        let malformed = || RuleError::MalformedRule(input.to_string());

        let rest = input.trim();
        let param_len = rest
            .chars()
            .take_while(|c| c.is_ascii_alphabetic() || *c == '_')
            .count();
        let (parameter, rest) = rest.split_at(param_len);
        if parameter.is_empty() {
            return Err(malformed());
        }

        let rest = rest.trim_start();
        let op_len = rest
            .chars()
            .take_while(|c| matches!(c, '>' | '<' | '=' | '!' | '~'))
            .count();
        let (op, rest) = rest.split_at(op_len);
        let comparison = match op {
            ">" => Comparison::Above,
            "<" => Comparison::Below,
            "=" => return Err(RuleError::UnsupportedOperator('=')),
            "!" => return Err(RuleError::UnsupportedOperator('!')),
            "~" => return Err(RuleError::UnsupportedOperator('~')),
            _ => return Err(malformed()),
        };

        let number = rest.trim();
        if !is_decimal(number) {
            return Err(malformed());
        }
        let threshold: f64 = number.parse().map_err(|_| malformed())?;
        if !threshold.is_finite() {
            return Err(malformed());
        }

        Ok(Self {
            parameter: parameter.to_string(),
            comparison,
            threshold,
        })
    }

    /// True when `value` satisfies this rule.
    pub fn matches(&self, value: f64) -> bool {
        self.comparison.evaluate(value, self.threshold)
    }
}

impl std::fmt::Display for ThresholdRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.parameter, self.comparison.symbol(), self.threshold)
    }
}

/// Non-negative decimal: at least one digit, at most one `.`.
fn is_decimal(s: &str) -> bool {
    let mut seen_dot = false;
    let mut seen_digit = false;
    for c in s.chars() {
        if c == '.' {
            if seen_dot {
                return false;
            }
            seen_dot = true;
        } else if c.is_ascii_digit() {
            seen_digit = true;
        } else {
            return false;
        }
    }
    seen_digit
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_basic_rule() {
        let rule = ThresholdRule::parse("temperature > 40").unwrap();
        assert_eq!(rule.parameter, "temperature");
        assert_eq!(rule.comparison, Comparison::Above);
        assert_eq!(rule.threshold, 40.0);
    }

    #[test]
    fn parse_below_rule_with_underscores() {
        let rule = ThresholdRule::parse("oxygen_saturation < 85").unwrap();
        assert_eq!(rule.parameter, "oxygen_saturation");
        assert_eq!(rule.comparison, Comparison::Below);
        assert_eq!(rule.threshold, 85.0);
    }

    #[test]
    fn parse_fractional_threshold() {
        let rule = ThresholdRule::parse("temperature > 38.5").unwrap();
        assert_eq!(rule.threshold, 38.5);
    }

    #[test]
    fn parse_tolerates_whitespace() {
        assert!(ThresholdRule::parse("heart_rate>120").is_ok());
        assert!(ThresholdRule::parse("  heart_rate   >   120  ").is_ok());
    }

    #[test]
    fn doubled_operator_is_malformed() {
        let err = ThresholdRule::parse("temperature >> 40").unwrap_err();
        assert!(matches!(err, RuleError::MalformedRule(ref s) if s == "temperature >> 40"));
    }

    #[test]
    fn gte_digraph_is_malformed() {
        assert!(matches!(
            ThresholdRule::parse("temperature >= 40"),
            Err(RuleError::MalformedRule(_))
        ));
    }

    #[test]
    fn equals_is_unsupported_operator() {
        assert!(matches!(
            ThresholdRule::parse("temperature = 40"),
            Err(RuleError::UnsupportedOperator('='))
        ));
    }

    #[test]
    fn missing_operator_is_malformed() {
        assert!(matches!(
            ThresholdRule::parse("temperature 40"),
            Err(RuleError::MalformedRule(_))
        ));
    }

    #[test]
    fn missing_parameter_is_malformed() {
        assert!(matches!(
            ThresholdRule::parse("> 40"),
            Err(RuleError::MalformedRule(_))
        ));
    }

    #[test]
    fn missing_or_bad_number_is_malformed() {
        assert!(ThresholdRule::parse("temperature >").is_err());
        assert!(ThresholdRule::parse("temperature > abc").is_err());
        assert!(ThresholdRule::parse("temperature > 4.0.1").is_err());
        assert!(ThresholdRule::parse("temperature > -5").is_err());
    }

    #[test]
    fn comparisons_are_strict() {
        let above = ThresholdRule::parse("heart_rate > 120").unwrap();
        assert!(!above.matches(120.0));
        assert!(above.matches(120.1));

        let below = ThresholdRule::parse("oxygen_saturation < 90").unwrap();
        assert!(!below.matches(90.0));
        assert!(below.matches(89.9));
    }

    #[test]
    fn display_round_trips_through_parse() {
        let rule = ThresholdRule::parse("respiratory_rate > 30").unwrap();
        assert_eq!(rule, ThresholdRule::parse(&rule.to_string()).unwrap());
    }
}
