//! Severity-sorted plain-text report rendering.
//!
//! `format_alerts` is a pure function of its input: alerts are stably
//! sorted by severity rank (high first) while preserving the engine's
//! relative order within a rank, so identical evaluations always render
//! identically.

use serde::Serialize;

use vitalwatch_core::{Alert, Severity};

/// Fixed message rendered for an empty alert list.
pub const NO_ALERTS_MESSAGE: &str = "No alerts at this time.";

/// Marker prefix for each severity in rendered reports.
fn severity_marker(severity: Severity) -> &'static str {
    match severity {
        Severity::High => "[HIGH]",
        Severity::Medium => "[MEDIUM]",
        Severity::Low => "[LOW]",
    }
}

/// Render an alert list as a severity-sorted human-readable report.
///
/// The input slice is not mutated; an empty list renders
/// [`NO_ALERTS_MESSAGE`].
pub fn format_alerts(alerts: &[Alert]) -> String {
    if alerts.is_empty() {
        return NO_ALERTS_MESSAGE.to_string();
    }

    let mut ordered: Vec<&Alert> = alerts.iter().collect();
    // `sort_by` is stable: equal severities keep the engine's order.
    ordered.sort_by(|a, b| b.severity.cmp(&a.severity));

    let blocks: Vec<String> = ordered
        .iter()
        .map(|alert| {
            format!(
                "{} {}\n   -> Action: {}\n   -> Value: {} (threshold: {})\n",
                severity_marker(alert.severity),
                alert.message,
                alert.action,
                alert.value,
                alert.threshold,
            )
        })
        .collect();

    blocks.join("\n")
}

/// Overall triage recommendation derived from the highest severity present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    UrgentIntervention,
    CloseMonitoring,
    RoutineMonitoring,
    WithinNormalLimits,
}

impl Recommendation {
    /// Fixed summary line rendered under a patient's report.
    pub fn summary(&self) -> &'static str {
        match self {
            Recommendation::UrgentIntervention => {
                "RECOMMENDATION: Urgent medical intervention required!"
            }
            Recommendation::CloseMonitoring => {
                "RECOMMENDATION: Close medical monitoring recommended."
            }
            Recommendation::RoutineMonitoring => {
                "RECOMMENDATION: Standard monitoring."
            }
            Recommendation::WithinNormalLimits => {
                "No alerts - parameters within normal limits."
            }
        }
    }
}

/// Derive the overall recommendation for one evaluation's alert list.
pub fn overall_recommendation(alerts: &[Alert]) -> Recommendation {
    match alerts.iter().map(|a| a.severity).max() {
        Some(Severity::High) => Recommendation::UrgentIntervention,
        Some(Severity::Medium) => Recommendation::CloseMonitoring,
        Some(Severity::Low) => Recommendation::RoutineMonitoring,
        None => Recommendation::WithinNormalLimits,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alert(parameter: &str, severity: Severity, message: &str) -> Alert {
        Alert {
            parameter: parameter.to_string(),
            value: 42.0,
            threshold: "40".to_string(),
            severity,
            message: message.to_string(),
            action: "act".to_string(),
        }
    }

    #[test]
    fn empty_list_renders_fixed_message() {
        assert_eq!(format_alerts(&[]), NO_ALERTS_MESSAGE);
    }

    #[test]
    fn non_empty_list_never_renders_fixed_message() {
        let alerts = [alert("temperature", Severity::Low, "m")];
        assert!(!format_alerts(&alerts).contains(NO_ALERTS_MESSAGE));
    }

    #[test]
    fn renders_marker_message_action_and_value() {
        let alerts = [Alert {
            parameter: "temperature".to_string(),
            value: 40.5,
            threshold: "40".to_string(),
            severity: Severity::High,
            message: "CRITICAL: temperature = 40.5 (> 40)".to_string(),
            action: "Requires immediate medical attention!".to_string(),
        }];
        assert_eq!(
            format_alerts(&alerts),
            "[HIGH] CRITICAL: temperature = 40.5 (> 40)\n   \
             -> Action: Requires immediate medical attention!\n   \
             -> Value: 40.5 (threshold: 40)\n"
        );
    }

    #[test]
    fn sorts_high_before_medium_before_low() {
        let alerts = [
            alert("heart_rate", Severity::Low, "low hr"),
            alert("temperature", Severity::High, "high temp"),
            alert("oxygen_saturation", Severity::Medium, "medium spo2"),
        ];
        let rendered = format_alerts(&alerts);
        let high = rendered.find("high temp").unwrap();
        let medium = rendered.find("medium spo2").unwrap();
        let low = rendered.find("low hr").unwrap();
        assert!(high < medium && medium < low);
    }

    #[test]
    fn sort_is_stable_within_a_severity() {
        let alerts = [
            alert("temperature", Severity::High, "first high"),
            alert("oxygen_saturation", Severity::High, "second high"),
            alert("heart_rate", Severity::Low, "first low"),
            alert("respiratory_rate", Severity::Low, "second low"),
        ];
        let rendered = format_alerts(&alerts);
        assert!(rendered.find("first high").unwrap() < rendered.find("second high").unwrap());
        assert!(rendered.find("first low").unwrap() < rendered.find("second low").unwrap());
    }

    #[test]
    fn formatting_does_not_mutate_input_order() {
        let alerts = [
            alert("heart_rate", Severity::Low, "low"),
            alert("temperature", Severity::High, "high"),
        ];
        let _ = format_alerts(&alerts);
        assert_eq!(alerts[0].parameter, "heart_rate");
        assert_eq!(alerts[1].parameter, "temperature");
    }

    #[test]
    fn recommendation_follows_highest_severity() {
        assert_eq!(
            overall_recommendation(&[]),
            Recommendation::WithinNormalLimits
        );
        assert_eq!(
            overall_recommendation(&[alert("a", Severity::Low, "m")]),
            Recommendation::RoutineMonitoring
        );
        assert_eq!(
            overall_recommendation(&[
                alert("a", Severity::Low, "m"),
                alert("b", Severity::Medium, "m"),
            ]),
            Recommendation::CloseMonitoring
        );
        assert_eq!(
            overall_recommendation(&[
                alert("a", Severity::Medium, "m"),
                alert("b", Severity::High, "m"),
                alert("c", Severity::Low, "m"),
            ]),
            Recommendation::UrgentIntervention
        );
    }

    #[test]
    fn recommendation_summaries_are_distinct() {
        let all = [
            Recommendation::UrgentIntervention,
            Recommendation::CloseMonitoring,
            Recommendation::RoutineMonitoring,
            Recommendation::WithinNormalLimits,
        ];
        let mut summaries: Vec<&str> = all.iter().map(|r| r.summary()).collect();
        summaries.sort_unstable();
        summaries.dedup();
        assert_eq!(summaries.len(), all.len());
    }
}
