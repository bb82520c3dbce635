//! Filesystem loading of rule-set documents.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::schema::RuleSetConfig;

/// Read and deserialize a rule-set YAML file.
///
/// Rule strings are not parsed here; that happens at engine construction,
/// where the first malformed rule aborts with a construction error.
///
/// # Errors
///
/// [`RuleError::Io`](crate::RuleError::Io) when the file cannot be read,
/// [`RuleError::Parse`](crate::RuleError::Parse) when it is not a valid
/// rule-set document.
pub fn load_rule_set(path: impl AsRef<Path>) -> Result<RuleSetConfig> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)?;
    let config: RuleSetConfig = serde_yaml::from_str(&raw)?;
    info!(
        path = %path.display(),
        high = config.tiers.high.len(),
        medium = config.tiers.medium.len(),
        ranges = config.normal_ranges.len(),
        "loaded rule set"
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RuleError;
    use std::io::Write;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".yml")
            .tempfile()
            .unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn load_valid_rule_set() {
        let file = write_temp(
            r#"
tiers:
  high:
    - temperature > 41
  medium:
    - temperature > 39
normal_ranges:
  temperature: { min: 35.0, max: 39.0 }
"#,
        );
        let config = load_rule_set(file.path()).unwrap();
        assert_eq!(config.tiers.high, vec!["temperature > 41"]);
        assert_eq!(config.normal_ranges.len(), 1);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_rule_set("/definitely/not/here.yml").unwrap_err();
        assert!(matches!(err, RuleError::Io(_)));
    }

    #[test]
    fn invalid_yaml_is_parse_error() {
        let file = write_temp("tiers: [not, a, mapping]");
        let err = load_rule_set(file.path()).unwrap_err();
        assert!(matches!(err, RuleError::Parse(_)));
    }
}
