//! Error types for rule parsing, loading, and engine construction.

/// Errors that can occur while building or loading a rule set.
///
/// All of these are construction-time failures: a rule set that does not
/// fully parse is never served, and `evaluate` itself cannot fail.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    /// Filesystem I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parse/deserialization error.
    #[error("YAML parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// A rule string does not match the `<parameter> <op> <number>` grammar.
    #[error("malformed rule: '{0}'")]
    MalformedRule(String),

    /// A rule uses a comparison symbol outside the supported `>` / `<` pair.
    #[error("unsupported operator '{0}' (expected '>' or '<')")]
    UnsupportedOperator(char),
}

/// Result alias for rule operations.
pub type Result<T> = std::result::Result<T, RuleError>;
