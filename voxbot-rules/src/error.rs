//! Error types for rule loading, matching and template rendering

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuleError>;

#[derive(Error, Debug)]
pub enum RuleError {
    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },

    #[error("Rule {rule}: placeholder %{placeholder} exceeds the pattern's {groups} capture group(s)")]
    PlaceholderOutOfRange {
        rule: usize,
        placeholder: usize,
        groups: usize,
    },

    #[error("Rule {rule}: capture group {placeholder} did not participate in the match")]
    GroupNotCaptured { rule: usize, placeholder: usize },

    #[error("Rule {rule} has no reply templates")]
    EmptyRule { rule: usize },

    #[error("Failed to parse rule file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
