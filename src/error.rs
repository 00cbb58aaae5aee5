// Error types for entry parsing and configuration

use thiserror::Error;

/// Failure to turn a single tag into a typed value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryError {
    /// Date string matches neither `MM/DD` nor `MM/DD/YYYY`
    #[error("invalid date format: '{value}' (expected MM/DD or MM/DD/YYYY)")]
    InvalidDateFormat { value: String },

    /// Cost value is missing or not a non-negative integer
    #[error("invalid cost: '{value}' (expected a whole number of days)")]
    InvalidCost { value: String },
}

impl EntryError {
    pub fn invalid_date(value: Option<&str>) -> Self {
        EntryError::InvalidDateFormat {
            value: value.unwrap_or_default().to_string(),
        }
    }

    pub fn invalid_cost(value: Option<&str>) -> Self {
        EntryError::InvalidCost {
            value: value.unwrap_or_default().to_string(),
        }
    }
}

/// Entry error located in the source text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {source}")]
pub struct LineError {
    /// 1-based line number in the source
    pub line: usize,
    /// Trimmed text of the offending line
    pub text: String,
    #[source]
    pub source: EntryError,
}

/// Malformed value in the rc file
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid value for '{key}': '{value}' ({expected})")]
    InvalidValue {
        key: String,
        value: String,
        expected: &'static str,
    },
}
