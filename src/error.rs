// Error types for table construction and configuration
//
// Unrecognized data never produces one of these: a bad raw code resolves to the
// fallback entry. These errors describe misuse by calling code or a broken rc file.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    /// A dimension name outside the closed set was requested
    #[error("Unknown dimension: '{0}'. Valid dimensions: priority, sprint-status, task-status, task-type")]
    UnknownDimension(String),

    #[error("Invalid color: '{0}'. Use #rgb, #rrggbb, or a named token (e.g. neutral, red, blue)")]
    InvalidColor(String),

    #[error("Duplicate code '{code}' in {dimension} table")]
    DuplicateCode { dimension: String, code: String },

    #[error("Duplicate sort rank {rank} in {dimension} table ('{first}' and '{second}')")]
    DuplicateRank {
        dimension: String,
        rank: u32,
        first: String,
        second: String,
    },

    /// The fallback entry must stay visually distinguishable from real codes
    #[error("Fallback entry of {dimension} table shares its {field} with '{code}'")]
    FallbackNotDistinct {
        dimension: String,
        field: &'static str,
        code: String,
    },

    #[error("Default code '{code}' is not defined in {dimension} table")]
    MissingDefault { dimension: String, code: String },

    #[error("Unknown code '{code}' for dimension {dimension}")]
    UnknownCode { dimension: String, code: String },

    #[error("Config error on line {line}: {message}")]
    ConfigParse { line: usize, message: String },
}

impl ClassifyError {
    /// Attach an rc file line number to a validation error raised while applying overrides
    pub fn at_line(self, line: usize) -> Self {
        match self {
            ClassifyError::ConfigParse { .. } => self,
            other => ClassifyError::ConfigParse {
                line,
                message: other.to_string(),
            },
        }
    }
}
