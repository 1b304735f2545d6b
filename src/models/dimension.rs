use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ClassifyError;

/// Classification dimension (one axis a backend record is categorized on)
///
/// The set is closed: every dimension has exactly one built-in table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Dimension {
    Priority,
    SprintStatus,
    TaskStatus,
    TaskType,
}

impl Dimension {
    pub const ALL: [Dimension; 4] = [
        Dimension::Priority,
        Dimension::SprintStatus,
        Dimension::TaskStatus,
        Dimension::TaskType,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Priority => "priority",
            Dimension::SprintStatus => "sprint-status",
            Dimension::TaskStatus => "task-status",
            Dimension::TaskType => "task-type",
        }
    }

    /// Code substituted when a record carries no value for this dimension.
    ///
    /// Only priority declares one; the others fall through to the fallback entry.
    pub fn default_code(&self) -> Option<&'static str> {
        match self {
            Dimension::Priority => Some("low"),
            Dimension::SprintStatus | Dimension::TaskStatus | Dimension::TaskType => None,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dimension {
    type Err = ClassifyError;

    /// Parse a dimension identifier (case-insensitive, `_` and `-` interchangeable)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        match normalized.as_str() {
            "priority" => Ok(Dimension::Priority),
            "sprint-status" | "sprint" => Ok(Dimension::SprintStatus),
            "task-status" | "status" => Ok(Dimension::TaskStatus),
            "task-type" | "type" => Ok(Dimension::TaskType),
            _ => Err(ClassifyError::UnknownDimension(s.to_string())),
        }
    }
}
