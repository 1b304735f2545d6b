use serde::{Deserialize, Serialize};

use super::ColorToken;

/// Code of the catch-all entry every table carries
pub const FALLBACK_CODE: &str = "unknown";

/// One row of a classification table: a code with its display attributes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationEntry {
    pub code: String,
    pub label: String,
    pub color: ColorToken,
    pub sort_rank: u32,
}

impl ClassificationEntry {
    pub fn new(code: &str, label: &str, color: ColorToken, sort_rank: u32) -> Self {
        Self {
            code: normalize_code(code),
            label: label.to_string(),
            color,
            sort_rank,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.code == FALLBACK_CODE
    }
}

/// Normalize a raw code for comparison (trim + lowercase)
pub fn normalize_code(raw: &str) -> String {
    raw.trim().to_lowercase()
}
