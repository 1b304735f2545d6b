use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

use super::{normalize_code, ClassificationEntry, ColorToken, Dimension, FALLBACK_CODE};
use crate::error::ClassifyError;

/// Label/color replacement for one code, read from the rc file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryOverride {
    pub label: Option<String>,
    pub color: Option<ColorToken>,
}

/// Ordered, validated set of entries for one dimension
///
/// Entries are kept in ascending `sort_rank` order; the fallback entry is part of
/// the ordering. Tables are immutable once built.
#[derive(Debug, Clone, Serialize)]
pub struct ClassificationTable {
    dimension: Dimension,
    entries: Vec<ClassificationEntry>,
    #[serde(skip)]
    index: HashMap<String, usize>,
    default_code: Option<String>,
}

impl ClassificationTable {
    /// Build and validate a table.
    ///
    /// The fallback entry is re-coded to `unknown`. Fails when codes or ranks repeat,
    /// when the fallback shares a label or color with a real entry, or when
    /// `default_code` names no real entry.
    pub fn new(
        dimension: Dimension,
        entries: Vec<ClassificationEntry>,
        mut fallback: ClassificationEntry,
        default_code: Option<&str>,
    ) -> Result<Self, ClassifyError> {
        let dim = dimension.as_str().to_string();
        fallback.code = FALLBACK_CODE.to_string();

        for entry in &entries {
            if entry.is_fallback() {
                return Err(ClassifyError::DuplicateCode { dimension: dim, code: entry.code.clone() });
            }
            if entry.label == fallback.label {
                return Err(ClassifyError::FallbackNotDistinct {
                    dimension: dim,
                    field: "label",
                    code: entry.code.clone(),
                });
            }
            if entry.color.to_hex() == fallback.color.to_hex() {
                return Err(ClassifyError::FallbackNotDistinct {
                    dimension: dim,
                    field: "color",
                    code: entry.code.clone(),
                });
            }
        }

        let mut all = entries;
        all.push(fallback);
        all.sort_by(|a, b| a.sort_rank.cmp(&b.sort_rank).then_with(|| a.code.cmp(&b.code)));

        for pair in all.windows(2) {
            if pair[0].sort_rank == pair[1].sort_rank {
                return Err(ClassifyError::DuplicateRank {
                    dimension: dim,
                    rank: pair[0].sort_rank,
                    first: pair[0].code.clone(),
                    second: pair[1].code.clone(),
                });
            }
        }

        let mut index = HashMap::with_capacity(all.len());
        for (i, entry) in all.iter().enumerate() {
            if index.insert(entry.code.clone(), i).is_some() {
                return Err(ClassifyError::DuplicateCode { dimension: dim, code: entry.code.clone() });
            }
        }

        let default_code = match default_code {
            Some(code) => {
                let code = normalize_code(code);
                match index.get(&code) {
                    Some(&i) if !all[i].is_fallback() => Some(code),
                    _ => return Err(ClassifyError::MissingDefault { dimension: dim, code }),
                }
            }
            None => None,
        };

        Ok(Self { dimension, entries: all, index, default_code })
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// All entries in rank order, fallback included
    pub fn entries(&self) -> &[ClassificationEntry] {
        &self.entries
    }

    pub fn fallback(&self) -> &ClassificationEntry {
        let i = self.index[FALLBACK_CODE];
        &self.entries[i]
    }

    pub fn default_code(&self) -> Option<&str> {
        self.default_code.as_deref()
    }

    /// Entry for the code substituted on absent input, if the dimension declares one
    pub fn default_entry(&self) -> Option<&ClassificationEntry> {
        self.default_code.as_deref().and_then(|code| self.get(code))
    }

    /// Exact lookup (after normalization); no default or fallback substitution
    pub fn get(&self, code: &str) -> Option<&ClassificationEntry> {
        self.index.get(&normalize_code(code)).map(|&i| &self.entries[i])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Copy of this table with labels/colors replaced, re-validated.
    ///
    /// Keys are codes (case-insensitive); `unknown` addresses the fallback entry.
    pub fn with_overrides(&self, overrides: &BTreeMap<String, EntryOverride>) -> Result<Self, ClassifyError> {
        let mut entries = self.entries.clone();
        for (code, replacement) in overrides {
            let code = normalize_code(code);
            let entry = entries
                .iter_mut()
                .find(|e| e.code == code)
                .ok_or_else(|| ClassifyError::UnknownCode {
                    dimension: self.dimension.as_str().to_string(),
                    code: code.clone(),
                })?;
            if let Some(ref label) = replacement.label {
                entry.label = label.clone();
            }
            if let Some(ref color) = replacement.color {
                entry.color = color.clone();
            }
        }

        let fallback_pos = entries
            .iter()
            .position(|e| e.is_fallback())
            .unwrap_or(entries.len() - 1);
        let fallback = entries.remove(fallback_pos);
        Self::new(self.dimension, entries, fallback, self.default_code.as_deref())
    }
}
