//! Raw code resolution
//!
//! Maps a backend value (possibly absent, mixed-case or unrecognized) to the entry
//! that should be displayed for it. Resolution never fails: anything the table does
//! not know about lands on the fallback entry.

use serde::Serialize;

use crate::models::{normalize_code, ClassificationEntry, ClassificationTable, ColorToken};

/// Per-call resolution options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Keep the raw input on a miss so it can be shown instead of the fallback label
    pub raw_label_on_miss: bool,
}

/// Result of resolving a raw code against a table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolved<'a> {
    #[serde(flatten)]
    pub entry: &'a ClassificationEntry,
    /// Raw input, verbatim, when it missed and `raw_label_on_miss` was set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_label: Option<String>,
}

impl<'a> Resolved<'a> {
    pub fn code(&self) -> &'a str {
        &self.entry.code
    }

    pub fn label(&self) -> &'a str {
        &self.entry.label
    }

    pub fn color(&self) -> &'a ColorToken {
        &self.entry.color
    }

    pub fn sort_rank(&self) -> u32 {
        self.entry.sort_rank
    }

    pub fn is_fallback(&self) -> bool {
        self.entry.is_fallback()
    }

    /// Text to show: the preserved raw code if there is one, else the entry label
    pub fn display_label(&self) -> &str {
        self.raw_label.as_deref().unwrap_or(&self.entry.label)
    }
}

/// Resolve a raw code.
///
/// Absent input (None, empty or whitespace) takes the table's default code when it
/// declares one. Lookup is by trimmed, lowercased code. Misses return the fallback.
pub fn resolve<'a>(table: &'a ClassificationTable, raw: Option<&str>, options: ResolveOptions) -> Resolved<'a> {
    let present = raw.filter(|r| !r.trim().is_empty());

    let code = match present {
        Some(r) => normalize_code(r),
        None => match table.default_code() {
            Some(default) => default.to_string(),
            None => return Resolved { entry: table.fallback(), raw_label: None },
        },
    };

    match table.get(&code) {
        Some(entry) => Resolved { entry, raw_label: None },
        None => Resolved {
            entry: table.fallback(),
            raw_label: present.filter(|_| options.raw_label_on_miss).map(str::to_string),
        },
    }
}

impl ClassificationTable {
    /// Resolve with default options
    pub fn resolve(&self, raw: Option<&str>) -> Resolved<'_> {
        resolve(self, raw, ResolveOptions::default())
    }

    pub fn resolve_with(&self, raw: Option<&str>, options: ResolveOptions) -> Resolved<'_> {
        resolve(self, raw, options)
    }
}
