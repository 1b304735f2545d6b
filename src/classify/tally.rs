//! Distribution of raw codes over a table
//!
//! Builds the series behind distribution charts: one bucket per entry, in rank
//! order, with the share of the total each bucket holds.

use serde::Serialize;

use super::{resolve, ResolveOptions};
use crate::models::{ClassificationEntry, ClassificationTable};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bucket<'a> {
    #[serde(flatten)]
    pub entry: &'a ClassificationEntry,
    pub count: usize,
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Distribution<'a> {
    pub total: usize,
    pub buckets: Vec<Bucket<'a>>,
}

impl Distribution<'_> {
    /// Count for a code (normalized the same way lookups are); 0 when not present
    pub fn count_of(&self, code: &str) -> usize {
        let code = crate::models::normalize_code(code);
        self.buckets
            .iter()
            .find(|b| b.entry.code == code)
            .map(|b| b.count)
            .unwrap_or(0)
    }
}

/// Tally raw codes into per-entry buckets.
///
/// Every code is resolved first, so absent values follow the default rule and
/// unrecognized values are counted under the fallback entry. With `include_empty`
/// every entry gets a bucket (stable chart axes); otherwise zero-count entries are
/// left out.
pub fn tally<'a, 'r, I>(table: &'a ClassificationTable, codes: I, include_empty: bool) -> Distribution<'a>
where
    I: IntoIterator<Item = Option<&'r str>>,
{
    let mut counts = vec![0usize; table.len()];
    let mut total = 0;
    for code in codes {
        let resolved = resolve(table, code, ResolveOptions::default());
        if let Some(pos) = table.entries().iter().position(|e| std::ptr::eq(e, resolved.entry)) {
            counts[pos] += 1;
            total += 1;
        }
    }

    let buckets = table
        .entries()
        .iter()
        .zip(counts)
        .filter(|(_, count)| include_empty || *count > 0)
        .map(|(entry, count)| Bucket {
            entry,
            count,
            percent: if total == 0 { 0.0 } else { count as f64 * 100.0 / total as f64 },
        })
        .collect();

    Distribution { total, buckets }
}

/// Format a percentage with one decimal, dropping a trailing `.0`
pub fn format_percent(percent: f64) -> String {
    let rounded = (percent * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{:.0}%", rounded)
    } else {
        format!("{:.1}%", rounded)
    }
}
