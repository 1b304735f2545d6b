// Rank ordering for chart axes and legends

use super::Resolved;
use crate::models::ClassificationEntry;

/// Anything that carries a classification rank
pub trait Ranked {
    fn sort_rank(&self) -> u32;
    fn code(&self) -> &str;
}

impl Ranked for ClassificationEntry {
    fn sort_rank(&self) -> u32 {
        self.sort_rank
    }

    fn code(&self) -> &str {
        &self.code
    }
}

impl Ranked for Resolved<'_> {
    fn sort_rank(&self) -> u32 {
        self.entry.sort_rank
    }

    fn code(&self) -> &str {
        &self.entry.code
    }
}

impl<T: Ranked + ?Sized> Ranked for &T {
    fn sort_rank(&self) -> u32 {
        (**self).sort_rank()
    }

    fn code(&self) -> &str {
        (**self).code()
    }
}

/// A (record, classification) pair ranks by its classification
impl<K, R: Ranked> Ranked for (K, R) {
    fn sort_rank(&self) -> u32 {
        self.1.sort_rank()
    }

    fn code(&self) -> &str {
        self.1.code()
    }
}

/// Order by ascending rank, then by code; stable for fully equal keys
pub fn sort_by_rank<T: Ranked>(entries: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut sorted: Vec<T> = entries.into_iter().collect();
    sorted.sort_by(|a, b| a.sort_rank().cmp(&b.sort_rank()).then_with(|| a.code().cmp(b.code())));
    sorted
}
