use chrono::NaiveDate;
use std::collections::HashMap;

/// Two-level hit counter keyed by GMT date, then by URL.
///
/// Iteration order is unspecified; the report emitter imposes ordering.
/// Counts only ever grow and entries are only ever added, so a date or
/// URL is present iff at least one event was tallied for it.
#[derive(Debug, Default)]
pub struct TallyStore {
    counts: HashMap<NaiveDate, HashMap<String, u32>>,
}

impl TallyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one hit for `url` on `date`, creating the inner map on
    /// first sight of the date.
    pub fn increment(&mut self, date: NaiveDate, url: String) {
        *self
            .counts
            .entry(date)
            .or_default()
            .entry(url)
            .or_insert(0) += 1;
    }

    pub fn entries(&self) -> impl Iterator<Item = (&NaiveDate, &HashMap<String, u32>)> {
        self.counts.iter()
    }

    pub fn date_count(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
