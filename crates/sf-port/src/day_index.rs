//! `DayIndex`: trip indices bucketed by calendar date.
//!
//! The port loop visits every date in the window but only a fraction of
//! trips touch any one day.  Bucketing once up front turns the per-day scan
//! of the whole log into a lookup.

use std::collections::BTreeMap;

use chrono::NaiveDate;

/// Maps dates to the indices (into the trip log) of trips on that date.
/// Indices within a date keep insertion order.
#[derive(Default, Debug)]
pub struct DayIndex {
    inner: BTreeMap<NaiveDate, Vec<usize>>,
    total: usize,
}

impl DayIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index `items` by the date `key` extracts from each.
    pub fn build<T>(items: &[T], key: impl Fn(&T) -> NaiveDate) -> Self {
        let mut index = Self::new();
        for (i, item) in items.iter().enumerate() {
            index.push(key(item), i);
        }
        index
    }

    pub fn push(&mut self, date: NaiveDate, item: usize) {
        self.inner.entry(date).or_default().push(item);
        self.total += 1;
    }

    /// Entries for `date`; empty if none.
    pub fn on(&self, date: NaiveDate) -> &[usize] {
        self.inner.get(&date).map_or(&[], Vec::as_slice)
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        self.inner.keys().next().copied()
    }

    pub fn last_day(&self) -> Option<NaiveDate> {
        self.inner.keys().next_back().copied()
    }

    /// Total entries across all dates.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of distinct dates with at least one entry.
    pub fn day_count(&self) -> usize {
        self.inner.len()
    }
}
