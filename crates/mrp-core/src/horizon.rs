//! Planning horizon (spec §3, §4.3): a contiguous, inclusive daily range.

use chrono::NaiveDate;

/// `[H_start, H_end]` inclusive, step = 1 day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Horizon {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Horizon {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        debug_assert!(start <= end, "horizon start must not be after horizon end");
        Self { start, end }
    }

    /// Number of days the horizon spans, inclusive of both endpoints.
    pub fn len_days(&self) -> usize {
        (self.end - self.start).num_days() as usize + 1
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Zero-based offset of `date` from `H_start`, used to index dense
    /// per-day series. Returns `None` if `date` is outside the horizon.
    pub fn day_index(&self, date: NaiveDate) -> Option<usize> {
        if !self.contains(date) {
            return None;
        }
        Some((date - self.start).num_days() as usize)
    }

    pub fn date_at(&self, day_index: usize) -> NaiveDate {
        self.start + chrono::Duration::days(day_index as i64)
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        (0..self.len_days()).map(move |i| self.date_at(i))
    }
}
