use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const SCHEMA_VERSION: u32 = 1;

/// One commit as seen by the aggregator: when it was authored and by whom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitEvent {
    pub timestamp: DateTime<FixedOffset>,
    pub author_email: String,
}

impl CommitEvent {
    pub fn new(timestamp: DateTime<FixedOffset>, author_email: impl Into<String>) -> Self {
        Self {
            timestamp,
            author_email: author_email.into(),
        }
    }
}

/// The tracked time window. Always the trailing ~6 months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    pub days: u32,
    pub weeks: u32,
    pub out_of_range: u32,
}

impl Window {
    /// Week columns drawn per heatmap row, oldest included.
    pub fn columns(&self) -> u32 {
        self.weeks + 2
    }
}

impl Default for Window {
    fn default() -> Self {
        Self {
            days: 183,
            weeks: 26,
            out_of_range: 99999,
        }
    }
}

/// Commit counts keyed by offset-adjusted day index (0 = the upcoming
/// Sunday boundary, growing into the past).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayBucketMap {
    counts: BTreeMap<u32, u32>,
}

impl DayBucketMap {
    /// Every day `1..=window.days` starts out present with zero commits.
    pub fn new(window: &Window) -> Self {
        Self {
            counts: (1..=window.days).map(|day| (day, 0)).collect(),
        }
    }

    pub fn increment(&mut self, bucket: u32) {
        *self.counts.entry(bucket).or_insert(0) += 1;
    }

    pub fn get(&self, bucket: u32) -> Option<u32> {
        self.counts.get(&bucket).copied()
    }

    /// Keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = u32> + '_ {
        self.counts.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.counts.iter().map(|(&k, &v)| (k, v))
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.counts.values().map(|&c| c as u64).sum()
    }
}

/// Counts for one calendar week, oldest day first. The newest week may be
/// shorter than seven days.
pub type WeekColumn = Vec<u32>;

/// Week columns keyed by week index (0 = current week).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    weeks: BTreeMap<u32, WeekColumn>,
}

impl Grid {
    pub(crate) fn from_weeks(weeks: BTreeMap<u32, WeekColumn>) -> Self {
        Self { weeks }
    }

    pub fn week(&self, index: u32) -> Option<&[u32]> {
        self.weeks.get(&index).map(Vec::as_slice)
    }

    /// Value shown for `day` of week `index`; missing data reads as zero.
    pub fn cell(&self, index: u32, day: usize) -> u32 {
        self.week(index)
            .and_then(|col| col.get(day))
            .copied()
            .unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &[u32])> + '_ {
        self.weeks.iter().map(|(&k, v)| (k, v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.weeks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayCount {
    pub bucket: u32,
    pub commit_count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekCounts {
    pub week: u32,
    pub days: Vec<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub email: String,
    pub today: NaiveDate,
    pub offset: u32,
    pub window: Window,
    pub repositories: Vec<String>,
    pub total_commits: u64,
    pub days: Vec<DayCount>,
    pub weeks: Vec<WeekCounts>,
}
