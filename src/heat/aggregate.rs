use crate::calendar::{Calendar, DaysAgo};
use crate::model::{CommitEvent, DayBucketMap};
use chrono::TimeZone;
use tracing::debug;

/// Folds commit events for a single author into per-day buckets.
pub struct CommitAggregator<'a, Tz: TimeZone> {
    calendar: &'a Calendar<Tz>,
    email: &'a str,
    offset: u32,
    buckets: DayBucketMap,
}

/// How many events of one batch landed in a bucket and why the rest did not.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub counted: usize,
    pub other_author: usize,
    pub out_of_range: usize,
}

impl<'a, Tz: TimeZone> CommitAggregator<'a, Tz> {
    pub fn new(calendar: &'a Calendar<Tz>, email: &'a str) -> Self {
        Self {
            calendar,
            email,
            offset: calendar.week_offset(),
            buckets: DayBucketMap::new(calendar.window()),
        }
    }

    /// Returns the bucket the event was counted in, if any.
    pub fn record(&mut self, event: &CommitEvent) -> Option<u32> {
        if event.author_email != self.email {
            return None;
        }
        match self.calendar.days_ago(&event.timestamp) {
            DaysAgo::Within(days) => {
                let bucket = days + self.offset;
                self.buckets.increment(bucket);
                Some(bucket)
            }
            DaysAgo::OutOfRange => None,
        }
    }

    pub fn extend<I>(&mut self, events: I) -> BatchSummary
    where
        I: IntoIterator<Item = CommitEvent>,
    {
        let mut summary = BatchSummary::default();
        for event in events {
            if event.author_email != self.email {
                summary.other_author += 1;
            } else if self.record(&event).is_some() {
                summary.counted += 1;
            } else {
                summary.out_of_range += 1;
            }
        }
        debug!(
            counted = summary.counted,
            other_author = summary.other_author,
            out_of_range = summary.out_of_range,
            "aggregated commit batch"
        );
        summary
    }

    pub fn finish(self) -> DayBucketMap {
        self.buckets
    }
}

/// Aggregates one stream of events into a fresh bucket map.
pub fn aggregate<Tz, I>(calendar: &Calendar<Tz>, email: &str, events: I) -> DayBucketMap
where
    Tz: TimeZone,
    I: IntoIterator<Item = CommitEvent>,
{
    let mut aggregator = CommitAggregator::new(calendar, email);
    aggregator.extend(events);
    aggregator.finish()
}
