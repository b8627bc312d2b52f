use crate::model::Window;
use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, TimeZone, Weekday};

/// Where a timestamp falls relative to the tracked window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DaysAgo {
    Within(u32),
    OutOfRange,
}

/// Days from `weekday` forward to the next Sunday; a Sunday counts a full week.
pub fn week_offset(weekday: Weekday) -> u32 {
    7 - weekday.num_days_from_sunday()
}

/// Fixes "today" for one run so that every day computation agrees on it.
#[derive(Debug, Clone)]
pub struct Calendar<Tz: TimeZone> {
    tz: Tz,
    today: NaiveDate,
    window: Window,
}

impl Calendar<Local> {
    pub fn local(window: Window) -> Self {
        Self::new(Local::now(), window)
    }
}

impl<Tz: TimeZone> Calendar<Tz> {
    /// Days are counted in the time zone of `now`.
    pub fn new(now: DateTime<Tz>, window: Window) -> Self {
        Self {
            today: now.date_naive(),
            tz: now.timezone(),
            window,
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn week_offset(&self) -> u32 {
        week_offset(self.today.weekday())
    }

    /// First day shown in the month header.
    pub fn window_start(&self) -> NaiveDate {
        self.today - Duration::days(self.window.days as i64)
    }

    /// Local calendar date of `instant` in this calendar's time zone.
    fn local_date<Other: TimeZone>(&self, instant: &DateTime<Other>) -> NaiveDate {
        instant.with_timezone(&self.tz).date_naive()
    }

    /// Whole days between the start of `date`'s local day and the start of
    /// today. Dates after today count as today.
    pub fn days_ago<Other: TimeZone>(&self, date: &DateTime<Other>) -> DaysAgo {
        let days = (self.today - self.local_date(date)).num_days().max(0);
        if days > self.window.days as i64 {
            DaysAgo::OutOfRange
        } else {
            DaysAgo::Within(days as u32)
        }
    }
}
