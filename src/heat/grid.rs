use crate::model::{DayBucketMap, Grid, WeekColumn};
use std::collections::BTreeMap;

/// Lays day buckets out as week columns.
///
/// A column is stored only when its seventh day (`k % 7 == 6`) is reached, so
/// a week whose last day never appears among the keys is left out entirely.
/// The renderer reads such weeks as empty.
pub fn build_grid(buckets: &DayBucketMap) -> Grid {
    let mut weeks: BTreeMap<u32, WeekColumn> = BTreeMap::new();
    let mut column = WeekColumn::new();

    for (day, count) in buckets.iter() {
        let week = day / 7;
        let day_in_week = day % 7;

        if day_in_week == 0 {
            column = WeekColumn::new();
        }

        column.push(count);

        if day_in_week == 6 {
            weeks.insert(week, column.clone());
        }
    }

    Grid::from_weeks(weeks)
}
