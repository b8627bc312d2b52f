use super::HeatmapRenderer;
use crate::calendar::Calendar;
use crate::model::{DayBucketMap, DayCount, Grid, StatsOutput, WeekCounts, SCHEMA_VERSION};
use anyhow::Result;
use chrono::{TimeZone, Utc};
use std::io;
use std::path::PathBuf;

pub fn stats_output<Tz: TimeZone>(
    calendar: &Calendar<Tz>,
    email: &str,
    repos: &[PathBuf],
    buckets: &DayBucketMap,
    grid: &Grid,
) -> StatsOutput {
    StatsOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        email: email.to_string(),
        today: calendar.today(),
        offset: calendar.week_offset(),
        window: *calendar.window(),
        repositories: repos
            .iter()
            .map(|p| p.to_string_lossy().to_string())
            .collect(),
        total_commits: buckets.total(),
        days: buckets
            .iter()
            .map(|(bucket, commit_count)| DayCount {
                bucket,
                commit_count,
            })
            .collect(),
        weeks: grid
            .iter()
            .map(|(week, days)| WeekCounts {
                week,
                days: days.to_vec(),
            })
            .collect(),
    }
}

pub fn output_json(output: &StatsOutput) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(output)?);
    Ok(())
}

pub fn output_heatmap<Tz: TimeZone>(
    calendar: &Calendar<Tz>,
    grid: &Grid,
    styled: bool,
) -> Result<()> {
    let renderer = HeatmapRenderer::new(calendar).styled(styled);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    renderer.render(grid, &mut out)?;
    Ok(())
}
