use super::CommitAggregator;
use crate::git::GitRepo;
use anyhow::Context;
use chrono::TimeZone;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use tracing::info;

/// Reads every repository in order into `aggregator`. The first repository
/// that cannot be read aborts the whole run.
pub fn fetch_into<Tz: TimeZone>(
    aggregator: &mut CommitAggregator<'_, Tz>,
    repos: &[PathBuf],
    show_progress: bool,
) -> anyhow::Result<()> {
    let pb = if show_progress {
        ProgressBar::new(repos.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{pos}/{len}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    for path in repos {
        pb.set_message(path.display().to_string());

        let repo = GitRepo::open(path)
            .with_context(|| format!("Failed to open repository {}", path.display()))?;
        let events = repo
            .commit_events()
            .with_context(|| format!("Failed to read history of {}", repo.path().display()))?;

        let summary = aggregator.extend(events);
        info!(
            path = %repo.path().display(),
            counted = summary.counted,
            "processed repository"
        );
        pb.inc(1);
    }

    pb.finish_and_clear();
    Ok(())
}
