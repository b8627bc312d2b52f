use super::{build_grid, fetch_into, output_heatmap, output_json, stats_output, CommitAggregator};
use crate::calendar::Calendar;
use crate::cli::CommonArgs;
use crate::model::Window;
use crate::repos::RepoList;
use anyhow::Context;
use tracing::{info, warn};

pub fn exec(common: CommonArgs, email: String, json: bool) -> anyhow::Result<()> {
    let list = RepoList::open(common.repos_file.as_deref())
        .context("Failed to locate repository list")?;
    let repos = list
        .load()
        .with_context(|| format!("Failed to read repository list {}", list.path().display()))?;
    if repos.is_empty() {
        warn!(
            path = %list.path().display(),
            "no repositories listed, run `gitlocalstats scan <folder>` first"
        );
    }

    let calendar = Calendar::local(Window::default());
    info!(
        today = %calendar.today(),
        offset = calendar.week_offset(),
        repositories = repos.len(),
        "collecting commit statistics"
    );

    let mut aggregator = CommitAggregator::new(&calendar, &email);
    fetch_into(&mut aggregator, &repos, !json)?;
    let buckets = aggregator.finish();
    let grid = build_grid(&buckets);

    if json {
        output_json(&stats_output(&calendar, &email, &repos, &buckets, &grid))?;
    } else {
        let styled = !common.no_color && console::colors_enabled();
        output_heatmap(&calendar, &grid, styled)?;
    }

    Ok(())
}
