use crate::cli::CommonArgs;
use crate::error::{Result, StatsError};
use crate::repos::RepoList;
use anyhow::Context;
use console::style;
use ignore::{DirEntry, WalkBuilder};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const SKIPPED_DIRS: [&str; 3] = [".git", "vendor", "node_modules"];

pub fn exec(common: CommonArgs, folder: PathBuf) -> anyhow::Result<()> {
    let root = expand_home(&folder).context("Failed to expand folder path")?;
    info!(root = %root.display(), "scanning for repositories");

    let found = find_repositories(&root)
        .with_context(|| format!("Failed to scan {}", root.display()))?;
    for repo in &found {
        println!("{}", repo.display());
    }

    let list = RepoList::open(common.repos_file.as_deref())
        .context("Failed to locate repository list")?;
    let added = list
        .merge(&found)
        .context("Failed to update repository list")?;

    println!(
        "\nFound {} repositories, {} new, saved to {}",
        style(found.len()).cyan(),
        style(added).green(),
        style(list.path().display()).dim()
    );
    Ok(())
}

/// Every directory under `root` that contains a `.git` directory.
pub fn find_repositories(root: &Path) -> Result<Vec<PathBuf>> {
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .filter_entry(|entry| !is_skipped(entry))
        .build();

    let mut repos = Vec::new();
    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_some_and(|t| t.is_dir()) {
            continue;
        }
        if entry.path().join(".git").is_dir() {
            debug!(path = %entry.path().display(), "found repository");
            repos.push(entry.path().to_path_buf());
        }
    }

    repos.sort();
    Ok(repos)
}

fn is_skipped(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_some_and(|t| t.is_dir())
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| SKIPPED_DIRS.contains(&name))
}

/// Resolves a leading `~` against the home directory.
pub fn expand_home(path: &Path) -> Result<PathBuf> {
    let Ok(rest) = path.strip_prefix("~") else {
        return Ok(path.to_path_buf());
    };
    let home = dirs::home_dir().ok_or(StatsError::HomeDirUnavailable)?;
    if rest.as_os_str().is_empty() {
        return Ok(home);
    }
    Ok(home.join(rest))
}
