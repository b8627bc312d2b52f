use crate::error::{Result, StatsError};
use crate::model::CommitEvent;
use chrono::{DateTime, FixedOffset, Offset, Utc};
use gix::{ObjectId, Repository};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct GitRepo {
    repo: Repository,
    path: PathBuf,
}

impl GitRepo {
    /// Open the repository at exactly `path`; parent directories are not searched.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let repo = gix::open(&path).map_err(|e| StatsError::unreadable(&path, e))?;
        debug!(path = %path.display(), "opened repository");
        Ok(Self { repo, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Author email and author timestamp of every commit reachable from `HEAD`,
    /// newest first along each parent chain.
    pub fn commit_events(&self) -> Result<Vec<CommitEvent>> {
        let mut head = self
            .repo
            .head()
            .map_err(|e| StatsError::unreadable(&self.path, e))?;
        let head_commit = head
            .peel_to_commit_in_place()
            .map_err(|e| StatsError::unreadable(&self.path, e))?;

        let mut events = Vec::new();
        let mut seen: HashSet<ObjectId> = HashSet::new();
        let mut stack: Vec<ObjectId> = vec![head_commit.id];

        while let Some(commit_id) = stack.pop() {
            if !seen.insert(commit_id) {
                continue;
            }

            let commit = self
                .repo
                .find_commit(commit_id)
                .map_err(|e| StatsError::log_read(&self.path, e))?;
            let author = commit
                .author()
                .map_err(|e| StatsError::log_read(&self.path, e))?;
            let time = author
                .time()
                .map_err(|e| StatsError::log_read(&self.path, e))?;

            events.push(CommitEvent {
                timestamp: to_datetime(time.seconds, time.offset)?,
                author_email: author.email.to_string(),
            });

            // Reversed so the first parent is walked next.
            let parents: Vec<ObjectId> = commit.parent_ids().map(|id| id.detach()).collect();
            stack.extend(parents.into_iter().rev());
        }

        debug!(path = %self.path.display(), commits = events.len(), "walked history");
        Ok(events)
    }
}

/// Seconds since the epoch, displayed in the commit's own UTC offset.
fn to_datetime(seconds: i64, offset: i32) -> Result<DateTime<FixedOffset>> {
    let tz = FixedOffset::east_opt(offset).unwrap_or_else(|| Utc.fix());
    DateTime::from_timestamp(seconds, 0)
        .map(|utc| utc.with_timezone(&tz))
        .ok_or(StatsError::InvalidTimestamp(seconds))
}
