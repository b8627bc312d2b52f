use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, StatsError>;

type BoxedSource = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Repository {} is unreadable: {source}", .path.display())]
    RepositoryUnreadable {
        path: PathBuf,
        #[source]
        source: BoxedSource,
    },
    #[error("Failed to read commit log of {}: {source}", .path.display())]
    LogReadFailure {
        path: PathBuf,
        #[source]
        source: BoxedSource,
    },
    #[error("Invalid commit timestamp: {0}")]
    InvalidTimestamp(i64),
    #[error("Could not determine the home directory")]
    HomeDirUnavailable,
    #[error("Directory walk error: {0}")]
    Walk(#[from] ignore::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl StatsError {
    pub fn unreadable<P, E>(path: P, err: E) -> Self
    where
        P: Into<PathBuf>,
        E: Into<BoxedSource>,
    {
        StatsError::RepositoryUnreadable {
            path: path.into(),
            source: err.into(),
        }
    }

    pub fn log_read<P, E>(path: P, err: E) -> Self
    where
        P: Into<PathBuf>,
        E: Into<BoxedSource>,
    {
        StatsError::LogReadFailure {
            path: path.into(),
            source: err.into(),
        }
    }
}
