use crate::error::{Result, StatsError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const DEFAULT_FILE_NAME: &str = ".gitlocalstats";

/// Newline-delimited list of repository paths, kept in insertion order.
pub struct RepoList {
    path: PathBuf,
}

impl RepoList {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// `~/.gitlocalstats`, unless overridden.
    pub fn open(override_path: Option<&Path>) -> Result<Self> {
        match override_path {
            Some(p) => Ok(Self::new(p)),
            None => {
                let home = dirs::home_dir().ok_or(StatsError::HomeDirUnavailable)?;
                Ok(Self::new(home.join(DEFAULT_FILE_NAME)))
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing file is created empty.
    pub fn load(&self) -> Result<Vec<PathBuf>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "creating empty repository list");
                self.save(&[])?;
                String::new()
            }
            Err(e) => return Err(e.into()),
        };

        Ok(content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(PathBuf::from)
            .collect())
    }

    pub fn save(&self, repos: &[PathBuf]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = repos
            .iter()
            .map(|p| p.to_string_lossy())
            .collect::<Vec<_>>()
            .join("\n");
        fs::write(&self.path, content)?;
        Ok(())
    }

    /// Appends paths not yet listed and returns how many were added.
    pub fn merge(&self, new_repos: &[PathBuf]) -> Result<usize> {
        let mut repos = self.load()?;
        let before = repos.len();
        for repo in new_repos {
            if !repos.contains(repo) {
                repos.push(repo.clone());
            }
        }
        let added = repos.len() - before;
        self.save(&repos)?;
        info!(path = %self.path.display(), added, total = repos.len(), "updated repository list");
        Ok(added)
    }
}
