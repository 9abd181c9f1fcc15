//! # Formula Repositories
//!
//! A repository is a named tree of formulas published at a URL. Users
//! register repositories with `rit add repo` and inspect them with
//! `rit list repo`. When several repositories provide the same formula, the
//! one with the lower priority number wins, so the registry is kept sorted
//! by priority.
//!
//! The command layer depends only on [`Adder`] and [`Lister`];
//! [`RepoRegistry`] is the JSON file implementation used by the binary.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::filesystem;

/// A registered formula repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    /// URL of the repository's `tree.json`.
    pub url: String,
    /// 0 is the highest priority.
    pub priority: i64,
}

/// Registers repositories.
pub trait Adder {
    /// Add `repo`, replacing any repository with the same name.
    fn add(&self, repo: Repository) -> Result<()>;
}

/// Lists registered repositories.
pub trait Lister {
    /// All repositories, highest priority first.
    fn list(&self) -> Result<Vec<Repository>>;
}

/// Repositories stored in a JSON array file.
#[derive(Debug, Clone)]
pub struct RepoRegistry {
    path: PathBuf,
}

impl RepoRegistry {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Vec<Repository>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(Error::persistence(format!(
                    "failed to read {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };
        serde_json::from_str(&contents).map_err(|e| {
            Error::persistence(format!(
                "repository registry {} is corrupt: {}",
                self.path.display(),
                e
            ))
        })
    }

    fn write(&self, repos: &[Repository]) -> Result<()> {
        let mut contents = serde_json::to_vec_pretty(repos)?;
        contents.push(b'\n');
        filesystem::write_atomic(&self.path, &contents).map_err(|e| {
            Error::persistence(format!("failed to write {}: {}", self.path.display(), e))
        })
    }
}

impl Adder for RepoRegistry {
    fn add(&self, repo: Repository) -> Result<()> {
        let mut repos = self.read()?;
        repos.retain(|existing| existing.name != repo.name);
        log::info!(
            "adding repository '{}' ({}) with priority {}",
            repo.name,
            repo.url,
            repo.priority
        );
        repos.push(repo);
        // Stable sort keeps insertion order among equal priorities.
        repos.sort_by_key(|r| r.priority);
        self.write(&repos)
    }
}

impl Lister for RepoRegistry {
    fn list(&self) -> Result<Vec<Repository>> {
        self.read()
    }
}
