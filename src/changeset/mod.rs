//! Staged change-set data and the sources that produce it.

pub mod source;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use source::{ChangeSetSource, GitSource, load_or_empty};

/// Status of a changed file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    Added,
    Modified,
    Deleted,
    Renamed,
}

impl fmt::Display for FileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileStatus::Added => write!(f, "Added"),
            FileStatus::Modified => write!(f, "Modified"),
            FileStatus::Deleted => write!(f, "Deleted"),
            FileStatus::Renamed => write!(f, "Renamed"),
        }
    }
}

/// Paths grouped by status. A path appears in exactly one list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusLists {
    pub added: Vec<String>,
    pub modified: Vec<String>,
    pub deleted: Vec<String>,
    pub renamed: Vec<String>,
}

impl StatusLists {
    pub fn push(&mut self, status: FileStatus, path: String) {
        match status {
            FileStatus::Added => self.added.push(path),
            FileStatus::Modified => self.modified.push(path),
            FileStatus::Deleted => self.deleted.push(path),
            FileStatus::Renamed => self.renamed.push(path),
        }
    }

    /// All paths: added, modified, deleted, then renamed.
    pub fn all_paths(&self) -> impl Iterator<Item = &str> {
        self.added
            .iter()
            .chain(&self.modified)
            .chain(&self.deleted)
            .chain(&self.renamed)
            .map(String::as_str)
    }

    pub fn total(&self) -> usize {
        self.added.len() + self.modified.len() + self.deleted.len() + self.renamed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Line and file totals for the staged diff.
///
/// `files_changed` is computed by the diff engine and may disagree with the
/// number of paths in [`StatusLists`] (binary files, for instance).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffStats {
    pub files_changed: usize,
    pub insertions: usize,
    pub deletions: usize,
}

/// Everything known about one prospective commit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeSet {
    pub status: StatusLists,
    pub stats: DiffStats,
    pub diff_text: String,
}

impl ChangeSet {
    /// True when no paths are staged; callers treat this as "nothing to do".
    pub fn is_empty(&self) -> bool {
        self.status.is_empty()
    }

    pub fn all_paths(&self) -> impl Iterator<Item = &str> {
        self.status.all_paths()
    }
}
