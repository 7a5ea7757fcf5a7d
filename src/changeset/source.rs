//! Staged change-set collection using git2.

use std::path::{Path, PathBuf};

use git2::{Delta, Diff, DiffFindOptions, DiffFormat, ErrorCode, Repository, Tree};
use tracing::{debug, warn};

use crate::changeset::{ChangeSet, DiffStats, FileStatus, StatusLists};
use crate::error::SourceError;

/// Anything that can produce the change-set for the next commit.
pub trait ChangeSetSource {
    fn change_set(&self) -> Result<ChangeSet, SourceError>;
}

/// Read the change-set, absorbing retrieval failures into an empty one.
///
/// Callers only need to know whether there is anything to describe, so a
/// missing repository or a broken index both read as "no changes".
pub fn load_or_empty(source: &dyn ChangeSetSource) -> ChangeSet {
    match source.change_set() {
        Ok(changes) => changes,
        Err(e) => {
            warn!("Could not read staged changes: {e}");
            ChangeSet::default()
        }
    }
}

/// Reads the staged index of a git repository.
#[derive(Debug, Clone)]
pub struct GitSource {
    path: PathBuf,
}

impl GitSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl ChangeSetSource for GitSource {
    fn change_set(&self) -> Result<ChangeSet, SourceError> {
        let repo = Repository::discover(&self.path).map_err(SourceError::OpenRepository)?;
        collect_staged(&repo)
    }
}

/// Resolve the HEAD tree, distinguishing empty-repo errors from real failures.
///
/// Returns `Ok(None)` for repos with no commits (unborn branch / not found).
fn resolve_head_tree(repo: &Repository) -> Result<Option<Tree<'_>>, SourceError> {
    let head_ref = match repo.head() {
        Ok(r) => r,
        Err(e) if e.code() == ErrorCode::UnbornBranch || e.code() == ErrorCode::NotFound => {
            return Ok(None);
        }
        Err(e) => return Err(SourceError::Head(e)),
    };

    let tree = head_ref.peel_to_tree().map_err(SourceError::Head)?;
    Ok(Some(tree))
}

/// Collect the staged (HEAD → index) change-set of a repository.
pub fn collect_staged(repo: &Repository) -> Result<ChangeSet, SourceError> {
    let head_tree = resolve_head_tree(repo)?;

    let mut diff = repo
        .diff_tree_to_index(head_tree.as_ref(), None, None)
        .map_err(SourceError::DiffFailed)?;

    let mut find_opts = DiffFindOptions::new();
    find_opts.renames(true);
    diff.find_similar(Some(&mut find_opts))
        .map_err(SourceError::DiffFailed)?;

    let status = collect_status(&diff);

    let stats = diff.stats().map_err(SourceError::DiffFailed)?;
    let stats = DiffStats {
        files_changed: stats.files_changed(),
        insertions: stats.insertions(),
        deletions: stats.deletions(),
    };

    let diff_text = render_patch(&diff);

    debug!(
        "Staged: {} paths, {} files changed, +{} -{}",
        status.total(),
        stats.files_changed,
        stats.insertions,
        stats.deletions
    );

    Ok(ChangeSet {
        status,
        stats,
        diff_text,
    })
}

/// Group the paths of a diff by status.
fn collect_status(diff: &Diff<'_>) -> StatusLists {
    let mut status = StatusLists::default();

    for delta in diff.deltas() {
        let file_status = match delta.status() {
            Delta::Added | Delta::Untracked => FileStatus::Added,
            Delta::Deleted => FileStatus::Deleted,
            Delta::Renamed | Delta::Copied => FileStatus::Renamed,
            _ => FileStatus::Modified,
        };

        let new_path = delta
            .new_file()
            .path()
            .map(|p| p.to_string_lossy().to_string());
        let old_path = delta
            .old_file()
            .path()
            .map(|p| p.to_string_lossy().to_string());

        let path = match file_status {
            FileStatus::Deleted => old_path.or(new_path),
            _ => new_path.or(old_path),
        }
        .unwrap_or_default();

        if !path.is_empty() {
            status.push(file_status, path);
        }
    }

    status
}

/// Render a diff as unified patch text.
fn render_patch(diff: &Diff<'_>) -> String {
    let mut text = String::new();

    if let Err(e) = diff.print(DiffFormat::Patch, |_delta, _hunk, line| {
        let origin = line.origin();
        if origin == '+' || origin == '-' || origin == ' ' {
            text.push(origin);
        }
        text.push_str(&String::from_utf8_lossy(line.content()));
        true
    }) {
        warn!("Failed to render staged diff text: {e}");
    }

    text
}
