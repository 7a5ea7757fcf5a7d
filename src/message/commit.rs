//! Commit message value and the git commit operation.

use git2::{Oid, Repository};
use serde::Serialize;
use tracing::debug;

use crate::error::CommitError;

/// A commit message: subject line plus optional body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitMessage {
    pub subject: String,
    pub body: Option<String>,
}

impl CommitMessage {
    /// Split message text into subject and body at the first blank line.
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        let (subject, rest) = match text.split_once('\n') {
            Some((subject, rest)) => (subject, rest),
            None => (text, ""),
        };

        let body = rest.trim();
        Self {
            subject: subject.trim().to_string(),
            body: (!body.is_empty()).then(|| body.to_string()),
        }
    }

    /// Format the message for git.
    pub fn format(&self) -> String {
        match self.body.as_deref().map(str::trim) {
            Some(body) if !body.is_empty() => format!("{}\n\n{}", self.subject, body),
            _ => self.subject.clone(),
        }
    }
}

/// Commit whatever is currently staged.
///
/// Writes the index as a tree and commits it on HEAD. Works on an unborn
/// branch (first commit). Fails with [`CommitError::NoChanges`] when the
/// index tree equals HEAD's tree.
pub fn commit_staged(repo: &Repository, message: &str) -> Result<Oid, CommitError> {
    let mut index = repo.index().map_err(CommitError::IndexFailed)?;
    let tree_id = index.write_tree().map_err(CommitError::IndexFailed)?;
    let tree = repo.find_tree(tree_id).map_err(CommitError::CommitFailed)?;

    let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());

    match &parent {
        Some(parent) if parent.tree_id() == tree_id => return Err(CommitError::NoChanges),
        None if tree.is_empty() => return Err(CommitError::NoChanges),
        _ => {}
    }

    let sig = repo.signature().map_err(CommitError::ConfigError)?;
    let parents: Vec<&git2::Commit> = parent.iter().collect();

    let oid = repo
        .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
        .map_err(CommitError::CommitFailed)?;

    debug!("Created commit {oid}");
    Ok(oid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_format_subject_only() {
        let msg = CommitMessage {
            subject: "feat(auth): add login endpoint".to_string(),
            body: None,
        };
        assert_eq!(msg.format(), "feat(auth): add login endpoint");
    }

    #[test]
    fn test_format_with_body() {
        let msg = CommitMessage {
            subject: "feat(python): add auth".to_string(),
            body: Some("+45 -2 lines".to_string()),
        };
        assert_eq!(msg.format(), "feat(python): add auth\n\n+45 -2 lines");
    }

    #[test]
    fn test_format_blank_body() {
        let msg = CommitMessage {
            subject: "chore: bump deps".to_string(),
            body: Some("  ".to_string()),
        };
        assert_eq!(msg.format(), "chore: bump deps");
    }

    #[test]
    fn test_parse_splits_subject_and_body() {
        let msg = CommitMessage::parse("fix: handle timeout\n\nModified 4 files\n+30 -2 lines\n");
        assert_eq!(msg.subject, "fix: handle timeout");
        assert_eq!(msg.body.as_deref(), Some("Modified 4 files\n+30 -2 lines"));

        let msg = CommitMessage::parse("docs: update readme");
        assert_eq!(msg.body, None);
    }

    fn repo_with_identity() -> (tempfile::TempDir, Repository) {
        let dir = tempfile::tempdir().unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        let mut config = repo.config().unwrap();
        config.set_str("user.name", "Test User").unwrap();
        config.set_str("user.email", "test@test.com").unwrap();
        (dir, repo)
    }

    #[test]
    fn test_commit_staged_initial_commit() {
        let (dir, repo) = repo_with_identity();
        std::fs::write(dir.path().join("auth.py"), "def login():\n    pass\n").unwrap();
        let mut index = repo.index().unwrap();
        index.add_path(Path::new("auth.py")).unwrap();
        index.write().unwrap();

        let oid = commit_staged(&repo, "feat(python): add auth").unwrap();
        let commit = repo.find_commit(oid).unwrap();
        assert_eq!(commit.message().unwrap(), "feat(python): add auth");
        assert_eq!(commit.parent_count(), 0);
    }

    #[test]
    fn test_commit_staged_nothing_staged() {
        let (_dir, repo) = repo_with_identity();
        let result = commit_staged(&repo, "feat: nothing");
        assert!(matches!(result, Err(CommitError::NoChanges)));
    }
}
