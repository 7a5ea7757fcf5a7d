//! Error types for commitwright modules using thiserror.

use thiserror::Error;

/// Errors from reading the staged change-set out of a repository.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Failed to open repository: {0}")]
    OpenRepository(#[source] git2::Error),

    #[error("Failed to read HEAD: {0}")]
    Head(#[source] git2::Error),

    #[error("Failed to collect staged diff: {0}")]
    DiffFailed(#[source] git2::Error),
}

/// Errors from creating a commit.
#[derive(Error, Debug)]
pub enum CommitError {
    #[error("No changes to commit (nothing is staged)")]
    NoChanges,

    #[error("Failed to read index: {0}")]
    IndexFailed(#[source] git2::Error),

    #[error("Failed to create commit: {0}")]
    CommitFailed(#[source] git2::Error),

    #[error("Git config error (missing user.name or user.email): {0}")]
    ConfigError(#[source] git2::Error),
}

/// Coarse classification of a generator failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    MissingCredential,
    InvalidCredential,
    RateLimited,
    Other,
}

/// Errors from the LLM subject generator.
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("No API key configured. Set OPENAI_API_KEY to enable LLM suggestions")]
    MissingCredential,

    #[error("The API key was rejected by the LLM provider")]
    InvalidCredential,

    #[error("Rate limited by the LLM provider")]
    RateLimited,

    #[error("Diff is empty, nothing to send to the LLM")]
    EmptyDiff,

    #[error("LLM request timed out after {0} seconds")]
    Timeout(u64),

    #[error("LLM request failed: {0}")]
    Request(String),

    #[error("LLM provider returned HTTP {status}: {body}")]
    Api { status: u16, body: String },

    #[error("LLM returned an unusable response: {0}")]
    InvalidResponse(String),
}

impl GeneratorError {
    pub fn kind(&self) -> FailureKind {
        match self {
            GeneratorError::MissingCredential => FailureKind::MissingCredential,
            GeneratorError::InvalidCredential => FailureKind::InvalidCredential,
            GeneratorError::RateLimited => FailureKind::RateLimited,
            _ => FailureKind::Other,
        }
    }
}
