//! commitwright - conventional commit messages for staged changes.
//!
//! # Overview
//!
//! commitwright reads the staged change-set of a git repository, classifies
//! it (change type, scope, touched entities) with lexical pattern tables, and
//! synthesizes conventional commit subjects from that classification. An
//! optional LLM can propose the primary subject; any failure falls back to the
//! deterministic path.

pub mod changeset;
pub mod classify;
pub mod error;
pub mod format;
pub mod llm;
pub mod message;

// Re-export commonly used types
pub use changeset::{ChangeSet, ChangeSetSource, DiffStats, GitSource, StatusLists};
pub use classify::{Analysis, ChangeType, classify};
pub use error::{CommitError, FailureKind, GeneratorError, SourceError};
pub use llm::{GeneratorConfig, OpenAiGenerator, SubjectGenerator, Suggestions, suggest};
pub use message::{
    CommitMessage, CommitType, Validation, suggest_multiple, synthesize_body, synthesize_full,
    synthesize_subject, validate,
};
