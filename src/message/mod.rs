//! Commit message synthesis, validation and committing.

pub mod commit;
pub mod commit_type;
pub mod synth;
pub mod validate;

pub use commit::{CommitMessage, commit_staged};
pub use commit_type::CommitType;
pub use synth::{
    MAX_SUGGESTIONS, commit_type, humanize_filename, suggest_multiple, synthesize_body,
    synthesize_full, synthesize_subject,
};
pub use validate::{MAX_SUBJECT_LENGTH, Validation, ValidationRules, validate, validate_with};
