//! Change classification: turns a raw change-set into an [`Analysis`].

pub mod classifier;
pub mod tables;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use classifier::{
    Analysis, MAX_ENTITIES, categorize_files, classify, detect_change_type, determine_scope,
    extract_entities,
};

/// Semantic category of a change.
///
/// Distinct from the conventional commit type it is later mapped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    Feature,
    Fix,
    Refactor,
    Docs,
    Style,
    Test,
    Chore,
}

impl ChangeType {
    /// All change types in tie-break priority order.
    pub const ALL: [ChangeType; 7] = [
        ChangeType::Feature,
        ChangeType::Fix,
        ChangeType::Refactor,
        ChangeType::Docs,
        ChangeType::Style,
        ChangeType::Test,
        ChangeType::Chore,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeType::Feature => "feature",
            ChangeType::Fix => "fix",
            ChangeType::Refactor => "refactor",
            ChangeType::Docs => "docs",
            ChangeType::Style => "style",
            ChangeType::Test => "test",
            ChangeType::Chore => "chore",
        }
    }
}

impl fmt::Display for ChangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
