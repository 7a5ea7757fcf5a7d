//! Conventional commit types and their verb tables.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::classify::ChangeType;

/// Conventional commit types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitType {
    Feat,
    Fix,
    Docs,
    Style,
    Refactor,
    Perf,
    Test,
    Build,
    Ci,
    Chore,
    Revert,
}

impl CommitType {
    pub const ALL: [CommitType; 11] = [
        CommitType::Feat,
        CommitType::Fix,
        CommitType::Docs,
        CommitType::Style,
        CommitType::Refactor,
        CommitType::Perf,
        CommitType::Test,
        CommitType::Build,
        CommitType::Ci,
        CommitType::Chore,
        CommitType::Revert,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CommitType::Feat => "feat",
            CommitType::Fix => "fix",
            CommitType::Docs => "docs",
            CommitType::Style => "style",
            CommitType::Refactor => "refactor",
            CommitType::Perf => "perf",
            CommitType::Test => "test",
            CommitType::Build => "build",
            CommitType::Ci => "ci",
            CommitType::Chore => "chore",
            CommitType::Revert => "revert",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            CommitType::Feat => "A new feature",
            CommitType::Fix => "A bug fix",
            CommitType::Docs => "Documentation only changes",
            CommitType::Style => {
                "Changes that do not affect the meaning of the code (white-space, formatting, missing semi-colons, etc)"
            }
            CommitType::Refactor => "A code change that neither fixes a bug nor adds a feature",
            CommitType::Perf => "A code change that improves performance",
            CommitType::Test => "Adding missing tests or correcting existing tests",
            CommitType::Build => "Changes that affect the build system or external dependencies",
            CommitType::Ci => "Changes to our CI configuration files and scripts",
            CommitType::Chore => "Other changes that do not modify src or test files",
            CommitType::Revert => "Reverts a previous commit",
        }
    }

    /// Action verbs for descriptions, most natural first.
    pub fn verbs(&self) -> &'static [&'static str] {
        match self {
            CommitType::Feat => &["add", "implement", "create", "introduce", "build"],
            CommitType::Fix => &["fix", "resolve", "correct", "patch", "repair"],
            CommitType::Docs => &["update", "improve", "add", "enhance", "document"],
            CommitType::Style => &["format", "style", "lint", "prettify", "clean"],
            CommitType::Refactor => &[
                "refactor",
                "restructure",
                "optimize",
                "simplify",
                "reorganize",
            ],
            CommitType::Test => &["add", "update", "improve", "fix", "enhance"],
            CommitType::Chore => &["update", "upgrade", "maintain", "cleanup", "remove"],
            CommitType::Perf | CommitType::Build | CommitType::Ci | CommitType::Revert => {
                &["update"]
            }
        }
    }
}

impl From<ChangeType> for CommitType {
    fn from(change_type: ChangeType) -> Self {
        match change_type {
            ChangeType::Feature => CommitType::Feat,
            ChangeType::Fix => CommitType::Fix,
            ChangeType::Docs => CommitType::Docs,
            ChangeType::Style => CommitType::Style,
            ChangeType::Refactor => CommitType::Refactor,
            ChangeType::Test => CommitType::Test,
            ChangeType::Chore => CommitType::Chore,
        }
    }
}

impl std::str::FromStr for CommitType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "feat" => Ok(Self::Feat),
            "fix" => Ok(Self::Fix),
            "docs" => Ok(Self::Docs),
            "style" => Ok(Self::Style),
            "refactor" => Ok(Self::Refactor),
            "perf" => Ok(Self::Perf),
            "test" => Ok(Self::Test),
            "build" => Ok(Self::Build),
            "ci" => Ok(Self::Ci),
            "chore" => Ok(Self::Chore),
            "revert" => Ok(Self::Revert),
            _ => Err(format!("Unknown commit type: {}", s)),
        }
    }
}

impl fmt::Display for CommitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
