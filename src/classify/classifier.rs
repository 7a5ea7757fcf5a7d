//! Pattern-scoring classifier.
//!
//! Every function here is pure: the same change-set always yields the same
//! [`Analysis`], and nothing in this module can fail.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use super::ChangeType;
use super::tables::{
    CHANGE_REGEXES, CONFIG_CATEGORY, ENTITY_REGEX, category_for_extension, category_rank,
};
use crate::changeset::{ChangeSet, DiffStats, StatusLists};

/// Maximum number of entities kept from a diff.
pub const MAX_ENTITIES: usize = 5;

/// Classification of one change-set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    pub change_type: ChangeType,
    pub scope: Option<String>,
    pub file_type_counts: BTreeMap<String, usize>,
    pub entities: Vec<String>,
    pub status: StatusLists,
    pub stats: DiffStats,
    #[serde(skip)]
    pub raw_diff: String,
}

/// Classify a change-set.
pub fn classify(changes: &ChangeSet) -> Analysis {
    let file_type_counts = categorize_files(changes.all_paths());
    let change_type = detect_change_type(&changes.diff_text);
    let entities = extract_entities(&changes.diff_text);
    let scope = determine_scope(&file_type_counts, changes.all_paths());

    debug!(
        "Classified as {} (scope: {:?}, {} entities)",
        change_type,
        scope,
        entities.len()
    );

    Analysis {
        change_type,
        scope,
        file_type_counts,
        entities,
        status: changes.status.clone(),
        stats: changes.stats,
        raw_diff: changes.diff_text.clone(),
    }
}

/// Lower-cased extension of a path, without the dot. Dot-files have none.
fn extension(path: &str) -> String {
    Path::new(path)
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

fn category_of(path: &str) -> &'static str {
    category_for_extension(&extension(path))
}

/// Count paths per file category.
pub fn categorize_files<'a>(paths: impl IntoIterator<Item = &'a str>) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for path in paths {
        *counts.entry(category_of(path).to_string()).or_insert(0) += 1;
    }
    counts
}

/// Score the diff against each change type's patterns and pick the winner.
///
/// No evidence at all means [`ChangeType::Feature`]. Equal non-zero scores go
/// to the type listed first in the pattern table.
pub fn detect_change_type(diff_text: &str) -> ChangeType {
    let lowered = diff_text.to_lowercase();

    let mut best = ChangeType::Feature;
    let mut best_score = 0usize;

    for (change_type, regexes) in CHANGE_REGEXES.iter() {
        let score: usize = regexes.iter().map(|re| re.find_iter(&lowered).count()).sum();
        if score > best_score {
            best = *change_type;
            best_score = score;
        }
    }

    best
}

/// Names declared on added lines, first-seen order, deduplicated, at most
/// [`MAX_ENTITIES`].
pub fn extract_entities(diff_text: &str) -> Vec<String> {
    let mut entities: Vec<String> = Vec::new();

    let added_lines = diff_text
        .lines()
        .filter(|line| line.starts_with('+') && !line.starts_with("+++"));

    for line in added_lines {
        for caps in ENTITY_REGEX.captures_iter(&line[1..]) {
            let Some(name) = caps.get(1).or_else(|| caps.get(2)) else {
                continue;
            };
            if !entities.iter().any(|e| e == name.as_str()) {
                entities.push(name.as_str().to_string());
                if entities.len() == MAX_ENTITIES {
                    return entities;
                }
            }
        }
    }

    entities
}

/// Pick the scope token for a change-set.
pub fn determine_scope<'a>(
    file_type_counts: &BTreeMap<String, usize>,
    paths: impl IntoIterator<Item = &'a str>,
) -> Option<String> {
    if file_type_counts.len() == 1 {
        return file_type_counts.keys().next().cloned();
    }

    let paths: Vec<String> = paths.into_iter().map(str::to_lowercase).collect();

    if paths.iter().any(|p| p.contains("test")) {
        return Some("test".to_string());
    }
    if paths.iter().any(|p| p.contains("doc") || p.contains("readme")) {
        return Some("docs".to_string());
    }
    if paths
        .iter()
        .any(|p| p.contains("config") || category_of(p) == CONFIG_CATEGORY)
    {
        return Some(CONFIG_CATEGORY.to_string());
    }

    file_type_counts
        .iter()
        .max_by(|(a_name, a_count), (b_name, b_count)| {
            a_count
                .cmp(b_count)
                .then_with(|| category_rank(b_name).cmp(&category_rank(a_name)))
        })
        .map(|(name, _)| name.clone())
}
