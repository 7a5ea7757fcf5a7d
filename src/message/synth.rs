//! Deterministic subject and body synthesis from an [`Analysis`].

use std::path::Path;

use crate::classify::Analysis;
use crate::classify::tables::OTHER_CATEGORY;
use crate::format::pluralize;
use crate::message::CommitType;

/// Body line thresholds.
const BODY_FILES_THRESHOLD: usize = 3;
const BODY_LINES_THRESHOLD: usize = 20;
const BODY_CATEGORIES_THRESHOLD: usize = 2;

/// Entities beyond this count are summarized as "multiple functions".
const MAX_LISTED_ENTITIES: usize = 3;

/// Number of distinct strategies [`suggest_multiple`] knows.
pub const MAX_SUGGESTIONS: usize = 3;

/// Conventional commit type for an analysis.
pub fn commit_type(analysis: &Analysis) -> CommitType {
    CommitType::from(analysis.change_type)
}

/// Scope to print in the subject, if any. The `other` category is never shown.
fn display_scope(analysis: &Analysis) -> Option<&str> {
    analysis
        .scope
        .as_deref()
        .filter(|scope| !scope.is_empty() && *scope != OTHER_CATEGORY)
}

fn format_subject(commit_type: CommitType, scope: Option<&str>, description: &str) -> String {
    match scope {
        Some(scope) => format!("{commit_type}({scope}): {description}"),
        None => format!("{commit_type}: {description}"),
    }
}

/// Turn `src/user_profile-view.py` into `user profile view`.
pub fn humanize_filename(path: &str) -> String {
    let stem = Path::new(path)
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string());
    stem.replace(['_', '-'], " ")
}

/// Build the subject line.
pub fn synthesize_subject(analysis: &Analysis) -> String {
    let commit_type = commit_type(analysis);
    subject_with_verb(analysis, commit_type, commit_type.verbs()[0])
}

fn subject_with_verb(analysis: &Analysis, commit_type: CommitType, verb: &str) -> String {
    let description = describe(analysis, commit_type, verb);
    format_subject(commit_type, display_scope(analysis), &description)
}

/// Description after the colon, chosen by the shape of the change.
fn describe(analysis: &Analysis, commit_type: CommitType, verb: &str) -> String {
    let status = &analysis.status;
    let entities = &analysis.entities;

    let has_added = !status.added.is_empty();
    let has_modified = !status.modified.is_empty();
    let has_deleted = !status.deleted.is_empty();

    match (has_added, has_modified, has_deleted) {
        (true, false, false) => match status.added.as_slice() {
            [only] => format!("{verb} {}", humanize_filename(only)),
            files => format!("{verb} {} new files", files.len()),
        },
        (false, false, true) => match status.deleted.as_slice() {
            [only] => format!("remove {}", humanize_filename(only)),
            files => format!("remove {} files", files.len()),
        },
        (false, true, false) => match entities.len() {
            0 => match status.modified.as_slice() {
                [only] => format!("{verb} {}", humanize_filename(only)),
                files => format!("{verb} {} files", files.len()),
            },
            1 => format!("{verb} {} function", entities[0]),
            n if n <= MAX_LISTED_ENTITIES => format!("{verb} {} functions", entities.join(", ")),
            _ => format!("{verb} multiple functions"),
        },
        _ => {
            let names_code = matches!(
                commit_type,
                CommitType::Feat | CommitType::Fix | CommitType::Refactor
            );
            if names_code && let Some(first) = entities.first() {
                return if entities.len() == 1 {
                    format!("{verb} {first}")
                } else {
                    format!("{verb} {first} and related functionality")
                };
            }

            let mut paths = status.all_paths();
            match (paths.next(), paths.next()) {
                (Some(only), None) => format!("{verb} {}", humanize_filename(only)),
                _ => format!("{verb} {} files", status.total()),
            }
        }
    }
}

/// Build the optional body. `None` when nothing is worth mentioning.
pub fn synthesize_body(analysis: &Analysis) -> Option<String> {
    let stats = &analysis.stats;
    let mut parts = Vec::new();

    if stats.files_changed > BODY_FILES_THRESHOLD {
        parts.push(format!("Modified {} files", stats.files_changed));
    }

    if stats.insertions > BODY_LINES_THRESHOLD || stats.deletions > BODY_LINES_THRESHOLD {
        parts.push(format!("+{} -{} lines", stats.insertions, stats.deletions));
    }

    if analysis.entities.len() > 1 {
        parts.push(format!(
            "Updated functions: {}",
            analysis.entities.join(", ")
        ));
    }

    if analysis.file_type_counts.len() > BODY_CATEGORIES_THRESHOLD {
        let categories: Vec<&str> = analysis
            .file_type_counts
            .keys()
            .map(String::as_str)
            .collect();
        parts.push(format!("Affected: {} files", categories.join(", ")));
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.join("\n"))
    }
}

/// Subject, plus the body separated by a blank line when requested and present.
pub fn synthesize_full(analysis: &Analysis, include_body: bool) -> String {
    let subject = synthesize_subject(analysis);

    if !include_body {
        return subject;
    }

    match synthesize_body(analysis) {
        Some(body) => format!("{subject}\n\n{body}"),
        None => subject,
    }
}

/// Up to `count` alternative messages, most specific first.
///
/// 1. the primary subject
/// 2. the same subject with the type's second verb
/// 3. a generic "update implementation" / "update N files" subject
///
/// Requests beyond [`MAX_SUGGESTIONS`] are truncated.
pub fn suggest_multiple(analysis: &Analysis, count: usize) -> Vec<String> {
    let commit_type = commit_type(analysis);
    let mut messages = vec![synthesize_full(analysis, false)];

    if count > 1
        && let Some(verb) = commit_type.verbs().get(1)
    {
        messages.push(subject_with_verb(analysis, commit_type, verb));
    }

    if count > 2 {
        let generic = match display_scope(analysis) {
            Some(scope) => format_subject(commit_type, Some(scope), "update implementation"),
            None => {
                let files = analysis.stats.files_changed;
                let description = format!("update {files} {}", pluralize("file", files));
                format_subject(commit_type, None, &description)
            }
        };
        messages.push(generic);
    }

    messages.truncate(count);
    messages
}
