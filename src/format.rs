//! Small text helpers for terminal output.

/// `a, b, c` or `a, b and 3 more`; `none` for an empty list.
pub fn format_file_list<S: AsRef<str>>(files: &[S], max_display: usize) -> String {
    if files.is_empty() {
        return "none".to_string();
    }

    let shown: Vec<&str> = files
        .iter()
        .take(max_display)
        .map(AsRef::as_ref)
        .collect();

    if files.len() <= max_display {
        shown.join(", ")
    } else {
        format!("{} and {} more", shown.join(", "), files.len() - max_display)
    }
}

/// English plural for simple nouns.
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        return word.to_string();
    }

    if let Some(stem) = word.strip_suffix('y') {
        format!("{stem}ies")
    } else if ["s", "sh", "ch", "x", "z"].iter().any(|s| word.ends_with(s)) {
        format!("{word}es")
    } else {
        format!("{word}s")
    }
}

/// `+12 -3`, omitting zero sides; `no changes` when both are zero.
pub fn format_stats(insertions: usize, deletions: usize) -> String {
    let mut parts = Vec::new();
    if insertions > 0 {
        parts.push(format!("+{insertions}"));
    }
    if deletions > 0 {
        parts.push(format!("-{deletions}"));
    }

    if parts.is_empty() {
        "no changes".to_string()
    } else {
        parts.join(" ")
    }
}

/// Cut `text` to at most `max_length` characters, ending in `...` when cut.
pub fn truncate_text(text: &str, max_length: usize) -> String {
    const SUFFIX: &str = "...";

    if text.chars().count() <= max_length {
        return text.to_string();
    }

    let keep = max_length.saturating_sub(SUFFIX.len());
    let mut truncated: String = text.chars().take(keep).collect();
    truncated.push_str(SUFFIX);
    truncated
}
