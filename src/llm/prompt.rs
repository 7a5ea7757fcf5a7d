//! Prompt construction for LLM-generated commit subjects.

use crate::message::CommitType;

/// Maximum characters of diff sent to the model.
const MAX_DIFF_SANITIZED_LENGTH: usize = 30_000;

/// Build the prompt asking for a single conventional commit subject line.
pub fn build_subject_prompt(diff_text: &str) -> String {
    let (sanitized_diff, truncated) = sanitize_diff(diff_text, MAX_DIFF_SANITIZED_LENGTH);

    let truncation_note = if truncated {
        "\n\nNote: The diff was truncated due to size. Focus on the visible changes."
    } else {
        ""
    };

    let types: Vec<&str> = CommitType::ALL.iter().map(CommitType::as_str).collect();

    format!(
        r#"You are writing a Git commit subject line following the Conventional Commits specification.

## Diff
```
{sanitized_diff}
```{truncation_note}

## Rules (STRICT)
- Format: `type(scope): description` or `type: description`
- Type: one of {types}
- Description: imperative mood, lowercase first letter, NO period at end
- The whole line MUST be at most 72 characters

Respond with ONLY the subject line. No quotes, no explanation, no body."#,
        types = types.join(", "),
    )
}

/// Strip ANSI escapes and control characters (keeping newlines and tabs),
/// then cut to `max_len` characters. Returns the text and whether it was cut.
pub fn sanitize_diff(diff_text: &str, max_len: usize) -> (String, bool) {
    let cleaned = remove_control_chars(&remove_ansi_escapes(diff_text));

    if cleaned.chars().count() <= max_len {
        return (cleaned, false);
    }

    (cleaned.chars().take(max_len).collect(), true)
}

/// Remove `ESC [ ... <letter>` sequences.
fn remove_ansi_escapes(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            for c in chars.by_ref() {
                if c.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }
        out.push(ch);
    }

    out
}

fn remove_control_chars(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect()
}
