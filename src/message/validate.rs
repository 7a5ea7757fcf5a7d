//! Conventional commit format validation.

use std::sync::LazyLock;

use regex_lite::Regex;
use serde::Serialize;

/// Default maximum subject length, in characters.
pub const MAX_SUBJECT_LENGTH: usize = 72;

static SUBJECT_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(feat|fix|docs|style|refactor|perf|test|build|ci|chore|revert)(\(.+\))?: .+")
        .expect("subject format pattern is valid")
});

/// Tunable validation limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationRules {
    pub max_subject_length: usize,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            max_subject_length: MAX_SUBJECT_LENGTH,
        }
    }
}

/// Outcome of validating one message: every violated rule, in rule order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Validation {
    pub errors: Vec<String>,
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validate a message against the default rules.
pub fn validate(message: &str) -> Validation {
    validate_with(message, &ValidationRules::default())
}

/// Validate the subject line of a message. Only the first line is checked.
pub fn validate_with(message: &str, rules: &ValidationRules) -> Validation {
    let subject = message.lines().next().unwrap_or("");
    let mut errors = Vec::new();

    if !SUBJECT_FORMAT.is_match(subject) {
        errors.push("Subject line doesn't follow conventional commit format".to_string());
    }

    if subject.chars().count() > rules.max_subject_length {
        errors.push(format!(
            "Subject line is too long (should be ≤ {} characters)",
            rules.max_subject_length
        ));
    }

    if let Some((_, description)) = subject.split_once(':')
        && description.trim().chars().next().is_some_and(char::is_uppercase)
    {
        errors.push("Description should start with lowercase letter".to_string());
    }

    if subject.ends_with('.') {
        errors.push("Subject line should not end with a period".to_string());
    }

    Validation { errors }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_subjects() {
        assert!(validate("feat: add login").is_valid());
        assert!(validate("fix(auth): resolve token refresh").is_valid());
        assert!(validate("revert(api/v2): undo rename").is_valid());
    }

    #[test]
    fn test_unknown_type_rejected() {
        let result = validate("feature: add login");
        assert!(!result.is_valid());
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].contains("conventional commit format"));
    }

    #[test]
    fn test_missing_space_after_colon_rejected() {
        assert!(!validate("feat:add login").is_valid());
        assert!(!validate("feat(): add login").is_valid());
    }

    #[test]
    fn test_uppercase_description_rejected() {
        let result = validate("feat(ui): Add button");
        assert_eq!(
            result.errors,
            vec!["Description should start with lowercase letter"]
        );
    }

    #[test]
    fn test_only_first_line_is_checked() {
        assert!(validate("feat: add login\n\nBody text ends with a period.").is_valid());
    }

    #[test]
    fn test_custom_length_limit() {
        let rules = ValidationRules {
            max_subject_length: 10,
        };
        let result = validate_with("feat: add login", &rules);
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].contains("≤ 10"));
    }

    #[test]
    fn test_empty_message() {
        let result = validate("");
        assert_eq!(result.errors.len(), 1);
    }
}
