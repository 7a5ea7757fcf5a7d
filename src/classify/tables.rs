//! Fixed lookup tables used by the classifier.

use std::sync::LazyLock;

use regex_lite::Regex;

use super::ChangeType;

/// Category label for extensions missing from [`EXTENSION_CATEGORIES`].
pub const OTHER_CATEGORY: &str = "other";

/// Category label shared by configuration formats.
pub const CONFIG_CATEGORY: &str = "config";

/// File extension (lower-case, without the dot) → category label.
pub const EXTENSION_CATEGORIES: &[(&str, &str)] = &[
    ("py", "python"),
    ("js", "javascript"),
    ("ts", "typescript"),
    ("jsx", "react"),
    ("tsx", "react"),
    ("go", "golang"),
    ("java", "java"),
    ("cpp", "cpp"),
    ("c", "c"),
    ("rs", "rust"),
    ("rb", "ruby"),
    ("php", "php"),
    ("css", "css"),
    ("scss", "sass"),
    ("html", "html"),
    ("md", "documentation"),
    ("json", CONFIG_CATEGORY),
    ("yaml", CONFIG_CATEGORY),
    ("yml", CONFIG_CATEGORY),
    ("xml", CONFIG_CATEGORY),
    ("toml", CONFIG_CATEGORY),
    ("dockerfile", "docker"),
    ("sql", "database"),
    ("sh", "script"),
    ("bash", "script"),
    ("zsh", "script"),
];

/// Phrasing typical of each change type, scored against the lower-cased diff.
///
/// Table order is also the tie-break order: the first type wins among equal
/// non-zero scores.
pub const CHANGE_PATTERNS: &[(ChangeType, &[&str])] = &[
    (
        ChangeType::Feature,
        &[
            r"add.*function",
            r"new.*class",
            r"implement.*",
            r"create.*",
            r"introduce.*",
            r"build.*",
        ],
    ),
    (
        ChangeType::Fix,
        &[
            r"fix.*bug",
            r"resolve.*",
            r"correct.*",
            r"patch.*",
            r"repair.*",
            r"address.*issue",
        ],
    ),
    (
        ChangeType::Refactor,
        &[
            r"refactor.*",
            r"restructure.*",
            r"reorganize.*",
            r"clean.*up",
            r"simplify.*",
            r"optimize.*",
        ],
    ),
    (
        ChangeType::Docs,
        &[
            r"update.*documentation",
            r"add.*comment",
            r"improve.*readme",
            r"document.*",
            r"add.*docstring",
        ],
    ),
    (
        ChangeType::Style,
        &[
            r"format.*",
            r"indent.*",
            r"whitespace.*",
            r"style.*",
            r"lint.*",
            r"prettier.*",
        ],
    ),
    (ChangeType::Test, &[r"add.*test", r"test.*", r"spec.*", r"mock.*"]),
    (
        ChangeType::Chore,
        &[
            r"update.*dependency",
            r"upgrade.*",
            r"maintenance.*",
            r"cleanup.*",
            r"remove.*unused",
        ],
    ),
];

/// Compiled form of [`CHANGE_PATTERNS`], in table order.
pub static CHANGE_REGEXES: LazyLock<Vec<(ChangeType, Vec<Regex>)>> = LazyLock::new(|| {
    CHANGE_PATTERNS
        .iter()
        .map(|(change_type, patterns)| {
            let compiled = patterns
                .iter()
                .map(|p| Regex::new(p).expect("change pattern table is valid"))
                .collect();
            (*change_type, compiled)
        })
        .collect()
});

/// Declarations whose names count as entities: `def foo`, `class Foo`,
/// `const foo =` and friends. Exactly one of the two groups captures.
pub static ENTITY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(?:def|fn|func|function|class|struct)\s+([A-Za-z_]\w*)|\b(?:const|let|var)\s+([A-Za-z_]\w*)\s*=",
    )
    .expect("entity pattern is valid")
});

/// Look up the category for a lower-case extension.
pub fn category_for_extension(ext: &str) -> &'static str {
    EXTENSION_CATEGORIES
        .iter()
        .find(|(e, _)| *e == ext)
        .map(|(_, category)| *category)
        .unwrap_or(OTHER_CATEGORY)
}

/// Rank of a category for tie-breaking: first appearance in the extension
/// table, `other` (and anything unknown) last.
pub fn category_rank(category: &str) -> usize {
    EXTENSION_CATEGORIES
        .iter()
        .position(|(_, c)| *c == category)
        .unwrap_or(EXTENSION_CATEGORIES.len())
}
