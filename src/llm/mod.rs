//! Optional LLM subject generation with deterministic fallback.

pub mod config;
pub mod fallback;
pub mod generator;
pub mod prompt;

pub use config::GeneratorConfig;
pub use fallback::{SuggestionSource, Suggestions, suggest};
pub use generator::{OpenAiGenerator, SubjectGenerator, clean_subject};
pub use prompt::build_subject_prompt;
