//! Attempt the LLM for the primary suggestion, fall back to local synthesis.

use std::fmt;

use tracing::{debug, warn};

use crate::classify::Analysis;
use crate::error::GeneratorError;
use crate::llm::generator::SubjectGenerator;
use crate::message::suggest_multiple;

/// Where the first suggestion came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionSource {
    Llm,
    Local,
}

impl fmt::Display for SuggestionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuggestionSource::Llm => f.write_str("LLM"),
            SuggestionSource::Local => f.write_str("local"),
        }
    }
}

/// Suggested messages, primary first.
#[derive(Debug)]
pub struct Suggestions {
    pub messages: Vec<String>,
    pub source: SuggestionSource,
    /// Why the LLM was not used, when one was configured and failed.
    pub fallback_reason: Option<GeneratorError>,
}

/// Produce `count` suggestions for an analysis.
///
/// With a generator, its subject replaces the first deterministic suggestion;
/// the rest always come from [`suggest_multiple`]. Any generator failure
/// leaves the deterministic list untouched.
pub async fn suggest<G: SubjectGenerator + ?Sized>(
    analysis: &Analysis,
    generator: Option<&G>,
    count: usize,
) -> Suggestions {
    let mut messages = suggest_multiple(analysis, count);

    let Some(generator) = generator else {
        return Suggestions {
            messages,
            source: SuggestionSource::Local,
            fallback_reason: None,
        };
    };

    match generator.generate(&analysis.raw_diff).await {
        Ok(subject) if !messages.is_empty() => {
            debug!("Using LLM subject: {subject}");
            messages[0] = subject;
            Suggestions {
                messages,
                source: SuggestionSource::Llm,
                fallback_reason: None,
            }
        }
        Ok(_) => Suggestions {
            messages,
            source: SuggestionSource::Local,
            fallback_reason: None,
        },
        Err(e) => {
            warn!("LLM generation failed ({:?}), using local suggestions: {e}", e.kind());
            Suggestions {
                messages,
                source: SuggestionSource::Local,
                fallback_reason: Some(e),
            }
        }
    }
}
