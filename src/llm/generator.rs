//! OpenAI-compatible subject generator.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::GeneratorError;
use crate::llm::config::GeneratorConfig;
use crate::llm::prompt::build_subject_prompt;

/// Maximum characters of an error body kept in [`GeneratorError::Api`].
const MAX_ERROR_BODY: usize = 200;

/// Produces a single commit subject from raw diff text.
///
/// This abstraction allows mocking the network in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubjectGenerator: Send + Sync {
    async fn generate(&self, diff_text: &str) -> Result<String, GeneratorError>;
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChatMessage,
}

/// Generator backed by a chat-completions HTTP endpoint.
pub struct OpenAiGenerator {
    config: GeneratorConfig,
    client: reqwest::Client,
}

impl OpenAiGenerator {
    pub fn new(config: GeneratorConfig) -> Result<Self, GeneratorError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| GeneratorError::Request(e.to_string()))?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    fn map_transport_error(&self, err: reqwest::Error) -> GeneratorError {
        if err.is_timeout() {
            GeneratorError::Timeout(self.config.timeout.as_secs())
        } else {
            GeneratorError::Request(err.to_string())
        }
    }
}

#[async_trait]
impl SubjectGenerator for OpenAiGenerator {
    async fn generate(&self, diff_text: &str) -> Result<String, GeneratorError> {
        if diff_text.trim().is_empty() {
            return Err(GeneratorError::EmptyDiff);
        }

        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or(GeneratorError::MissingCredential)?;

        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: build_subject_prompt(diff_text),
            }],
            max_tokens: 100,
            temperature: 0.3,
        };

        debug!("Requesting subject from {} ({})", self.config.endpoint(), self.config.model);

        let response = self
            .client
            .post(self.config.endpoint())
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(classify_status(status, response.text().await.unwrap_or_default()));
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| GeneratorError::InvalidResponse(e.to_string()))?;

        let content = body
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .unwrap_or_default();

        clean_subject(&content).ok_or_else(|| {
            GeneratorError::InvalidResponse("response contained no subject line".to_string())
        })
    }
}

/// Map a non-success HTTP status to a generator error.
fn classify_status(status: StatusCode, body: String) -> GeneratorError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => GeneratorError::InvalidCredential,
        StatusCode::TOO_MANY_REQUESTS => GeneratorError::RateLimited,
        _ => GeneratorError::Api {
            status: status.as_u16(),
            body: body.chars().take(MAX_ERROR_BODY).collect(),
        },
    }
}

/// First meaningful line of a model reply, without surrounding quotes.
pub fn clean_subject(raw: &str) -> Option<String> {
    let line = raw
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty() && !l.starts_with("```"))?;

    let stripped = line
        .trim_matches(|c: char| c == '"' || c == '\'' || c == '`')
        .trim();

    (!stripped.is_empty()).then(|| stripped.to_string())
}
