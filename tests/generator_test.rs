//! Integration tests for the HTTP subject generator and the fallback path.
//!
//! Uses wiremock to stand in for the chat-completions endpoint.

mod common;

use std::time::Duration;

use common::change_set;
use commitwright::llm::SuggestionSource;
use commitwright::{
    FailureKind, GeneratorConfig, GeneratorError, OpenAiGenerator, SubjectGenerator, classify,
    suggest,
};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const DIFF: &str = "+++ b/auth.py\n+def login(user):\n+def authenticate(token):\n";

fn generator_for(server: &MockServer) -> OpenAiGenerator {
    OpenAiGenerator::new(GeneratorConfig {
        api_key: Some("sk-test".to_string()),
        model: "test-model".to_string(),
        base_url: server.uri(),
        timeout: Duration::from_secs(5),
    })
    .unwrap()
}

fn completion(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }]
    })
}

#[tokio::test]
async fn test_generate_success_strips_quotes() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_partial_json(json!({ "model": "test-model" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(completion("\"feat(auth): add login flow\"")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let subject = generator_for(&server).generate(DIFF).await.unwrap();
    assert_eq!(subject, "feat(auth): add login flow");
}

#[tokio::test]
async fn test_generate_unauthorized_is_invalid_credential() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_string("bad key"))
        .mount(&server)
        .await;

    let err = generator_for(&server).generate(DIFF).await.unwrap_err();
    assert!(matches!(err, GeneratorError::InvalidCredential));
    assert_eq!(err.kind(), FailureKind::InvalidCredential);
}

#[tokio::test]
async fn test_generate_rate_limited() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let err = generator_for(&server).generate(DIFF).await.unwrap_err();
    assert_eq!(err.kind(), FailureKind::RateLimited);
}

#[tokio::test]
async fn test_generate_server_error_keeps_status_and_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .mount(&server)
        .await;

    match generator_for(&server).generate(DIFF).await {
        Err(GeneratorError::Api { status, body }) => {
            assert_eq!(status, 503);
            assert_eq!(body, "overloaded");
        }
        other => panic!("Expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_generate_malformed_body_is_invalid_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = generator_for(&server).generate(DIFF).await.unwrap_err();
    assert!(matches!(err, GeneratorError::InvalidResponse(_)));
    assert_eq!(err.kind(), FailureKind::Other);
}

#[tokio::test]
async fn test_generate_blank_reply_is_invalid_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("   \n")))
        .mount(&server)
        .await;

    let err = generator_for(&server).generate(DIFF).await.unwrap_err();
    assert!(matches!(err, GeneratorError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_generate_timeout() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(completion("feat: late"))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let generator = OpenAiGenerator::new(GeneratorConfig {
        api_key: Some("sk-test".to_string()),
        base_url: server.uri(),
        timeout: Duration::from_millis(200),
        ..Default::default()
    })
    .unwrap();

    let err = generator.generate(DIFF).await.unwrap_err();
    assert!(matches!(err, GeneratorError::Timeout(_)));
}

#[tokio::test]
async fn test_missing_key_never_reaches_server() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("feat: x")))
        .expect(0)
        .mount(&server)
        .await;

    let generator = OpenAiGenerator::new(GeneratorConfig {
        base_url: server.uri(),
        ..Default::default()
    })
    .unwrap();

    let err = generator.generate(DIFF).await.unwrap_err();
    assert_eq!(err.kind(), FailureKind::MissingCredential);
}

#[tokio::test]
async fn test_suggest_uses_llm_subject_first() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("feat(auth): add login")))
        .mount(&server)
        .await;

    let analysis = classify(&change_set(&["auth.py"], &[], &[], (1, 45, 2), DIFF));
    let generator = generator_for(&server);
    let suggestions = suggest(&analysis, Some(&generator), 3).await;

    assert_eq!(suggestions.source, SuggestionSource::Llm);
    assert!(suggestions.fallback_reason.is_none());
    assert_eq!(
        suggestions.messages,
        vec![
            "feat(auth): add login",
            "feat(python): implement auth",
            "feat(python): update implementation",
        ]
    );
}

#[tokio::test]
async fn test_suggest_falls_back_on_rate_limit() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let analysis = classify(&change_set(&["auth.py"], &[], &[], (1, 45, 2), DIFF));
    let generator = generator_for(&server);
    let suggestions = suggest(&analysis, Some(&generator), 3).await;

    assert_eq!(suggestions.source, SuggestionSource::Local);
    assert_eq!(
        suggestions.fallback_reason.map(|e| e.kind()),
        Some(FailureKind::RateLimited)
    );
    assert_eq!(suggestions.messages[0], "feat(python): add auth");
    assert_eq!(suggestions.messages.len(), 3);
}
