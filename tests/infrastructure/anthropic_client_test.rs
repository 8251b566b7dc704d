use std::time::Duration;

use wiremock::matchers::{body_partial_json, header, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

use lexora::application::ports::{CompletionClient, CompletionError};
use lexora::infrastructure::llm::AnthropicClient;

fn test_client(base_url: String) -> AnthropicClient {
    AnthropicClient::new(
        "test-key".to_string(),
        "claude-3-haiku-20240307".to_string(),
        Duration::from_secs(5),
        2,
    )
    .unwrap()
    .with_base_url(base_url)
}

fn text_response(text: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "content": [{ "type": "text", "text": text }]
    }))
}

#[tokio::test]
async fn given_success_response_then_first_text_block_is_returned() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(header("x-api-key", "test-key"))
        .and(header("anthropic-version", "2023-06-01"))
        .and(body_partial_json(serde_json::json!({
            "model": "claude-3-haiku-20240307",
            "max_tokens": 800
        })))
        .respond_with(text_response("Ringkasan dokumen."))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(server.uri());
    let result = client.complete("ringkas dokumen ini", 800, 0.2).await;

    assert_eq!(result.unwrap(), "Ringkasan dokumen.");
}

#[tokio::test]
async fn given_empty_api_key_then_no_request_is_sent() {
    let server = MockServer::start().await;

    let client = AnthropicClient::new(
        String::new(),
        "claude-3-haiku-20240307".to_string(),
        Duration::from_secs(5),
        0,
    )
    .unwrap()
    .with_base_url(server.uri());

    let result = client.complete("halo", 800, 0.2).await;

    assert!(matches!(result, Err(CompletionError::MissingCredential)));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn given_transient_error_then_the_request_is_retried() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(529))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(text_response("setelah retry"))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(server.uri());
    let result = client.complete("halo", 800, 0.2).await;

    assert_eq!(result.unwrap(), "setelah retry");
}

#[tokio::test]
async fn given_persistent_client_error_then_no_retry_happens() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "type": "error",
            "error": { "type": "invalid_request_error", "message": "max_tokens required" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(server.uri());
    let result = client.complete("halo", 800, 0.2).await;

    match result {
        Err(CompletionError::Upstream(message)) => {
            assert!(message.contains("invalid_request_error"));
            assert!(message.contains("max_tokens required"));
        }
        other => panic!("expected upstream error, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn given_response_without_text_blocks_then_empty_string_is_returned() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "content": [{ "type": "tool_use", "id": "t1", "name": "noop", "input": {} }]
        })))
        .mount(&server)
        .await;

    let client = test_client(server.uri());
    let result = client.complete("halo", 800, 0.2).await;

    assert_eq!(result.unwrap(), "");
}
