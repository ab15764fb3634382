//! Wire-contract tests for the gateway HTTP service.

use innerprompt::ai::OpenAiClient;
use innerprompt::server::{self, AppState};
use serde_json::json;

fn chat_reply(content: &str) -> String {
    json!({
        "choices": [
            { "message": { "role": "assistant", "content": content } }
        ]
    })
    .to_string()
}

/// Spawns the gateway service on an ephemeral port, pointed at the given
/// upstream URL, and returns its base URL.
async fn spawn_service(upstream_url: &str) -> String {
    let ai = OpenAiClient::new(
        upstream_url.to_string(),
        Some("sk-test".to_string()),
        "gpt-3.5-turbo",
    );
    let app = server::router(AppState::new(ai));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn test_analyze_emotion_success_shape() {
    let mut upstream = mockito::Server::new_async().await;
    upstream
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(chat_reply("Calm."))
        .create_async()
        .await;

    let base = spawn_service(&upstream.url()).await;
    let response = reqwest::Client::new()
        .post(format!("{}/api/analyze-emotion", base))
        .json(&json!({ "answer": "the sea was quiet" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "emotion": "Calm" }));
}

#[tokio::test]
async fn test_analyze_emotion_requires_answer() {
    let base = spawn_service("http://127.0.0.1:1/v1").await;
    let client = reqwest::Client::new();

    for body in [json!({}), json!({ "answer": "" })] {
        let response = client
            .post(format!("{}/api/analyze-emotion", base))
            .json(&body)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 400);
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body, json!({ "error": "Answer is required" }));
    }
}

#[tokio::test]
async fn test_analyze_emotion_whitespace_answer_is_rejected_without_upstream_call() {
    let mut upstream = mockito::Server::new_async().await;
    let mock = upstream
        .mock("POST", "/chat/completions")
        .expect(0)
        .create_async()
        .await;

    let base = spawn_service(&upstream.url()).await;
    let response = reqwest::Client::new()
        .post(format!("{}/api/analyze-emotion", base))
        .json(&json!({ "answer": "   " }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "error": "Answer is required" }));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_analyze_emotion_upstream_failure_is_a_generic_500() {
    let mut upstream = mockito::Server::new_async().await;
    upstream
        .mock("POST", "/chat/completions")
        .with_status(503)
        .with_body("secret upstream details")
        .create_async()
        .await;

    let base = spawn_service(&upstream.url()).await;
    let response = reqwest::Client::new()
        .post(format!("{}/api/analyze-emotion", base))
        .json(&json!({ "answer": "some text" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 500);
    let body: serde_json::Value = response.json().await.unwrap();
    // Generic body only; upstream details never reach the client.
    assert_eq!(body, json!({ "error": "Failed to analyze emotion" }));
}

#[tokio::test]
async fn test_generate_requires_emotion() {
    let base = spawn_service("http://127.0.0.1:1/v1").await;
    let response = reqwest::Client::new()
        .post(format!("{}/api/generate", base))
        .json(&json!({}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "error": "Emotion is required" }));
}

#[tokio::test]
async fn test_generate_serves_lexicon_emotions_without_upstream() {
    let mut upstream = mockito::Server::new_async().await;
    let mock = upstream
        .mock("POST", "/chat/completions")
        .expect(0)
        .create_async()
        .await;

    let base = spawn_service(&upstream.url()).await;
    let response = reqwest::Client::new()
        .post(format!("{}/api/generate", base))
        .json(&json!({ "emotion": "Anxiety" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    let prompts = body["prompts"].as_array().unwrap();
    assert_eq!(prompts.len(), 3);
    assert_eq!(
        prompts[0],
        "What would you tell a dear friend feeling this way?"
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn test_generate_remote_emotion_returns_three_prompts() {
    let mut upstream = mockito::Server::new_async().await;
    upstream
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(chat_reply("1. First\n2. Second\n3. Third"))
        .create_async()
        .await;

    let base = spawn_service(&upstream.url()).await;
    let response = reqwest::Client::new()
        .post(format!("{}/api/generate", base))
        .json(&json!({ "emotion": "melancholy" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "prompts": ["First", "Second", "Third"] }));
}

#[tokio::test]
async fn test_generate_upstream_failure_is_a_generic_500() {
    let mut upstream = mockito::Server::new_async().await;
    upstream
        .mock("POST", "/chat/completions")
        .with_status(500)
        .with_body("boom")
        .create_async()
        .await;

    let base = spawn_service(&upstream.url()).await;
    let response = reqwest::Client::new()
        .post(format!("{}/api/generate", base))
        .json(&json!({ "emotion": "melancholy" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 500);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "error": "Failed to generate prompts" }));
}

#[tokio::test]
async fn test_non_post_methods_are_rejected_with_405() {
    let base = spawn_service("http://127.0.0.1:1/v1").await;
    let client = reqwest::Client::new();

    for path in ["/api/analyze-emotion", "/api/generate"] {
        let response = client.get(format!("{}{}", base, path)).send().await.unwrap();
        assert_eq!(response.status().as_u16(), 405, "GET {} should be 405", path);
    }
}
