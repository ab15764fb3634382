//! Gateway HTTP service.
//!
//! Exposes the two gateway contracts as stateless JSON-over-POST endpoints:
//!
//! - `POST /api/analyze-emotion` with `{ "answer": string }` returns
//!   `{ "emotion": string }`
//! - `POST /api/generate` with `{ "emotion": string }` returns
//!   `{ "prompts": [string] }`
//!
//! Validation failures come back as 400 with a fixed error body; anything
//! else maps to a generic 500 body while the underlying cause goes to the
//! diagnostic log only. Non-POST requests get 405 from the router. The
//! completion API credential stays server-side; clients never see it.

use crate::ai::OpenAiClient;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::gateway;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info};

/// 400 body when the classify endpoint gets no usable answer text.
pub const ERR_ANSWER_REQUIRED: &str = "Answer is required";
/// 400 body when the generate endpoint gets no emotion label.
pub const ERR_EMOTION_REQUIRED: &str = "Emotion is required";
/// 500 body for any classify-side upstream failure.
pub const ERR_ANALYZE_FAILED: &str = "Failed to analyze emotion";
/// 500 body for any generate-side upstream failure.
pub const ERR_GENERATE_FAILED: &str = "Failed to generate prompts";

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    ai: Arc<OpenAiClient>,
}

impl AppState {
    /// Creates handler state around a completion API client.
    pub fn new(ai: OpenAiClient) -> Self {
        Self { ai: Arc::new(ai) }
    }
}

#[derive(Debug, Deserialize)]
struct AnalyzeRequest {
    #[serde(default)]
    answer: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GenerateRequest {
    #[serde(default)]
    emotion: Option<String>,
}

#[derive(Debug, Serialize)]
struct EmotionResponse {
    emotion: String,
}

#[derive(Debug, Serialize)]
struct PromptsResponse {
    prompts: Vec<String>,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

/// Builds the gateway router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/analyze-emotion", post(analyze_emotion))
        .route("/api/generate", post(generate))
        .with_state(state)
}

/// Binds the configured address and serves the gateway routes until shutdown.
///
/// # Errors
///
/// Returns `AppError::Config` for an unparsable bind address and
/// `AppError::Io` if the listener cannot be bound.
pub async fn serve(config: &Config) -> AppResult<()> {
    let addr: SocketAddr = config
        .bind_addr
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid bind address '{}': {}", config.bind_addr, e)))?;

    let state = AppState::new(OpenAiClient::from_config(config));
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Gateway service listening on {}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}

async fn analyze_emotion(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Response {
    let answer = request.answer.unwrap_or_default();
    if answer.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, ERR_ANSWER_REQUIRED);
    }

    match gateway::classify_emotion(&state.ai, &answer).await {
        Ok(emotion) => (StatusCode::OK, Json(EmotionResponse { emotion })).into_response(),
        Err(AppError::Validation(_)) => {
            error_response(StatusCode::BAD_REQUEST, ERR_ANSWER_REQUIRED)
        }
        Err(e) => {
            error!("Emotion analysis failed: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, ERR_ANALYZE_FAILED)
        }
    }
}

async fn generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Response {
    let emotion = request.emotion.unwrap_or_default();
    if emotion.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, ERR_EMOTION_REQUIRED);
    }

    match gateway::get_prompts(&state.ai, &emotion).await {
        Ok(prompts) => (StatusCode::OK, Json(PromptsResponse { prompts })).into_response(),
        Err(e) => {
            error!("Prompt generation failed: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, ERR_GENERATE_FAILED)
        }
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
        .into_response()
}
