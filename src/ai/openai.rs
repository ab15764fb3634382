//! HTTP client for the chat-completion API.
//!
//! This module provides a small client for the OpenAI-style
//! `/chat/completions` endpoint. Both gateways go through [`OpenAiClient::chat`];
//! there is no streaming and no retry, a failed call surfaces as a
//! [`GatewayError`] for the caller to report.

use crate::errors::{AppError, AppResult, GatewayError};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A message in a chat conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// The role of the message sender (system, user, assistant)
    pub role: String,
    /// The content of the message
    pub content: String,
}

impl Message {
    /// Creates a new system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    /// Creates a new user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Request body for chat completion.
#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    temperature: f32,
    max_tokens: u32,
}

/// One completion choice in the response.
#[derive(Debug, Deserialize)]
struct Choice {
    message: Message,
}

/// Response from chat completion.
#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

/// Client for the chat-completion API.
///
/// Holds the endpoint, model, and credential. The credential is optional at
/// construction so lexicon-only flows work without one; the first actual
/// call without a key fails with a configuration error.
pub struct OpenAiClient {
    base_url: String,
    api_key: Option<String>,
    model: String,
    client: Client,
}

impl OpenAiClient {
    /// Creates a new completion API client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL of the API (e.g., "https://api.openai.com/v1")
    /// * `api_key` - Bearer credential, if available
    /// * `model` - Chat model name (e.g., "gpt-3.5-turbo")
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            api_key,
            model: model.into(),
            client: Client::new(),
        }
    }

    /// Creates a client from loaded configuration.
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::new(
            config.api_base_url.clone(),
            config.api_key.clone(),
            config.model.clone(),
        )
    }

    /// Sends a chat completion request and returns the reply text.
    ///
    /// # Arguments
    ///
    /// * `messages` - Conversation messages (system + user)
    /// * `temperature` - Sampling temperature for this call
    /// * `max_tokens` - Token budget for this call
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No API key is configured
    /// - The API is not reachable
    /// - The API returns a non-success status
    /// - The payload cannot be parsed or holds no choices
    pub async fn chat(
        &self,
        messages: &[Message],
        temperature: f32,
        max_tokens: u32,
    ) -> AppResult<String> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            AppError::Config(format!(
                "{} is not set. Export it to enable remote classification and prompt generation.",
                crate::constants::ENV_VAR_API_KEY
            ))
        })?;

        debug!("Sending chat request with model: {}", self.model);

        let url = format!("{}/chat/completions", self.base_url);
        let request = ChatRequest {
            model: self.model.clone(),
            messages: messages.to_vec(),
            temperature,
            max_tokens,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(GatewayError::Offline)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Upstream { status, body }.into());
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            GatewayError::InvalidResponse(format!("Failed to parse chat response: {}", e))
        })?;

        let content = chat_response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| {
                GatewayError::InvalidResponse("Chat response held no choices".to_string())
            })?;

        debug!("Received chat response ({} chars)", content.len());
        Ok(content)
    }
}
