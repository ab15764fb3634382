//! On-demand emotion classification of an answer text.

use crate::ai::OpenAiClient;
use crate::errors::AppResult;
use crate::gateway;
use tracing::info;

/// Classifies free text and returns the emotion label.
///
/// The label is display-only; it is never written into the journal store.
///
/// # Errors
///
/// Returns a validation error for blank input, a gateway error for remote
/// failures.
pub async fn classify_answer(ai: &OpenAiClient, text: &str) -> AppResult<String> {
    let label = gateway::classify_emotion(ai, text).await?;
    info!("Answer classified as '{}'", label);
    Ok(label)
}
