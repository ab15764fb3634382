//! Stateless gateways to the completion API.
//!
//! Two request/response contracts live here:
//!
//! - [`classify_emotion`]: free text in, one emotion label out. Validates
//!   input, then always a fresh remote round-trip (no caching), then reply
//!   sanitization down to a single token.
//! - [`get_prompts`]: emotion label in, ordered prompt list out. The static
//!   lexicon takes precedence; only a miss reaches the remote service.
//!
//! Neither contract retries. A remote failure surfaces as a gateway error and
//! the caller decides how to present it.

use crate::ai::prompts::{classify_messages, generate_messages};
use crate::ai::OpenAiClient;
use crate::constants::{
    CLASSIFY_MAX_TOKENS, CLASSIFY_TEMPERATURE, GENERATE_MAX_TOKENS, GENERATE_TEMPERATURE,
};
use crate::errors::{AppError, AppResult};
use crate::lexicon;
use tracing::debug;

/// Classifies the dominant emotion of a free-text journal answer.
///
/// The returned label is whatever single token the remote service produced
/// (first token of the trimmed reply, cut at whitespace or `. , ! ?`); it is
/// not mapped back onto a closed vocabulary. Display-only by convention —
/// callers never persist it as an entry's emotion.
///
/// # Errors
///
/// - `AppError::Validation` when `text` is empty after trimming; no network
///   activity happens in that case.
/// - `AppError::Gateway` when the remote call fails or returns an unusable
///   payload.
pub async fn classify_emotion(ai: &OpenAiClient, text: &str) -> AppResult<String> {
    if text.trim().is_empty() {
        return Err(AppError::Validation(
            "Please write something first".to_string(),
        ));
    }

    let reply = ai
        .chat(
            &classify_messages(text),
            CLASSIFY_TEMPERATURE,
            CLASSIFY_MAX_TOKENS,
        )
        .await?;

    let label = first_token(&reply);
    debug!("Classified answer as '{}'", label);
    Ok(label)
}

/// Resolves the reflective prompts for an emotion label.
///
/// Lexicon first: if the lowercased label is a lexicon key, the fixed
/// three-prompt list is returned synchronously and no remote call is made.
/// On a miss the label is sent to the completion API in its original case
/// and the reply is parsed into lines. An empty label is not special-cased;
/// it simply misses the lexicon and takes the remote path.
///
/// The remote path runs at a non-zero temperature, so two calls for the same
/// label may yield different prompts.
///
/// # Errors
///
/// Returns `AppError::Gateway` when the remote call fails; the static path
/// cannot fail.
pub async fn get_prompts(ai: &OpenAiClient, emotion: &str) -> AppResult<Vec<String>> {
    if let Some(cached) = lexicon::prompts_for(emotion) {
        debug!("Lexicon hit for '{}'", emotion);
        return Ok(cached.iter().map(|p| p.to_string()).collect());
    }

    debug!("Lexicon miss for '{}', generating remotely", emotion);
    let reply = ai
        .chat(
            &generate_messages(emotion),
            GENERATE_TEMPERATURE,
            GENERATE_MAX_TOKENS,
        )
        .await?;

    Ok(parse_prompt_lines(&reply))
}

/// Cuts a raw classifier reply down to its first token.
///
/// The reply is trimmed, then split at the first whitespace character or any
/// of `. , ! ?`; the leading segment is returned as-is. `"Happy."` becomes
/// `"Happy"`, `"Happy and calm"` becomes `"Happy"`.
fn first_token(reply: &str) -> String {
    reply
        .trim()
        .split(|c: char| c.is_whitespace() || matches!(c, '.' | ',' | '!' | '?'))
        .next()
        .unwrap_or("")
        .to_string()
}

/// Parses a generated reply into prompt lines.
///
/// Blank lines are dropped. A `<digits>. ` ordinal prefix is stripped only
/// when it starts the raw line; every retained line is then trimmed. Order
/// is preserved.
fn parse_prompt_lines(reply: &str) -> Vec<String> {
    reply
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| strip_ordinal_prefix(line).trim().to_string())
        .collect()
}

/// Strips a leading `<digits>.` ordinal (and the whitespace after it) from a line.
fn strip_ordinal_prefix(line: &str) -> &str {
    let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 {
        return line;
    }
    match line[digits..].strip_prefix('.') {
        Some(rest) => rest.trim_start(),
        None => line,
    }
}
