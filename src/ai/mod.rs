//! Completion API integration.
//!
//! This module provides the HTTP client for the hosted chat-completion
//! service and the fixed prompt/message builders used by the gateways.

pub mod openai;
pub mod prompts;

pub use openai::{Message, OpenAiClient};
