//! System instructions and message builders for the two gateway calls.
//!
//! The instructions are fixed strings; only the user content varies. The
//! classifier runs near-deterministic (low temperature, tiny token budget),
//! prompt generation runs warmer and is inherently non-deterministic.

use super::openai::Message;

/// System instruction for emotion classification.
///
/// Constrains the reply to a single English emotion word; the caller still
/// sanitizes the reply down to its first token.
pub const CLASSIFY_SYSTEM_PROMPT: &str = "You are an assistant that extracts the main emotion from a journal entry. Reply with only one English emotion word (e.g., Happy, Sad, Angry, Calm, Anxious, Love, Lonely, Frustrated, Grateful, Tired).";

/// System instruction for prompt generation.
pub const GENERATE_SYSTEM_PROMPT: &str = "You are a helpful assistant that generates journal prompts based on emotions. Generate 3 thoughtful and reflective prompts that help users explore their feelings.";

/// Builds messages for classifying the dominant emotion of a journal answer.
pub fn classify_messages(answer: &str) -> Vec<Message> {
    vec![
        Message::system(CLASSIFY_SYSTEM_PROMPT),
        Message::user(format!("Journal entry: {}", answer)),
    ]
}

/// Builds messages for generating three reflective prompts for an emotion.
///
/// The label is passed through in its original case; normalization only
/// happens for the lexicon lookup, not for the remote call.
pub fn generate_messages(emotion: &str) -> Vec<Message> {
    vec![
        Message::system(GENERATE_SYSTEM_PROMPT),
        Message::user(format!(
            "Generate 3 journal prompts for someone feeling {}.",
            emotion
        )),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_messages_structure() {
        let messages = classify_messages("Today was hard but I kept going.");

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, "system");
        assert_eq!(messages[0].content, CLASSIFY_SYSTEM_PROMPT);
        assert_eq!(messages[1].role, "user");
        assert!(messages[1].content.starts_with("Journal entry: "));
        assert!(messages[1].content.contains("I kept going"));
    }

    #[test]
    fn test_generate_messages_structure() {
        let messages = generate_messages("wistful");

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, "system");
        assert_eq!(messages[0].content, GENERATE_SYSTEM_PROMPT);
        assert_eq!(messages[1].role, "user");
        assert_eq!(
            messages[1].content,
            "Generate 3 journal prompts for someone feeling wistful."
        );
    }

    #[test]
    fn test_generate_messages_preserve_label_case() {
        let messages = generate_messages("Wistful");
        assert!(messages[1].content.contains("Wistful"));
    }

    #[test]
    fn test_classify_prompt_names_example_emotions() {
        for example in ["Happy", "Sad", "Grateful", "Tired"] {
            assert!(CLASSIFY_SYSTEM_PROMPT.contains(example));
        }
    }
}
