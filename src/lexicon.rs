//! Static emotion lexicon: a fixed mapping from lowercase emotion words to
//! three reflective journal prompts each.
//!
//! A lexicon hit is always preferred over a remote prompt-generation call, so
//! the common emotions resolve instantly and offline. The table is read-only
//! and compiled into the binary.

/// Number of prompts carried per lexicon entry.
pub const PROMPTS_PER_EMOTION: usize = 3;

/// Looks up the prompt list for an emotion label.
///
/// The label is lowercased before lookup; `"Sadness"`, `"SADNESS"`, and
/// `"sadness"` all hit the same entry. Returns `None` for labels outside the
/// lexicon, in which case the caller falls back to remote generation.
///
/// # Examples
///
/// ```
/// use innerprompt::lexicon;
///
/// let prompts = lexicon::prompts_for("Joy").expect("joy is in the lexicon");
/// assert_eq!(prompts.len(), 3);
/// assert!(lexicon::prompts_for("melancholy").is_none());
/// ```
pub fn prompts_for(emotion: &str) -> Option<&'static [&'static str; PROMPTS_PER_EMOTION]> {
    let key = emotion.to_lowercase();
    let prompts: &'static [&'static str; PROMPTS_PER_EMOTION] = match key.as_str() {
        "sadness" => &[
            "What gentle memories bring a soft smile to your face today?",
            "How might you show kindness to yourself in this moment?",
            "What small step could you take today to nurture your heart?",
        ],
        "anxiety" => &[
            "What would you tell a dear friend feeling this way?",
            "What small action could help you feel more grounded right now?",
            "What brings you a sense of safety and comfort?",
        ],
        "loneliness" => &[
            "What meaningful connection would you like to cultivate today?",
            "How might you show yourself the companionship you seek?",
            "What brings you joy when you're alone?",
        ],
        "joy" => &[
            "What made this moment of happiness possible?",
            "How might you share this joy with others?",
            "What does this feeling teach you about what matters most?",
        ],
        "anger" => &[
            "What boundary might need to be set or respected?",
            "How can you channel this energy constructively?",
            "What underlying need is this emotion pointing to?",
        ],
        "guilt" => &[
            "What would self-forgiveness look like in this situation?",
            "How might you make amends or learn from this experience?",
            "What would you tell someone you love who felt this way?",
        ],
        "gratitude" => &[
            "What small detail are you thankful for today?",
            "How has someone's kindness touched your life recently?",
            "What challenge has made you stronger?",
        ],
        "boredom" => &[
            "What creative spark would you like to explore?",
            "What have you been putting off that might bring fulfillment?",
            "How might you find wonder in the ordinary?",
        ],
        "emptiness" => &[
            "What would fill your cup today?",
            "What small joy could you create for yourself?",
            "What meaningful connection would you like to nurture?",
        ],
        "fulfillment" => &[
            "What made this achievement meaningful to you?",
            "How might you share this sense of purpose?",
            "What does this feeling teach you about your values?",
        ],
        "healing" => &[
            "What small step toward healing feels possible today?",
            "What brings you comfort in difficult moments?",
            "How might you honor your journey so far?",
        ],
        "fear" => &[
            "What would courage look like in this situation?",
            "What support do you need to feel safe?",
            "What small step could you take despite the fear?",
        ],
        "hope" => &[
            "What possibilities are you excited about?",
            "How might you nurture this hope today?",
            "What small action could bring you closer to your vision?",
        ],
        "confusion" => &[
            "What clarity would you like to find?",
            "What questions feel most important to explore?",
            "What would help you feel more centered?",
        ],
        "focus" => &[
            "What matters most to you right now?",
            "How might you create space for what's important?",
            "What small step would move you forward?",
        ],
        "love" => &[
            "How do you want to express your love today?",
            "What makes your heart feel full?",
            "How might you show yourself the same love you give others?",
        ],
        "loss" => &[
            "What beautiful memory brings you comfort?",
            "How might you honor what you've lost?",
            "What support do you need in this moment?",
        ],
        "self-worth" => &[
            "What quality do you appreciate about yourself today?",
            "How might you celebrate your progress?",
            "What would self-compassion look like right now?",
        ],
        "calmness" => &[
            "What brings you peace in this moment?",
            "How might you extend this calm to others?",
            "What helps you maintain this sense of balance?",
        ],
        "inspired" => &[
            "What creative idea would you like to explore?",
            "How might you share this inspiration?",
            "What small step could you take toward your vision?",
        ],
        _ => return None,
    };
    Some(prompts)
}
