//! Sample values substituted into snippets.
//!
//! These appear verbatim in rendered output and are part of the contract:
//! renderers and tests both read them from here.

use serde_json::{json, Value};

use crate::task::{media_modality, InputModality};

/// Base URL of the hosted Inference API; the model ID is appended.
pub const INFERENCE_API_URL: &str = "https://api-inference.huggingface.co/models";

/// Audio file read by speech and audio snippets.
pub const SAMPLE_AUDIO_FILE: &str = "sample1.flac";

/// Image file read by image snippets.
pub const SAMPLE_IMAGE_FILE: &str = "cat.png";

/// Prompt for text-to-image.
pub const TEXT_TO_IMAGE_PROMPT: &str = "Astronaut riding a horse";

/// Prompt for image-to-image.
pub const IMAGE_TO_IMAGE_PROMPT: &str = "Turn the cat into a tiger.";

/// Question asked of the sample document.
pub const DOCUMENT_QUESTION: &str = "What is in this image?";

/// User turn for conversational text models.
pub const CHAT_PROMPT: &str = "What is the capital of France?";

/// Instruction part for conversational vision models.
pub const VISION_PROMPT: &str = "Describe this image in one sentence.";

/// Image part for conversational vision models.
pub const VISION_IMAGE_URL: &str =
    "https://cdn.britannica.com/61/93061-050-99147DCE/Statue-of-Liberty-Island-New-York-Bay.jpg";

/// Token ceiling for conversational completions.
pub const DEFAULT_MAX_TOKENS: u64 = 500;

/// Conversational snippets stream unless told otherwise.
pub const DEFAULT_STREAMING: bool = true;

/// Candidate labels for zero-shot text classification.
pub const TEXT_CANDIDATE_LABELS: [&str; 3] = ["refund", "legal", "faq"];

/// Candidate labels for zero-shot image classification.
pub const IMAGE_CANDIDATE_LABELS: [&str; 3] = ["cat", "dog", "llama"];

/// Sample `inputs` value for a text-input pipeline tag.
///
/// Returns `None` for tasks whose input is a file or a chat conversation.
///
/// # Example
///
/// ```rust
/// use inference_snippets_core::defaults::sample_input;
///
/// assert_eq!(sample_input("text-classification"), Some(serde_json::json!("I like you. I love you")));
/// assert_eq!(sample_input("image-to-image"), None);
/// ```
#[must_use]
pub fn sample_input(task_tag: &str) -> Option<Value> {
    let value = match task_tag {
        "text-classification" => json!("I like you. I love you"),
        "token-classification" => {
            json!("My name is Sarah Jessica Parker but you can call me Jessica")
        }
        "question-answering" => json!({
            "question": "What is my name?",
            "context": "My name is Clara and I live in Berkeley.",
        }),
        "summarization" => json!(
            "The tower is 324 metres (1,063 ft) tall, about the same height as an 81-storey building, and the tallest structure in Paris. Its base is square, measuring 125 metres (410 ft) on each side. During its construction, the Eiffel Tower surpassed the Washington Monument to become the tallest man-made structure in the world, a title it held for 41 years until the Chrysler Building in New York City was finished in 1930. It was the first structure to reach a height of 300 metres. Due to the addition of a broadcasting aerial at the top of the tower in 1957, it is now taller than the Chrysler Building by 5.2 metres (17 ft). Excluding transmitters, the Eiffel Tower is the second tallest free-standing structure in France after the Millau Viaduct."
        ),
        "translation" => json!("Меня зовут Вольфганг и я живу в Берлине"),
        "fill-mask" => json!("The answer to the universe is [MASK]."),
        "feature-extraction" => json!("Today is a sunny day and I will get some ice cream."),
        "sentence-similarity" => json!({
            "source_sentence": "That is a happy person",
            "sentences": [
                "That is a happy dog",
                "That is a very happy person",
                "Today is a sunny day",
            ],
        }),
        "text-generation" => json!("Can you please let us know more details about your "),
        "text2text-generation" => json!("The answer to the universe is"),
        "zero-shot-classification" => json!(
            "Hi, I recently bought a device from your company but it is not working as advertised and I would like to get reimbursed!"
        ),
        "text-to-audio" => json!("liquid drum and bass, atmospheric synths, airy sounds"),
        "text-to-speech" => json!("The answer to the universe is 42"),
        _ => return None,
    };
    Some(value)
}

/// Sample file for a pipeline tag that uploads raw media.
#[must_use]
pub fn sample_file(task_tag: &str) -> &'static str {
    if task_tag == "automatic-speech-recognition"
        || media_modality(task_tag) == InputModality::Audio
    {
        SAMPLE_AUDIO_FILE
    } else {
        SAMPLE_IMAGE_FILE
    }
}
