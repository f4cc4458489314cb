//! Task classification.
//!
//! Maps a model's pipeline tag and descriptive tags onto the closed set of
//! [`TaskCategory`] values that snippet templates are registered under.

use serde::{Deserialize, Serialize};

use crate::identifier::CONVERSATIONAL_TAG;

/// Closed classification of a model's inference behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskCategory {
    /// Chat completion over text messages.
    ConversationalText,
    /// Chat completion over text and image messages.
    ConversationalVision,
    /// Audio file in, transcription out.
    SpeechRecognition,
    /// Document image plus question in, answer out.
    DocumentQuestionAnswering,
    /// Image plus prompt in, image out.
    ImageToImage,
    /// Prompt in, image out.
    TextToImage,
    /// Single-shot JSON request with a text (or small object) input.
    TextPayload,
    /// Text plus candidate labels.
    ZeroShotClassification,
    /// Image plus candidate labels.
    ZeroShotImageClassification,
    /// Raw audio or image file posted as the request body.
    MediaUpload,
    /// Text in, audio out.
    TextToAudio,
    /// No template applies.
    Unmapped,
}

/// Kind of input a task consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputModality {
    /// Text only.
    Text,
    /// Image input (possibly with accompanying text).
    Image,
    /// Audio input.
    Audio,
}

impl TaskCategory {
    /// Every category, in declaration order.
    pub const ALL: [TaskCategory; 12] = [
        TaskCategory::ConversationalText,
        TaskCategory::ConversationalVision,
        TaskCategory::SpeechRecognition,
        TaskCategory::DocumentQuestionAnswering,
        TaskCategory::ImageToImage,
        TaskCategory::TextToImage,
        TaskCategory::TextPayload,
        TaskCategory::ZeroShotClassification,
        TaskCategory::ZeroShotImageClassification,
        TaskCategory::MediaUpload,
        TaskCategory::TextToAudio,
        TaskCategory::Unmapped,
    ];

    /// Stable snake_case name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskCategory::ConversationalText => "conversational_text",
            TaskCategory::ConversationalVision => "conversational_vision",
            TaskCategory::SpeechRecognition => "speech_recognition",
            TaskCategory::DocumentQuestionAnswering => "document_question_answering",
            TaskCategory::ImageToImage => "image_to_image",
            TaskCategory::TextToImage => "text_to_image",
            TaskCategory::TextPayload => "text_payload",
            TaskCategory::ZeroShotClassification => "zero_shot_classification",
            TaskCategory::ZeroShotImageClassification => "zero_shot_image_classification",
            TaskCategory::MediaUpload => "media_upload",
            TaskCategory::TextToAudio => "text_to_audio",
            TaskCategory::Unmapped => "unmapped",
        }
    }

    /// Whether the category models a turn-based chat exchange.
    ///
    /// Only these categories honor the streaming option.
    #[must_use]
    pub fn is_conversational(&self) -> bool {
        matches!(
            self,
            TaskCategory::ConversationalText | TaskCategory::ConversationalVision
        )
    }

    /// Input modality, or `None` for [`TaskCategory::Unmapped`].
    ///
    /// [`TaskCategory::MediaUpload`] covers both audio and image tasks and
    /// reports [`InputModality::Image`]; use [`media_modality`] with the
    /// pipeline tag to tell them apart.
    #[must_use]
    pub fn modality(&self) -> Option<InputModality> {
        match self {
            TaskCategory::ConversationalText
            | TaskCategory::TextToImage
            | TaskCategory::TextPayload
            | TaskCategory::ZeroShotClassification
            | TaskCategory::TextToAudio => Some(InputModality::Text),
            TaskCategory::ConversationalVision
            | TaskCategory::DocumentQuestionAnswering
            | TaskCategory::ImageToImage
            | TaskCategory::ZeroShotImageClassification
            | TaskCategory::MediaUpload => Some(InputModality::Image),
            TaskCategory::SpeechRecognition => Some(InputModality::Audio),
            TaskCategory::Unmapped => None,
        }
    }
}

impl std::fmt::Display for TaskCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a model from its pipeline tag and descriptive tags.
///
/// Rules, first match wins:
///
/// 1. conversational tag + `text-generation` → [`TaskCategory::ConversationalText`]
/// 2. conversational tag + `image-text-to-text` → [`TaskCategory::ConversationalVision`]
/// 3. dispatch on the pipeline tag alone
/// 4. [`TaskCategory::Unmapped`]
///
/// # Example
///
/// ```rust
/// use inference_snippets_core::task::{classify, TaskCategory};
///
/// let tags = vec!["conversational".to_string()];
/// assert_eq!(classify(Some("image-text-to-text"), &tags), TaskCategory::ConversationalVision);
/// assert_eq!(classify(Some("image-text-to-text"), &[]), TaskCategory::Unmapped);
/// ```
#[must_use]
pub fn classify(task_tag: Option<&str>, tags: &[String]) -> TaskCategory {
    let Some(task) = task_tag else {
        return TaskCategory::Unmapped;
    };

    let conversational = tags.iter().any(|t| t == CONVERSATIONAL_TAG);
    match (conversational, task) {
        (true, "text-generation") => return TaskCategory::ConversationalText,
        (true, "image-text-to-text") => return TaskCategory::ConversationalVision,
        _ => {}
    }

    match task {
        "automatic-speech-recognition" => TaskCategory::SpeechRecognition,
        "document-question-answering" => TaskCategory::DocumentQuestionAnswering,
        "image-to-image" => TaskCategory::ImageToImage,
        "text-to-image" => TaskCategory::TextToImage,
        "zero-shot-classification" => TaskCategory::ZeroShotClassification,
        "zero-shot-image-classification" => TaskCategory::ZeroShotImageClassification,
        "audio-classification" | "image-classification" | "object-detection"
        | "image-segmentation" => TaskCategory::MediaUpload,
        "text-to-audio" | "text-to-speech" => TaskCategory::TextToAudio,
        "text-classification"
        | "token-classification"
        | "question-answering"
        | "summarization"
        | "translation"
        | "fill-mask"
        | "feature-extraction"
        | "sentence-similarity"
        | "text-generation"
        | "text2text-generation" => TaskCategory::TextPayload,
        _ => TaskCategory::Unmapped,
    }
}

/// Modality of a [`TaskCategory::MediaUpload`] task, from its pipeline tag.
#[must_use]
pub fn media_modality(task_tag: &str) -> InputModality {
    if task_tag.starts_with("audio") {
        InputModality::Audio
    } else {
        InputModality::Image
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn tags(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[rstest]
    #[case("text-generation", &["conversational"], TaskCategory::ConversationalText)]
    #[case("image-text-to-text", &["conversational"], TaskCategory::ConversationalVision)]
    #[case("automatic-speech-recognition", &[], TaskCategory::SpeechRecognition)]
    #[case("document-question-answering", &[], TaskCategory::DocumentQuestionAnswering)]
    #[case("image-to-image", &[], TaskCategory::ImageToImage)]
    #[case("text-to-image", &[], TaskCategory::TextToImage)]
    #[case("text-generation", &[], TaskCategory::TextPayload)]
    #[case("fill-mask", &["transformers"], TaskCategory::TextPayload)]
    #[case("zero-shot-classification", &[], TaskCategory::ZeroShotClassification)]
    #[case("zero-shot-image-classification", &[], TaskCategory::ZeroShotImageClassification)]
    #[case("audio-classification", &[], TaskCategory::MediaUpload)]
    #[case("object-detection", &[], TaskCategory::MediaUpload)]
    #[case("text-to-speech", &[], TaskCategory::TextToAudio)]
    #[case("image-text-to-text", &[], TaskCategory::Unmapped)]
    #[case("reinforcement-learning", &[], TaskCategory::Unmapped)]
    fn test_classify(
        #[case] task: &str,
        #[case] model_tags: &[&str],
        #[case] expected: TaskCategory,
    ) {
        assert_eq!(classify(Some(task), &tags(model_tags)), expected);
    }

    #[test]
    fn test_conversational_tag_only_applies_to_chat_tasks() {
        let conversational = tags(&["conversational"]);
        assert_eq!(
            classify(Some("automatic-speech-recognition"), &conversational),
            TaskCategory::SpeechRecognition
        );
        assert_eq!(
            classify(Some("text-to-image"), &conversational),
            TaskCategory::TextToImage
        );
    }

    #[test]
    fn test_missing_task_tag() {
        assert_eq!(classify(None, &tags(&["conversational"])), TaskCategory::Unmapped);
    }

    #[test]
    fn test_conversational_flag() {
        for category in TaskCategory::ALL {
            let expected = matches!(
                category,
                TaskCategory::ConversationalText | TaskCategory::ConversationalVision
            );
            assert_eq!(category.is_conversational(), expected, "{category}");
        }
    }

    #[test]
    fn test_modality() {
        assert_eq!(
            TaskCategory::ConversationalText.modality(),
            Some(InputModality::Text)
        );
        assert_eq!(
            TaskCategory::ConversationalVision.modality(),
            Some(InputModality::Image)
        );
        assert_eq!(
            TaskCategory::SpeechRecognition.modality(),
            Some(InputModality::Audio)
        );
        assert_eq!(TaskCategory::Unmapped.modality(), None);
        assert_eq!(media_modality("audio-classification"), InputModality::Audio);
        assert_eq!(media_modality("image-segmentation"), InputModality::Image);
    }

    #[test]
    fn test_display_matches_serde() {
        for category in TaskCategory::ALL {
            let json = serde_json::to_value(category).unwrap();
            assert_eq!(json, category.to_string());
        }
    }
}
