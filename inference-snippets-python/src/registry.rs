//! Python template registry.
//!
//! Static table from [`TaskCategory`] to the producers rendered for it, in
//! output order. The `match` is exhaustive, so a new category cannot be added
//! without deciding its templates here.

use inference_snippets_core::{ClientKind, SnippetGenerator, TaskCategory, TemplateEntry};

use crate::templates::{conversational, hub, requests};

static CONVERSATIONAL_TEXT: [TemplateEntry; 1] =
    [TemplateEntry::new(ClientKind::Sdk, conversational::text)];

static CONVERSATIONAL_VISION: [TemplateEntry; 1] =
    [TemplateEntry::new(ClientKind::Sdk, conversational::vision)];

static SPEECH_RECOGNITION: [TemplateEntry; 2] = [
    TemplateEntry::new(ClientKind::Sdk, hub::speech_recognition),
    TemplateEntry::new(ClientKind::Http, requests::speech_recognition),
];

static DOCUMENT_QUESTION_ANSWERING: [TemplateEntry; 2] = [
    TemplateEntry::new(ClientKind::Sdk, hub::document_question_answering),
    TemplateEntry::new(ClientKind::Http, requests::document_question_answering),
];

static IMAGE_TO_IMAGE: [TemplateEntry; 2] = [
    TemplateEntry::new(ClientKind::Sdk, hub::image_to_image),
    TemplateEntry::new(ClientKind::Http, requests::image_to_image),
];

static TEXT_TO_IMAGE: [TemplateEntry; 2] = [
    TemplateEntry::new(ClientKind::Sdk, hub::text_to_image),
    TemplateEntry::new(ClientKind::Http, requests::text_to_image),
];

static TEXT_PAYLOAD: [TemplateEntry; 1] =
    [TemplateEntry::new(ClientKind::Http, requests::text_payload)];

static ZERO_SHOT_CLASSIFICATION: [TemplateEntry; 1] = [TemplateEntry::new(
    ClientKind::Http,
    requests::zero_shot_classification,
)];

static ZERO_SHOT_IMAGE_CLASSIFICATION: [TemplateEntry; 1] = [TemplateEntry::new(
    ClientKind::Http,
    requests::zero_shot_image_classification,
)];

static MEDIA_UPLOAD: [TemplateEntry; 1] =
    [TemplateEntry::new(ClientKind::Http, requests::media_upload)];

static TEXT_TO_AUDIO: [TemplateEntry; 1] =
    [TemplateEntry::new(ClientKind::Http, requests::text_to_audio)];

/// Python snippet generator (`huggingface_hub` and `requests`).
#[derive(Debug, Clone, Copy, Default)]
pub struct PythonSnippets;

impl PythonSnippets {
    /// Create the generator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl SnippetGenerator for PythonSnippets {
    fn language(&self) -> &'static str {
        "python"
    }

    fn templates(&self, category: TaskCategory) -> &'static [TemplateEntry] {
        match category {
            TaskCategory::ConversationalText => &CONVERSATIONAL_TEXT,
            TaskCategory::ConversationalVision => &CONVERSATIONAL_VISION,
            TaskCategory::SpeechRecognition => &SPEECH_RECOGNITION,
            TaskCategory::DocumentQuestionAnswering => &DOCUMENT_QUESTION_ANSWERING,
            TaskCategory::ImageToImage => &IMAGE_TO_IMAGE,
            TaskCategory::TextToImage => &TEXT_TO_IMAGE,
            TaskCategory::TextPayload => &TEXT_PAYLOAD,
            TaskCategory::ZeroShotClassification => &ZERO_SHOT_CLASSIFICATION,
            TaskCategory::ZeroShotImageClassification => &ZERO_SHOT_IMAGE_CLASSIFICATION,
            TaskCategory::MediaUpload => &MEDIA_UPLOAD,
            TaskCategory::TextToAudio => &TEXT_TO_AUDIO,
            TaskCategory::Unmapped => {
                #[cfg(feature = "tracing-integration")]
                tracing::debug!(category = %category, "no python snippet template");
                &[]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn clients(category: TaskCategory) -> Vec<ClientKind> {
        PythonSnippets
            .templates(category)
            .iter()
            .map(|entry| entry.client)
            .collect()
    }

    #[rstest]
    #[case(TaskCategory::SpeechRecognition)]
    #[case(TaskCategory::DocumentQuestionAnswering)]
    #[case(TaskCategory::ImageToImage)]
    #[case(TaskCategory::TextToImage)]
    fn test_dual_client_order(#[case] category: TaskCategory) {
        assert_eq!(clients(category), vec![ClientKind::Sdk, ClientKind::Http]);
    }

    #[rstest]
    #[case(TaskCategory::ConversationalText)]
    #[case(TaskCategory::ConversationalVision)]
    fn test_conversational_is_sdk_only(#[case] category: TaskCategory) {
        assert_eq!(clients(category), vec![ClientKind::Sdk]);
    }

    #[rstest]
    #[case(TaskCategory::TextPayload)]
    #[case(TaskCategory::ZeroShotClassification)]
    #[case(TaskCategory::ZeroShotImageClassification)]
    #[case(TaskCategory::MediaUpload)]
    #[case(TaskCategory::TextToAudio)]
    fn test_http_only(#[case] category: TaskCategory) {
        assert_eq!(clients(category), vec![ClientKind::Http]);
    }

    #[test]
    fn test_unmapped_is_empty() {
        assert!(PythonSnippets.templates(TaskCategory::Unmapped).is_empty());
    }

    #[test]
    fn test_every_mapped_category_has_templates() {
        for category in TaskCategory::ALL {
            let count = PythonSnippets.templates(category).len();
            assert_eq!(count == 0, category == TaskCategory::Unmapped, "{category}");
        }
    }

    #[test]
    fn test_language() {
        assert_eq!(PythonSnippets::new().language(), "python");
    }
}
