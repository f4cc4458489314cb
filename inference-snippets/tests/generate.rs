//! End-to-end tests for the `generate` entry points.

use inference_snippets::{
    generate, generate_from_json, ClientKind, ModelDescriptor, RenderOptions, SnippetError,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

const SDK_HTTP: &[ClientKind] = &[ClientKind::Sdk, ClientKind::Http];
const SDK: &[ClientKind] = &[ClientKind::Sdk];
const HTTP: &[ClientKind] = &[ClientKind::Http];
const NONE: &[ClientKind] = &[];

fn model(id: &str, task: &str, tags: &[&str]) -> ModelDescriptor {
    tags.iter()
        .fold(ModelDescriptor::new(id).with_task(task), |model, tag| {
            model.with_tag(*tag)
        })
}

#[rstest]
#[case("openai/whisper-large-v3-turbo", "automatic-speech-recognition", &[], SDK_HTTP)]
#[case("impira/layoutlm-invoices", "document-question-answering", &[], SDK_HTTP)]
#[case("stabilityai/stable-diffusion-xl-refiner-1.0", "image-to-image", &[], SDK_HTTP)]
#[case("black-forest-labs/FLUX.1-schnell", "text-to-image", &[], SDK_HTTP)]
#[case("meta-llama/Llama-3.1-8B-Instruct", "text-generation", &["conversational"], SDK)]
#[case("meta-llama/Llama-3.2-11B-Vision-Instruct", "image-text-to-text", &["conversational"], SDK)]
#[case("gpt2", "text-generation", &[], HTTP)]
#[case("facebook/bart-large-mnli", "zero-shot-classification", &[], HTTP)]
#[case("facebook/detr-resnet-50", "object-detection", &[], HTTP)]
#[case("facebook/musicgen-small", "text-to-audio", &[], HTTP)]
#[case("meta-llama/Llama-3.2-11B-Vision-Instruct", "image-text-to-text", &[], NONE)]
#[case("someone/agent", "reinforcement-learning", &[], NONE)]
fn test_client_shape(
    #[case] id: &str,
    #[case] task: &str,
    #[case] tags: &[&str],
    #[case] expected: &[ClientKind],
) {
    let clients: Vec<ClientKind> = generate(&model(id, task, tags), "api_token", None)
        .into_iter()
        .map(|snippet| snippet.client)
        .collect();
    assert_eq!(clients, expected);
}

#[test]
fn test_model_without_task_yields_nothing() {
    let model = ModelDescriptor::new("owner/name").with_tag("conversational");
    assert!(generate(&model, "api_token", None).is_empty());
}

#[test]
fn test_model_id_and_token_are_substituted() {
    let model = model("owner/name", "text-to-image", &[]);
    for snippet in generate(&model, "hf_secret", None) {
        assert!(snippet.content.contains("owner/name"), "{}", snippet.client);
        assert!(snippet.content.contains("hf_secret"), "{}", snippet.client);
    }
}

#[test]
fn test_non_finite_sampling_values_are_not_rendered() {
    let model = model(
        "meta-llama/Llama-3.1-8B-Instruct",
        "text-generation",
        &["conversational"],
    );
    let options = RenderOptions::new().top_p(f64::NAN).temperature(f64::INFINITY);
    let snippets = generate(&model, "api_token", Some(&options));
    assert_eq!(snippets.len(), 1);
    assert!(!snippets[0].content.contains("NaN"));
    assert!(!snippets[0].content.contains("temperature="));
    assert!(snippets[0]
        .content
        .contains("\tmessages=messages, \n\tmax_tokens=500,\n\tstream=True\n)"));
}

#[test]
fn test_generate_from_json() {
    let model_json = r#"{
        "id": "openai/whisper-large-v3-turbo",
        "pipeline_tag": "automatic-speech-recognition",
        "tags": [],
        "inference": ""
    }"#;

    let from_json = generate_from_json(model_json, "api_token", None).unwrap();
    let direct = generate(
        &model("openai/whisper-large-v3-turbo", "automatic-speech-recognition", &[]),
        "api_token",
        None,
    );
    assert_eq!(from_json, direct);
}

#[test]
fn test_generate_from_json_with_options() {
    let model_json = r#"{
        "id": "meta-llama/Llama-3.1-8B-Instruct",
        "pipeline_tag": "text-generation",
        "tags": ["conversational"]
    }"#;
    let options = r#"{"streaming": false, "max_tokens": 64}"#;

    let snippets = generate_from_json(model_json, "api_token", Some(options)).unwrap();
    assert_eq!(snippets.len(), 1);
    assert!(snippets[0].content.contains("\tmax_tokens=64\n)"));
    assert!(!snippets[0].content.contains("stream=True"));
}

#[test]
fn test_generate_from_json_rejects_bad_model() {
    let err = generate_from_json("{\"pipeline_tag\": 3}", "t", None).unwrap_err();
    assert!(matches!(err, SnippetError::Serialization(_)));
}

#[test]
fn test_generate_from_json_rejects_bad_options() {
    let model_json = r#"{"id": "gpt2", "pipeline_tag": "text-generation"}"#;
    let err = generate_from_json(model_json, "t", Some(r#"{"max_tokens": 0}"#)).unwrap_err();
    assert!(matches!(err, SnippetError::Configuration(_)));
}

#[test]
fn test_snippet_serializes_client_name() {
    let snippets = generate(&model("gpt2", "text-generation", &[]), "t", None);
    let value = serde_json::to_value(&snippets[0]).unwrap();
    assert_eq!(value["client"], "http");
}
