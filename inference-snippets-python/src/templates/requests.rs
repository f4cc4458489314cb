//! `requests` snippets: raw HTTP calls against the Inference API.
//!
//! Every snippet starts with the same header (`API_URL` and bearer
//! `headers`). Body shapes:
//!
//! - raw file upload (`data=`) for audio and image analysis tasks
//! - base64-in-JSON for tasks whose payload nests the image next to other fields
//! - plain JSON for text inputs
//!
//! Image and audio responses are returned as bytes and followed by a short
//! decode coda.

use inference_snippets_core::defaults::{
    sample_file, sample_input, DOCUMENT_QUESTION, IMAGE_CANDIDATE_LABELS, IMAGE_TO_IMAGE_PROMPT,
    INFERENCE_API_URL, SAMPLE_AUDIO_FILE, SAMPLE_IMAGE_FILE, TEXT_CANDIDATE_LABELS,
    TEXT_TO_IMAGE_PROMPT,
};
use inference_snippets_core::format::{python_literal, quote, PythonFormatOptions};
use inference_snippets_core::{ModelDescriptor, RenderOptions};
use serde_json::{json, Value};

use super::{task_tag, AUDIO_CODA, IMAGE_CODA};

/// How the snippet's `query` returns the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ResponseBody {
    /// `response.json()`
    Json,
    /// `response.content` (raw bytes)
    Bytes,
}

impl ResponseBody {
    fn accessor(self) -> &'static str {
        match self {
            ResponseBody::Json => "response.json()",
            ResponseBody::Bytes => "response.content",
        }
    }
}

/// `import requests`, the endpoint URL and the bearer header.
fn requests_header(model: &ModelDescriptor, token: &str) -> String {
    format!(
        "import requests\n\n\
         API_URL = \"{INFERENCE_API_URL}/{}\"\n\
         headers = {{\"Authorization\": \"Bearer {token}\"}}\n",
        model.id
    )
}

/// `query(filename)` posting the file's raw bytes.
fn file_upload(model: &ModelDescriptor, token: &str, file: &str) -> String {
    let mut output = requests_header(model, token);
    output.push_str("\ndef query(filename):\n");
    output.push_str("    with open(filename, \"rb\") as f:\n");
    output.push_str("        data = f.read()\n");
    output.push_str("    response = requests.post(API_URL, headers=headers, data=data)\n");
    output.push_str("    return response.json()\n\n");
    output.push_str(&format!("output = query({})", quote(file)));
    output
}

/// `query(payload)` that replaces `payload[field]`, a file path, with the
/// file's base64 encoding before posting JSON.
fn base64_query(field: &str, body: ResponseBody) -> String {
    let field = quote(field);
    let mut output = String::from("\ndef query(payload):\n");
    output.push_str(&format!("\twith open(payload[{field}], \"rb\") as f:\n"));
    output.push_str("\t\timg = f.read()\n");
    output.push_str(&format!(
        "\t\tpayload[{field}] = base64.b64encode(img).decode(\"utf-8\")\n"
    ));
    output.push_str("\tresponse = requests.post(API_URL, headers=headers, json=payload)\n");
    output.push_str(&format!("\treturn {}\n", body.accessor()));
    output
}

/// `query(payload)` posting JSON as-is.
fn json_query(body: ResponseBody) -> String {
    format!(
        "\ndef query(payload):\n\
         \tresponse = requests.post(API_URL, headers=headers, json=payload)\n\
         \treturn {}\n",
        body.accessor()
    )
}

/// A value nested one level inside the `query({...})` call.
fn nested(value: &Value) -> String {
    python_literal(value, &PythonFormatOptions::tabs().with_base_depth(1))
}

/// Post the sample audio file.
pub fn speech_recognition(model: &ModelDescriptor, token: &str, _: &RenderOptions) -> String {
    file_upload(model, token, SAMPLE_AUDIO_FILE)
}

/// Post the sample audio or image file for classification, detection or
/// segmentation.
pub fn media_upload(model: &ModelDescriptor, token: &str, _: &RenderOptions) -> String {
    file_upload(model, token, sample_file(task_tag(model)))
}

/// Base64-encode the sample image under `inputs.image` and ask the sample
/// question.
pub fn document_question_answering(
    model: &ModelDescriptor,
    token: &str,
    _: &RenderOptions,
) -> String {
    let inputs = json!({
        "image": SAMPLE_IMAGE_FILE,
        "question": DOCUMENT_QUESTION,
    });

    let mut output = requests_header(model, token);
    output.push_str(&base64_query("image", ResponseBody::Json));
    output.push_str("\noutput = query({\n");
    output.push_str(&format!("    \"inputs\": {},\n", nested(&inputs)));
    output.push_str("})");
    output
}

/// Base64-encode the sample image under `inputs` and decode the returned
/// image.
pub fn image_to_image(model: &ModelDescriptor, token: &str, _: &RenderOptions) -> String {
    let parameters = json!({ "prompt": IMAGE_TO_IMAGE_PROMPT });

    let mut output = requests_header(model, token);
    output.push_str(&base64_query("inputs", ResponseBody::Bytes));
    output.push_str("\nimage_bytes = query({\n");
    output.push_str(&format!("\t\"inputs\": {},\n", quote(SAMPLE_IMAGE_FILE)));
    output.push_str(&format!(
        "\t\"parameters\": {},\n",
        python_literal(&parameters, &PythonFormatOptions::new())
    ));
    output.push_str("})\n\n");
    output.push_str(IMAGE_CODA);
    output
}

/// Post the sample prompt and decode the returned image.
pub fn text_to_image(model: &ModelDescriptor, token: &str, _: &RenderOptions) -> String {
    let mut output = requests_header(model, token);
    output.push_str(&json_query(ResponseBody::Bytes));
    output.push_str("image_bytes = query({\n");
    output.push_str(&format!("\t\"inputs\": {},\n", quote(TEXT_TO_IMAGE_PROMPT)));
    output.push_str("})\n\n");
    output.push_str(IMAGE_CODA);
    output
}

/// Post the task's sample text input and return the JSON response.
pub fn text_payload(model: &ModelDescriptor, token: &str, _: &RenderOptions) -> String {
    let inputs = sample_input(task_tag(model)).unwrap_or_else(|| Value::String(String::new()));

    let mut output = requests_header(model, token);
    output.push_str(&json_query(ResponseBody::Json));
    output.push_str("\noutput = query({\n");
    output.push_str(&format!("\t\"inputs\": {},\n", nested(&inputs)));
    output.push_str("})");
    output
}

/// Post the sample text with candidate labels.
pub fn zero_shot_classification(
    model: &ModelDescriptor,
    token: &str,
    _: &RenderOptions,
) -> String {
    let inputs = sample_input(task_tag(model)).unwrap_or_else(|| Value::String(String::new()));
    let parameters = json!({ "candidate_labels": TEXT_CANDIDATE_LABELS });

    let mut output = requests_header(model, token);
    output.push_str(&json_query(ResponseBody::Json));
    output.push_str("\noutput = query({\n");
    output.push_str(&format!("\t\"inputs\": {},\n", nested(&inputs)));
    output.push_str(&format!(
        "\t\"parameters\": {},\n",
        python_literal(&parameters, &PythonFormatOptions::new())
    ));
    output.push_str("})");
    output
}

/// Base64-encode the sample image and post it with candidate labels.
pub fn zero_shot_image_classification(
    model: &ModelDescriptor,
    token: &str,
    _: &RenderOptions,
) -> String {
    let parameters = json!({ "candidate_labels": IMAGE_CANDIDATE_LABELS });

    let mut output = requests_header(model, token);
    output.push_str("\ndef query(data):\n");
    output.push_str("\twith open(data[\"image_path\"], \"rb\") as f:\n");
    output.push_str("\t\timg = f.read()\n");
    output.push_str("\tpayload = {\n");
    output.push_str("\t\t\"parameters\": data[\"parameters\"],\n");
    output.push_str("\t\t\"inputs\": base64.b64encode(img).decode(\"utf-8\")\n");
    output.push_str("\t}\n");
    output.push_str("\tresponse = requests.post(API_URL, headers=headers, json=payload)\n");
    output.push_str("\treturn response.json()\n");
    output.push_str("\noutput = query({\n");
    output.push_str(&format!("\t\"image_path\": {},\n", quote(SAMPLE_IMAGE_FILE)));
    output.push_str(&format!(
        "\t\"parameters\": {},\n",
        python_literal(&parameters, &PythonFormatOptions::new())
    ));
    output.push_str("})");
    output
}

/// Post the sample text and play the returned audio.
pub fn text_to_audio(model: &ModelDescriptor, token: &str, _: &RenderOptions) -> String {
    let inputs = sample_input(task_tag(model)).unwrap_or_else(|| Value::String(String::new()));

    let mut output = requests_header(model, token);
    output.push_str(&json_query(ResponseBody::Bytes));
    output.push_str("\naudio_bytes = query({\n");
    output.push_str(&format!("\t\"inputs\": {},\n", nested(&inputs)));
    output.push_str("})\n\n");
    output.push_str(AUDIO_CODA);
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_requests_header() {
        let model = ModelDescriptor::new("owner/name");
        assert_eq!(
            requests_header(&model, "secret"),
            "import requests\n\nAPI_URL = \"https://api-inference.huggingface.co/models/owner/name\"\nheaders = {\"Authorization\": \"Bearer secret\"}\n"
        );
    }

    #[test]
    fn test_json_query_body() {
        assert_eq!(
            json_query(ResponseBody::Json),
            "\ndef query(payload):\n\tresponse = requests.post(API_URL, headers=headers, json=payload)\n\treturn response.json()\n"
        );
    }

    #[test]
    fn test_media_upload_picks_file_by_modality() {
        let audio = ModelDescriptor::new("a/b").with_task("audio-classification");
        let image = ModelDescriptor::new("a/b").with_task("object-detection");
        let options = RenderOptions::new();
        assert!(media_upload(&audio, "t", &options).ends_with("output = query(\"sample1.flac\")"));
        assert!(media_upload(&image, "t", &options).ends_with("output = query(\"cat.png\")"));
    }

    #[test]
    fn test_text_payload_nests_structured_input() {
        let model =
            ModelDescriptor::new("deepset/roberta-base-squad2").with_task("question-answering");
        let content = text_payload(&model, "t", &RenderOptions::new());
        assert!(content.ends_with(
            "output = query({\n\t\"inputs\": {\n\t\t\"question\": \"What is my name?\",\n\t\t\"context\": \"My name is Clara and I live in Berkeley.\"\n\t},\n})"
        ));
    }

    #[test]
    fn test_text_payload_plain_string() {
        let model =
            ModelDescriptor::new("distilbert/distilbert-base-uncased-finetuned-sst-2-english")
                .with_task("text-classification");
        let content = text_payload(&model, "t", &RenderOptions::new());
        assert!(content.ends_with(
            "\treturn response.json()\n\noutput = query({\n\t\"inputs\": \"I like you. I love you\",\n})"
        ));
    }

    #[test]
    fn test_zero_shot_labels() {
        let model =
            ModelDescriptor::new("facebook/bart-large-mnli").with_task("zero-shot-classification");
        let content = zero_shot_classification(&model, "t", &RenderOptions::new());
        assert!(content.contains(
            "\t\"parameters\": {\"candidate_labels\": [\"refund\", \"legal\", \"faq\"]},\n})"
        ));
    }

    #[test]
    fn test_zero_shot_image_encodes_file() {
        let model = ModelDescriptor::new("openai/clip-vit-large-patch14")
            .with_task("zero-shot-image-classification");
        let content = zero_shot_image_classification(&model, "t", &RenderOptions::new());
        assert!(content.contains("base64.b64encode(img)"));
        assert!(content.contains("\t\"image_path\": \"cat.png\",\n"));
        assert!(content.contains("[\"cat\", \"dog\", \"llama\"]"));
    }

    #[test]
    fn test_text_to_audio_coda() {
        let model = ModelDescriptor::new("facebook/musicgen-small").with_task("text-to-audio");
        let content = text_to_audio(&model, "t", &RenderOptions::new());
        assert!(content.contains("\treturn response.content\n"));
        assert!(content.contains(
            "audio_bytes = query({\n\t\"inputs\": \"liquid drum and bass, atmospheric synths, airy sounds\",\n})\n\n"
        ));
        assert!(content.ends_with("Audio(audio_bytes)"));
    }
}
