//! `huggingface_hub` snippets: one `InferenceClient` call per task.

use inference_snippets_core::defaults::{
    DOCUMENT_QUESTION, IMAGE_TO_IMAGE_PROMPT, SAMPLE_AUDIO_FILE, SAMPLE_IMAGE_FILE,
    TEXT_TO_IMAGE_PROMPT,
};
use inference_snippets_core::format::quote;
use inference_snippets_core::{ModelDescriptor, RenderOptions};

/// Client construction bound to the model.
fn client_header(model: &ModelDescriptor, token: &str) -> String {
    format!(
        "from huggingface_hub import InferenceClient\n\
         client = InferenceClient(\"{}\", token=\"{token}\")\n",
        model.id
    )
}

/// Transcribe the sample audio file.
pub fn speech_recognition(model: &ModelDescriptor, token: &str, _: &RenderOptions) -> String {
    let mut output = client_header(model, token);
    output.push_str(&format!(
        "\noutput = client.automatic_speech_recognition({})",
        quote(SAMPLE_AUDIO_FILE)
    ));
    output
}

/// Ask the sample question about the sample image.
pub fn document_question_answering(
    model: &ModelDescriptor,
    token: &str,
    _: &RenderOptions,
) -> String {
    let mut output = client_header(model, token);
    // Both arguments are emitted bare, without quotes.
    output.push_str(&format!(
        "\noutput = client.document_question_answering({}, question={})",
        SAMPLE_IMAGE_FILE, DOCUMENT_QUESTION
    ));
    output
}

/// Transform the sample image with the sample prompt.
pub fn image_to_image(model: &ModelDescriptor, token: &str, _: &RenderOptions) -> String {
    let mut output = client_header(model, token);
    output.push_str("\n# output is a PIL.Image object\n");
    output.push_str(&format!(
        "image = client.image_to_image({}, prompt={})",
        quote(SAMPLE_IMAGE_FILE),
        quote(IMAGE_TO_IMAGE_PROMPT)
    ));
    output
}

/// Generate an image from the sample prompt.
pub fn text_to_image(model: &ModelDescriptor, token: &str, _: &RenderOptions) -> String {
    let mut output = client_header(model, token);
    output.push_str("\n# output is a PIL.Image object\n");
    output.push_str(&format!(
        "image = client.text_to_image({})",
        quote(TEXT_TO_IMAGE_PROMPT)
    ));
    output
}
