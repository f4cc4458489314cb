//! Chat-completion snippets.
//!
//! Both conversational categories share one template; they differ only in
//! the sample messages the resolver supplies. The streaming option selects
//! between an iterate-and-print loop and a single blocking call.

use inference_snippets_core::format::{python_literal, PythonFormatOptions};
use inference_snippets_core::messages::messages_to_value;
use inference_snippets_core::{ConversationParams, ModelDescriptor, RenderOptions, TaskCategory};

/// Chat completion over text messages.
pub fn text(model: &ModelDescriptor, token: &str, options: &RenderOptions) -> String {
    render(model, token, options, TaskCategory::ConversationalText)
}

/// Chat completion over text and image messages.
pub fn vision(model: &ModelDescriptor, token: &str, options: &RenderOptions) -> String {
    render(model, token, options, TaskCategory::ConversationalVision)
}

fn render(
    model: &ModelDescriptor,
    token: &str,
    options: &RenderOptions,
    category: TaskCategory,
) -> String {
    let params = ConversationParams::resolve(category, options);
    let messages = python_literal(
        &messages_to_value(&params.messages),
        &PythonFormatOptions::tabs(),
    );
    let config = format_kwargs(&params.generation);

    let mut output = String::new();
    output.push_str("from huggingface_hub import InferenceClient\n\n");
    output.push_str(&format!("client = InferenceClient(api_key=\"{token}\")\n\n"));
    output.push_str(&format!("messages = {messages}\n\n"));

    if params.streaming {
        output.push_str("stream = client.chat.completions.create(\n");
        output.push_str(&format!("    model=\"{}\", \n", model.id));
        output.push_str("\tmessages=messages, \n");
        output.push_str(&format!("\t{config},\n"));
        output.push_str("\tstream=True\n)\n\n");
        output.push_str("for chunk in stream:\n");
        output.push_str("    print(chunk.choices[0].delta.content, end=\"\")");
    } else {
        output.push_str("completion = client.chat.completions.create(\n");
        output.push_str(&format!("    model=\"{}\", \n", model.id));
        output.push_str("\tmessages=messages, \n");
        output.push_str(&format!("\t{config}\n)\n\n"));
        output.push_str("print(completion.choices[0].message)");
    }

    output
}

/// Keyword arguments, one per line: `a=1,\n\tb=2`.
fn format_kwargs(config: &[(&'static str, String)]) -> String {
    config
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join(",\n\t")
}
