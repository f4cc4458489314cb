//! Render the snippets for a model.
//!
//! Run with:
//! ```bash
//! cargo run --example render -- meta-llama/Llama-3.1-8B-Instruct text-generation conversational
//! RUST_LOG=debug cargo run --example render --features tracing-integration -- gpt2 text-generation
//! ```
//!
//! Arguments are the model id, the pipeline tag and any number of tags. With
//! no arguments a few well-known models are rendered. The token is read from
//! `HF_TOKEN` and falls back to a placeholder.

use inference_snippets::prelude::*;

const PLACEHOLDER_TOKEN: &str = "hf_***";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let token = std::env::var("HF_TOKEN").unwrap_or_else(|_| PLACEHOLDER_TOKEN.to_string());
    let args: Vec<String> = std::env::args().skip(1).collect();

    let models = match args.as_slice() {
        [] => vec![
            ModelDescriptor::new("meta-llama/Llama-3.1-8B-Instruct")
                .with_task("text-generation")
                .with_tag("conversational"),
            ModelDescriptor::new("openai/whisper-large-v3-turbo")
                .with_task("automatic-speech-recognition"),
            ModelDescriptor::new("black-forest-labs/FLUX.1-schnell").with_task("text-to-image"),
        ],
        [id] => anyhow::bail!("missing pipeline tag for {id}"),
        [id, task, tags @ ..] => vec![tags
            .iter()
            .fold(ModelDescriptor::new(id.as_str()).with_task(task.as_str()), |model, tag| {
                model.with_tag(tag.as_str())
            })],
    };

    let options = RenderOptions::new();

    for model in &models {
        let snippets = generate(model, &token, Some(&options));
        tracing::info!(
            model = %model.id,
            category = %model.category(),
            count = snippets.len(),
            "rendered snippets"
        );

        println!("=== {} ({}) ===\n", model.id, model.category());
        if snippets.is_empty() {
            println!("(no snippet available)\n");
        }
        for snippet in &snippets {
            println!("--- {} ({}) ---", snippet.client, snippet.client.python_library());
            println!("{}\n", snippet.content);
        }
    }

    Ok(())
}
