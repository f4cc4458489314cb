//! Python template bodies.
//!
//! Producers are grouped by client approach:
//!
//! - [`conversational`]: chat completions through `huggingface_hub`
//! - [`hub`]: single-call `huggingface_hub` snippets
//! - [`requests`]: raw HTTP snippets built on `requests`

pub mod conversational;
pub mod hub;
pub mod requests;

use inference_snippets_core::ModelDescriptor;

/// Decode-and-display tail for snippets whose response is image bytes.
pub const IMAGE_CODA: &str = "# You can access the image with PIL.Image for example\n\
import io\n\
from PIL import Image\n\
image = Image.open(io.BytesIO(image_bytes))";

/// Playback tail for snippets whose response is audio bytes.
pub const AUDIO_CODA: &str = "# You can access the audio with IPython.display for example\n\
from IPython.display import Audio\n\
Audio(audio_bytes)";

/// Pipeline tag of a model, or the empty string.
pub(crate) fn task_tag(model: &ModelDescriptor) -> &str {
    model.task_tag.as_deref().unwrap_or_default()
}
