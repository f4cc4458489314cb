//! Format data as Python literals for code snippets.
//!
//! Rendered snippets embed structured values (chat messages, JSON payloads,
//! label lists) directly in Python source. This module converts any
//! serializable Rust value into the equivalent Python literal.
//!
//! # Example
//!
//! ```rust
//! use inference_snippets_core::format::{format_as_python, PythonFormatOptions};
//!
//! let data = serde_json::json!({
//!     "role": "user",
//!     "stream": true,
//!     "stop": null
//! });
//!
//! let literal = format_as_python(&data).unwrap();
//! assert_eq!(literal, "{\"role\": \"user\", \"stream\": True, \"stop\": None}");
//! ```

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Options for Python literal formatting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PythonFormatOptions {
    /// Indentation string (None for compact, single-line output).
    pub indent: Option<String>,
    /// Nesting depth of the first line, for literals embedded in
    /// already-indented code.
    pub base_depth: usize,
}

impl PythonFormatOptions {
    /// Create new options with default values (compact output).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Multi-line output indented with tabs.
    #[must_use]
    pub fn tabs() -> Self {
        Self::new().with_indent(Some("\t".to_string()))
    }

    /// Set the indentation string. None for compact output.
    #[must_use]
    pub fn with_indent(mut self, indent: Option<String>) -> Self {
        self.indent = indent;
        self
    }

    /// Set the nesting depth of the first line.
    #[must_use]
    pub fn with_base_depth(mut self, depth: usize) -> Self {
        self.base_depth = depth;
        self
    }

    /// Disable indentation for compact output.
    #[must_use]
    pub fn compact(mut self) -> Self {
        self.indent = None;
        self
    }
}

/// Error type for Python formatting operations.
#[derive(Debug, Error)]
pub enum PythonFormatError {
    /// Serialization error when converting to the JSON intermediate.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Format a serializable value as a compact Python literal.
pub fn format_as_python<T: Serialize>(value: &T) -> Result<String, PythonFormatError> {
    format_as_python_with_options(value, &PythonFormatOptions::default())
}

/// Format with full options control.
///
/// # Example
///
/// ```rust
/// use inference_snippets_core::format::{format_as_python_with_options, PythonFormatOptions};
///
/// let labels = vec!["cat", "dog"];
/// let literal = format_as_python_with_options(&labels, &PythonFormatOptions::tabs()).unwrap();
/// assert_eq!(literal, "[\n\t\"cat\",\n\t\"dog\"\n]");
/// ```
pub fn format_as_python_with_options<T: Serialize>(
    value: &T,
    options: &PythonFormatOptions,
) -> Result<String, PythonFormatError> {
    let json_value = serde_json::to_value(value)?;
    Ok(python_literal(&json_value, options))
}

/// Render an already-built JSON value as a Python literal.
///
/// Infallible counterpart of [`format_as_python_with_options`] used by the
/// renderers, which build their payloads with `serde_json::json!`.
#[must_use]
pub fn python_literal(value: &Value, options: &PythonFormatOptions) -> String {
    let mut output = String::new();
    value_to_python_inner(value, options, options.base_depth, &mut output);
    output
}

fn value_to_python_inner(
    value: &Value,
    options: &PythonFormatOptions,
    depth: usize,
    output: &mut String,
) {
    match value {
        Value::Null => output.push_str("None"),
        Value::Bool(b) => output.push_str(if *b { "True" } else { "False" }),
        Value::Number(n) => output.push_str(&n.to_string()),
        Value::String(s) => push_quoted(s, output),
        Value::Array(arr) => {
            if arr.is_empty() {
                output.push_str("[]");
                return;
            }
            output.push('[');
            for (i, item) in arr.iter().enumerate() {
                push_separator(options, depth + 1, i == 0, output);
                value_to_python_inner(item, options, depth + 1, output);
            }
            push_closing(options, depth, output);
            output.push(']');
        }
        Value::Object(map) => {
            if map.is_empty() {
                output.push_str("{}");
                return;
            }
            output.push('{');
            for (i, (key, val)) in map.iter().enumerate() {
                push_separator(options, depth + 1, i == 0, output);
                push_quoted(key, output);
                output.push_str(": ");
                value_to_python_inner(val, options, depth + 1, output);
            }
            push_closing(options, depth, output);
            output.push('}');
        }
    }
}

/// Emit what goes between an opening bracket or previous item and the next item.
fn push_separator(options: &PythonFormatOptions, depth: usize, first: bool, output: &mut String) {
    match options.indent {
        Some(ref indent) => {
            if !first {
                output.push(',');
            }
            output.push('\n');
            output.push_str(&indent.repeat(depth));
        }
        None => {
            if !first {
                output.push_str(", ");
            }
        }
    }
}

fn push_closing(options: &PythonFormatOptions, depth: usize, output: &mut String) {
    if let Some(ref indent) = options.indent {
        output.push('\n');
        output.push_str(&indent.repeat(depth));
    }
}

/// Write `s` as a double-quoted Python string literal.
fn push_quoted(s: &str, output: &mut String) {
    output.push('"');
    for c in s.chars() {
        match c {
            '"' => output.push_str("\\\""),
            '\\' => output.push_str("\\\\"),
            '\n' => output.push_str("\\n"),
            '\r' => output.push_str("\\r"),
            '\t' => output.push_str("\\t"),
            c if c.is_control() => output.push_str(&format!("\\u{:04x}", c as u32)),
            _ => output.push(c),
        }
    }
    output.push('"');
}

/// Quote a single string as a Python literal.
#[must_use]
pub fn quote(s: &str) -> String {
    let mut output = String::with_capacity(s.len() + 2);
    push_quoted(s, &mut output);
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_scalars() {
        let opts = PythonFormatOptions::default();
        assert_eq!(python_literal(&json!(null), &opts), "None");
        assert_eq!(python_literal(&json!(true), &opts), "True");
        assert_eq!(python_literal(&json!(false), &opts), "False");
        assert_eq!(python_literal(&json!(42), &opts), "42");
        assert_eq!(python_literal(&json!(0.5), &opts), "0.5");
        assert_eq!(python_literal(&json!("hi"), &opts), "\"hi\"");
    }

    #[test]
    fn test_compact_object() {
        let data = json!({"prompt": "Turn the cat into a tiger."});
        assert_eq!(
            format_as_python(&data).unwrap(),
            "{\"prompt\": \"Turn the cat into a tiger.\"}"
        );
    }

    #[test]
    fn test_compact_array() {
        let data = json!(["refund", "legal", "faq"]);
        assert_eq!(
            format_as_python(&data).unwrap(),
            "[\"refund\", \"legal\", \"faq\"]"
        );
    }

    #[test]
    fn test_key_order_is_insertion_order() {
        let data = json!({"role": "user", "content": "x"});
        assert_eq!(
            format_as_python(&data).unwrap(),
            "{\"role\": \"user\", \"content\": \"x\"}"
        );
    }

    #[test]
    fn test_tab_indented_nested() {
        let data = json!([{"role": "user", "content": [{"type": "text"}]}]);
        let literal = format_as_python_with_options(&data, &PythonFormatOptions::tabs()).unwrap();
        assert_eq!(
            literal,
            "[\n\t{\n\t\t\"role\": \"user\",\n\t\t\"content\": [\n\t\t\t{\n\t\t\t\t\"type\": \"text\"\n\t\t\t}\n\t\t]\n\t}\n]"
        );
    }

    #[test]
    fn test_base_depth() {
        let data = json!({"image": "cat.png", "question": "Why?"});
        let options = PythonFormatOptions::tabs().with_base_depth(1);
        assert_eq!(
            python_literal(&data, &options),
            "{\n\t\t\"image\": \"cat.png\",\n\t\t\"question\": \"Why?\"\n\t}"
        );
    }

    #[test]
    fn test_empty_containers() {
        let options = PythonFormatOptions::tabs();
        assert_eq!(python_literal(&json!([]), &options), "[]");
        assert_eq!(python_literal(&json!({}), &options), "{}");
    }

    #[test]
    fn test_string_escapes() {
        assert_eq!(quote("say \"hi\""), "\"say \\\"hi\\\"\"");
        assert_eq!(quote("a\\b"), "\"a\\\\b\"");
        assert_eq!(quote("line\nbreak\ttab"), "\"line\\nbreak\\ttab\"");
        assert_eq!(quote("\u{1}"), "\"\\u0001\"");
    }

    #[test]
    fn test_non_ascii_kept_verbatim() {
        assert_eq!(quote("Меня зовут"), "\"Меня зовут\"");
    }

    #[test]
    fn test_struct_serialization() {
        #[derive(Serialize)]
        struct Payload {
            inputs: String,
            wait_for_model: bool,
        }

        let payload = Payload {
            inputs: "hello".to_string(),
            wait_for_model: true,
        };

        assert_eq!(
            format_as_python(&payload).unwrap(),
            "{\"inputs\": \"hello\", \"wait_for_model\": True}"
        );
    }

    #[test]
    fn test_options_builder() {
        let options = PythonFormatOptions::new()
            .with_indent(Some("    ".to_string()))
            .with_base_depth(2);
        assert_eq!(options.indent, Some("    ".to_string()));
        assert_eq!(options.base_depth, 2);
        assert_eq!(options.compact().indent, None);
    }
}
