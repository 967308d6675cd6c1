#![forbid(unsafe_code)]

//! Hook input decoding
//!
//! Hook runners deliver the prompt either as a JSON record or as raw text.
//! Decoding never fails: anything that is not a usable JSON record is taken
//! to be the prompt itself.

use crate::error::InputError;
use serde_json::Value;
use std::io::Read;
use tracing::debug;

/// Read the whole of a reader (normally stdin) into a string
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD, so odd input
/// still reaches the matcher as text.
///
/// # Errors
///
/// Returns `InputError::Io` if the stream cannot be read.
pub fn read_input<R: Read>(mut reader: R) -> Result<String, InputError> {
    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;

    match String::from_utf8(buffer) {
        Ok(text) => Ok(text),
        Err(e) => {
            debug!("Hook input is not valid UTF-8, decoding lossily");
            Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
        }
    }
}

/// Extract the prompt from raw hook input
///
/// - blank input gives the empty prompt
/// - a JSON object gives its `prompt` field, else its `text` field, else ""
/// - anything else (invalid JSON, a bare JSON string or number) is the
///   prompt verbatim
pub fn decode_prompt(raw: &str) -> String {
    if raw.trim().is_empty() {
        return String::new();
    }

    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(record)) => ["prompt", "text"]
            .iter()
            .filter_map(|key| record.get(*key).and_then(Value::as_str))
            .find(|value| !value.is_empty())
            .unwrap_or_default()
            .to_string(),
        Ok(_) => {
            debug!("Hook input is JSON but not a record, using it as raw text");
            raw.to_string()
        }
        Err(e) => {
            debug!("Hook input is not JSON ({}), using it as raw text", e);
            raw.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_field() {
        assert_eq!(
            decode_prompt(r#"{"prompt": "fix the build", "session_id": "abc"}"#),
            "fix the build"
        );
    }

    #[test]
    fn test_text_field_fallback() {
        assert_eq!(decode_prompt(r#"{"text": "from text"}"#), "from text");
        assert_eq!(
            decode_prompt(r#"{"prompt": "", "text": "empty prompt falls back"}"#),
            "empty prompt falls back"
        );
    }

    #[test]
    fn test_record_without_prompt() {
        assert_eq!(decode_prompt(r#"{"cwd": "/repo"}"#), "");
        assert_eq!(decode_prompt(r#"{"prompt": 42}"#), "");
    }

    #[test]
    fn test_raw_text() {
        assert_eq!(
            decode_prompt("How do I revert a commit?\n"),
            "How do I revert a commit?\n"
        );
        assert_eq!(decode_prompt("{ broken json"), "{ broken json");
    }

    #[test]
    fn test_json_scalar_is_raw_text() {
        assert_eq!(decode_prompt("\"quoted\""), "\"quoted\"");
    }

    #[test]
    fn test_blank_input() {
        assert_eq!(decode_prompt(""), "");
        assert_eq!(decode_prompt("  \n\t"), "");
    }

    #[test]
    fn test_read_input() {
        let text = read_input("hello world".as_bytes()).unwrap();
        assert_eq!(text, "hello world");
    }

    #[test]
    fn test_read_input_invalid_utf8_is_lossy() {
        let text = read_input(&b"traceback here \xff"[..]).unwrap();
        assert_eq!(text, "traceback here \u{fffd}");
    }
}
