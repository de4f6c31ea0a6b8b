//! Decoding of a single dot-separated token segment

use crate::utils::base64url;
use serde_json::{Map, Value};
use std::fmt;

/// One decoded token segment
///
/// A segment is a [`Segment::Document`] when its Base64URL content decodes
/// to a JSON object. Everything else keeps the segment text exactly as it
/// appeared in the token.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Parsed JSON object
    Document(Map<String, Value>),
    /// Undecodable segment, verbatim
    RawText(String),
}

impl Segment {
    /// Decode a segment, falling back to the raw text on any failure
    pub(crate) fn decode(part: &str, max_size: usize) -> Self {
        match Self::parse_document(part, max_size) {
            Ok(document) => Segment::Document(document),
            Err(reason) => {
                tracing::trace!(%reason, len = part.len(), "segment kept as raw text");
                Segment::RawText(part.to_string())
            }
        }
    }

    fn parse_document(part: &str, max_size: usize) -> crate::Result<Map<String, Value>> {
        let json = base64url::decode_string(part, max_size)?;
        match serde_json::from_str::<Value>(&json) {
            Ok(Value::Object(document)) => Ok(document),
            Ok(other) => Err(crate::Error::FormatInvalidJson(format!(
                "expected object, found {}",
                kind_of(&other)
            ))),
            Err(e) => Err(crate::Error::FormatInvalidJson(e.to_string())),
        }
    }

    /// Whether this segment parsed as a JSON object
    pub fn is_document(&self) -> bool {
        matches!(self, Segment::Document(_))
    }

    /// The parsed object, if any
    pub fn as_document(&self) -> Option<&Map<String, Value>> {
        match self {
            Segment::Document(document) => Some(document),
            Segment::RawText(_) => None,
        }
    }

    /// The raw text, if the segment did not decode
    pub fn as_raw_text(&self) -> Option<&str> {
        match self {
            Segment::Document(_) => None,
            Segment::RawText(text) => Some(text),
        }
    }

    /// Pretty-printed JSON with two-space indentation
    pub fn to_pretty_json(&self) -> Option<String> {
        self.as_document()
            .and_then(|document| serde_json::to_string_pretty(document).ok())
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Document(document) => match serde_json::to_string(document) {
                Ok(json) => f.write_str(&json),
                Err(_) => Err(fmt::Error),
            },
            Segment::RawText(text) => f.write_str(text),
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
