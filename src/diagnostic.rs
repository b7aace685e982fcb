//! @ai:module:intent Data structures for cargo's machine-readable diagnostics
//! @ai:module:layer domain
//! @ai:module:public_api DiagnosticRecord, Message, Span
//! @ai:module:stateless true
//!
//! Records arrive as untyped JSON. Only the span chosen as primary is held to
//! a schema; everything else is read leniently and unknown shapes are inert.

use serde::Deserialize;
use serde_json::{Map, Value};

/// @ai:intent One decoded line of `--message-format=json` output
#[derive(Debug, Clone, PartialEq)]
pub enum DiagnosticRecord {
    /// A compiler message that may be reportable.
    Message(Message),
    /// Anything else: artifacts, build summaries, non-objects, null messages.
    Inert,
}

/// @ai:intent Compiler message nested inside a record
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Message {
    pub level: Option<String>,
    /// Short title. Cargo names this field `message`.
    pub text: Option<String>,
    pub rendered: Option<String>,
    pub spans: Vec<Value>,
}

/// @ai:intent Source location of the primary span
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Span {
    pub file_name: String,
    pub line_start: u64,
    pub line_end: u64,
    #[serde(default)]
    pub column_start: Option<u64>,
    #[serde(default)]
    pub column_end: Option<u64>,
}

impl From<Value> for DiagnosticRecord {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(mut record) => match record.remove("message") {
                Some(Value::Object(message)) => Self::Message(Message::from_object(&message)),
                _ => Self::Inert,
            },
            _ => Self::Inert,
        }
    }
}

fn string_field(object: &Map<String, Value>, key: &str) -> Option<String> {
    object.get(key).and_then(Value::as_str).map(str::to_string)
}

impl Message {
    /// @ai:intent Read the message fields the translator needs, ignoring odd shapes
    /// @ai:effects pure
    pub fn from_object(object: &Map<String, Value>) -> Self {
        let spans = match object.get("spans") {
            Some(Value::Array(spans)) => spans.clone(),
            _ => Vec::new(),
        };

        Self {
            level: string_field(object, "level"),
            text: string_field(object, "message"),
            rendered: string_field(object, "rendered"),
            spans,
        }
    }

    /// @ai:intent Find the first span flagged as primary
    /// @ai:effects pure
    pub fn primary_span(&self) -> Option<&Value> {
        self.spans
            .iter()
            .find(|span| span.get("is_primary") == Some(&Value::Bool(true)))
    }
}

impl Span {
    /// @ai:intent Column range, only for single-line spans with both ends known
    /// @ai:effects pure
    pub fn columns(&self) -> Option<(u64, u64)> {
        if self.line_start != self.line_end {
            return None;
        }

        match (self.column_start, self.column_end) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        }
    }
}
