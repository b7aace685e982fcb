//! @ai:module:intent Decode a captured JSON-lines stream into diagnostic records
//! @ai:module:layer application
//! @ai:module:public_api decode, Decoder, NumberedRecord
//! @ai:module:depends_on diagnostic, error
//! @ai:module:stateless true

use crate::diagnostic::DiagnosticRecord;
use crate::error::{Error, Result};
use serde_json::Value;
use std::slice::Split;

/// @ai:intent A decoded record tagged with its 1-based line in the stream
#[derive(Debug, Clone, PartialEq)]
pub struct NumberedRecord {
    pub line: usize,
    pub record: DiagnosticRecord,
}

/// @ai:intent Lazy single-pass decoder over a captured byte buffer
///
/// Yields one item per non-blank line. Any valid JSON value decodes; a line
/// that is not valid JSON yields `Err(Error::Decode)` and callers are expected
/// to stop there.
pub struct Decoder<'a> {
    lines: Split<'a, u8, fn(&u8) -> bool>,
    line: usize,
}

/// @ai:intent Start decoding a buffer of newline-separated JSON records
/// @ai:effects pure
pub fn decode(input: &[u8]) -> Decoder<'_> {
    Decoder::new(input)
}

fn is_newline(byte: &u8) -> bool {
    *byte == b'\n'
}

// Space, \t, \n, \r, vertical tab and form feed.
fn is_blank(line: &[u8]) -> bool {
    line.iter()
        .all(|byte| matches!(*byte, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c))
}

impl<'a> Decoder<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            lines: input.split(is_newline as fn(&u8) -> bool),
            line: 0,
        }
    }
}

impl Iterator for Decoder<'_> {
    type Item = Result<NumberedRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let raw = self.lines.next()?;
            self.line += 1;

            if is_blank(raw) {
                continue;
            }

            let line = self.line;
            return Some(
                serde_json::from_slice::<Value>(raw)
                    .map(|value| NumberedRecord {
                        line,
                        record: value.into(),
                    })
                    .map_err(|source| Error::Decode { line, source }),
            );
        }
    }
}
