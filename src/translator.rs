//! @ai:module:intent Translate decoded diagnostics into a bounded list of annotations
//! @ai:module:layer application
//! @ai:module:public_api annotations, translate, Annotations, Summary, ANNOTATION_LIMIT
//! @ai:module:depends_on decoder, diagnostic, annotation, output, error
//! @ai:module:stateless true

use crate::annotation::{normalize_path, AnnotationLine, Severity};
use crate::decoder::NumberedRecord;
use crate::diagnostic::{DiagnosticRecord, Span};
use crate::error::{Error, Result};
use crate::output;
use serde::Deserialize;
use std::io::Write;

/// Maximum number of annotations produced per run.
pub const ANNOTATION_LIMIT: usize = 10;

/// @ai:intent Outcome of a translation pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub reported: usize,
    pub limit_reached: bool,
}

impl Summary {
    /// @ai:intent Whether at least one diagnostic survived filtering
    pub fn found_any(&self) -> bool {
        self.reported > 0
    }
}

/// @ai:intent Lazy iterator of annotations over decoded records
///
/// Stops pulling from the underlying records as soon as the limit is hit,
/// and after the first error.
pub struct Annotations<I> {
    records: I,
    limit: usize,
    reported: usize,
    failed: bool,
}

/// @ai:intent Wrap a record stream in a limited annotation iterator
/// @ai:effects pure
pub fn annotations<I>(records: I) -> Annotations<I::IntoIter>
where
    I: IntoIterator<Item = Result<NumberedRecord>>,
{
    Annotations {
        records: records.into_iter(),
        limit: ANNOTATION_LIMIT,
        reported: 0,
        failed: false,
    }
}

impl<I> Annotations<I> {
    /// Annotations yielded so far.
    pub fn reported(&self) -> usize {
        self.reported
    }

    pub fn limit_reached(&self) -> bool {
        self.reported >= self.limit
    }

    pub fn summary(&self) -> Summary {
        Summary {
            reported: self.reported,
            limit_reached: self.limit_reached(),
        }
    }
}

impl<I> Iterator for Annotations<I>
where
    I: Iterator<Item = Result<NumberedRecord>>,
{
    type Item = Result<AnnotationLine>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.failed && !self.limit_reached() {
            let NumberedRecord { line, record } = match self.records.next()? {
                Ok(numbered) => numbered,
                Err(e) => {
                    self.failed = true;
                    return Some(Err(e));
                }
            };

            match translate_record(line, record) {
                Ok(Some(annotation)) => {
                    self.reported += 1;
                    return Some(Ok(annotation));
                }
                Ok(None) => continue,
                Err(e) => {
                    self.failed = true;
                    return Some(Err(e));
                }
            }
        }

        None
    }
}

/// @ai:intent Run a full translation pass, writing lines only when `emit` is set
/// @ai:effects io
/// @ai:post counting is identical whether or not lines are emitted
/// @ai:post nothing is written to `out` when the pass fails
pub fn translate<I, W>(records: I, emit: bool, out: &mut W) -> Result<Summary>
where
    I: IntoIterator<Item = Result<NumberedRecord>>,
    W: Write,
{
    let mut annotations = annotations(records);
    let lines = annotations.by_ref().collect::<Result<Vec<_>>>()?;

    if emit {
        for annotation in &lines {
            output::write_annotation(out, annotation)?;
        }
    }

    let summary = annotations.summary();

    if summary.limit_reached {
        tracing::info!(
            "Annotation limit of {} reached, remaining diagnostics ignored",
            ANNOTATION_LIMIT
        );
    }

    Ok(summary)
}

/// @ai:intent Turn one record into an annotation, or None if it is not reportable
/// @ai:effects pure
fn translate_record(line: usize, record: DiagnosticRecord) -> Result<Option<AnnotationLine>> {
    let DiagnosticRecord::Message(message) = record else {
        tracing::debug!("Line {}: no message, skipping", line);
        return Ok(None);
    };

    let Some(primary) = message.primary_span() else {
        tracing::debug!("Line {}: no primary span, skipping", line);
        return Ok(None);
    };

    // Only the chosen span has to carry a file and a line range.
    let span = Span::deserialize(primary)
        .map_err(|source| Error::InvalidPrimarySpan { line, source })?;

    Ok(Some(AnnotationLine {
        severity: Severity::from_level(message.level.as_deref()),
        file: normalize_path(&span.file_name).to_string(),
        line_start: span.line_start,
        line_end: span.line_end,
        columns: span.columns(),
        title: message.text.unwrap_or_default(),
        body: message.rendered.unwrap_or_default(),
    }))
}
