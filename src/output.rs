//! @ai:module:intent Write annotation lines and human-readable summaries
//! @ai:module:layer infrastructure
//! @ai:module:public_api write_annotation, format_summary
//! @ai:module:depends_on annotation, translator

use crate::annotation::AnnotationLine;
use crate::translator::Summary;
use colored::Colorize;
use std::io::{self, Write};

/// @ai:intent Write one annotation as a single workflow command line
/// @ai:effects io
pub fn write_annotation<W: Write>(out: &mut W, annotation: &AnnotationLine) -> io::Result<()> {
    writeln!(out, "{}", annotation)
}

/// @ai:intent Describe a translation pass for the error stream
/// @ai:effects pure
pub fn format_summary(summary: &Summary, emitted: bool) -> String {
    if !summary.found_any() {
        return format!("{} No diagnostics found", "OK".green().bold());
    }

    let mut output = format!(
        "Found {} diagnostic{}",
        summary.reported.to_string().yellow().bold(),
        if summary.reported == 1 { "" } else { "s" }
    );

    if summary.limit_reached {
        output.push_str(&format!(" {}", "(limit reached)".dimmed()));
    }

    if !emitted {
        output.push_str(&format!(" {}", "(annotations disabled)".dimmed()));
    }

    output
}
