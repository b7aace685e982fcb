//! @ai:module:intent Define workflow annotation lines and the severity table
//! @ai:module:layer domain
//! @ai:module:public_api Severity, AnnotationLine, normalize_path
//! @ai:module:stateless true

use std::fmt;

/// @ai:intent Severity understood by the CI host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Notice,
    Warning,
    Error,
}

impl Severity {
    /// @ai:intent Map a compiler level onto the three annotation severities
    /// @ai:effects pure
    /// @ai:edge_cases unknown or missing levels map to Error
    pub fn from_level(level: Option<&str>) -> Self {
        match level {
            Some("help") | Some("note") => Self::Notice,
            Some("warning") => Self::Warning,
            Some("error") => Self::Error,
            _ => Self::Error,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Notice => "notice",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// @ai:intent One formatted workflow command pointing at a source range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationLine {
    pub severity: Severity,
    pub file: String,
    pub line_start: u64,
    pub line_end: u64,
    /// Present only for single-line spans.
    pub columns: Option<(u64, u64)>,
    pub title: String,
    pub body: String,
}

/// @ai:intent Strip a single leading `./` from a path
/// @ai:effects pure
pub fn normalize_path(path: &str) -> &str {
    path.strip_prefix("./").unwrap_or(path)
}

// Values are written verbatim: titles may contain commas and bodies may span
// several lines.
impl fmt::Display for AnnotationLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "::{} file={},", self.severity, self.file)?;

        if let Some((start, end)) = self.columns {
            write!(f, "col={},endColumn={},", start, end)?;
        }

        write!(
            f,
            "line={},endLine={},title={}::{}",
            self.line_start, self.line_end, self.title, self.body
        )
    }
}
