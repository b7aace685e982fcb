//! @ai:module:intent Library for turning cargo JSON diagnostics into CI annotations
//! @ai:module:layer infrastructure
//! @ai:module:public_api annotation, command, config, decoder, diagnostic, output, runner, translator, error
//! @ai:module:stateless true
//!
//! # cargo-annotation
//!
//! Runs `cargo` with `--message-format=json`, picks the primary span of every
//! compiler message and prints at most ten workflow commands such as
//!
//! ```text
//! ::warning file=src/lib.rs,col=5,endColumn=6,line=10,endLine=10,title=unused variable::warning: unused variable `x`
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use cargo_annotation::{decoder, translator};
//!
//! let captured = std::fs::read("clippy.json").unwrap();
//! let mut stdout = std::io::stdout();
//! let summary = translator::translate(decoder::decode(&captured), true, &mut stdout).unwrap();
//! std::process::exit(if summary.found_any() { 0 } else { 1 });
//! ```

pub mod annotation;
pub mod command;
pub mod config;
pub mod decoder;
pub mod diagnostic;
pub mod error;
pub mod output;
pub mod runner;
pub mod translator;

pub use annotation::{normalize_path, AnnotationLine, Severity};
pub use command::{CapturedOutput, CargoCommand, JSON_FLAG};
pub use config::{parse_flag, split_args, Config};
pub use decoder::{decode, Decoder, NumberedRecord};
pub use diagnostic::{DiagnosticRecord, Message, Span};
pub use error::{Error, Result};
pub use output::{format_summary, write_annotation};
pub use runner::run;
pub use translator::{annotations, translate, Annotations, Summary, ANNOTATION_LIMIT};
