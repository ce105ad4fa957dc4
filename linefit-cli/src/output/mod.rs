//! Output formatting module

use anyhow::Result;
use linefit_core::{LineRecord, ProcessingReport};

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Output a label entry
    fn format_label(&mut self, label: &str) -> Result<()>;

    /// Output a fitted line
    fn format_line(&mut self, line: &LineRecord) -> Result<()>;

    /// Finalize output with the combined report of every processed input
    fn finish(&mut self, report: &ProcessingReport) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
