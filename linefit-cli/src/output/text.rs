//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use linefit_core::{LineRecord, ProcessingReport};
use std::io::{self, Write};

/// Plain text formatter - one entry per line, highlights between markers
pub struct TextFormatter<W: Write> {
    writer: W,
    open: String,
    close: String,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter with the default `[[`/`]]` markers
    pub fn new(writer: W) -> Self {
        Self::with_markers(writer, "[[", "]]")
    }

    /// Create a text formatter with custom highlight markers
    pub fn with_markers(writer: W, open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            writer,
            open: open.into(),
            close: close.into(),
        }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_label(&mut self, label: &str) -> Result<()> {
        writeln!(self.writer, "{label}")?;
        Ok(())
    }

    fn format_line(&mut self, line: &LineRecord) -> Result<()> {
        let (before, highlighted, after) = line.segments();
        if line.has_highlight() {
            writeln!(
                self.writer,
                "{before}{}{highlighted}{}{after} - {} chars",
                self.open,
                self.close,
                line.len()
            )?;
        } else {
            writeln!(self.writer, "{before} - {} chars", line.len())?;
        }
        Ok(())
    }

    fn finish(&mut self, _report: &ProcessingReport) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
