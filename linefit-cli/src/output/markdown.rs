//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use linefit_core::{LineRecord, ProcessingReport};
use std::io::Write;

/// Markdown formatter - bold labels, highlights in red spans
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    line_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            line_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_label(&mut self, label: &str) -> Result<()> {
        writeln!(self.writer, "**{label}**")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn format_line(&mut self, line: &LineRecord) -> Result<()> {
        self.line_count += 1;
        let (before, highlighted, after) = line.segments();
        if line.has_highlight() {
            write!(
                self.writer,
                "{before}<span style=\"color:red\">{highlighted}</span>{after}"
            )?;
        } else {
            write!(self.writer, "{before}")?;
        }
        writeln!(self.writer, " - **{} chars**", line.len())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self, report: &ProcessingReport) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Total lines: {}, outside the window: {}*",
            self.line_count,
            report.out_of_window().len()
        )?;
        self.writer.flush()?;
        Ok(())
    }
}
