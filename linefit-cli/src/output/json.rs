//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use linefit_core::{LineRecord, ProcessingReport};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - collects every entry and writes one document on finish
pub struct JsonFormatter<W: Write> {
    writer: W,
    entries: Vec<EntryData>,
}

/// One rendered entry
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum EntryData {
    /// Label line
    Label {
        /// Label text
        text: String,
    },
    /// Fitted line
    Text {
        /// Line text
        text: String,
        /// First highlighted character, `-1` without a highlight
        highlight_start: i64,
        /// End of the highlight, `-1` without a highlight
        highlight_end: i64,
        /// Length in characters
        length: usize,
    },
}

/// Counters written after the entries
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SummaryData {
    /// Lines emitted
    pub lines: usize,
    /// Labels emitted
    pub labels: usize,
    /// Fitted lines that stayed under the minimum
    pub under_length: usize,
    /// Split tails without a strategic cut
    pub missing_cut: usize,
    /// Lines the propagator could not highlight
    pub missing_overlap: usize,
    /// Lines outside the window
    pub out_of_window: usize,
}

#[derive(Serialize)]
struct JsonDocument<'a> {
    entries: &'a [EntryData],
    summary: SummaryData,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            entries: Vec::new(),
        }
    }

    fn summary(&self, report: &ProcessingReport) -> SummaryData {
        let labels = self
            .entries
            .iter()
            .filter(|e| matches!(e, EntryData::Label { .. }))
            .count();
        SummaryData {
            lines: self.entries.len() - labels,
            labels,
            under_length: report.under_length_count(),
            missing_cut: report.missing_cut_count(),
            missing_overlap: report.missing_overlap_count(),
            out_of_window: report.out_of_window().len(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_label(&mut self, label: &str) -> Result<()> {
        self.entries.push(EntryData::Label {
            text: label.to_string(),
        });
        Ok(())
    }

    fn format_line(&mut self, line: &LineRecord) -> Result<()> {
        self.entries.push(EntryData::Text {
            text: line.text().to_string(),
            highlight_start: line.highlight_start(),
            highlight_end: line.highlight_end(),
            length: line.len(),
        });
        Ok(())
    }

    fn finish(&mut self, report: &ProcessingReport) -> Result<()> {
        let document = JsonDocument {
            entries: &self.entries,
            summary: self.summary(report),
        };
        serde_json::to_writer_pretty(&mut self.writer, &document)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
