//! Output types for the API

use crate::application::ProcessingReport;
use crate::domain::{Document, Window};
use std::time::Duration;

/// Processing output: the document model plus what happened while building it
#[derive(Debug, Clone)]
pub struct Output {
    /// Labels and fitted lines in input order
    pub document: Document,
    /// Anomalies and counters
    pub report: ProcessingReport,
    /// Processing metadata
    pub metadata: ProcessingMetadata,
}

/// Metadata about the processing
#[derive(Debug, Clone)]
pub struct ProcessingMetadata {
    /// Total processing duration
    pub duration: Duration,
    /// Window the lines were fitted to
    pub window: Window,
    /// Seed the random source was initialised with
    pub seed: u64,
    /// Additional statistics
    pub stats: ProcessingStats,
}

/// Additional processing statistics
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessingStats {
    /// Non-blank paragraphs read
    pub paragraphs: usize,
    /// Blocks packed
    pub blocks: usize,
    /// Label entries emitted
    pub labels: usize,
    /// Line entries emitted
    pub lines: usize,
    /// Average line length in characters
    pub avg_line_length: f32,
}

impl ProcessingStats {
    pub(crate) fn collect(document: &Document, paragraphs: usize, blocks: usize) -> Self {
        let lengths: Vec<usize> = document.lines().map(|line| line.len()).collect();
        let avg_line_length = if lengths.is_empty() {
            0.0
        } else {
            lengths.iter().sum::<usize>() as f32 / lengths.len() as f32
        };

        Self {
            paragraphs,
            blocks,
            labels: document.labels().count(),
            lines: lengths.len(),
            avg_line_length,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LineRecord;

    #[test]
    fn test_stats_collect() {
        let mut document = Document::new();
        document.push_label("H1:");
        document.push_line(LineRecord::plain("abcd"));
        document.push_line(LineRecord::plain("ab"));

        let stats = ProcessingStats::collect(&document, 4, 1);
        assert_eq!(stats.labels, 1);
        assert_eq!(stats.lines, 2);
        assert_eq!(stats.paragraphs, 4);
        assert_eq!(stats.blocks, 1);
        assert!((stats.avg_line_length - 3.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_stats_on_empty_document() {
        let stats = ProcessingStats::collect(&Document::new(), 0, 0);
        assert_eq!(stats.lines, 0);
        assert_eq!(stats.avg_line_length, 0.0);
    }
}
