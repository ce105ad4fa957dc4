//! Per-run anomaly report
//!
//! Nothing in here aborts processing. Conditions are collected so the caller
//! can decide what to surface.

use crate::domain::{Document, PackEvent, PackObserver, Window};
use serde::Serialize;

/// A per-line condition worth surfacing to the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Anomaly {
    /// The fitter ran out of words before reaching the window minimum
    UnderLengthUnresolved {
        /// Emitted text
        text: String,
        /// Length reached
        length: usize,
        /// Window minimum that was missed
        minimum: usize,
    },
    /// A split tail got no highlight because no cut rule qualified
    NoStrategicCut {
        /// Tail text
        text: String,
    },
    /// The propagator could not mark overlap on a line
    NoOverlapMatch {
        /// Entry index of the unmodified line
        line_index: usize,
        /// Its text
        text: String,
    },
    /// An emitted line is outside the window
    OutOfWindow {
        /// Entry index of the line
        line_index: usize,
        /// Its length
        length: usize,
    },
}

/// Counters and anomalies collected over one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProcessingReport {
    /// Collected anomalies in the order they occurred
    pub anomalies: Vec<Anomaly>,
    /// Blocks handed to the packer
    pub blocks: usize,
    /// Short lines stretched by the fitter
    pub fitted_lines: usize,
    /// Long sentences split into head and tail
    pub split_sentences: usize,
    /// Highlights added by the overlap propagator
    pub propagated_highlights: usize,
    #[serde(skip)]
    minimum: usize,
}

impl ProcessingReport {
    /// Empty report for a run over `window`
    pub fn new(window: Window) -> Self {
        Self {
            minimum: window.min(),
            ..Self::default()
        }
    }

    /// Record an anomaly
    pub fn push(&mut self, anomaly: Anomaly) {
        self.anomalies.push(anomaly);
    }

    /// Lines the fitter could not bring up to the minimum
    pub fn under_length_count(&self) -> usize {
        self.count(|a| matches!(a, Anomaly::UnderLengthUnresolved { .. }))
    }

    /// Split tails without a strategic cut
    pub fn missing_cut_count(&self) -> usize {
        self.count(|a| matches!(a, Anomaly::NoStrategicCut { .. }))
    }

    /// Line pairs where the propagator found no overlap
    pub fn missing_overlap_count(&self) -> usize {
        self.count(|a| matches!(a, Anomaly::NoOverlapMatch { .. }))
    }

    /// `(entry index, length)` of every line outside the window
    pub fn out_of_window(&self) -> Vec<(usize, usize)> {
        self.anomalies
            .iter()
            .filter_map(|a| match a {
                Anomaly::OutOfWindow { line_index, length } => Some((*line_index, *length)),
                _ => None,
            })
            .collect()
    }

    /// Whether every emitted line respects the window
    pub fn is_clean(&self) -> bool {
        !self
            .anomalies
            .iter()
            .any(|a| matches!(a, Anomaly::UnderLengthUnresolved { .. } | Anomaly::OutOfWindow { .. }))
    }

    /// Record every line of `document` that falls outside `window`
    pub fn verify_window(&mut self, document: &Document, window: Window) {
        for (line_index, entry) in document.entries().iter().enumerate() {
            if let Some(line) = entry.as_line() {
                if !window.contains(line.len()) {
                    self.push(Anomaly::OutOfWindow {
                        line_index,
                        length: line.len(),
                    });
                }
            }
        }
    }

    /// Fold another report into this one
    pub fn merge(&mut self, other: ProcessingReport) {
        self.anomalies.extend(other.anomalies);
        self.blocks += other.blocks;
        self.fitted_lines += other.fitted_lines;
        self.split_sentences += other.split_sentences;
        self.propagated_highlights += other.propagated_highlights;
    }

    fn count(&self, pred: impl Fn(&Anomaly) -> bool) -> usize {
        self.anomalies.iter().filter(|a| pred(a)).count()
    }
}

impl PackObserver for ProcessingReport {
    fn on_event(&mut self, event: PackEvent) {
        match event {
            PackEvent::Fitted { .. } => self.fitted_lines += 1,
            PackEvent::UnderLength { text, length } => {
                self.fitted_lines += 1;
                self.push(Anomaly::UnderLengthUnresolved {
                    text,
                    length,
                    minimum: self.minimum,
                });
            }
            PackEvent::Split => self.split_sentences += 1,
            PackEvent::NoStrategicCut { text } => self.push(Anomaly::NoStrategicCut { text }),
        }
    }
}
