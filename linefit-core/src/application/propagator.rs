//! Backward overlap propagation between adjacent lines
//!
//! When a line's successor opens with highlighted overlap, the same content
//! usually closes the line itself. This pass finds where the successor's
//! first plain words appear in the line and highlights from there to the end.

use super::report::{Anomaly, ProcessingReport};
use crate::domain::text::{char_len, char_prefix, find_char_index, rfind_char_index_before};
use crate::domain::{Document, LineRecord};

/// Tunables for the propagation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropagatorSettings {
    /// Break markers tried in order when the match starts too early
    pub natural_breaks: Vec<String>,
    /// Minimum unhighlighted prefix a line must keep
    pub min_prefix: usize,
    /// Characters of the successor's plain text used as the search key
    pub key_length: usize,
}

/// Second pass over a finished document.
#[derive(Debug, Clone)]
pub struct OverlapPropagator {
    settings: PropagatorSettings,
}

impl OverlapPropagator {
    /// Create a propagator
    pub fn new(settings: PropagatorSettings) -> Self {
        Self { settings }
    }

    /// Walk adjacent line pairs and back-propagate highlights.
    ///
    /// Labels break adjacency. A pair of lines is always consumed as a unit.
    /// Lines that already carry a highlight are never touched, so running the
    /// pass again changes nothing. Returns the number of highlights added.
    pub fn propagate(&self, document: &mut Document, report: &mut ProcessingReport) -> usize {
        let entries = document.entries_mut();
        let mut added = 0;
        let mut i = 0;

        while i + 1 < entries.len() {
            let (left, right) = entries.split_at_mut(i + 1);
            let (Some(current), Some(next)) = (left[i].as_line_mut(), right[0].as_line()) else {
                i += 1;
                continue;
            };

            if !current.has_highlight() && next.has_highlight() {
                match self.overlap_start(current.text(), next) {
                    Some(start) => {
                        log::debug!("highlighting line {i} from char {start}");
                        let end = current.len();
                        current.set_highlight(start, end);
                        added += 1;
                    }
                    None => {
                        log::debug!("no overlap found for line {i}");
                        report.push(Anomaly::NoOverlapMatch {
                            line_index: i,
                            text: current.text().to_string(),
                        });
                    }
                }
            }
            i += 2;
        }

        report.propagated_highlights += added;
        added
    }

    /// Where the highlight on `text` should start, given its successor.
    pub fn overlap_start(&self, text: &str, next: &LineRecord) -> Option<usize> {
        let settings = &self.settings;
        let plain = next.after_highlight()?.trim_start();
        if settings.key_length == 0 || char_len(plain) < settings.key_length {
            return None;
        }

        let key = char_prefix(plain, settings.key_length);
        let mut start = find_char_index(text, key)?;

        if start < settings.min_prefix {
            for marker in &settings.natural_breaks {
                if let Some(pos) = rfind_char_index_before(text, marker, start) {
                    let end = pos + char_len(marker);
                    if end >= settings.min_prefix {
                        start = end;
                        break;
                    }
                }
            }
        }

        (start >= settings.min_prefix && start < char_len(text)).then_some(start)
    }
}
