//! Line records and the document model

use super::text::{byte_offset, char_len};
use serde::{Deserialize, Serialize};

/// Character span `[start, end)` inside a line's text marking overlap or
/// filler content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    /// First highlighted character
    pub start: usize,
    /// One past the last highlighted character
    pub end: usize,
}

/// One emitted voice-over line.
///
/// The length is derived from the text on every call and can never go stale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRecord {
    text: String,
    highlight: Option<Highlight>,
}

impl LineRecord {
    /// A line with no highlight
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            highlight: None,
        }
    }

    /// A line highlighted over characters `[start, end)`.
    ///
    /// The span is clamped so that `start <= end <= len`.
    pub fn highlighted(text: impl Into<String>, start: usize, end: usize) -> Self {
        let mut line = Self::plain(text);
        line.set_highlight(start, end);
        line
    }

    /// Line text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        char_len(&self.text)
    }

    /// Whether the text is empty
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Highlight span, if any
    pub fn highlight(&self) -> Option<Highlight> {
        self.highlight
    }

    /// Whether a highlight is present
    pub fn has_highlight(&self) -> bool {
        self.highlight.is_some()
    }

    /// Highlight start offset, `-1` when absent (renderer convention)
    pub fn highlight_start(&self) -> i64 {
        self.highlight.map_or(-1, |h| h.start as i64)
    }

    /// Highlight end offset, `-1` when absent (renderer convention)
    pub fn highlight_end(&self) -> i64 {
        self.highlight.map_or(-1, |h| h.end as i64)
    }

    /// Set a highlight span. Only ever called on lines without one outside
    /// of construction.
    pub(crate) fn set_highlight(&mut self, start: usize, end: usize) {
        let len = self.len();
        let end = end.min(len);
        let start = start.min(end);
        self.highlight = Some(Highlight { start, end });
    }

    /// Split the text into `(before, highlighted, after)` slices.
    ///
    /// Without a highlight the whole text is returned as `before`.
    pub fn segments(&self) -> (&str, &str, &str) {
        match self.highlight {
            None => (self.text.as_str(), "", ""),
            Some(Highlight { start, end }) => {
                let from = byte_offset(&self.text, start);
                let to = byte_offset(&self.text, end);
                (&self.text[..from], &self.text[from..to], &self.text[to..])
            }
        }
    }

    /// Text after the highlighted span, or `None` when there is no highlight.
    pub fn after_highlight(&self) -> Option<&str> {
        self.highlight.map(|_| self.segments().2)
    }
}

/// An entry of the document model: a pass-through label or an emitted line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Entry {
    /// Label line, emitted verbatim
    Label { text: String },
    /// Fitted line
    Text(LineRecord),
}

impl Entry {
    /// The line record, if this entry is one
    pub fn as_line(&self) -> Option<&LineRecord> {
        match self {
            Entry::Text(line) => Some(line),
            Entry::Label { .. } => None,
        }
    }

    /// Mutable access to the line record, if this entry is one
    pub fn as_line_mut(&mut self) -> Option<&mut LineRecord> {
        match self {
            Entry::Text(line) => Some(line),
            Entry::Label { .. } => None,
        }
    }

    /// Whether this entry is a label
    pub fn is_label(&self) -> bool {
        matches!(self, Entry::Label { .. })
    }
}

/// Ordered sequence of labels and lines produced for one input.
///
/// Stored as an indexed arena so later passes can mutate lines in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    entries: Vec<Entry>,
}

impl Document {
    /// Empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a label
    pub fn push_label(&mut self, text: impl Into<String>) {
        self.entries.push(Entry::Label { text: text.into() });
    }

    /// Append a line
    pub fn push_line(&mut self, line: LineRecord) {
        self.entries.push(Entry::Text(line));
    }

    /// Append several lines
    pub fn extend_lines(&mut self, lines: impl IntoIterator<Item = LineRecord>) {
        self.entries.extend(lines.into_iter().map(Entry::Text));
    }

    /// All entries in order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Mutable entries for in-place passes
    pub fn entries_mut(&mut self) -> &mut [Entry] {
        &mut self.entries
    }

    /// Iterator over the line records only
    pub fn lines(&self) -> impl Iterator<Item = &LineRecord> {
        self.entries.iter().filter_map(Entry::as_line)
    }

    /// Iterator over label texts only
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().filter_map(|entry| match entry {
            Entry::Label { text } => Some(text.as_str()),
            Entry::Text(_) => None,
        })
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the document has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume the document, returning its entries
    pub fn into_entries(self) -> Vec<Entry> {
        self.entries
    }
}

impl From<Vec<Entry>> for Document {
    fn from(entries: Vec<Entry>) -> Self {
        Self { entries }
    }
}
