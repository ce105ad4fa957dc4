//! Label vocabulary recognition

use regex::Regex;

/// Set of label markers that delimit blocks.
///
/// A line is a label when it starts with one of the names (exact matches
/// included) or when one of the patterns matches it.
#[derive(Debug, Clone, Default)]
pub struct LabelVocabulary {
    names: Vec<String>,
    patterns: Vec<Regex>,
}

impl LabelVocabulary {
    /// Vocabulary from prefix names and compiled patterns
    pub fn new(names: Vec<String>, patterns: Vec<Regex>) -> Self {
        Self { names, patterns }
    }

    /// Vocabulary from prefix names only
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(names.into_iter().map(Into::into).collect(), Vec::new())
    }

    /// A vocabulary that recognizes nothing; all input forms a single block
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether `line` (already trimmed) is a label
    pub fn is_label(&self, line: &str) -> bool {
        self.names
            .iter()
            .any(|name| !name.is_empty() && line.starts_with(name.as_str()))
            || self.patterns.iter().any(|re| re.is_match(line))
    }

    /// Prefix names in configured order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Pattern sources in configured order
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(Regex::as_str)
    }

    /// Whether neither names nor patterns are configured
    pub fn is_empty(&self) -> bool {
        self.names.is_empty() && self.patterns.is_empty()
    }
}
