//! Input abstraction for the API

use regex::Regex;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Unified input abstraction for various data sources
pub enum Input {
    /// Direct text input, one paragraph per line
    Text(String),
    /// File path input
    File(PathBuf),
    /// Raw bytes input
    Bytes(Vec<u8>),
    /// Reader input (boxed for object safety)
    Reader(Box<dyn Read + Send + Sync>),
    /// Paragraphs already extracted by a document reader
    Paragraphs(Vec<String>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f
                .debug_struct("Input::Text")
                .field("length", &text.len())
                .finish(),
            Input::File(path) => f.debug_struct("Input::File").field("path", path).finish(),
            Input::Bytes(bytes) => f
                .debug_struct("Input::Bytes")
                .field("length", &bytes.len())
                .finish(),
            Input::Reader(_) => f.debug_struct("Input::Reader").finish(),
            Input::Paragraphs(paragraphs) => f
                .debug_struct("Input::Paragraphs")
                .field("count", &paragraphs.len())
                .finish(),
        }
    }
}

impl Input {
    /// Create input from text
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Create input from file path
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        Input::File(path.as_ref().to_path_buf())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from reader
    pub fn from_reader(reader: impl Read + Send + Sync + 'static) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Create input from pre-split paragraphs
    pub fn from_paragraphs<I, S>(paragraphs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Input::Paragraphs(paragraphs.into_iter().map(Into::into).collect())
    }

    /// Convert input to bytes
    pub(crate) fn into_bytes(self) -> Result<Vec<u8>, crate::api::Error> {
        match self {
            Input::Text(text) => Ok(text.into_bytes()),
            Input::Bytes(bytes) => Ok(bytes),
            Input::Paragraphs(paragraphs) => Ok(paragraphs.join("\n").into_bytes()),
            Input::File(path) => std::fs::read(&path).map_err(|e| {
                crate::api::Error::Infrastructure(format!(
                    "Failed to read file {}: {}",
                    path.display(),
                    e
                ))
            }),
            Input::Reader(mut reader) => {
                let mut buffer = Vec::new();
                reader.read_to_end(&mut buffer).map_err(|e| {
                    crate::api::Error::Infrastructure(format!("Failed to read from reader: {}", e))
                })?;
                Ok(buffer)
            }
        }
    }

    /// Get text content from input
    pub(crate) fn into_text(self) -> Result<String, crate::api::Error> {
        let bytes = self.into_bytes()?;
        String::from_utf8(bytes).map_err(|e| {
            crate::api::Error::InvalidInput(format!("Invalid UTF-8 encoding: {}", e))
        })
    }

    /// Split input into trimmed, non-empty paragraphs.
    ///
    /// Pre-split paragraphs are kept as given apart from trimming; other
    /// sources are split on line breaks.
    pub(crate) fn into_paragraphs(
        self,
        strip_header_sections: bool,
    ) -> Result<Vec<String>, crate::api::Error> {
        let text = match self {
            Input::Paragraphs(paragraphs) if !strip_header_sections => {
                return Ok(paragraphs
                    .iter()
                    .map(|p| p.trim())
                    .filter(|p| !p.is_empty())
                    .map(str::to_string)
                    .collect());
            }
            other => other.into_text()?,
        };

        let text = if strip_header_sections {
            strip_headers(&text)
        } else {
            text
        };

        Ok(text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }
}

/// Remove every `[HEADER] ... [/HEADER]` section, case-insensitively and
/// across lines.
pub(crate) fn strip_headers(text: &str) -> String {
    static HEADER_RE: OnceLock<Regex> = OnceLock::new();
    let header_re = HEADER_RE.get_or_init(|| {
        Regex::new(r"(?is)\[HEADER\].*?\[/HEADER\]").expect("header pattern is valid")
    });
    header_re.replace_all(text, "").into_owned()
}
