//! Configuration API for line fitting

use crate::api::Error;
use crate::application::{LabelVocabulary, PropagatorSettings};
use crate::domain::{SplitterSettings, Window};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default configuration constants
pub mod defaults {
    /// Default window minimum in characters
    pub const MIN_CHARS: usize = 118;

    /// Default window maximum in characters
    pub const MAX_CHARS: usize = 125;

    /// Characters that must follow a strategic cut in a split tail
    pub const MIN_REMAINDER: usize = 50;

    /// Unhighlighted characters a propagated highlight must leave in front
    pub const MIN_NORMAL_PREFIX: usize = 40;

    /// Position of the fallback cut as a share of the tail length
    pub const FALLBACK_FRACTION: f64 = 0.30;

    /// Passes the fitter makes over a line's words
    pub const FITTER_MAX_PASSES: usize = 10;

    /// Characters of plain text used to find overlap in the previous line
    pub const OVERLAP_KEY_LEN: usize = 5;

    /// Word-final punctuation that marks a cut point
    pub const CUT_PUNCTUATION: &[char] = &[':', ','];

    /// Connectives that may open a new idea
    pub const CONNECTIVES: &[&str] = &["dar", "și", "iar", "pentru", "astfel", "când", "dacă"];

    /// Break markers tried, in order, when a propagated highlight starts too early
    pub const NATURAL_BREAKS: &[&str] = &[
        ". ",
        "! ",
        "? ",
        ": ",
        ", ",
        " și ",
        " dar ",
        " pentru că ",
        " când ",
        " dacă ",
    ];

    /// Section labels of the standard ad script layout
    pub const LABELS: &[&str] = &[
        "HOOKS:",
        "H1:",
        "H2:",
        "H3:",
        "H4:",
        "H5:",
        "H6:",
        "H7:",
        "H8:",
        "H9:",
        "MIRROR1",
        "DCS & IDENTITY1",
        "TRANZITIE1",
        "NEW CAUSE1",
        "MECHANISM1",
        "EMOTIONAL PROOF1",
        "TRANSFORMATION1",
        "CTA1",
    ];
}

/// Processing configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub(crate) window: Window,
    pub(crate) labels: LabelVocabulary,
    pub(crate) splitter: SplitterSettings,
    pub(crate) fitter_max_passes: usize,
    pub(crate) propagator: PropagatorSettings,
    pub(crate) propagate: bool,
    pub(crate) strip_header_sections: bool,
    pub(crate) seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window: Window::new_unchecked(defaults::MIN_CHARS, defaults::MAX_CHARS),
            labels: LabelVocabulary::from_names(defaults::LABELS.iter().copied()),
            splitter: SplitterSettings {
                connectives: to_strings(defaults::CONNECTIVES),
                cut_punctuation: defaults::CUT_PUNCTUATION.to_vec(),
                min_remainder: defaults::MIN_REMAINDER,
                fallback_fraction: defaults::FALLBACK_FRACTION,
            },
            fitter_max_passes: defaults::FITTER_MAX_PASSES,
            propagator: PropagatorSettings {
                natural_breaks: to_strings(defaults::NATURAL_BREAKS),
                min_prefix: defaults::MIN_NORMAL_PREFIX,
                key_length: defaults::OVERLAP_KEY_LEN,
            },
            propagate: true,
            strip_header_sections: false,
            seed: None,
        }
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Parse a TOML configuration document
    pub fn from_toml_str(content: &str) -> Result<Self, Error> {
        let file: ConfigFile = toml::from_str(content)?;
        file.into_builder().build()
    }

    /// Load a TOML configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Infrastructure(format!("Failed to read config {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Target window
    pub fn window(&self) -> Window {
        self.window
    }

    /// Label vocabulary
    pub fn labels(&self) -> &LabelVocabulary {
        &self.labels
    }

    /// Strategic-cut settings
    pub fn splitter(&self) -> &SplitterSettings {
        &self.splitter
    }

    /// Fitter pass limit
    pub fn fitter_max_passes(&self) -> usize {
        self.fitter_max_passes
    }

    /// Overlap propagation settings
    pub fn propagator(&self) -> &PropagatorSettings {
        &self.propagator
    }

    /// Whether the propagation pass runs
    pub fn propagate(&self) -> bool {
        self.propagate
    }

    /// Whether `[HEADER]` sections are removed from text input
    pub fn strip_header_sections(&self) -> bool {
        self.strip_header_sections
    }

    /// Fixed random seed, if any
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Fluent builder for configuration
#[derive(Debug, Default, Clone)]
pub struct ConfigBuilder {
    min_chars: Option<usize>,
    max_chars: Option<usize>,
    labels: Option<Vec<String>>,
    label_patterns: Option<Vec<String>>,
    unlabeled: bool,
    connectives: Option<Vec<String>>,
    cut_punctuation: Option<Vec<char>>,
    min_remainder: Option<usize>,
    fallback_fraction: Option<f64>,
    fitter_max_passes: Option<usize>,
    natural_breaks: Option<Vec<String>>,
    min_prefix: Option<usize>,
    key_length: Option<usize>,
    propagate: Option<bool>,
    strip_header_sections: Option<bool>,
    seed: Option<u64>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set both window bounds
    pub fn window(mut self, min: usize, max: usize) -> Self {
        self.min_chars = Some(min);
        self.max_chars = Some(max);
        self
    }

    /// Set the window minimum
    pub fn min_chars(mut self, min: usize) -> Self {
        self.min_chars = Some(min);
        self
    }

    /// Set the window maximum
    pub fn max_chars(mut self, max: usize) -> Self {
        self.max_chars = Some(max);
        self
    }

    /// Replace the label names (prefix matched)
    pub fn labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    /// Add regex label patterns matched against whole lines
    pub fn label_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.label_patterns = Some(patterns.into_iter().map(Into::into).collect());
        self
    }

    /// Treat the whole input as a single unlabeled block
    pub fn without_labels(mut self) -> Self {
        self.unlabeled = true;
        self
    }

    /// Replace the connective word list
    pub fn connectives<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.connectives = Some(words.into_iter().map(Into::into).collect());
        self
    }

    /// Replace the cut punctuation characters
    pub fn cut_punctuation(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.cut_punctuation = Some(chars.into_iter().collect());
        self
    }

    /// Characters that must follow a strategic cut
    pub fn min_remainder(mut self, chars: usize) -> Self {
        self.min_remainder = Some(chars);
        self
    }

    /// Fallback cut position as a share of the tail
    pub fn fallback_fraction(mut self, fraction: f64) -> Self {
        self.fallback_fraction = Some(fraction);
        self
    }

    /// Fitter pass limit
    pub fn fitter_max_passes(mut self, passes: usize) -> Self {
        self.fitter_max_passes = Some(passes);
        self
    }

    /// Replace the natural break markers
    pub fn natural_breaks<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.natural_breaks = Some(markers.into_iter().map(Into::into).collect());
        self
    }

    /// Minimum unhighlighted prefix kept by the propagator
    pub fn min_prefix(mut self, chars: usize) -> Self {
        self.min_prefix = Some(chars);
        self
    }

    /// Length of the overlap search key
    pub fn key_length(mut self, chars: usize) -> Self {
        self.key_length = Some(chars);
        self
    }

    /// Enable or disable the propagation pass
    pub fn propagate(mut self, enabled: bool) -> Self {
        self.propagate = Some(enabled);
        self
    }

    /// Remove `[HEADER] ... [/HEADER]` sections from text input
    pub fn strip_header_sections(mut self, enabled: bool) -> Self {
        self.strip_header_sections = Some(enabled);
        self
    }

    /// Fix the random seed for reproducible output
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<Config, Error> {
        let mut config = Config::default();

        let min = self.min_chars.unwrap_or(defaults::MIN_CHARS);
        let max = self.max_chars.unwrap_or(defaults::MAX_CHARS);
        config.window = Window::new(min, max)?;

        if self.unlabeled {
            config.labels = LabelVocabulary::empty();
        } else if self.labels.is_some() || self.label_patterns.is_some() {
            let names = self
                .labels
                .unwrap_or_else(|| config.labels.names().to_vec());
            let patterns = self
                .label_patterns
                .unwrap_or_default()
                .iter()
                .map(|p| Regex::new(p))
                .collect::<Result<Vec<_>, _>>()?;
            let vocabulary = LabelVocabulary::new(names, patterns);
            if vocabulary.is_empty() {
                return Err(Error::Configuration(
                    "label vocabulary must not be empty".into(),
                ));
            }
            config.labels = vocabulary;
        }

        if let Some(words) = self.connectives {
            config.splitter.connectives = words.iter().map(|w| w.to_lowercase()).collect();
        }
        if let Some(chars) = self.cut_punctuation {
            config.splitter.cut_punctuation = chars;
        }
        if let Some(chars) = self.min_remainder {
            config.splitter.min_remainder = chars;
        }
        if let Some(fraction) = self.fallback_fraction {
            if !(fraction > 0.0 && fraction <= 1.0) {
                return Err(Error::Configuration(format!(
                    "fallback_fraction must be in (0, 1], got {fraction}"
                )));
            }
            config.splitter.fallback_fraction = fraction;
        }

        if let Some(passes) = self.fitter_max_passes {
            if passes == 0 {
                return Err(Error::Configuration(
                    "fitter max_passes must be greater than 0".into(),
                ));
            }
            config.fitter_max_passes = passes;
        }

        if let Some(markers) = self.natural_breaks {
            config.propagator.natural_breaks = markers;
        }
        if let Some(chars) = self.min_prefix {
            config.propagator.min_prefix = chars;
        }
        if let Some(chars) = self.key_length {
            if chars == 0 {
                return Err(Error::Configuration(
                    "key_length must be greater than 0".into(),
                ));
            }
            config.propagator.key_length = chars;
        }
        if let Some(enabled) = self.propagate {
            config.propagate = enabled;
        }
        if let Some(enabled) = self.strip_header_sections {
            config.strip_header_sections = enabled;
        }
        config.seed = self.seed;

        warn_on_threshold_mismatch(&config);
        Ok(config)
    }
}

/// The thresholds are tuned for the default window and do not scale with it.
fn warn_on_threshold_mismatch(config: &Config) {
    let min = config.window.min();
    if config.splitter.min_remainder >= min {
        log::warn!(
            "min_remainder {} is not below the window minimum {}; split tails will never be highlighted",
            config.splitter.min_remainder,
            min
        );
    }
    if config.propagator.min_prefix >= min {
        log::warn!(
            "min_prefix {} is not below the window minimum {}; overlap will rarely propagate",
            config.propagator.min_prefix,
            min
        );
    }
}

/// On-disk TOML configuration. Every section and key is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Fixed random seed
    #[serde(default)]
    pub seed: Option<u64>,
    /// Window bounds
    #[serde(default)]
    pub window: WindowSection,
    /// Label vocabulary
    #[serde(default)]
    pub labels: LabelsSection,
    /// Strategic cut tuning
    #[serde(default)]
    pub splitter: SplitterSection,
    /// Fitter tuning
    #[serde(default)]
    pub fitter: FitterSection,
    /// Propagation tuning
    #[serde(default)]
    pub propagator: PropagatorSection,
    /// Input preprocessing
    #[serde(default)]
    pub input: InputSection,
}

/// `[window]`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WindowSection {
    pub min: Option<usize>,
    pub max: Option<usize>,
}

/// `[labels]`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LabelsSection {
    pub names: Option<Vec<String>>,
    pub patterns: Option<Vec<String>>,
    /// Disable labels entirely
    #[serde(default)]
    pub disabled: bool,
}

/// `[splitter]`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SplitterSection {
    pub connectives: Option<Vec<String>>,
    pub cut_punctuation: Option<Vec<char>>,
    pub min_remainder: Option<usize>,
    pub fallback_fraction: Option<f64>,
}

/// `[fitter]`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FitterSection {
    pub max_passes: Option<usize>,
}

/// `[propagator]`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PropagatorSection {
    pub enabled: Option<bool>,
    pub natural_breaks: Option<Vec<String>>,
    pub min_prefix: Option<usize>,
    pub key_length: Option<usize>,
}

/// `[input]`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputSection {
    pub strip_header_sections: Option<bool>,
}

impl ConfigFile {
    /// Turn the file into a builder so callers can layer overrides on top
    pub fn into_builder(self) -> ConfigBuilder {
        ConfigBuilder {
            min_chars: self.window.min,
            max_chars: self.window.max,
            labels: self.labels.names,
            label_patterns: self.labels.patterns,
            unlabeled: self.labels.disabled,
            connectives: self.splitter.connectives,
            cut_punctuation: self.splitter.cut_punctuation,
            min_remainder: self.splitter.min_remainder,
            fallback_fraction: self.splitter.fallback_fraction,
            fitter_max_passes: self.fitter.max_passes,
            natural_breaks: self.propagator.natural_breaks,
            min_prefix: self.propagator.min_prefix,
            key_length: self.propagator.key_length,
            propagate: self.propagator.enabled,
            strip_header_sections: self.input.strip_header_sections,
            seed: self.seed,
        }
    }

    /// Parse a TOML document without validating it
    pub fn from_toml_str(content: &str) -> Result<Self, Error> {
        Ok(toml::from_str(content)?)
    }
}
