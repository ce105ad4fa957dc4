//! Voice-over line fitting for free-form script text
//!
//! This crate turns blocks of ad-copy or script text into a sequence of
//! fixed-length voice-over lines. Every line is fitted into a character
//! window (118-125 by default) so that it matches a target speaking duration.
//! Content that is repeated across adjacent lines is marked with a highlight
//! span so a renderer or editor can show it.
//!
//! # Architecture
//!
//! The crate follows a layered layout:
//! - **Domain layer**: sentence segmentation, length fitting, overlap
//!   splitting and greedy line packing
//! - **Application layer**: label-delimited block scanning, the overlap
//!   propagation pass and the anomaly report
//! - **API layer**: configuration, input handling and the [`ScriptProcessor`]
//!   facade
//!
//! # Example
//!
//! ```rust
//! use linefit_core::{Config, Input, ScriptProcessor};
//!
//! let config = Config::builder().window(20, 25).seed(7).build().unwrap();
//! let processor = ScriptProcessor::with_config(config);
//!
//! let output = processor
//!     .process(Input::from_text("H1:\nAstazi e o zi buna si calda."))
//!     .unwrap();
//!
//! assert_eq!(output.document.labels().collect::<Vec<_>>(), vec!["H1:"]);
//! for line in output.document.lines() {
//!     assert!((20..=25).contains(&line.len()));
//! }
//! ```

pub mod api;
pub mod application;
pub mod domain;

pub use api::{
    defaults, Config, ConfigBuilder, ConfigFile, Error, Input, Output, ProcessingMetadata,
    ProcessingStats, Result, ScriptProcessor,
};
pub use application::{
    Anomaly, BlockProcessor, LabelVocabulary, OverlapPropagator, ProcessingReport,
    PropagatorSettings,
};
pub use domain::{
    split_sentences, CutTier, Document, DomainError, Entry, Highlight, LengthFitter, LinePacker,
    LineRecord, OverlapSplit, OverlapSplitter, PackEvent, PackObserver, SplitterSettings,
    StrategicCut, Window,
};
