//! Application layer: turns paragraph input into a finished document
//!
//! The [`BlockProcessor`] scans paragraphs into label-delimited blocks and
//! packs each one; the [`OverlapPropagator`] then runs as an independent
//! second pass over the finished document. Anomalies from both passes land in
//! a [`ProcessingReport`].

pub mod block;
pub mod labels;
pub mod propagator;
pub mod report;

pub use block::BlockProcessor;
pub use labels::LabelVocabulary;
pub use propagator::{OverlapPropagator, PropagatorSettings};
pub use report::{Anomaly, ProcessingReport};
