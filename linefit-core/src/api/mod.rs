//! Public API for linefit-core
//!
//! This module wraps the domain and application layers behind a small
//! surface: build a [`Config`], hand an [`Input`] to a [`ScriptProcessor`],
//! and read the [`Output`].

pub(crate) mod config;
mod error;
mod input;
mod output;
mod processor;

#[cfg(test)]
mod tests;

pub use config::{
    defaults, Config, ConfigBuilder, ConfigFile, FitterSection, InputSection, LabelsSection,
    PropagatorSection, SplitterSection, WindowSection,
};
pub use error::{Error, Result};
pub use input::Input;
pub use output::{Output, ProcessingMetadata, ProcessingStats};
pub use processor::ScriptProcessor;
