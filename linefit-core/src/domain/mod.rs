//! Domain layer: the line-fitting algorithms
//!
//! Everything here is pure computation over strings. Randomness is always
//! supplied by the caller.

pub mod error;
pub mod fitter;
pub mod line;
pub mod packer;
pub mod segmenter;
pub mod splitter;
pub mod text;
pub mod window;

pub use error::DomainError;
pub use fitter::LengthFitter;
pub use line::{Document, Entry, Highlight, LineRecord};
pub use packer::{LinePacker, PackEvent, PackObserver};
pub use segmenter::split_sentences;
pub use splitter::{CutTier, OverlapSplit, OverlapSplitter, SplitterSettings, StrategicCut};
pub use window::Window;
