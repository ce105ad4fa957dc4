//! Main script processor implementation

use std::time::Instant;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::api::{Config, Error, Input, Output, ProcessingMetadata, ProcessingStats};
use crate::application::{BlockProcessor, OverlapPropagator, ProcessingReport};
use crate::domain::{Document, LengthFitter, LinePacker, LineRecord, OverlapSplitter};

/// Runs the full pipeline: block scan, packing, overlap propagation and
/// window verification.
#[derive(Debug, Clone)]
pub struct ScriptProcessor {
    blocks: BlockProcessor,
    propagator: OverlapPropagator,
    config: Config,
}

impl ScriptProcessor {
    /// Create a new processor with default configuration
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create a processor with a validated configuration
    pub fn with_config(config: Config) -> Self {
        let window = config.window;
        let packer = LinePacker::new(
            window,
            LengthFitter::new(window, config.fitter_max_passes),
            OverlapSplitter::new(window, config.splitter.clone()),
        );
        let blocks = BlockProcessor::new(config.labels.clone(), packer);
        let propagator = OverlapPropagator::new(config.propagator.clone());

        Self {
            blocks,
            propagator,
            config,
        }
    }

    /// Process input with the configured seed, or a fresh one when unset.
    pub fn process(&self, input: Input) -> Result<Output, Error> {
        let seed = self.config.seed.unwrap_or_else(rand::random);
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut output = self.process_with_rng(input, &mut rng)?;
        output.metadata.seed = seed;
        Ok(output)
    }

    /// Process input drawing every random choice from `rng`.
    ///
    /// The returned metadata reports seed `0`; use [`Self::process`] to have
    /// the seed recorded.
    pub fn process_with_rng<R: Rng + ?Sized>(
        &self,
        input: Input,
        rng: &mut R,
    ) -> Result<Output, Error> {
        let start = Instant::now();

        let paragraphs = input.into_paragraphs(self.config.strip_header_sections)?;
        let mut report = ProcessingReport::new(self.config.window);
        let mut document = self.blocks.process(&paragraphs, rng, &mut report);

        if self.config.propagate {
            self.propagate_overlap(&mut document, &mut report);
        }
        report.verify_window(&document, self.config.window);

        let stats = ProcessingStats::collect(&document, paragraphs.len(), report.blocks);
        log::info!(
            "{} paragraphs -> {} lines, {} labels ({} anomalies)",
            stats.paragraphs,
            stats.lines,
            stats.labels,
            report.anomalies.len()
        );

        Ok(Output {
            document,
            report,
            metadata: ProcessingMetadata {
                duration: start.elapsed(),
                window: self.config.window,
                seed: 0,
                stats,
            },
        })
    }

    /// Pack a single block of text into lines, without labels or propagation.
    pub fn process_block<R: Rng + ?Sized>(
        &self,
        text: &str,
        rng: &mut R,
        report: &mut ProcessingReport,
    ) -> Vec<LineRecord> {
        self.blocks.packer().process(text, rng, report)
    }

    /// Run the overlap propagation pass on `document` in place.
    ///
    /// Returns the number of highlights added.
    pub fn propagate_overlap(&self, document: &mut Document, report: &mut ProcessingReport) -> usize {
        self.propagator.propagate(document, report)
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Default for ScriptProcessor {
    fn default() -> Self {
        Self::new()
    }
}
