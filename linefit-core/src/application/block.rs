//! Block scanning: splits paragraph input on labels and packs each block

use super::labels::LabelVocabulary;
use super::report::ProcessingReport;
use crate::domain::{Document, LinePacker};
use rand::Rng;

/// Builds the document model from an ordered list of paragraphs.
#[derive(Debug, Clone)]
pub struct BlockProcessor {
    vocabulary: LabelVocabulary,
    packer: LinePacker,
}

impl BlockProcessor {
    /// Create a processor over `vocabulary` using `packer` for each block
    pub fn new(vocabulary: LabelVocabulary, packer: LinePacker) -> Self {
        Self { vocabulary, packer }
    }

    /// The label vocabulary in use
    pub fn vocabulary(&self) -> &LabelVocabulary {
        &self.vocabulary
    }

    /// The packer in use
    pub fn packer(&self) -> &LinePacker {
        &self.packer
    }

    /// Scan `paragraphs` in order.
    ///
    /// Label paragraphs are emitted verbatim and close the running block;
    /// every other non-blank paragraph is joined into the block with a single
    /// space. The last block is flushed at the end of input.
    pub fn process<I, S, R>(
        &self,
        paragraphs: I,
        rng: &mut R,
        report: &mut ProcessingReport,
    ) -> Document
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        let mut document = Document::new();
        let mut block: Vec<String> = Vec::new();

        for paragraph in paragraphs {
            let line = paragraph.as_ref().trim();
            if line.is_empty() {
                continue;
            }

            if self.vocabulary.is_label(line) {
                self.flush(&mut block, &mut document, rng, report);
                log::debug!("label {line:?}");
                document.push_label(line);
            } else {
                block.push(line.to_string());
            }
        }
        self.flush(&mut block, &mut document, rng, report);

        document
    }

    fn flush<R: Rng + ?Sized>(
        &self,
        block: &mut Vec<String>,
        document: &mut Document,
        rng: &mut R,
        report: &mut ProcessingReport,
    ) {
        if block.is_empty() {
            return;
        }

        let text = block.join(" ");
        block.clear();

        report.blocks += 1;
        let lines = self.packer.process(&text, rng, report);
        log::debug!(
            "block {} ({} chars) packed into {} lines",
            report.blocks,
            text.chars().count(),
            lines.len()
        );
        document.extend_lines(lines);
    }
}
