//! Overlap splitting for single sentences longer than the window
//!
//! A long sentence becomes two speakable lines: a head cut from its start and
//! a tail cut from its end. The two overlap in the middle, and the leading
//! part of the tail (up to a strategic cut point) is highlighted as the
//! portion already covered by the head.

use super::line::LineRecord;
use super::text::{char_len, char_prefix, char_suffix, joined_len};
use super::window::Window;
use rand::Rng;

/// Characters stripped from a word before comparing it to the connectives.
const CONNECTIVE_STRIP: &[char] = &['.', ',', '!', '?', ':', ';'];

/// Tunables for locating the strategic cut inside a tail line.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitterSettings {
    /// Lowercase connective words that may open a new idea
    pub connectives: Vec<String>,
    /// Word-final characters that mark a clause boundary
    pub cut_punctuation: Vec<char>,
    /// Minimum characters that must remain after the cut
    pub min_remainder: usize,
    /// Share of the tail length used by the positional fallback
    pub fallback_fraction: f64,
}

/// Which rule produced a strategic cut
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CutTier {
    /// A word ending in clause punctuation
    Punctuation,
    /// A connective word
    Connective,
    /// Positional fallback at a fraction of the tail
    Fallback,
}

/// Word index in the tail where the highlighted prefix ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrategicCut {
    /// Rule that matched
    pub tier: CutTier,
    /// Number of leading tail words that are highlighted
    pub word_index: usize,
}

/// Head and tail produced for one long sentence.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlapSplit {
    /// Leading line, never highlighted
    pub head: LineRecord,
    /// Trailing line, highlighted up to the cut when one was found
    pub tail: LineRecord,
    /// Cut applied to the tail, `None` when no rule qualified
    pub cut: Option<StrategicCut>,
}

/// Splits an over-long sentence into overlapping head and tail lines.
#[derive(Debug, Clone)]
pub struct OverlapSplitter {
    window: Window,
    settings: SplitterSettings,
}

impl OverlapSplitter {
    /// Create a splitter for `window`
    pub fn new(window: Window, settings: SplitterSettings) -> Self {
        Self { window, settings }
    }

    /// Split `sentence` into head and tail lines.
    pub fn split<R: Rng + ?Sized>(&self, sentence: &str, rng: &mut R) -> OverlapSplit {
        let words: Vec<&str> = sentence.split_whitespace().collect();

        let head_limit = self.window.sample(rng);
        let head = self.snap_head(&words, head_limit);

        let tail_limit = self.window.sample(rng);
        let tail_text = self.snap_tail(&words, tail_limit);
        let tail_words: Vec<&str> = tail_text.split_whitespace().collect();

        let cut = self.find_cut(&tail_words, char_len(&tail_text));
        let tail = match cut {
            Some(cut) => {
                let end = joined_len(&tail_words[..cut.word_index]);
                log::debug!(
                    "split sentence: head {} chars, tail {} chars, {:?} cut after word {}",
                    char_len(&head),
                    char_len(&tail_text),
                    cut.tier,
                    cut.word_index
                );
                LineRecord::highlighted(tail_text, 0, end)
            }
            None => {
                log::debug!("split sentence: no strategic cut in tail");
                LineRecord::plain(tail_text)
            }
        };

        OverlapSplit {
            head: LineRecord::plain(head),
            tail,
            cut,
        }
    }

    /// Longest whole-word prefix within `limit`, widened to the window
    /// maximum if that falls short, and cut mid-word only as a last resort.
    fn snap_head(&self, words: &[&str], limit: usize) -> String {
        let take = self.snapped_count(words.iter().copied(), limit);
        if take > 0 {
            return words[..take].join(" ");
        }

        let normalized = words.join(" ");
        char_prefix(&normalized, limit).trim_end().to_string()
    }

    /// Mirror of [`Self::snap_head`] working from the end of the sentence.
    fn snap_tail(&self, words: &[&str], limit: usize) -> String {
        let take = self.snapped_count(words.iter().rev().copied(), limit);
        if take > 0 {
            return words[words.len() - take..].join(" ");
        }

        let normalized = words.join(" ");
        char_suffix(&normalized, limit).trim_start().to_string()
    }

    /// Number of words, taken in iteration order, that form a line inside the
    /// window: preferring the longest that fits `limit`, then the longest that
    /// fits the window maximum. Zero when no whole-word line reaches the
    /// minimum.
    fn snapped_count<'a>(&self, words: impl Iterator<Item = &'a str>, limit: usize) -> usize {
        let mut within_limit = (0, 0);
        let mut within_max = (0, 0);
        let mut len = 0usize;

        for (i, word) in words.enumerate() {
            len += char_len(word) + usize::from(i > 0);
            if len > self.window.max() {
                break;
            }
            if len <= limit {
                within_limit = (i + 1, len);
            }
            within_max = (i + 1, len);
        }

        if within_limit.1 >= self.window.min() {
            within_limit.0
        } else if within_max.1 >= self.window.min() {
            within_max.0
        } else {
            0
        }
    }

    /// Locate the strategic cut in the tail's words.
    fn find_cut(&self, words: &[&str], tail_len: usize) -> Option<StrategicCut> {
        let settings = &self.settings;
        let remainder = |from: usize| joined_len(&words[from.min(words.len())..]);

        let punctuation = words.iter().enumerate().find(|(i, word)| {
            word.chars()
                .last()
                .is_some_and(|c| settings.cut_punctuation.contains(&c))
                && remainder(i + 1) >= settings.min_remainder
        });
        if let Some((i, _)) = punctuation {
            return Some(StrategicCut {
                tier: CutTier::Punctuation,
                word_index: i + 1,
            });
        }

        let connective = words.iter().enumerate().find(|(i, word)| {
            let clean = word.trim_matches(CONNECTIVE_STRIP).to_lowercase();
            settings.connectives.iter().any(|c| *c == clean)
                && remainder(*i) >= settings.min_remainder
        });
        if let Some((i, _)) = connective {
            // A connective opening the tail leaves nothing to highlight.
            return (i > 0).then_some(StrategicCut {
                tier: CutTier::Connective,
                word_index: i,
            });
        }

        let target = (tail_len as f64 * settings.fallback_fraction) as usize;
        let mut running = 0usize;
        for (i, word) in words.iter().enumerate() {
            running += char_len(word) + 1;
            if running >= target {
                return (remainder(i + 1) >= settings.min_remainder).then_some(StrategicCut {
                    tier: CutTier::Fallback,
                    word_index: i + 1,
                });
            }
        }

        None
    }
}
