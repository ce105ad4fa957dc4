//! Greedy packing of sentences into window-sized lines
//!
//! Sentences are grouped three at a time, then two, then one, always
//! preferring fewer and fuller lines. A group that falls short of the window
//! is stretched by the [`LengthFitter`]; a lone sentence that is too long is
//! handed to the [`OverlapSplitter`].

use super::fitter::LengthFitter;
use super::line::LineRecord;
use super::segmenter::split_sentences;
use super::splitter::OverlapSplitter;
use super::text::char_len;
use super::window::Window;
use rand::Rng;

/// Largest group of sentences tried for a single line.
const MAX_GROUP: usize = 3;

/// Per-line conditions the packer reports back to its caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackEvent {
    /// A short line was stretched by the fitter
    Fitted {
        /// Resulting length
        length: usize,
    },
    /// The fitter could not reach the window minimum
    UnderLength {
        /// Offending line text
        text: String,
        /// Length actually reached
        length: usize,
    },
    /// A long sentence was split into head and tail
    Split,
    /// The tail of a split sentence has no strategic cut
    NoStrategicCut {
        /// Tail text
        text: String,
    },
}

/// Receives [`PackEvent`]s while packing.
pub trait PackObserver {
    /// Called once per event, in emission order
    fn on_event(&mut self, event: PackEvent);
}

impl PackObserver for Vec<PackEvent> {
    fn on_event(&mut self, event: PackEvent) {
        self.push(event);
    }
}

/// Packs block text into line records.
#[derive(Debug, Clone)]
pub struct LinePacker {
    window: Window,
    fitter: LengthFitter,
    splitter: OverlapSplitter,
}

impl LinePacker {
    /// Create a packer from its collaborators
    pub fn new(window: Window, fitter: LengthFitter, splitter: OverlapSplitter) -> Self {
        Self {
            window,
            fitter,
            splitter,
        }
    }

    /// The window lines are packed into
    pub fn window(&self) -> Window {
        self.window
    }

    /// Turn one block of text into lines.
    ///
    /// Text already inside the window is emitted as is, short text is fitted,
    /// and only long text is segmented into sentences.
    pub fn process<R, O>(&self, text: &str, rng: &mut R, observer: &mut O) -> Vec<LineRecord>
    where
        R: Rng + ?Sized,
        O: PackObserver + ?Sized,
    {
        let text = text.trim();
        if text.is_empty() {
            return Vec::new();
        }

        let len = char_len(text);
        if self.window.contains(len) {
            return vec![LineRecord::plain(text)];
        }
        if len < self.window.min() {
            return vec![self.fit(text, rng, observer)];
        }

        let sentences = split_sentences(text);
        if sentences.len() == 1 {
            return self.split(text, rng, observer);
        }
        self.pack(&sentences, rng, observer)
    }

    /// Pack `sentences` left to right.
    ///
    /// Each call consumes a group from the front of the slice and recurses on
    /// the rest.
    pub fn pack<R, O>(&self, sentences: &[String], rng: &mut R, observer: &mut O) -> Vec<LineRecord>
    where
        R: Rng + ?Sized,
        O: PackObserver + ?Sized,
    {
        if sentences.is_empty() {
            return Vec::new();
        }

        if let [only] = sentences {
            if char_len(only) > self.window.max() {
                return self.split(only, rng, observer);
            }
        }

        for size in (2..=MAX_GROUP).rev() {
            if sentences.len() < size {
                continue;
            }

            let combined = sentences[..size].join(" ");
            let len = char_len(&combined);
            let line = if self.window.contains(len) {
                LineRecord::plain(combined)
            } else if len < self.window.min() {
                self.fit(&combined, rng, observer)
            } else {
                continue;
            };

            let mut lines = vec![line];
            lines.extend(self.pack(&sentences[size..], rng, observer));
            return lines;
        }

        let mut lines = self.process(&sentences[0], rng, observer);
        lines.extend(self.pack(&sentences[1..], rng, observer));
        lines
    }

    fn fit<R, O>(&self, text: &str, rng: &mut R, observer: &mut O) -> LineRecord
    where
        R: Rng + ?Sized,
        O: PackObserver + ?Sized,
    {
        let line = self.fitter.fit(text, rng);
        if line.len() < self.window.min() {
            log::warn!(
                "line stays at {} chars, below the {} minimum: {:?}",
                line.len(),
                self.window.min(),
                line.text()
            );
            observer.on_event(PackEvent::UnderLength {
                text: line.text().to_string(),
                length: line.len(),
            });
        } else {
            observer.on_event(PackEvent::Fitted { length: line.len() });
        }
        line
    }

    fn split<R, O>(&self, sentence: &str, rng: &mut R, observer: &mut O) -> Vec<LineRecord>
    where
        R: Rng + ?Sized,
        O: PackObserver + ?Sized,
    {
        let split = self.splitter.split(sentence, rng);
        observer.on_event(PackEvent::Split);
        if split.cut.is_none() {
            observer.on_event(PackEvent::NoStrategicCut {
                text: split.tail.text().to_string(),
            });
        }
        vec![split.head, split.tail]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::splitter::SplitterSettings;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn packer(min: usize, max: usize) -> LinePacker {
        let window = Window::new_unchecked(min, max);
        let settings = SplitterSettings {
            connectives: vec!["dar".into(), "și".into()],
            cut_punctuation: vec![':', ','],
            min_remainder: 50,
            fallback_fraction: 0.30,
        };
        LinePacker::new(
            window,
            LengthFitter::new(window, 10),
            OverlapSplitter::new(window, settings),
        )
    }

    fn sentences(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_text_in_window_is_kept_verbatim() {
        let mut rng = SmallRng::seed_from_u64(0);
        let mut events = Vec::new();
        let text = "Unu doi. Trei patru.";
        let lines = packer(15, 25).process(text, &mut rng, &mut events);
        assert_eq!(lines, vec![LineRecord::plain(text)]);
        assert!(events.is_empty());
    }

    #[test]
    fn test_blank_text_yields_nothing() {
        let mut rng = SmallRng::seed_from_u64(0);
        let mut events = Vec::new();
        assert!(packer(15, 25).process("   ", &mut rng, &mut events).is_empty());
    }

    #[test]
    fn test_three_sentences_packed_first() {
        // Each sentence is 9 chars; three joined are 29.
        let input = sentences(&["Aaaa bbb.", "Cccc ddd.", "Eeee fff.", "Gggg hhh.", "Iiii jjj."]);
        let mut rng = SmallRng::seed_from_u64(0);
        let mut events = Vec::new();
        let lines = packer(25, 30).pack(&input, &mut rng, &mut events);

        assert_eq!(lines[0], LineRecord::plain("Aaaa bbb. Cccc ddd. Eeee fff."));
        assert_eq!(lines.len(), 2);
        // The last two sentences make 19 chars and get fitted.
        assert!(lines[1].text().starts_with("Gggg hhh. Iiii jjj."));
        assert!(lines[1].has_highlight());
        assert!(matches!(events[0], PackEvent::Fitted { .. }));
    }

    #[test]
    fn test_falls_back_to_pairs_when_triple_too_long() {
        let input = sentences(&[
            "Aaaaaaaa bbbbbbbb.",
            "Cccccccc dddddddd.",
            "Eeeeeeee ffffffff.",
        ]);
        let mut rng = SmallRng::seed_from_u64(0);
        let mut events = Vec::new();
        let lines = packer(35, 40).pack(&input, &mut rng, &mut events);

        assert_eq!(lines[0], LineRecord::plain("Aaaaaaaa bbbbbbbb. Cccccccc dddddddd."));
        assert_eq!(lines.len(), 2);
        assert!(lines[1].text().starts_with("Eeeeeeee ffffffff."));
    }

    #[test]
    fn test_single_long_block_is_split() {
        let mut rng = SmallRng::seed_from_u64(4);
        let mut events = Vec::new();
        let lines = packer(20, 25).process("Astazi e o zi buna si calda.", &mut rng, &mut events);

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text(), "Astazi e o zi buna si");
        assert_eq!(lines[1].text(), "e o zi buna si calda.");
        assert_eq!(events[0], PackEvent::Split);
        assert!(matches!(events[1], PackEvent::NoStrategicCut { .. }));
    }

    #[test]
    fn test_long_sentence_among_others_is_split() {
        let input = sentences(&[
            "Scurt.",
            "Aceasta este o propoziție foarte lungă care trece de fereastră.",
        ]);
        let mut rng = SmallRng::seed_from_u64(1);
        let mut events = Vec::new();
        let lines = packer(20, 30).pack(&input, &mut rng, &mut events);

        // "Scurt." alone is fitted, the long one becomes head and tail.
        assert_eq!(lines.len(), 3);
        assert!(lines[0].text().starts_with("Scurt."));
        assert!(events.contains(&PackEvent::Split));
    }

    #[test]
    fn test_under_length_is_reported() {
        let mut rng = SmallRng::seed_from_u64(0);
        let mut events = Vec::new();
        let lines = packer(10, 12).process("Salut.", &mut rng, &mut events);

        assert_eq!(lines, vec![LineRecord::plain("Salut.")]);
        assert_eq!(
            events,
            vec![PackEvent::UnderLength {
                text: "Salut.".to_string(),
                length: 6
            }]
        );
    }
}
