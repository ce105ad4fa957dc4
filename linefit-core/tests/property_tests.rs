//! Property-based tests for the line fitting pipeline

use linefit_core::domain::text::char_len;
use linefit_core::{
    defaults, split_sentences, Config, Document, Input, LengthFitter, LineRecord,
    OverlapPropagator, OverlapSplitter, ProcessingReport, PropagatorSettings, ScriptProcessor,
    SplitterSettings, Window,
};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn default_window() -> Window {
    Window::new(defaults::MIN_CHARS, defaults::MAX_CHARS).unwrap()
}

fn splitter_settings() -> SplitterSettings {
    SplitterSettings {
        connectives: defaults::CONNECTIVES.iter().map(|s| s.to_string()).collect(),
        cut_punctuation: defaults::CUT_PUNCTUATION.to_vec(),
        min_remainder: defaults::MIN_REMAINDER,
        fallback_fraction: defaults::FALLBACK_FRACTION,
    }
}

fn propagator_settings() -> PropagatorSettings {
    PropagatorSettings {
        natural_breaks: defaults::NATURAL_BREAKS.iter().map(|s| s.to_string()).collect(),
        min_prefix: defaults::MIN_NORMAL_PREFIX,
        key_length: defaults::OVERLAP_KEY_LEN,
    }
}

/// Short words, optionally closed by punctuation.
fn word() -> impl Strategy<Value = String> {
    ("[a-zăîșț]{1,6}", prop::sample::select(vec!["", "", "", ",", ".", "!", "?", ":"]))
        .prop_map(|(w, p)| format!("{w}{p}"))
}

/// Words without any punctuation, so the text is a single sentence.
fn bare_words(range: std::ops::Range<usize>) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{1,6}", range)
}

proptest! {
    #[test]
    fn test_window_sample_stays_in_range(min in 1usize..200, spread in 0usize..50, seed: u64) {
        let window = Window::new(min, min + spread).unwrap();
        let mut rng = SmallRng::seed_from_u64(seed);
        for _ in 0..20 {
            let value = window.sample(&mut rng);
            prop_assert!(window.contains(value));
        }
    }

    #[test]
    fn test_segmenter_keeps_every_token(words in prop::collection::vec(word(), 0..60)) {
        let text = words.join("  ");
        let sentences = split_sentences(&text);

        let rejoined: Vec<&str> = sentences.iter().flat_map(|s| s.split_whitespace()).collect();
        let original: Vec<&str> = text.split_whitespace().collect();
        prop_assert_eq!(rejoined, original);

        for sentence in &sentences {
            prop_assert!(!sentence.is_empty());
            prop_assert_eq!(sentence.trim(), sentence.as_str());
        }
    }

    #[test]
    fn test_fitter_only_grows_and_never_overshoots(words in bare_words(1..12), seed: u64) {
        let text = words.join(" ");
        let fitter = LengthFitter::new(default_window(), defaults::FITTER_MAX_PASSES);
        let mut rng = SmallRng::seed_from_u64(seed);

        let line = fitter.fit(&text, &mut rng);
        prop_assert!(line.text().starts_with(&text));
        prop_assert!(line.len() >= char_len(&text));
        prop_assert!(line.len() <= defaults::MAX_CHARS);
        prop_assert!(!line.text().ends_with(' '));

        if let Some(highlight) = line.highlight() {
            prop_assert_eq!(highlight.start, char_len(&text) + 1);
            prop_assert_eq!(highlight.end, line.len());
        }
    }

    #[test]
    fn test_split_lines_stay_in_window(words in bare_words(40..80), seed: u64) {
        let sentence = words.join(" ");
        prop_assume!(char_len(&sentence) > defaults::MAX_CHARS);

        let splitter = OverlapSplitter::new(default_window(), splitter_settings());
        let mut rng = SmallRng::seed_from_u64(seed);
        let split = splitter.split(&sentence, &mut rng);

        prop_assert!(default_window().contains(split.head.len()));
        prop_assert!(default_window().contains(split.tail.len()));
        prop_assert!(sentence.starts_with(split.head.text()));
        prop_assert!(sentence.ends_with(split.tail.text()));
        prop_assert!(!split.head.has_highlight());

        match split.cut {
            Some(_) => {
                let highlight = split.tail.highlight().unwrap();
                prop_assert_eq!(highlight.start, 0);
                prop_assert!(split.tail.len() - highlight.end >= defaults::MIN_REMAINDER);
            }
            None => prop_assert!(!split.tail.has_highlight()),
        }
    }

    #[test]
    fn test_pipeline_never_exceeds_maximum(words in prop::collection::vec(word(), 1..120), seed: u64) {
        let config = Config::builder().seed(seed).build().unwrap();
        let processor = ScriptProcessor::with_config(config);

        let output = processor.process(Input::from_text(words.join(" "))).unwrap();
        for line in output.document.lines() {
            prop_assert!(line.len() <= defaults::MAX_CHARS, "line too long: {:?}", line.text());
            prop_assert!(!line.is_empty());
        }

        let flagged = output.report.out_of_window().len();
        let measured = output
            .document
            .lines()
            .filter(|line| !default_window().contains(line.len()))
            .count();
        prop_assert_eq!(flagged, measured);
    }

    #[test]
    fn test_propagated_highlights_keep_a_prefix(
        texts in prop::collection::vec(prop::collection::vec(word(), 10..25), 2..8),
        highlight_ends in prop::collection::vec(0usize..30, 8),
    ) {
        let mut document = Document::new();
        for (i, words) in texts.iter().enumerate() {
            let text = words.join(" ");
            if i % 2 == 1 {
                let end = highlight_ends[i].min(char_len(&text));
                document.push_line(LineRecord::highlighted(text, 0, end));
            } else {
                document.push_line(LineRecord::plain(text));
            }
        }
        let before = document.clone();

        let propagator = OverlapPropagator::new(propagator_settings());
        let mut report = ProcessingReport::new(default_window());
        propagator.propagate(&mut document, &mut report);

        for (old, new) in before.lines().zip(document.lines()) {
            prop_assert_eq!(old.text(), new.text());
            if old.has_highlight() {
                prop_assert_eq!(old.highlight(), new.highlight());
            } else if let Some(highlight) = new.highlight() {
                prop_assert!(highlight.start >= defaults::MIN_NORMAL_PREFIX);
                prop_assert_eq!(highlight.end, new.len());
            }
        }

        let once = document.clone();
        propagator.propagate(&mut document, &mut report);
        prop_assert_eq!(once, document);
    }
}
