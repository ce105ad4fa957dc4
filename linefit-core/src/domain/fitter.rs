//! Length-target fitting for lines that fall short of the window
//!
//! A short line is stretched by restating its own leading words. The restated
//! suffix is highlighted so the renderer can mark it as repeated filler.

use super::line::LineRecord;
use super::text::char_len;
use super::window::Window;
use rand::Rng;

/// Stretches short text toward a random target length inside the window.
#[derive(Debug, Clone)]
pub struct LengthFitter {
    window: Window,
    max_passes: usize,
}

impl LengthFitter {
    /// Create a fitter that scans the word list at most `max_passes` times.
    pub fn new(window: Window, max_passes: usize) -> Self {
        Self { window, max_passes }
    }

    /// The window this fitter aims for
    pub fn window(&self) -> Window {
        self.window
    }

    /// Extend `text` with its own leading words.
    ///
    /// The result may still be shorter than the window minimum when the words
    /// run out or every candidate word would overshoot the maximum; callers
    /// check the returned length and report that case. When nothing at all
    /// can be appended the text is returned unchanged and unhighlighted.
    pub fn fit<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> LineRecord {
        let (min, max) = (self.window.min(), self.window.max());
        let base_len = char_len(text);
        let target = self.window.sample(rng);

        if base_len >= target {
            return LineRecord::plain(text);
        }

        let words: Vec<&str> = text.split_whitespace().collect();
        let mut added: Vec<&str> = Vec::new();
        // Length of `added` joined by spaces
        let mut added_len = 0usize;

        for pass in 0..self.max_passes {
            let before = added.len();

            for &word in &words {
                let grown = added_len + usize::from(!added.is_empty()) + char_len(word);
                let candidate = base_len + 1 + grown;
                if candidate > max {
                    break;
                }
                added.push(word);
                added_len = grown;
                if candidate >= min && candidate >= target {
                    break;
                }
            }

            if total_len(base_len, added_len) >= min {
                break;
            }
            if added.len() == before {
                log::trace!("fitter made no progress on pass {pass}, giving up");
                break;
            }
        }

        while total_len(base_len, added_len) > max {
            match added.pop() {
                Some(word) => {
                    added_len = added_len
                        .saturating_sub(char_len(word) + usize::from(!added.is_empty()));
                }
                None => break,
            }
        }

        if added.is_empty() {
            log::debug!("fitter could not extend {base_len}-char line toward {target}");
            return LineRecord::plain(text);
        }

        let fitted = format!("{} {}", text, added.join(" "));
        let end = char_len(&fitted);
        log::debug!(
            "fitted {base_len}-char line to {end} chars (target {target}, window {})",
            self.window
        );
        LineRecord::highlighted(fitted, base_len + 1, end)
    }
}

fn total_len(base_len: usize, added_len: usize) -> usize {
    if added_len == 0 {
        base_len
    } else {
        base_len + 1 + added_len
    }
}
