//! Sentence segmentation on terminal punctuation
//!
//! Segmentation is purely lexical: a whitespace-delimited token whose last
//! character is a terminator closes the current sentence. Colons never do.

/// Characters that close a sentence when they end a token.
pub const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Split `text` into trimmed, non-empty sentences in their original order.
///
/// Trailing tokens without a terminator form a final sentence. Whitespace
/// runs inside a sentence collapse to single spaces.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for token in text.split_whitespace() {
        current.push(token);
        if token
            .chars()
            .last()
            .is_some_and(|c| SENTENCE_TERMINATORS.contains(&c))
        {
            sentences.push(current.join(" "));
            current.clear();
        }
    }

    if !current.is_empty() {
        sentences.push(current.join(" "));
    }

    sentences
}
