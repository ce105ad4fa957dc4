//! Character-indexed string helpers
//!
//! Every length and offset in the engine counts `char`s, not bytes, so that
//! text with diacritics measures the way a reader counts it.

/// Number of characters in `text`.
#[inline]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Byte offset of the character at `char_idx`, clamped to the end of `text`.
pub fn byte_offset(text: &str, char_idx: usize) -> usize {
    text.char_indices()
        .nth(char_idx)
        .map(|(byte, _)| byte)
        .unwrap_or(text.len())
}

/// Substring covering characters `[start, end)`.
pub fn char_slice(text: &str, start: usize, end: usize) -> &str {
    let from = byte_offset(text, start);
    let to = byte_offset(text, end.max(start));
    &text[from..to]
}

/// The first `n` characters of `text`.
pub fn char_prefix(text: &str, n: usize) -> &str {
    &text[..byte_offset(text, n)]
}

/// The last `n` characters of `text`.
pub fn char_suffix(text: &str, n: usize) -> &str {
    let len = char_len(text);
    &text[byte_offset(text, len.saturating_sub(n))..]
}

/// Character index of the first occurrence of `needle` in `haystack`.
pub fn find_char_index(haystack: &str, needle: &str) -> Option<usize> {
    haystack
        .find(needle)
        .map(|byte| char_len(&haystack[..byte]))
}

/// Character index of the last occurrence of `needle` that starts strictly
/// before character `before`.
pub fn rfind_char_index_before(haystack: &str, needle: &str, before: usize) -> Option<usize> {
    if needle.is_empty() {
        return None;
    }

    haystack
        .match_indices(needle)
        .map(|(byte, _)| char_len(&haystack[..byte]))
        .take_while(|&idx| idx < before)
        .last()
}

/// Length in characters of `words` joined by single spaces.
pub fn joined_len<S: AsRef<str>>(words: &[S]) -> usize {
    if words.is_empty() {
        return 0;
    }
    words.iter().map(|w| char_len(w.as_ref())).sum::<usize>() + words.len() - 1
}
