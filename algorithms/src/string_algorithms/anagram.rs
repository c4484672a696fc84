use thiserror::Error;

pub const ALPHABET: usize = 26;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AnagramError {
    #[error("character {ch:?} at byte {position} is not a lowercase ASCII letter")]
    UnsupportedChar { ch: char, position: usize },
}

/// Occurrences of each letter `a..=z` in `s`.
pub fn char_count(s: &str) -> Result<[usize; ALPHABET], AnagramError> {
    let mut counts = [0; ALPHABET];
    for (position, ch) in s.char_indices() {
        if !ch.is_ascii_lowercase() {
            return Err(AnagramError::UnsupportedChar { ch, position });
        }
        counts[usize::from(ch as u8 - b'a')] += 1;
    }
    Ok(counts)
}

pub fn are_anagrams(a: &str, b: &str) -> Result<bool, AnagramError> {
    Ok(char_count(a)? == char_count(b)?)
}
