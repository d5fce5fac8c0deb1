//! Small text utilities shared by the game builders.

use std::collections::HashSet;

/// Split `text` on whitespace.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Unique words of `text`, compared case-insensitively.
///
/// Order follows first appearance, and the first spelling of each word is the
/// one kept ("Apple apple" yields `["Apple"]`).
pub fn unique_words(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    tokenize(text)
        .into_iter()
        .filter(|w| seen.insert(w.to_lowercase()))
        .map(str::to_string)
        .collect()
}

/// Number of case-folded unique words, for validating input before building.
pub fn unique_word_count(text: &str) -> usize {
    tokenize(text)
        .into_iter()
        .map(str::to_lowercase)
        .collect::<HashSet<_>>()
        .len()
}
