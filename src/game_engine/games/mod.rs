//! Game builders and their play state.
//!
//! Each module takes the word data fetched for a card (or free text) and an
//! injected RNG, and returns a round the presentation layer can render.

/// Pair matching: two shuffled columns.
pub mod matching;
/// Multiple-choice translation, 1 correct + 3 distractors.
pub mod translation;
/// Fill-in-the-blank word placement.
pub mod blank_puzzle;
