//! Tunable knobs for round sizes and puzzle generation.
//!
//! Every field has a default matching the mobile app's behaviour, so an empty
//! JSON object (`{}`) is a valid config.

use serde::{Deserialize, Serialize};

use crate::game_engine::error::{GameError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Pairs drawn per matching or translation session.
    pub round_size: usize,
    /// Pairs a card needs before any pair game can start.
    pub min_pairs: usize,
    /// Longest allowed English or Indonesian word, in chars.
    pub max_word_len: usize,
    pub puzzle: PuzzleRules,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            round_size: 5,
            min_pairs: 3,
            max_word_len: 10,
            puzzle: PuzzleRules::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PuzzleRules {
    /// Case-folded unique words the text must contain.
    pub min_unique_words: usize,
    /// Words shorter than this (in chars) are never hidden.
    pub min_word_len: usize,
    /// Floor for the number of hidden words.
    pub min_hidden: usize,
    pub min_hide_ratio: f64,
    pub max_hide_ratio: f64,
}

impl Default for PuzzleRules {
    fn default() -> Self {
        PuzzleRules {
            min_unique_words: 10,
            min_word_len: 3,
            min_hidden: 3,
            min_hide_ratio: 0.2,
            max_hide_ratio: 0.3,
        }
    }
}

impl PuzzleRules {
    /// Inclusive bounds for how many of `eligible` words to hide.
    ///
    /// The upper bound never drops below the lower one; with few eligible
    /// words the adjacency rule stops hiding early instead.
    pub fn hide_bounds(&self, eligible: usize) -> (usize, usize) {
        let lo = self
            .min_hidden
            .max((eligible as f64 * self.min_hide_ratio).floor() as usize);
        let hi = ((eligible as f64 * self.max_hide_ratio).floor() as usize).max(lo);
        (lo, hi)
    }
}

impl GameConfig {
    /// Parse a config from JSON, filling absent fields with defaults.
    pub fn from_json(s: &str) -> Result<Self> {
        let config: GameConfig = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.round_size == 0 {
            return Err(GameError::invalid("round_size must be at least 1"));
        }
        if self.min_pairs == 0 || self.max_word_len == 0 {
            return Err(GameError::invalid("min_pairs and max_word_len must be at least 1"));
        }
        let p = &self.puzzle;
        let in_unit = |r: f64| (0.0..=1.0).contains(&r);
        if !in_unit(p.min_hide_ratio) || !in_unit(p.max_hide_ratio) {
            return Err(GameError::invalid("hide ratios must lie in [0, 1]"));
        }
        if p.min_hide_ratio > p.max_hide_ratio {
            return Err(GameError::invalid("min_hide_ratio exceeds max_hide_ratio"));
        }
        Ok(())
    }
}
