//! Word-pair rules for a card.
//!
//! The same checks the card editor runs when a pair is added: both words
//! present, neither longer than `max_word_len`, and no English or Indonesian
//! word repeated (case-insensitively). A playable card also needs at least
//! `min_pairs` pairs.

use crate::game_engine::{
    config::GameConfig,
    error::{GameError, Result},
    models::WordPair,
};

/// Check a candidate pair against the pairs already on the card.
pub fn validate_word_pair(
    existing: &[WordPair],
    english: &str,
    indonesian: &str,
    config: &GameConfig,
) -> Result<()> {
    let english = english.trim();
    let indonesian = indonesian.trim();

    if english.is_empty() || indonesian.is_empty() {
        return Err(GameError::invalid("both the English and the Indonesian word are required"));
    }
    if english.chars().count() > config.max_word_len
        || indonesian.chars().count() > config.max_word_len
    {
        return Err(GameError::invalid(format!(
            "words may not be longer than {} characters",
            config.max_word_len
        )));
    }

    let en = english.to_lowercase();
    let id = indonesian.to_lowercase();
    let duplicate = existing
        .iter()
        .any(|p| p.english.to_lowercase() == en || p.indonesian.to_lowercase() == id);
    if duplicate {
        return Err(GameError::invalid(format!(
            "`{english}` / `{indonesian}` is already on the card"
        )));
    }
    Ok(())
}

/// Check a whole card: every pair in order, then the pair count.
pub fn validate_card(pairs: &[WordPair], config: &GameConfig) -> Result<()> {
    for (i, pair) in pairs.iter().enumerate() {
        validate_word_pair(&pairs[..i], &pair.english, &pair.indonesian, config)?;
    }
    if pairs.len() < config.min_pairs {
        log::warn!("Card has {} pairs, {} required", pairs.len(), config.min_pairs);
        return Err(GameError::invalid(format!(
            "at least {} word pairs are required (found {})",
            config.min_pairs,
            pairs.len()
        )));
    }
    Ok(())
}
