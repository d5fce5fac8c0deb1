//! Learned-word bookkeeping for a card.
//!
//! The card API reports progress as a percentage; the flashcard screen flips
//! individual pairs between known and unknown. These helpers keep the two
//! views consistent.

use crate::game_engine::{
    error::{GameError, Result},
    models::WordPair,
};

pub fn learned_count(pairs: &[WordPair]) -> usize {
    pairs.iter().filter(|p| p.is_learned).count()
}

/// Share of learned pairs in percent; 0 for an empty card.
pub fn progress_percent(pairs: &[WordPair]) -> f64 {
    if pairs.is_empty() {
        return 0.0;
    }
    learned_count(pairs) as f64 / pairs.len() as f64 * 100.0
}

/// Derive per-pair learned flags from a server-side percentage.
///
/// The first `round(percent * len / 100)` pairs are marked learned, the rest
/// are cleared. Out-of-range percentages are clamped to `0..=100`.
pub fn apply_server_progress(pairs: &mut [WordPair], percent: f64) {
    let percent = percent.clamp(0.0, 100.0);
    let learned = (percent * pairs.len() as f64 / 100.0).round() as usize;
    for (i, pair) in pairs.iter_mut().enumerate() {
        pair.is_learned = i < learned;
    }
}

/// Mark one pair known or unknown.
pub fn set_learned(pairs: &mut [WordPair], index: usize, learned: bool) -> Result<()> {
    let len = pairs.len();
    let pair = pairs
        .get_mut(index)
        .ok_or_else(|| GameError::invalid(format!("pair index {index} out of range for {len} pairs")))?;
    pair.is_learned = learned;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> Vec<WordPair> {
        ["satu", "dua", "tiga", "empat"]
            .iter()
            .zip(["one", "two", "three", "four"])
            .map(|(id, en)| WordPair::new(en, *id))
            .collect()
    }

    #[test]
    fn empty_card_has_zero_progress() {
        assert_eq!(progress_percent(&[]), 0.0);
    }

    #[test]
    fn percent_tracks_learned_flags() {
        let mut pairs = card();
        set_learned(&mut pairs, 1, true).unwrap();
        assert_eq!(learned_count(&pairs), 1);
        assert_eq!(progress_percent(&pairs), 25.0);
        set_learned(&mut pairs, 1, false).unwrap();
        assert_eq!(progress_percent(&pairs), 0.0);
    }

    #[test]
    fn server_progress_marks_leading_pairs() {
        let mut pairs = card();
        apply_server_progress(&mut pairs, 50.0);
        let flags: Vec<bool> = pairs.iter().map(|p| p.is_learned).collect();
        assert_eq!(flags, vec![true, true, false, false]);

        // 4 * 60 / 100 = 2.4 rounds to 2
        apply_server_progress(&mut pairs, 60.0);
        assert_eq!(learned_count(&pairs), 2);

        apply_server_progress(&mut pairs, 250.0);
        assert_eq!(learned_count(&pairs), 4);
    }

    #[test]
    fn bad_index_is_rejected() {
        let mut pairs = card();
        assert!(matches!(set_learned(&mut pairs, 9, true), Err(GameError::InvalidArgument(_))));
    }
}
