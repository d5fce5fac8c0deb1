//! Fill-in-the-blank word placement game.
//!
//! A free-form text is reduced to its unique words, a few of the longer ones
//! are hidden (never two neighbours), and the player drags the hidden words
//! back from a shuffled bank.
//!
//! ## Generation
//!
//! 1. Split on whitespace and keep the first spelling of every case-folded
//!    word.
//! 2. Reject the text if fewer than `min_unique_words` remain.
//! 3. Keep only words of at least `min_word_len` chars; these become the
//!    slots. A text with none of them is rejected.
//! 4. Draw a hide target from [`PuzzleRules::hide_bounds`], then repeatedly
//!    hide a random index that is not blacklisted, blacklisting it and both
//!    neighbours. Stops early when nothing is left to pick.
//! 5. Hidden words go to the bank in shuffled order.

use rand::Rng;

use crate::game_engine::{
    config::PuzzleRules,
    error::{GameError, Result},
    helpers::{unique_word_count, unique_words},
    models::{BankEntry, Score, Slot},
    shuffle::shuffle_in_place,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlankPuzzle {
    slots: Vec<Slot>,
    bank: Vec<BankEntry>,
    next_entry_id: usize,
}

/// Build a puzzle with the default rules.
pub fn build_blank_puzzle<R: Rng>(text: &str, rng: &mut R) -> Result<BlankPuzzle> {
    build_blank_puzzle_with(text, &PuzzleRules::default(), rng)
}

pub fn build_blank_puzzle_with<R: Rng>(
    text: &str,
    rules: &PuzzleRules,
    rng: &mut R,
) -> Result<BlankPuzzle> {
    let found = unique_word_count(text);
    if found < rules.min_unique_words {
        log::warn!(
            "Rejected puzzle text with {found} unique words (need {})",
            rules.min_unique_words
        );
        return Err(GameError::InsufficientWords {
            found,
            required: rules.min_unique_words,
        });
    }

    let eligible: Vec<String> = unique_words(text)
        .into_iter()
        .filter(|w| w.chars().count() >= rules.min_word_len)
        .collect();
    if eligible.is_empty() {
        log::warn!("Rejected puzzle text with no word of {} or more chars", rules.min_word_len);
        return Err(GameError::invalid(format!(
            "the text needs words of at least {} characters to hide",
            rules.min_word_len
        )));
    }

    let hidden = pick_hidden(eligible.len(), rules, rng);

    let slots: Vec<Slot> = eligible
        .iter()
        .enumerate()
        .map(|(i, word)| Slot {
            id: format!("slot-{i}"),
            original_word: word.clone(),
            is_hidden: hidden[i],
            current_word: if hidden[i] { None } else { Some(word.clone()) },
        })
        .collect();

    let mut puzzle = BlankPuzzle {
        slots,
        bank: Vec::new(),
        next_entry_id: 0,
    };
    let removed: Vec<String> = puzzle
        .slots
        .iter()
        .filter(|s| s.is_hidden)
        .map(|s| s.original_word.clone())
        .collect();
    puzzle.return_to_bank(removed, rng);

    log::debug!(
        "Built blank puzzle: {} slots, {} hidden",
        puzzle.slots.len(),
        puzzle.hidden_count()
    );
    Ok(puzzle)
}

/// Mark which of `len` positions to hide; no two marked positions touch.
fn pick_hidden<R: Rng>(len: usize, rules: &PuzzleRules, rng: &mut R) -> Vec<bool> {
    let (lo, hi) = rules.hide_bounds(len);
    let target = rng.gen_range(lo..=hi);

    let mut hidden = vec![false; len];
    let mut blacklisted = vec![false; len];
    let mut count = 0;

    while count < target {
        let valid: Vec<usize> = (0..len).filter(|&i| !blacklisted[i]).collect();
        if valid.is_empty() {
            break;
        }
        let idx = valid[rng.gen_range(0..valid.len())];
        hidden[idx] = true;
        count += 1;

        blacklisted[idx] = true;
        if idx > 0 {
            blacklisted[idx - 1] = true;
        }
        if idx + 1 < len {
            blacklisted[idx + 1] = true;
        }
    }
    hidden
}

impl BlankPuzzle {
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn bank(&self) -> &[BankEntry] {
        &self.bank
    }

    pub fn hidden_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_hidden).count()
    }

    /// Every hidden slot holds its original word.
    pub fn is_solved(&self) -> bool {
        self.slots.iter().filter(|s| s.is_hidden).all(Slot::is_correct)
    }

    /// Move a bank word into a hidden slot.
    ///
    /// A word already sitting in the slot goes back to the bank under a new id.
    pub fn place(&mut self, bank_entry_id: &str, slot_id: &str) -> Result<()> {
        let slot_idx = self.hidden_slot_index(slot_id)?;
        let entry_idx = self
            .bank
            .iter()
            .position(|e| e.id == bank_entry_id)
            .ok_or_else(|| {
                log::warn!("Unknown bank entry {bank_entry_id}");
                GameError::invalid(format!("unknown bank entry `{bank_entry_id}`"))
            })?;

        let entry = self.bank.remove(entry_idx);
        if let Some(previous) = self.slots[slot_idx].current_word.replace(entry.word) {
            self.push_entry(previous);
        }
        Ok(())
    }

    /// Take the word out of a hidden slot and put it back in the bank.
    /// Returns the word, or `None` if the slot was already empty.
    pub fn remove(&mut self, slot_id: &str) -> Result<Option<String>> {
        let slot_idx = self.hidden_slot_index(slot_id)?;
        let word = self.slots[slot_idx].current_word.take();
        if let Some(w) = &word {
            self.push_entry(w.clone());
        }
        Ok(word)
    }

    /// Grade every hidden slot.
    ///
    /// Correct words stay put; wrong ones are cleared and returned to the
    /// bank in shuffled order. Calling this again without placing anything
    /// changes nothing and yields the same score.
    pub fn check_answers<R: Rng>(&mut self, rng: &mut R) -> Score {
        let mut correct = 0;
        let mut wrong = Vec::new();

        for slot in self.slots.iter_mut().filter(|s| s.is_hidden) {
            if slot.is_correct() {
                correct += 1;
            } else if let Some(word) = slot.current_word.take() {
                wrong.push(word);
            }
        }
        self.return_to_bank(wrong, rng);

        let score = Score { correct, total: self.hidden_count() };
        log::debug!("Checked blank puzzle: {score}");
        score
    }

    fn hidden_slot_index(&self, slot_id: &str) -> Result<usize> {
        let idx = self
            .slots
            .iter()
            .position(|s| s.id == slot_id)
            .ok_or_else(|| GameError::invalid(format!("unknown slot `{slot_id}`")))?;
        if !self.slots[idx].is_hidden {
            log::warn!("Rejected placement into visible slot {slot_id}");
            return Err(GameError::invalid(format!("slot `{slot_id}` is not a blank")));
        }
        Ok(idx)
    }

    fn push_entry(&mut self, word: String) {
        let id = format!("word-{}", self.next_entry_id);
        self.next_entry_id += 1;
        self.bank.push(BankEntry { id, word });
    }

    fn return_to_bank<R: Rng>(&mut self, words: Vec<String>, rng: &mut R) {
        let start = self.bank.len();
        for word in words {
            self.push_entry(word);
        }
        shuffle_in_place(&mut self.bank[start..], rng);
    }
}
