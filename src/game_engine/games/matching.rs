//! Pair-matching game: two shuffled columns, tap one token from each side.

use std::collections::BTreeSet;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::game_engine::{
    error::{GameError, Result},
    models::{Language, MatchRound, Token, WordPair},
    sampler::sample_round,
    shuffle::shuffle_in_place,
};

/// Build the two columns for one matching round.
///
/// Token `i` of each column carries `pair_id = i`. The columns are shuffled
/// independently so a token's position says nothing about its partner.
pub fn build_match_round<R: Rng>(pairs: &[WordPair], rng: &mut R) -> Result<MatchRound> {
    if pairs.is_empty() {
        log::warn!("Match round requested with no word pairs");
        return Err(GameError::invalid("a match round needs at least one word pair"));
    }

    let mut left: Vec<Token> = pairs
        .iter()
        .enumerate()
        .map(|(i, p)| Token {
            id: format!("src-{i}"),
            text: p.english.clone(),
            language: Language::Source,
            pair_id: i,
        })
        .collect();
    let mut right: Vec<Token> = pairs
        .iter()
        .enumerate()
        .map(|(i, p)| Token {
            id: format!("tgt-{i}"),
            text: p.indonesian.clone(),
            language: Language::Target,
            pair_id: i,
        })
        .collect();

    shuffle_in_place(&mut left, rng);
    shuffle_in_place(&mut right, rng);

    log::debug!("Built match round with {} pairs", pairs.len());
    Ok(MatchRound { left, right })
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchStats {
    pub attempts: u32,
    pub correct_matches: u32,
    /// Caller-supplied timestamps in milliseconds.
    pub started_at_ms: Option<u64>,
    pub finished_at_ms: Option<u64>,
}

impl MatchStats {
    /// Percentage of attempts that were correct; 0 before any attempt.
    pub fn accuracy(&self) -> f64 {
        self.correct_matches as f64 / self.attempts.max(1) as f64 * 100.0
    }

    /// Time from start to completion, once both are known.
    pub fn elapsed_ms(&self) -> Option<u64> {
        match (self.started_at_ms, self.finished_at_ms) {
            (Some(start), Some(end)) => Some(end.saturating_sub(start)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectOutcome {
    /// First token of a pair attempt is now selected.
    Selected,
    /// The selected token was tapped again.
    Deselected,
    Matched(usize),
    /// Holds the pair ids of both tokens.
    Mismatched(usize, usize),
    /// Token belongs to a pair that is already matched.
    Ignored,
}

/// Play state of one matching round, plus the card it was drawn from so the
/// round can be replayed with a fresh sample.
#[derive(Debug, Clone)]
pub struct MatchSession {
    card: Vec<WordPair>,
    round: MatchRound,
    selected: Option<Token>,
    matched: BTreeSet<usize>,
    incorrect: BTreeSet<usize>,
    stats: MatchStats,
}

impl MatchSession {
    /// Sample up to `round_size` pairs from `card` and build the round.
    pub fn new<R: Rng>(card: Vec<WordPair>, round_size: usize, rng: &mut R) -> Result<Self> {
        let selected = sample_round(&card, round_size, rng);
        let round = build_match_round(&selected, rng)?;
        Ok(MatchSession {
            card,
            round,
            selected: None,
            matched: BTreeSet::new(),
            incorrect: BTreeSet::new(),
            stats: MatchStats::default(),
        })
    }

    /// Draw a new round from the same card and clear all play state.
    pub fn restart<R: Rng>(&mut self, round_size: usize, rng: &mut R) -> Result<()> {
        let selected = sample_round(&self.card, round_size, rng);
        self.round = build_match_round(&selected, rng)?;
        self.selected = None;
        self.matched.clear();
        self.incorrect.clear();
        self.stats = MatchStats::default();
        log::debug!("Restarted match round with {} pairs", self.round.pair_count());
        Ok(())
    }

    pub fn card(&self) -> &[WordPair] {
        &self.card
    }

    pub fn round(&self) -> &MatchRound {
        &self.round
    }

    pub fn selected(&self) -> Option<&Token> {
        self.selected.as_ref()
    }

    pub fn stats(&self) -> MatchStats {
        self.stats
    }

    pub fn is_matched(&self, pair_id: usize) -> bool {
        self.matched.contains(&pair_id)
    }

    /// Pairs involved in a wrong attempt and not matched since.
    pub fn is_flagged_incorrect(&self, pair_id: usize) -> bool {
        self.incorrect.contains(&pair_id)
    }

    pub fn matched_count(&self) -> usize {
        self.matched.len()
    }

    pub fn is_complete(&self) -> bool {
        self.matched.len() == self.round.pair_count()
    }

    /// Record when play began.
    pub fn start_clock(&mut self, now_ms: u64) {
        self.stats.started_at_ms = Some(now_ms);
        self.stats.finished_at_ms = None;
    }

    /// Handle a tap on the token with `token_id`.
    pub fn select(&mut self, token_id: &str) -> Result<SelectOutcome> {
        self.select_inner(token_id, None)
    }

    /// Like [`select`](Self::select), and stamps `now_ms` as the finish time
    /// when this tap completes the round.
    pub fn select_at(&mut self, token_id: &str, now_ms: u64) -> Result<SelectOutcome> {
        self.select_inner(token_id, Some(now_ms))
    }

    fn select_inner(&mut self, token_id: &str, now_ms: Option<u64>) -> Result<SelectOutcome> {
        let token = match self.round.token(token_id) {
            Some(t) => t.clone(),
            None => {
                log::warn!("Unknown token id {token_id} in match round");
                return Err(GameError::invalid(format!("unknown token id `{token_id}`")));
            }
        };

        if self.matched.contains(&token.pair_id) {
            return Ok(SelectOutcome::Ignored);
        }

        let first = match self.selected.take() {
            None => {
                self.selected = Some(token);
                return Ok(SelectOutcome::Selected);
            }
            Some(first) => first,
        };

        if first.id == token.id {
            return Ok(SelectOutcome::Deselected);
        }

        self.stats.attempts += 1;
        if first.matches(&token) {
            self.matched.insert(token.pair_id);
            self.incorrect.remove(&token.pair_id);
            self.stats.correct_matches += 1;
            if self.is_complete() {
                self.stats.finished_at_ms = now_ms;
            }
            Ok(SelectOutcome::Matched(token.pair_id))
        } else {
            self.incorrect.insert(first.pair_id);
            self.incorrect.insert(token.pair_id);
            Ok(SelectOutcome::Mismatched(first.pair_id, token.pair_id))
        }
    }
}
