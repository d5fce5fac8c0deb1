//! Multiple-choice translation game.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::game_engine::{
    error::{GameError, Result},
    models::{AnswerOption, Direction, WordPair},
    sampler::sample_round,
    shuffle::shuffle_in_place,
};

/// Wrong answers offered next to the correct one.
pub const DISTRACTOR_COUNT: usize = 3;

/// Build the four answer options for `prompt`.
///
/// Distractors are translations of other pairs in `pool`. Candidates whose
/// text equals the correct answer, or repeats another candidate, are dropped
/// before sampling so no two options ever read the same.
pub fn build_choice_set<R: Rng>(
    prompt: &WordPair,
    pool: &[WordPair],
    direction: Direction,
    rng: &mut R,
) -> Result<Vec<AnswerOption>> {
    let correct = prompt.translation(direction);

    let mut candidates: Vec<&str> = Vec::new();
    for pair in pool.iter().filter(|p| *p != prompt) {
        let text = pair.translation(direction);
        if text != correct && !candidates.contains(&text) {
            candidates.push(text);
        }
    }

    if candidates.len() < DISTRACTOR_COUNT {
        log::warn!(
            "Cannot build choice set for `{}`: only {} distinct distractors",
            prompt.prompt(direction),
            candidates.len()
        );
        return Err(GameError::InsufficientPool {
            available: candidates.len(),
            required: DISTRACTOR_COUNT,
        });
    }

    shuffle_in_place(&mut candidates, rng);

    let mut options: Vec<AnswerOption> = std::iter::once(AnswerOption {
        text: correct.to_string(),
        is_correct: true,
    })
    .chain(candidates.into_iter().take(DISTRACTOR_COUNT).map(|text| AnswerOption {
        text: text.to_string(),
        is_correct: false,
    }))
    .collect();
    shuffle_in_place(&mut options, rng);

    Ok(options)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerOutcome {
    pub correct: bool,
    pub correct_text: String,
}

/// One play-through of the translation game over a sampled set of prompts.
#[derive(Debug, Clone)]
pub struct TranslationSession {
    pool: Vec<WordPair>,
    prompts: Vec<WordPair>,
    direction: Direction,
    index: usize,
    score: usize,
    started: bool,
    options: Vec<AnswerOption>,
}

impl TranslationSession {
    pub fn new<R: Rng>(
        pool: Vec<WordPair>,
        direction: Direction,
        round_size: usize,
        rng: &mut R,
    ) -> Result<Self> {
        let prompts = sample_round(&pool, round_size, rng);
        let first = prompts
            .first()
            .ok_or_else(|| GameError::invalid("a translation session needs at least one word pair"))?;
        let options = build_choice_set(first, &pool, direction, rng)?;
        log::debug!("Started translation session with {} prompts ({direction})", prompts.len());
        Ok(TranslationSession {
            pool,
            prompts,
            direction,
            index: 0,
            score: 0,
            started: false,
            options,
        })
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn total(&self) -> usize {
        self.prompts.len()
    }

    pub fn is_complete(&self) -> bool {
        self.index >= self.prompts.len()
    }

    /// The pair being asked, or `None` once every prompt is answered.
    pub fn current_prompt(&self) -> Option<&WordPair> {
        self.prompts.get(self.index)
    }

    pub fn current_options(&self) -> &[AnswerOption] {
        &self.options
    }

    /// Answer the current prompt and move to the next one.
    pub fn answer<R: Rng>(&mut self, option_index: usize, rng: &mut R) -> Result<AnswerOutcome> {
        if self.is_complete() {
            return Err(GameError::invalid("the session is already complete"));
        }
        let chosen = self.options.get(option_index).ok_or_else(|| {
            GameError::invalid(format!("option index {option_index} out of range"))
        })?;

        let correct_text = self.prompts[self.index].translation(self.direction).to_string();
        let outcome = AnswerOutcome { correct: chosen.is_correct, correct_text };

        self.started = true;
        if outcome.correct {
            self.score += 1;
        }
        self.index += 1;

        self.options = match self.prompts.get(self.index) {
            Some(next) => build_choice_set(next, &self.pool, self.direction, rng)?,
            None => Vec::new(),
        };
        Ok(outcome)
    }

    /// Flip the translation direction. Only allowed before the first answer.
    pub fn toggle_direction<R: Rng>(&mut self, rng: &mut R) -> Result<Direction> {
        if self.started {
            return Err(GameError::invalid("cannot change mode, the game has already started"));
        }
        let direction = self.direction.flipped();
        let prompt = &self.prompts[self.index];
        self.options = build_choice_set(prompt, &self.pool, direction, rng)?;
        self.direction = direction;
        Ok(direction)
    }

    /// Start over with a fresh sample from the same pool.
    pub fn restart<R: Rng>(&mut self, round_size: usize, rng: &mut R) -> Result<()> {
        let pool = self.pool.clone();
        *self = TranslationSession::new(pool, self.direction, round_size, rng)?;
        Ok(())
    }

    pub fn prompts(&self) -> &[WordPair] {
        &self.prompts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn pool() -> Vec<WordPair> {
        vec![
            WordPair::new("cat", "kucing"),
            WordPair::new("dog", "anjing"),
            WordPair::new("sun", "matahari"),
            WordPair::new("moon", "bulan"),
            WordPair::new("star", "bintang"),
            WordPair::new("tree", "pohon"),
        ]
    }

    #[test]
    fn choice_set_has_one_correct_option() {
        let pool = pool();
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let opts = build_choice_set(&pool[0], &pool, Direction::SourceToTarget, &mut rng).unwrap();
            assert_eq!(opts.len(), 4);
            let correct: Vec<_> = opts.iter().filter(|o| o.is_correct).collect();
            assert_eq!(correct.len(), 1);
            assert_eq!(correct[0].text, "kucing");
            assert!(opts.iter().filter(|o| !o.is_correct).all(|o| o.text != "kucing"));
        }
    }

    #[test]
    fn reverse_direction_asks_for_english() {
        let pool = pool();
        let mut rng = StdRng::seed_from_u64(4);
        let opts = build_choice_set(&pool[1], &pool, Direction::TargetToSource, &mut rng).unwrap();
        let correct = opts.iter().find(|o| o.is_correct).unwrap();
        assert_eq!(correct.text, "dog");
    }

    #[test]
    fn duplicate_translations_never_collide_with_answer() {
        let mut pool = pool();
        pool.push(WordPair::new("kitty", "kucing"));
        pool.push(WordPair::new("hound", "anjing"));
        for seed in 0..30 {
            let mut rng = StdRng::seed_from_u64(seed);
            let opts = build_choice_set(&pool[0], &pool, Direction::SourceToTarget, &mut rng).unwrap();
            let kucing = opts.iter().filter(|o| o.text == "kucing").count();
            assert_eq!(kucing, 1);
            let mut texts: Vec<_> = opts.iter().map(|o| o.text.as_str()).collect();
            texts.sort_unstable();
            texts.dedup();
            assert_eq!(texts.len(), 4);
        }
    }

    #[test]
    fn small_pool_is_rejected() {
        let pool = &pool()[..3];
        let mut rng = StdRng::seed_from_u64(1);
        let err = build_choice_set(&pool[0], pool, Direction::SourceToTarget, &mut rng);
        assert!(matches!(
            err,
            Err(GameError::InsufficientPool { available: 2, required: 3 })
        ));
    }

    #[test]
    fn session_scores_correct_answers() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut s = TranslationSession::new(pool(), Direction::SourceToTarget, 5, &mut rng).unwrap();
        assert_eq!(s.total(), 5);
        while !s.is_complete() {
            let idx = s.current_options().iter().position(|o| o.is_correct).unwrap();
            assert!(s.answer(idx, &mut rng).unwrap().correct);
        }
        assert_eq!(s.score(), 5);
        assert!(s.current_prompt().is_none());
        assert!(s.answer(0, &mut rng).is_err());
    }

    #[test]
    fn wrong_answer_reports_correct_text() {
        let mut rng = StdRng::seed_from_u64(12);
        let mut s = TranslationSession::new(pool(), Direction::SourceToTarget, 3, &mut rng).unwrap();
        let expected = s.current_prompt().unwrap().indonesian.clone();
        let idx = s.current_options().iter().position(|o| !o.is_correct).unwrap();
        let outcome = s.answer(idx, &mut rng).unwrap();
        assert!(!outcome.correct);
        assert_eq!(outcome.correct_text, expected);
        assert_eq!(s.score(), 0);
    }

    #[test]
    fn direction_locks_after_first_answer() {
        let mut rng = StdRng::seed_from_u64(13);
        let mut s = TranslationSession::new(pool(), Direction::SourceToTarget, 3, &mut rng).unwrap();
        assert_eq!(s.toggle_direction(&mut rng).unwrap(), Direction::TargetToSource);
        let english = s.current_prompt().unwrap().english.clone();
        assert!(s.current_options().iter().any(|o| o.is_correct && o.text == english));

        s.answer(0, &mut rng).unwrap();
        assert!(s.toggle_direction(&mut rng).is_err());
    }

    #[test]
    fn restart_resets_progress() {
        let mut rng = StdRng::seed_from_u64(14);
        let mut s = TranslationSession::new(pool(), Direction::SourceToTarget, 3, &mut rng).unwrap();
        s.answer(0, &mut rng).unwrap();
        s.restart(3, &mut rng).unwrap();
        assert_eq!(s.score(), 0);
        assert!(s.current_prompt().is_some());
        assert!(s.toggle_direction(&mut rng).is_ok());
    }

    #[test]
    fn empty_pool_is_invalid() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            TranslationSession::new(Vec::new(), Direction::SourceToTarget, 5, &mut rng),
            Err(GameError::InvalidArgument(_))
        ));
    }
}
