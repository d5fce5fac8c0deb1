//! # kata_drill_gen
//!
//! Round generators for an English/Indonesian vocabulary trainer.
//!
//! The mobile app fetches a card's word pairs from its API and hands them to
//! this crate, which builds randomised rounds for three mini-games:
//!
//! - **Matching**: two independently shuffled columns of tokens; tap an
//!   English word and its Indonesian partner.
//! - **Translation**: a prompt with four options (one correct, three
//!   distractors drawn from the rest of the card).
//! - **Blank puzzle**: a free text with some longer words removed (never two
//!   neighbours) and a shuffled bank to place them back from.
//!
//! ## How it works
//!
//! 1. Build a [`GameRequest`] with a [`GameMode`], an optional [`GameConfig`]
//!    and an optional RNG seed.
//! 2. Call [`start_game`], which samples the round, shuffles, and returns a
//!    [`GameRound`] holding the live session and the RNG stream.
//! 3. Drive the session (`select`, `answer`, `place`, `check_answers`) and
//!    render it with the helpers in [`game_engine::view`].
//!
//! All builders are also usable directly and take the RNG as a parameter, so
//! a seeded `StdRng` reproduces the exact same round.
//!
//! ## Quick start
//!
//! ```rust
//! use kata_drill_gen::{start_game, ActiveGame, GameMode, GameRequest, WordPair};
//!
//! let pairs = vec![
//!     WordPair::new("cat", "kucing"),
//!     WordPair::new("dog", "anjing"),
//!     WordPair::new("sun", "matahari"),
//! ];
//! let mut round = start_game(GameRequest::new(GameMode::Matching { pairs }).with_seed(42)).unwrap();
//! println!("Round {}", round.round_id);
//!
//! if let ActiveGame::Matching(session) = &mut round.game {
//!     session.select("src-0").unwrap();
//!     session.select("tgt-0").unwrap();
//!     assert_eq!(session.matched_count(), 1);
//! }
//! ```

pub mod game_engine;

// Convenience re-exports so callers can use `kata_drill_gen::start_game`
// directly without reaching into `game_engine::`.
pub use game_engine::{
    build_blank_puzzle, build_choice_set, build_match_round, sample_round, shuffled,
    start_game, ActiveGame, AnswerOption, BankEntry, BlankPuzzle, Direction, GameConfig,
    GameError, GameMode, GameRequest, GameRound, Language, MatchRound, MatchSession, Score,
    SelectOutcome, Slot, Token, TranslationSession, WordPair,
};
