//! Core game engine: round sampling, shuffling, and the three word games.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | Shared types: word pairs, tokens, options, slots, bank entries |
//! | `shuffle`   | Fisher-Yates shuffle over an injected RNG |
//! | `sampler`   | Bounded random subset of pairs for one session |
//! | `cards`     | Word-pair and card validation (length, duplicates, minimum pairs) |
//! | `helpers`   | Whitespace tokenising and case-insensitive unique words |
//! | `games`     | Matching, translation and blank-puzzle builders + play state |
//! | `progress`  | Learned-word counts and percentages for a card |
//! | `config`    | `GameConfig` / `PuzzleRules` with JSON loading |
//! | `error`     | `GameError` and the crate `Result` alias |
//! | `generator` | Single entry point `start_game()`: dispatches to games |
//! | `view`      | JSON payloads for the presentation layer |

pub mod cards;
pub mod config;
pub mod error;
pub mod games;
pub mod generator;
pub mod helpers;
pub mod models;
pub mod progress;
pub mod sampler;
pub mod shuffle;
pub mod view;

pub use cards::{validate_card, validate_word_pair};
pub use config::{GameConfig, PuzzleRules};
pub use error::{GameError, Result};
pub use games::{
    blank_puzzle::{build_blank_puzzle, build_blank_puzzle_with, BlankPuzzle},
    matching::{build_match_round, MatchSession, MatchStats, SelectOutcome},
    translation::{build_choice_set, AnswerOutcome, TranslationSession},
};
pub use generator::{start_game, ActiveGame, GameMode, GameRequest, GameRound};
pub use models::{
    AnswerOption, BankEntry, Direction, Language, MatchRound, Score, Slot, Token, WordPair,
};
pub use sampler::{sample_round, DEFAULT_ROUND_SIZE};
pub use shuffle::{shuffle_in_place, shuffled};
