use rand::{rngs::StdRng, RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::game_engine::{
    cards::validate_card,
    config::GameConfig,
    error::Result,
    games::{
        blank_puzzle::{build_blank_puzzle_with, BlankPuzzle},
        matching::MatchSession,
        translation::TranslationSession,
    },
    models::{Direction, WordPair},
};

/// What to start, with the data the game needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum GameMode {
    Matching { pairs: Vec<WordPair> },
    Translation { pairs: Vec<WordPair>, direction: Direction },
    BlankPuzzle { text: String },
}

impl GameMode {
    fn prefix(&self) -> &'static str {
        match self {
            GameMode::Matching { .. }    => "MR",
            GameMode::Translation { .. } => "TR",
            GameMode::BlankPuzzle { .. } => "BP",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRequest {
    pub mode: GameMode,
    #[serde(default)]
    pub config: GameConfig,
    /// `Some` makes the whole round reproducible.
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

impl GameRequest {
    /// Default config, entropy-seeded.
    pub fn new(mode: GameMode) -> Self {
        GameRequest {
            mode,
            config: GameConfig::default(),
            rng_seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }
}

#[derive(Debug, Clone)]
pub enum ActiveGame {
    Matching(MatchSession),
    Translation(TranslationSession),
    BlankPuzzle(BlankPuzzle),
}

/// A started game plus the RNG stream it was built from.
///
/// Keep passing `rng` to the session's methods so a seeded round stays
/// reproducible through play.
#[derive(Debug, Clone)]
pub struct GameRound {
    pub round_id: String,
    pub game: ActiveGame,
    pub rng: StdRng,
}

fn make_round_id(mode: &GameMode, rng: &mut impl RngCore) -> String {
    format!("{}-{:08X}", mode.prefix(), rng.next_u32())
}

/// Build a fresh round for the requested game.
pub fn start_game(request: GameRequest) -> Result<GameRound> {
    request.config.validate()?;

    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };

    let round_id = make_round_id(&request.mode, &mut rng);
    let config = request.config;

    let game = match request.mode {
        GameMode::Matching { pairs } => {
            validate_card(&pairs, &config)?;
            ActiveGame::Matching(MatchSession::new(pairs, config.round_size, &mut rng)?)
        }
        GameMode::Translation { pairs, direction } => {
            validate_card(&pairs, &config)?;
            ActiveGame::Translation(TranslationSession::new(
                pairs,
                direction,
                config.round_size,
                &mut rng,
            )?)
        }
        GameMode::BlankPuzzle { text } => {
            ActiveGame::BlankPuzzle(build_blank_puzzle_with(&text, &config.puzzle, &mut rng)?)
        }
    };

    log::debug!("Started round {round_id}");
    Ok(GameRound { round_id, game, rng })
}
