use thiserror::Error;

/// Everything a round builder or a running game can reject.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("please enter at least {required} unique words to start the game (found {found})")]
    InsufficientWords { found: usize, required: usize },

    #[error("need {required} distinct distractors, the word pool only offers {available}")]
    InsufficientPool { available: usize, required: usize },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("failed to parse game config: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;

impl GameError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        GameError::InvalidArgument(msg.into())
    }
}
