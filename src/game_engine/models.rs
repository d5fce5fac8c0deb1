use std::fmt;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Vocabulary entries
// ---------------------------------------------------------------------------

/// One English/Indonesian vocabulary entry as fetched from the card API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordPair {
    pub english: String,
    pub indonesian: String,
    #[serde(default, alias = "is_learned")]
    pub is_learned: bool,
}

impl WordPair {
    pub fn new(english: impl Into<String>, indonesian: impl Into<String>) -> Self {
        WordPair {
            english: english.into(),
            indonesian: indonesian.into(),
            is_learned: false,
        }
    }

    /// The side of the pair shown as the prompt for `direction`.
    pub fn prompt(&self, direction: Direction) -> &str {
        match direction {
            Direction::SourceToTarget => &self.english,
            Direction::TargetToSource => &self.indonesian,
        }
    }

    /// The side of the pair the player has to produce for `direction`.
    pub fn translation(&self, direction: Direction) -> &str {
        match direction {
            Direction::SourceToTarget => &self.indonesian,
            Direction::TargetToSource => &self.english,
        }
    }
}

/// Which column of a match round a token lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    /// English.
    Source,
    /// Indonesian.
    Target,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::Source => write!(f, "English"),
            Language::Target => write!(f, "Indonesian"),
        }
    }
}

/// Translation direction for the multiple-choice game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    SourceToTarget,
    TargetToSource,
}

impl Direction {
    pub fn flipped(self) -> Self {
        match self {
            Direction::SourceToTarget => Direction::TargetToSource,
            Direction::TargetToSource => Direction::SourceToTarget,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::SourceToTarget => write!(f, "en-to-id"),
            Direction::TargetToSource => write!(f, "id-to-en"),
        }
    }
}

// ---------------------------------------------------------------------------
// Match game
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub id: String,
    pub text: String,
    pub language: Language,
    /// Shared by the source token and the target token of the same pair.
    pub pair_id: usize,
}

impl Token {
    /// Two tokens match iff they come from the same pair and from opposite
    /// columns. Equal `pair_id` alone is not enough.
    pub fn matches(&self, other: &Token) -> bool {
        self.pair_id == other.pair_id && self.language != other.language
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRound {
    /// Source-language column.
    pub left: Vec<Token>,
    /// Target-language column, shuffled independently of `left`.
    pub right: Vec<Token>,
}

impl MatchRound {
    pub fn pair_count(&self) -> usize {
        self.left.len()
    }

    pub fn token(&self, id: &str) -> Option<&Token> {
        self.left.iter().chain(self.right.iter()).find(|t| t.id == id)
    }
}

// ---------------------------------------------------------------------------
// Choice game
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerOption {
    pub text: String,
    pub is_correct: bool,
}

// ---------------------------------------------------------------------------
// Blank puzzle
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    pub id: String,
    pub original_word: String,
    pub is_hidden: bool,
    /// Always `Some(original_word)` for visible slots.
    pub current_word: Option<String>,
}

impl Slot {
    pub fn is_correct(&self) -> bool {
        self.current_word.as_deref() == Some(self.original_word.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankEntry {
    pub id: String,
    pub word: String,
}

/// Result of grading a puzzle: hidden slots filled correctly out of all
/// hidden slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
}

impl Score {
    pub fn is_perfect(self) -> bool {
        self.correct == self.total
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.correct, self.total)
    }
}
