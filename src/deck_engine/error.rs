use thiserror::Error;
use uuid::Uuid;

/// Expected, state-dependent outcomes of registry operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("Deck not found")]
    NotFound { deck_id: Uuid },

    #[error("Deck doesn't have that many cards to draw ({requested} requested, {remaining} remaining)")]
    InsufficientCards { requested: usize, remaining: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardParseError {
    #[error("empty card code")]
    Empty,

    #[error("unknown rank in card code {0:?}")]
    UnknownRank(String),

    #[error("unknown suit in card code {0:?}")]
    UnknownSuit(String),
}
