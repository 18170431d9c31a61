//! Error type shared by every fallible game operation.
//!
//! Errors fall in three groups:
//! - **Fatal**: `PoolExhausted`, `MissingWinner`. The game cannot continue.
//! - **Rule violations**: a choice that breaks the rules of the current
//!   phase. Nothing is mutated, so the caller can ask again.
//! - **Setup**: bad packs or configuration, reported before play starts.

use std::fmt;

use super::player::PlayerId;
use crate::rules::Phase;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, GameError>;

#[derive(Debug)]
pub enum GameError {
    /// A draw asked for more cards than the available pool holds.
    PoolExhausted { requested: usize, available: usize },

    /// The judge's pick does not belong to any player.
    MissingWinner,

    /// An operation was attempted in the wrong phase of the round.
    WrongPhase { expected: Phase, actual: Phase },

    /// The id does not name a player in this game.
    NotAPlayer(PlayerId),

    /// The judge tried to submit answer cards.
    JudgeCannotSubmit(PlayerId),

    /// The player already has a submission this round.
    AlreadySubmitted(PlayerId),

    /// Submission size does not match the black card's pick count.
    WrongCardCount { expected: usize, got: usize },

    /// A hand index past the end of the hand.
    InvalidCardIndex { index: usize, hand_size: usize },

    /// The same hand index was given twice.
    DuplicateCardIndex(usize),

    /// The judge picked a submission that was not presented.
    InvalidSubmissionIndex { index: usize, count: usize },

    /// A card pack failed validation.
    InvalidPack(String),

    /// A card pack file could not be read.
    PackRead(std::io::Error),

    /// A card pack file is not valid pack JSON.
    PackParse(serde_json::Error),

    /// The game configuration cannot produce a playable game.
    InvalidConfig(String),

    /// Reading a player's choice failed (closed stdin, broken pipe).
    Input(std::io::Error),
}

impl GameError {
    /// Whether the error is a rejected choice that can simply be asked again.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            GameError::WrongCardCount { .. }
                | GameError::InvalidCardIndex { .. }
                | GameError::DuplicateCardIndex(_)
                | GameError::InvalidSubmissionIndex { .. }
        )
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::PoolExhausted { requested, available } => write!(
                f,
                "card pool exhausted: requested {} but only {} available",
                requested, available
            ),
            GameError::MissingWinner => write!(f, "the chosen submission has no owner"),
            GameError::WrongPhase { expected, actual } => {
                write!(f, "expected phase {:?}, game is in {:?}", expected, actual)
            }
            GameError::NotAPlayer(id) => write!(f, "{} is not in this game", id),
            GameError::JudgeCannotSubmit(id) => write!(f, "{} is judging this round", id),
            GameError::AlreadySubmitted(id) => write!(f, "{} already submitted", id),
            GameError::WrongCardCount { expected, got } => {
                write!(f, "pick {} card(s), got {}", expected, got)
            }
            GameError::InvalidCardIndex { index, hand_size } => {
                write!(f, "card {} is not in a hand of {}", index, hand_size)
            }
            GameError::DuplicateCardIndex(index) => write!(f, "card {} chosen twice", index),
            GameError::InvalidSubmissionIndex { index, count } => {
                write!(f, "submission {} is not one of {}", index, count)
            }
            GameError::InvalidPack(msg) => write!(f, "invalid card pack: {}", msg),
            GameError::PackRead(e) => write!(f, "cannot read card pack: {}", e),
            GameError::PackParse(e) => write!(f, "cannot parse card pack: {}", e),
            GameError::InvalidConfig(msg) => write!(f, "invalid game configuration: {}", msg),
            GameError::Input(e) => write!(f, "cannot read input: {}", e),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::PackRead(e) => Some(e),
            GameError::PackParse(e) => Some(e),
            GameError::Input(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for GameError {
    fn from(e: serde_json::Error) -> Self {
        GameError::PackParse(e)
    }
}
