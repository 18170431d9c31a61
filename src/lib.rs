//! # cardparty
//!
//! A terminal party card game. Each round one player judges, a black card
//! asks a question, everyone else answers with white cards from their hand,
//! and the judge picks the funniest answer.
//!
//! ## Design Principles
//!
//! 1. **Nothing is lost**: every card is either available or used in its
//!    pool. Draws move cards, they never create or destroy them.
//!
//! 2. **All-or-nothing**: a failed draw or a rejected move leaves the game
//!    exactly as it was.
//!
//! 3. **Injected randomness**: every random choice goes through a seeded
//!    `GameRng`, so a seed replays a whole game.
//!
//! ## Modules
//!
//! - `core`: players, configuration, RNG, errors
//! - `cards`: card text and JSON card packs
//! - `deck`: the available/used pools cards are drawn from
//! - `rules`: round phases and the `Chooser` decision interface
//! - `games`: the party game itself and its bots
//! - `cli`: terminal prompts for the `cardparty` binary

pub mod core;
pub mod cards;
pub mod deck;
pub mod rules;
pub mod games;
pub mod cli;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, GameError, GameRng, Player, PlayerId, PlayerMap, Result, Role,
};

pub use crate::cards::{BlackCard, CardPack, WhiteCard};

pub use crate::deck::{draw_with_tracking, Deck, Drawn, Pool};

pub use crate::rules::{Choice, Chooser, GameResult, Phase, Round, RoundOutcome};

pub use crate::games::{PartyGame, RandomChooser};
