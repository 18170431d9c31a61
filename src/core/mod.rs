//! Core engine types: players, configuration, RNG, errors.
//!
//! Everything here is independent of card content and round rules.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{GameConfig, DEFAULT_HAND_SIZE, DEFAULT_ROUNDS_PER_GAME};
pub use error::{GameError, Result};
pub use player::{Player, PlayerId, PlayerMap, Role};
pub use rng::GameRng;
