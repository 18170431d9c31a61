//! Round rules and the decision interface.
//!
//! - `round`: phases, per-round choices and outcomes
//! - `engine`: the `Chooser` trait players and bots implement, game results

pub mod engine;
pub mod round;

pub use engine::{Chooser, GameResult};
pub use round::{Choice, Phase, Round, RoundOutcome};
