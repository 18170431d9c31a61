//! The party game: one judge per round picks the funniest answer.
//!
//! - Every player holds a hand of white cards.
//! - Each round a judge is drawn at random (never twice in a row) and a
//!   black card is revealed.
//! - Everyone else submits as many white cards as the black card asks for.
//! - The judge sees the submissions anonymously and picks a winner, who
//!   scores a point. Hands are refilled and the next round begins.

mod bots;
mod game;

pub use bots::RandomChooser;
pub use game::PartyGame;
