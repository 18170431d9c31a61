//! Game implementations built on the core, deck and rules modules.

pub mod party;

pub use party::{PartyGame, RandomChooser};
