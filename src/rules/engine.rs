//! Decision interface and game results.
//!
//! The game engine never decides anything a player should decide. It asks a
//! `Chooser`, which may be a person at the terminal or a bot. Choices that
//! break the rules are rejected and asked again.

use crate::cards::{BlackCard, WhiteCard};
use crate::core::error::{GameError, Result};
use crate::core::player::{Player, PlayerId};

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Several players share the top score.
    Winners(Vec<PlayerId>),
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Winners(ps) => ps.contains(&player),
        }
    }
}

/// Source of player decisions.
///
/// ## Implementation Notes
///
/// - Indices are 0-based positions in the hand or in the presented list.
/// - Returning an invalid choice is allowed: the engine reports it through
///   `rejected` and asks again.
/// - Return `Err` only when no choice can ever be produced (closed input).
pub trait Chooser {
    /// Pick `black.pick` cards from `player.hand`.
    fn choose_cards(&mut self, player: &Player, black: &BlackCard) -> Result<Vec<usize>>;

    /// Pick the winning submission. `submissions` is in presentation order.
    fn choose_winner(
        &mut self,
        judge: &Player,
        black: &BlackCard,
        submissions: &[&[WhiteCard]],
    ) -> Result<usize>;

    /// Called when a choice was rejected, before asking again.
    fn rejected(&mut self, _player: &Player, _error: &GameError) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(PlayerId::new(1));
        assert!(!result.is_winner(PlayerId::new(0)));
        assert!(result.is_winner(PlayerId::new(1)));

        let tie = GameResult::Winners(vec![PlayerId::new(0), PlayerId::new(2)]);
        assert!(tie.is_winner(PlayerId::new(0)));
        assert!(!tie.is_winner(PlayerId::new(1)));
        assert!(tie.is_winner(PlayerId::new(2)));
    }
}
