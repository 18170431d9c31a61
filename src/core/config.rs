//! Game configuration.
//!
//! A `GameConfig` names the players and fixes the table rules (hand size,
//! rounds per game, optional seed). Build one with the `with_*` methods and
//! hand it to `PartyGame::new`, which calls `validate` first.

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};

/// Cards each player holds between rounds.
pub const DEFAULT_HAND_SIZE: usize = 10;

/// Rounds played before a game ends.
pub const DEFAULT_ROUNDS_PER_GAME: u32 = 5;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Display names, one per player, in seating order.
    pub player_names: Vec<String>,

    /// White cards per hand.
    pub hand_size: usize,

    /// Rounds before `is_terminal` reports a result.
    pub rounds_per_game: u32,

    /// RNG seed. `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_names: Vec::new(),
            hand_size: DEFAULT_HAND_SIZE,
            rounds_per_game: DEFAULT_ROUNDS_PER_GAME,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a configuration with default rules and no players.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a player by name.
    #[must_use]
    pub fn with_player(mut self, name: impl Into<String>) -> Self {
        self.player_names.push(name.into());
        self
    }

    /// Add several players by name.
    #[must_use]
    pub fn with_players<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.player_names.extend(names.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    #[must_use]
    pub fn with_rounds_per_game(mut self, rounds: u32) -> Self {
        self.rounds_per_game = rounds;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of configured players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_names.len()
    }

    /// Check that the configuration can produce a playable game.
    pub fn validate(&self) -> Result<()> {
        if self.player_names.len() < 2 {
            return Err(GameError::InvalidConfig(format!(
                "need at least 2 players, got {}",
                self.player_names.len()
            )));
        }
        if self.player_names.len() > 255 {
            return Err(GameError::InvalidConfig("at most 255 players supported".into()));
        }
        if self.hand_size == 0 {
            return Err(GameError::InvalidConfig("hand size must be at least 1".into()));
        }
        if self.rounds_per_game == 0 {
            return Err(GameError::InvalidConfig("a game needs at least 1 round".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::new();
        assert_eq!(config.hand_size, DEFAULT_HAND_SIZE);
        assert_eq!(config.rounds_per_game, DEFAULT_ROUNDS_PER_GAME);
        assert_eq!(config.seed, None);
        assert_eq!(config.player_count(), 0);
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new()
            .with_player("Ada")
            .with_players(["Grace", "Linus"])
            .with_hand_size(7)
            .with_rounds_per_game(3)
            .with_seed(9);

        assert_eq!(config.player_names, vec!["Ada", "Grace", "Linus"]);
        assert_eq!(config.hand_size, 7);
        assert_eq!(config.rounds_per_game, 3);
        assert_eq!(config.seed, Some(9));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_single_player() {
        let config = GameConfig::new().with_player("Solo");
        assert!(matches!(config.validate(), Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_rejects_empty_hand() {
        let config = GameConfig::new().with_players(["A", "B"]).with_hand_size(0);
        assert!(matches!(config.validate(), Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_rejects_zero_rounds() {
        let config = GameConfig::new().with_players(["A", "B"]).with_rounds_per_game(0);
        assert!(matches!(config.validate(), Err(GameError::InvalidConfig(_))));
    }
}
