//! Computer players.

use crate::cards::{BlackCard, WhiteCard};
use crate::core::{GameRng, Player, Result};
use crate::rules::Chooser;

/// Plays uniformly random legal choices.
///
/// Owns its RNG so a bot never disturbs the game's draw sequence.
#[derive(Clone, Debug)]
pub struct RandomChooser {
    rng: GameRng,
}

/// Added to a game seed to get the seed of that game's bots.
const BOT_SEED_OFFSET: u64 = 0x9E37_79B9_7F4A_7C15;

impl RandomChooser {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    /// Seed for the bots of a game seeded with `game_seed`.
    ///
    /// Never equal to `game_seed`, so bots do not replay the stream the game
    /// shuffles and draws with.
    #[must_use]
    pub const fn seed_for_game(game_seed: u64) -> u64 {
        game_seed.wrapping_add(BOT_SEED_OFFSET)
    }
}

impl Chooser for RandomChooser {
    fn choose_cards(&mut self, player: &Player, black: &BlackCard) -> Result<Vec<usize>> {
        let mut indices: Vec<usize> = (0..player.hand.len()).collect();
        self.rng.shuffle(&mut indices);
        indices.truncate(black.pick);
        Ok(indices)
    }

    fn choose_winner(
        &mut self,
        _judge: &Player,
        _black: &BlackCard,
        submissions: &[&[WhiteCard]],
    ) -> Result<usize> {
        if submissions.is_empty() {
            return Ok(0);
        }
        Ok(self.rng.gen_range_usize(0..submissions.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;

    #[test]
    fn test_random_cards_are_distinct_and_in_hand() {
        let mut bot = RandomChooser::new(3);
        let mut player = Player::new(PlayerId::new(0), "bot");
        player.hand = (0..10).map(|i| WhiteCard::new(format!("w{}", i))).collect();
        let black = BlackCard::new("_, _ and _.", 3);

        for _ in 0..20 {
            let mut picked = bot.choose_cards(&player, &black).unwrap();
            assert_eq!(picked.len(), 3);
            picked.sort_unstable();
            picked.dedup();
            assert_eq!(picked.len(), 3);
            assert!(picked.iter().all(|&i| i < 10));
        }
    }

    #[test]
    fn test_bot_seed_differs_from_game_seed() {
        for seed in [0, 1, 42, u64::MAX] {
            assert_ne!(RandomChooser::seed_for_game(seed), seed);
        }

        let mut game_rng = GameRng::new(42);
        let mut bot_rng = GameRng::new(RandomChooser::seed_for_game(42));
        let game_rolls: Vec<usize> = (0..8).map(|_| game_rng.gen_range_usize(0..1000)).collect();
        let bot_rolls: Vec<usize> = (0..8).map(|_| bot_rng.gen_range_usize(0..1000)).collect();
        assert_ne!(game_rolls, bot_rolls);
    }

    #[test]
    fn test_random_winner_in_range() {
        let mut bot = RandomChooser::new(3);
        let judge = Player::new(PlayerId::new(0), "bot");
        let black = BlackCard::new("_?", 1);
        let a = [WhiteCard::new("a")];
        let b = [WhiteCard::new("b")];
        let submissions: [&[WhiteCard]; 2] = [&a, &b];

        for _ in 0..20 {
            assert!(bot.choose_winner(&judge, &black, &submissions).unwrap() < 2);
        }
    }
}
