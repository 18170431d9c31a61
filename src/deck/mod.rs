//! Deck: one pool of black cards and one pool of white cards.
//!
//! ## Key Types
//!
//! - `Pool`: available/used tracking for one kind of card
//! - `Deck`: the two pools a game draws from
//!
//! The deck is built once from a `CardPack` and afterwards only changes
//! through draws.

pub mod pool;

pub use pool::{draw_with_tracking, Drawn, Pool};

use tracing::debug;

use crate::cards::{BlackCard, CardPack, WhiteCard};
use crate::core::error::{GameError, Result};
use crate::core::rng::GameRng;

/// Black and white card pools for one game.
#[derive(Clone, Debug, Default)]
pub struct Deck {
    black: Pool<BlackCard>,
    white: Pool<WhiteCard>,
}

impl Deck {
    /// Build a deck with every card of the pack available.
    #[must_use]
    pub fn from_pack(pack: &CardPack) -> Self {
        Self {
            black: Pool::new(pack.black_cards.iter().cloned()),
            white: Pool::new(pack.white_cards.iter().cloned()),
        }
    }

    /// Draw `n` random black cards.
    pub fn draw_black_cards(&mut self, n: usize, rng: &mut GameRng) -> Result<Vec<BlackCard>> {
        let drawn = self.black.draw(n, rng)?;
        self.black = drawn.pool;
        debug!(n, left = self.black.available().len(), "drew black cards");
        Ok(drawn.cards)
    }

    /// Draw `n` random white cards.
    pub fn draw_white_cards(&mut self, n: usize, rng: &mut GameRng) -> Result<Vec<WhiteCard>> {
        let drawn = self.white.draw(n, rng)?;
        self.white = drawn.pool;
        debug!(n, left = self.white.available().len(), "drew white cards");
        Ok(drawn.cards)
    }

    /// Draw a single black card.
    pub fn draw_black_card(&mut self, rng: &mut GameRng) -> Result<BlackCard> {
        self.draw_black_cards(1, rng)?
            .pop()
            .ok_or(GameError::PoolExhausted { requested: 1, available: 0 })
    }

    #[must_use]
    pub fn black(&self) -> &Pool<BlackCard> {
        &self.black
    }

    #[must_use]
    pub fn white(&self) -> &Pool<WhiteCard> {
        &self.white
    }

    /// Cards of both colors, available and used.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.black.total() + self.white.total()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pack() -> CardPack {
        CardPack {
            name: "Test".into(),
            code_name: "test".into(),
            official: false,
            black_cards: vec![BlackCard::new("_?", 1), BlackCard::new("_ and _.", 2)],
            white_cards: (0..10).map(|i| WhiteCard::new(format!("w{}", i))).collect(),
        }
    }

    #[test]
    fn test_from_pack() {
        let deck = Deck::from_pack(&pack());
        assert_eq!(deck.black().available().len(), 2);
        assert_eq!(deck.white().available().len(), 10);
        assert!(deck.black().used().is_empty());
        assert_eq!(deck.total_cards(), 12);
    }

    #[test]
    fn test_draw_white_moves_to_used() {
        let mut deck = Deck::from_pack(&pack());
        let mut rng = GameRng::new(1);

        let drawn = deck.draw_white_cards(4, &mut rng).unwrap();

        assert_eq!(drawn.len(), 4);
        assert_eq!(deck.white().available().len(), 6);
        assert_eq!(deck.white().used().len(), 4);
        for card in &drawn {
            assert!(!deck.white().available().contains(card));
            assert!(deck.white().used().contains(card));
        }
        // Black pool untouched
        assert_eq!(deck.black().available().len(), 2);
    }

    #[test]
    fn test_draw_black_card() {
        let mut deck = Deck::from_pack(&pack());
        let mut rng = GameRng::new(1);

        let first = deck.draw_black_card(&mut rng).unwrap();
        let second = deck.draw_black_card(&mut rng).unwrap();
        assert_ne!(first, second);

        let err = deck.draw_black_card(&mut rng).unwrap_err();
        assert!(matches!(err, GameError::PoolExhausted { requested: 1, available: 0 }));
        assert_eq!(deck.total_cards(), 12);
    }

    #[test]
    fn test_failed_draw_keeps_deck() {
        let mut deck = Deck::from_pack(&pack());
        let mut rng = GameRng::new(1);
        deck.draw_white_cards(8, &mut rng).unwrap();

        assert!(deck.draw_white_cards(3, &mut rng).is_err());

        assert_eq!(deck.white().available().len(), 2);
        assert_eq!(deck.white().used().len(), 8);
    }
}
