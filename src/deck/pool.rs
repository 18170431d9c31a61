//! The drawing/tracking primitive.
//!
//! A `Pool` is a pair of sequences: cards still available and cards already
//! drawn. Drawing moves cards from the first to the second; no card is ever
//! created or destroyed, so `available.len() + used.len()` never changes.
//!
//! Pools are persistent (`im::Vector`), so a draw returns a *new* pool and
//! leaves the old value intact. Callers commit the new pool only when the
//! draw succeeded, which makes every draw all-or-nothing.
//!
//! ```
//! use cardparty::core::GameRng;
//! use cardparty::deck::Pool;
//!
//! let mut rng = GameRng::new(7);
//! let pool = Pool::new([1, 2, 3]);
//!
//! let drawn = pool.draw(2, &mut rng).unwrap();
//! assert_eq!(drawn.cards.len(), 2);
//! assert_eq!(drawn.pool.available().len(), 1);
//! assert_eq!(drawn.pool.used().len(), 2);
//!
//! // The original pool is untouched.
//! assert_eq!(pool.available().len(), 3);
//! ```

use im::Vector;

use crate::core::error::{GameError, Result};
use crate::core::rng::GameRng;

/// Available and used cards of one kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pool<T: Clone> {
    available: Vector<T>,
    used: Vector<T>,
}

/// Result of a successful draw: the drawn cards in draw order and the pool
/// they were drawn from, updated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Drawn<T: Clone> {
    pub cards: Vec<T>,
    pub pool: Pool<T>,
}

impl<T: Clone> Default for Pool<T> {
    fn default() -> Self {
        Self {
            available: Vector::new(),
            used: Vector::new(),
        }
    }
}

impl<T: Clone> Pool<T> {
    /// Create a pool with every card available.
    pub fn new(cards: impl IntoIterator<Item = T>) -> Self {
        Self {
            available: cards.into_iter().collect(),
            used: Vector::new(),
        }
    }

    /// Create a pool from explicit available and used sequences.
    pub fn from_parts(available: Vector<T>, used: Vector<T>) -> Self {
        Self { available, used }
    }

    /// Cards that can still be drawn.
    #[must_use]
    pub fn available(&self) -> &Vector<T> {
        &self.available
    }

    /// Cards already drawn, oldest first.
    #[must_use]
    pub fn used(&self) -> &Vector<T> {
        &self.used
    }

    /// Total cards tracked. Constant across draws.
    #[must_use]
    pub fn total(&self) -> usize {
        self.available.len() + self.used.len()
    }

    /// Draw `total` cards uniformly at random without replacement.
    ///
    /// Returns the drawn cards together with the updated pool; `self` is not
    /// modified. Fails with `PoolExhausted` if fewer than `total` cards are
    /// available.
    pub fn draw(&self, total: usize, rng: &mut GameRng) -> Result<Drawn<T>> {
        draw_with_tracking(self.available.clone(), self.used.clone(), total, rng)
    }
}

/// Move `total` random cards from `available` to the end of `used`.
///
/// Cards are picked uniformly at random without replacement and appended to
/// `used` in the order they were picked; the same order is returned. The
/// size check runs before anything moves.
pub fn draw_with_tracking<T: Clone>(
    mut available: Vector<T>,
    mut used: Vector<T>,
    total: usize,
    rng: &mut GameRng,
) -> Result<Drawn<T>> {
    if total > available.len() {
        return Err(GameError::PoolExhausted {
            requested: total,
            available: available.len(),
        });
    }

    let mut cards = Vec::with_capacity(total);
    for _ in 0..total {
        let index = rng.gen_range_usize(0..available.len());
        let card = available.remove(index);
        used.push_back(card.clone());
        cards.push(card);
    }

    Ok(Drawn {
        cards,
        pool: Pool { available, used },
    })
}
