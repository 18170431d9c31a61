//! Card packs: the JSON files cards are loaded from.
//!
//! ## Format
//!
//! ```json
//! {
//!   "name": "Party Starter",
//!   "codeName": "party",
//!   "official": true,
//!   "blackCards": [{ "text": "Why am I sticky?", "pick": 1 }],
//!   "whiteCards": ["Jam.", "Regret."]
//! }
//! ```
//!
//! `blackCards` and `whiteCards` default to empty. Card text is HTML
//! unescaped while parsing.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::definition::{BlackCard, WhiteCard};
use crate::core::error::{GameError, Result};

/// The pack compiled into the binary.
const BUILTIN_PACK: &str = include_str!("../../decks/party.json");

/// A named collection of black and white cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardPack {
    pub name: String,

    #[serde(rename = "codeName")]
    pub code_name: String,

    pub official: bool,

    #[serde(rename = "blackCards", default)]
    pub black_cards: Vec<BlackCard>,

    #[serde(rename = "whiteCards", default)]
    pub white_cards: Vec<WhiteCard>,
}

impl CardPack {
    /// Parse and validate a pack from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        let pack: CardPack = serde_json::from_str(json)?;
        pack.validate()?;
        debug!(
            pack = %pack.code_name,
            black = pack.black_cards.len(),
            white = pack.white_cards.len(),
            "loaded card pack"
        );
        Ok(pack)
    }

    /// Read, parse and validate a pack file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref()).map_err(GameError::PackRead)?;
        Self::from_json(&json)
    }

    /// The pack shipped with the game.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_PACK)
    }

    /// Combine packs into one, keeping card order pack by pack.
    ///
    /// The result is official only if every input is.
    pub fn merge(packs: impl IntoIterator<Item = CardPack>) -> Result<Self> {
        let mut packs = packs.into_iter();
        let mut merged = packs
            .next()
            .ok_or_else(|| GameError::InvalidPack("no packs to merge".into()))?;

        for pack in packs {
            merged.name = format!("{} + {}", merged.name, pack.name);
            merged.code_name = format!("{}+{}", merged.code_name, pack.code_name);
            merged.official &= pack.official;
            merged.black_cards.extend(pack.black_cards);
            merged.white_cards.extend(pack.white_cards);
        }

        Ok(merged)
    }

    /// Check per-card rules that JSON parsing cannot express.
    pub fn validate(&self) -> Result<()> {
        if let Some(card) = self.black_cards.iter().find(|c| c.pick == 0) {
            return Err(GameError::InvalidPack(format!(
                "black card {:?} in {} asks for 0 cards",
                card.text, self.code_name
            )));
        }
        Ok(())
    }

    /// Largest pick count among the black cards, 0 for a pack without any.
    #[must_use]
    pub fn max_pick(&self) -> usize {
        self.black_cards.iter().map(|c| c.pick).max().unwrap_or(0)
    }
}
