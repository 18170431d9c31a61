//! Card system: card text and the packs it is loaded from.
//!
//! ## Key Types
//!
//! - `BlackCard`: prompt text plus how many answers it takes
//! - `WhiteCard`: answer text
//! - `CardPack`: a named set of both, parsed from JSON

pub mod definition;
pub mod pack;
pub mod text;

pub use definition::{BlackCard, WhiteCard, BLANK};
pub use pack::CardPack;
pub use text::unescape;
