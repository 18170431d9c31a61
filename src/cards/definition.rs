//! Card definitions - immutable card text.
//!
//! A `BlackCard` is a prompt with a pick count; a `WhiteCard` is an answer.
//! Both are plain values: once loaded from a pack their text never changes,
//! and moving a card between pools or hands moves the value itself.

use serde::{Deserialize, Serialize};

use super::text::{deserialize_unescaped, unescape};

/// Marker for a blank in black card text.
pub const BLANK: &str = "_";

/// A prompt card. Players answer it with `pick` white cards.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlackCard {
    /// Prompt text, entities already decoded.
    #[serde(deserialize_with = "deserialize_unescaped")]
    pub text: String,

    /// White cards each player must submit.
    pub pick: usize,
}

impl BlackCard {
    #[must_use]
    pub fn new(text: impl Into<String>, pick: usize) -> Self {
        Self {
            text: text.into(),
            pick,
        }
    }

    /// Fill the prompt's blanks with the given answers.
    ///
    /// Blanks are replaced left to right. Answers without a blank to land in
    /// are appended after the prompt.
    ///
    /// ```
    /// use cardparty::cards::{BlackCard, WhiteCard};
    ///
    /// let black = BlackCard::new("_ is why I can't sleep.", 1);
    /// let filled = black.fill(&[WhiteCard::new("A haunted toaster")]);
    /// assert_eq!(filled, "A haunted toaster is why I can't sleep.");
    ///
    /// let question = BlackCard::new("What's in the box?", 1);
    /// let filled = question.fill(&[WhiteCard::new("Bees")]);
    /// assert_eq!(filled, "What's in the box? Bees");
    /// ```
    #[must_use]
    pub fn fill(&self, answers: &[WhiteCard]) -> String {
        let mut answers = answers.iter();
        let mut parts = self.text.split(BLANK).peekable();
        let mut out = String::with_capacity(self.text.len());

        while let Some(part) = parts.next() {
            out.push_str(part);
            if parts.peek().is_some() {
                match answers.next() {
                    Some(answer) => out.push_str(&answer.text),
                    None => out.push_str(BLANK),
                }
            }
        }

        for answer in answers {
            out.push(' ');
            out.push_str(&answer.text);
        }

        out
    }
}

impl std::fmt::Display for BlackCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.pick > 1 {
            write!(f, "{} [pick {}]", self.text, self.pick)
        } else {
            f.write_str(&self.text)
        }
    }
}

/// An answer card.
///
/// Serialized as a bare string, matching the pack format.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct WhiteCard {
    pub text: String,
}

impl WhiteCard {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl From<String> for WhiteCard {
    fn from(raw: String) -> Self {
        Self::new(unescape(&raw))
    }
}

impl From<WhiteCard> for String {
    fn from(card: WhiteCard) -> Self {
        card.text
    }
}

impl std::fmt::Display for WhiteCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_two_blanks() {
        let black = BlackCard::new("_ + _ = trouble.", 2);
        let filled = black.fill(&[WhiteCard::new("Glitter"), WhiteCard::new("A fan")]);
        assert_eq!(filled, "Glitter + A fan = trouble.");
    }

    #[test]
    fn test_fill_missing_answer_keeps_blank() {
        let black = BlackCard::new("_ and _.", 2);
        let filled = black.fill(&[WhiteCard::new("Salt")]);
        assert_eq!(filled, "Salt and _.");
    }

    #[test]
    fn test_display_shows_pick_above_one() {
        assert_eq!(BlackCard::new("Why?", 1).to_string(), "Why?");
        assert_eq!(BlackCard::new("_ then _.", 2).to_string(), "_ then _. [pick 2]");
    }

    #[test]
    fn test_black_card_unescapes_on_load() {
        let black: BlackCard =
            serde_json::from_str(r#"{"text": "Mom&#39;s &quot;secret&quot; _.", "pick": 1}"#)
                .unwrap();
        assert_eq!(black.text, "Mom's \"secret\" _.");
        assert_eq!(black.pick, 1);
    }

    #[test]
    fn test_white_card_is_bare_string() {
        let white: WhiteCard = serde_json::from_str(r#""Fish &amp; chips""#).unwrap();
        assert_eq!(white.text, "Fish & chips");
        assert_eq!(serde_json::to_string(&white).unwrap(), r#""Fish & chips""#);
    }
}
