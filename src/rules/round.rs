//! Per-round state: phase, judge, black card and submitted choices.
//!
//! ## Phases
//!
//! `Setup → PlayerTurns → JudgeTurn → Scoring → Setup`
//!
//! - **Setup**: no round in progress.
//! - **PlayerTurns**: a judge and a black card are chosen; other players
//!   submit white cards.
//! - **JudgeTurn**: every submission is in; the judge sees them in a
//!   shuffled order and picks one.
//! - **Scoring**: the winner gains a point and hands are refilled.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{BlackCard, WhiteCard};
use crate::core::player::PlayerId;
use crate::core::rng::GameRng;

/// Where the game is within a round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Setup,
    PlayerTurns,
    JudgeTurn,
    Scoring,
}

/// White cards one player submitted, in the order they chose them.
///
/// Black cards rarely ask for more than three answers, so this stays inline.
pub type Choice = SmallVec<[WhiteCard; 3]>;

/// State of the round in progress.
#[derive(Clone, Debug)]
pub struct Round {
    /// 1-based round number within the current game.
    pub number: u32,

    /// Player judging this round.
    pub judge: PlayerId,

    /// Prompt for this round.
    pub black: BlackCard,

    /// Submissions so far, keyed by player.
    choices: FxHashMap<PlayerId, Choice>,

    /// Presentation order for the judge. Empty until every choice is in.
    presented: Vec<PlayerId>,
}

impl Round {
    #[must_use]
    pub fn new(number: u32, judge: PlayerId, black: BlackCard) -> Self {
        Self {
            number,
            judge,
            black,
            choices: FxHashMap::default(),
            presented: Vec::new(),
        }
    }

    /// White cards each player must submit.
    #[must_use]
    pub fn pick(&self) -> usize {
        self.black.pick
    }

    #[must_use]
    pub fn has_submitted(&self, player: PlayerId) -> bool {
        self.choices.contains_key(&player)
    }

    #[must_use]
    pub fn submitted_count(&self) -> usize {
        self.choices.len()
    }

    /// The choice a player submitted, if any.
    #[must_use]
    pub fn choice(&self, player: PlayerId) -> Option<&Choice> {
        self.choices.get(&player)
    }

    pub(crate) fn record(&mut self, player: PlayerId, cards: Choice) {
        self.choices.insert(player, cards);
    }

    /// Fix a random presentation order for the judge.
    ///
    /// Submitters are sorted first so the result depends only on the RNG.
    pub(crate) fn present(&mut self, rng: &mut GameRng) {
        let mut order: Vec<PlayerId> = self.choices.keys().copied().collect();
        order.sort_unstable();
        rng.shuffle(&mut order);
        self.presented = order;
    }

    /// Submissions in the order shown to the judge, without owners.
    #[must_use]
    pub fn presented(&self) -> Vec<&Choice> {
        self.presented
            .iter()
            .filter_map(|p| self.choices.get(p))
            .collect()
    }

    /// Number of submissions shown to the judge.
    #[must_use]
    pub fn presented_count(&self) -> usize {
        self.presented.len()
    }

    /// Owner of the submission at `index` in presentation order.
    #[must_use]
    pub fn owner_of(&self, index: usize) -> Option<PlayerId> {
        self.presented
            .get(index)
            .copied()
            .filter(|p| self.choices.contains_key(p))
    }

    /// Remove and return every choice, for the scoring step.
    pub(crate) fn take_choices(&mut self) -> FxHashMap<PlayerId, Choice> {
        self.presented.clear();
        std::mem::take(&mut self.choices)
    }
}

/// What happened in a completed round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub round: u32,
    pub judge: PlayerId,
    pub black: BlackCard,
    pub winner: PlayerId,
    /// The winning white cards.
    pub cards: Vec<WhiteCard>,
}

impl RoundOutcome {
    /// The black card with the winning answers filled in.
    #[must_use]
    pub fn answer(&self) -> String {
        self.black.fill(&self.cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn choice(texts: &[&str]) -> Choice {
        texts.iter().map(|t| WhiteCard::new(*t)).collect()
    }

    #[test]
    fn test_record_and_query() {
        let mut round = Round::new(1, PlayerId::new(0), BlackCard::new("_?", 1));

        assert_eq!(round.pick(), 1);
        assert!(!round.has_submitted(PlayerId::new(1)));

        round.record(PlayerId::new(1), choice(&["a"]));

        assert!(round.has_submitted(PlayerId::new(1)));
        assert_eq!(round.submitted_count(), 1);
        assert_eq!(round.choice(PlayerId::new(1)), Some(&choice(&["a"])));
    }

    #[test]
    fn test_presented_before_present_is_empty() {
        let mut round = Round::new(1, PlayerId::new(0), BlackCard::new("_?", 1));
        round.record(PlayerId::new(1), smallvec![WhiteCard::new("a")]);

        assert!(round.presented().is_empty());
        assert_eq!(round.owner_of(0), None);
    }

    #[test]
    fn test_present_covers_every_submission() {
        let mut round = Round::new(1, PlayerId::new(0), BlackCard::new("_?", 1));
        for i in 1..6u8 {
            round.record(PlayerId::new(i), choice(&[format!("w{}", i).as_str()]));
        }

        round.present(&mut GameRng::new(5));

        assert_eq!(round.presented_count(), 5);
        let mut owners: Vec<_> = (0..5).filter_map(|i| round.owner_of(i)).collect();
        owners.sort();
        assert_eq!(owners, (1..6u8).map(PlayerId::new).collect::<Vec<_>>());
        assert_eq!(round.owner_of(5), None);

        // Presented cards line up with their owners
        for (i, cards) in round.presented().into_iter().enumerate() {
            let owner = round.owner_of(i).unwrap();
            assert_eq!(round.choice(owner), Some(cards));
        }
    }

    #[test]
    fn test_present_is_seeded() {
        let mut a = Round::new(1, PlayerId::new(0), BlackCard::new("_?", 1));
        for i in 1..8u8 {
            a.record(PlayerId::new(i), choice(&["x"]));
        }
        let mut b = a.clone();

        a.present(&mut GameRng::new(11));
        b.present(&mut GameRng::new(11));

        let order_a: Vec<_> = (0..7).map(|i| a.owner_of(i)).collect();
        let order_b: Vec<_> = (0..7).map(|i| b.owner_of(i)).collect();
        assert_eq!(order_a, order_b);
    }

    #[test]
    fn test_take_choices_empties_round() {
        let mut round = Round::new(1, PlayerId::new(0), BlackCard::new("_?", 1));
        round.record(PlayerId::new(1), choice(&["a"]));
        round.present(&mut GameRng::new(1));

        let taken = round.take_choices();

        assert_eq!(taken.len(), 1);
        assert_eq!(round.submitted_count(), 0);
        assert_eq!(round.presented_count(), 0);
    }

    #[test]
    fn test_outcome_answer() {
        let outcome = RoundOutcome {
            round: 2,
            judge: PlayerId::new(0),
            black: BlackCard::new("I blame _.", 1),
            winner: PlayerId::new(1),
            cards: vec![WhiteCard::new("the goose")],
        };
        assert_eq!(outcome.answer(), "I blame the goose.");
    }
}
