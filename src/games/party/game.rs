//! Party game implementation.

use tracing::{debug, info};

use crate::cards::{CardPack, WhiteCard};
use crate::core::{GameConfig, GameError, GameRng, Player, PlayerId, PlayerMap, Result, Role};
use crate::deck::Deck;
use crate::rules::{Choice, Chooser, GameResult, Phase, Round, RoundOutcome};

/// A game in progress: deck, players and the current round.
///
/// Drive it step by step (`start_round`, `submit`, `judge`) or a whole round
/// at a time with `play_round`.
#[derive(Clone, Debug)]
pub struct PartyGame {
    config: GameConfig,
    deck: Deck,
    players: PlayerMap<Player>,
    rng: GameRng,
    phase: Phase,
    round: Option<Round>,
    rounds_played: u32,
    last_judge: Option<PlayerId>,
}

impl PartyGame {
    /// Create a game and deal every hand.
    ///
    /// Seeds the RNG from `config.seed`, or from the OS when absent.
    pub fn new(config: GameConfig, pack: &CardPack) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Self::with_rng(config, pack, rng)
    }

    /// Create a game with an explicit RNG and deal every hand.
    pub fn with_rng(config: GameConfig, pack: &CardPack, rng: GameRng) -> Result<Self> {
        config.validate()?;
        if pack.max_pick() > config.hand_size {
            return Err(GameError::InvalidConfig(format!(
                "pack {} has a black card asking for {} cards but hands hold {}",
                pack.code_name,
                pack.max_pick(),
                config.hand_size
            )));
        }

        let names = &config.player_names;
        let players = PlayerMap::new(names.len(), |id| Player::new(id, names[id.index()].clone()));

        let mut game = Self {
            deck: Deck::from_pack(pack),
            players,
            rng,
            phase: Phase::Setup,
            round: None,
            rounds_played: 0,
            last_judge: None,
            config,
        };
        game.check_supply()?;
        game.deal()?;

        info!(
            players = game.players.player_count(),
            seed = game.rng.seed(),
            pack = %pack.code_name,
            "new game"
        );
        Ok(game)
    }

    /// Reject a game the available cards cannot finish.
    ///
    /// Counts a full deal plus a whole game of refills in which every black
    /// card asks for the largest pick left in the deck.
    fn check_supply(&self) -> Result<()> {
        let players = self.players.player_count();
        let rounds = self.config.rounds_per_game as usize;
        let max_pick = self
            .deck
            .black()
            .available()
            .iter()
            .map(|c| c.pick)
            .max()
            .unwrap_or(0);

        let white_needed = players * self.config.hand_size + rounds * (players - 1) * max_pick;
        let white = self.deck.white().available().len();
        let black = self.deck.black().available().len();

        if white < white_needed || black < rounds {
            return Err(GameError::InvalidConfig(format!(
                "{} players and {} rounds need {} white and {} black cards, the deck has {} and {}",
                players, rounds, white_needed, rounds, white, black
            )));
        }
        Ok(())
    }

    /// Top every hand up to the configured hand size, player by player.
    fn deal(&mut self) -> Result<()> {
        let hand_size = self.config.hand_size;
        for player in self.players.values_mut() {
            let missing = hand_size.saturating_sub(player.hand.len());
            let cards = self.deck.draw_white_cards(missing, &mut self.rng)?;
            player.hand.extend(cards);
        }
        Ok(())
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id)
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The round in progress, `None` during setup.
    #[must_use]
    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// Completed rounds in the current game.
    #[must_use]
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Seed of the game's RNG, for replaying it.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Players who still have to submit this round.
    #[must_use]
    pub fn pending_players(&self) -> Vec<PlayerId> {
        match (&self.round, self.phase) {
            (Some(round), Phase::PlayerTurns) => self
                .players
                .player_ids()
                .filter(|&p| p != round.judge && !round.has_submitted(p))
                .collect(),
            _ => Vec::new(),
        }
    }

    fn active_round(&self, expected: Phase) -> Result<&Round> {
        if self.phase != expected {
            return Err(GameError::WrongPhase {
                expected,
                actual: self.phase,
            });
        }
        self.round.as_ref().ok_or(GameError::WrongPhase {
            expected,
            actual: Phase::Setup,
        })
    }

    // === Round steps ===

    /// Pick a judge, draw a black card and open submissions.
    pub fn start_round(&mut self) -> Result<&Round> {
        if self.phase != Phase::Setup {
            return Err(GameError::WrongPhase {
                expected: Phase::Setup,
                actual: self.phase,
            });
        }

        let judge = self.choose_judge();
        let black = self.deck.draw_black_card(&mut self.rng)?;

        for player in self.players.values_mut() {
            player.role = if player.id == judge {
                Role::Judge
            } else {
                Role::Player
            };
        }
        self.last_judge = Some(judge);

        let number = self.rounds_played + 1;
        info!(
            round = number,
            judge = %self.players[judge].name,
            black = %black.text,
            "round started"
        );

        self.phase = Phase::PlayerTurns;
        Ok(self.round.insert(Round::new(number, judge, black)))
    }

    /// Uniformly random judge, never the previous one when there is a choice.
    fn choose_judge(&mut self) -> PlayerId {
        let count = self.players.player_count();
        loop {
            let candidate = PlayerId::new(self.rng.gen_range_usize(0..count) as u8);
            if count == 1 || Some(candidate) != self.last_judge {
                debug!(judge = %candidate, "judge selected");
                return candidate;
            }
            debug!(rejected = %candidate, "judge repeats last round, reselecting");
        }
    }

    /// Submit the cards at `indices` of `player`'s hand.
    ///
    /// The cards leave the hand immediately. When the last player submits,
    /// the submissions are shuffled and the judge's turn begins.
    pub fn submit(&mut self, player: PlayerId, indices: &[usize]) -> Result<()> {
        let round = self.active_round(Phase::PlayerTurns)?;
        let hand_size = self
            .players
            .get(player)
            .ok_or(GameError::NotAPlayer(player))?
            .hand
            .len();

        if player == round.judge {
            return Err(GameError::JudgeCannotSubmit(player));
        }
        if round.has_submitted(player) {
            return Err(GameError::AlreadySubmitted(player));
        }
        validate_indices(indices, round.pick(), hand_size)?;

        let cards: Choice = self.players[player].take_cards(indices).into_iter().collect();
        debug!(player = %player, cards = cards.len(), "submitted");

        let submitters = self.players.player_count() - 1;
        if let Some(round) = self.round.as_mut() {
            round.record(player, cards);
            if round.submitted_count() == submitters {
                round.present(&mut self.rng);
                self.phase = Phase::JudgeTurn;
            }
        }
        Ok(())
    }

    /// The judge picks the submission at `index` in presentation order.
    ///
    /// Scores the round, refills every hand and returns to setup.
    pub fn judge(&mut self, index: usize) -> Result<RoundOutcome> {
        let round = self.active_round(Phase::JudgeTurn)?;
        let count = round.presented_count();
        if index >= count {
            return Err(GameError::InvalidSubmissionIndex { index, count });
        }
        let winner = round.owner_of(index).ok_or(GameError::MissingWinner)?;
        if self.players.get(winner).is_none() {
            return Err(GameError::MissingWinner);
        }

        self.phase = Phase::Scoring;
        let mut round = self.round.take().ok_or(GameError::MissingWinner)?;
        let mut choices = round.take_choices();
        let cards: Vec<WhiteCard> = choices
            .remove(&winner)
            .ok_or(GameError::MissingWinner)?
            .into_vec();

        self.players[winner].score += 1;
        self.rounds_played += 1;
        self.deal()?;

        info!(
            round = round.number,
            winner = %self.players[winner].name,
            answer = %round.black.fill(&cards),
            "round won"
        );

        self.phase = Phase::Setup;
        Ok(RoundOutcome {
            round: round.number,
            judge: round.judge,
            black: round.black,
            winner,
            cards,
        })
    }

    /// Play one full round, asking `chooser` for every decision.
    ///
    /// Rejected choices are reported to the chooser and asked again; any
    /// other error ends the round.
    pub fn play_round<C: Chooser + ?Sized>(&mut self, chooser: &mut C) -> Result<RoundOutcome> {
        let round = self.start_round()?;
        let judge = round.judge;
        let black = round.black.clone();

        for player in self.pending_players() {
            loop {
                let indices = chooser.choose_cards(&self.players[player], &black)?;
                match self.submit(player, &indices) {
                    Ok(()) => break,
                    Err(e) if e.is_retryable() => chooser.rejected(&self.players[player], &e),
                    Err(e) => return Err(e),
                }
            }
        }

        loop {
            let index = {
                let round = self.active_round(Phase::JudgeTurn)?;
                let submissions: Vec<&[WhiteCard]> =
                    round.presented().into_iter().map(|c| c.as_slice()).collect();
                chooser.choose_winner(&self.players[judge], &black, &submissions)?
            };
            match self.judge(index) {
                Ok(outcome) => return Ok(outcome),
                Err(e) if e.is_retryable() => chooser.rejected(&self.players[judge], &e),
                Err(e) => return Err(e),
            }
        }
    }

    // === Game end ===

    /// `Some(result)` once the configured number of rounds has been played.
    #[must_use]
    pub fn is_terminal(&self) -> Option<GameResult> {
        if self.phase == Phase::Setup && self.rounds_played >= self.config.rounds_per_game {
            Some(self.leaders())
        } else {
            None
        }
    }

    /// Players holding the top score right now.
    #[must_use]
    pub fn leaders(&self) -> GameResult {
        let best = self.players.iter().map(|(_, p)| p.score).max().unwrap_or(0);
        let mut top: Vec<PlayerId> = self
            .players
            .iter()
            .filter(|(_, p)| p.score == best)
            .map(|(id, _)| id)
            .collect();

        if top.len() == 1 {
            GameResult::Winner(top.remove(0))
        } else {
            GameResult::Winners(top)
        }
    }

    /// Players by score, highest first; ties keep seating order.
    #[must_use]
    pub fn standings(&self) -> Vec<&Player> {
        let mut players: Vec<&Player> = self.players.iter().map(|(_, p)| p).collect();
        players.sort_by(|a, b| b.score.cmp(&a.score).then(a.id.cmp(&b.id)));
        players
    }

    /// Start a new game with the same players: fresh hands, scores kept.
    ///
    /// Any round in progress is abandoned. Old hands stay in the used pool.
    /// Fails with `InvalidConfig`, changing nothing, when the cards left
    /// cannot last another game.
    pub fn reset_hands(&mut self) -> Result<()> {
        self.check_supply()?;
        self.round = None;
        self.phase = Phase::Setup;
        self.rounds_played = 0;
        for player in self.players.values_mut() {
            player.hand.clear();
            player.role = Role::Player;
        }
        self.deal()?;
        info!(
            white_left = self.deck.white().available().len(),
            "hands reset for a new game"
        );
        Ok(())
    }
}

/// Exactly `pick` distinct indices, each inside the hand.
fn validate_indices(indices: &[usize], pick: usize, hand_size: usize) -> Result<()> {
    if indices.len() != pick {
        return Err(GameError::WrongCardCount {
            expected: pick,
            got: indices.len(),
        });
    }
    for (i, &index) in indices.iter().enumerate() {
        if index >= hand_size {
            return Err(GameError::InvalidCardIndex { index, hand_size });
        }
        if indices[..i].contains(&index) {
            return Err(GameError::DuplicateCardIndex(index));
        }
    }
    Ok(())
}
