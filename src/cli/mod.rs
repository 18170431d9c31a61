//! Terminal front end: hot-seat prompts, bots, and the scoreboard.
//!
//! - `args`: command-line parsing
//! - `prompt`: re-prompting line input
//!
//! `Terminal` is the `Chooser` for a game played at one keyboard. Seats
//! marked as bots are answered by a `RandomChooser` instead of a prompt.

pub mod args;
pub mod prompt;

pub use args::{CliArgs, Command, Seat, SEED_ENV, USAGE};
pub use prompt::Prompter;

use std::io::{BufRead, Write};

use rustc_hash::FxHashSet;

use crate::cards::{BlackCard, WhiteCard};
use crate::core::{GameError, Player, PlayerId, Result};
use crate::games::{PartyGame, RandomChooser};
use crate::rules::{Chooser, GameResult, RoundOutcome};

pub struct Terminal<R, W> {
    prompter: Prompter<R, W>,
    bots: FxHashSet<PlayerId>,
    bot: RandomChooser,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    /// `bots` are the seats played by the computer, driven by `bot_seed`.
    pub fn new(input: R, output: W, bots: impl IntoIterator<Item = PlayerId>, bot_seed: u64) -> Self {
        Self {
            prompter: Prompter::new(input, output),
            bots: bots.into_iter().collect(),
            bot: RandomChooser::new(bot_seed),
        }
    }

    pub fn prompter(&mut self) -> &mut Prompter<R, W> {
        &mut self.prompter
    }

    fn is_bot(&self, player: &Player) -> bool {
        self.bots.contains(&player.id)
    }

    pub fn show_outcome(&mut self, game: &PartyGame, outcome: &RoundOutcome) -> Result<()> {
        let winner = game.player(outcome.winner).ok_or(GameError::MissingWinner)?;
        self.prompter.say("")?;
        self.prompter
            .say(format!("{} wins round {}:", winner.name, outcome.round))?;
        self.prompter.say(format!("  {}", outcome.answer()))
    }

    pub fn show_scoreboard(&mut self, game: &PartyGame) -> Result<()> {
        self.prompter.say("")?;
        self.prompter.say("Scores:")?;
        for player in game.standings() {
            self.prompter
                .say(format!("  {:>3}  {}", player.score, player.name))?;
        }
        Ok(())
    }

    pub fn show_result(&mut self, game: &PartyGame, result: &GameResult) -> Result<()> {
        let name = |id: &PlayerId| game.player(*id).map_or("?", |p| p.name.as_str());
        let line = match result {
            GameResult::Winner(id) => format!("{} wins the game!", name(id)),
            GameResult::Winners(ids) => {
                let names: Vec<&str> = ids.iter().map(name).collect();
                format!("Tie between {}!", names.join(", "))
            }
        };
        self.prompter.say("")?;
        self.prompter.say(line)
    }
}

impl<R: BufRead, W: Write> Chooser for Terminal<R, W> {
    fn choose_cards(&mut self, player: &Player, black: &BlackCard) -> Result<Vec<usize>> {
        if self.is_bot(player) {
            let picked = self.bot.choose_cards(player, black)?;
            self.prompter
                .say(format!("{} has submitted.", player.name))?;
            return Ok(picked);
        }

        self.prompter.say("")?;
        self.prompter
            .say(format!("{}, your turn. The black card is:", player.name))?;
        self.prompter.say(format!("  {}", black))?;
        for (i, card) in player.hand.iter().enumerate() {
            self.prompter.say(format!("  {:>2}. {}", i + 1, card))?;
        }

        let prompt = if black.pick == 1 {
            "Play a card:".to_owned()
        } else {
            format!("Play {} cards, in order:", black.pick)
        };
        self.prompter
            .read_indices(&prompt, player.hand.len(), black.pick)
    }

    fn choose_winner(
        &mut self,
        judge: &Player,
        black: &BlackCard,
        submissions: &[&[WhiteCard]],
    ) -> Result<usize> {
        self.prompter.say("")?;
        self.prompter
            .say(format!("{} is judging. The submissions are:", judge.name))?;
        for (i, cards) in submissions.iter().enumerate() {
            self.prompter
                .say(format!("  {:>2}. {}", i + 1, black.fill(cards)))?;
        }

        if self.is_bot(judge) {
            return self.bot.choose_winner(judge, black, submissions);
        }
        self.prompter
            .read_index(&format!("{}, pick the winner:", judge.name), submissions.len())
    }

    fn rejected(&mut self, player: &Player, error: &GameError) {
        // Nowhere to report a failed write; the next prompt will surface it.
        let _ = self
            .prompter
            .say(format!("  {}: {}, try again.", player.name, error));
    }
}

/// Play rounds until the game is over, printing each outcome.
pub fn play_game<R: BufRead, W: Write>(
    game: &mut PartyGame,
    terminal: &mut Terminal<R, W>,
) -> Result<GameResult> {
    loop {
        if let Some(result) = game.is_terminal() {
            terminal.show_scoreboard(game)?;
            terminal.show_result(game, &result)?;
            return Ok(result);
        }

        let outcome = game.play_round(terminal)?;
        terminal.show_outcome(game, &outcome)?;
        terminal.show_scoreboard(game)?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardPack;
    use crate::core::GameConfig;
    use std::io::Cursor;

    fn game(players: &[&str]) -> PartyGame {
        let config = GameConfig::new()
            .with_players(players.iter().copied())
            .with_hand_size(4)
            .with_rounds_per_game(2)
            .with_seed(5);
        PartyGame::new(config, &CardPack::builtin().unwrap()).unwrap()
    }

    #[test]
    fn test_all_bot_game() {
        let mut game = game(&["a", "b", "c"]);
        let bots: Vec<_> = game.players().player_ids().collect();
        let mut terminal = Terminal::new(Cursor::new(Vec::new()), Vec::new(), bots, 1);

        let result = play_game(&mut game, &mut terminal).unwrap();

        assert_eq!(game.rounds_played(), 2);
        let total: u32 = game.players().iter().map(|(_, p)| p.score).sum();
        assert_eq!(total, 2);
        let best = game.standings()[0].id;
        assert!(result.is_winner(best));

        let out = String::from_utf8(terminal.prompter().output().clone()).unwrap();
        assert!(out.contains("Scores:"));
    }

    #[test]
    fn test_human_answers_every_prompt() {
        // Every prompt finds a line with the right count within three lines.
        let input = "1\n1 2\n1 2 3\n".repeat(10);
        let mut game = game(&["ada", "bob"]);
        let mut terminal = Terminal::new(Cursor::new(input.into_bytes()), Vec::new(), std::iter::empty(), 1);

        let outcome = game.play_round(&mut terminal);

        assert!(outcome.is_ok());
    }

    #[test]
    fn test_closed_input_ends_round() {
        let mut game = game(&["ada", "bob"]);
        let mut terminal = Terminal::new(Cursor::new(Vec::new()), Vec::new(), std::iter::empty(), 1);

        let err = game.play_round(&mut terminal).unwrap_err();
        assert!(matches!(err, GameError::Input(_)));
    }
}
