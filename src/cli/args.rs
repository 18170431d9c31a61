//! Command-line arguments.

use std::path::PathBuf;

use crate::core::{GameConfig, GameError, Result, DEFAULT_HAND_SIZE, DEFAULT_ROUNDS_PER_GAME};

/// Environment variable read for a seed when `--seed` is not given.
pub const SEED_ENV: &str = "CARDPARTY_SEED";

pub const USAGE: &str = "\
usage: cardparty [OPTIONS] NAME...

Hot-seat party card game. Every NAME is a player at this terminal.

options:
  --seed N        replay a game (default: $CARDPARTY_SEED, else random)
  --hand-size N   white cards per hand (default: 10)
  --rounds N      rounds per game (default: 5)
  --pack PATH     card pack JSON, repeatable (default: builtin pack)
  --bot NAME      add a computer player, repeatable
  -h, --help      show this message
";

/// One seat, in the order given on the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Seat {
    pub name: String,
    pub bot: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliArgs {
    pub seed: Option<u64>,
    pub hand_size: usize,
    pub rounds: u32,
    pub packs: Vec<PathBuf>,
    pub seats: Vec<Seat>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Play(CliArgs),
    Help,
}

impl CliArgs {
    /// Parse arguments (without the program name). `env_seed` is the value
    /// of `CARDPARTY_SEED`, if set.
    pub fn parse<I>(args: I, env_seed: Option<String>) -> Result<Command>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = CliArgs {
            seed: None,
            hand_size: DEFAULT_HAND_SIZE,
            rounds: DEFAULT_ROUNDS_PER_GAME,
            packs: Vec::new(),
            seats: Vec::new(),
        };

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => return Ok(Command::Help),
                "--seed" => parsed.seed = Some(number(&arg, args.next())?),
                "--hand-size" => parsed.hand_size = number(&arg, args.next())?,
                "--rounds" => parsed.rounds = number(&arg, args.next())?,
                "--pack" => parsed.packs.push(value(&arg, args.next())?.into()),
                "--bot" => parsed.seats.push(Seat {
                    name: value(&arg, args.next())?,
                    bot: true,
                }),
                flag if flag.starts_with("--") => {
                    return Err(GameError::InvalidConfig(format!("unknown option {}", flag)))
                }
                _ => parsed.seats.push(Seat {
                    name: arg,
                    bot: false,
                }),
            }
        }

        if parsed.seed.is_none() {
            if let Some(raw) = env_seed {
                parsed.seed = Some(raw.trim().parse().map_err(|_| {
                    GameError::InvalidConfig(format!("{} is not a number: {:?}", SEED_ENV, raw))
                })?);
            }
        }

        Ok(Command::Play(parsed))
    }

    /// Game configuration for these arguments. Validation happens when the
    /// game is created.
    #[must_use]
    pub fn config(&self) -> GameConfig {
        let mut config = GameConfig::new()
            .with_players(self.seats.iter().map(|s| s.name.clone()))
            .with_hand_size(self.hand_size)
            .with_rounds_per_game(self.rounds);
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config
    }
}

fn value(flag: &str, next: Option<String>) -> Result<String> {
    next.ok_or_else(|| GameError::InvalidConfig(format!("{} needs a value", flag)))
}

fn number<T: std::str::FromStr>(flag: &str, next: Option<String>) -> Result<T> {
    let raw = value(flag, next)?;
    raw.parse()
        .map_err(|_| GameError::InvalidConfig(format!("{} expects a number, got {:?}", flag, raw)))
}
