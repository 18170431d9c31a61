use std::io;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use cardparty::cli::{self, CliArgs, Command, Terminal, SEED_ENV, USAGE};
use cardparty::{CardPack, GameError, PartyGame, RandomChooser};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = match CliArgs::parse(std::env::args().skip(1), std::env::var(SEED_ENV).ok())? {
        Command::Play(args) => args,
        Command::Help => {
            print!("{}", USAGE);
            return Ok(());
        }
    };

    let pack = load_pack(&args)?;
    let mut game = PartyGame::new(args.config(), &pack).context("cannot start the game")?;
    tracing::info!(seed = game.seed(), "starting game");

    let bots = args
        .seats
        .iter()
        .zip(game.players().player_ids())
        .filter(|(seat, _)| seat.bot)
        .map(|(_, id)| id);
    let bot_seed = RandomChooser::seed_for_game(game.seed());
    let mut terminal = Terminal::new(io::stdin().lock(), io::stdout().lock(), bots, bot_seed);

    loop {
        cli::play_game(&mut game, &mut terminal)?;
        if !terminal.prompter().confirm("Play again?")? {
            break;
        }
        match game.reset_hands() {
            Ok(()) => {}
            Err(GameError::InvalidConfig(reason)) => {
                tracing::info!(%reason, "cannot deal another game");
                terminal.prompter().say("Not enough cards left for another game.")?;
                break;
            }
            Err(e) => return Err(e).context("cannot deal another game"),
        }
    }

    tracing::info!("game over");
    Ok(())
}

fn load_pack(args: &CliArgs) -> Result<CardPack> {
    if args.packs.is_empty() {
        return Ok(CardPack::builtin()?);
    }

    let packs = args
        .packs
        .iter()
        .map(|path| {
            CardPack::from_path(path).with_context(|| format!("cannot load {}", path.display()))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(CardPack::merge(packs)?)
}
