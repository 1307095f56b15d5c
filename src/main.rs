//! Terminal blackjack.

use std::path::PathBuf;

use anyhow::Context;
use bjtable::{FileStorage, Game, TableOptions, Terminal, menu};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding saved players.
    #[arg(short, long, default_value = ".")]
    dir: PathBuf,

    /// Seed for shuffling; random when omitted.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Log round details to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logs go to stderr so they never mix with the table on stdout.
    let default_level = if args.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed, dir = %args.dir.display(), "starting table");

    let mut game = Game::new(TableOptions::default(), seed);
    let mut storage = FileStorage::new(args.dir);
    let mut console = Terminal::new();

    println!("Welcome to Blackjack!");
    menu::main_menu(&mut game, &mut storage, &mut console).context("blackjack menu failed")?;
    println!("Goodbye.");

    Ok(())
}
