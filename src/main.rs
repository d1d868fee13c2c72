use clap::{Parser, ValueEnum};
use engine::config::Config;
use engine::constants::Player;

pub mod tui;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Side {
    Red,
    Black,
    None,
}

/// Interactive Surakarta move explorer.
#[derive(Parser, Debug)]
#[command(name = "surakarta", version, about)]
struct Args {
    /// Starting layout, e.g. "bbbbbb/bbbbbb/6/6/rrrrrr/rrrrrr r"
    #[arg(long)]
    layout: Option<String>,

    /// Side played by the computer
    #[arg(long, value_enum, default_value = "black")]
    computer: Side,

    /// Seed for the computer's move choice
    #[arg(long)]
    seed: Option<u64>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .target(env_logger::Target::Stderr)
    .init();

    let computer = match args.computer {
        Side::Red => Some(Player::Red),
        Side::Black => Some(Player::Black),
        Side::None => None,
    };

    let options = tui::Options {
        layout: args.layout,
        computer,
        seed: args.seed,
    };
    tui::run(options, &Config::default())
}
