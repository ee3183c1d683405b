//! # Showdown CLI
//!
//! Command-line interface for the showdown poker rules engine. Exposes
//! subcommands for dealing, playing full games to payout, and inspecting
//! the entropy source.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses
//! command-line arguments and executes the appropriate subcommand.
//!
//! ## Available Subcommands
//!
//! - `deal`: Shuffle and deal one game, showing hole cards and the board
//! - `play`: Run a full game through evaluation and winner payouts
//! - `rng`: Sample the ChaCha20 entropy source
//!
//! ## Example Usage
//!
//! ```
//! use std::io;
//! let args = vec!["showdown", "deal", "--players", "3", "--seed", "42"];
//! let code = showdown_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use std::io::Write;

mod commands;
mod error;

use commands::{handle_deal_command, handle_play_command, handle_rng_command};
pub use error::CliError;

#[derive(Parser)]
#[command(name = "showdown", version, about = "Multi-player poker rules engine")]
struct ShowdownCli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Shuffle and deal one game, showing hole cards and the board
    Deal {
        /// Number of players at the table (1-10)
        #[arg(long, default_value_t = 2)]
        players: usize,
        /// RNG seed for a reproducible deal
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run a full game: shuffle, deal, evaluate, pay every winner
    Play {
        /// Number of players at the table (1-10)
        #[arg(long, default_value_t = 2)]
        players: usize,
        /// RNG seed for a reproducible game
        #[arg(long)]
        seed: Option<u64>,
        /// Amount paid to each winner
        #[arg(long, default_value_t = 100)]
        amount: u64,
    },
    /// Sample the entropy source
    Rng {
        /// RNG seed (random if omitted)
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate
/// subcommand handler.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let parsed = ShowdownCli::try_parse_from(args.into_iter().map(|a| a.as_ref().to_string()));
    let cli = match parsed {
        Ok(cli) => cli,
        Err(e) => {
            let _ = write!(err, "{}", e.render());
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 2,
            };
        }
    };

    let result = match cli.command {
        Commands::Deal { players, seed } => handle_deal_command(players, seed, out),
        Commands::Play {
            players,
            seed,
            amount,
        } => handle_play_command(players, seed, amount, out),
        Commands::Rng { seed } => handle_rng_command(seed, out),
    };

    match result {
        Ok(()) => 0,
        Err(e) => {
            let _ = writeln!(err, "error: {}", e);
            2
        }
    }
}
