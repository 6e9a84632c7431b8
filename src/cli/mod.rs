//! CLI layer for tictactoe
//!
//! This module contains the command-line interface:
//!
//! - [`Cli`] - clap definitions (version and help; the game itself
//!   takes no flags)
//! - [`session`] - The interactive game session

pub mod session;

use clap::Parser;

/// tictactoe - two players, one terminal
#[derive(Parser, Debug, Clone, Copy)]
#[command(
    name = "tictactoe",
    version,
    about = "Two-player tic-tac-toe in the terminal",
    long_about = "Classic 3x3 tic-tac-toe played by two people sharing one terminal.\n\n\
                  Players alternate entering 1-based `row column` coordinates at the\n\
                  prompt; the game announces the winner or a draw and exits."
)]
pub struct Cli {}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    // Parsing handles --help/--version and rejects stray arguments
    // before the session touches stdin.
    let _cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut game = session::Session::new();
    game.play(&mut stdin.lock(), &mut stdout.lock())?;
    Ok(())
}
