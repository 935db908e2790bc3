//! Minigames - score bookkeeping for three small arcade games.
//!
//! The [`games`] module holds the score components and their fixed drivers;
//! the rest is the console front-end that picks a driver and prints what it
//! reported.

pub mod build_info;
pub mod config;
pub mod games;
pub mod launcher;
pub mod logging;
pub mod output;

pub use games::{
    FlapScoreSession, Game, HighScoreTracker, ScoreCounter, ScoreEvent, SessionState,
};

use std::io::{self, Write};

/// Run one game's driver and print its report lines to `out`, without a
/// header. This is what the single-game binaries do.
pub fn print_demo<W: Write>(game: Game, out: &mut W) -> io::Result<()> {
    for event in game.run_demo() {
        writeln!(out, "{}", event)?;
    }
    out.flush()
}
