//! Flappy Bird: flaps, scores a point, and ends the game.

use minigames::{config::OutputConfig, logging, print_demo, Game};
use std::io;

fn main() -> io::Result<()> {
    logging::init(&OutputConfig::default());
    print_demo(Game::Flappy, &mut io::stdout().lock())
}
