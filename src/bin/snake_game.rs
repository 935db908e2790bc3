//! Snake: submits two scores and prints each new high score.

use minigames::{config::OutputConfig, logging, print_demo, Game};
use std::io;

fn main() -> io::Result<()> {
    logging::init(&OutputConfig::default());
    print_demo(Game::Snake, &mut io::stdout().lock())
}
