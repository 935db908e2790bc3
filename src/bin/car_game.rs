//! Car game: scores five points and prints each new total.

use minigames::{config::OutputConfig, logging, print_demo, Game};
use std::io;

fn main() -> io::Result<()> {
    logging::init(&OutputConfig::default());
    print_demo(Game::Car, &mut io::stdout().lock())
}
