//! Line-based game launcher.
//!
//! Shows the catalogue, reads a choice, runs that game's driver and comes
//! back to the menu until the player quits or input runs out.

use crate::config::OutputConfig;
use crate::games::Game;
use crate::output::ReportWriter;
use std::io::{self, BufRead, Write};
use tracing::{debug, info, warn};

pub const TITLE: &str = "SimpleMiniGames";

pub struct Launcher<R: BufRead, W: Write> {
    input: R,
    out: W,
    config: OutputConfig,
}

impl<R: BufRead, W: Write> Launcher<R, W> {
    pub fn new(input: R, out: W, config: OutputConfig) -> Self {
        Self { input, out, config }
    }

    fn write_menu(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", TITLE)?;
        for game in Game::ALL {
            writeln!(
                self.out,
                "  [{}] {} - {}",
                game.menu_key(),
                game.name(),
                game.description()
            )?;
        }
        writeln!(self.out, "  [q] Quit")?;
        write!(self.out, "Select a game: ")?;
        self.out.flush()
    }

    /// Read one trimmed line. `None` on end of input.
    fn read_choice(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn play(&mut self, game: Game) -> io::Result<()> {
        info!(game = game.id(), "launching game");
        let events = game.run_demo();
        let mut report = ReportWriter::new(&mut self.out, self.config.clone());
        report.write_game(game, &events)?;
        writeln!(self.out, "-- {} finished --", game.name())?;
        debug!(game = game.id(), events = events.len(), "game returned to launcher");
        Ok(())
    }

    /// Run the menu loop. Returns how many games were played.
    pub fn run(&mut self) -> io::Result<usize> {
        let mut played = 0;
        loop {
            self.write_menu()?;
            let choice = match self.read_choice()? {
                Some(choice) => choice,
                None => {
                    writeln!(self.out)?;
                    break;
                }
            };
            if choice.is_empty() {
                continue;
            }
            if choice.eq_ignore_ascii_case("q") || choice.eq_ignore_ascii_case("quit") {
                break;
            }
            match Game::from_choice(&choice) {
                Some(game) => {
                    self.play(game)?;
                    played += 1;
                }
                None => {
                    warn!(choice = %choice, "invalid launcher choice");
                    writeln!(
                        self.out,
                        "Invalid choice '{}'. Enter 1, 2, 3 or q.",
                        choice
                    )?;
                }
            }
        }
        writeln!(self.out, "Goodbye!")?;
        self.out.flush()?;
        info!(played, "launcher closed");
        Ok(played)
    }

    pub fn into_output(self) -> W {
        self.out
    }
}
