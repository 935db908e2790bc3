//! Writes score events as console lines or JSON records.

use crate::config::{OutputConfig, OutputFormat};
use crate::games::{Game, ScoreEvent};
use crossterm::style::Stylize;
use serde::Serialize;
use std::io::{self, Write};

#[derive(Serialize)]
struct JsonRecord<'a> {
    game: &'static str,
    #[serde(flatten)]
    event: &'a ScoreEvent,
}

pub struct ReportWriter<W: Write> {
    out: W,
    config: OutputConfig,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(out: W, config: OutputConfig) -> Self {
        Self { out, config }
    }

    /// Section title printed before a game's events. Skipped for JSON.
    pub fn write_header(&mut self, game: Game) -> io::Result<()> {
        if self.config.format == OutputFormat::Json {
            return Ok(());
        }
        let title = format!("== {} ==", game.name());
        if self.config.color {
            writeln!(self.out, "{}", title.as_str().bold().cyan())
        } else {
            writeln!(self.out, "{}", title)
        }
    }

    pub fn write_event(&mut self, game: Game, event: &ScoreEvent) -> io::Result<()> {
        match self.config.format {
            OutputFormat::Text => writeln!(self.out, "{}", event),
            OutputFormat::Json => {
                let record = JsonRecord {
                    game: game.id(),
                    event,
                };
                serde_json::to_writer(&mut self.out, &record)
                    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
                writeln!(self.out)
            }
        }
    }

    /// Header followed by every event of one run.
    pub fn write_game(&mut self, game: Game, events: &[ScoreEvent]) -> io::Result<()> {
        self.write_header(game)?;
        for event in events {
            self.write_event(game, event)?;
        }
        self.out.flush()
    }

    /// Catalogue listing for `minigames list`.
    pub fn write_catalogue(&mut self) -> io::Result<()> {
        for game in Game::ALL {
            match self.config.format {
                OutputFormat::Text => writeln!(
                    self.out,
                    "[{}] {:<7} {} - {}",
                    game.menu_key(),
                    game.id(),
                    game.name(),
                    game.description()
                )?,
                OutputFormat::Json => {
                    let entry = serde_json::json!({
                        "key": game.menu_key(),
                        "id": game.id(),
                        "name": game.name(),
                        "description": game.description(),
                    });
                    writeln!(self.out, "{}", entry)?;
                }
            }
        }
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
