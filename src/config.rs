//! Command-line configuration for the `minigames` binary.

use crate::games::Game;
use thiserror::Error;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "MINIGAMES_LOG";

/// How report lines are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// The plain console lines (`Current Score: 1`).
    #[default]
    Text,
    /// One JSON object per event, tagged with the game id.
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Style section headers with terminal colours.
    pub color: bool,
    /// Log at debug level instead of warn.
    pub verbose: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
            verbose: false,
        }
    }
}

impl OutputConfig {
    /// Log filter used when `MINIGAMES_LOG` is unset.
    pub fn default_log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}

/// What the binary was asked to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliCommand {
    /// Interactive menu.
    Launcher,
    List,
    Play(Game),
    All,
    Version,
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cli {
    pub command: CliCommand,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgsError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
    #[error("Unknown option: {0}")]
    UnknownOption(String),
    #[error("Missing game name for 'play'")]
    MissingGame,
    #[error("Unknown game: {0}")]
    UnknownGame(String),
    #[error("Unexpected argument: {0}")]
    UnexpectedArgument(String),
}

/// Parse arguments, excluding the program name.
pub fn parse_args<I, S>(args: I) -> Result<Cli, ArgsError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut output = OutputConfig::default();
    let mut positional: Vec<String> = Vec::new();
    let mut early: Option<CliCommand> = None;

    for arg in args {
        let arg = arg.as_ref();
        match arg {
            "--json" => output.format = OutputFormat::Json,
            "--plain" => output.color = false,
            "--verbose" | "-v" => output.verbose = true,
            "--version" | "-V" => {
                early.get_or_insert(CliCommand::Version);
            }
            "--help" | "-h" => {
                early.get_or_insert(CliCommand::Help);
            }
            other if other.starts_with('-') => {
                return Err(ArgsError::UnknownOption(other.to_string()))
            }
            other => positional.push(other.to_string()),
        }
    }

    if let Some(command) = early {
        return Ok(Cli { command, output });
    }

    let mut positional = positional.into_iter();
    let command = match positional.next().as_deref() {
        None => CliCommand::Launcher,
        Some("list") => CliCommand::List,
        Some("all") => CliCommand::All,
        Some("play") => {
            let name = positional.next().ok_or(ArgsError::MissingGame)?;
            let game = Game::from_choice(&name).ok_or(ArgsError::UnknownGame(name))?;
            CliCommand::Play(game)
        }
        Some(other) => return Err(ArgsError::UnknownCommand(other.to_string())),
    };

    if let Some(extra) = positional.next() {
        return Err(ArgsError::UnexpectedArgument(extra));
    }

    Ok(Cli { command, output })
}

pub fn usage() -> &'static str {
    "Minigames - score bookkeeping for Car, Snake and Flappy Bird\n\
     \n\
     Usage: minigames [command] [options]\n\
     \n\
     Commands:\n\
     \x20 (none)         Interactive launcher\n\
     \x20 list           List available games\n\
     \x20 play <game>    Run one game (car, snake, flappy or 1-3)\n\
     \x20 all            Run every game in menu order\n\
     \n\
     Options:\n\
     \x20 --json         Write events as JSON lines\n\
     \x20 --plain        Disable coloured headers\n\
     \x20 --verbose, -v  Debug logging (or set MINIGAMES_LOG)\n\
     \x20 --version, -V  Show version information\n\
     \x20 --help, -h     Show this help"
}
