use minigames::build_info;
use minigames::config::{self, Cli, CliCommand};
use minigames::games::Game;
use minigames::launcher::Launcher;
use minigames::logging;
use minigames::output::ReportWriter;
use std::io;
use tracing::debug;

fn run(cli: Cli) -> io::Result<()> {
    match cli.command {
        CliCommand::Help => {
            println!("{}", config::usage());
        }
        CliCommand::Version => {
            println!("{}", build_info::version_line());
        }
        CliCommand::List => {
            let mut writer = ReportWriter::new(io::stdout().lock(), cli.output);
            writer.write_catalogue()?;
        }
        CliCommand::Play(game) => {
            let mut writer = ReportWriter::new(io::stdout().lock(), cli.output);
            writer.write_game(game, &game.run_demo())?;
        }
        CliCommand::All => {
            let mut writer = ReportWriter::new(io::stdout().lock(), cli.output);
            for game in Game::ALL {
                writer.write_game(game, &game.run_demo())?;
            }
        }
        CliCommand::Launcher => {
            let mut launcher = Launcher::new(io::stdin().lock(), io::stdout().lock(), cli.output);
            launcher.run()?;
        }
    }
    Ok(())
}

fn main() -> io::Result<()> {
    let cli = match config::parse_args(std::env::args().skip(1)) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Run 'minigames --help' for usage.");
            std::process::exit(1);
        }
    };

    logging::init(&cli.output);
    debug!(command = ?cli.command, format = ?cli.output.format, "starting");

    run(cli)
}
