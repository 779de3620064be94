//! Command-line arguments.

use crate::error::FlappyError;
use std::path::PathBuf;

pub const USAGE: &str = "\
Flappy - Terminal Arcade Flyer

Usage: flappy [options]

Options:
  --config <path>  Load game settings from a TOML file
  --seed <n>       Seed the pipe generator for a reproducible run
  --log <path>     Write logs to a file (filter via FLAPPY_LOG, default info)
  --dump-config    Print the effective config as TOML and exit
  --version        Show version information
  --help           Show this help message

Controls:
  Space/Up/Enter/k  Flap (starts a run)
  r                 Restart after a crash
  q/Esc             Quit";

/// What the binary should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Play(Options),
    DumpConfig(Options),
    Version,
    Help,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    pub config: Option<PathBuf>,
    pub seed: Option<u64>,
    pub log_file: Option<PathBuf>,
}

/// Parse arguments (without the program name).
pub fn parse_args<I>(args: I) -> Result<Command, FlappyError>
where
    I: IntoIterator<Item = String>,
{
    let mut options = Options::default();
    let mut dump = false;
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-v" => return Ok(Command::Version),
            "--help" | "-h" => return Ok(Command::Help),
            "--dump-config" => dump = true,
            "--config" => options.config = Some(PathBuf::from(value_for(&arg, args.next())?)),
            "--log" => options.log_file = Some(PathBuf::from(value_for(&arg, args.next())?)),
            "--seed" => {
                let raw = value_for(&arg, args.next())?;
                let seed = raw
                    .parse::<u64>()
                    .map_err(|_| FlappyError::Usage(format!("Invalid seed: {}", raw)))?;
                options.seed = Some(seed);
            }
            other => {
                return Err(FlappyError::Usage(format!(
                    "Unknown option: {}\nRun 'flappy --help' for usage.",
                    other
                )))
            }
        }
    }

    Ok(if dump {
        Command::DumpConfig(options)
    } else {
        Command::Play(options)
    })
}

fn value_for(flag: &str, value: Option<String>) -> Result<String, FlappyError> {
    value.ok_or_else(|| FlappyError::Usage(format!("Missing value for {}", flag)))
}
