// ⚙️ Configuration
// Defaults + command-line overrides

use crate::loader::ParseMode;
use anyhow::{bail, Result};
use std::path::PathBuf;

/// BIN table location, relative to the working directory
pub const DEFAULT_BANKS_PATH: &str = "banks.txt";

pub const USAGE: &str = "\
Usage: card-validator [--strict | --help | --version]

Reads card numbers from stdin and reports validity and issuing bank.
BIN ranges are loaded from ./banks.txt at startup.

Options:
  --strict   Abort on banks.txt lines without exactly 3 fields
  --help     Show this message
  --version  Show the program version";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub banks_path: PathBuf,
    pub mode: ParseMode,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            banks_path: PathBuf::from(DEFAULT_BANKS_PATH),
            mode: ParseMode::default(),
        }
    }
}

/// What main should do after reading the arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(Config),
    Help,
    Version,
}

impl Config {
    /// Parse arguments (program name already stripped)
    pub fn from_args<I, S>(args: I) -> Result<Command>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = Config::default();

        for arg in args {
            match arg.as_ref() {
                "--strict" => config.mode = ParseMode::Strict,
                "--help" | "-h" => return Ok(Command::Help),
                "--version" | "-V" => return Ok(Command::Version),
                other => bail!("Unknown argument: {}", other),
            }
        }

        Ok(Command::Run(config))
    }
}
