// Card Validator - Core Library
// Exposes all modules for use in the CLI and tests

pub mod card;
pub mod config;
pub mod entities;
pub mod loader;
pub mod session;

// Re-export commonly used types
pub use card::{luhn_valid, parse_digits, validate_input, validate_luhn};
pub use config::{Command, Config, DEFAULT_BANKS_PATH, USAGE};
pub use entities::{extract_bin, BankRange, BinTable, UNKNOWN_BANK};
pub use loader::{load_bin_table, parse_bin_table, LoadError, LoadReport, ParseMode};
pub use session::{
    evaluate, Session, SessionSummary, Step, Verdict, EXIT_COMMAND, FAREWELL, PROMPT, WELCOME,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
