// 🖥️ Interactive Session - read → validate → resolve → report
//
// One input line per cycle. The cycle ends on "exit" (with a farewell)
// or on end-of-input (silently) / read failure (warning on stderr).

use crate::card::{validate_input, validate_luhn, MAX_CARD_LEN, MIN_CARD_LEN};
use crate::entities::BinTable;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Input that terminates the session (compared after trimming)
pub const EXIT_COMMAND: &str = "exit";

pub const WELCOME: &str = "Welcome to the card validation program!";
pub const PROMPT: &str = "Enter a card number or exit to quit:";
pub const FAREWELL: &str = "Program finished";

// ============================================================================
// VERDICT
// ============================================================================

/// Outcome of evaluating one non-exit line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Empty,
    /// Not digits only, or length outside 13..=19
    Malformed,
    InvalidChecksum,
    Valid { bank: String },
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid { .. })
    }

    /// Console lines printed for this verdict
    pub fn lines(&self) -> Vec<String> {
        match self {
            Verdict::Empty => vec!["Empty input, please try again".to_string()],
            Verdict::Malformed => vec![format!(
                "Error: card number must contain only digits and be {} to {} digits long",
                MIN_CARD_LEN, MAX_CARD_LEN
            )],
            Verdict::InvalidChecksum => vec!["Invalid card number".to_string()],
            Verdict::Valid { bank } => vec![
                "Card number is valid".to_string(),
                format!("Bank: {}", bank),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Exit,
    Report(Verdict),
}

/// Pure transition for a single raw input line
pub fn evaluate(table: &BinTable, raw_line: &str) -> Step {
    let card_number = raw_line.trim();

    if card_number == EXIT_COMMAND {
        return Step::Exit;
    }
    if card_number.is_empty() {
        return Step::Report(Verdict::Empty);
    }
    if !validate_input(card_number) {
        return Step::Report(Verdict::Malformed);
    }
    if !validate_luhn(card_number) {
        return Step::Report(Verdict::InvalidChecksum);
    }

    Step::Report(Verdict::Valid {
        bank: table.identify_card(card_number).to_string(),
    })
}

// ============================================================================
// SESSION
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Lines evaluated (exit line not counted)
    pub processed: usize,
    pub valid: usize,
    /// True when ended by "exit", false on end-of-input
    pub exited: bool,
}

/// Session over any line source and sink (stdin/stdout in main, buffers in tests)
pub struct Session<'a, R, W> {
    table: &'a BinTable,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(table: &'a BinTable, input: R, output: W) -> Self {
        Session {
            table,
            input,
            output,
        }
    }

    /// Print the prompt then loop until exit or end-of-input
    pub fn run(&mut self) -> Result<SessionSummary> {
        let mut summary = SessionSummary::default();
        self.write_line(PROMPT)?;

        // Raw bytes: a non-UTF-8 line decodes lossily and fails digit parsing
        let mut raw = Vec::new();
        loop {
            raw.clear();
            match self.input.read_until(b'\n', &mut raw) {
                Ok(0) => break,
                Ok(_) => {}
                Err(e) => {
                    eprintln!("⚠️  Failed to read input, stopping: {}", e);
                    break;
                }
            }

            let line = String::from_utf8_lossy(&raw);
            match evaluate(self.table, &line) {
                Step::Exit => {
                    self.write_line(FAREWELL)?;
                    summary.exited = true;
                    break;
                }
                Step::Report(verdict) => {
                    summary.processed += 1;
                    if verdict.is_valid() {
                        summary.valid += 1;
                    }
                    for text in verdict.lines() {
                        self.write_line(&text)?;
                    }
                }
            }
        }

        self.output.flush().context("Failed to flush output")?;
        Ok(summary)
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn write_line(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text).context("Failed to write to output")
    }
}
