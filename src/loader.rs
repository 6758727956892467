// 📂 BIN Table Loader
// banks.txt → BinTable, one `<name>,<low>,<high>` record per line

use crate::entities::{BankRange, BinTable};
use anyhow::{Context, Result};
use csv::ByteRecord;
use serde::Deserialize;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

const FIELDS_PER_RECORD: usize = 3;

// ============================================================================
// PARSE MODE
// ============================================================================

/// What to do with a line that doesn't have exactly 3 fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Skip the line and keep loading (original behaviour)
    #[default]
    Lenient,
    /// Abort the load
    Strict,
}

impl ParseMode {
    pub fn name(&self) -> &str {
        match self {
            ParseMode::Lenient => "lenient",
            ParseMode::Strict => "strict",
        }
    }
}

// ============================================================================
// LOAD ERROR
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// Strict mode only
    FieldCount { line: u64, found: usize },
    /// `low` or `high` isn't an integer
    InvalidBound {
        line: u64,
        field: &'static str,
        value: String,
    },
    /// `low > high`
    InvertedRange { line: u64, low: i64, high: i64 },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::FieldCount { line, found } => write!(
                f,
                "line {}: expected {} fields, found {}",
                line, FIELDS_PER_RECORD, found
            ),
            LoadError::InvalidBound { line, field, value } => {
                write!(f, "line {}: {} bound {:?} is not a valid integer", line, field, value)
            }
            LoadError::InvertedRange { line, low, high } => {
                write!(f, "line {}: low bound {} exceeds high bound {}", line, low, high)
            }
        }
    }
}

impl std::error::Error for LoadError {}

// ============================================================================
// LOAD REPORT
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub table: BinTable,
    /// 1-based line numbers skipped for a wrong field count (lenient mode)
    pub skipped_lines: Vec<u64>,
}

// ============================================================================
// LOADING
// ============================================================================

/// Load the BIN table from a file. Unreadable files are fatal.
pub fn load_bin_table(path: &Path, mode: ParseMode) -> Result<LoadReport> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open BIN table {}", path.display()))?;

    parse_bin_table(file, mode)
        .with_context(|| format!("Failed to load BIN table {}", path.display()))
}

/// Parse BIN records from any reader.
///
/// No header, no quoting: a comma always separates fields. The first
/// unparsable bound aborts the whole load.
pub fn parse_bin_table<R: Read>(reader: R, mode: ParseMode) -> Result<LoadReport> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let mut ranges = Vec::new();
    let mut skipped_lines = Vec::new();

    for result in rdr.byte_records() {
        let record = result.context("Failed to read BIN record")?;
        let line = record.position().map(|pos| pos.line()).unwrap_or(0);

        // Field count is checked on raw bytes, before any decoding
        if record.len() != FIELDS_PER_RECORD {
            match mode {
                ParseMode::Lenient => {
                    skipped_lines.push(line);
                    continue;
                }
                ParseMode::Strict => {
                    return Err(LoadError::FieldCount {
                        line,
                        found: record.len(),
                    }
                    .into());
                }
            }
        }

        let bounds_record: ByteRecord = record.iter().skip(1).collect();
        let bounds: Bounds = bounds_record
            .deserialize(None)
            .map_err(|err| invalid_bound(&bounds_record, line, &err))?;

        if bounds.low > bounds.high {
            return Err(LoadError::InvertedRange {
                line,
                low: bounds.low,
                high: bounds.high,
            }
            .into());
        }

        let name = String::from_utf8_lossy(&record[0]).into_owned();
        ranges.push(BankRange::new(name, bounds.low, bounds.high));
    }

    Ok(LoadReport {
        table: BinTable::new(ranges),
        skipped_lines,
    })
}

/// Numeric columns of a record, deserialized positionally
#[derive(Debug, Deserialize)]
struct Bounds {
    low: i64,
    high: i64,
}

/// Name the bound serde rejected (field 0 = low, field 1 = high)
fn invalid_bound(bounds: &ByteRecord, line: u64, err: &csv::Error) -> LoadError {
    let index = match err.kind() {
        csv::ErrorKind::Deserialize { err, .. } => err.field().unwrap_or(0) as usize,
        _ => 0,
    };
    let field = if index == 1 { "high" } else { "low" };

    LoadError::InvalidBound {
        line,
        field,
        value: String::from_utf8_lossy(bounds.get(index).unwrap_or_default()).into_owned(),
    }
}
