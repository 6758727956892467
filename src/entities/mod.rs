// Entity Models
// BIN ranges and the table that resolves them to issuing banks

pub mod bank;

pub use bank::{extract_bin, BankRange, BinTable, BIN_LEN, UNKNOWN_BANK};
