// 💳 Card Number Checks
// Structural validation + Luhn checksum, no bank data involved

pub mod digits;
pub mod luhn;

pub use digits::{parse_digits, validate_input, MAX_CARD_LEN, MIN_CARD_LEN};
pub use luhn::{luhn_valid, validate_luhn};
