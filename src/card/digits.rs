// 🔢 Digit Parser
// Turns a card number string into its decimal digits

/// Shortest card number we accept (ISO/IEC 7812 lower bound)
pub const MIN_CARD_LEN: usize = 13;

/// Longest card number we accept
pub const MAX_CARD_LEN: usize = 19;

/// Parse a string into digit values (0-9), preserving order.
///
/// Returns `None` for the empty string or when any character falls outside
/// ASCII `'0'..='9'`. Unicode digits (e.g. `'٣'`) are rejected.
pub fn parse_digits(s: &str) -> Option<Vec<u8>> {
    if s.is_empty() {
        return None;
    }

    s.bytes()
        .map(|b| b.is_ascii_digit().then(|| b - b'0'))
        .collect()
}

/// Check that a card number is digits only with a length in 13..=19
pub fn validate_input(card_number: &str) -> bool {
    parse_digits(card_number)
        .map(|digits| (MIN_CARD_LEN..=MAX_CARD_LEN).contains(&digits.len()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_digits_preserves_order() {
        assert_eq!(parse_digits("1234"), Some(vec![1, 2, 3, 4]));
        assert_eq!(parse_digits("0"), Some(vec![0]));
        assert_eq!(parse_digits("9081"), Some(vec![9, 0, 8, 1]));
    }

    #[test]
    fn test_parse_digits_rejects_empty() {
        assert_eq!(parse_digits(""), None);
    }

    #[test]
    fn test_parse_digits_rejects_non_digits() {
        assert_eq!(parse_digits("abc"), None);
        assert_eq!(parse_digits("12a4"), None);
        assert_eq!(parse_digits("1234 "), None);
        assert_eq!(parse_digits("-123"), None);
        assert_eq!(parse_digits("12.5"), None);
    }

    #[test]
    fn test_parse_digits_rejects_unicode_digits() {
        // Arabic-Indic three, fullwidth one
        assert_eq!(parse_digits("12٣4"), None);
        assert_eq!(parse_digits("１234"), None);
    }

    #[test]
    fn test_validate_input_length_boundaries() {
        assert!(!validate_input(&"4".repeat(12)));
        assert!(validate_input(&"4".repeat(13)));
        assert!(validate_input(&"4".repeat(16)));
        assert!(validate_input(&"4".repeat(19)));
        assert!(!validate_input(&"4".repeat(20)));
    }

    #[test]
    fn test_validate_input_rejects_mixed_content() {
        assert!(!validate_input(""));
        assert!(!validate_input("4532 0151 1283 0366"));
        assert!(!validate_input("4532-0151-1283-0366"));
        assert!(!validate_input("453201511283036x"));
    }
}
