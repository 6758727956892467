// ✅ Luhn Checker
// Classic mod-10 checksum used by every major card network

use super::digits::parse_digits;

/// Run the Luhn checksum over a digit sequence.
///
/// Walks from the last digit to the first. Every second digit, starting with
/// the second-to-last, is doubled; doubled values above 9 lose 9. The number
/// is valid when the total is a multiple of 10.
pub fn luhn_valid(digits: &[u8]) -> bool {
    let mut sum: u32 = 0;
    let mut should_double = false;

    for &digit in digits.iter().rev() {
        let mut d = u32::from(digit);
        if should_double {
            d *= 2;
            if d > 9 {
                d -= 9;
            }
        }
        sum += d;
        should_double = !should_double;
    }

    sum % 10 == 0
}

/// Parse then checksum. Anything that isn't all digits is invalid.
pub fn validate_luhn(card_number: &str) -> bool {
    match parse_digits(card_number) {
        Some(digits) => luhn_valid(&digits),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_golden_vectors() {
        assert!(validate_luhn("4532015112830366"));
        assert!(!validate_luhn("4532015112830367"));
    }

    #[test]
    fn test_well_known_test_cards() {
        let valid = [
            "4111111111111111",    // Visa
            "5500000000000004",    // Mastercard
            "378282246310005",     // Amex
            "6011000000000004",    // Discover
            "4222222222222",       // 13 digits
            "4000000000000000006", // 19 digits
            "79927398713",
        ];

        for card in valid {
            assert!(validate_luhn(card), "{} should pass", card);
        }
    }

    #[test]
    fn test_single_digit_flip_fails() {
        assert!(!validate_luhn("4111111111111112"));
        assert!(!validate_luhn("5500000000000005"));
        assert!(!validate_luhn("4000001234567891"));
    }

    #[test]
    fn test_doubling_starts_at_second_to_last() {
        // 1 8 -> 8 stays, 1 doubles to 2: sum 10
        assert!(luhn_valid(&[1, 8]));
        // 8 1 -> 1 stays, 8 doubles to 16-9=7: sum 8
        assert!(!luhn_valid(&[8, 1]));
        // 5 doubles to 10-9=1, plus 9: sum 10
        assert!(luhn_valid(&[5, 9]));
    }

    #[test]
    fn test_short_sequences() {
        assert!(luhn_valid(&[0]));
        assert!(!luhn_valid(&[5]));
        assert!(luhn_valid(&[0, 0]));
    }

    #[test]
    fn test_non_digits_never_valid() {
        assert!(!validate_luhn(""));
        assert!(!validate_luhn("abc"));
        assert!(!validate_luhn("4111 1111 1111 1111"));
    }
}
