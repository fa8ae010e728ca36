//! # Digit Normalization
//!
//! Reduces arbitrary user input to the ordered sequence of ASCII decimal
//! digits it contains. Every validator and formatter in this crate starts
//! here, so punctuation, whitespace and stray letters never affect a result.

/// Strip every character that is not an ASCII decimal digit, preserving
/// the order of the remaining digits.
///
/// Never fails. Empty input yields an empty string. Only `'0'..='9'` are
/// kept; other Unicode digits are stripped.
pub fn normalize(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Numeric values of the ASCII digits in `digits`.
///
/// Callers pass normalized input, so every byte is `b'0'..=b'9'`.
pub(crate) fn values(digits: &str) -> Vec<u8> {
    digits.bytes().map(|b| b - b'0').collect()
}

/// Whether `digits` is non-empty and consists of one repeated digit.
pub fn all_same_digit(digits: &str) -> bool {
    let mut bytes = digits.bytes();
    match bytes.next() {
        Some(first) => bytes.all(|b| b == first),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_punctuation() {
        assert_eq!(normalize("123.456.789-09"), "12345678909");
        assert_eq!(normalize("11.222.333/0001-81"), "11222333000181");
    }

    #[test]
    fn strips_letters_and_whitespace() {
        assert_eq!(normalize(" a1b2 c3\t\n"), "123");
    }

    #[test]
    fn empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("---"), "");
    }

    #[test]
    fn non_ascii_digits_are_stripped() {
        // Full-width and Arabic-Indic digits are not ASCII.
        assert_eq!(normalize("１２3٤"), "3");
    }

    #[test]
    fn values_maps_ascii() {
        assert_eq!(values("0919"), vec![0, 9, 1, 9]);
    }

    #[test]
    fn repeated_digit_detection() {
        assert!(all_same_digit("00000000000"));
        assert!(all_same_digit("7"));
        assert!(!all_same_digit("00000000001"));
        assert!(!all_same_digit(""));
    }
}
