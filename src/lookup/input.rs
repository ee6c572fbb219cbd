//! Pincode input normalization.

/// Number of digits in an Indian pincode
pub const PINCODE_LENGTH: usize = 6;

/// Keep ASCII digits only and truncate to [`PINCODE_LENGTH`]
pub fn sanitize_pincode(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_digit)
        .take(PINCODE_LENGTH)
        .collect()
}

/// Whether `code` is exactly [`PINCODE_LENGTH`] ASCII digits
pub fn is_complete(code: &str) -> bool {
    code.len() == PINCODE_LENGTH && code.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_should_strip_non_digits() {
        assert_eq!(sanitize_pincode("11a0-0 01"), "110001");
        assert_eq!(sanitize_pincode("abc"), "");
        assert_eq!(sanitize_pincode(""), "");
    }

    #[test]
    fn sanitize_should_clamp_to_six_digits() {
        assert_eq!(sanitize_pincode("1100019999"), "110001");
        assert_eq!(sanitize_pincode("12345"), "12345");
    }

    #[test]
    fn sanitize_should_ignore_non_ascii_digits() {
        // Devanagari digits are numeric but not ASCII
        assert_eq!(sanitize_pincode("११0001"), "0001");
    }

    #[test]
    fn is_complete_should_require_exactly_six() {
        assert!(is_complete("560001"));
        assert!(!is_complete("56000"));
        assert!(!is_complete(""));
    }

    #[test]
    fn is_complete_should_count_digits_not_bytes() {
        // Two Devanagari digits take six bytes
        assert_eq!("११".len(), PINCODE_LENGTH);
        assert!(!is_complete("११"));
        assert!(!is_complete("11a001"));
    }
}
