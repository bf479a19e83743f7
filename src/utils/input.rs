//! Validation for text typed at the menu prompt

/// Check that `s` is exactly the canonical decimal form of an integer
///
/// Leading zeros, a `+` sign, surrounding whitespace, and the empty string
/// are all rejected.
pub fn is_valid_integer_string(s: &str) -> bool {
    s.parse::<i64>().is_ok_and(|n| n.to_string() == s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_canonical_integers() {
        for s in ["0", "7", "42", "-3", "1000000"] {
            assert!(is_valid_integer_string(s), "{:?} should be accepted", s);
        }
    }

    #[test]
    fn test_rejects_everything_else() {
        for s in ["", " ", "03", "+3", " 4", "4 ", "4.0", "abc", "1e3", "-0", "--1", "99999999999999999999"] {
            assert!(!is_valid_integer_string(s), "{:?} should be rejected", s);
        }
    }
}
