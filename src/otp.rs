//! One-time passcodes
//!
//! Numeric passcodes for password-recovery flows: random digit
//! generation, equality verification, and a fixed validity window.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

/// Standard passcode length
pub const DEFAULT_LENGTH: usize = 6;

/// How long a passcode stays valid after issuance
const VALIDITY_MINUTES: i64 = 10;

/// Generate a random passcode of `length` decimal digits
pub fn generate(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| char::from(b'0' + rng.gen_range(0u8..10)))
        .collect()
}

/// Check a submitted passcode against the expected one
pub fn verify(candidate: &str, expected: &str) -> bool {
    candidate == expected
}

/// Expiry timestamp for a passcode issued at `issued_at`
pub fn expiry_from(issued_at: DateTime<Utc>) -> DateTime<Utc> {
    issued_at + Duration::minutes(VALIDITY_MINUTES)
}

/// Whether a passcode with the given expiry is no longer valid.
///
/// The boundary instant itself counts as expired.
pub fn is_expired(expires_at: DateTime<Utc>) -> bool {
    Utc::now() >= expires_at
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(4)]
    #[test_case(6)]
    #[test_case(8)]
    fn test_generate_length_and_digits(length: usize) {
        let otp = generate(length);
        assert_eq!(otp.len(), length);
        assert!(otp.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_generate_default_length() {
        assert_eq!(generate(DEFAULT_LENGTH).len(), 6);
    }

    #[test]
    fn test_verify() {
        assert!(verify("123456", "123456"));
        assert!(!verify("123456", "654321"));
        assert!(!verify("12345", "123456"));
    }

    #[test]
    fn test_expiry_window_is_ten_minutes() {
        let issued = Utc::now();
        assert_eq!(expiry_from(issued) - issued, Duration::minutes(10));
    }

    #[test]
    fn test_is_expired() {
        assert!(!is_expired(Utc::now() + Duration::hours(1)));
        assert!(is_expired(Utc::now() - Duration::seconds(1)));
    }
}
