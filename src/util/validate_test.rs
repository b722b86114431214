use super::*;

#[test]
fn accepts_ordinary_addresses() {
    assert!(is_valid_email("user@example.com"));
    assert!(is_valid_email("first.last@sub.example.co.in"));
}

#[test]
fn rejects_missing_or_doubled_at() {
    assert!(!is_valid_email("userexample.com"));
    assert!(!is_valid_email("user@@example.com"));
    assert!(!is_valid_email("@example.com"));
    assert!(!is_valid_email("user@"));
}

#[test]
fn rejects_whitespace_and_dotless_domain() {
    assert!(!is_valid_email("user @example.com"));
    assert!(!is_valid_email("user@example com"));
    assert!(!is_valid_email("user@localhost"));
    assert!(!is_valid_email("user@.com"));
    assert!(!is_valid_email("user@example."));
}

#[test]
fn digit_checks_enforce_exact_length() {
    assert!(is_digits("123456789012", 12));
    assert!(!is_digits("12345678901", 12));
    assert!(!is_digits("1234567890123", 12));
    assert!(!is_digits("12345678901a", 12));
    assert!(is_digits("9876543210", 10));
    assert!(!is_digits("98765 43210", 10));
}
