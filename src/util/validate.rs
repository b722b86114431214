//! Field validators used by the auth and share forms.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// Loose email shape check: one `@`, a non-empty local part, and a dot
/// inside the domain, with no whitespace anywhere. The backend remains
/// the authority; this only gates obviously broken input.
pub fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    if value.chars().any(char::is_whitespace) || domain.contains('@') {
        return false;
    }
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

/// True when the value is exactly `len` ASCII digits.
pub fn is_digits(value: &str, len: usize) -> bool {
    value.len() == len && value.bytes().all(|b| b.is_ascii_digit())
}
