//! Common validation utilities

/// Check if a string is not blank
pub fn not_empty(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Check that every value is present and not blank
pub fn all_present(values: &[Option<&str>]) -> bool {
    values.iter().all(|value| value.map(not_empty).unwrap_or(false))
}

/// Length check on characters rather than bytes
pub fn length_at_least(value: &str, min: usize) -> bool {
    value.chars().count() >= min
}

/// Check if a string length is within bounds
pub fn length_between(value: &str, min: usize, max: usize) -> bool {
    let len = value.chars().count();
    len >= min && len <= max
}

/// Check if a string is exactly `len` characters long
pub fn has_exact_length(value: &str, len: usize) -> bool {
    value.chars().count() == len
}
