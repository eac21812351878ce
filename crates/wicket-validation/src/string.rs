//! String validation predicates

/// Whether a field value counts as filled in
///
/// `required` fails only on the truly empty string; whitespace-only input
/// is still "present".
pub fn is_present(value: &str) -> bool {
    !value.is_empty()
}

/// Length in characters, not bytes
pub fn char_length(value: &str) -> usize {
    value.chars().count()
}

/// Whether a value meets a minimum character length
pub fn meets_min_length(value: &str, min: usize) -> bool {
    char_length(value) >= min
}

/// Exact equality against another field's value
pub fn equals(value: &str, expected: &str) -> bool {
    value == expected
}
