//! Column identifier validation.

/// Maximum length for column identifiers (matches the common 63-char limit).
const MAX_IDENTIFIER_LENGTH: usize = 63;

/// Validate that a string is a safe column identifier.
///
/// A valid identifier starts with an ASCII letter or underscore, continues
/// with ASCII letters, digits, or underscores, and is 1-63 characters long.
/// Anything else (dots, quotes, spaces, operators) is rejected so that a
/// column name can never smuggle expression syntax into a row source.
///
/// # Examples
///
/// ```
/// use seekset::is_valid_identifier;
///
/// assert!(is_valid_identifier("id"));
/// assert!(is_valid_identifier("created_at"));
/// assert!(!is_valid_identifier(""));
/// assert!(!is_valid_identifier("lower(name)"));
/// assert!(!is_valid_identifier("t.id"));
/// ```
#[inline]
#[must_use]
pub fn is_valid_identifier(s: &str) -> bool {
    if s.is_empty() || s.len() > MAX_IDENTIFIER_LENGTH {
        return false;
    }

    let mut chars = s.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {},
        _ => return false,
    }

    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Assert that a string is a valid column identifier.
///
/// # Panics
///
/// Panics with a descriptive message if the identifier is invalid. Intended
/// for programmer errors (bad column names in code), not user input.
#[inline]
pub fn assert_valid_identifier(s: &str, context: &str) {
    assert!(
        is_valid_identifier(s),
        "invalid {context} identifier '{s}': must start with letter/underscore, \
             contain only ASCII alphanumeric/underscore, and be 1-63 chars"
    );
}
