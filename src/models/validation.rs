use thiserror::Error;

/// Input rejected at the request boundary.
///
/// Raised by [`StudentDraft::validate`](super::StudentDraft::validate) and
/// [`NoteDraft::validate`](super::NoteDraft::validate) before any repository
/// call is made.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required text field is empty or whitespace-only.
    #[error("{field} cannot be empty")]
    Blank { field: &'static str },

    /// A numeric field falls outside its inclusive bounds.
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
        value: f64,
    },

    /// A text field exceeds its maximum length in characters.
    #[error("{field} exceeds maximum length of {max} characters")]
    TooLong { field: &'static str, max: usize },

    /// A 0/1 flag carries some other value.
    #[error("{field} must be 0 or 1, got {value}")]
    InvalidFlag { field: &'static str, value: i64 },
}

pub(crate) fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Blank { field });
    }
    Ok(())
}

pub(crate) fn require_range(
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<(), ValidationError> {
    // NaN fails the containment check as well.
    if !(min..=max).contains(&value) {
        return Err(ValidationError::OutOfRange {
            field,
            min,
            max,
            value,
        });
    }
    Ok(())
}

pub(crate) fn require_max_chars(
    field: &'static str,
    value: &str,
    max: usize,
) -> Result<(), ValidationError> {
    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(())
}
