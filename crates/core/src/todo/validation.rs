//! Title validation for todo creation.
//!
//! Pure functions with no side effects - the request layer calls these
//! before anything reaches a repository.

use thiserror::Error;

/// Maximum allowed title length, in characters.
pub const MAX_TITLE_LEN: usize = 200;

/// Errors produced by title validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Title must not be empty")]
    EmptyTitle,
    #[error("Title must be at most {MAX_TITLE_LEN} characters")]
    TitleTooLong,
}

/// Validates a todo title.
///
/// A title is valid when it contains at least one non-whitespace character
/// and is at most [`MAX_TITLE_LEN`] characters long.
pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(ValidationError::TitleTooLong);
    }
    Ok(())
}
