//! Text requirements as outcomes.

use thiserror::Error;

use crate::outcome::Outcome;

/// Why a piece of text was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum TextError {
    /// The text was missing.
    #[error("text is missing")]
    Null,
    /// The text had zero length.
    #[error("text is empty")]
    Empty,
    /// The text held only whitespace.
    #[error("text contains only whitespace")]
    WhiteSpace,
}

/// Requires text that is present and holds at least one non-whitespace character.
///
/// # Examples
///
/// ```rust
/// use outcome::adapters::{TextError, require_content};
/// use outcome::outcome::Outcome;
///
/// assert_eq!(require_content(Some("name")), Outcome::value("name"));
/// assert_eq!(require_content(Some("  ")), Outcome::error(TextError::WhiteSpace));
/// assert_eq!(require_content(None), Outcome::error(TextError::Null));
/// ```
pub fn require_content(text: Option<&str>) -> Outcome<&str, TextError> {
    require_non_empty(text).filter(|text| !text.trim().is_empty(), |_| TextError::WhiteSpace)
}

/// Requires text that is present and non-empty. Whitespace is accepted.
pub fn require_non_empty(text: Option<&str>) -> Outcome<&str, TextError> {
    match text {
        None => Outcome::error(TextError::Null),
        Some("") => Outcome::error(TextError::Empty),
        Some(text) => Outcome::value(text),
    }
}
