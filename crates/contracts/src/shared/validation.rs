//! Local validation of form drafts

use thiserror::Error;

/// A field-scoped validation failure.
///
/// `message` is shown to the user as-is; `field` names the offending input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Returns true when the value is empty after trimming
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Parse an integer and check it lies within `min..=max`
pub fn parse_in_range(value: &str, min: i32, max: i32) -> Option<i32> {
    value
        .trim()
        .parse::<i32>()
        .ok()
        .filter(|v| (min..=max).contains(v))
}
