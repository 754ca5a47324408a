//! Input coercion utilities

use crate::error::{InputError, InputResult};

/// Parse the major ID typed for a student
///
/// Blank input means "no major ID" and yields `None`; anything else must be
/// an integer.
pub fn parse_major_id(input: &str) -> InputResult<Option<i32>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    trimmed
        .parse()
        .map(Some)
        .map_err(|source| InputError::InvalidInteger {
            field: "major_id",
            value: trimmed.to_string(),
            source,
        })
}
