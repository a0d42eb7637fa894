pub mod area;
pub mod auth;
pub mod cleaning;
pub mod staff;
pub mod task_list;
pub mod template;
pub mod template_list;

use crate::error::ApiError;

/// Parses an identifier taken from a request path.
pub fn parse_id(raw: &str, field: &str) -> Result<i32, ApiError> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| ApiError::InvalidRequest(format!("{field} must be an integer")))
}

pub(crate) fn require_non_empty(value: &str, field: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        Err(ApiError::InvalidRequest(format!("{field} must not be empty")))
    } else {
        Ok(())
    }
}
