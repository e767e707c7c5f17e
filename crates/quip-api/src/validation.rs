//! Bounds on caller-supplied search terms and names.

use crate::error::ApiError;

/// The remote API rejects shorter queries.
pub const MIN_QUERY_LEN: usize = 3;
pub const MAX_QUERY_LEN: usize = 120;
pub const MIN_NAME_LEN: usize = 1;
pub const MAX_NAME_LEN: usize = 100;

/// Trim `raw` and check its length in characters against `min..=max`.
fn bounded<'a>(
  field: &str,
  raw: &'a str,
  min: usize,
  max: usize,
) -> Result<&'a str, ApiError> {
  let value = raw.trim();
  let len = value.chars().count();
  if len < min {
    return Err(ApiError::BadRequest(format!(
      "{field} of minimum length {min} is required"
    )));
  }
  if len > max {
    return Err(ApiError::BadRequest(format!(
      "max {field} length is {max}"
    )));
  }
  Ok(value)
}

pub fn query(raw: &str) -> Result<&str, ApiError> {
  bounded("query", raw, MIN_QUERY_LEN, MAX_QUERY_LEN)
}

pub fn name(raw: &str) -> Result<&str, ApiError> {
  bounded("name", raw, MIN_NAME_LEN, MAX_NAME_LEN)
}
