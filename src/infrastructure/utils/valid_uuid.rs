use uuid::Uuid;

use crate::errors::AppError;

/// Parse a path segment as a UUID. A malformed id can never name a
/// row, so it is reported the same way as a missing one.
pub fn valid_uuid(id: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(id).map_err(|_| AppError::NotFound("Record not found".to_string()))
}
