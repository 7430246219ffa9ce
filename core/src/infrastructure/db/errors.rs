use sea_orm::{DbErr, SqlErr};
use tracing::{error, warn};

use crate::domain::common::entities::app_errors::CoreError;

/// Maps an insert failure to [`CoreError::AlreadyExists`] when a unique index
/// rejected the row, otherwise to [`CoreError::InternalServerError`].
pub fn map_insert_error(kind: &str, key: &str, e: DbErr) -> CoreError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            warn!("Duplicate {} '{}': {}", kind, key, detail);
            CoreError::AlreadyExists(format!("{kind} '{key}' already exists"))
        }
        _ => {
            error!("Failed to create {}: {}", kind, e);
            CoreError::InternalServerError
        }
    }
}
