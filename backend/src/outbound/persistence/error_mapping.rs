//! Shared pool and Diesel error mapping for the admin repositories.

use tracing::debug;

use crate::domain::ports::AdminStoreError;

use super::pool::PoolError;

/// Map pool failures onto the store error surface.
pub fn map_pool_error(error: PoolError) -> AdminStoreError {
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    AdminStoreError::connection(message)
}

/// Map common Diesel error variants onto the store error surface. The
/// original error is logged at debug level; only stable phrases cross the
/// port boundary.
pub fn map_diesel_error(error: diesel::result::Error) -> AdminStoreError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => AdminStoreError::query("record not found"),
        DieselError::QueryBuilderError(_) => AdminStoreError::query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            AdminStoreError::connection("database connection error")
        }
        DieselError::DatabaseError(_, _) => AdminStoreError::query("database error"),
        _ => AdminStoreError::query("database error"),
    }
}
