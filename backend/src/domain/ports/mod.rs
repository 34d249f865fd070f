//! Domain ports defining the edges of the hexagon.
//!
//! Driven ports describe what the admin core needs from the data store;
//! driving ports describe the use-cases the HTTP adapter invokes. Adapters
//! map their failures into [`AdminStoreError`] so the services can translate
//! them into one predictable error surface.

mod queries;
mod repositories;

pub use queries::{
    ActivityFeedQuery, AdminDashboardQuery, FixtureActivityFeedQuery, FixtureAdminDashboardQuery,
    FixtureInventoryAlertsQuery, FixtureUserDirectoryQuery, InventoryAlertsQuery,
    UserDirectoryQuery,
};
pub use repositories::{AppointmentRepository, InventoryRepository, UserDirectoryRepository};

use thiserror::Error as ThisError;

use super::Error;

/// Failures surfaced by the data store adapters.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum AdminStoreError {
    /// A connection could not be checked out or the backend is unreachable.
    #[error("data store connection failed: {message}")]
    Connection { message: String },
    /// A query failed during execution.
    #[error("data store query failed: {message}")]
    Query { message: String },
    /// A stored row references an entity that does not resolve. Surfaced as
    /// its own category so an orphaned alert is reported instead of dropped.
    #[error("data integrity violation: {message}")]
    Integrity { message: String },
}

impl AdminStoreError {
    /// Helper for connection oriented failures.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Helper for query failures.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }

    /// Helper for unresolvable references.
    pub fn integrity(message: impl Into<String>) -> Self {
        Self::Integrity {
            message: message.into(),
        }
    }
}

impl From<AdminStoreError> for Error {
    fn from(error: AdminStoreError) -> Self {
        match error {
            AdminStoreError::Connection { message } => Error::service_unavailable(message),
            AdminStoreError::Query { message } => Error::internal(message),
            AdminStoreError::Integrity { message } => Error::data_integrity(message),
        }
    }
}
