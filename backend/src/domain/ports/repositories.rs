//! Driven ports: read operations the admin core requires from the store.
//!
//! All operations are read-only; this core never mutates any entity. Filter
//! inputs are typed values, not ad hoc filter maps, so adapters build their
//! predicates from explicitly supplied clauses only.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::listing::UserListFilter;
use crate::domain::{
    AppointmentStatus, InventoryAlert, RecentAppointment, UserAccount, UserRole,
};

use super::AdminStoreError;

/// Read access to the user collection.
#[async_trait]
pub trait UserDirectoryRepository: Send + Sync {
    /// Count users, optionally restricted to one role.
    async fn count_users(&self, role: Option<UserRole>) -> Result<i64, AdminStoreError>;

    /// One page of the directory plus the filtered total, sorted by
    /// `created_at` descending. Only non-sensitive columns are projected.
    async fn find_page(
        &self,
        filter: &UserListFilter,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<UserAccount>, i64), AdminStoreError>;
}

/// Read access to the appointment collection.
#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    /// Count appointments scheduled at or after `from`, optionally limited
    /// to the given statuses.
    async fn count_scheduled_since(
        &self,
        from: DateTime<Utc>,
        statuses: Option<&[AppointmentStatus]>,
    ) -> Result<i64, AdminStoreError>;

    /// Lifetime count of appointments in one status.
    async fn count_with_status(&self, status: AppointmentStatus) -> Result<i64, AdminStoreError>;

    /// Most recent appointments by `scheduled_time` descending, joined with
    /// participant display fields. An appointment whose patient or doctor
    /// cannot be resolved is an [`AdminStoreError::Integrity`] failure.
    async fn recent(&self, limit: i64) -> Result<Vec<RecentAppointment>, AdminStoreError>;
}

/// Read access to the inventory collection.
#[async_trait]
pub trait InventoryRepository: Send + Sync {
    /// Count items with quantity strictly below `threshold`.
    async fn count_low_stock(&self, threshold: i32) -> Result<i64, AdminStoreError>;

    /// Count items expiring within `[from, to]`, inclusive on both ends.
    async fn count_expiring_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<i64, AdminStoreError>;

    /// Items with quantity strictly below `threshold`, most depleted first,
    /// enriched with the owning pharmacy and its contact user. A dangling
    /// pharmacy reference is an [`AdminStoreError::Integrity`] failure.
    async fn list_low_stock(&self, threshold: i32) -> Result<Vec<InventoryAlert>, AdminStoreError>;

    /// Items expiring within `[from, to]` inclusive, soonest first, enriched
    /// the same way as [`Self::list_low_stock`].
    async fn list_expiring_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<InventoryAlert>, AdminStoreError>;
}
