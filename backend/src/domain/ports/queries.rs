//! Driving ports for the four admin read views.
//!
//! HTTP handlers depend on these traits only; production backs them with the
//! domain services over Diesel repositories, while development without a
//! database and handler tests use the deterministic `Fixture*`
//! implementations.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::domain::listing::{total_pages, UserListPage, UserListRequest};
use crate::domain::{
    AppointmentCounts, AppointmentStatus, DashboardMetrics, Error, InventoryAlert,
    InventoryAlerts, InventoryCounts, RecentAppointment, UserAccount, UserCounts, UserRole,
};

/// Use-case port for the dashboard metrics view.
#[async_trait]
pub trait AdminDashboardQuery: Send + Sync {
    /// Assemble all dashboard counts against one reporting window.
    async fn dashboard_metrics(&self) -> Result<DashboardMetrics, Error>;
}

/// Use-case port for the paginated, filterable user directory.
#[async_trait]
pub trait UserDirectoryQuery: Send + Sync {
    /// Return one directory page for the normalized request.
    async fn list_users(&self, request: UserListRequest) -> Result<UserListPage, Error>;
}

/// Use-case port for the fixed-size recent-appointments feed.
#[async_trait]
pub trait ActivityFeedQuery: Send + Sync {
    /// Return the activity feed, newest first.
    async fn recent_appointments(&self) -> Result<Vec<RecentAppointment>, Error>;
}

/// Use-case port for the inventory alert feed.
#[async_trait]
pub trait InventoryAlertsQuery: Send + Sync {
    /// Return both alert lists resolved against one window.
    async fn inventory_alerts(&self) -> Result<InventoryAlerts, Error>;
}

// Fixture values are compile-time constants; surface invalid data as an
// internal error so automated checks catch accidental regressions.
fn fixture_uuid(value: &str) -> Result<Uuid, Error> {
    Uuid::parse_str(value).map_err(|err| Error::internal(format!("invalid fixture id: {err}")))
}

fn fixture_instant(value: &str) -> Result<DateTime<Utc>, Error> {
    DateTime::parse_from_rfc3339(value)
        .map(|instant| instant.with_timezone(&Utc))
        .map_err(|err| Error::internal(format!("invalid fixture timestamp: {err}")))
}

fn fixture_date(value: &str) -> Result<NaiveDate, Error> {
    value
        .parse()
        .map_err(|err| Error::internal(format!("invalid fixture date: {err}")))
}

/// Deterministic dashboard metrics used until persistence is wired.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureAdminDashboardQuery;

#[async_trait]
impl AdminDashboardQuery for FixtureAdminDashboardQuery {
    async fn dashboard_metrics(&self) -> Result<DashboardMetrics, Error> {
        Ok(DashboardMetrics {
            users: UserCounts {
                total: 4,
                patients: 2,
                doctors: 1,
                pharmacies: 1,
            },
            appointments: AppointmentCounts {
                today: 1,
                this_week: 3,
                this_month: 5,
                completed: 2,
            },
            inventory: InventoryCounts {
                low_stock: 1,
                expiring_soon: 1,
            },
        })
    }
}

/// Deterministic two-user directory used until persistence is wired.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureUserDirectoryQuery;

#[async_trait]
impl UserDirectoryQuery for FixtureUserDirectoryQuery {
    async fn list_users(&self, request: UserListRequest) -> Result<UserListPage, Error> {
        let mut users = vec![
            UserAccount {
                id: fixture_uuid("3fa85f64-5717-4562-b3fc-2c963f66afa6")?,
                name: "Ram Singh".into(),
                email: Some("ram.singh@example.org".into()),
                phone: Some("+91-98100-00001".into()),
                role: UserRole::Patient,
                created_at: fixture_instant("2024-02-02T10:00:00Z")?,
            },
            UserAccount {
                id: fixture_uuid("7c9e6679-7425-40de-944b-e07fc1f90ae7")?,
                name: "Asha Mehta".into(),
                email: Some("asha.mehta@example.org".into()),
                phone: None,
                role: UserRole::Doctor,
                created_at: fixture_instant("2024-01-15T08:30:00Z")?,
            },
        ];

        // The fixture honours the filter contract so no-DB mode behaves like
        // the real directory.
        let filter = request.filter();
        users.retain(|user| {
            filter.role.map_or(true, |role| user.role == role)
                && filter.search.as_ref().map_or(true, |term| {
                    user.name.to_lowercase().contains(&term.to_lowercase())
                })
        });

        let total = users.len() as i64;
        let users = if request.page() == 1 { users } else { Vec::new() };

        Ok(UserListPage {
            total,
            page: request.page(),
            total_pages: total_pages(total, request.limit()),
            users,
        })
    }
}

/// Deterministic single-row activity feed used until persistence is wired.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureActivityFeedQuery;

#[async_trait]
impl ActivityFeedQuery for FixtureActivityFeedQuery {
    async fn recent_appointments(&self) -> Result<Vec<RecentAppointment>, Error> {
        Ok(vec![RecentAppointment {
            id: fixture_uuid("9b2c1f40-30aa-4df1-9f88-0f4a2f2d4a61")?,
            scheduled_time: fixture_instant("2024-02-05T09:15:00Z")?,
            status: AppointmentStatus::Confirmed,
            patient_name: "Ram Singh".into(),
            patient_phone: Some("+91-98100-00001".into()),
            doctor_name: "Asha Mehta".into(),
        }])
    }
}

/// Deterministic inventory alerts used until persistence is wired.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureInventoryAlertsQuery;

#[async_trait]
impl InventoryAlertsQuery for FixtureInventoryAlertsQuery {
    async fn inventory_alerts(&self) -> Result<InventoryAlerts, Error> {
        let alert = InventoryAlert {
            id: fixture_uuid("f2c8a1d4-55e1-4f76-9f0b-2a4f8f5f5c1e")?,
            pharmacy_id: fixture_uuid("0d5c1b1e-9a54-4f7b-8f6e-3c2a1d0e9f88")?,
            quantity: 4,
            expiry_date: fixture_date("2024-02-20")?,
            pharmacy_name: "City Pharmacy".into(),
            pharmacy_phone: Some("+91-98100-00009".into()),
        };
        Ok(InventoryAlerts {
            low_stock: vec![alert.clone()],
            expiring_soon: vec![alert],
        })
    }
}
