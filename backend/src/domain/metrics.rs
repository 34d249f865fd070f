//! Dashboard metrics aggregation.
//!
//! One request resolves one [`ReportingWindow`] and issues every sub-count
//! against it concurrently. Either all counts succeed and compose into one
//! consistent snapshot, or the whole aggregation fails; partial results are
//! never returned.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::ports::{
    AdminDashboardQuery, AppointmentRepository, InventoryRepository, UserDirectoryRepository,
};
use super::window::{ReportingWindow, LOW_STOCK_THRESHOLD};
use super::{AppointmentStatus, Error, UserRole};

/// User counts partitioned by role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserCounts {
    pub total: i64,
    pub patients: i64,
    pub doctors: i64,
    pub pharmacies: i64,
}

/// Appointment counts partitioned by window and status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentCounts {
    /// Actionable (pending or confirmed) appointments from today's midnight.
    pub today: i64,
    /// All appointments in the rolling seven-day window.
    pub this_week: i64,
    /// All appointments since the first of the month.
    pub this_month: i64,
    /// Lifetime completed total, unbounded by time.
    pub completed: i64,
}

/// Inventory alert counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InventoryCounts {
    pub low_stock: i64,
    pub expiring_soon: i64,
}

/// The complete dashboard metrics response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub users: UserCounts,
    pub appointments: AppointmentCounts,
    pub inventory: InventoryCounts,
}

/// Dashboard aggregation service over the three read repositories.
#[derive(Clone)]
pub struct DashboardService {
    users: Arc<dyn UserDirectoryRepository>,
    appointments: Arc<dyn AppointmentRepository>,
    inventory: Arc<dyn InventoryRepository>,
    clock: Arc<dyn Clock>,
}

impl DashboardService {
    /// Create the service from repository ports and a clock.
    pub fn new(
        users: Arc<dyn UserDirectoryRepository>,
        appointments: Arc<dyn AppointmentRepository>,
        inventory: Arc<dyn InventoryRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            users,
            appointments,
            inventory,
            clock,
        }
    }
}

#[async_trait]
impl AdminDashboardQuery for DashboardService {
    async fn dashboard_metrics(&self) -> Result<DashboardMetrics, Error> {
        // One clock read per request; every boundary below derives from it.
        let window = ReportingWindow::at(self.clock.utc());

        let (
            total,
            patients,
            doctors,
            pharmacies,
            today,
            this_week,
            this_month,
            completed,
            low_stock,
            expiring_soon,
        ) = tokio::try_join!(
            self.users.count_users(None),
            self.users.count_users(Some(UserRole::Patient)),
            self.users.count_users(Some(UserRole::Doctor)),
            self.users.count_users(Some(UserRole::Pharmacy)),
            self.appointments.count_scheduled_since(
                window.start_of_today(),
                Some(&AppointmentStatus::ACTIONABLE),
            ),
            self.appointments
                .count_scheduled_since(window.start_of_week(), None),
            self.appointments
                .count_scheduled_since(window.start_of_month(), None),
            self.appointments
                .count_with_status(AppointmentStatus::Completed),
            self.inventory.count_low_stock(LOW_STOCK_THRESHOLD),
            self.inventory
                .count_expiring_between(window.expiry_window_start(), window.expiry_window_end()),
        )?;

        Ok(DashboardMetrics {
            users: UserCounts {
                total,
                patients,
                doctors,
                pharmacies,
            },
            appointments: AppointmentCounts {
                today,
                this_week,
                this_month,
                completed,
            },
            inventory: InventoryCounts {
                low_stock,
                expiring_soon,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
    use rstest::rstest;

    use super::*;
    use crate::domain::listing::UserListFilter;
    use crate::domain::ports::AdminStoreError;
    use crate::domain::{ErrorCode, InventoryAlert, RecentAppointment, UserAccount};

    struct FrozenClock(DateTime<Utc>);

    impl Clock for FrozenClock {
        fn local(&self) -> DateTime<Local> {
            self.0.with_timezone(&Local)
        }

        fn utc(&self) -> DateTime<Utc> {
            self.0
        }
    }

    /// Records the boundaries each count was asked for and returns canned
    /// values keyed by call shape.
    #[derive(Default)]
    struct RecordingStore {
        appointment_windows: Mutex<Vec<DateTime<Utc>>>,
        fail_completed: bool,
    }

    #[async_trait]
    impl UserDirectoryRepository for RecordingStore {
        async fn count_users(&self, role: Option<UserRole>) -> Result<i64, AdminStoreError> {
            Ok(match role {
                None => 7,
                Some(UserRole::Patient) => 3,
                Some(UserRole::Doctor) => 2,
                Some(UserRole::Pharmacy) => 1,
                Some(UserRole::Admin) => 1,
            })
        }

        async fn find_page(
            &self,
            _filter: &UserListFilter,
            _limit: i64,
            _offset: i64,
        ) -> Result<(Vec<UserAccount>, i64), AdminStoreError> {
            Ok((Vec::new(), 0))
        }
    }

    #[async_trait]
    impl AppointmentRepository for RecordingStore {
        async fn count_scheduled_since(
            &self,
            from: DateTime<Utc>,
            statuses: Option<&[AppointmentStatus]>,
        ) -> Result<i64, AdminStoreError> {
            self.appointment_windows
                .lock()
                .expect("windows lock")
                .push(from);
            Ok(match statuses {
                Some(_) => 2,
                None => 5,
            })
        }

        async fn count_with_status(
            &self,
            _status: AppointmentStatus,
        ) -> Result<i64, AdminStoreError> {
            if self.fail_completed {
                return Err(AdminStoreError::query("database query failed"));
            }
            Ok(5)
        }

        async fn recent(&self, _limit: i64) -> Result<Vec<RecentAppointment>, AdminStoreError> {
            Ok(Vec::new())
        }
    }

    #[async_trait]
    impl InventoryRepository for RecordingStore {
        async fn count_low_stock(&self, threshold: i32) -> Result<i64, AdminStoreError> {
            assert_eq!(threshold, LOW_STOCK_THRESHOLD);
            Ok(1)
        }

        async fn count_expiring_between(
            &self,
            from: NaiveDate,
            to: NaiveDate,
        ) -> Result<i64, AdminStoreError> {
            assert_eq!(to - from, chrono::Duration::days(30));
            Ok(4)
        }

        async fn list_low_stock(
            &self,
            _threshold: i32,
        ) -> Result<Vec<InventoryAlert>, AdminStoreError> {
            Ok(Vec::new())
        }

        async fn list_expiring_between(
            &self,
            _from: NaiveDate,
            _to: NaiveDate,
        ) -> Result<Vec<InventoryAlert>, AdminStoreError> {
            Ok(Vec::new())
        }
    }

    fn service(store: Arc<RecordingStore>, now: DateTime<Utc>) -> DashboardService {
        DashboardService::new(
            store.clone(),
            store.clone(),
            store,
            Arc::new(FrozenClock(now)),
        )
    }

    #[rstest]
    #[tokio::test]
    async fn assembles_all_count_groups() {
        let store = Arc::new(RecordingStore::default());
        let now = Utc
            .with_ymd_and_hms(2024, 3, 15, 12, 0, 0)
            .single()
            .expect("valid timestamp");

        let metrics = service(store, now)
            .dashboard_metrics()
            .await
            .expect("metrics");

        assert_eq!(metrics.users.total, 7);
        assert_eq!(metrics.users.patients, 3);
        assert_eq!(metrics.users.doctors, 2);
        assert_eq!(metrics.users.pharmacies, 1);
        assert_eq!(metrics.appointments.today, 2);
        assert_eq!(metrics.appointments.this_week, 5);
        assert_eq!(metrics.appointments.this_month, 5);
        assert_eq!(metrics.appointments.completed, 5);
        assert_eq!(metrics.inventory.low_stock, 1);
        assert_eq!(metrics.inventory.expiring_soon, 4);
    }

    #[rstest]
    #[tokio::test]
    async fn all_appointment_counts_share_one_window() {
        let store = Arc::new(RecordingStore::default());
        let now = Utc
            .with_ymd_and_hms(2024, 3, 15, 12, 0, 0)
            .single()
            .expect("valid timestamp");
        let window = ReportingWindow::at(now);

        service(store.clone(), now)
            .dashboard_metrics()
            .await
            .expect("metrics");

        let mut froms = store
            .appointment_windows
            .lock()
            .expect("windows lock")
            .clone();
        froms.sort();
        assert_eq!(
            froms,
            vec![
                window.start_of_month(),
                window.start_of_week(),
                window.start_of_today(),
            ]
        );
    }

    #[rstest]
    #[tokio::test]
    async fn one_failed_sub_count_fails_the_whole_aggregation() {
        let store = Arc::new(RecordingStore {
            fail_completed: true,
            ..RecordingStore::default()
        });
        let now = Utc
            .with_ymd_and_hms(2024, 3, 15, 12, 0, 0)
            .single()
            .expect("valid timestamp");

        let err = service(store, now)
            .dashboard_metrics()
            .await
            .expect_err("aggregation must fail closed");
        assert_eq!(err.code, ErrorCode::InternalError);
    }
}
