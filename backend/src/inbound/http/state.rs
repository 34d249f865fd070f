//! Shared application state handed to the HTTP handlers.

use std::sync::Arc;

use crate::domain::ports::{
    ActivityFeedQuery, AdminDashboardQuery, InventoryAlertsQuery, UserDirectoryQuery,
};

/// Bundle of driving ports the admin handlers resolve their use-cases
/// through. Cloning is cheap; the ports are shared behind `Arc`.
#[derive(Clone)]
pub struct AdminState {
    pub dashboard: Arc<dyn AdminDashboardQuery>,
    pub directory: Arc<dyn UserDirectoryQuery>,
    pub activity: Arc<dyn ActivityFeedQuery>,
    pub alerts: Arc<dyn InventoryAlertsQuery>,
}

impl AdminState {
    pub fn new(
        dashboard: Arc<dyn AdminDashboardQuery>,
        directory: Arc<dyn UserDirectoryQuery>,
        activity: Arc<dyn ActivityFeedQuery>,
        alerts: Arc<dyn InventoryAlertsQuery>,
    ) -> Self {
        Self {
            dashboard,
            directory,
            activity,
            alerts,
        }
    }

    /// State backed entirely by the deterministic fixture ports, used when no
    /// database is configured and in handler tests.
    pub fn fixtures() -> Self {
        use crate::domain::ports::{
            FixtureActivityFeedQuery, FixtureAdminDashboardQuery, FixtureInventoryAlertsQuery,
            FixtureUserDirectoryQuery,
        };

        Self::new(
            Arc::new(FixtureAdminDashboardQuery),
            Arc::new(FixtureUserDirectoryQuery),
            Arc::new(FixtureActivityFeedQuery),
            Arc::new(FixtureInventoryAlertsQuery),
        )
    }
}
