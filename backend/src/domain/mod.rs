//! Core administrative domain: reporting windows, read models, services and
//! the ports they are wired through. Nothing in this module touches HTTP or
//! the database directly.

mod alerts;
mod appointment;
mod error;
mod inventory;
pub mod listing;
mod metrics;
pub mod ports;
mod user;
mod window;

pub use alerts::StockAlertService;
pub use appointment::{AppointmentStatus, RecentAppointment, RECENT_FEED_SIZE};
pub use error::{Error, ErrorCode};
pub use inventory::{InventoryAlert, InventoryAlerts};
pub use listing::{
    ActivityFeedService, DirectoryService, UserListFilter, UserListPage, UserListRequest,
};
pub use metrics::{
    AppointmentCounts, DashboardMetrics, DashboardService, InventoryCounts, UserCounts,
};
pub use user::{UserAccount, UserRole};
pub use window::{
    ReportingWindow, EXPIRY_WINDOW_DAYS, LOW_STOCK_THRESHOLD, ROLLING_WEEK_DAYS,
};
