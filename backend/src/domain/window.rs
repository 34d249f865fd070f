//! Reporting window resolution.
//!
//! Every aggregation request captures the clock exactly once and derives all
//! of its time boundaries from that single instant. Sub-queries issued for
//! the same request therefore agree on what "today" means even when they run
//! concurrently or the request is slow.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc};

/// Items with a quantity strictly below this count are low stock.
pub const LOW_STOCK_THRESHOLD: i32 = 10;

/// Days ahead of the capture instant covered by the expiry alert window.
pub const EXPIRY_WINDOW_DAYS: i64 = 30;

/// Length of the rolling "this week" window in days.
pub const ROLLING_WEEK_DAYS: i64 = 7;

/// Immutable set of boundaries derived from one capture instant.
///
/// # Examples
/// ```
/// use caregrid_backend::domain::ReportingWindow;
/// use chrono::{TimeZone, Utc};
///
/// let now = Utc.with_ymd_and_hms(2024, 3, 15, 14, 30, 0).single().expect("valid");
/// let window = ReportingWindow::at(now);
/// assert_eq!(window.start_of_today(), Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).single().expect("valid"));
/// assert_eq!(window.start_of_month(), Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).single().expect("valid"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportingWindow {
    captured_at: DateTime<Utc>,
    start_of_today: DateTime<Utc>,
    start_of_week: DateTime<Utc>,
    start_of_month: DateTime<Utc>,
    alert_horizon: DateTime<Utc>,
}

impl ReportingWindow {
    /// Resolve all boundaries from a single capture instant. Pure.
    pub fn at(now: DateTime<Utc>) -> Self {
        let today = now.date_naive();
        // The first of the month always exists.
        let month_start = today.with_day0(0).unwrap_or(today);

        Self {
            captured_at: now,
            start_of_today: midnight(today),
            start_of_week: midnight(today) - Duration::days(ROLLING_WEEK_DAYS),
            start_of_month: midnight(month_start),
            alert_horizon: now + Duration::days(EXPIRY_WINDOW_DAYS),
        }
    }

    /// The instant the window was captured at.
    pub fn captured_at(&self) -> DateTime<Utc> {
        self.captured_at
    }

    /// Midnight at the start of the capture instant's calendar day.
    pub fn start_of_today(&self) -> DateTime<Utc> {
        self.start_of_today
    }

    /// Rolling seven-day boundary: `start_of_today` minus seven days.
    pub fn start_of_week(&self) -> DateTime<Utc> {
        self.start_of_week
    }

    /// Midnight on the first day of the capture instant's month.
    pub fn start_of_month(&self) -> DateTime<Utc> {
        self.start_of_month
    }

    /// Upper bound of the expiring-soon window: capture instant plus 30 days.
    pub fn alert_horizon(&self) -> DateTime<Utc> {
        self.alert_horizon
    }

    /// First calendar day of the expiry window (inclusive).
    pub fn expiry_window_start(&self) -> NaiveDate {
        self.captured_at.date_naive()
    }

    /// Last calendar day of the expiry window (inclusive).
    pub fn expiry_window_end(&self) -> NaiveDate {
        self.alert_horizon.date_naive()
    }
}

fn midnight(day: NaiveDate) -> DateTime<Utc> {
    day.and_time(NaiveTime::MIN).and_utc()
}
