//! Appointment read models for the activity feed and metrics counts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Number of rows in the recent-appointments activity feed.
pub const RECENT_FEED_SIZE: i64 = 10;

/// Lifecycle state of an appointment.
///
/// Booking and status transitions happen outside this crate; the admin core
/// only filters and counts by status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    /// Text encoding used on the wire and in the persistence layer.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Confirmed => "CONFIRMED",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
        }
    }

    /// Parse the text encoding; `None` for unknown values.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "PENDING" => Some(Self::Pending),
            "CONFIRMED" => Some(Self::Confirmed),
            "COMPLETED" => Some(Self::Completed),
            "CANCELLED" => Some(Self::Cancelled),
            _ => None,
        }
    }

    /// Statuses that still need action and count toward "today" on the
    /// dashboard. Resolved appointments are excluded on purpose.
    pub const ACTIONABLE: [Self; 2] = [Self::Pending, Self::Confirmed];
}

impl std::fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Activity-feed row: an appointment joined with its participants' display
/// fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecentAppointment {
    pub id: Uuid,
    pub scheduled_time: DateTime<Utc>,
    pub status: AppointmentStatus,
    #[schema(example = "Ram Singh")]
    pub patient_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_phone: Option<String>,
    #[schema(example = "Dr. Mehta")]
    pub doctor_name: String,
}
