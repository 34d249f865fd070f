//! Recent-appointments feed handler.
//!
//! ```text
//! GET /api/v1/admin/appointments/recent
//! ```

use actix_web::{get, web};

use crate::domain::RecentAppointment;
use crate::inbound::http::{AdminState, ApiResult};

/// The ten most recent appointments by scheduled time, any status, enriched
/// with participant display fields. The feed size is fixed; it is not
/// paginated and takes no parameters.
#[utoipa::path(
    get,
    path = "/api/v1/admin/appointments/recent",
    responses(
        (status = 200, description = "Recent appointments", body = [RecentAppointment]),
        (status = 500, description = "Internal server error", body = crate::domain::Error),
        (status = 503, description = "Data store unavailable", body = crate::domain::Error)
    ),
    tags = ["admin"],
    operation_id = "recentAppointments"
)]
#[get("/appointments/recent")]
pub async fn recent_appointments(
    state: web::Data<AdminState>,
) -> ApiResult<web::Json<Vec<RecentAppointment>>> {
    let feed = state.activity.recent_appointments().await?;
    Ok(web::Json(feed))
}
