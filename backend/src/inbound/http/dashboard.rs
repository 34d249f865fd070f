//! Dashboard metrics handler.
//!
//! ```text
//! GET /api/v1/admin/metrics
//! ```

use actix_web::{get, web};

use crate::domain::DashboardMetrics;
use crate::inbound::http::{AdminState, ApiResult};

/// Aggregate platform counts for the admin dashboard.
///
/// Either every count succeeds and one consistent snapshot is returned, or
/// the whole request fails; partial metrics are never served.
#[utoipa::path(
    get,
    path = "/api/v1/admin/metrics",
    responses(
        (status = 200, description = "Dashboard metrics", body = DashboardMetrics),
        (status = 500, description = "Internal server error", body = crate::domain::Error),
        (status = 503, description = "Data store unavailable", body = crate::domain::Error)
    ),
    tags = ["admin"],
    operation_id = "dashboardMetrics"
)]
#[get("/metrics")]
pub async fn dashboard_metrics(
    state: web::Data<AdminState>,
) -> ApiResult<web::Json<DashboardMetrics>> {
    let metrics = state.dashboard.dashboard_metrics().await?;
    Ok(web::Json(metrics))
}
