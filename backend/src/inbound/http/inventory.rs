//! Inventory alerts handler.
//!
//! ```text
//! GET /api/v1/admin/inventory/alerts
//! ```

use actix_web::{get, web};

use crate::domain::InventoryAlerts;
use crate::inbound::http::{AdminState, ApiResult};

/// Low-stock and expiring-soon alert feeds, each enriched with the owning
/// pharmacy and its contact user. An item may legitimately appear in both
/// lists.
#[utoipa::path(
    get,
    path = "/api/v1/admin/inventory/alerts",
    responses(
        (status = 200, description = "Inventory alerts", body = InventoryAlerts),
        (status = 500, description = "Internal server error", body = crate::domain::Error),
        (status = 503, description = "Data store unavailable", body = crate::domain::Error)
    ),
    tags = ["admin"],
    operation_id = "inventoryAlerts"
)]
#[get("/inventory/alerts")]
pub async fn inventory_alerts(
    state: web::Data<AdminState>,
) -> ApiResult<web::Json<InventoryAlerts>> {
    let alerts = state.alerts.inventory_alerts().await?;
    Ok(web::Json(alerts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test as actix_test;
    use actix_web::App;
    use serde_json::Value;

    #[actix_web::test]
    async fn serves_both_alert_feeds() {
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(AdminState::fixtures()))
                .service(web::scope("/api/v1/admin").service(inventory_alerts)),
        )
        .await;

        let req = actix_test::TestRequest::get()
            .uri("/api/v1/admin/inventory/alerts")
            .to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["lowStock"][0]["quantity"], 4);
        assert_eq!(body["lowStock"][0]["pharmacyName"], "City Pharmacy");
        assert_eq!(body["expiringSoon"][0]["expiryDate"], "2024-02-20");
    }
}
