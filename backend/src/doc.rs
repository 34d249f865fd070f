//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] struct generating the OpenAPI specification for
//! the admin REST API: the four admin read endpoints, the health probes, and
//! the schemas their responses are built from. Swagger UI serves the document
//! in debug builds.

use utoipa::OpenApi;

use crate::domain::{
    AppointmentCounts, AppointmentStatus, DashboardMetrics, Error, ErrorCode, InventoryAlert,
    InventoryAlerts, InventoryCounts, RecentAppointment, UserAccount, UserCounts, UserListPage,
    UserRole,
};

/// OpenAPI document for the admin REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "CareGrid admin API",
        description = "Read-only administrative metrics, listings and alerts."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::dashboard::dashboard_metrics,
        crate::inbound::http::users::list_users,
        crate::inbound::http::appointments::recent_appointments,
        crate::inbound::http::inventory::inventory_alerts,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        DashboardMetrics,
        UserCounts,
        AppointmentCounts,
        InventoryCounts,
        UserAccount,
        UserRole,
        UserListPage,
        RecentAppointment,
        AppointmentStatus,
        InventoryAlert,
        InventoryAlerts,
        Error,
        ErrorCode,
    )),
    tags(
        (name = "admin", description = "Administrative read endpoints"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::openapi::schema::Schema;
    use utoipa::openapi::RefOr;

    /// Assert that an Object schema contains a field with the given name.
    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[test]
    fn registers_all_admin_paths() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/v1/admin/metrics",
            "/api/v1/admin/users",
            "/api/v1/admin/appointments/recent",
            "/api/v1/admin/inventory/alerts",
            "/health/ready",
            "/health/live",
        ] {
            assert!(
                doc.paths.paths.contains_key(path),
                "document should describe {path}"
            );
        }
    }

    #[test]
    fn metrics_schema_has_count_groups() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let metrics = schemas.get("DashboardMetrics").expect("metrics schema");

        assert_object_schema_has_field(metrics, "users");
        assert_object_schema_has_field(metrics, "appointments");
        assert_object_schema_has_field(metrics, "inventory");
    }

    #[test]
    fn error_schema_has_required_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let error = schemas.get("Error").expect("Error schema");

        assert_object_schema_has_field(error, "code");
        assert_object_schema_has_field(error, "message");
    }
}
