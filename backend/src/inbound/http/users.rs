//! User directory handler.
//!
//! ```text
//! GET /api/v1/admin/users?page=2&limit=20&role=DOCTOR&search=mehta
//! ```

use actix_web::{get, web};
use serde::Deserialize;
use serde_json::json;

use crate::domain::{Error, UserListPage, UserListRequest, UserRole};
use crate::inbound::http::{AdminState, ApiResult};

/// Raw query parameters before normalization.
///
/// All fields arrive as strings so malformed numbers can fall back to the
/// defaults instead of failing deserialization with an opaque 400.
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct UserListParams {
    /// One-based page number; defaults to 1.
    pub page: Option<String>,
    /// Rows per page; defaults to 20, capped at 100.
    pub limit: Option<String>,
    /// Role filter; `ALL` or absent applies no filter.
    pub role: Option<String>,
    /// Case-insensitive substring match on the display name.
    pub search: Option<String>,
}

impl UserListParams {
    /// Normalize into a directory request. Unusable page and limit values
    /// fall back silently; an unknown role is the one rejected input.
    fn into_request(self) -> Result<UserListRequest, Error> {
        let page = self.page.as_deref().and_then(|raw| raw.trim().parse().ok());
        let limit = self.limit.as_deref().and_then(|raw| raw.trim().parse().ok());
        let role = parse_role_filter(self.role.as_deref())?;
        Ok(UserListRequest::new(page, limit, role, self.search))
    }
}

fn parse_role_filter(raw: Option<&str>) -> Result<Option<UserRole>, Error> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let upper = trimmed.to_ascii_uppercase();
    if upper == "ALL" {
        return Ok(None);
    }
    match UserRole::parse(&upper) {
        Some(role) => Ok(Some(role)),
        None => Err(
            Error::invalid_request(format!("unknown role filter: {trimmed}"))
                .with_details(json!({ "field": "role", "value": trimmed })),
        ),
    }
}

/// One page of the user directory, filtered and sorted newest first.
///
/// Credential and other sensitive columns are never projected by the store,
/// so they cannot appear here regardless of serialization settings.
#[utoipa::path(
    get,
    path = "/api/v1/admin/users",
    params(UserListParams),
    responses(
        (status = 200, description = "Directory page", body = UserListPage),
        (status = 400, description = "Unknown role filter", body = Error),
        (status = 500, description = "Internal server error", body = Error),
        (status = 503, description = "Data store unavailable", body = Error)
    ),
    tags = ["admin"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(
    state: web::Data<AdminState>,
    params: web::Query<UserListParams>,
) -> ApiResult<web::Json<UserListPage>> {
    let request = params.into_inner().into_request()?;
    let page = state.directory.list_users(request).await?;
    Ok(web::Json(page))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test as actix_test, App};
    use async_trait::async_trait;
    use rstest::rstest;
    use serde_json::Value;
    use std::sync::{Arc, Mutex};

    use crate::domain::ports::UserDirectoryQuery;
    use crate::domain::{listing::total_pages, UserListFilter};

    /// Records the normalized request and returns an empty page.
    struct RecordingDirectory {
        seen: Mutex<Option<UserListRequest>>,
    }

    #[async_trait]
    impl UserDirectoryQuery for RecordingDirectory {
        async fn list_users(&self, request: UserListRequest) -> Result<UserListPage, Error> {
            let page = UserListPage {
                users: Vec::new(),
                total: 0,
                page: request.page(),
                total_pages: total_pages(0, request.limit()),
            };
            *self.seen.lock().expect("seen lock") = Some(request);
            Ok(page)
        }
    }

    fn state_with(directory: Arc<dyn UserDirectoryQuery>) -> AdminState {
        let fixtures = AdminState::fixtures();
        AdminState::new(
            fixtures.dashboard,
            directory,
            fixtures.activity,
            fixtures.alerts,
        )
    }

    async fn request_with(
        directory: Arc<RecordingDirectory>,
        uri: &str,
    ) -> actix_web::dev::ServiceResponse {
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(state_with(directory)))
                .service(web::scope("/api/v1/admin").service(list_users)),
        )
        .await;
        actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request()).await
    }

    fn recording() -> Arc<RecordingDirectory> {
        Arc::new(RecordingDirectory {
            seen: Mutex::new(None),
        })
    }

    #[rstest]
    #[case("/api/v1/admin/users", 1, 20, None, None)]
    #[case("/api/v1/admin/users?page=3&limit=50", 3, 50, None, None)]
    #[case("/api/v1/admin/users?page=abc&limit=banana", 1, 20, None, None)]
    #[case("/api/v1/admin/users?page=0&limit=-5", 1, 20, None, None)]
    #[case("/api/v1/admin/users?limit=5000", 1, 100, None, None)]
    #[case(
        "/api/v1/admin/users?role=doctor&search=mehta",
        1,
        20,
        Some(UserRole::Doctor),
        Some("mehta")
    )]
    #[case("/api/v1/admin/users?role=ALL", 1, 20, None, None)]
    #[case("/api/v1/admin/users?role=", 1, 20, None, None)]
    #[actix_web::test]
    async fn query_parameters_normalize(
        #[case] uri: &str,
        #[case] page: i64,
        #[case] limit: i64,
        #[case] role: Option<UserRole>,
        #[case] search: Option<&str>,
    ) {
        let directory = recording();
        let res = request_with(directory.clone(), uri).await;
        assert_eq!(res.status(), StatusCode::OK);

        let seen = directory
            .seen
            .lock()
            .expect("seen lock")
            .clone()
            .expect("handler reached the port");
        assert_eq!(seen.page(), page);
        assert_eq!(seen.limit(), limit);
        assert_eq!(
            seen.filter(),
            &UserListFilter {
                role,
                search: search.map(str::to_owned),
            }
        );
    }

    #[actix_web::test]
    async fn unknown_role_is_rejected_with_details() {
        let directory = recording();
        let res = request_with(directory.clone(), "/api/v1/admin/users?role=WIZARD").await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert!(directory.seen.lock().expect("seen lock").is_none());

        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body["code"], "invalid_request");
        assert_eq!(body["details"]["field"], "role");
        assert_eq!(body["details"]["value"], "WIZARD");
    }

    #[actix_web::test]
    async fn fixture_page_serializes_camel_case() {
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(AdminState::fixtures()))
                .service(web::scope("/api/v1/admin").service(list_users)),
        )
        .await;

        let req = actix_test::TestRequest::get()
            .uri("/api/v1/admin/users")
            .to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["total"], 2);
        assert_eq!(body["totalPages"], 1);
        assert_eq!(body["users"][0]["name"], "Ram Singh");
        assert_eq!(body["users"][0]["role"], "PATIENT");
        assert_eq!(body["users"][0].get("passwordHash"), None);
    }
}
