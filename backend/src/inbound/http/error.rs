//! HTTP adapter mapping for domain errors.
//!
//! Keeps the domain error type HTTP-agnostic while letting Actix handlers
//! turn domain failures into consistent JSON responses and status codes.
//! Internal errors are redacted before leaving the process; integrity errors
//! keep their message so an orphaned record is reported, not hidden.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use tracing::error;

use crate::domain::{Error, ErrorCode};

/// Name of the response header carrying the request trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::Forbidden => StatusCode::FORBIDDEN,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::DataIntegrity | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
    }
}

fn redact_if_internal(error: &Error) -> Error {
    if matches!(error.code, ErrorCode::InternalError) {
        let mut redacted = Error::internal("Internal server error");
        if let Some(id) = &error.trace_id {
            redacted = redacted.with_trace_id(id.clone());
        }
        redacted
    } else {
        error.clone()
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code)
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = &self.trace_id {
            builder.insert_header((TRACE_ID_HEADER, id.clone()));
        }

        builder.json(redact_if_internal(self))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        // Do not leak implementation details to clients.
        error!(error = %err, "actix error promoted to domain error");
        Error::internal("Internal server error")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Error::invalid_request("bad role"), StatusCode::BAD_REQUEST)]
    #[case(Error::unauthorized("missing token"), StatusCode::UNAUTHORIZED)]
    #[case(Error::forbidden("admins only"), StatusCode::FORBIDDEN)]
    #[case(Error::not_found("no such resource"), StatusCode::NOT_FOUND)]
    #[case(Error::data_integrity("orphaned item"), StatusCode::INTERNAL_SERVER_ERROR)]
    #[case(Error::service_unavailable("pool exhausted"), StatusCode::SERVICE_UNAVAILABLE)]
    #[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
    fn codes_map_to_statuses(#[case] error: Error, #[case] status: StatusCode) {
        assert_eq!(error.status_code(), status);
    }

    #[actix_web::test]
    async fn internal_errors_are_redacted() {
        let response = Error::internal("connection string was postgres://admin:hunter2@db")
            .error_response();
        let body = actix_web::body::to_bytes(response.into_body())
            .await
            .expect("body read");
        let payload: serde_json::Value = serde_json::from_slice(&body).expect("json body");
        assert_eq!(payload["message"], "Internal server error");
    }

    #[actix_web::test]
    async fn integrity_errors_keep_their_message() {
        let response = Error::data_integrity("inventory item 7 has no pharmacy").error_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = actix_web::body::to_bytes(response.into_body())
            .await
            .expect("body read");
        let payload: serde_json::Value = serde_json::from_slice(&body).expect("json body");
        assert_eq!(payload["code"], "data_integrity");
        assert_eq!(payload["message"], "inventory item 7 has no pharmacy");
    }

    #[test]
    fn trace_id_is_echoed_in_header_and_body() {
        let response = Error::service_unavailable("pool exhausted")
            .with_trace_id("7b1d8f0e-57e3-4a2b-9b11-d0f1a5c3e9ab")
            .error_response();
        let header = response
            .headers()
            .get(TRACE_ID_HEADER)
            .expect("trace id header");
        assert_eq!(header, "7b1d8f0e-57e3-4a2b-9b11-d0f1a5c3e9ab");
    }
}
