//! Uniform JSON envelope returned by every API route.
//!
//! The `success` flag is derived from the status code when an [`Envelope`]
//! is built, so a body can never claim success for a failed response.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;

pub const NOT_FOUND_MESSAGE: &str = "Resource not found";
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized";
pub const FORBIDDEN_MESSAGE: &str = "Forbidden";
pub const SERVER_ERROR_MESSAGE: &str = "Internal server error";

/// Wire shape of the envelope.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
}

/// An [`ApiResponse`] paired with the HTTP status it is sent with.
#[derive(Debug)]
pub struct Envelope<T> {
    status: StatusCode,
    body: ApiResponse<T>,
}

impl<T> Envelope<T> {
    fn build(
        status: StatusCode,
        data: Option<T>,
        message: Option<String>,
        error: Option<String>,
        meta: Option<Value>,
    ) -> Self {
        let error = error.filter(|_| status.as_u16() >= 400);
        Self {
            status,
            body: ApiResponse {
                success: status.is_success(),
                data,
                message,
                error,
                meta,
            },
        }
    }

    pub fn success(data: T, status: StatusCode, meta: Option<Value>) -> Self {
        Self::build(status, Some(data), None, None, meta)
    }

    pub fn ok(data: T) -> Self {
        Self::success(data, StatusCode::OK, None)
    }

    pub fn error(message: impl Into<String>, status: StatusCode, detail: Option<String>) -> Self {
        Self::build(status, None, Some(message.into()), detail, None)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::error(message, StatusCode::BAD_REQUEST, None)
    }

    pub fn not_found() -> Self {
        Self::error(NOT_FOUND_MESSAGE, StatusCode::NOT_FOUND, None)
    }

    pub fn unauthorized() -> Self {
        Self::error(UNAUTHORIZED_MESSAGE, StatusCode::UNAUTHORIZED, None)
    }

    pub fn forbidden() -> Self {
        Self::error(FORBIDDEN_MESSAGE, StatusCode::FORBIDDEN, None)
    }

    pub fn server_error() -> Self {
        Self::error(SERVER_ERROR_MESSAGE, StatusCode::INTERNAL_SERVER_ERROR, None)
    }

    pub fn with_meta(mut self, meta: Value) -> Self {
        self.body.meta = Some(meta);
        self
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &ApiResponse<T> {
        &self.body
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn all_statuses() -> impl Iterator<Item = StatusCode> {
        (100u16..=599).filter_map(|code| StatusCode::from_u16(code).ok())
    }

    #[test]
    fn success_flag_follows_status_code() {
        for status in all_statuses() {
            let ok = Envelope::success(1, status, None);
            let err = Envelope::<()>::error("failed", status, None);
            let expected = (200..300).contains(&status.as_u16());
            assert_eq!(ok.body().success, expected, "success() with {status}");
            assert_eq!(err.body().success, expected, "error() with {status}");
        }
    }

    #[test]
    fn error_detail_is_kept_only_when_supplied() {
        for status in all_statuses().filter(|s| s.as_u16() >= 400) {
            let with = Envelope::<()>::error("boom", status, Some("db down".into()));
            let without = Envelope::<()>::error("boom", status, None);
            assert_eq!(with.body().error.as_deref(), Some("db down"));
            assert!(without.body().error.is_none());
            assert_eq!(with.body().message.as_deref(), Some("boom"));
            assert_eq!(without.body().message.as_deref(), Some("boom"));
        }
    }

    #[test]
    fn error_detail_is_dropped_below_400() {
        let env = Envelope::<()>::error("moved", StatusCode::FOUND, Some("detail".into()));
        assert!(env.body().error.is_none());
    }

    #[test]
    fn ok_serializes_without_empty_fields() {
        let env = Envelope::ok(json!({ "sessions": 3 })).with_meta(json!({ "count": 1 }));
        let body = serde_json::to_value(env.body()).unwrap();
        assert_eq!(
            body,
            json!({ "success": true, "data": { "sessions": 3 }, "meta": { "count": 1 } })
        );
    }

    #[test]
    fn fixed_message_helpers() {
        let cases = [
            (Envelope::<()>::not_found(), StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE),
            (Envelope::<()>::unauthorized(), StatusCode::UNAUTHORIZED, UNAUTHORIZED_MESSAGE),
            (Envelope::<()>::forbidden(), StatusCode::FORBIDDEN, FORBIDDEN_MESSAGE),
            (
                Envelope::<()>::server_error(),
                StatusCode::INTERNAL_SERVER_ERROR,
                SERVER_ERROR_MESSAGE,
            ),
        ];
        for (env, status, message) in cases {
            assert_eq!(env.status(), status);
            assert!(!env.body().success);
            assert_eq!(env.body().message.as_deref(), Some(message));
            assert!(env.body().data.is_none());
            assert!(env.body().error.is_none());
        }
    }

    #[tokio::test]
    async fn into_response_uses_envelope_status() {
        let res = Envelope::<()>::bad_request("nope").into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({ "success": false, "message": "nope" }));
    }
}
