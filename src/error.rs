use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

use crate::{envelope::Envelope, users::provider::ContextError};

/// Handler-level failures. Every variant renders as an error envelope;
/// internal details are logged and never sent to the client.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("not found")]
    NotFound,

    #[error("unauthorized")]
    Unauthorized,

    #[error("forbidden")]
    Forbidden,

    #[error(transparent)]
    Context(#[from] ContextError),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(msg) => {
                warn!(reason = %msg, "bad request");
                Envelope::<()>::error(msg, StatusCode::BAD_REQUEST, None).into_response()
            }
            ApiError::NotFound => Envelope::<()>::not_found().into_response(),
            ApiError::Unauthorized => Envelope::<()>::unauthorized().into_response(),
            ApiError::Forbidden => Envelope::<()>::forbidden().into_response(),
            ApiError::Context(e) => {
                error!(error = %e, "current user unavailable");
                Envelope::<()>::server_error().into_response()
            }
            ApiError::Internal(e) => {
                error!(error = %e, "internal error");
                Envelope::<()>::server_error().into_response()
            }
        }
    }
}
