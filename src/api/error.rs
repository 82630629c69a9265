//! Errors surfaced as HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::store::StoreError;

/// Request failures that reach the client.
///
/// Bad commands are not errors (they are no-ops); only an empty board id,
/// an unparseable body or a failing store ends a request early.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("board id must not be empty")]
    MissingBoardId,

    #[error("request body is not valid JSON: {0}")]
    MalformedBody(#[source] serde_json::Error),

    #[error("storage unavailable: {0}")]
    Store(#[from] StoreError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingBoardId => StatusCode::NOT_FOUND,
            Self::MalformedBody(_) => StatusCode::BAD_REQUEST,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, "rejected request");
        }
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}
