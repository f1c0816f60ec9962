use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Everything a request can fail with. The wire contract is fixed: the
/// message strings below are returned verbatim in the JSON error body, and
/// an unrouted request is indistinguishable from a missing flag by status
/// code alone.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FlagsError {
    #[error("Invalid JSON")]
    InvalidJson,

    #[error("Flag not found")]
    FlagNotFound,

    #[error("Not found")]
    RouteNotFound,
}

impl IntoResponse for FlagsError {
    fn into_response(self) -> Response {
        let status = match self {
            FlagsError::InvalidJson => StatusCode::BAD_REQUEST,
            FlagsError::FlagNotFound | FlagsError::RouteNotFound => StatusCode::NOT_FOUND,
        };

        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
