use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use heatpump_core::analytics::InvalidResolution;

/// Client-visible request failures.
///
/// The not-found check runs immediately after the location filter, before
/// any aggregation, summary, series or report path; resolution values are
/// validated before the aggregator sees them. Everything else is a defect
/// and surfaces as a 500.
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("Location not found")]
    LocationNotFound,
    #[error(transparent)]
    InvalidResolution(#[from] InvalidResolution),
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::LocationNotFound => StatusCode::NOT_FOUND,
            ApiError::InvalidResolution(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Json(serde_json::json!({ "detail": self.to_string() }));
        (status, body).into_response()
    }
}
