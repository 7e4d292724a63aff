//! Typed API error for HTTP handlers.
//!
//! Client errors carry a human-readable plain-text body. `Internal` logs the
//! real error server-side and returns a fixed message, so no store detail
//! leaks to the caller.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use historical_news_service::ServiceError;

use crate::views::ViewError;

pub const INTERNAL_ERROR_BODY: &str = "Internal Server Error";

#[derive(Debug)]
pub enum ApiError {
    /// 400, missing or malformed query parameter.
    BadRequest(String),
    /// 500, store or rendering failure.
    Internal(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::Internal(err) => {
                tracing::error!(error = ?err, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_BODY.to_owned())
            },
        };
        (status, [(header::CONTENT_TYPE, "text/plain; charset=utf-8")], message).into_response()
    }
}

/// Client-facing text for a missing required parameter.
pub fn missing_parameter_message(name: &str) -> String {
    match name {
        "q" => "Bad Request: Please provide a search query.".to_owned(),
        "id" => "ID is required".to_owned(),
        "tag" => "Tag is required".to_owned(),
        "city" => "City is required".to_owned(),
        "month" => "Month is required".to_owned(),
        other => format!("{other} is required"),
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::MissingParameter(name) => Self::BadRequest(missing_parameter_message(name)),
            ServiceError::InvalidParameter { name, value } => {
                Self::BadRequest(format!("Invalid value for {name}: '{value}'"))
            },
            ServiceError::Storage(_) => Self::Internal(err.into()),
        }
    }
}

impl From<ViewError> for ApiError {
    fn from(err: ViewError) -> Self {
        Self::Internal(err.into())
    }
}
