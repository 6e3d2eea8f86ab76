//! Response types and error mapping for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::RosterError;
use crate::models::{RosterEntry, ServiceName};
use crate::roster::{RosterTab, TimeFilter};

/// The computed roster view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterResponse {
    /// Which roster day this view shows.
    pub tab: RosterTab,
    /// The applied time filter.
    pub time: TimeFilter,
    /// True when the tomorrow tab was requested before the upstream has
    /// published tomorrow's roster; `entries` is empty and
    /// `release_time` carries the explanatory label. Distinct from an
    /// empty filter result and from an error.
    pub tomorrow_pending: bool,
    /// When the tomorrow roster is pending, the time it is published.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_time: Option<String>,
    /// The ordered, filtered entries.
    pub entries: Vec<RosterEntry>,
    /// Nationalities present in the day's (time-filtered) roster.
    pub nationalities: Vec<String>,
    /// Services available somewhere in the day's (time-filtered) roster.
    pub services: Vec<ServiceName>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<RosterError> for ApiErrorResponse {
    fn from(error: RosterError) -> Self {
        match error {
            RosterError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            RosterError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            RosterError::Network { endpoint, message } => ApiErrorResponse {
                status: StatusCode::BAD_GATEWAY,
                error: ApiError::with_details(
                    "UPSTREAM_UNAVAILABLE",
                    format!("Request to {} failed", endpoint),
                    message,
                ),
            },
            RosterError::UnexpectedShape { endpoint, message } => ApiErrorResponse {
                status: StatusCode::BAD_GATEWAY,
                error: ApiError::with_details(
                    "UPSTREAM_SHAPE",
                    format!("Unexpected response shape from {}", endpoint),
                    message,
                ),
            },
            RosterError::ProfileNotFound { slug } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "PROFILE_NOT_FOUND",
                    format!("No profile found for slug '{}'", slug),
                    "The requested model does not exist or is no longer listed",
                ),
            },
            RosterError::NewsPostNotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "NEWS_NOT_FOUND",
                    format!("No news post found with id {}", id),
                    "The requested post does not exist or is not public",
                ),
            },
        }
    }
}
