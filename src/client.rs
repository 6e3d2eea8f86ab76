//! Async client for the venue backend's REST API.
//!
//! Every endpoint returns a JSON array and is consumed read-only. The
//! paths MUST keep their trailing slash: without it the backend issues a
//! redirect that breaks cross-origin requests.
//!
//! There is no retry logic; a failed request surfaces an error and the
//! caller re-requests. Cancellation is dropping the returned future.

use futures::future::BoxFuture;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::error::{RosterError, RosterResult};
use crate::models::{NewsPost, Provider, RosterShift};

/// Provider list endpoint, trailing slash required.
pub const PROVIDERS_PATH: &str = "/api/providers/";
/// Today's roster endpoint, trailing slash required.
pub const ROSTER_TODAY_PATH: &str = "/api/roster/today/";
/// Tomorrow's roster endpoint, trailing slash required.
pub const ROSTER_TOMORROW_PATH: &str = "/api/roster/tomorrow/";
/// News endpoint, trailing slash required.
pub const NEWS_PATH: &str = "/api/news/";

/// The upstream data source behind the served views.
///
/// Abstracting the four fetches behind a trait keeps the HTTP layer
/// testable without a live backend; [`ApiClient`] is the real
/// implementation.
pub trait VenueApi: Send + Sync {
    /// Fetches all provider records.
    fn providers(&self) -> BoxFuture<'_, RosterResult<Vec<Provider>>>;
    /// Fetches today's roster shifts.
    fn roster_today(&self) -> BoxFuture<'_, RosterResult<Vec<RosterShift>>>;
    /// Fetches tomorrow's roster shifts; an empty array is an expected
    /// state before the daily release cutoff.
    fn roster_tomorrow(&self) -> BoxFuture<'_, RosterResult<Vec<RosterShift>>>;
    /// Fetches all news posts, public and not.
    fn news(&self) -> BoxFuture<'_, RosterResult<Vec<NewsPost>>>;
}

/// HTTP implementation of [`VenueApi`] backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client against the given base URL (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetches one endpoint and decodes its JSON array body.
    ///
    /// A transport failure or non-success status is a
    /// [`RosterError::Network`]; a body that is not an array, or whose
    /// elements do not decode, is a [`RosterError::UnexpectedShape`].
    async fn fetch_array<T: DeserializeOwned>(&self, path: &'static str) -> RosterResult<Vec<T>> {
        let url = format!("{}{}", self.base_url.trim_end_matches('/'), path);

        let response = self.http.get(&url).send().await.map_err(|e| {
            warn!(endpoint = path, error = %e, "upstream request failed");
            RosterError::Network {
                endpoint: path.to_string(),
                message: e.to_string(),
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(endpoint = path, status = %status, "upstream returned non-success status");
            return Err(RosterError::Network {
                endpoint: path.to_string(),
                message: format!("unexpected status {status}"),
            });
        }

        let body: serde_json::Value =
            response.json().await.map_err(|e| RosterError::Network {
                endpoint: path.to_string(),
                message: e.to_string(),
            })?;

        if !body.is_array() {
            return Err(RosterError::UnexpectedShape {
                endpoint: path.to_string(),
                message: "expected a JSON array".to_string(),
            });
        }

        serde_json::from_value(body).map_err(|e| RosterError::UnexpectedShape {
            endpoint: path.to_string(),
            message: e.to_string(),
        })
    }
}

impl VenueApi for ApiClient {
    fn providers(&self) -> BoxFuture<'_, RosterResult<Vec<Provider>>> {
        Box::pin(self.fetch_array(PROVIDERS_PATH))
    }

    fn roster_today(&self) -> BoxFuture<'_, RosterResult<Vec<RosterShift>>> {
        Box::pin(self.fetch_array(ROSTER_TODAY_PATH))
    }

    fn roster_tomorrow(&self) -> BoxFuture<'_, RosterResult<Vec<RosterShift>>> {
        Box::pin(self.fetch_array(ROSTER_TOMORROW_PATH))
    }

    fn news(&self) -> BoxFuture<'_, RosterResult<Vec<NewsPost>>> {
        Box::pin(self.fetch_array(NEWS_PATH))
    }
}
