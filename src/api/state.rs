//! Application state shared by all request handlers.

use std::sync::Arc;

use crate::client::VenueApi;
use crate::config::SiteConfig;
use crate::roster::SessionOrderCache;

/// Shared application state.
///
/// Holds the site configuration, the upstream data source, and the
/// session-scoped roster order cache.
#[derive(Clone)]
pub struct AppState {
    config: Arc<SiteConfig>,
    api: Arc<dyn VenueApi>,
    orders: Arc<SessionOrderCache>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(config: SiteConfig, api: Arc<dyn VenueApi>) -> Self {
        Self {
            config: Arc::new(config),
            api,
            orders: Arc::new(SessionOrderCache::new()),
        }
    }

    /// Returns the site configuration.
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Returns the upstream data source.
    pub fn api(&self) -> &dyn VenueApi {
        self.api.as_ref()
    }

    /// Returns the roster order cache.
    pub fn orders(&self) -> &SessionOrderCache {
        &self.orders
    }
}
