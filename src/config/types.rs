//! Configuration types for the roster engine.

use serde::{Deserialize, Serialize};

/// The hour (local time) at which the venue's business day starts.
///
/// Wall-clock times before this hour belong to the *previous* shop day:
/// at 2 AM the "today" roster is still yesterday's calendar date.
pub const DEFAULT_SHOP_DAY_START_HOUR: u32 = 10;

fn default_shop_day_start_hour() -> u32 {
    DEFAULT_SHOP_DAY_START_HOUR
}

fn default_tomorrow_release_time() -> String {
    "7:00 PM".to_string()
}

/// Site-level configuration.
///
/// # Example
///
/// ```
/// use roster_engine::config::SiteConfig;
///
/// let config: SiteConfig = serde_yaml::from_str("api_base_url: \"http://localhost:8000\"").unwrap();
/// assert_eq!(config.shop_day_start_hour, 10);
/// assert_eq!(config.tomorrow_release_time, "7:00 PM");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Base URL of the venue backend, without a trailing slash.
    pub api_base_url: String,

    /// Hour (0-23, local time) at which the shop day rolls over.
    #[serde(default = "default_shop_day_start_hour")]
    pub shop_day_start_hour: u32,

    /// Display label for when the tomorrow roster is published each day.
    #[serde(default = "default_tomorrow_release_time")]
    pub tomorrow_release_time: String,
}
