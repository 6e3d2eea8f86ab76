//! Query parameters for the roster view.
//!
//! The parameters mirror the website's URL state: `tab` and `time` with
//! lenient defaults, and comma-separated `nat`/`svc` selection lists.

use serde::Deserialize;

use crate::roster::{RosterFilter, RosterTab, TimeFilter};

/// Raw query string for `GET /roster`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RosterQuery {
    /// `today` (default) or `tomorrow`.
    #[serde(default)]
    pub tab: Option<String>,
    /// `now` (default) or `today`.
    #[serde(default)]
    pub time: Option<String>,
    /// Comma-separated nationality selections.
    #[serde(default)]
    pub nat: Option<String>,
    /// Comma-separated service selections.
    #[serde(default)]
    pub svc: Option<String>,
}

/// Parsed roster view parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterParams {
    /// Which roster day to show.
    pub tab: RosterTab,
    /// The filter state.
    pub filter: RosterFilter,
}

fn split_csv(value: Option<&str>) -> Vec<String> {
    value
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

impl RosterQuery {
    /// Parses the raw query into view parameters, applying defaults for
    /// anything missing or unrecognized.
    pub fn into_params(self) -> RosterParams {
        RosterParams {
            tab: RosterTab::parse(self.tab.as_deref().unwrap_or_default()),
            filter: RosterFilter {
                time: TimeFilter::parse(self.time.as_deref().unwrap_or_default()),
                nationalities: split_csv(self.nat.as_deref()),
                services: split_csv(self.svc.as_deref()),
            },
        }
    }
}
