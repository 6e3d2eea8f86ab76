//! Display-ready roster entries and the service catalog.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The fixed catalog of bookable services.
///
/// The backend exposes these as a dozen `service_*` boolean columns; the
/// same set is also what the description-text fallback parses into.
///
/// # Example
///
/// ```
/// use roster_engine::models::ServiceName;
///
/// assert_eq!(ServiceName::ShowerTogether.label(), "Shower Together");
/// assert!(ServiceName::ShowerTogether.matches_token("shower"));
/// assert!(!ServiceName::Bbbj.matches_token("CBJ"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceName {
    /// BBBJ.
    #[serde(rename = "BBBJ")]
    Bbbj,
    /// CIM.
    #[serde(rename = "CIM")]
    Cim,
    /// DFK.
    #[serde(rename = "DFK")]
    Dfk,
    /// 69.
    #[serde(rename = "69")]
    SixtyNine,
    /// Rimming.
    #[serde(rename = "Rimming")]
    Rimming,
    /// Filming.
    #[serde(rename = "Filming")]
    Filming,
    /// CBJ.
    #[serde(rename = "CBJ")]
    Cbj,
    /// Massage.
    #[serde(rename = "Massage")]
    Massage,
    /// GFE.
    #[serde(rename = "GFE")]
    Gfe,
    /// PSE.
    #[serde(rename = "PSE")]
    Pse,
    /// Double.
    #[serde(rename = "Double")]
    Double,
    /// Shower Together.
    #[serde(rename = "Shower Together")]
    ShowerTogether,
}

impl ServiceName {
    /// Every catalog entry, in display order.
    pub const ALL: [ServiceName; 12] = [
        ServiceName::Bbbj,
        ServiceName::Cim,
        ServiceName::Dfk,
        ServiceName::SixtyNine,
        ServiceName::Rimming,
        ServiceName::Filming,
        ServiceName::Cbj,
        ServiceName::Massage,
        ServiceName::Gfe,
        ServiceName::Pse,
        ServiceName::Double,
        ServiceName::ShowerTogether,
    ];

    /// The display label, identical to the wire representation.
    pub fn label(&self) -> &'static str {
        match self {
            ServiceName::Bbbj => "BBBJ",
            ServiceName::Cim => "CIM",
            ServiceName::Dfk => "DFK",
            ServiceName::SixtyNine => "69",
            ServiceName::Rimming => "Rimming",
            ServiceName::Filming => "Filming",
            ServiceName::Cbj => "CBJ",
            ServiceName::Massage => "Massage",
            ServiceName::Gfe => "GFE",
            ServiceName::Pse => "PSE",
            ServiceName::Double => "Double",
            ServiceName::ShowerTogether => "Shower Together",
        }
    }

    /// Case-insensitive token match, used both for description parsing and
    /// for service filter input. "Shower" alone matches
    /// [`ServiceName::ShowerTogether`].
    pub fn matches_token(&self, token: &str) -> bool {
        let token = token.trim();
        if token.eq_ignore_ascii_case(self.label()) {
            return true;
        }
        matches!(self, ServiceName::ShowerTogether) && token.eq_ignore_ascii_case("Shower")
    }
}

impl std::fmt::Display for ServiceName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One service with its availability for a particular provider.
///
/// Un-set flags mean "unavailable", never "unknown".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    /// Which catalog service.
    pub name: ServiceName,
    /// Whether this provider offers it.
    pub available: bool,
}

/// The join of one roster shift with its resolved provider record.
///
/// Rebuilt from scratch on every data refresh; immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    /// Provider identity.
    pub id: i64,
    /// URL slug for the profile route.
    pub slug: String,
    /// Display name.
    pub name: String,
    /// Nationality label, `"Unknown"` when the backend has none.
    pub nationality: String,
    /// Thumbnail URL for the roster card; empty when no image exists.
    pub image: String,
    /// All image URLs, highest priority first.
    pub images: Vec<String>,
    /// "New" badge flag; new entries are pinned to the front of the order.
    pub is_new: bool,
    /// Formatted label like `"10:00 AM - 6:00 PM"`.
    pub working_time: String,
    /// Availability across the full service catalog.
    pub services: Vec<Service>,
    /// Raw shift start, kept for time classification.
    pub start_time: Option<String>,
    /// Raw shift end, kept for time classification.
    pub end_time: Option<String>,
    /// Hourly teaser rate for the roster card; absent when no rate exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly: Option<Decimal>,
}
