//! The full model profile shown on an individual profile page.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Service;

/// Booking rates by duration; absent entries mean "no published rate".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingRates {
    /// 30-minute booking total.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min30: Option<Decimal>,
    /// 45-minute booking total.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min45: Option<Decimal>,
    /// 60-minute booking total.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min60: Option<Decimal>,
}

/// Display-ready profile for one model.
///
/// Optional fields are omitted from the page rather than rendered empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelProfile {
    /// Provider identity.
    pub id: i64,
    /// URL slug.
    pub slug: String,
    /// Display name; falls back to the slug when the backend name is empty.
    pub name: String,
    /// Nationality label, `"Unknown"` when the backend has none.
    pub nationality: String,

    /// Height in centimetres.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Weight in kilograms.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Cup size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bust: Option<String>,
    /// Dress size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dress_size: Option<u32>,
    /// Figure description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub figure: Option<String>,
    /// Hair description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hair: Option<String>,
    /// Skin description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skin: Option<String>,
    /// Tattoo description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tattoos: Option<String>,
    /// Grooming description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pubes: Option<String>,
    /// Booking requirements text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<String>,

    /// HTML-stripped biography text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,

    /// Gallery image URLs, highest priority first.
    pub images: Vec<String>,
    /// "New" badge flag.
    pub is_new: bool,

    /// Today's working-time label, when the model is on today's roster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_time: Option<String>,

    /// Availability across the full service catalog.
    pub services: Vec<Service>,

    /// Published booking rates.
    pub rates: BookingRates,
}
