//! Provider records as returned by the venue backend.
//!
//! The backend is loose about optional fields: service capabilities may be
//! explicit booleans or absent entirely (in which case they are parsed out
//! of the free-text description later), and prices arrive as numbers,
//! numeric strings, or null. Everything optional deserializes leniently;
//! a missing field is never an error.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One image attached to a provider profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderImage {
    /// URL of the image.
    #[serde(default)]
    pub image: String,
    /// Display priority; higher wins when choosing the best image.
    #[serde(default)]
    pub priority: Option<i32>,
    /// Whether this image is the profile thumbnail.
    #[serde(default)]
    pub profile: Option<bool>,
    /// Whether this image is a verified photo.
    #[serde(default)]
    pub real: Option<bool>,
}

/// One staff member as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    /// Stable unique identity.
    pub id: i64,
    /// URL-safe identifier; may carry a trailing `-<digits>` disambiguation
    /// suffix when two providers would otherwise collide.
    #[serde(default)]
    pub slug: String,
    /// Human-readable display name.
    #[serde(default)]
    pub provider_name: String,
    /// Free-text HTML description; also the fallback source for service
    /// capabilities via a `"Service: a, b, c"` pattern.
    #[serde(default)]
    pub description: Option<String>,
    /// Nationality label; null or absent means unknown.
    #[serde(default)]
    pub country: Option<String>,
    /// Attached images, at most a handful.
    #[serde(default)]
    pub images: Vec<ProviderImage>,
    /// "New" badge flag.
    #[serde(default)]
    pub is_new: Option<bool>,

    /// Physical attributes shown on the profile page.
    #[serde(default)]
    pub cup: Option<String>,
    /// Weight in kilograms.
    #[serde(default)]
    pub weight: Option<f64>,
    /// Height in centimetres.
    #[serde(default)]
    pub height: Option<f64>,
    /// Dress size.
    #[serde(default)]
    pub dress_size: Option<u32>,
    /// Figure description.
    #[serde(default)]
    pub figure: Option<String>,
    /// Hair description.
    #[serde(default)]
    pub hair: Option<String>,
    /// Skin description.
    #[serde(default)]
    pub skin: Option<String>,
    /// Tattoo description.
    #[serde(default)]
    pub tattoos: Option<String>,
    /// Grooming description.
    #[serde(default)]
    pub pubes: Option<String>,
    /// Booking requirements text.
    #[serde(default)]
    pub requirements: Option<String>,

    /// Explicit service capability flag.
    #[serde(default)]
    pub service_bbbj: Option<bool>,
    /// Explicit service capability flag.
    #[serde(default)]
    pub service_cim: Option<bool>,
    /// Explicit service capability flag.
    #[serde(default)]
    pub service_dfk: Option<bool>,
    /// Explicit service capability flag.
    #[serde(default, rename = "service_69")]
    pub service_sixty_nine: Option<bool>,
    /// Explicit service capability flag.
    #[serde(default)]
    pub service_rimming: Option<bool>,
    /// Explicit service capability flag.
    #[serde(default)]
    pub service_filming: Option<bool>,
    /// Explicit service capability flag.
    #[serde(default)]
    pub service_cbj: Option<bool>,
    /// Explicit service capability flag.
    #[serde(default)]
    pub service_massage: Option<bool>,
    /// Explicit service capability flag.
    #[serde(default)]
    pub service_gfe: Option<bool>,
    /// Explicit service capability flag.
    #[serde(default)]
    pub service_pse: Option<bool>,
    /// Explicit service capability flag.
    #[serde(default)]
    pub service_double: Option<bool>,
    /// Explicit service capability flag.
    #[serde(default)]
    pub service_shower: Option<bool>,

    /// 30-minute booking total; absent when there is no rate.
    #[serde(default, deserialize_with = "price::deserialize")]
    pub total_30: Option<Decimal>,
    /// 45-minute booking total; absent when there is no rate.
    #[serde(default, deserialize_with = "price::deserialize")]
    pub total_45: Option<Decimal>,
    /// 60-minute booking total; absent when there is no rate.
    #[serde(default, deserialize_with = "price::deserialize")]
    pub total_60: Option<Decimal>,
}

/// Lenient price deserialization: the backend sends numbers, numeric
/// strings, or null. Anything non-finite, non-numeric, or not strictly
/// positive normalizes to "no rate" rather than zero.
mod price {
    use rust_decimal::Decimal;
    use rust_decimal::prelude::FromPrimitive;
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPrice {
        Number(f64),
        Text(String),
        Other(serde_json::Value),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<RawPrice>::deserialize(deserializer)?;
        let parsed = raw.and_then(|value| match value {
            RawPrice::Number(n) => Decimal::from_f64(n),
            RawPrice::Text(s) => s.trim().parse::<Decimal>().ok(),
            RawPrice::Other(_) => None,
        });
        Ok(parsed.filter(|d| d.is_sign_positive() && !d.is_zero()))
    }
}
