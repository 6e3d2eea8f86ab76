//! Model profile assembly for the individual profile page.

use crate::models::{BookingRates, ModelProfile, Provider, RosterShift};
use crate::roster::{format_working_time, services_from_provider, strip_html};

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}

/// Gallery images for a profile page.
///
/// The profile-flagged thumbnail is excluded from the gallery so the same
/// photo does not lead twice, unless it is the only image there is.
fn gallery_images(provider: &Provider) -> Vec<String> {
    let mut images: Vec<_> = provider
        .images
        .iter()
        .filter(|img| !img.image.is_empty())
        .collect();
    images.sort_by(|a, b| b.priority.unwrap_or(0).cmp(&a.priority.unwrap_or(0)));

    let non_profile: Vec<_> = images
        .iter()
        .filter(|img| img.profile != Some(true))
        .map(|img| img.image.clone())
        .collect();
    if non_profile.is_empty() {
        images.into_iter().map(|img| img.image.clone()).collect()
    } else {
        non_profile
    }
}

/// Builds the profile for a URL slug.
///
/// The slug match is case-insensitive and exact (no normalization — the
/// slug in the URL came from the backend in the first place). Today's
/// roster contributes the working-time line when the provider is on it;
/// a missing roster just omits the line.
///
/// Returns `None` when no provider carries the slug.
pub fn build_model_profile(
    slug: &str,
    providers: &[Provider],
    roster_today: &[RosterShift],
) -> Option<ModelProfile> {
    let provider = providers
        .iter()
        .find(|p| p.slug.eq_ignore_ascii_case(slug))?;

    let working_time = roster_today
        .iter()
        .find(|shift| shift.provider_id == provider.id)
        .map(|shift| format_working_time(&shift.start_time, &shift.end_time));

    let name = if provider.provider_name.is_empty() {
        provider.slug.clone()
    } else {
        provider.provider_name.clone()
    };

    let nationality = provider
        .country
        .clone()
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| "Unknown".to_string());

    Some(ModelProfile {
        id: provider.id,
        slug: provider.slug.clone(),
        name,
        nationality,
        height: positive(provider.height),
        weight: positive(provider.weight),
        bust: non_empty(provider.cup.clone()),
        dress_size: provider.dress_size.filter(|d| *d > 0),
        figure: non_empty(provider.figure.clone()),
        hair: non_empty(provider.hair.clone()),
        skin: non_empty(provider.skin.clone()),
        tattoos: non_empty(provider.tattoos.clone()),
        pubes: non_empty(provider.pubes.clone()),
        requirements: non_empty(provider.requirements.clone()),
        bio: provider
            .description
            .as_deref()
            .map(strip_html)
            .filter(|s| !s.is_empty()),
        images: gallery_images(provider),
        is_new: provider.is_new == Some(true),
        working_time,
        services: services_from_provider(provider),
        rates: BookingRates {
            min30: provider.total_30,
            min45: provider.total_45,
            min60: provider.total_60,
        },
    })
}
