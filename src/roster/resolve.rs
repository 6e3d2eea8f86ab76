//! Building display-ready roster entries from shifts and providers.

use crate::models::{Provider, RosterEntry, RosterShift, Service, ServiceName};

use super::index::ProviderIndex;
use super::time::format_working_time;

/// Strips HTML tags and collapses whitespace.
pub(crate) fn strip_html(input: &str) -> String {
    let mut text = String::with_capacity(input.len());
    let mut in_tag = false;
    for c in input.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => {
                in_tag = false;
                text.push(' ');
            }
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Pulls the token list out of a `"Service: a, b, c"` pattern, if present.
///
/// The match is case-insensitive and runs to the first period or line
/// break. Tokens come back lowercased.
fn parse_service_list(text: &str) -> Option<Vec<String>> {
    let lowered = text.to_lowercase();
    let idx = lowered.find("service:")?;
    let rest = &lowered[idx + "service:".len()..];
    let end = rest.find(['.', '\n', '\r']).unwrap_or(rest.len());
    let tokens: Vec<String> = rest[..end]
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    if tokens.is_empty() { None } else { Some(tokens) }
}

/// Resolves a provider's service availability across the full catalog.
///
/// Explicit boolean flags win: if any flag is set, the flag set is taken
/// verbatim and un-set flags mean unavailable. With no flags set, the
/// HTML-stripped description is searched for a `"Service: a, b, c"` list.
/// No flags and no parseable list means everything is unavailable.
pub fn services_from_provider(provider: &Provider) -> Vec<Service> {
    let flags = [
        (ServiceName::Bbbj, provider.service_bbbj),
        (ServiceName::Cim, provider.service_cim),
        (ServiceName::Dfk, provider.service_dfk),
        (ServiceName::SixtyNine, provider.service_sixty_nine),
        (ServiceName::Rimming, provider.service_rimming),
        (ServiceName::Filming, provider.service_filming),
        (ServiceName::Cbj, provider.service_cbj),
        (ServiceName::Massage, provider.service_massage),
        (ServiceName::Gfe, provider.service_gfe),
        (ServiceName::Pse, provider.service_pse),
        (ServiceName::Double, provider.service_double),
        (ServiceName::ShowerTogether, provider.service_shower),
    ];

    if flags.iter().any(|(_, flag)| *flag == Some(true)) {
        return flags
            .iter()
            .map(|(name, flag)| Service {
                name: *name,
                available: *flag == Some(true),
            })
            .collect();
    }

    let tokens = provider
        .description
        .as_deref()
        .map(strip_html)
        .and_then(|text| parse_service_list(&text));

    match tokens {
        Some(tokens) => ServiceName::ALL
            .iter()
            .map(|name| Service {
                name: *name,
                available: tokens.iter().any(|token| name.matches_token(token)),
            })
            .collect(),
        None => ServiceName::ALL
            .iter()
            .map(|name| Service {
                name: *name,
                available: false,
            })
            .collect(),
    }
}

/// Returns all image URLs for a provider, highest priority first.
pub fn images_from_provider(provider: &Provider) -> Vec<String> {
    let mut images: Vec<_> = provider
        .images
        .iter()
        .filter(|img| !img.image.is_empty())
        .collect();
    images.sort_by(|a, b| b.priority.unwrap_or(0).cmp(&a.priority.unwrap_or(0)));
    images.into_iter().map(|img| img.image.clone()).collect()
}

/// Picks the roster-card thumbnail for a provider.
///
/// The image flagged as the profile thumbnail wins; otherwise the highest
/// priority image; otherwise an empty string.
pub fn pick_thumbnail(provider: &Provider) -> String {
    let candidates: Vec<_> = provider
        .images
        .iter()
        .filter(|img| !img.image.is_empty())
        .collect();

    if let Some(profile_img) = candidates.iter().find(|img| img.profile == Some(true)) {
        return profile_img.image.clone();
    }

    candidates
        .iter()
        .max_by_key(|img| img.priority.unwrap_or(0))
        .map(|img| img.image.clone())
        .unwrap_or_default()
}

/// Joins one shift with its resolved provider into a display-ready entry.
///
/// Returns `None` when the shift resolves to no provider by any lookup
/// key; such entries are dropped from the roster rather than shown with
/// missing data.
pub fn build_roster_entry(shift: &RosterShift, index: &ProviderIndex<'_>) -> Option<RosterEntry> {
    let provider = index.resolve(shift)?;

    let images = images_from_provider(provider);
    let thumbnail = pick_thumbnail(provider);
    let image = if thumbnail.is_empty() {
        images.first().cloned().unwrap_or_default()
    } else {
        thumbnail
    };

    let nationality = provider
        .country
        .clone()
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| "Unknown".to_string());

    Some(RosterEntry {
        id: provider.id,
        slug: provider.slug.clone(),
        name: provider.provider_name.clone(),
        nationality,
        image,
        images,
        is_new: provider.is_new == Some(true),
        working_time: format_working_time(&shift.start_time, &shift.end_time),
        services: services_from_provider(provider),
        start_time: Some(shift.start_time.clone()),
        end_time: Some(shift.end_time.clone()),
        hourly: provider.total_60,
    })
}
