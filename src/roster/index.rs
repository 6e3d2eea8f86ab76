//! Lookup structures for resolving roster shifts to provider records.
//!
//! A shift references its provider loosely: the id can be stale and the
//! name can drift in spelling, spacing, or punctuation. The index keeps
//! four maps over the provider list so resolution can fall back from the
//! id to progressively fuzzier name and slug keys.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::models::{Provider, RosterShift};

/// Normalizes a name or slug into a lookup key.
///
/// Lowercases, turns non-breaking spaces into regular ones, spells `&` as
/// "and", collapses every non-alphanumeric run into a single space, and
/// trims. `"O'Brien  &  Co."` and `"o-brien-and-co"` produce the same key.
///
/// # Example
///
/// ```
/// use roster_engine::roster::normalize_key;
///
/// assert_eq!(normalize_key("O'Brien  &  Co."), "o brien and co");
/// assert_eq!(normalize_key("Aiko\u{00a0}Tanaka"), "aiko tanaka");
/// ```
pub fn normalize_key(s: &str) -> String {
    let lowered = s.to_lowercase().replace('\u{00a0}', " ").replace('&', "and");
    let mapped: String = lowered
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { ' ' })
        .collect();
    mapped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Strips a trailing `-<digits>` disambiguation suffix from a slug.
///
/// # Example
///
/// ```
/// use roster_engine::roster::base_slug;
///
/// assert_eq!(base_slug("aiko-2"), "aiko");
/// assert_eq!(base_slug("aiko"), "aiko");
/// assert_eq!(base_slug("mary-jane"), "mary-jane");
/// ```
pub fn base_slug(slug: &str) -> &str {
    if let Some(pos) = slug.rfind('-') {
        let tail = &slug[pos + 1..];
        if !tail.is_empty() && tail.bytes().all(|b| b.is_ascii_digit()) {
            return &slug[..pos];
        }
    }
    slug
}

/// Lookup maps over a provider list.
///
/// Borrow-based: the index lives no longer than the provider slice it was
/// built from, and a rebuild is cheap enough to do per data refresh.
#[derive(Debug)]
pub struct ProviderIndex<'a> {
    by_id: HashMap<i64, &'a Provider>,
    by_name: HashMap<String, &'a Provider>,
    by_slug: HashMap<String, &'a Provider>,
    by_base_slug: HashMap<String, &'a Provider>,
}

fn upsert_best<'a>(map: &mut HashMap<String, &'a Provider>, key: String, provider: &'a Provider) {
    match map.entry(key) {
        Entry::Occupied(mut entry) => {
            // duplicate keys keep the newest record
            if provider.id > entry.get().id {
                entry.insert(provider);
            }
        }
        Entry::Vacant(entry) => {
            entry.insert(provider);
        }
    }
}

impl<'a> ProviderIndex<'a> {
    /// Builds the four lookup maps over `providers`.
    pub fn build(providers: &'a [Provider]) -> Self {
        let mut by_id = HashMap::new();
        let mut by_name = HashMap::new();
        let mut by_slug = HashMap::new();
        let mut by_base_slug = HashMap::new();

        for provider in providers {
            by_id.insert(provider.id, provider);
            upsert_best(&mut by_name, normalize_key(&provider.provider_name), provider);
            upsert_best(&mut by_slug, normalize_key(&provider.slug), provider);
            upsert_best(
                &mut by_base_slug,
                normalize_key(base_slug(&provider.slug)),
                provider,
            );
        }

        Self {
            by_id,
            by_name,
            by_slug,
            by_base_slug,
        }
    }

    /// Resolves a shift to its provider record.
    ///
    /// Tries, in order: the id map, then the name, slug, and base-slug maps
    /// keyed by the normalized shift name. Returns `None` when nothing
    /// matches; callers drop such shifts from the roster.
    pub fn resolve(&self, shift: &RosterShift) -> Option<&'a Provider> {
        let key = normalize_key(&shift.provider_name);
        self.by_id
            .get(&shift.provider_id)
            .or_else(|| self.by_name.get(&key))
            .or_else(|| self.by_slug.get(&key))
            .or_else(|| self.by_base_slug.get(&key))
            .copied()
    }
}
