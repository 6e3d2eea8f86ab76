//! Session-stable roster ordering.
//!
//! A roster view shows its entries in a randomized order, but the order
//! must hold still while the visitor browses: re-rendering the same view
//! in the same session replays the same sequence. The order is therefore
//! computed once per (tab, time filter, nationality set, service set)
//! combination and its id sequence persisted through an [`OrderCache`].
//!
//! On a cache hit the stored sequence is reconciled against the current
//! roster: ids that vanished are dropped, entries the cache has never seen
//! are appended in input order. "New" entries are pinned to the front only
//! when a fresh order is generated.

use std::collections::HashMap;
use std::sync::Mutex;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::models::RosterEntry;

use super::filter::TimeFilter;
use super::time::RosterTab;

/// Session-scoped storage for display-order id sequences.
///
/// The ordering component only needs get/set; what backs the store is the
/// caller's business. The bundled [`SessionOrderCache`] keeps orders in
/// memory for the life of the process.
pub trait OrderCache: Send + Sync {
    /// Returns the stored id sequence for a key, if any.
    fn get(&self, key: &str) -> Option<Vec<i64>>;
    /// Stores the id sequence for a key, replacing any previous one.
    fn set(&self, key: &str, ids: &[i64]);
}

/// In-memory [`OrderCache`] scoped to the process lifetime.
#[derive(Debug, Default)]
pub struct SessionOrderCache {
    orders: Mutex<HashMap<String, Vec<i64>>>,
}

impl SessionOrderCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }
}

impl OrderCache for SessionOrderCache {
    fn get(&self, key: &str) -> Option<Vec<i64>> {
        self.orders.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, ids: &[i64]) {
        if let Ok(mut orders) = self.orders.lock() {
            orders.insert(key.to_string(), ids.to_vec());
        }
    }
}

/// Builds the cache key for a view combination.
///
/// Filter sets are sorted before joining so that selection order does not
/// produce distinct keys for the same combination.
pub fn order_cache_key(
    tab: RosterTab,
    time: TimeFilter,
    nationalities: &[String],
    services: &[String],
) -> String {
    let mut nat = nationalities.to_vec();
    nat.sort();
    let mut svc = services.to_vec();
    svc.sort();
    format!(
        "roster-order:{}:{}:{}:{}",
        tab,
        time,
        nat.join("|"),
        svc.join("|")
    )
}

/// Orders a roster view for display.
///
/// With no cached order under `cache_key`: new entries first, the rest
/// Fisher–Yates shuffled, and the resulting id sequence stored. With a
/// cached order: the stored sequence is replayed, dropping vanished ids
/// and appending unseen entries at the end in input order.
///
/// Calling twice with an unchanged roster and the same key returns the
/// identical ordering.
pub fn order_roster<R: Rng>(
    entries: Vec<RosterEntry>,
    cache_key: &str,
    cache: &dyn OrderCache,
    rng: &mut R,
) -> Vec<RosterEntry> {
    if entries.is_empty() {
        return entries;
    }

    if let Some(ids) = cache.get(cache_key) {
        return reconcile_cached_order(entries, &ids);
    }

    let (new_entries, mut rest): (Vec<_>, Vec<_>) =
        entries.into_iter().partition(|entry| entry.is_new);
    rest.shuffle(rng);

    let ordered: Vec<RosterEntry> = new_entries.into_iter().chain(rest).collect();
    let ids: Vec<i64> = ordered.iter().map(|entry| entry.id).collect();
    cache.set(cache_key, &ids);

    ordered
}

fn reconcile_cached_order(entries: Vec<RosterEntry>, ids: &[i64]) -> Vec<RosterEntry> {
    let mut remaining: Vec<Option<RosterEntry>> = entries.into_iter().map(Some).collect();
    let index_of: HashMap<i64, usize> = remaining
        .iter()
        .enumerate()
        .filter_map(|(i, slot)| slot.as_ref().map(|entry| (entry.id, i)))
        .collect();

    let mut ordered = Vec::with_capacity(remaining.len());
    for id in ids {
        if let Some(&i) = index_of.get(id) {
            if let Some(entry) = remaining[i].take() {
                ordered.push(entry);
            }
        }
    }
    // roster entries the cache has never seen go to the back, input order
    ordered.extend(remaining.into_iter().flatten());
    ordered
}
