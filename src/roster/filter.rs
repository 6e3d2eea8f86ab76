//! Filter evaluation over an ordered roster.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::models::{RosterEntry, ServiceName};

use super::time::{ShiftStatus, classify_shift};

/// The visitor-facing time filter.
///
/// `Today` shows the full roster for the shop day; `Now` narrows to
/// providers whose shift is running at this instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeFilter {
    /// Only currently running shifts.
    Now,
    /// Everyone on the day's roster, regardless of status.
    Today,
}

impl TimeFilter {
    /// Parses a query-string value; anything unrecognized falls back to
    /// [`TimeFilter::Now`].
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("today") {
            TimeFilter::Today
        } else {
            TimeFilter::Now
        }
    }
}

impl std::fmt::Display for TimeFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeFilter::Now => write!(f, "now"),
            TimeFilter::Today => write!(f, "today"),
        }
    }
}

/// The full filter state for a roster view.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterFilter {
    /// Time narrowing.
    pub time: TimeFilter,
    /// Selected nationalities; empty means no nationality narrowing.
    pub nationalities: Vec<String>,
    /// Selected service names (raw query tokens); empty means no service
    /// narrowing. An entry must offer *every* selected service.
    pub services: Vec<String>,
}

impl RosterFilter {
    /// A filter that passes everything on the day's roster.
    pub fn pass_all() -> Self {
        Self {
            time: TimeFilter::Today,
            nationalities: vec![],
            services: vec![],
        }
    }
}

fn passes_time(
    entry: &RosterEntry,
    time: TimeFilter,
    roster_day: NaiveDate,
    now: NaiveDateTime,
) -> bool {
    // entries without time info are never narrowed out
    let (Some(start), Some(end)) = (&entry.start_time, &entry.end_time) else {
        return true;
    };
    match time {
        TimeFilter::Today => true,
        TimeFilter::Now => classify_shift(start, end, roster_day, now) == ShiftStatus::Now,
    }
}

fn passes_nationality(entry: &RosterEntry, nationalities: &[String]) -> bool {
    nationalities.is_empty() || nationalities.iter().any(|n| *n == entry.nationality)
}

fn passes_services(entry: &RosterEntry, services: &[String]) -> bool {
    services.iter().all(|requested| {
        entry
            .services
            .iter()
            .any(|s| s.available && s.name.matches_token(requested))
    })
}

/// Applies the time, nationality, and service filters in order.
///
/// Purely functional: no side effects, and the output preserves the input
/// order. A service selection is an AND: every requested service must be
/// available on the entry.
pub fn filter_roster(
    entries: &[RosterEntry],
    filter: &RosterFilter,
    roster_day: NaiveDate,
    now: NaiveDateTime,
) -> Vec<RosterEntry> {
    entries
        .iter()
        .filter(|entry| passes_time(entry, filter.time, roster_day, now))
        .filter(|entry| passes_nationality(entry, &filter.nationalities))
        .filter(|entry| passes_services(entry, &filter.services))
        .cloned()
        .collect()
}

/// Distinct nationalities present in a roster view, sorted.
pub fn nationality_facets(entries: &[RosterEntry]) -> Vec<String> {
    let mut facets: Vec<String> = entries
        .iter()
        .map(|entry| entry.nationality.clone())
        .filter(|n| !n.is_empty())
        .collect();
    facets.sort();
    facets.dedup();
    facets
}

/// Distinct services available somewhere in a roster view, catalog order.
pub fn service_facets(entries: &[RosterEntry]) -> Vec<ServiceName> {
    ServiceName::ALL
        .into_iter()
        .filter(|name| {
            entries
                .iter()
                .any(|entry| entry.services.iter().any(|s| s.available && s.name == *name))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Service;

    fn entry(
        id: i64,
        nationality: &str,
        available: &[ServiceName],
        times: Option<(&str, &str)>,
    ) -> RosterEntry {
        RosterEntry {
            id,
            slug: format!("model-{id}"),
            name: format!("Model {id}"),
            nationality: nationality.to_string(),
            image: String::new(),
            images: vec![],
            is_new: false,
            working_time: String::new(),
            services: ServiceName::ALL
                .iter()
                .map(|name| Service {
                    name: *name,
                    available: available.contains(name),
                })
                .collect(),
            start_time: times.map(|(s, _)| s.to_string()),
            end_time: times.map(|(_, e)| e.to_string()),
            hourly: None,
        }
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn at(h: u32, m: u32) -> NaiveDateTime {
        day().and_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_time_filter_now_keeps_only_running_shifts() {
        let entries = vec![
            entry(1, "Japanese", &[], Some(("10:00:00", "18:00:00"))),
            entry(2, "Thai", &[], Some(("19:00:00", "23:00:00"))),
        ];
        let filter = RosterFilter {
            time: TimeFilter::Now,
            nationalities: vec![],
            services: vec![],
        };
        let kept = filter_roster(&entries, &filter, day(), at(14, 0));
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, 1);
    }

    #[test]
    fn test_time_filter_today_keeps_finished_shifts() {
        let entries = vec![entry(1, "Japanese", &[], Some(("10:00:00", "18:00:00")))];
        let filter = RosterFilter::pass_all();
        let kept = filter_roster(&entries, &filter, day(), at(20, 0));
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn test_entries_without_time_info_always_pass() {
        let entries = vec![entry(1, "Japanese", &[], None)];
        let filter = RosterFilter {
            time: TimeFilter::Now,
            nationalities: vec![],
            services: vec![],
        };
        let kept = filter_roster(&entries, &filter, day(), at(3, 0));
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn test_nationality_filter_is_membership() {
        let entries = vec![
            entry(1, "Japanese", &[], None),
            entry(2, "Thai", &[], None),
            entry(3, "Unknown", &[], None),
        ];
        let filter = RosterFilter {
            time: TimeFilter::Today,
            nationalities: vec!["Japanese".to_string(), "Thai".to_string()],
            services: vec![],
        };
        let kept = filter_roster(&entries, &filter, day(), at(12, 0));
        assert_eq!(kept.iter().map(|e| e.id).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_service_filter_requires_every_selection() {
        let entries = vec![
            entry(1, "Japanese", &[ServiceName::Bbbj, ServiceName::Dfk], None),
            entry(2, "Thai", &[ServiceName::Bbbj], None),
        ];
        let filter = RosterFilter {
            time: TimeFilter::Today,
            nationalities: vec![],
            services: vec!["BBBJ".to_string(), "DFK".to_string()],
        };
        let kept = filter_roster(&entries, &filter, day(), at(12, 0));
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, 1);
    }

    #[test]
    fn test_unknown_service_token_excludes_everything() {
        let entries = vec![entry(1, "Japanese", &[ServiceName::Bbbj], None)];
        let filter = RosterFilter {
            time: TimeFilter::Today,
            nationalities: vec![],
            services: vec!["Telepathy".to_string()],
        };
        let kept = filter_roster(&entries, &filter, day(), at(12, 0));
        assert!(kept.is_empty());
    }

    #[test]
    fn test_filtering_preserves_input_order() {
        let entries = vec![
            entry(5, "Thai", &[], None),
            entry(2, "Thai", &[], None),
            entry(9, "Thai", &[], None),
        ];
        let kept = filter_roster(&entries, &RosterFilter::pass_all(), day(), at(12, 0));
        assert_eq!(kept.iter().map(|e| e.id).collect::<Vec<_>>(), vec![5, 2, 9]);
    }

    #[test]
    fn test_nationality_facets_sorted_and_deduped() {
        let entries = vec![
            entry(1, "Thai", &[], None),
            entry(2, "Japanese", &[], None),
            entry(3, "Thai", &[], None),
        ];
        assert_eq!(nationality_facets(&entries), vec!["Japanese", "Thai"]);
    }

    #[test]
    fn test_service_facets_follow_catalog_order() {
        let entries = vec![
            entry(1, "Thai", &[ServiceName::Pse], None),
            entry(2, "Thai", &[ServiceName::Bbbj], None),
        ];
        assert_eq!(
            service_facets(&entries),
            vec![ServiceName::Bbbj, ServiceName::Pse]
        );
    }

    #[test]
    fn test_time_filter_parse_defaults_to_now() {
        assert_eq!(TimeFilter::parse("today"), TimeFilter::Today);
        assert_eq!(TimeFilter::parse("TODAY"), TimeFilter::Today);
        assert_eq!(TimeFilter::parse("now"), TimeFilter::Now);
        assert_eq!(TimeFilter::parse("whenever"), TimeFilter::Now);
    }
}
