//! Shift time classification and the shop-day anchor rule.
//!
//! Shift times arrive as bare `"HH:MM:SS"` wall-clock strings with no date
//! attached. Classification anchors them onto a roster day (a calendar
//! date) and compares against the current instant, with two wrinkles:
//!
//! - `end <= start` means the shift runs overnight into the next calendar
//!   day.
//! - an end of exactly `"00:00:00"` with a non-midnight start means the
//!   shift runs until 24:00, not that it ends at the start of the same day.
//!
//! The roster day itself follows the venue's business day, which starts at
//! a configurable hour and runs past midnight: at 2 AM the current shop day
//! is still the previous calendar date.

use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};
use serde::{Deserialize, Serialize};

/// Which roster day a view is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RosterTab {
    /// The current shop day.
    Today,
    /// The shop day after the current one.
    Tomorrow,
}

impl RosterTab {
    /// Parses a query-string value; anything unrecognized falls back to
    /// [`RosterTab::Today`].
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("tomorrow") {
            RosterTab::Tomorrow
        } else {
            RosterTab::Today
        }
    }
}

impl std::fmt::Display for RosterTab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterTab::Today => write!(f, "today"),
            RosterTab::Tomorrow => write!(f, "tomorrow"),
        }
    }
}

/// Where a shift sits relative to the current instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftStatus {
    /// The shift has not started yet.
    Later,
    /// The shift is running right now.
    Now,
    /// The shift is over.
    Finished,
}

impl std::fmt::Display for ShiftStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShiftStatus::Later => write!(f, "later"),
            ShiftStatus::Now => write!(f, "now"),
            ShiftStatus::Finished => write!(f, "finished"),
        }
    }
}

/// Parses a lenient `"HH:MM:SS"` string.
///
/// Missing or non-numeric parts default to zero, so an empty or malformed
/// string parses as midnight. Out-of-range components also collapse to
/// midnight rather than erroring.
fn parse_shift_time(hhmmss: &str) -> NaiveTime {
    let mut parts = hhmmss.split(':');
    let mut next = || {
        parts
            .next()
            .and_then(|p| p.trim().parse::<u32>().ok())
            .unwrap_or(0)
    };
    let (hh, mm, ss) = (next(), next(), next());
    NaiveTime::from_hms_opt(hh, mm, ss).unwrap_or(NaiveTime::MIN)
}

fn next_day(day: NaiveDate) -> NaiveDate {
    day.checked_add_days(Days::new(1)).unwrap_or(day)
}

fn previous_day(day: NaiveDate) -> NaiveDate {
    day.checked_sub_days(Days::new(1)).unwrap_or(day)
}

/// Classifies a shift window against a roster day and the current instant.
///
/// # Arguments
///
/// * `start` - shift start, `"HH:MM:SS"`
/// * `end` - shift end, `"HH:MM:SS"`
/// * `roster_day` - the shop-day anchor date (see [`roster_day`])
/// * `now` - the current local instant
///
/// A zero-length window (start equals end after midnight interpretation)
/// never runs: it is [`ShiftStatus::Later`] before its start instant and
/// [`ShiftStatus::Finished`] from it onward.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use roster_engine::roster::{ShiftStatus, classify_shift};
///
/// let day = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
///
/// // Overnight shift: on at 1 AM the next calendar day.
/// let late = day.succ_opt().unwrap().and_hms_opt(1, 0, 0).unwrap();
/// assert_eq!(classify_shift("22:00:00", "03:00:00", day, late), ShiftStatus::Now);
///
/// // End 00:00:00 means 24:00, so 23:59 is still on.
/// let almost_midnight = day.and_hms_opt(23, 59, 0).unwrap();
/// assert_eq!(classify_shift("10:00:00", "00:00:00", day, almost_midnight), ShiftStatus::Now);
/// ```
pub fn classify_shift(
    start: &str,
    end: &str,
    roster_day: NaiveDate,
    now: NaiveDateTime,
) -> ShiftStatus {
    let start_time = parse_shift_time(start);
    let end_time = parse_shift_time(end);

    let start_at = roster_day.and_time(start_time);

    // end 00:00:00 with a later start reads as 24:00 of the roster day
    let mut end_at = if end_time == NaiveTime::MIN && start_time != NaiveTime::MIN {
        next_day(roster_day).and_time(NaiveTime::MIN)
    } else {
        roster_day.and_time(end_time)
    };

    if end_at == start_at {
        // zero-length window: never "now"
        return if now < start_at {
            ShiftStatus::Later
        } else {
            ShiftStatus::Finished
        };
    }

    if end_at < start_at {
        // overnight: the end belongs to the next calendar day
        end_at += TimeDelta::days(1);
    }

    if now < start_at {
        ShiftStatus::Later
    } else if now < end_at {
        ShiftStatus::Now
    } else {
        ShiftStatus::Finished
    }
}

/// Returns the current shop day for a wall-clock instant.
///
/// The business day starts at `start_hour` and runs past midnight, so any
/// instant before `start_hour` still belongs to the previous calendar
/// date's shop day.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use roster_engine::roster::shop_day;
///
/// let june_2 = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
///
/// // 2 AM on June 2 is still June 1's shop day.
/// assert_eq!(shop_day(june_2.and_hms_opt(2, 0, 0).unwrap(), 10), NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
/// // 10 AM opens June 2's shop day.
/// assert_eq!(shop_day(june_2.and_hms_opt(10, 0, 0).unwrap(), 10), june_2);
/// ```
pub fn shop_day(now: NaiveDateTime, start_hour: u32) -> NaiveDate {
    if now.hour() < start_hour {
        previous_day(now.date())
    } else {
        now.date()
    }
}

/// Returns the roster-day anchor for a tab: the current shop day for
/// [`RosterTab::Today`], the next one for [`RosterTab::Tomorrow`].
pub fn roster_day(tab: RosterTab, now: NaiveDateTime, start_hour: u32) -> NaiveDate {
    let today = shop_day(now, start_hour);
    match tab {
        RosterTab::Today => today,
        RosterTab::Tomorrow => next_day(today),
    }
}

/// Formats an `"HH:MM:SS"` string as a 12-hour label like `"6:30 PM"`.
pub fn format_time_label(hhmmss: &str) -> String {
    let time = parse_shift_time(hhmmss);
    let (hh, mm) = (time.hour(), time.minute());
    let meridiem = if hh >= 12 { "PM" } else { "AM" };
    let mut display_hour = hh % 12;
    if display_hour == 0 {
        display_hour = 12;
    }
    format!("{}:{:02} {}", display_hour, mm, meridiem)
}

/// Formats a start/end pair as a working-time label like
/// `"10:00 AM - 6:00 PM"`.
pub fn format_working_time(start: &str, end: &str) -> String {
    format!("{} - {}", format_time_label(start), format_time_label(end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(day: NaiveDate, h: u32, m: u32) -> NaiveDateTime {
        day.and_hms_opt(h, m, 0).unwrap()
    }

    fn anchor() -> NaiveDate {
        date(2025, 6, 1)
    }

    #[test]
    fn test_plain_day_shift_phases() {
        let day = anchor();
        assert_eq!(
            classify_shift("10:00:00", "18:00:00", day, at(day, 9, 0)),
            ShiftStatus::Later
        );
        assert_eq!(
            classify_shift("10:00:00", "18:00:00", day, at(day, 14, 0)),
            ShiftStatus::Now
        );
        assert_eq!(
            classify_shift("10:00:00", "18:00:00", day, at(day, 18, 0)),
            ShiftStatus::Finished
        );
    }

    #[test]
    fn test_shift_is_now_at_exact_start() {
        let day = anchor();
        assert_eq!(
            classify_shift("10:00:00", "18:00:00", day, at(day, 10, 0)),
            ShiftStatus::Now
        );
    }

    #[test]
    fn test_overnight_shift_spans_next_calendar_day() {
        let day = anchor();
        let next = next_day(day);
        // later before 22:00 on the anchor day
        assert_eq!(
            classify_shift("22:00:00", "03:00:00", day, at(day, 21, 0)),
            ShiftStatus::Later
        );
        // on at 1 AM the next calendar day
        assert_eq!(
            classify_shift("22:00:00", "03:00:00", day, at(next, 1, 0)),
            ShiftStatus::Now
        );
        // finished at 3 AM the next calendar day
        assert_eq!(
            classify_shift("22:00:00", "03:00:00", day, at(next, 3, 0)),
            ShiftStatus::Finished
        );
    }

    #[test]
    fn test_midnight_end_means_24_00() {
        let day = anchor();
        let next = next_day(day);
        // still on one minute before midnight
        assert_eq!(
            classify_shift("10:00:00", "00:00:00", day, at(day, 23, 59)),
            ShiftStatus::Now
        );
        // finished just after midnight, not "later"
        assert_eq!(
            classify_shift("10:00:00", "00:00:00", day, at(next, 0, 1)),
            ShiftStatus::Finished
        );
    }

    #[test]
    fn test_zero_length_shift_never_runs() {
        let day = anchor();
        assert_eq!(
            classify_shift("09:00:00", "09:00:00", day, at(day, 8, 0)),
            ShiftStatus::Later
        );
        assert_eq!(
            classify_shift("09:00:00", "09:00:00", day, at(day, 10, 0)),
            ShiftStatus::Finished
        );
    }

    #[test]
    fn test_midnight_to_midnight_is_zero_length() {
        let day = anchor();
        assert_eq!(
            classify_shift("00:00:00", "00:00:00", day, at(day, 12, 0)),
            ShiftStatus::Finished
        );
    }

    #[test]
    fn test_malformed_times_default_to_midnight() {
        let day = anchor();
        // garbage start parses as 00:00:00, end stays meaningful
        assert_eq!(
            classify_shift("junk", "06:00:00", day, at(day, 3, 0)),
            ShiftStatus::Now
        );
        assert_eq!(
            classify_shift("", "", day, at(day, 3, 0)),
            ShiftStatus::Finished
        );
    }

    #[test]
    fn test_out_of_range_components_collapse_to_midnight() {
        let day = anchor();
        assert_eq!(
            classify_shift("25:00:00", "06:00:00", day, at(day, 3, 0)),
            ShiftStatus::Now
        );
    }

    #[test]
    fn test_shop_day_boundary_both_directions() {
        let june_2 = date(2025, 6, 2);
        // 09:59 belongs to the previous shop day
        assert_eq!(shop_day(at(june_2, 9, 59), 10), date(2025, 6, 1));
        // 10:00 exactly opens the new shop day
        assert_eq!(shop_day(at(june_2, 10, 0), 10), june_2);
        // mid-evening is unambiguous
        assert_eq!(shop_day(at(june_2, 21, 0), 10), june_2);
    }

    #[test]
    fn test_roster_day_per_tab() {
        let june_2 = date(2025, 6, 2);
        let after_midnight = at(june_2, 2, 0);
        assert_eq!(
            roster_day(RosterTab::Today, after_midnight, 10),
            date(2025, 6, 1)
        );
        assert_eq!(
            roster_day(RosterTab::Tomorrow, after_midnight, 10),
            june_2
        );
    }

    #[test]
    fn test_tab_parse_defaults_to_today() {
        assert_eq!(RosterTab::parse("tomorrow"), RosterTab::Tomorrow);
        assert_eq!(RosterTab::parse("TOMORROW"), RosterTab::Tomorrow);
        assert_eq!(RosterTab::parse("today"), RosterTab::Today);
        assert_eq!(RosterTab::parse("yesterday"), RosterTab::Today);
        assert_eq!(RosterTab::parse(""), RosterTab::Today);
    }

    #[test]
    fn test_format_time_label() {
        assert_eq!(format_time_label("10:00:00"), "10:00 AM");
        assert_eq!(format_time_label("18:30:00"), "6:30 PM");
        assert_eq!(format_time_label("00:05:00"), "12:05 AM");
        assert_eq!(format_time_label("12:00:00"), "12:00 PM");
    }

    #[test]
    fn test_format_working_time() {
        assert_eq!(
            format_working_time("10:00:00", "18:00:00"),
            "10:00 AM - 6:00 PM"
        );
    }

    proptest! {
        /// The classifier is total: any strings and any instant produce a
        /// status without panicking.
        #[test]
        fn prop_classifier_never_panics(
            start in ".{0,12}",
            end in ".{0,12}",
            hour in 0u32..24,
            minute in 0u32..60,
        ) {
            let day = date(2025, 6, 1);
            let _ = classify_shift(&start, &end, day, at(day, hour, minute));
        }

        /// Well-formed non-midnight windows with end <= start always span
        /// into the next calendar day: the minute before the end time on
        /// the following day is still "now".
        #[test]
        fn prop_overnight_windows_reach_next_day(
            start_h in 12u32..24,
            end_h in 1u32..12,
        ) {
            let day = date(2025, 6, 1);
            let start = format!("{start_h:02}:00:00");
            let end = format!("{end_h:02}:00:00");
            let probe = at(next_day(day), end_h - 1, 59);
            prop_assert_eq!(
                classify_shift(&start, &end, day, probe),
                ShiftStatus::Now
            );
        }
    }
}
