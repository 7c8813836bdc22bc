//! Current-week resolution and weekday naming.
//!
//! The scheduling week runs Monday through Sunday. Requirements are keyed by
//! lowercase English weekday names, while the dashboard displays three-letter
//! labels; both spellings live here so they cannot drift apart.

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Returns the Monday of the week containing `date`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use staffing_engine::aggregation::week_start;
///
/// // 2026-01-15 is a Thursday
/// let thursday = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
/// assert_eq!(week_start(thursday), NaiveDate::from_ymd_opt(2026, 1, 12).unwrap());
/// ```
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.weekday().num_days_from_monday()))
}

/// Returns the `[start, end]` dates of the week containing `date`,
/// Monday through Sunday inclusive.
pub fn week_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = week_start(date);
    (start, start + Days::new(6))
}

/// Returns the 7 days of the week beginning at `start`, in chronological
/// order.
pub fn week_days(start: NaiveDate) -> [NaiveDate; 7] {
    std::array::from_fn(|i| start + Days::new(i as u64))
}

/// Returns the lowercase English weekday name used to key requirements.
pub fn weekday_key(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

/// Returns the three-letter display label for a date's weekday.
pub fn weekday_label(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}
