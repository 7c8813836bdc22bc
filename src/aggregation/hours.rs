//! Shift duration helpers.
//!
//! Shift times are local wall-clock `HH:mm` strings. Two duration flavors
//! exist and are intentionally kept distinct: the dashboard path truncates
//! to whole hours, while payroll accumulates fractional hours. Cross-midnight
//! shifts are not normalized — when the end time precedes the start time the
//! duration is negative, and a zero-length shift contributes zero.
//!
//! Malformed time strings never abort an aggregate: the dashboard helper
//! returns `None` so callers can skip the record, and the payroll helper
//! contributes zero.

use chrono::NaiveTime;
use rust_decimal::Decimal;

/// Parses a wall-clock `HH:mm` string.
pub fn parse_clock(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M").ok()
}

/// Computes the whole-hour difference between two `HH:mm` times on the same
/// date, truncated toward zero.
///
/// A shift shorter than one hour computes to 0 contributed hours; this is
/// accepted behavior for the dashboard path, not rounded up.
///
/// Returns `None` when either time fails to parse.
///
/// # Examples
///
/// ```
/// use staffing_engine::aggregation::whole_hours;
///
/// assert_eq!(whole_hours("09:00", "17:30"), Some(8));
/// assert_eq!(whole_hours("09:00", "09:45"), Some(0));
/// assert_eq!(whole_hours("22:00", "02:00"), Some(-20));
/// assert_eq!(whole_hours("9am", "17:00"), None);
/// ```
pub fn whole_hours(start: &str, end: &str) -> Option<i64> {
    let start = parse_clock(start)?;
    let end = parse_clock(end)?;
    Some((end - start).num_hours())
}

/// Computes the fractional-hour difference between two `HH:mm` times as
/// `(endH + endM/60) - (startH + startM/60)`.
///
/// Malformed times contribute zero. Extra components beyond minutes are
/// ignored, and out-of-range fields are not rejected; this helper mirrors
/// the lenient arithmetic of the payroll estimate.
pub fn fractional_hours(start: &str, end: &str) -> Decimal {
    let (Some((start_h, start_m)), Some((end_h, end_m))) = (split_clock(start), split_clock(end))
    else {
        return Decimal::ZERO;
    };

    let minutes = (end_h * 60 + end_m) - (start_h * 60 + start_m);
    Decimal::new(minutes, 0) / Decimal::new(60, 0)
}

/// Splits `HH:mm` into numeric hour and minute components.
fn split_clock(value: &str) -> Option<(i64, i64)> {
    let mut parts = value.splitn(3, ':');
    let hours = parts.next()?.parse::<i64>().ok()?;
    let minutes = parts.next()?.parse::<i64>().ok()?;
    Some((hours, minutes))
}
