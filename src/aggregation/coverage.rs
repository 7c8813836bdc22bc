//! Weekly requirement-coverage computation.
//!
//! For each day of the current week, compares declared staffing requirements
//! against the assignments actually scheduled and reports the shortfall.

use chrono::NaiveDate;

use crate::models::{AssignedShift, CoverageDay, DayStatus, Requirement};

use super::week::{week_days, weekday_key, weekday_label};

/// Computes coverage for the 7 days of the week beginning at `start`.
///
/// For each day, requirements whose `day_of_week` matches the day are
/// checked against `week_shifts`: an assignment covers a requirement only
/// when the shift falls on that date in the requirement's area and the
/// assignment declares exactly the requirement's role — an assignment with
/// no role never satisfies a requirement. The shortfall per requirement is
/// `max(0, required - covered)`; a surplus on one requirement or day never
/// offsets a deficit on another.
///
/// The output always has exactly 7 entries in chronological order, and a day
/// is `warning` iff any of its requirements is short.
pub fn compute_weekly_coverage(
    requirements: &[Requirement],
    week_shifts: &[AssignedShift],
    start: NaiveDate,
) -> Vec<CoverageDay> {
    week_days(start)
        .into_iter()
        .map(|date| {
            let key = weekday_key(date);
            let mut total_required = 0u32;
            let mut missing = 0u32;

            for requirement in requirements.iter().filter(|r| r.day_of_week == key) {
                total_required += requirement.count;

                let covered = week_shifts
                    .iter()
                    .filter(|s| {
                        s.date == date
                            && s.area_id == requirement.area_id
                            && s.role_id.as_deref() == Some(requirement.role_id.as_str())
                    })
                    .count() as u32;

                missing += requirement.count.saturating_sub(covered);
            }

            CoverageDay {
                date,
                day_name: weekday_label(date).to_string(),
                status: if missing == 0 {
                    DayStatus::Ok
                } else {
                    DayStatus::Warning
                },
                missing,
                total_required,
            }
        })
        .collect()
}
