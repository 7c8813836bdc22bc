//! Overtime-risk computation.
//!
//! Sums each employee's assigned hours for the current week and flags those
//! at or above 90% of their effective weekly-hour limit.

use rust_decimal::Decimal;
use tracing::warn;

use crate::models::{AssignedShift, OvertimeRisk, RosterEntry};

use super::hours::whole_hours;

/// Flags employees whose accumulated weekly hours meet or exceed
/// `risk_threshold` of their effective limit.
///
/// `week_shifts` must already be scoped to the organization and the current
/// week; hours are attributed to exactly the employee named in each row.
/// Employees under threshold are omitted entirely, and an employee with zero
/// assigned shifts in the week is never flagged. Output order is roster
/// order; no sort is applied and duplicate names are possible (distinct
/// employee IDs).
///
/// Per-shift durations are truncated to whole hours. A shift whose times
/// fail to parse contributes nothing and is logged rather than aborting the
/// computation.
pub fn compute_overtime_risks(
    roster: &[RosterEntry],
    week_shifts: &[AssignedShift],
    default_limit: u32,
    risk_threshold: Decimal,
) -> Vec<OvertimeRisk> {
    let mut risks = Vec::new();

    for entry in roster {
        let mut total_hours: i64 = 0;
        let mut assigned = 0usize;

        for shift in week_shifts
            .iter()
            .filter(|s| s.employee_id == entry.employee_id)
        {
            assigned += 1;
            match whole_hours(&shift.start_time, &shift.end_time) {
                Some(hours) => total_hours += hours,
                None => {
                    warn!(
                        employee_id = %entry.employee_id,
                        date = %shift.date,
                        start_time = %shift.start_time,
                        end_time = %shift.end_time,
                        "Skipping shift with unparseable times"
                    );
                }
            }
        }

        if assigned == 0 {
            continue;
        }

        let limit = entry.effective_limit(default_limit);
        let threshold = Decimal::from(limit) * risk_threshold;

        if Decimal::from(total_hours) >= threshold {
            risks.push(OvertimeRisk {
                employee_id: entry.employee_id.clone(),
                name: entry.name.clone(),
                current_hours: total_hours,
                limit,
            });
        }
    }

    risks
}
