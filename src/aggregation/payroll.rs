//! Payroll estimation.
//!
//! Sums worked hours per employee over a date range and estimates pay as
//! hours times hourly rate. The full location roster is the base set: every
//! employee appears in the output, including those with no shifts in range.

use std::collections::HashMap;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{PayrollEmployee, PayrollRow, ShiftSlot};

use super::hours::fractional_hours;

/// Computes the payroll estimate for a location roster against the shifts
/// scheduled there in range.
///
/// Hours accumulate fractionally (a 7h30m shift contributes 7.5) and pay
/// accrues only for employees with an hourly rate set; employees without a
/// rate report a rate and estimate of zero. Unassigned shifts and
/// assignments referencing employees outside the roster contribute nothing.
/// Accumulation is unrounded; `totalHours` and `estimatedPay` are rounded to
/// 2 decimal places for display at the end.
///
/// Output order is roster order, one row per employee.
pub fn compute_payroll(roster: &[PayrollEmployee], slots: &[ShiftSlot]) -> Vec<PayrollRow> {
    let mut totals: Vec<(Decimal, Decimal)> = vec![(Decimal::ZERO, Decimal::ZERO); roster.len()];
    let index: HashMap<&str, usize> = roster
        .iter()
        .enumerate()
        .map(|(i, e)| (e.id.as_str(), i))
        .collect();

    for slot in slots {
        let Some(assignment) = &slot.assignment else {
            continue;
        };
        let Some(&i) = index.get(assignment.employee_id.as_str()) else {
            continue;
        };

        let duration = fractional_hours(&slot.shift.start_time, &slot.shift.end_time);
        totals[i].0 += duration;
        if let Some(rate) = roster[i].hourly_rate {
            totals[i].1 += duration * rate;
        }
    }

    roster
        .iter()
        .zip(totals)
        .map(|(employee, (hours, pay))| PayrollRow {
            id: employee.id.clone(),
            name: employee.name.clone(),
            role: employee.role.clone(),
            hourly_rate: employee.hourly_rate.unwrap_or(Decimal::ZERO),
            total_hours: display_round(hours),
            estimated_pay: display_round(pay),
        })
        .collect()
}

/// Rounds to 2 decimal places for display, half away from zero. The scale
/// is pinned so whole numbers serialize as "8.00", not "8".
fn display_round(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}
