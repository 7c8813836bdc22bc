//! Same-day shift summary.

use crate::models::{ShiftSlot, TodayStats};

/// Counts total and unassigned shifts among a single day's slots.
///
/// `slots` must already be scoped to the organization and the day in
/// question. A shift is unassigned when it has no assignment row; no
/// distinction is made between shifts already past and still ahead.
pub fn compute_today_stats(slots: &[ShiftSlot]) -> TodayStats {
    TodayStats {
        total_shifts: slots.len() as u64,
        unassigned_shifts: slots.iter().filter(|s| s.is_unassigned()).count() as u64,
    }
}
