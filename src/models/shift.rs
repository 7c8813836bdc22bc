//! Shift and assignment models.
//!
//! A shift is a concrete time block within an area; an assignment links at
//! most one employee (and optionally a role) to a shift. Shift times are
//! local wall-clock `HH:mm` strings as entered by schedulers, so malformed
//! values are representable and tolerated by the duration helpers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A scheduled time block within an area and location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    /// Unique identifier for the shift.
    pub id: String,
    /// The owning organization.
    pub org_id: String,
    /// The location this shift is scheduled at.
    pub location_id: String,
    /// The area this shift is scheduled in.
    pub area_id: String,
    /// The calendar date of the shift.
    pub date: NaiveDate,
    /// The local wall-clock start time, `HH:mm`.
    pub start_time: String,
    /// The local wall-clock end time, `HH:mm`.
    pub end_time: String,
}

/// The employee (and optionally role) filling a shift.
///
/// A shift has zero or one assignment in this model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Unique identifier for the assignment.
    pub id: String,
    /// The shift being filled.
    pub shift_id: String,
    /// The employee filling the shift.
    pub employee_id: String,
    /// The role the employee works this shift as, if declared.
    #[serde(default)]
    pub role_id: Option<String>,
}

/// An assigned-shift row for the weekly computations.
///
/// Produced by the data-access layer as an inner join of shifts and their
/// assignments within a date range; unassigned shifts do not appear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignedShift {
    /// The calendar date of the shift.
    pub date: NaiveDate,
    /// The local wall-clock start time, `HH:mm`.
    pub start_time: String,
    /// The local wall-clock end time, `HH:mm`.
    pub end_time: String,
    /// The area the shift is scheduled in.
    pub area_id: String,
    /// The employee assigned to the shift.
    pub employee_id: String,
    /// The role declared on the assignment, if any.
    pub role_id: Option<String>,
}

/// A shift together with its assignment, if one exists.
///
/// Produced by the data-access layer as a left join; the same-day summary
/// and payroll computations consume this shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftSlot {
    /// The shift.
    pub shift: Shift,
    /// The assignment filling the shift, or `None` if it is unassigned.
    pub assignment: Option<Assignment>,
}

impl ShiftSlot {
    /// Returns true if no assignment fills this shift.
    pub fn is_unassigned(&self) -> bool {
        self.assignment.is_none()
    }
}
