//! Core data models for the Staffing Insight Engine.
//!
//! This module contains the entities the aggregator consumes (owned and
//! written by the storage collaborator, immutable here), the typed join rows
//! the data-access layer returns, and the summary records serialized to the
//! client.

mod directory;
mod employee;
mod report;
mod requirement;
mod shift;
mod time_off;

pub use directory::User;
pub use employee::{Employee, PayrollEmployee, RosterEntry, Rule, DEFAULT_WEEKLY_HOURS_LIMIT};
pub use report::{
    CoverageDay, DashboardStats, DayStatus, OvertimeRisk, PayrollReport, PayrollRow, TodayStats,
};
pub use requirement::Requirement;
pub use shift::{AssignedShift, Assignment, Shift, ShiftSlot};
pub use time_off::{TimeOffRequest, TimeOffStatus};
