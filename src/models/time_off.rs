//! Time-off request model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Approval status of a time-off request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeOffStatus {
    /// Awaiting a manager's decision.
    Pending,
    /// Approved by a manager.
    Approved,
    /// Denied by a manager.
    Denied,
}

/// An employee's request for a day off, full-day or partial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeOffRequest {
    /// Unique identifier for the request.
    pub id: String,
    /// The employee requesting time off.
    pub employee_id: String,
    /// The owning organization.
    pub org_id: String,
    /// The requested date.
    pub date: NaiveDate,
    /// Whether the request covers the full day.
    pub is_full_day: bool,
    /// The start of a partial-day request, `HH:mm`.
    #[serde(default)]
    pub start_time: Option<String>,
    /// The end of a partial-day request, `HH:mm`.
    #[serde(default)]
    pub end_time: Option<String>,
    /// The reason given by the employee.
    pub reason: String,
    /// The approval status.
    pub status: TimeOffStatus,
}
