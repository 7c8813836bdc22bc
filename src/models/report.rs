//! Summary records produced by the aggregation functions.
//!
//! These are the plain derived-data shapes serialized as JSON to the browser
//! client. The wire format is camelCase, matching the client contract, and
//! nothing here is persisted — every record is recomputed per request.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An employee whose weekly hours approach or meet their effective limit.
///
/// Employees under the risk threshold are omitted entirely; there is no
/// "ok" record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OvertimeRisk {
    /// The employee at risk.
    pub employee_id: String,
    /// The employee's display name. Names are not unique; distinct IDs may
    /// share one.
    pub name: String,
    /// Hours accumulated this week, in whole hours.
    pub current_hours: i64,
    /// The employee's effective weekly-hour limit.
    pub limit: u32,
}

/// Aggregate shift counts for a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodayStats {
    /// All shifts scheduled on the day.
    pub total_shifts: u64,
    /// Shifts on the day with no assignment.
    pub unassigned_shifts: u64,
}

/// Coverage status of a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayStatus {
    /// Every requirement for the day is met.
    Ok,
    /// At least one requirement for the day is short.
    Warning,
}

/// Requirement coverage for one day of the week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageDay {
    /// The calendar date of the day.
    pub date: NaiveDate,
    /// Three-letter display label for the day ("Mon", "Tue", ...).
    pub day_name: String,
    /// Whether the day's requirements are all met.
    pub status: DayStatus,
    /// Total headcount missing across the day's requirements.
    pub missing: u32,
    /// Total headcount required across the day's requirements.
    pub total_required: u32,
}

/// The full dashboard payload for an organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Count of time-off requests awaiting a decision.
    pub pending_time_off_count: u64,
    /// Employees approaching or at their weekly-hour limit.
    pub overtime_risks: Vec<OvertimeRisk>,
    /// Aggregate shift counts for today.
    pub todays_stats: TodayStats,
    /// Coverage for the 7 days of the current week, Monday first.
    pub weekly_requirements: Vec<CoverageDay>,
}

/// One employee's payroll estimate for a date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollRow {
    /// The employee.
    pub id: String,
    /// The employee's display name.
    pub name: String,
    /// The linked user's account role.
    pub role: String,
    /// The hourly rate used, zero when unset.
    pub hourly_rate: Decimal,
    /// Total worked hours in range, rounded to 2 decimal places.
    pub total_hours: Decimal,
    /// Estimated pay (hours x rate), rounded to 2 decimal places.
    pub estimated_pay: Decimal,
}

/// The payroll endpoint payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollReport {
    /// One row per employee at the requested location.
    pub data: Vec<PayrollRow>,
}
