//! Employee model and related types.
//!
//! This module defines the Employee and Rule structs for representing staff
//! profiles and weekly-hour policies, along with the typed join rows the
//! data-access layer produces for the overtime and payroll computations.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The weekly-hour limit applied when an employee has neither an explicit
/// override nor a linked rule.
pub const DEFAULT_WEEKLY_HOURS_LIMIT: u32 = 40;

/// A named weekly-hour ceiling policy, reusable across employees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Unique identifier for the rule.
    pub id: String,
    /// The display name of the rule (e.g. "Part-time cap").
    pub name: String,
    /// The weekly-hour ceiling, in hours.
    pub value: u32,
    /// The owning organization.
    pub org_id: String,
}

/// A staff profile linking a user to a location.
///
/// An employee may carry an explicit weekly-hour limit override, a reference
/// to a named [`Rule`], and an hourly pay rate. All three are optional; the
/// effective limit resolution is performed on [`RosterEntry`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The user account this profile belongs to.
    pub user_id: String,
    /// The owning organization.
    pub org_id: String,
    /// The location the employee works at.
    pub location_id: String,
    /// Explicit weekly-hour limit override, if set.
    #[serde(default)]
    pub weekly_hours_limit: Option<u32>,
    /// Reference to a named hour-limit rule, if any.
    #[serde(default)]
    pub rule_id: Option<String>,
    /// The employee's hourly pay rate, if set.
    #[serde(default)]
    pub hourly_rate: Option<Decimal>,
}

/// A roster row for the overtime-risk computation.
///
/// Produced by the data-access layer as a single batched join of employees,
/// their user names, and their linked rule values, scoped to an organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    /// The employee this row describes.
    pub employee_id: String,
    /// The employee's display name, from the linked user.
    pub name: String,
    /// Explicit weekly-hour limit override, if set.
    pub weekly_hours_limit: Option<u32>,
    /// The linked rule's weekly-hour ceiling, if the employee has a rule.
    pub rule_value: Option<u32>,
}

impl RosterEntry {
    /// Resolves the effective weekly-hour limit for this employee.
    ///
    /// Resolution order: the explicit override if set, else the linked
    /// rule's value, else `default`. An explicit override of `0` is honored
    /// rather than falling through.
    ///
    /// # Examples
    ///
    /// ```
    /// use staffing_engine::models::RosterEntry;
    ///
    /// let entry = RosterEntry {
    ///     employee_id: "emp_001".to_string(),
    ///     name: "Alice Nguyen".to_string(),
    ///     weekly_hours_limit: Some(30),
    ///     rule_value: Some(45),
    /// };
    /// assert_eq!(entry.effective_limit(40), 30);
    /// ```
    pub fn effective_limit(&self, default: u32) -> u32 {
        self.weekly_hours_limit
            .or(self.rule_value)
            .unwrap_or(default)
    }
}

/// A payroll roster row: one employee at a location with the fields the
/// payroll estimate needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollEmployee {
    /// The employee this row describes.
    pub id: String,
    /// The employee's display name, from the linked user.
    pub name: String,
    /// The linked user's account role.
    pub role: String,
    /// The employee's hourly pay rate, if set.
    pub hourly_rate: Option<Decimal>,
}
