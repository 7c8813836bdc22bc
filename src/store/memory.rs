//! In-memory [`ScheduleStore`] implementation.
//!
//! Holds the scheduling entities in plain vectors and answers the engine's
//! queries with batched in-memory joins. Backs the tests and benches, and
//! serves as the reference semantics for a database-backed store.

use chrono::NaiveDate;

use crate::error::EngineResult;
use crate::models::{
    Assignment, AssignedShift, Employee, PayrollEmployee, Requirement, RosterEntry, Rule, Shift,
    ShiftSlot, TimeOffRequest, TimeOffStatus, User,
};

use super::ScheduleStore;

/// An in-memory schedule store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    users: Vec<User>,
    rules: Vec<Rule>,
    employees: Vec<Employee>,
    shifts: Vec<Shift>,
    assignments: Vec<Assignment>,
    requirements: Vec<Requirement>,
    time_off: Vec<TimeOffRequest>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a user.
    pub fn insert_user(&mut self, user: User) {
        self.users.push(user);
    }

    /// Adds an hour-limit rule.
    pub fn insert_rule(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Adds an employee profile.
    pub fn insert_employee(&mut self, employee: Employee) {
        self.employees.push(employee);
    }

    /// Adds a shift.
    pub fn insert_shift(&mut self, shift: Shift) {
        self.shifts.push(shift);
    }

    /// Adds an assignment.
    pub fn insert_assignment(&mut self, assignment: Assignment) {
        self.assignments.push(assignment);
    }

    /// Adds a staffing requirement.
    pub fn insert_requirement(&mut self, requirement: Requirement) {
        self.requirements.push(requirement);
    }

    /// Adds a time-off request.
    pub fn insert_time_off(&mut self, request: TimeOffRequest) {
        self.time_off.push(request);
    }

    fn user(&self, user_id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == user_id)
    }

    fn rule_value(&self, rule_id: Option<&str>) -> Option<u32> {
        let rule_id = rule_id?;
        self.rules.iter().find(|r| r.id == rule_id).map(|r| r.value)
    }

    fn assignment_for(&self, shift_id: &str) -> Option<&Assignment> {
        self.assignments.iter().find(|a| a.shift_id == shift_id)
    }
}

impl ScheduleStore for MemoryStore {
    fn roster(&self, org_id: &str) -> EngineResult<Vec<RosterEntry>> {
        Ok(self
            .employees
            .iter()
            .filter(|e| e.org_id == org_id)
            .filter_map(|e| {
                // Inner join on users: a profile without a user is invisible.
                let user = self.user(&e.user_id)?;
                Some(RosterEntry {
                    employee_id: e.id.clone(),
                    name: user.name.clone(),
                    weekly_hours_limit: e.weekly_hours_limit,
                    rule_value: self.rule_value(e.rule_id.as_deref()),
                })
            })
            .collect())
    }

    fn assigned_shifts_in_range(
        &self,
        org_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<Vec<AssignedShift>> {
        Ok(self
            .shifts
            .iter()
            .filter(|s| s.org_id == org_id && s.date >= start && s.date <= end)
            .filter_map(|s| {
                let assignment = self.assignment_for(&s.id)?;
                Some(AssignedShift {
                    date: s.date,
                    start_time: s.start_time.clone(),
                    end_time: s.end_time.clone(),
                    area_id: s.area_id.clone(),
                    employee_id: assignment.employee_id.clone(),
                    role_id: assignment.role_id.clone(),
                })
            })
            .collect())
    }

    fn shifts_on(&self, org_id: &str, date: NaiveDate) -> EngineResult<Vec<ShiftSlot>> {
        Ok(self
            .shifts
            .iter()
            .filter(|s| s.org_id == org_id && s.date == date)
            .map(|s| ShiftSlot {
                shift: s.clone(),
                assignment: self.assignment_for(&s.id).cloned(),
            })
            .collect())
    }

    fn requirements(&self, org_id: &str) -> EngineResult<Vec<Requirement>> {
        Ok(self
            .requirements
            .iter()
            .filter(|r| r.org_id == org_id)
            .cloned()
            .collect())
    }

    fn pending_time_off_count(&self, org_id: &str) -> EngineResult<u64> {
        Ok(self
            .time_off
            .iter()
            .filter(|t| t.org_id == org_id && t.status == TimeOffStatus::Pending)
            .count() as u64)
    }

    fn location_employees(&self, location_id: &str) -> EngineResult<Vec<PayrollEmployee>> {
        Ok(self
            .employees
            .iter()
            .filter(|e| e.location_id == location_id)
            .filter_map(|e| {
                let user = self.user(&e.user_id)?;
                Some(PayrollEmployee {
                    id: e.id.clone(),
                    name: user.name.clone(),
                    role: user.role.clone(),
                    hourly_rate: e.hourly_rate,
                })
            })
            .collect())
    }

    fn location_shifts_in_range(
        &self,
        location_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<Vec<ShiftSlot>> {
        Ok(self
            .shifts
            .iter()
            .filter(|s| s.location_id == location_id && s.date >= start && s.date <= end)
            .map(|s| ShiftSlot {
                shift: s.clone(),
                assignment: self.assignment_for(&s.id).cloned(),
            })
            .collect())
    }
}
