//! Data-access seam for the Staffing Insight Engine.
//!
//! The engine never writes: it consumes a handful of read queries over the
//! scheduling entities, expressed here as the [`ScheduleStore`] trait. The
//! storage collaborator owns the entities; any failure it reports propagates
//! to the caller as a server error and is not retried here.

mod memory;

use chrono::NaiveDate;

pub use memory::MemoryStore;

use crate::error::EngineResult;
use crate::models::{AssignedShift, PayrollEmployee, Requirement, RosterEntry, ShiftSlot};

/// Read-only queries over an organization's scheduling data.
///
/// Each method is a single batched query returning typed join rows; callers
/// never issue per-row follow-up queries. No snapshot isolation is taken
/// across methods — results are best-effort with respect to concurrent
/// writes.
pub trait ScheduleStore: Send + Sync {
    /// The organization's employees joined with their user names and linked
    /// rule values, in listing order.
    fn roster(&self, org_id: &str) -> EngineResult<Vec<RosterEntry>>;

    /// Shifts with an assignment whose date falls within `[start, end]`
    /// inclusive, scoped to the organization. Unassigned shifts are absent.
    fn assigned_shifts_in_range(
        &self,
        org_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<Vec<AssignedShift>>;

    /// All of the organization's shifts on a single date, each with its
    /// assignment if one exists.
    fn shifts_on(&self, org_id: &str, date: NaiveDate) -> EngineResult<Vec<ShiftSlot>>;

    /// The organization's staffing requirements.
    fn requirements(&self, org_id: &str) -> EngineResult<Vec<Requirement>>;

    /// Count of the organization's time-off requests awaiting a decision.
    fn pending_time_off_count(&self, org_id: &str) -> EngineResult<u64>;

    /// The employees at a location joined with their user names and roles,
    /// in listing order.
    fn location_employees(&self, location_id: &str) -> EngineResult<Vec<PayrollEmployee>>;

    /// A location's shifts whose date falls within `[start, end]` inclusive,
    /// each with its assignment if one exists.
    fn location_shifts_in_range(
        &self,
        location_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<Vec<ShiftSlot>>;
}
