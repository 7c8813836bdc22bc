//! Staffing requirement model.

use serde::{Deserialize, Serialize};

/// A minimum-headcount declaration: for an area, a weekday, and a role,
/// at least `count` matching assignments must exist.
///
/// `day_of_week` is a lowercase English weekday name ("monday" .. "sunday"),
/// matching the keys produced by the week helpers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    /// Unique identifier for the requirement.
    pub id: String,
    /// The owning organization.
    pub org_id: String,
    /// The location this requirement applies to.
    pub location_id: String,
    /// The area that must be covered.
    pub area_id: String,
    /// The role that must fill the coverage.
    pub role_id: String,
    /// The lowercase weekday name this requirement applies to.
    pub day_of_week: String,
    /// The minimum headcount.
    pub count: u32,
}
