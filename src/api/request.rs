//! Request types for the Staffing Insight Engine API.
//!
//! This module defines the query-string structure for the `/payroll`
//! endpoint. All three parameters are required; validation happens before
//! any computation so a missing parameter yields a client error rather than
//! a partial result.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Raw query parameters of the `/payroll` endpoint.
///
/// Fields are optional at the deserialization layer so that missing
/// parameters can be reported with a descriptive message instead of a
/// generic extraction rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollQuery {
    /// The first date of the range, `YYYY-MM-DD`.
    #[serde(default)]
    pub start_date: Option<String>,
    /// The last date of the range, `YYYY-MM-DD`.
    #[serde(default)]
    pub end_date: Option<String>,
    /// The location whose roster is estimated.
    #[serde(default)]
    pub location_id: Option<String>,
}

/// A validated payroll request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayrollRequest {
    /// The first date of the range, inclusive.
    pub start_date: NaiveDate,
    /// The last date of the range, inclusive.
    pub end_date: NaiveDate,
    /// The location whose roster is estimated.
    pub location_id: String,
}

impl PayrollQuery {
    /// Validates the raw parameters, reporting the first missing or
    /// malformed one.
    pub fn validate(self) -> EngineResult<PayrollRequest> {
        let start_date = require(self.start_date, "startDate")?;
        let end_date = require(self.end_date, "endDate")?;
        let location_id = require(self.location_id, "locationId")?;

        Ok(PayrollRequest {
            start_date: parse_date(&start_date)?,
            end_date: parse_date(&end_date)?,
            location_id,
        })
    }
}

fn require(value: Option<String>, name: &str) -> EngineResult<String> {
    value.ok_or_else(|| EngineError::MissingParameter {
        name: name.to_string(),
    })
}

fn parse_date(value: &str) -> EngineResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| EngineError::InvalidDate {
        value: value.to_string(),
    })
}
