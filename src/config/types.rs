//! Configuration types for the staffing computations.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::DEFAULT_WEEKLY_HOURS_LIMIT;

/// Tunable knobs of the aggregation engine.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Weekly-hour limit applied to employees with neither an explicit
    /// override nor a linked rule.
    #[serde(default = "default_weekly_hours_limit")]
    pub default_weekly_hours_limit: u32,
    /// Fraction of the effective limit at which an employee is flagged as
    /// an overtime risk.
    #[serde(default = "default_risk_threshold")]
    pub overtime_risk_threshold: Decimal,
}

fn default_weekly_hours_limit() -> u32 {
    DEFAULT_WEEKLY_HOURS_LIMIT
}

fn default_risk_threshold() -> Decimal {
    // 90% of the effective limit.
    Decimal::new(9, 1)
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_weekly_hours_limit: default_weekly_hours_limit(),
            overtime_risk_threshold: default_risk_threshold(),
        }
    }
}
