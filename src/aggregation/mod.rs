//! Aggregation logic for the Staffing Insight Engine.
//!
//! This module contains the derived-data computations behind the dashboard
//! and payroll endpoints: current-week resolution, shift duration helpers,
//! overtime-risk detection, weekly requirement coverage, same-day shift
//! summaries, and payroll estimation. Every function here is a pure,
//! single-pass computation over already-fetched data; nothing is persisted.

mod coverage;
mod hours;
mod overtime;
mod payroll;
mod today;
mod week;

pub use coverage::compute_weekly_coverage;
pub use hours::{fractional_hours, parse_clock, whole_hours};
pub use overtime::compute_overtime_risks;
pub use payroll::compute_payroll;
pub use today::compute_today_stats;
pub use week::{week_bounds, week_days, week_start, weekday_key, weekday_label};
