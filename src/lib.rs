//! Staffing Insight Engine for shift schedules
//!
//! This crate provides the read-side reporting computations of a multi-tenant
//! employee-shift-scheduling product: per-employee weekly hours and
//! overtime-risk detection, per-day requirement coverage, same-day shift
//! summaries, and payroll estimation, exposed over a small REST API.

#![warn(missing_docs)]

pub mod aggregation;
pub mod api;
pub mod clock;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
