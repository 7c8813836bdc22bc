//! HTTP API module for the Staffing Insight Engine.
//!
//! This module provides the read-only REST endpoints exposing the dashboard
//! and payroll aggregations to the browser client.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{PayrollQuery, PayrollRequest};
pub use response::ApiError;
pub use state::AppState;
