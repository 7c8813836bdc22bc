//! HTTP request handlers for the Staffing Insight Engine API.
//!
//! This module contains the handler functions for the two read-only
//! endpoints: the manager dashboard summary and the payroll estimate.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::aggregation::{
    compute_overtime_risks, compute_payroll, compute_today_stats, compute_weekly_coverage,
    week_bounds,
};
use crate::error::{EngineError, EngineResult};
use crate::models::{DashboardStats, PayrollReport};

use super::request::{PayrollQuery, PayrollRequest};
use super::response::ApiErrorResponse;
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/dashboard/stats", get(dashboard_stats_handler))
        .route("/payroll", get(payroll_handler))
        .with_state(state)
}

/// Handler for GET /dashboard/stats.
///
/// Returns the pending time-off count, overtime risks and weekly coverage
/// for the organization named by the `x-org-id` header, computed over the
/// Monday-start week containing today.
async fn dashboard_stats_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing dashboard stats request");

    let org_id = match headers.get("x-org-id").and_then(|v| v.to_str().ok()) {
        Some(org_id) => org_id.to_string(),
        None => {
            warn!(correlation_id = %correlation_id, "Request without organization header");
            let api_error: ApiErrorResponse = EngineError::MissingOrgContext.into();
            return (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response();
        }
    };

    let start_time = Instant::now();
    match build_dashboard(&state, &org_id) {
        Ok(stats) => {
            info!(
                correlation_id = %correlation_id,
                org_id = %org_id,
                overtime_risks = stats.overtime_risks.len(),
                pending_time_off = stats.pending_time_off_count,
                duration_us = start_time.elapsed().as_micros(),
                "Dashboard stats computed"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(stats),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                org_id = %org_id,
                error = %err,
                "Dashboard stats failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Handler for GET /payroll.
///
/// Returns the estimated pay per employee at a location over an inclusive
/// date range. All three query parameters are required.
async fn payroll_handler(
    State(state): State<AppState>,
    Query(query): Query<PayrollQuery>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll request");

    let request = match query.validate() {
        Ok(request) => request,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Payroll request rejected"
            );
            let api_error: ApiErrorResponse = err.into();
            return (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response();
        }
    };

    let start_time = Instant::now();
    match build_payroll(&state, &request) {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                location_id = %request.location_id,
                employees = report.data.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Payroll estimate computed"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(report),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                location_id = %request.location_id,
                error = %err,
                "Payroll estimate failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Assembles the dashboard summary for an organization.
fn build_dashboard(state: &AppState, org_id: &str) -> EngineResult<DashboardStats> {
    let config = state.config();
    let today = state.clock().today();
    let (week_start, week_end) = week_bounds(today);

    let roster = state.store().roster(org_id)?;
    let week_shifts = state
        .store()
        .assigned_shifts_in_range(org_id, week_start, week_end)?;
    let requirements = state.store().requirements(org_id)?;
    let today_slots = state.store().shifts_on(org_id, today)?;
    let pending_time_off_count = state.store().pending_time_off_count(org_id)?;

    Ok(DashboardStats {
        pending_time_off_count,
        overtime_risks: compute_overtime_risks(
            &roster,
            &week_shifts,
            config.default_weekly_hours_limit,
            config.overtime_risk_threshold,
        ),
        todays_stats: compute_today_stats(&today_slots),
        weekly_requirements: compute_weekly_coverage(&requirements, &week_shifts, week_start),
    })
}

/// Assembles the payroll estimate for a validated request.
fn build_payroll(state: &AppState, request: &PayrollRequest) -> EngineResult<PayrollReport> {
    let roster = state.store().location_employees(&request.location_id)?;
    if roster.is_empty() {
        return Ok(PayrollReport { data: Vec::new() });
    }

    let slots = state.store().location_shifts_in_range(
        &request.location_id,
        request.start_date,
        request.end_date,
    )?;

    Ok(PayrollReport {
        data: compute_payroll(&roster, &slots),
    })
}
