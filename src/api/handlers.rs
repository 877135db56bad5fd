//! HTTP request handlers for the Shift Roster & Payroll Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{ReportInput, expand, layout_week, monthly_report};
use crate::models::{Assignment, BonusPenalty, Client, Employee, WorkBlock};

use super::request::{ExpandRequest, MonthlyReportRequest, ScheduleWeekRequest};
use super::response::{ApiError, ApiErrorResponse, ExpandResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/schedule/week", post(schedule_week_handler))
        .route("/blocks/expand", post(expand_handler))
        .route("/reports/monthly", post(monthly_report_handler))
        .with_state(state)
}

/// Converts a JSON extraction rejection into an error response.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

fn engine_error_response(error: crate::error::EngineError, correlation_id: Uuid) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %error,
        "Request failed"
    );
    let api_error: ApiErrorResponse = error.into();
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}

/// Handler for the POST /schedule/week endpoint.
///
/// Lays out the supplied work blocks on the requested ISO week's calendar
/// grid, one column of positioned blocks per day.
async fn schedule_week_handler(
    State(state): State<AppState>,
    payload: Result<Json<ScheduleWeekRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing schedule week request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let blocks: Vec<WorkBlock> = request.blocks.into_iter().map(Into::into).collect();
    for block in &blocks {
        if let Err(err) = block.validate() {
            return engine_error_response(err, correlation_id);
        }
    }

    match layout_week(&blocks, request.year, request.week, state.config().grid()) {
        Ok(week) => {
            info!(
                correlation_id = %correlation_id,
                year = request.year,
                week = request.week,
                blocks_count = blocks.len(),
                "Schedule week laid out"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(week),
            )
                .into_response()
        }
        Err(err) => engine_error_response(err, correlation_id),
    }
}

/// Handler for the POST /blocks/expand endpoint.
///
/// Expands a newly created constant work block into its remaining monthly
/// occurrences. Already-existing occurrences are skipped, so re-sending
/// the same request creates nothing new.
async fn expand_handler(
    payload: Result<Json<ExpandRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing block expansion request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let template: WorkBlock = request.template.into();
    let assignments: Vec<Assignment> = request.assignments.into_iter().map(Into::into).collect();
    let existing: Vec<WorkBlock> = request
        .existing_blocks
        .into_iter()
        .map(Into::into)
        .collect();

    match expand(&template, &assignments, &existing[..], Utc::now()) {
        Ok(created) => {
            info!(
                correlation_id = %correlation_id,
                template_id = %template.id,
                occurrences = created.len(),
                "Block expansion completed"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(ExpandResponse { created }),
            )
                .into_response()
        }
        Err(err) => engine_error_response(err, correlation_id),
    }
}

/// Handler for the POST /reports/monthly endpoint.
///
/// Aggregates the supplied month of assignments and adjustments into
/// per-employee pay figures and per-client billing figures.
async fn monthly_report_handler(
    payload: Result<Json<MonthlyReportRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing monthly report request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let employees: Vec<Employee> = request.employees.into_iter().map(Into::into).collect();
    let clients: Vec<Client> = request.clients.into_iter().map(Into::into).collect();
    let blocks: Vec<WorkBlock> = request.blocks.into_iter().map(Into::into).collect();
    let assignments: Vec<Assignment> = request.assignments.into_iter().map(Into::into).collect();
    let adjustments: Vec<BonusPenalty> =
        request.adjustments.into_iter().map(Into::into).collect();

    for block in &blocks {
        if let Err(err) = block.validate() {
            return engine_error_response(err, correlation_id);
        }
    }

    let report = monthly_report(
        request.year,
        request.month,
        &ReportInput {
            employees: &employees,
            clients: &clients,
            blocks: &blocks,
            assignments: &assignments,
            adjustments: &adjustments,
        },
        request.today,
    );

    info!(
        correlation_id = %correlation_id,
        year = request.year,
        month = request.month,
        employees_count = report.employees.len(),
        clients_count = report.clients.len(),
        "Monthly report generated"
    );
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(report),
    )
        .into_response()
}
