//! HTTP API module for the Shift Roster & Payroll Engine.
//!
//! This module provides the REST API endpoints for laying out schedule
//! weeks, expanding recurring work blocks, and generating monthly reports.
//! The API is stateless: every request carries the already-materialized
//! rows it needs, and persistence stays with the caller.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ExpandRequest, MonthlyReportRequest, ScheduleWeekRequest};
pub use response::{ApiError, ExpandResponse};
pub use state::AppState;
