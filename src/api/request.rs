//! Request types for the Shift Roster & Payroll Engine API.
//!
//! This module defines the JSON request structures for the API endpoints.
//! Each request carries the materialized rows the computation needs; the
//! store behind them stays external to the engine.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{AdjustmentKind, Assignment, BonusPenalty, Client, Employee, WorkBlock};

/// Request body for the `/schedule/week` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleWeekRequest {
    /// The ISO week-based year.
    pub year: i32,
    /// The ISO week number within the year.
    pub week: u32,
    /// The work blocks that may fall within the week.
    pub blocks: Vec<WorkBlockRequest>,
}

/// Request body for the `/blocks/expand` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpandRequest {
    /// The newly created work block to expand.
    pub template: WorkBlockRequest,
    /// The template's assignments, cloned onto each occurrence.
    #[serde(default)]
    pub assignments: Vec<AssignmentRequest>,
    /// The blocks already stored for the template's month, used for the
    /// existence check that keeps expansion idempotent.
    #[serde(default)]
    pub existing_blocks: Vec<WorkBlockRequest>,
}

/// Request body for the `/reports/monthly` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyReportRequest {
    /// The report year.
    pub year: i32,
    /// The report month, 1 through 12.
    pub month: u32,
    /// The reference date for the current-week sub-slice.
    pub today: NaiveDate,
    /// The employees to report on, in presentation order.
    pub employees: Vec<EmployeeRequest>,
    /// The clients to report on, in presentation order.
    #[serde(default)]
    pub clients: Vec<ClientRequest>,
    /// The month's work blocks.
    #[serde(default)]
    pub blocks: Vec<WorkBlockRequest>,
    /// The assignments on those blocks.
    #[serde(default)]
    pub assignments: Vec<AssignmentRequest>,
    /// The month's bonus/penalty rows.
    #[serde(default)]
    pub adjustments: Vec<BonusPenaltyRequest>,
}

/// Work block information in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkBlockRequest {
    /// Unique identifier for the work block.
    pub id: String,
    /// Display name of the block.
    #[serde(default)]
    pub name: String,
    /// Where the work takes place.
    #[serde(default)]
    pub location: String,
    /// The client the work is performed for, if any.
    #[serde(default)]
    pub client_id: Option<String>,
    /// Day of the month, 1 through 31.
    pub day_of_month: u32,
    /// Month of the year, 1 through 12.
    pub month: u32,
    /// Calendar year.
    pub year: i32,
    /// The start time of the block.
    pub start_time: NaiveTime,
    /// The end time of the block.
    pub end_time: NaiveTime,
    /// Default duration in decimal hours.
    pub duration_hours: Decimal,
    /// The hourly rate billed to the client.
    #[serde(default)]
    pub hourly_value: Decimal,
    /// Whether the block is archived.
    #[serde(default)]
    pub archived: bool,
    /// Whether the block is a weekly-recurring template.
    #[serde(default)]
    pub constant: bool,
}

impl From<WorkBlockRequest> for WorkBlock {
    fn from(request: WorkBlockRequest) -> Self {
        WorkBlock {
            id: request.id,
            name: request.name,
            location: request.location,
            client_id: request.client_id,
            day_of_month: request.day_of_month,
            month: request.month,
            year: request.year,
            start_time: request.start_time,
            end_time: request.end_time,
            duration_hours: request.duration_hours,
            hourly_value: request.hourly_value,
            archived: request.archived,
            constant: request.constant,
        }
    }
}

/// Assignment information in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentRequest {
    /// Unique identifier for the assignment.
    pub id: String,
    /// The assigned employee.
    pub employee_id: String,
    /// The work block the employee is assigned to.
    pub work_block_id: String,
    /// Duration in decimal hours for this employee.
    pub duration_hours: Decimal,
    /// Whether the employee has completed the block.
    #[serde(default)]
    pub is_completed: bool,
    /// When the assignment was completed.
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    /// Whether the employee is paid for this block.
    #[serde(default = "default_receives_payment")]
    pub receives_payment: bool,
    /// Per-assignment hourly rate override.
    #[serde(default)]
    pub hourly_rate_override: Option<Decimal>,
    /// When the employee was assigned to the block.
    pub assigned_at: DateTime<Utc>,
}

fn default_receives_payment() -> bool {
    true
}

impl From<AssignmentRequest> for Assignment {
    fn from(request: AssignmentRequest) -> Self {
        Assignment {
            id: request.id,
            employee_id: request.employee_id,
            work_block_id: request.work_block_id,
            duration_hours: request.duration_hours,
            is_completed: request.is_completed,
            completed_at: request.completed_at,
            receives_payment: request.receives_payment,
            hourly_rate_override: request.hourly_rate_override,
            assigned_at: request.assigned_at,
        }
    }
}

/// Employee information in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's display name.
    pub name: String,
    /// Optional linked login account identifier.
    #[serde(default)]
    pub account: Option<String>,
    /// Flat hourly rate for contracted employees.
    #[serde(default)]
    pub contract_hourly_rate: Option<Decimal>,
}

impl From<EmployeeRequest> for Employee {
    fn from(request: EmployeeRequest) -> Self {
        Employee {
            id: request.id,
            name: request.name,
            account: request.account,
            contract_hourly_rate: request.contract_hourly_rate,
        }
    }
}

/// Client information in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientRequest {
    /// Unique identifier for the client.
    pub id: String,
    /// Display name of the client.
    pub name: String,
}

impl From<ClientRequest> for Client {
    fn from(request: ClientRequest) -> Self {
        Client {
            id: request.id,
            name: request.name,
        }
    }
}

/// Bonus/penalty information in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BonusPenaltyRequest {
    /// Unique identifier for the adjustment.
    pub id: String,
    /// The employee the adjustment applies to.
    pub employee_id: String,
    /// Whether this is a bonus or a penalty.
    pub kind: AdjustmentKind,
    /// The adjustment amount, always positive.
    pub amount: Decimal,
    /// Free-text justification.
    #[serde(default)]
    pub justification: String,
    /// Target month, 1 through 12.
    pub month: u32,
    /// Target year.
    pub year: i32,
    /// When the adjustment was recorded.
    pub created_at: DateTime<Utc>,
    /// Identity of whoever recorded the adjustment.
    #[serde(default)]
    pub created_by: String,
}

impl From<BonusPenaltyRequest> for BonusPenalty {
    fn from(request: BonusPenaltyRequest) -> Self {
        BonusPenalty {
            id: request.id,
            employee_id: request.employee_id,
            kind: request.kind,
            amount: request.amount,
            justification: request.justification,
            month: request.month,
            year: request.year,
            created_at: request.created_at,
            created_by: request.created_by,
        }
    }
}
