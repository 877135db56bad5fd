//! Assignment model.
//!
//! An assignment joins an employee to a work block and carries the payroll
//! attributes for that pairing. At most one assignment exists per
//! (employee, work block) pair; the store enforces the uniqueness.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents one employee's stake in one work block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    /// Unique identifier for the assignment.
    pub id: String,
    /// The assigned employee.
    pub employee_id: String,
    /// The work block the employee is assigned to.
    pub work_block_id: String,
    /// Duration in decimal hours for this employee. Defaults to the
    /// block's duration at creation and may be overridden per employee.
    pub duration_hours: Decimal,
    /// Whether the employee has completed this block.
    #[serde(default)]
    pub is_completed: bool,
    /// When the assignment was completed. Set together with
    /// [`Assignment::is_completed`], never independently.
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    /// Whether the employee is paid for this block. Opting out affects
    /// employee pay only, never the amount billed to the client.
    #[serde(default = "default_receives_payment")]
    pub receives_payment: bool,
    /// Per-assignment hourly rate. Takes precedence over the employee's
    /// contract rate when resolving pay.
    #[serde(default)]
    pub hourly_rate_override: Option<Decimal>,
    /// When the employee was assigned to the block.
    pub assigned_at: DateTime<Utc>,
}

fn default_receives_payment() -> bool {
    true
}

impl Assignment {
    /// Marks the assignment completed at the given instant.
    ///
    /// The completion flag and timestamp always change together.
    pub fn complete(&mut self, now: DateTime<Utc>) {
        self.is_completed = true;
        self.completed_at = Some(now);
    }

    /// Reverts the assignment to not completed, clearing the timestamp.
    pub fn reopen(&mut self) {
        self.is_completed = false;
        self.completed_at = None;
    }
}
