//! Monthly report result models.
//!
//! These types capture the output of the statistics aggregation: per-employee
//! pay figures and per-client billing figures for one month. All totals are
//! fixed-point decimals and are never rounded inside the engine; rounding to
//! display precision is a presentation concern.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Totals for one day of the month, used for drill-down and charting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayStat {
    /// Day of the month.
    pub day: u32,
    /// Hours from completed assignments on this day.
    pub hours: Decimal,
    /// Money value accrued on this day (pay for employees, cost for clients).
    pub value: Decimal,
    /// Number of completed assignments on this day.
    pub assignments: usize,
}

/// Workload in the ISO week containing the report's reference date.
///
/// Only produced when the report month contains that date; counts every
/// assignment in the week regardless of completion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeekStats {
    /// The ISO week number.
    pub week: u32,
    /// Hours assigned within the week.
    pub hours_assigned: Decimal,
    /// Number of blocks the employee is assigned to within the week.
    pub blocks_assigned: usize,
}

/// One employee's monthly summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeMonthlyStats {
    /// The employee's identifier.
    pub employee_id: String,
    /// The employee's display name.
    pub name: String,
    /// Hours over completed assignments.
    pub hours_worked: Decimal,
    /// Pay earned over completed assignments, before adjustments.
    pub value_earned: Decimal,
    /// Hours over all assignments, completed or not. Represents the
    /// employee's total assigned workload for the month.
    pub expected_hours: Decimal,
    /// Net bonus/penalty adjustment for the month.
    pub adjustment: Decimal,
    /// `value_earned` plus the adjustment.
    pub final_value_earned: Decimal,
    /// Number of completed assignments.
    pub completed_assignments: usize,
    /// Number of assignments regardless of completion.
    pub total_assignments: usize,
    /// Present only when the report month contains the reference date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_week: Option<CurrentWeekStats>,
    /// Completed-assignment totals per day, ascending by day.
    pub daily: Vec<DayStat>,
}

/// One client's monthly summary.
///
/// A synthetic bucket with `client_id: None` collects blocks that have no
/// client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientMonthlyStats {
    /// The client's identifier, or `None` for the unassigned bucket.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    /// The client's display name.
    pub name: String,
    /// Hours over completed assignments on the client's blocks.
    pub hours_worked: Decimal,
    /// Amount billed to the client over completed assignments.
    pub total_value: Decimal,
    /// Distinct employees with at least one completed assignment for the
    /// client in the month.
    pub unique_workers: usize,
    /// Completed-assignment totals per day, ascending by day.
    pub daily: Vec<DayStat>,
}

/// The complete monthly report: employee pay and client billing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyReport {
    /// The report year.
    pub year: i32,
    /// The report month, 1 through 12.
    pub month: u32,
    /// Per-employee summaries, in caller-defined order.
    pub employees: Vec<EmployeeMonthlyStats>,
    /// Per-client summaries, in caller-defined order, with the unassigned
    /// bucket last when present.
    pub clients: Vec<ClientMonthlyStats>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_week_omitted_when_none() {
        let stats = EmployeeMonthlyStats {
            employee_id: "emp_001".to_string(),
            name: "Ana".to_string(),
            hours_worked: Decimal::ZERO,
            value_earned: Decimal::ZERO,
            expected_hours: Decimal::ZERO,
            adjustment: Decimal::ZERO,
            final_value_earned: Decimal::ZERO,
            completed_assignments: 0,
            total_assignments: 0,
            current_week: None,
            daily: vec![],
        };

        let json = serde_json::to_string(&stats).unwrap();
        assert!(!json.contains("current_week"));
    }

    #[test]
    fn test_unassigned_bucket_omits_client_id() {
        let stats = ClientMonthlyStats {
            client_id: None,
            name: "Unassigned".to_string(),
            hours_worked: Decimal::ZERO,
            total_value: Decimal::ZERO,
            unique_workers: 0,
            daily: vec![],
        };

        let json = serde_json::to_string(&stats).unwrap();
        assert!(!json.contains("client_id"));
        assert!(json.contains("\"name\":\"Unassigned\""));
    }

    #[test]
    fn test_report_round_trip() {
        let report = MonthlyReport {
            year: 2026,
            month: 1,
            employees: vec![],
            clients: vec![ClientMonthlyStats {
                client_id: Some("client_001".to_string()),
                name: "Acme".to_string(),
                hours_worked: Decimal::new(35, 1),
                total_value: Decimal::new(7000, 2),
                unique_workers: 1,
                daily: vec![DayStat {
                    day: 15,
                    hours: Decimal::new(35, 1),
                    value: Decimal::new(7000, 2),
                    assignments: 1,
                }],
            }],
        };

        let json = serde_json::to_string(&report).unwrap();
        let deserialized: MonthlyReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report, deserialized);
    }
}
