//! Monthly statistics aggregation.
//!
//! Turns a month of assignments and manual adjustments into per-employee
//! pay figures and per-client billing figures. The aggregation is a pure
//! pass over data the store already materialized; the reference date used
//! for the current-week slice is an explicit parameter, never read from
//! ambient state, so reports stay deterministic and testable.

use std::collections::{BTreeMap, HashMap, HashSet};

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;

use crate::calculation::rates::{client_cost, employee_payment};
use crate::models::{
    Assignment, BonusPenalty, Client, ClientMonthlyStats, CurrentWeekStats, DayStat, Employee,
    EmployeeMonthlyStats, MonthlyReport, WorkBlock,
};

/// The materialized rows a monthly report is computed from.
///
/// Employees and clients are reported in the order given here; the order
/// is the caller's choice and carries no meaning inside the engine.
#[derive(Debug, Clone, Copy)]
pub struct ReportInput<'a> {
    /// The employees to report on.
    pub employees: &'a [Employee],
    /// The clients to report on.
    pub clients: &'a [Client],
    /// The work blocks of the report month (archived ones are ignored).
    pub blocks: &'a [WorkBlock],
    /// The assignments on those blocks.
    pub assignments: &'a [Assignment],
    /// The bonus/penalty rows for the report month.
    pub adjustments: &'a [BonusPenalty],
}

/// Accumulator for one day of a daily breakdown.
#[derive(Default)]
struct DayAccumulator {
    hours: Decimal,
    value: Decimal,
    assignments: usize,
}

fn into_day_stats(days: BTreeMap<u32, DayAccumulator>) -> Vec<DayStat> {
    days.into_iter()
        .map(|(day, acc)| DayStat {
            day,
            hours: acc.hours,
            value: acc.value,
            assignments: acc.assignments,
        })
        .collect()
}

/// Computes the monthly report for (year, month).
///
/// Only non-archived blocks belonging to the month participate. Every
/// employee and client in the input appears in the output even with zero
/// qualifying assignments; missing data produces all-zero totals, never an
/// error. `today` drives the current-week sub-slice, which is only
/// populated when the report month contains it.
pub fn monthly_report(
    year: i32,
    month: u32,
    input: &ReportInput<'_>,
    today: NaiveDate,
) -> MonthlyReport {
    let blocks: HashMap<&str, &WorkBlock> = input
        .blocks
        .iter()
        .filter(|b| !b.archived && b.year == year && b.month == month)
        .map(|b| (b.id.as_str(), b))
        .collect();

    let month_contains_today = today.year() == year && today.month() == month;
    let current_week = today.week(Weekday::Mon);

    let employees = input
        .employees
        .iter()
        .map(|employee| {
            let mut hours_worked = Decimal::ZERO;
            let mut value_earned = Decimal::ZERO;
            let mut expected_hours = Decimal::ZERO;
            let mut completed_assignments = 0;
            let mut total_assignments = 0;
            let mut week_hours = Decimal::ZERO;
            let mut week_blocks = 0;
            let mut daily: BTreeMap<u32, DayAccumulator> = BTreeMap::new();

            for assignment in input
                .assignments
                .iter()
                .filter(|a| a.employee_id == employee.id)
            {
                let Some(block) = blocks.get(assignment.work_block_id.as_str()) else {
                    continue;
                };

                total_assignments += 1;
                expected_hours += assignment.duration_hours;

                if month_contains_today
                    && block
                        .date()
                        .is_some_and(|d| current_week.days().contains(&d))
                {
                    week_hours += assignment.duration_hours;
                    week_blocks += 1;
                }

                if assignment.is_completed {
                    completed_assignments += 1;
                    hours_worked += assignment.duration_hours;
                    let payment = employee_payment(assignment, employee);
                    value_earned += payment;

                    let day = daily.entry(block.day_of_month).or_default();
                    day.hours += assignment.duration_hours;
                    day.value += payment;
                    day.assignments += 1;
                }
            }

            let adjustment: Decimal = input
                .adjustments
                .iter()
                .filter(|a| a.employee_id == employee.id && a.year == year && a.month == month)
                .map(BonusPenalty::signed_amount)
                .sum();

            EmployeeMonthlyStats {
                employee_id: employee.id.clone(),
                name: employee.name.clone(),
                hours_worked,
                value_earned,
                expected_hours,
                adjustment,
                final_value_earned: value_earned + adjustment,
                completed_assignments,
                total_assignments,
                current_week: month_contains_today.then(|| CurrentWeekStats {
                    week: today.iso_week().week(),
                    hours_assigned: week_hours,
                    blocks_assigned: week_blocks,
                }),
                daily: into_day_stats(daily),
            }
        })
        .collect();

    let mut clients: Vec<ClientMonthlyStats> = input
        .clients
        .iter()
        .map(|client| client_stats(Some(client), &blocks, input))
        .collect();

    // Blocks without a client roll up into a synthetic trailing bucket.
    if blocks.values().any(|b| b.client_id.is_none()) {
        clients.push(client_stats(None, &blocks, input));
    }

    MonthlyReport {
        year,
        month,
        employees,
        clients,
    }
}

fn client_stats(
    client: Option<&Client>,
    blocks: &HashMap<&str, &WorkBlock>,
    input: &ReportInput<'_>,
) -> ClientMonthlyStats {
    let client_id = client.map(|c| c.id.as_str());

    let mut hours_worked = Decimal::ZERO;
    let mut total_value = Decimal::ZERO;
    let mut workers: HashSet<&str> = HashSet::new();
    let mut daily: BTreeMap<u32, DayAccumulator> = BTreeMap::new();

    for assignment in input.assignments.iter().filter(|a| a.is_completed) {
        let Some(block) = blocks.get(assignment.work_block_id.as_str()) else {
            continue;
        };
        if block.client_id.as_deref() != client_id {
            continue;
        }
        workers.insert(assignment.employee_id.as_str());

        let cost = client_cost(assignment, block);
        hours_worked += assignment.duration_hours;
        total_value += cost;

        let day = daily.entry(block.day_of_month).or_default();
        day.hours += assignment.duration_hours;
        day.value += cost;
        day.assignments += 1;
    }

    ClientMonthlyStats {
        client_id: client_id.map(str::to_string),
        name: client.map_or_else(|| "Unassigned".to_string(), |c| c.name.clone()),
        hours_worked,
        total_value,
        unique_workers: workers.len(),
        daily: into_day_stats(daily),
    }
}
