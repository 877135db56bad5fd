//! Hourly-rate resolution and payment/cost computation.
//!
//! Employee pay and client billing are deliberately decoupled: pay resolves
//! through the assignment override and the employee's contract rate, while
//! billing always uses the block's hourly value. Neither side ever falls
//! back to the other's rate.

use rust_decimal::Decimal;

use crate::models::{Assignment, Employee, WorkBlock};

/// Resolves the hourly rate used to pay an employee for one assignment.
///
/// Resolution order, first match wins:
/// 1. the assignment's own rate override;
/// 2. the employee's contract rate;
/// 3. zero — an assignment may legitimately have no configured pay, so the
///    absence of a rate is not an error. The block's billing rate is never
///    used for pay.
///
/// # Examples
///
/// ```
/// use roster_engine::calculation::effective_hourly_rate;
/// use roster_engine::models::{Assignment, Employee};
/// use chrono::{TimeZone, Utc};
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     id: "emp_001".to_string(),
///     name: "Ana".to_string(),
///     account: None,
///     contract_hourly_rate: Some(Decimal::new(1500, 2)),
/// };
/// let assignment = Assignment {
///     id: "assign_001".to_string(),
///     employee_id: "emp_001".to_string(),
///     work_block_id: "block_001".to_string(),
///     duration_hours: Decimal::new(80, 1),
///     is_completed: false,
///     completed_at: None,
///     receives_payment: true,
///     hourly_rate_override: Some(Decimal::new(1250, 2)),
///     assigned_at: Utc.with_ymd_and_hms(2026, 1, 2, 8, 0, 0).unwrap(),
/// };
///
/// // The override wins over the contract rate.
/// assert_eq!(
///     effective_hourly_rate(&assignment, &employee),
///     Decimal::new(1250, 2)
/// );
/// ```
pub fn effective_hourly_rate(assignment: &Assignment, employee: &Employee) -> Decimal {
    if let Some(override_rate) = assignment.hourly_rate_override {
        return override_rate;
    }
    if let Some(contract_rate) = employee.contract_hourly_rate {
        return contract_rate;
    }
    Decimal::ZERO
}

/// The amount the employee is paid for one assignment.
///
/// Zero when the assignment opts out of payment; otherwise the assignment's
/// duration times the effective hourly rate.
pub fn employee_payment(assignment: &Assignment, employee: &Employee) -> Decimal {
    if !assignment.receives_payment {
        return Decimal::ZERO;
    }
    assignment.duration_hours * effective_hourly_rate(assignment, employee)
}

/// The amount billed to the client for one assignment.
///
/// Always the assignment's duration times the block's hourly value,
/// regardless of the employee's pay rate or payment opt-out.
pub fn client_cost(assignment: &Assignment, block: &WorkBlock) -> Decimal {
    assignment.duration_hours * block.hourly_value
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_employee(contract_rate: Option<Decimal>) -> Employee {
        Employee {
            id: "emp_001".to_string(),
            name: "Ana".to_string(),
            account: None,
            contract_hourly_rate: contract_rate,
        }
    }

    fn create_assignment(
        duration: Decimal,
        receives_payment: bool,
        override_rate: Option<Decimal>,
    ) -> Assignment {
        Assignment {
            id: "assign_001".to_string(),
            employee_id: "emp_001".to_string(),
            work_block_id: "block_001".to_string(),
            duration_hours: duration,
            is_completed: true,
            completed_at: Some(Utc.with_ymd_and_hms(2026, 1, 15, 18, 0, 0).unwrap()),
            receives_payment,
            hourly_rate_override: override_rate,
            assigned_at: Utc.with_ymd_and_hms(2026, 1, 2, 8, 0, 0).unwrap(),
        }
    }

    fn create_block(hourly_value: Decimal) -> WorkBlock {
        WorkBlock {
            id: "block_001".to_string(),
            name: "Night watch".to_string(),
            location: "Warehouse 4".to_string(),
            client_id: Some("client_001".to_string()),
            day_of_month: 15,
            month: 1,
            year: 2026,
            start_time: chrono::NaiveTime::parse_from_str("09:00", "%H:%M").unwrap(),
            end_time: chrono::NaiveTime::parse_from_str("17:00", "%H:%M").unwrap(),
            duration_hours: dec("8.0"),
            hourly_value,
            archived: false,
            constant: false,
        }
    }

    /// RR-001: override beats contract rate
    #[test]
    fn test_override_beats_contract_rate() {
        let employee = create_employee(Some(dec("15.00")));
        let assignment = create_assignment(dec("8.0"), true, Some(dec("12.50")));

        assert_eq!(effective_hourly_rate(&assignment, &employee), dec("12.50"));
    }

    /// RR-002: contract rate applies without override
    #[test]
    fn test_contract_rate_without_override() {
        let employee = create_employee(Some(dec("15.00")));
        let assignment = create_assignment(dec("8.0"), true, None);

        assert_eq!(effective_hourly_rate(&assignment, &employee), dec("15.00"));
    }

    /// RR-003: no override, no contract resolves to zero
    #[test]
    fn test_no_rate_resolves_to_zero() {
        let employee = create_employee(None);
        let assignment = create_assignment(dec("8.0"), true, None);

        assert_eq!(effective_hourly_rate(&assignment, &employee), Decimal::ZERO);
    }

    #[test]
    fn test_employee_payment_multiplies_duration_and_rate() {
        let employee = create_employee(None);
        let assignment = create_assignment(dec("3.5"), true, Some(dec("10.00")));

        assert_eq!(employee_payment(&assignment, &employee), dec("35.00"));
    }

    #[test]
    fn test_employee_payment_zero_when_opted_out() {
        let employee = create_employee(Some(dec("15.00")));
        let assignment = create_assignment(dec("8.0"), false, Some(dec("12.50")));

        assert_eq!(employee_payment(&assignment, &employee), Decimal::ZERO);
    }

    #[test]
    fn test_client_cost_uses_block_hourly_value() {
        let block = create_block(dec("20.00"));
        let assignment = create_assignment(dec("3.5"), true, Some(dec("10.00")));

        // Billing ignores the pay override entirely.
        assert_eq!(client_cost(&assignment, &block), dec("70.00"));
    }

    #[test]
    fn test_client_cost_unaffected_by_payment_opt_out() {
        let block = create_block(dec("20.00"));
        let paid = create_assignment(dec("3.5"), true, None);
        let unpaid = create_assignment(dec("3.5"), false, None);

        assert_eq!(client_cost(&paid, &block), client_cost(&unpaid, &block));
    }

    #[test]
    fn test_payment_precision_has_no_drift() {
        let employee = create_employee(None);
        let assignment = create_assignment(dec("1.75"), true, Some(dec("13.33")));

        // 1.75 * 13.33 = 23.3275 exactly in fixed point.
        assert_eq!(employee_payment(&assignment, &employee), dec("23.3275"));
    }
}
