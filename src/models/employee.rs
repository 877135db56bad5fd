//! Employee model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents an employee who can be assigned to work blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's display name.
    pub name: String,
    /// Optional linked login account identifier.
    #[serde(default)]
    pub account: Option<String>,
    /// Flat hourly rate for contracted employees.
    ///
    /// When present, this rate applies to all of the employee's work unless
    /// an assignment carries its own override. Its presence is what marks
    /// the employee as being under contract.
    #[serde(default)]
    pub contract_hourly_rate: Option<Decimal>,
}

impl Employee {
    /// Returns true if the employee is under contract.
    ///
    /// Derived from the presence of [`Employee::contract_hourly_rate`].
    ///
    /// # Examples
    ///
    /// ```
    /// use roster_engine::models::Employee;
    /// use rust_decimal::Decimal;
    ///
    /// let contracted = Employee {
    ///     id: "emp_001".to_string(),
    ///     name: "Ana".to_string(),
    ///     account: None,
    ///     contract_hourly_rate: Some(Decimal::new(1500, 2)),
    /// };
    /// assert!(contracted.has_contract());
    /// ```
    pub fn has_contract(&self) -> bool {
        self.contract_hourly_rate.is_some()
    }
}
