//! Bonus and penalty adjustments.
//!
//! Manual adjustments applied to an employee's monthly earnings. They
//! belong to the employee and a target (month, year), independent of any
//! work block.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The direction of a manual adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentKind {
    /// Adds to the employee's earnings.
    Bonus,
    /// Subtracts from the employee's earnings.
    Penalty,
}

/// A manual bonus or penalty against an employee's month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BonusPenalty {
    /// Unique identifier for the adjustment.
    pub id: String,
    /// The employee the adjustment applies to.
    pub employee_id: String,
    /// Whether this is a bonus or a penalty.
    pub kind: AdjustmentKind,
    /// The adjustment amount. Always positive; the sign comes from
    /// [`BonusPenalty::kind`].
    pub amount: Decimal,
    /// Free-text justification for the adjustment.
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

impl BonusPenalty {
    /// The amount with its sign applied: positive for a bonus, negative
    /// for a penalty.
    ///
    /// # Examples
    ///
    /// ```
    /// use roster_engine::models::{AdjustmentKind, BonusPenalty};
    /// use chrono::{TimeZone, Utc};
    /// use rust_decimal::Decimal;
    ///
    /// let penalty = BonusPenalty {
    ///     id: "adj_001".to_string(),
    ///     employee_id: "emp_001".to_string(),
    ///     kind: AdjustmentKind::Penalty,
    ///     amount: Decimal::new(1500, 2),
    ///     justification: "Late arrival".to_string(),
    ///     month: 1,
    ///     year: 2026,
    ///     created_at: Utc.with_ymd_and_hms(2026, 1, 31, 10, 0, 0).unwrap(),
    ///     created_by: "admin".to_string(),
    /// };
    /// assert_eq!(penalty.signed_amount(), Decimal::new(-1500, 2));
    /// ```
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            AdjustmentKind::Bonus => self.amount,
            AdjustmentKind::Penalty => -self.amount,
        }
    }
}
