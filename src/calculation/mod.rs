//! Calculation logic for the Shift Roster & Payroll Engine.
//!
//! This module contains the engine's four core components: hourly-rate
//! resolution and payment/cost computation, expansion of weekly-recurring
//! block templates, overlap-aware calendar layout, and monthly statistics
//! aggregation, plus the decimal-hours duration formatting shared by
//! presentation collaborators.

mod duration;
mod layout;
mod rates;
mod recurrence;
mod statistics;

pub use duration::{format_duration, parse_duration};
pub use layout::{PositionedBlock, ScheduleDay, ScheduleWeek, layout_day, layout_week};
pub use rates::{client_cost, effective_hourly_rate, employee_payment};
pub use recurrence::{ExpandedOccurrence, OccurrenceKey, OccurrenceLookup, expand};
pub use statistics::{ReportInput, monthly_report};
