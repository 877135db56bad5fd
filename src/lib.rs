//! Shift Roster & Payroll Engine
//!
//! This crate provides the scheduling and payroll core for recurring work
//! blocks: expanding weekly-recurring shift templates into their monthly
//! occurrences, laying out overlapping shifts on a calendar grid, and
//! aggregating completed assignments into monthly pay and billing figures.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
