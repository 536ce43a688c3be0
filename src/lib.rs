//! Shift roster and meal-voucher reconciliation engine.
//!
//! This crate computes which of the two alternating "12x36" crews is on duty
//! on any date, and reconciles the monthly meal-voucher payroll: credit for
//! next month's projected shifts, deduction for absences recorded last month.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod session;
pub mod store;
