//! Leave and Compensation Calculation Engine
//!
//! This crate provides the calculation rules behind an HR/payroll back office:
//! leave-overlap validation, leave-balance accounting, CTC (cost-to-company)
//! aggregation, pro-rated salary breakdowns and payslip net-pay derivation.
//!
//! All calculators are pure and synchronous: records are passed in as
//! snapshots (the backing store lives elsewhere) and the same inputs always
//! produce the same outputs.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
