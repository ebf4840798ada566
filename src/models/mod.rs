//! Core data models for the Leave and Compensation Calculation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod compensation;
mod computation_result;
mod employee;
mod leave;
mod payslip;

pub use compensation::CtcRecord;
pub use computation_result::{
    AuditStep, AuditTrace, AuditWarning, ComponentLine, PayComponent, PayslipComputation,
};
pub use employee::{Employee, Role};
pub use leave::{LeaveRequest, LeaveStatus, LeaveWindow};
pub use payslip::{Month, Payslip, PayslipPeriod};
