//! Computation result models for the Leave and Compensation Engine.
//!
//! This module contains the [`PayslipComputation`] type and its associated
//! structures that capture all outputs from a payslip calculation, including
//! the component breakdown, deductions, net pay and the audit trace.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::PayslipPeriod;

/// The compensation components shown on a payslip's monthly breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PayComponent {
    /// Basic salary.
    Basic,
    /// House rent allowance.
    Hra,
    /// General allowances.
    Allowances,
    /// Bonuses.
    Bonuses,
    /// Provident fund contribution.
    PfContribution,
    /// Gratuity.
    Gratuity,
}

/// One row of a payslip's component-level monthly breakdown.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{ComponentLine, PayComponent};
/// use rust_decimal::Decimal;
///
/// let line = ComponentLine {
///     component: PayComponent::Basic,
///     annual_amount: Decimal::from(36500),
///     monthly_amount: Decimal::from(2900),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentLine {
    /// The compensation component this line covers.
    pub component: PayComponent,
    /// The annual amount from the CTC record.
    pub annual_amount: Decimal,
    /// The pro-rated amount for the payslip month.
    pub monthly_amount: Decimal,
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings indicate potential issues that don't prevent calculation
/// but may require attention, such as a negative net pay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
///
/// Records every decision made during the calculation process for
/// transparency toward the employee and HR.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of a payslip calculation.
///
/// Captures the pro-rated component breakdown, the leave-deduction inputs
/// and the derived net pay, together with an audit trace of every rule that
/// fired along the way.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{AuditTrace, Month, PayslipComputation, PayslipPeriod};
/// use chrono::Utc;
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let result = PayslipComputation {
///     computation_id: Uuid::new_v4(),
///     timestamp: Utc::now(),
///     engine_version: "1.0.0".to_string(),
///     employee_id: "emp_001".to_string(),
///     period: PayslipPeriod { month: Month::January, year: 2025 },
///     breakdown: vec![],
///     monthly_salary: Decimal::from(10000),
///     daily_salary: Decimal::ZERO,
///     excess_leave_days: 0,
///     deductions: Decimal::ZERO,
///     net_pay: Decimal::from(10000),
///     audit_trace: AuditTrace {
///         steps: vec![],
///         warnings: vec![],
///         duration_us: 0,
///     },
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayslipComputation {
    /// Unique identifier for this computation.
    pub computation_id: Uuid,
    /// When the computation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the computation.
    pub engine_version: String,
    /// The ID of the employee the payslip is for.
    pub employee_id: String,
    /// The payslip period this computation covers.
    pub period: PayslipPeriod,
    /// Component-level monthly breakdown for payslip display.
    pub breakdown: Vec<ComponentLine>,
    /// The monthly salary (annual total CTC / 12).
    pub monthly_salary: Decimal,
    /// The daily salary on the monthly basis (monthly salary / days in month).
    pub daily_salary: Decimal,
    /// Approved leave days beyond the entitlement.
    pub excess_leave_days: i64,
    /// Salary deducted for excess leave.
    pub deductions: Decimal,
    /// The net amount payable (may be negative; not floored).
    pub net_pay: Decimal,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}
