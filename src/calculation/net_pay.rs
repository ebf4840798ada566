//! Net pay and excess-leave deduction calculation.
//!
//! Derives a payslip's net pay from the active CTC record: the monthly
//! salary less a deduction of one daily salary per excess leave day.

use rust_decimal::Decimal;

use crate::calculation::{daily_salary, monthly_salary};
use crate::models::{AuditStep, CtcRecord, PayslipPeriod};

/// The result of a net pay calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct NetPayResult {
    /// The monthly salary (annual total CTC / 12).
    pub monthly_salary: Decimal,
    /// The daily salary on the monthly basis.
    pub daily_salary: Decimal,
    /// The amount deducted for excess leave. Never negative.
    pub deductions: Decimal,
    /// The net amount payable. Not floored at zero: deductions larger than
    /// the monthly salary produce a negative net pay.
    pub net_pay: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes a payslip's net pay after excess-leave deductions.
///
/// `excess_leave_days` is the positive part of the overdrawn leave balance
/// (`max(0, used - entitlement)`); negative inputs are clamped to zero so
/// the deduction can never be negative.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_net_pay;
/// use payroll_engine::models::{CtcRecord, Month, PayslipPeriod};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let record = CtcRecord {
///     employee_id: None,
///     effective_from: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
///     basic_salary: Decimal::from(120000),
///     hra: Decimal::ZERO,
///     allowances: Decimal::ZERO,
///     bonuses: Decimal::ZERO,
///     pf_contribution: Decimal::ZERO,
///     gratuity: Decimal::ZERO,
///     da: Decimal::ZERO,
///     special_allowance: Decimal::ZERO,
///     total_ctc: Decimal::from(120000),
/// };
/// let period = PayslipPeriod { month: Month::April, year: 2025 };
///
/// let result = calculate_net_pay(&record, 0, period, 1);
/// assert_eq!(result.net_pay, Decimal::from(10000));
/// assert_eq!(result.deductions, Decimal::ZERO);
/// ```
pub fn calculate_net_pay(
    record: &CtcRecord,
    excess_leave_days: i64,
    period: PayslipPeriod,
    step_number: u32,
) -> NetPayResult {
    let excess_days = excess_leave_days.max(0);
    let monthly = monthly_salary(record);
    let daily = daily_salary(record, period);
    let deductions = daily * Decimal::from(excess_days);
    let net_pay = monthly - deductions;

    let reasoning = if excess_days > 0 {
        format!(
            "Deducted {} excess leave days at {} per day from a monthly salary of {}",
            excess_days,
            daily.normalize(),
            monthly.normalize()
        )
    } else {
        format!(
            "No excess leave; net pay equals the monthly salary of {}",
            monthly.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "net_pay".to_string(),
        rule_name: "Net Pay".to_string(),
        input: serde_json::json!({
            "total_ctc": record.total_ctc.normalize().to_string(),
            "excess_leave_days": excess_days,
            "period": period.to_string(),
            "days_in_month": period.days_in_month()
        }),
        output: serde_json::json!({
            "monthly_salary": monthly.normalize().to_string(),
            "daily_salary": daily.normalize().to_string(),
            "deductions": deductions.normalize().to_string(),
            "net_pay": net_pay.normalize().to_string()
        }),
        reasoning,
    };

    NetPayResult {
        monthly_salary: monthly,
        daily_salary: daily,
        deductions,
        net_pay,
        audit_step,
    }
}
