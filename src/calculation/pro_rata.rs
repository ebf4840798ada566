//! Pro-rated pay calculation functionality.
//!
//! Two distinct bases live here and must not be conflated:
//!
//! - the **annual basis** used for the payslip's component breakdown:
//!   `annual / 365 * days_in_month`, where the 365-day divisor is fixed even
//!   in leap years while the month length varies;
//! - the **monthly basis** used for leave deductions: `total_ctc / 12`
//!   divided by the days in the payslip month.

use rust_decimal::Decimal;

use crate::models::{AuditStep, ComponentLine, CtcRecord, Month, PayComponent, PayslipPeriod};

/// The fixed day count a year is assumed to have when pro-rating annual
/// amounts. Stays at 365 in leap years.
pub const ANNUAL_BASIS_DAYS: Decimal = Decimal::from_parts(365, 0, 0, false, 0);

/// The number of months a monthly salary divides the annual CTC into.
pub const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Pro-rates an annual component amount onto a single month.
///
/// Formula: `annual / 365 * days_in_month(month, year)`. The month length
/// comes from the actual Gregorian calendar, so a leap-year February counts
/// 29 days.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::monthly_component_amount;
/// use payroll_engine::models::Month;
/// use rust_decimal::Decimal;
///
/// let amount = monthly_component_amount(Decimal::from(36500), Month::February, 2024);
/// assert_eq!(amount, Decimal::from(2900)); // 36500 / 365 * 29
/// ```
pub fn monthly_component_amount(annual: Decimal, month: Month, year: i32) -> Decimal {
    annual / ANNUAL_BASIS_DAYS * Decimal::from(month.days_in(year))
}

/// Returns the monthly salary: the annual total CTC divided by 12.
pub fn monthly_salary(record: &CtcRecord) -> Decimal {
    record.total_ctc / MONTHS_PER_YEAR
}

/// Returns the daily salary used for leave deductions: the monthly salary
/// divided by the number of days in the payslip month.
///
/// Note the different basis from [`monthly_component_amount`]: deductions
/// divide a twelfth of the annual total by the month length, not the annual
/// amount by 365.
///
/// A period whose month length cannot be resolved (see
/// [`PayslipPeriod::validate`]) yields zero rather than panicking; callers
/// that need a hard failure validate the period first.
pub fn daily_salary(record: &CtcRecord, period: PayslipPeriod) -> Decimal {
    monthly_salary(record)
        .checked_div(Decimal::from(period.days_in_month()))
        .unwrap_or(Decimal::ZERO)
}

/// The result of building a payslip's component breakdown.
#[derive(Debug, Clone)]
pub struct BreakdownResult {
    /// One line per displayed compensation component.
    pub lines: Vec<ComponentLine>,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Builds the component-level monthly breakdown for a payslip.
///
/// Each displayed component (basic, HRA, allowances, bonuses, PF
/// contribution, gratuity) is pro-rated independently onto the payslip
/// month via [`monthly_component_amount`].
pub fn monthly_breakdown(
    record: &CtcRecord,
    period: PayslipPeriod,
    step_number: u32,
) -> BreakdownResult {
    let components = [
        (PayComponent::Basic, record.basic_salary),
        (PayComponent::Hra, record.hra),
        (PayComponent::Allowances, record.allowances),
        (PayComponent::Bonuses, record.bonuses),
        (PayComponent::PfContribution, record.pf_contribution),
        (PayComponent::Gratuity, record.gratuity),
    ];

    let lines: Vec<ComponentLine> = components
        .iter()
        .map(|&(component, annual_amount)| ComponentLine {
            component,
            annual_amount,
            monthly_amount: monthly_component_amount(annual_amount, period.month, period.year),
        })
        .collect();

    let monthly_total: Decimal = lines.iter().map(|l| l.monthly_amount).sum();

    let audit_step = AuditStep {
        step_number,
        rule_id: "monthly_breakdown".to_string(),
        rule_name: "Monthly Component Breakdown".to_string(),
        input: serde_json::json!({
            "period": period.to_string(),
            "days_in_month": period.days_in_month(),
            "annual_basis_days": ANNUAL_BASIS_DAYS.to_string()
        }),
        output: serde_json::json!({
            "component_count": lines.len(),
            "monthly_total": monthly_total.normalize().to_string()
        }),
        reasoning: format!(
            "Pro-rated {} components onto {} ({} days) on the {}-day annual basis",
            lines.len(),
            period,
            period.days_in_month(),
            ANNUAL_BASIS_DAYS
        ),
    };

    BreakdownResult { lines, audit_step }
}
