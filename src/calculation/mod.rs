//! Calculation logic for the Leave and Compensation Engine.
//!
//! This module contains all the calculation functions for the payroll rules:
//! leave-overlap validation, leave-balance accounting, the leave application
//! pre-check, CTC aggregation, active compensation-record selection,
//! pro-rated monthly breakdowns, net-pay derivation and the payslip period
//! gate and visibility filter.

mod active_ctc;
mod ctc_total;
mod leave_balance;
mod net_pay;
mod overlap;
mod payslip_gate;
mod precheck;
mod pro_rata;

pub use active_ctc::{ActiveCtcResult, select_active_ctc};
pub use ctc_total::{total_ctc, with_recomputed_total};
pub use leave_balance::{LeaveBalance, LeaveBalanceResult, calculate_leave_balance};
pub use net_pay::{NetPayResult, calculate_net_pay};
pub use overlap::{OverlapCheckResult, check_overlap, has_conflict};
pub use payslip_gate::{can_generate, ensure_can_generate, visible_payslips};
pub use precheck::{PrecheckOutcome, PrecheckResult, precheck_application};
pub use pro_rata::{
    ANNUAL_BASIS_DAYS, BreakdownResult, MONTHS_PER_YEAR, daily_salary, monthly_breakdown,
    monthly_component_amount, monthly_salary,
};
