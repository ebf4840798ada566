//! Leave balance calculation functionality.
//!
//! This module computes how much of an employee's annual entitlement has
//! been consumed by approved leave and how many requests are still pending.

use serde::{Deserialize, Serialize};

use crate::models::{AuditStep, LeaveRequest, LeaveStatus};

/// The consumed/remaining view of an employee's leave entitlement.
///
/// The `remaining` figure is floored at zero for display; the signed
/// remainder is kept alongside it because the deduction rules need the
/// negative part. Collapsing the two silently loses the sign information,
/// which is exactly the bug class this type exists to prevent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveBalance {
    /// Days consumed by approved requests.
    pub used: i64,
    /// Days left for display, floored at zero.
    pub remaining: i64,
    /// `entitlement - used`, possibly negative.
    pub signed_remaining: i64,
    /// Number of requests still awaiting a decision.
    pub pending: usize,
}

impl LeaveBalance {
    /// Returns the approved days taken beyond the entitlement, i.e. the
    /// positive part of `-(signed_remaining)`. These days are subject to
    /// salary deduction.
    pub fn excess_days(&self) -> i64 {
        (-self.signed_remaining).max(0)
    }
}

/// The result of a leave balance calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct LeaveBalanceResult {
    /// The computed balance.
    pub balance: LeaveBalance,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes an employee's leave balance from their entitlement and the
/// snapshot of their requests.
///
/// Only approved requests consume balance; pending requests are counted but
/// have no effect on the remaining figure. Each request's day count comes
/// from [`LeaveRequest::days_requested`], so a backend-stored `days` value
/// wins over recomputation from the dates.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_leave_balance;
///
/// let result = calculate_leave_balance(12, &[], 1);
/// assert_eq!(result.balance.used, 0);
/// assert_eq!(result.balance.remaining, 12);
/// assert_eq!(result.balance.pending, 0);
/// ```
pub fn calculate_leave_balance(
    entitlement_days: i64,
    requests: &[LeaveRequest],
    step_number: u32,
) -> LeaveBalanceResult {
    let used: i64 = requests
        .iter()
        .filter(|r| r.status == LeaveStatus::Approved)
        .map(LeaveRequest::days_requested)
        .sum();
    let pending = requests
        .iter()
        .filter(|r| r.status == LeaveStatus::Pending)
        .count();

    let signed_remaining = entitlement_days - used;
    let remaining = signed_remaining.max(0);

    let balance = LeaveBalance {
        used,
        remaining,
        signed_remaining,
        pending,
    };

    let reasoning = if signed_remaining < 0 {
        format!(
            "{} approved days against an entitlement of {} leaves {} excess days",
            used,
            entitlement_days,
            balance.excess_days()
        )
    } else {
        format!(
            "{} approved days against an entitlement of {} leaves {} remaining",
            used, entitlement_days, remaining
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "leave_balance".to_string(),
        rule_name: "Leave Balance".to_string(),
        input: serde_json::json!({
            "entitlement_days": entitlement_days,
            "request_count": requests.len()
        }),
        output: serde_json::json!({
            "used": used,
            "remaining": remaining,
            "signed_remaining": signed_remaining,
            "pending": pending
        }),
        reasoning,
    };

    LeaveBalanceResult {
        balance,
        audit_step,
    }
}
