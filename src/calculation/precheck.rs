//! Leave application pre-check functionality.
//!
//! This module runs the client-side validation sequence for a new leave
//! application: overlap detection first, then a balance check that may
//! attach an excess-leave warning. The outcome is advisory — authoritative
//! conflict detection happens server-side when the request is persisted.

use serde::{Deserialize, Serialize};

use crate::calculation::{calculate_leave_balance, check_overlap};
use crate::error::EngineResult;
use crate::models::{AuditStep, LeaveRequest, LeaveWindow};

/// The decision of a leave application pre-check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "decision", rename_all = "camelCase")]
pub enum PrecheckOutcome {
    /// The application may be submitted as-is.
    Allowed,
    /// The application may be submitted, but it exceeds the remaining
    /// balance; the caller must obtain explicit confirmation because the
    /// excess days will be salary-deducted if approved.
    AllowedWithWarning {
        /// How many requested days exceed the remaining balance.
        #[serde(rename = "excessDays")]
        excess_days: i64,
    },
    /// The application must not be submitted.
    Rejected {
        /// Why the application was refused.
        reason: String,
    },
}

/// The result of a leave application pre-check.
#[derive(Debug, Clone)]
pub struct PrecheckResult {
    /// The decision for this candidate.
    pub outcome: PrecheckOutcome,
    /// The number of days the candidate range requests.
    pub request_days: i64,
    /// The audit steps recorded while deciding.
    pub audit_steps: Vec<AuditStep>,
}

/// Pre-checks a candidate leave application against the employee's existing
/// requests and entitlement.
///
/// The sequence is:
/// 1. validate the candidate range (`end >= start`);
/// 2. reject on overlap with any pending or approved request;
/// 3. compute the balance from approved requests only;
/// 4. if the requested days exceed the remaining balance, allow with an
///    excess-days warning rather than blocking — the request may still go in
///    as `PENDING` and be salary-deducted later if approved.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::{PrecheckOutcome, precheck_application};
/// use payroll_engine::models::LeaveWindow;
/// use chrono::NaiveDate;
///
/// let candidate = LeaveWindow {
///     start_date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 7, 3).unwrap(),
/// };
/// let result = precheck_application(&candidate, 12, &[], 1).unwrap();
/// assert_eq!(result.outcome, PrecheckOutcome::Allowed);
/// assert_eq!(result.request_days, 3);
/// ```
pub fn precheck_application(
    candidate: &LeaveWindow,
    entitlement_days: i64,
    requests: &[LeaveRequest],
    step_number: u32,
) -> EngineResult<PrecheckResult> {
    candidate.validate()?;
    let request_days = candidate.inclusive_days();

    let overlap = check_overlap(candidate, requests, step_number);
    let mut audit_steps = vec![overlap.audit_step];
    if overlap.conflict {
        return Ok(PrecheckResult {
            outcome: PrecheckOutcome::Rejected {
                reason: "duplicate/overlapping request".to_string(),
            },
            request_days,
            audit_steps,
        });
    }

    let balance_result = calculate_leave_balance(entitlement_days, requests, step_number + 1);
    audit_steps.push(balance_result.audit_step);
    let remaining = balance_result.balance.remaining;

    let outcome = if request_days > remaining {
        PrecheckOutcome::AllowedWithWarning {
            excess_days: request_days - remaining,
        }
    } else {
        PrecheckOutcome::Allowed
    };

    Ok(PrecheckResult {
        outcome,
        request_days,
        audit_steps,
    })
}
