//! Leave overlap validation functionality.
//!
//! This module provides functions for detecting whether a candidate leave
//! application collides with an employee's existing requests.

use crate::models::{AuditStep, LeaveRequest, LeaveWindow};

/// Returns true if the candidate range conflicts with any existing request.
///
/// Two requests conflict iff their inclusive date ranges share at least one
/// calendar day and the existing request is still pending or approved.
/// Rejected requests never conflict.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::has_conflict;
/// use payroll_engine::models::{LeaveRequest, LeaveStatus, LeaveWindow};
/// use chrono::NaiveDate;
///
/// let candidate = LeaveWindow {
///     start_date: NaiveDate::from_ymd_opt(2024, 5, 3).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 5, 4).unwrap(),
/// };
/// let existing = vec![LeaveRequest {
///     id: Some("leave_001".to_string()),
///     employee_id: None,
///     start_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 5, 3).unwrap(),
///     reason: String::new(),
///     status: LeaveStatus::Approved,
///     days: None,
/// }];
///
/// assert!(has_conflict(&candidate, &existing));
/// ```
pub fn has_conflict(candidate: &LeaveWindow, existing: &[LeaveRequest]) -> bool {
    existing
        .iter()
        .any(|r| r.status.blocks_dates() && candidate.intersects(&r.window()))
}

/// The result of an overlap check, including the audit step.
#[derive(Debug, Clone)]
pub struct OverlapCheckResult {
    /// Whether the candidate conflicts with an existing request.
    pub conflict: bool,
    /// IDs of the conflicting requests, where known.
    pub conflicting_ids: Vec<String>,
    /// The audit step recording this check.
    pub audit_step: AuditStep,
}

/// Checks a candidate leave range against existing requests, recording the
/// decision in an audit step.
///
/// The conflict rule is the one implemented by [`has_conflict`]; this
/// variant additionally reports which requests collided so the caller can
/// surface them to the applicant.
pub fn check_overlap(
    candidate: &LeaveWindow,
    existing: &[LeaveRequest],
    step_number: u32,
) -> OverlapCheckResult {
    let conflicting_ids: Vec<String> = existing
        .iter()
        .filter(|r| r.status.blocks_dates() && candidate.intersects(&r.window()))
        .filter_map(|r| r.id.clone())
        .collect();
    let conflict = has_conflict(candidate, existing);

    let reasoning = if conflict {
        format!(
            "Candidate {} to {} shares at least one day with a pending or approved request",
            candidate.start_date, candidate.end_date
        )
    } else {
        format!(
            "Candidate {} to {} does not intersect any pending or approved request",
            candidate.start_date, candidate.end_date
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "leave_overlap_check".to_string(),
        rule_name: "Leave Overlap Check".to_string(),
        input: serde_json::json!({
            "candidate_start": candidate.start_date.to_string(),
            "candidate_end": candidate.end_date.to_string(),
            "existing_count": existing.len()
        }),
        output: serde_json::json!({
            "conflict": conflict,
            "conflicting_ids": conflicting_ids
        }),
        reasoning,
    };

    OverlapCheckResult {
        conflict,
        conflicting_ids,
        audit_step,
    }
}
