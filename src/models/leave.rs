//! Leave request models.
//!
//! This module defines the [`LeaveRequest`] record, its status state machine
//! and the [`LeaveWindow`] date range used when validating new applications.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The status of a leave request.
///
/// `Pending` is the only non-terminal state; a manager moves a request to
/// `Approved` or `Rejected` exactly once and the transition is one-way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeaveStatus {
    /// Submitted and awaiting a manager's decision.
    Pending,
    /// Approved; the days count against the leave balance.
    Approved,
    /// Rejected; the request has no effect on balances or conflicts.
    Rejected,
}

impl LeaveStatus {
    /// Returns true if the request still blocks the same calendar days,
    /// i.e. it has not been rejected.
    pub fn blocks_dates(&self) -> bool {
        matches!(self, LeaveStatus::Pending | LeaveStatus::Approved)
    }
}

/// An inclusive calendar date range for a leave application.
///
/// # Example
///
/// ```
/// use payroll_engine::models::LeaveWindow;
/// use chrono::NaiveDate;
///
/// let window = LeaveWindow {
///     start_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 1, 12).unwrap(),
/// };
/// assert_eq!(window.inclusive_days(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveWindow {
    /// The first day of leave (inclusive).
    pub start_date: NaiveDate,
    /// The last day of leave (inclusive).
    pub end_date: NaiveDate,
}

impl LeaveWindow {
    /// Validates that the range is well-formed (`end_date >= start_date`).
    pub fn validate(&self) -> EngineResult<()> {
        if self.end_date < self.start_date {
            return Err(EngineError::InvalidLeaveRange {
                start: self.start_date,
                end: self.end_date,
            });
        }
        Ok(())
    }

    /// Returns the number of whole calendar days covered, counting both
    /// endpoints. A single-day request spans 1 day.
    pub fn inclusive_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    /// Returns true if this range shares at least one calendar day with
    /// `other`.
    pub fn intersects(&self, other: &LeaveWindow) -> bool {
        self.start_date <= other.end_date && self.end_date >= other.start_date
    }
}

/// Represents a leave request supplied by the backing record store.
///
/// Identity fields are optional because the calculators only need the dates
/// and status; records arriving from other contexts (e.g. a pre-check
/// candidate echoed back) may omit them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    /// Unique identifier of the request, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Owning employee, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    /// The first day of leave (inclusive).
    pub start_date: NaiveDate,
    /// The last day of leave (inclusive).
    pub end_date: NaiveDate,
    /// Free-text reason given by the applicant.
    #[serde(default)]
    pub reason: String,
    /// Current status of the request.
    pub status: LeaveStatus,
    /// Day count stored by the backend, if any. A stored value takes
    /// precedence over recomputation from the dates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days: Option<i64>,
}

impl LeaveRequest {
    /// Returns the date range this request covers.
    pub fn window(&self) -> LeaveWindow {
        LeaveWindow {
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }

    /// Returns the number of leave days this request represents.
    ///
    /// Uses the backend-stored `days` value when present, otherwise the
    /// inclusive-day count of the date range.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::{LeaveRequest, LeaveStatus};
    /// use chrono::NaiveDate;
    ///
    /// let request = LeaveRequest {
    ///     id: None,
    ///     employee_id: None,
    ///     start_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
    ///     end_date: NaiveDate::from_ymd_opt(2024, 1, 12).unwrap(),
    ///     reason: "family event".to_string(),
    ///     status: LeaveStatus::Approved,
    ///     days: None,
    /// };
    /// assert_eq!(request.days_requested(), 3);
    /// ```
    pub fn days_requested(&self) -> i64 {
        self.days.unwrap_or_else(|| self.window().inclusive_days())
    }
}
