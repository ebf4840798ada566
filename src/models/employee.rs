//! Employee model and related types.
//!
//! This module defines the Employee struct and Role enum for representing
//! workers and back-office staff in the payroll system.

use serde::{Deserialize, Serialize};

/// Represents the role an account holds in the payroll system.
///
/// Role is a closed enum; calculator behavior that differs by role is gated
/// on the capability predicate below rather than by callers matching on
/// individual variants. A missing role on the wire defaults to `Employee`,
/// the least-capable view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// A regular employee: applies for leave, views own payslips.
    #[default]
    Employee,
    /// A manager: approves or rejects leave for direct reports.
    Manager,
    /// HR staff: onboards employees and manages compensation records.
    Hr,
    /// An administrator: full access to user management.
    Admin,
}

impl Role {
    /// Returns true for back-office roles (manager, HR, admin).
    ///
    /// Staff see the unsuppressed payslip list; the current-month
    /// visibility filter applies only to the employee view.
    pub fn is_staff(&self) -> bool {
        !matches!(self, Role::Employee)
    }
}

fn default_leave_balance_days() -> i64 {
    12
}

/// Represents an employee record supplied by the backing record store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's display name.
    pub name: String,
    /// The role held by this account.
    pub role: Role,
    /// The annual leave entitlement in days (defaults to 12).
    #[serde(default = "default_leave_balance_days")]
    pub leave_balance_days: i64,
    /// Back-reference to the assigned manager, if any.
    #[serde(default)]
    pub manager_id: Option<String>,
}
