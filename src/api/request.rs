//! Request types for the Leave and Compensation Engine API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{CtcRecord, Employee, LeaveRequest, LeaveWindow, Payslip, PayslipPeriod, Role};

/// Request body for the `/leave/precheck` endpoint.
///
/// Carries the candidate range alongside the employee's existing requests so
/// the engine can rule on overlap and balance without any storage of its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrecheckRequest {
    /// The leave range the employee wants to apply for.
    pub candidate: LeaveWindow,
    /// The employee's annual entitlement. Falls back to the policy default
    /// when absent.
    #[serde(default)]
    pub entitlement_days: Option<i64>,
    /// The employee's existing leave requests, all statuses.
    #[serde(default)]
    pub requests: Vec<LeaveRequest>,
}

/// Request body for the `/leave/balance` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceRequest {
    /// The employee's annual entitlement. Falls back to the policy default
    /// when absent.
    #[serde(default)]
    pub entitlement_days: Option<i64>,
    /// The employee's existing leave requests, all statuses.
    #[serde(default)]
    pub requests: Vec<LeaveRequest>,
}

/// Request body for the `/payslip/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayslipRequest {
    /// The employee the payslip is for.
    pub employee: Employee,
    /// The employee's compensation history.
    #[serde(default)]
    pub ctc_records: Vec<CtcRecord>,
    /// The employee's leave requests, used to derive excess leave.
    #[serde(default)]
    pub leave_requests: Vec<LeaveRequest>,
    /// The month and year to calculate.
    pub period: PayslipPeriod,
    /// The reference date for the future-period gate and active-CTC lookup.
    /// Defaults to today when absent.
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
}

/// Request body for the `/payslip/visible` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisiblePayslipsRequest {
    /// The payslips to filter.
    #[serde(default)]
    pub payslips: Vec<Payslip>,
    /// The role of the account viewing the list. Staff roles see the list
    /// unfiltered; defaults to the employee view when absent.
    #[serde(default)]
    pub viewer_role: Role,
    /// The reference date that decides which month is "current". Defaults to
    /// today when absent.
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Month;

    #[test]
    fn test_precheck_request_deserialization() {
        let json = r#"{
            "candidate": {"startDate": "2025-03-10", "endDate": "2025-03-12"},
            "entitlementDays": 15,
            "requests": [
                {"startDate": "2025-01-06", "endDate": "2025-01-07", "status": "APPROVED"}
            ]
        }"#;

        let request: PrecheckRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.entitlement_days, Some(15));
        assert_eq!(request.requests.len(), 1);
        assert_eq!(
            request.candidate.start_date,
            NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
        );
    }

    #[test]
    fn test_precheck_request_defaults() {
        let json = r#"{
            "candidate": {"startDate": "2025-03-10", "endDate": "2025-03-12"}
        }"#;

        let request: PrecheckRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.entitlement_days, None);
        assert!(request.requests.is_empty());
    }

    #[test]
    fn test_payslip_request_deserialization() {
        let json = r#"{
            "employee": {"id": "E042", "name": "Priya Nair", "role": "EMPLOYEE"},
            "ctcRecords": [
                {"effectiveFrom": "2025-01-01", "basicSalary": "600000", "totalCTC": "900000"}
            ],
            "leaveRequests": [],
            "period": {"month": "March", "year": 2025},
            "asOf": "2025-04-15"
        }"#;

        let request: PayslipRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.employee.name, "Priya Nair");
        assert_eq!(request.ctc_records.len(), 1);
        assert_eq!(request.period.month, Month::March);
        assert_eq!(
            request.as_of,
            Some(NaiveDate::from_ymd_opt(2025, 4, 15).unwrap())
        );
    }

    #[test]
    fn test_visible_payslips_request_empty_defaults() {
        let request: VisiblePayslipsRequest = serde_json::from_str("{}").unwrap();
        assert!(request.payslips.is_empty());
        assert_eq!(request.viewer_role, Role::Employee);
        assert_eq!(request.as_of, None);
    }

    #[test]
    fn test_visible_payslips_request_accepts_viewer_role() {
        let json = r#"{"viewerRole": "HR"}"#;
        let request: VisiblePayslipsRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.viewer_role, Role::Hr);
    }
}
