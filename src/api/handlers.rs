//! HTTP request handlers for the Leave and Compensation Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    calculate_leave_balance, calculate_net_pay, ensure_can_generate, monthly_breakdown,
    precheck_application, select_active_ctc, visible_payslips, with_recomputed_total,
};
use crate::models::{
    AuditTrace, AuditWarning, CtcRecord, Employee, LeaveRequest, PayslipComputation, PayslipPeriod,
};

use super::request::{BalanceRequest, PayslipRequest, PrecheckRequest, VisiblePayslipsRequest};
use super::response::{ApiError, ApiErrorResponse, BalanceResponse, PrecheckResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/leave/precheck", post(precheck_handler))
        .route("/leave/balance", post(balance_handler))
        .route("/ctc/total", post(ctc_total_handler))
        .route("/payslip/calculate", post(payslip_handler))
        .route("/payslip/visible", post(visible_payslips_handler))
        .with_state(state)
}

/// Maps a JSON extractor rejection onto the API error body.
fn rejection_to_error(rejection: JsonRejection, correlation_id: Uuid) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else if body_text.contains("Unknown month name") {
                ApiError::new("UNKNOWN_MONTH", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

fn bad_request(error: ApiError) -> Response {
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

fn engine_error_response(err: crate::error::EngineError) -> Response {
    let api_error: ApiErrorResponse = err.into();
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}

fn ok_json<T: serde::Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Handler for the POST /leave/precheck endpoint.
///
/// Rules on whether a candidate leave range may be submitted, given the
/// employee's existing requests and entitlement.
async fn precheck_handler(
    State(state): State<AppState>,
    payload: Result<Json<PrecheckRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing leave pre-check request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_to_error(rejection, correlation_id)),
    };

    let entitlement = request
        .entitlement_days
        .unwrap_or_else(|| state.policy().default_entitlement_days());

    let start_time = Instant::now();
    match precheck_application(&request.candidate, entitlement, &request.requests, 1) {
        Ok(result) => {
            let duration_us = start_time.elapsed().as_micros() as u64;
            info!(
                correlation_id = %correlation_id,
                request_days = result.request_days,
                allowed = !matches!(result.outcome, crate::calculation::PrecheckOutcome::Rejected { .. }),
                duration_us,
                "Pre-check completed"
            );
            ok_json(PrecheckResponse::from_result(result, duration_us))
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Pre-check failed"
            );
            engine_error_response(err)
        }
    }
}

/// Handler for the POST /leave/balance endpoint.
///
/// Derives the used, remaining and signed remaining day counts from the
/// employee's request history.
async fn balance_handler(
    State(state): State<AppState>,
    payload: Result<Json<BalanceRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing leave balance request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_to_error(rejection, correlation_id)),
    };

    let entitlement = request
        .entitlement_days
        .unwrap_or_else(|| state.policy().default_entitlement_days());

    let start_time = Instant::now();
    let result = calculate_leave_balance(entitlement, &request.requests, 1);
    let duration_us = start_time.elapsed().as_micros() as u64;

    info!(
        correlation_id = %correlation_id,
        used = result.balance.used,
        remaining = result.balance.remaining,
        duration_us,
        "Balance computed"
    );

    ok_json(BalanceResponse {
        balance: result.balance,
        audit_trace: AuditTrace {
            steps: vec![result.audit_step],
            warnings: vec![],
            duration_us,
        },
    })
}

/// Handler for the POST /ctc/total endpoint.
///
/// Returns the record with its total overwritten by the component sum, the
/// form every write path must persist.
async fn ctc_total_handler(
    payload: Result<Json<CtcRecord>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing CTC total request");

    let record = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_to_error(rejection, correlation_id)),
    };

    let recomputed = with_recomputed_total(&record);
    info!(
        correlation_id = %correlation_id,
        total_ctc = %recomputed.total_ctc,
        "CTC total recomputed"
    );
    ok_json(recomputed)
}

/// Handler for the POST /payslip/calculate endpoint.
///
/// Accepts an employee snapshot with CTC history and leave requests and
/// returns the full payslip computation.
async fn payslip_handler(
    State(_state): State<AppState>,
    payload: Result<Json<PayslipRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payslip calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_to_error(rejection, correlation_id)),
    };

    let today = request.as_of.unwrap_or_else(|| Utc::now().date_naive());

    match perform_payslip_calculation(
        &request.employee,
        &request.ctc_records,
        &request.leave_requests,
        request.period,
        today,
    ) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %result.employee_id,
                period = %result.period,
                net_pay = %result.net_pay,
                duration_us = result.audit_trace.duration_us,
                "Payslip calculation completed successfully"
            );
            ok_json(result)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Payslip calculation failed"
            );
            engine_error_response(err)
        }
    }
}

/// Handler for the POST /payslip/visible endpoint.
///
/// Filters a payslip list down to the entries an employee may see.
async fn visible_payslips_handler(
    State(state): State<AppState>,
    payload: Result<Json<VisiblePayslipsRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing visible payslips request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_to_error(rejection, correlation_id)),
    };

    let today = request.as_of.unwrap_or_else(|| Utc::now().date_naive());
    let total = request.payslips.len();

    let visible = if state.policy().suppress_current_month() {
        visible_payslips(request.payslips, request.viewer_role, today)
    } else {
        request.payslips
    };

    info!(
        correlation_id = %correlation_id,
        total,
        visible = visible.len(),
        "Payslip visibility filtered"
    );
    ok_json(visible)
}

/// Performs the full payslip calculation for an employee snapshot.
fn perform_payslip_calculation(
    employee: &Employee,
    ctc_records: &[CtcRecord],
    leave_requests: &[LeaveRequest],
    period: PayslipPeriod,
    today: NaiveDate,
) -> Result<PayslipComputation, crate::error::EngineError> {
    let start_time = Instant::now();
    let mut all_audit_steps = Vec::new();
    let mut all_warnings: Vec<AuditWarning> = Vec::new();
    let mut step_number: u32 = 1;

    period.validate()?;
    ensure_can_generate(period, today)?;

    let active = select_active_ctc(&employee.id, ctc_records, today, step_number)?;
    all_audit_steps.push(active.audit_step);
    step_number += 1;
    let record = active.record;

    let balance_result =
        calculate_leave_balance(employee.leave_balance_days, leave_requests, step_number);
    let excess_leave_days = balance_result.balance.excess_days();
    all_audit_steps.push(balance_result.audit_step);
    step_number += 1;

    let breakdown_result = monthly_breakdown(&record, period, step_number);
    all_audit_steps.push(breakdown_result.audit_step);
    step_number += 1;

    let net_result = calculate_net_pay(&record, excess_leave_days, period, step_number);
    all_audit_steps.push(net_result.audit_step);

    if net_result.net_pay < Decimal::ZERO {
        all_warnings.push(AuditWarning {
            code: "NEGATIVE_NET_PAY".to_string(),
            message: format!(
                "Leave deductions of {} exceed the monthly salary of {}",
                net_result.deductions.normalize(),
                net_result.monthly_salary.normalize()
            ),
            severity: "high".to_string(),
        });
    }

    let duration_us = start_time.elapsed().as_micros() as u64;

    Ok(PayslipComputation {
        computation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        employee_id: employee.id.clone(),
        period,
        breakdown: breakdown_result.lines,
        monthly_salary: net_result.monthly_salary,
        daily_salary: net_result.daily_salary,
        excess_leave_days,
        deductions: net_result.deductions,
        net_pay: net_result.net_pay,
        audit_trace: AuditTrace {
            steps: all_audit_steps,
            warnings: all_warnings,
            duration_us,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PolicyLoader;
    use crate::models::{LeaveStatus, Month, Payslip, Role};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let policy = PolicyLoader::load("./config/default").expect("Failed to load policy");
        AppState::new(policy)
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    async fn post(uri: &str, body: Value) -> (StatusCode, Value) {
        let router = create_router(create_test_state());
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn sample_payslip_request() -> Value {
        json!({
            "employee": {"id": "emp_001", "name": "Priya Nair", "role": "EMPLOYEE"},
            "ctcRecords": [{
                "employeeId": "emp_001",
                "effectiveFrom": "2025-01-01",
                "basicSalary": "36500",
                "hra": "0",
                "allowances": "0",
                "bonuses": "0",
                "pfContribution": "0",
                "gratuity": "0",
                "totalCTC": "120000"
            }],
            "leaveRequests": [],
            "period": {"month": "March", "year": 2025},
            "asOf": "2025-04-15"
        })
    }

    #[tokio::test]
    async fn test_precheck_allowed_returns_200() {
        let (status, body) = post(
            "/leave/precheck",
            json!({
                "candidate": {"startDate": "2025-03-10", "endDate": "2025-03-12"},
                "requests": []
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["allowed"], json!(true));
        assert_eq!(body["requestDays"], json!(3));
        assert!(body["warning"].is_null());
    }

    #[tokio::test]
    async fn test_precheck_overlap_rejected() {
        let (status, body) = post(
            "/leave/precheck",
            json!({
                "candidate": {"startDate": "2025-03-10", "endDate": "2025-03-12"},
                "requests": [{
                    "startDate": "2025-03-12",
                    "endDate": "2025-03-14",
                    "status": "PENDING"
                }]
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["allowed"], json!(false));
        assert_eq!(body["reason"], json!("duplicate/overlapping request"));
    }

    #[tokio::test]
    async fn test_precheck_excess_gets_warning() {
        // Default entitlement is 12; 10 approved days plus a 5-day request
        let (status, body) = post(
            "/leave/precheck",
            json!({
                "candidate": {"startDate": "2025-06-02", "endDate": "2025-06-06"},
                "requests": [{
                    "startDate": "2025-01-06",
                    "endDate": "2025-01-15",
                    "status": "APPROVED"
                }]
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["allowed"], json!(true));
        assert_eq!(body["warning"]["excessDays"], json!(3));
    }

    #[tokio::test]
    async fn test_precheck_invalid_range_returns_400() {
        let (status, body) = post(
            "/leave/precheck",
            json!({
                "candidate": {"startDate": "2025-03-12", "endDate": "2025-03-10"},
                "requests": []
            }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], json!("INVALID_LEAVE_RANGE"));
    }

    #[tokio::test]
    async fn test_balance_uses_policy_default_entitlement() {
        let (status, body) = post(
            "/leave/balance",
            json!({
                "requests": [{
                    "startDate": "2025-01-06",
                    "endDate": "2025-01-10",
                    "status": "APPROVED"
                }]
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["balance"]["used"], json!(5));
        assert_eq!(body["balance"]["remaining"], json!(7));
        assert_eq!(body["balance"]["signedRemaining"], json!(7));
    }

    #[tokio::test]
    async fn test_ctc_total_recomputes_stored_total() {
        let (status, body) = post(
            "/ctc/total",
            json!({
                "effectiveFrom": "2025-01-01",
                "basicSalary": "600000",
                "hra": "200000",
                "totalCTC": "1"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let total: Decimal = body["totalCtc"].as_str().unwrap().parse().unwrap();
        assert_eq!(total, Decimal::from(800000));
    }

    #[tokio::test]
    async fn test_payslip_valid_request_returns_200() {
        let (status, body) = post("/payslip/calculate", sample_payslip_request()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["employeeId"], json!("emp_001"));
        assert_eq!(body["excessLeaveDays"], json!(0));
        // 120000 / 12 = 10000 monthly, no excess leave
        let net_pay: Decimal = body["netPay"].as_str().unwrap().parse().unwrap();
        assert_eq!(net_pay, Decimal::from(10000));
        // Basic 36500 / 365 * 31 days of March
        let basic_monthly: Decimal = body["breakdown"][0]["monthlyAmount"]
            .as_str()
            .unwrap()
            .parse()
            .unwrap();
        assert_eq!(basic_monthly, Decimal::from(3100));
    }

    #[tokio::test]
    async fn test_payslip_future_period_returns_400() {
        let mut request = sample_payslip_request();
        request["period"] = json!({"month": "December", "year": 2025});

        let (status, body) = post("/payslip/calculate", request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], json!("FUTURE_PERIOD"));
    }

    #[tokio::test]
    async fn test_payslip_without_ctc_history_returns_400() {
        let mut request = sample_payslip_request();
        request["ctcRecords"] = json!([]);

        let (status, body) = post("/payslip/calculate", request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], json!("CTC_NOT_FOUND"));
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let router = create_router(create_test_state());
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/leave/balance")
                    .header("Content-Type", "application/json")
                    .body(Body::from("{invalid json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_field_returns_validation_error() {
        let (status, body) = post("/payslip/calculate", json!({"period": {"month": "March", "year": 2025}})).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], json!("VALIDATION_ERROR"));
    }

    #[tokio::test]
    async fn test_visible_payslips_hides_current_month() {
        let (status, body) = post(
            "/payslip/visible",
            json!({
                "payslips": [
                    {"month": "March", "year": 2025, "netPay": "10000", "deductions": "0",
                     "generatedOn": "2025-03-31T10:00:00Z"},
                    {"month": "April", "year": 2025, "netPay": "10000", "deductions": "0",
                     "generatedOn": "2025-04-30T10:00:00Z"}
                ],
                "asOf": "2025-04-15"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let visible = body.as_array().unwrap();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0]["month"], json!("March"));
    }

    #[test]
    fn test_perform_calculation_flags_negative_net_pay() {
        let employee = Employee {
            id: "emp_001".to_string(),
            name: "Priya Nair".to_string(),
            role: Role::Employee,
            leave_balance_days: 1,
            manager_id: None,
        };
        let record = CtcRecord {
            employee_id: Some("emp_001".to_string()),
            effective_from: make_date("2025-01-01"),
            basic_salary: Decimal::from(1200),
            hra: Decimal::ZERO,
            allowances: Decimal::ZERO,
            bonuses: Decimal::ZERO,
            pf_contribution: Decimal::ZERO,
            gratuity: Decimal::ZERO,
            da: Decimal::ZERO,
            special_allowance: Decimal::ZERO,
            total_ctc: Decimal::from(1200),
        };
        // 40 approved days against a 1-day entitlement
        let leave = LeaveRequest {
            id: None,
            employee_id: Some("emp_001".to_string()),
            start_date: make_date("2025-01-06"),
            end_date: make_date("2025-02-14"),
            reason: String::new(),
            status: LeaveStatus::Approved,
            days: None,
        };
        let period = PayslipPeriod {
            month: Month::March,
            year: 2025,
        };

        let result = perform_payslip_calculation(
            &employee,
            &[record],
            &[leave],
            period,
            make_date("2025-04-15"),
        )
        .unwrap();

        assert!(result.net_pay < Decimal::ZERO);
        assert_eq!(result.excess_leave_days, 39);
        assert_eq!(result.audit_trace.warnings.len(), 1);
        assert_eq!(result.audit_trace.warnings[0].code, "NEGATIVE_NET_PAY");
    }

    #[test]
    fn test_perform_calculation_rejects_out_of_range_years() {
        let employee = Employee {
            id: "emp_001".to_string(),
            name: "Priya Nair".to_string(),
            role: Role::Employee,
            leave_balance_days: 12,
            manager_id: None,
        };
        let record = CtcRecord {
            employee_id: Some("emp_001".to_string()),
            effective_from: make_date("2025-01-01"),
            basic_salary: Decimal::from(600000),
            hra: Decimal::ZERO,
            allowances: Decimal::ZERO,
            bonuses: Decimal::ZERO,
            pf_contribution: Decimal::ZERO,
            gratuity: Decimal::ZERO,
            da: Decimal::ZERO,
            special_allowance: Decimal::ZERO,
            total_ctc: Decimal::from(600000),
        };
        // A far-past period passes the future-period gate but has no
        // resolvable month length
        let period = PayslipPeriod {
            month: Month::March,
            year: -300000,
        };

        let result = perform_payslip_calculation(
            &employee,
            &[record],
            &[],
            period,
            make_date("2025-03-15"),
        );

        match result.unwrap_err() {
            crate::error::EngineError::CalculationError { message } => {
                assert!(message.contains("-300000"));
            }
            other => panic!("Expected CalculationError, got {:?}", other),
        }
    }

    #[test]
    fn test_perform_calculation_step_numbers_are_sequential() {
        let employee = Employee {
            id: "emp_001".to_string(),
            name: "Priya Nair".to_string(),
            role: Role::Employee,
            leave_balance_days: 12,
            manager_id: None,
        };
        let record = CtcRecord {
            employee_id: Some("emp_001".to_string()),
            effective_from: make_date("2025-01-01"),
            basic_salary: Decimal::from(600000),
            hra: Decimal::ZERO,
            allowances: Decimal::ZERO,
            bonuses: Decimal::ZERO,
            pf_contribution: Decimal::ZERO,
            gratuity: Decimal::ZERO,
            da: Decimal::ZERO,
            special_allowance: Decimal::ZERO,
            total_ctc: Decimal::from(600000),
        };
        let period = PayslipPeriod {
            month: Month::March,
            year: 2025,
        };

        let result =
            perform_payslip_calculation(&employee, &[record], &[], period, make_date("2025-04-15"))
                .unwrap();

        let numbers: Vec<u32> = result
            .audit_trace
            .steps
            .iter()
            .map(|s| s.step_number)
            .collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn test_visible_payslips_unfiltered_when_suppression_disabled() {
        use crate::config::PolicyConfig;

        let mut config: PolicyConfig = serde_yaml::from_str(
            "metadata:\n  name: test\n  version: '2025-01-01'\nleave: {}\npayslip: {}\n",
        )
        .unwrap();
        config.payslip.suppress_current_month = false;
        let state = AppState::new(PolicyLoader::from_config(config));

        let router = create_router(state);
        let body = json!({
            "payslips": [
                {"month": "April", "year": 2025, "netPay": "10000", "deductions": "0",
                 "generatedOn": "2025-04-30T10:00:00Z"}
            ],
            "asOf": "2025-04-15"
        });
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/payslip/visible")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let visible: Vec<Payslip> = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(visible.len(), 1);
    }
}
