//! Active compensation-record selection.
//!
//! CTC records form a versioned, append-only history per employee keyed by
//! `effectiveFrom`. The record with the latest effective date on or before
//! the reference date is the active one; older entries remain for
//! historical lookup.

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, CtcRecord};

/// The result of an active-CTC lookup, including the audit step.
#[derive(Debug, Clone)]
pub struct ActiveCtcResult {
    /// The active record.
    pub record: CtcRecord,
    /// The audit step recording this lookup.
    pub audit_step: AuditStep,
}

/// Selects the CTC record in effect for an employee on the given date.
///
/// The history does not need to be pre-sorted; among records whose
/// `effective_from` is on or before `today`, the one with the latest
/// effective date wins.
///
/// # Errors
///
/// Returns [`EngineError::CtcNotFound`] when the history is empty or every
/// record only takes effect after `today`.
pub fn select_active_ctc(
    employee_id: &str,
    records: &[CtcRecord],
    today: NaiveDate,
    step_number: u32,
) -> EngineResult<ActiveCtcResult> {
    let active = records
        .iter()
        .filter(|r| r.effective_from <= today)
        .max_by_key(|r| r.effective_from)
        .ok_or_else(|| EngineError::CtcNotFound {
            employee_id: employee_id.to_string(),
            date: today,
        })?;

    let audit_step = AuditStep {
        step_number,
        rule_id: "active_ctc_lookup".to_string(),
        rule_name: "Active CTC Lookup".to_string(),
        input: serde_json::json!({
            "employee_id": employee_id,
            "record_count": records.len(),
            "as_of": today.to_string()
        }),
        output: serde_json::json!({
            "effective_from": active.effective_from.to_string(),
            "total_ctc": active.total_ctc.normalize().to_string()
        }),
        reasoning: format!(
            "Selected record effective {} out of {} for employee '{}' as of {}",
            active.effective_from,
            records.len(),
            employee_id,
            today
        ),
    };

    Ok(ActiveCtcResult {
        record: active.clone(),
        audit_step,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(effective_from: NaiveDate, total: i64) -> CtcRecord {
        CtcRecord {
            employee_id: Some("emp_001".to_string()),
            effective_from,
            basic_salary: Decimal::from(total),
            hra: Decimal::ZERO,
            allowances: Decimal::ZERO,
            bonuses: Decimal::ZERO,
            pf_contribution: Decimal::ZERO,
            gratuity: Decimal::ZERO,
            da: Decimal::ZERO,
            special_allowance: Decimal::ZERO,
            total_ctc: Decimal::from(total),
        }
    }

    /// AC-001: latest record on or before today wins
    #[test]
    fn test_latest_effective_record_wins() {
        let records = vec![
            record(date(2023, 4, 1), 400000),
            record(date(2024, 4, 1), 480000),
            record(date(2025, 4, 1), 520000),
        ];
        let result =
            select_active_ctc("emp_001", &records, date(2024, 9, 15), 1).unwrap();

        assert_eq!(result.record.effective_from, date(2024, 4, 1));
        assert_eq!(result.record.total_ctc, Decimal::from(480000));
    }

    /// AC-002: unsorted history still resolves correctly
    #[test]
    fn test_unsorted_history_resolves_correctly() {
        let records = vec![
            record(date(2025, 4, 1), 520000),
            record(date(2023, 4, 1), 400000),
            record(date(2024, 4, 1), 480000),
        ];
        let result =
            select_active_ctc("emp_001", &records, date(2024, 9, 15), 1).unwrap();

        assert_eq!(result.record.effective_from, date(2024, 4, 1));
    }

    /// AC-003: a record effective today is active today
    #[test]
    fn test_record_effective_today_is_active() {
        let records = vec![record(date(2024, 9, 15), 480000)];
        let result =
            select_active_ctc("emp_001", &records, date(2024, 9, 15), 1).unwrap();

        assert_eq!(result.record.effective_from, date(2024, 9, 15));
    }

    /// AC-004: only-future history is an error
    #[test]
    fn test_only_future_records_is_an_error() {
        let records = vec![record(date(2025, 4, 1), 520000)];
        let result = select_active_ctc("emp_001", &records, date(2024, 9, 15), 1);

        match result.unwrap_err() {
            EngineError::CtcNotFound { employee_id, date: d } => {
                assert_eq!(employee_id, "emp_001");
                assert_eq!(d, date(2024, 9, 15));
            }
            other => panic!("Expected CtcNotFound, got {:?}", other),
        }
    }

    /// AC-005: empty history is an error
    #[test]
    fn test_empty_history_is_an_error() {
        let result = select_active_ctc("emp_001", &[], date(2024, 9, 15), 1);
        assert!(matches!(
            result.unwrap_err(),
            EngineError::CtcNotFound { .. }
        ));
    }

    #[test]
    fn test_audit_step_names_the_chosen_record() {
        let records = vec![
            record(date(2023, 4, 1), 400000),
            record(date(2024, 4, 1), 480000),
        ];
        let result =
            select_active_ctc("emp_001", &records, date(2024, 9, 15), 7).unwrap();

        assert_eq!(result.audit_step.step_number, 7);
        assert_eq!(result.audit_step.rule_id, "active_ctc_lookup");
        assert_eq!(
            result.audit_step.output["effective_from"].as_str().unwrap(),
            "2024-04-01"
        );
    }
}
