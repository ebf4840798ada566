//! Compensation (CTC) record model.
//!
//! This module defines the [`CtcRecord`] struct representing one entry in an
//! employee's versioned, append-only compensation history.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// Deserializes a currency amount, treating a missing or `null` value as 0.
///
/// One absent field must not prevent the rest of a record from parsing.
fn decimal_or_zero<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Decimal>::deserialize(deserializer)?.unwrap_or(Decimal::ZERO))
}

/// One entry in an employee's cost-to-company history.
///
/// Records are keyed by `employeeId` and `effectiveFrom`; the entry with the
/// latest `effectiveFrom` on or before today is the active one. The
/// `total_ctc` field is derived and is always recomputed from the component
/// fields at the engine boundary — a client-supplied total is never trusted.
///
/// # Example
///
/// ```
/// use payroll_engine::models::CtcRecord;
/// use rust_decimal::Decimal;
///
/// let json = r#"{
///     "employeeId": "emp_001",
///     "effectiveFrom": "2024-04-01",
///     "basicSalary": 30000,
///     "hra": 10000,
///     "allowances": 5000,
///     "pfContribution": 2000,
///     "gratuity": 1000
/// }"#;
///
/// let record: CtcRecord = serde_json::from_str(json).unwrap();
/// // bonuses, da and specialAllowance were absent and read as 0
/// assert_eq!(record.component_sum(), Decimal::from(48000));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CtcRecord {
    /// Owning employee, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    /// The date from which this record applies.
    pub effective_from: NaiveDate,
    /// Annual basic salary.
    #[serde(default, deserialize_with = "decimal_or_zero")]
    pub basic_salary: Decimal,
    /// Annual house rent allowance.
    #[serde(default, deserialize_with = "decimal_or_zero")]
    pub hra: Decimal,
    /// Annual general allowances.
    #[serde(default, deserialize_with = "decimal_or_zero")]
    pub allowances: Decimal,
    /// Annual bonuses.
    #[serde(default, deserialize_with = "decimal_or_zero")]
    pub bonuses: Decimal,
    /// Annual provident fund contribution.
    #[serde(default, deserialize_with = "decimal_or_zero")]
    pub pf_contribution: Decimal,
    /// Annual gratuity.
    #[serde(default, deserialize_with = "decimal_or_zero")]
    pub gratuity: Decimal,
    /// Annual dearness allowance.
    #[serde(default, deserialize_with = "decimal_or_zero")]
    pub da: Decimal,
    /// Annual special allowance.
    #[serde(default, deserialize_with = "decimal_or_zero")]
    pub special_allowance: Decimal,
    /// Total annual CTC. Derived; see [`crate::calculation::total_ctc`].
    #[serde(default, deserialize_with = "decimal_or_zero", alias = "totalCTC")]
    pub total_ctc: Decimal,
}

impl CtcRecord {
    /// Returns the sum of the eight component fields.
    pub fn component_sum(&self) -> Decimal {
        self.basic_salary
            + self.hra
            + self.allowances
            + self.bonuses
            + self.pf_contribution
            + self.gratuity
            + self.da
            + self.special_allowance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(n: i64) -> Decimal {
        Decimal::from(n)
    }

    fn create_test_record() -> CtcRecord {
        CtcRecord {
            employee_id: Some("emp_001".to_string()),
            effective_from: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
            basic_salary: dec(30000),
            hra: dec(10000),
            allowances: dec(5000),
            bonuses: dec(0),
            pf_contribution: dec(2000),
            gratuity: dec(1000),
            da: dec(0),
            special_allowance: dec(0),
            total_ctc: dec(48000),
        }
    }

    #[test]
    fn test_component_sum() {
        let record = create_test_record();
        assert_eq!(record.component_sum(), dec(48000));
    }

    #[test]
    fn test_deserialize_full_record() {
        let json = r#"{
            "employeeId": "emp_001",
            "effectiveFrom": "2024-04-01",
            "basicSalary": 30000,
            "hra": 10000,
            "allowances": 5000,
            "bonuses": 0,
            "pfContribution": 2000,
            "gratuity": 1000,
            "da": 0,
            "specialAllowance": 0,
            "totalCtc": 48000
        }"#;

        let record: CtcRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record, create_test_record());
    }

    #[test]
    fn test_total_ctc_accepts_legacy_field_name() {
        let json = r#"{
            "effectiveFrom": "2024-04-01",
            "basicSalary": 30000,
            "totalCTC": 30000
        }"#;

        let record: CtcRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.total_ctc, dec(30000));
    }

    #[test]
    fn test_missing_components_read_as_zero() {
        let json = r#"{
            "effectiveFrom": "2024-04-01",
            "basicSalary": 30000,
            "hra": 10000
        }"#;

        let record: CtcRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.bonuses, Decimal::ZERO);
        assert_eq!(record.special_allowance, Decimal::ZERO);
        assert_eq!(record.component_sum(), dec(40000));
    }

    #[test]
    fn test_null_components_read_as_zero() {
        let json = r#"{
            "effectiveFrom": "2024-04-01",
            "basicSalary": 30000,
            "hra": null,
            "da": null
        }"#;

        let record: CtcRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.hra, Decimal::ZERO);
        assert_eq!(record.da, Decimal::ZERO);
        assert_eq!(record.component_sum(), dec(30000));
    }

    #[test]
    fn test_serialize_round_trip() {
        let record = create_test_record();
        let json = serde_json::to_string(&record).unwrap();
        let deserialized: CtcRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}
