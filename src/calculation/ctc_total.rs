//! CTC aggregation functionality.
//!
//! The total CTC is a derived value: it is always recomputed from the eight
//! component fields and a client-supplied total is never trusted.

use rust_decimal::Decimal;

use crate::models::CtcRecord;

/// Returns the total annual CTC, i.e. the sum of the eight component fields.
///
/// Components that were missing or null on the wire have already been read
/// as 0, so one absent field never prevents the total from being computed.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::total_ctc;
/// use payroll_engine::models::CtcRecord;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let record = CtcRecord {
///     employee_id: None,
///     effective_from: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
///     basic_salary: Decimal::from(30000),
///     hra: Decimal::from(10000),
///     allowances: Decimal::from(5000),
///     bonuses: Decimal::ZERO,
///     pf_contribution: Decimal::from(2000),
///     gratuity: Decimal::from(1000),
///     da: Decimal::ZERO,
///     special_allowance: Decimal::ZERO,
///     total_ctc: Decimal::ZERO,
/// };
/// assert_eq!(total_ctc(&record), Decimal::from(48000));
/// ```
pub fn total_ctc(record: &CtcRecord) -> Decimal {
    record.component_sum()
}

/// Returns a copy of the record with `total_ctc` overwritten by the
/// recomputed component sum.
///
/// Call this at the boundary into persistence whenever any constituent
/// field changes, so the stored record always satisfies the invariant
/// `total_ctc == sum(components)`.
pub fn with_recomputed_total(record: &CtcRecord) -> CtcRecord {
    let mut normalized = record.clone();
    normalized.total_ctc = record.component_sum();
    normalized
}
