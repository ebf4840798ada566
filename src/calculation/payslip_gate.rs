//! Payslip period gating and visibility filtering.
//!
//! Two distinct period rules live here:
//!
//! - the **generation gate**: a payslip may be generated for the current
//!   month or any past month, never a strictly future one;
//! - the **visibility filter**: the employee-facing list hides payslips for
//!   the in-progress month even if one was already generated.

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};
use crate::models::{Payslip, PayslipPeriod, Role};

/// Returns true if a payslip may be generated for the period as of `today`.
///
/// The current month is allowed; only strictly future periods are refused.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::can_generate;
/// use payroll_engine::models::{Month, PayslipPeriod};
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
///
/// let march = PayslipPeriod { month: Month::March, year: 2025 };
/// let april = PayslipPeriod { month: Month::April, year: 2025 };
///
/// assert!(can_generate(march, today));
/// assert!(!can_generate(april, today));
/// ```
pub fn can_generate(period: PayslipPeriod, today: NaiveDate) -> bool {
    !period.is_future(today)
}

/// Validates the generation gate, returning [`EngineError::FuturePeriod`]
/// for a strictly future period.
pub fn ensure_can_generate(period: PayslipPeriod, today: NaiveDate) -> EngineResult<()> {
    if !can_generate(period, today) {
        return Err(EngineError::FuturePeriod {
            month: period.month.name().to_string(),
            year: period.year,
        });
    }
    Ok(())
}

/// Filters the payslip list down to what the viewer may see.
///
/// For the employee view, a payslip is excluded iff its period equals the
/// calendar month `today` falls in — the in-progress month is never shown,
/// regardless of whether a payslip was already generated for it. Staff
/// roles ([`Role::is_staff`]) see the list unfiltered. This is a display
/// policy, not a storage-layer filter.
pub fn visible_payslips(all: Vec<Payslip>, viewer: Role, today: NaiveDate) -> Vec<Payslip> {
    if viewer.is_staff() {
        return all;
    }
    all.into_iter()
        .filter(|p| !p.period().is_current(today))
        .collect()
}
