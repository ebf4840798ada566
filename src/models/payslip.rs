//! Payslip and payslip-period models.
//!
//! This module contains the [`Payslip`] record, the [`PayslipPeriod`] it
//! covers and the [`Month`] enum used to parse the backend's full English
//! month names.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A calendar month, serialized as its full English name.
///
/// Deserialization goes through [`Month::from_name`], so incoming names are
/// matched case-insensitively.
///
/// # Example
///
/// ```
/// use payroll_engine::models::Month;
///
/// let month = Month::from_name("february").unwrap();
/// assert_eq!(month, Month::February);
/// assert_eq!(month.days_in(2024), 29); // leap year
/// assert_eq!(month.days_in(2023), 28);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Month {
    /// January (month 1).
    January,
    /// February (month 2).
    February,
    /// March (month 3).
    March,
    /// April (month 4).
    April,
    /// May (month 5).
    May,
    /// June (month 6).
    June,
    /// July (month 7).
    July,
    /// August (month 8).
    August,
    /// September (month 9).
    September,
    /// October (month 10).
    October,
    /// November (month 11).
    November,
    /// December (month 12).
    December,
}

impl Month {
    /// All months in calendar order.
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Returns the 1-based month number (January = 1).
    pub fn number(&self) -> u32 {
        *self as u32 + 1
    }

    /// Returns the full English name of the month.
    pub fn name(&self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }

    /// Parses a full English month name, case-insensitively.
    ///
    /// Returns [`EngineError::UnknownMonth`] for anything else.
    pub fn from_name(name: &str) -> EngineResult<Month> {
        let trimmed = name.trim();
        Month::ALL
            .iter()
            .copied()
            .find(|m| m.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| EngineError::UnknownMonth {
                name: name.to_string(),
            })
    }

    /// Returns the month a calendar date falls in.
    pub fn from_date(date: NaiveDate) -> Month {
        // date.month() is always in 1..=12
        Month::ALL[(date.month() - 1) as usize]
    }

    /// Returns the number of days in this month for the given year.
    ///
    /// Computed from the actual last-day-of-month value on the Gregorian
    /// calendar rather than a fixed table, so leap-year Februaries come out
    /// at 29 days.
    pub fn days_in(&self, year: i32) -> i64 {
        let first = NaiveDate::from_ymd_opt(year, self.number(), 1);
        let next = match self {
            Month::December => NaiveDate::from_ymd_opt(year + 1, 1, 1),
            _ => NaiveDate::from_ymd_opt(year, self.number() + 1, 1),
        };
        match (first, next) {
            (Some(first), Some(next)) => (next - first).num_days(),
            // chrono only rejects years far outside any payroll horizon
            _ => 0,
        }
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Month {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Month::from_name(&name).map_err(serde::de::Error::custom)
    }
}

/// The `(month, year)` pair a payslip document covers.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{Month, PayslipPeriod};
/// use chrono::NaiveDate;
///
/// let period = PayslipPeriod { month: Month::March, year: 2025 };
/// let today = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
///
/// assert!(period.is_current(today));
/// assert!(!period.is_future(today));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayslipPeriod {
    /// The month the payslip covers.
    pub month: Month,
    /// The 4-digit calendar year.
    pub year: i32,
}

impl PayslipPeriod {
    /// Returns true if this period is strictly after the month `today`
    /// falls in.
    pub fn is_future(&self, today: NaiveDate) -> bool {
        (self.year, self.month.number()) > (today.year(), today.month())
    }

    /// Returns true if this period is the month `today` falls in.
    pub fn is_current(&self, today: NaiveDate) -> bool {
        self.year == today.year() && self.month.number() == today.month()
    }

    /// Returns the number of days in this period's month.
    pub fn days_in_month(&self) -> i64 {
        self.month.days_in(self.year)
    }

    /// Validates that the period lies on the representable calendar.
    ///
    /// Years so far outside the payroll horizon that [`Month::days_in`]
    /// cannot resolve a month length would otherwise poison every
    /// per-day divisor downstream.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::CalculationError`] when the year is out of
    /// range.
    pub fn validate(&self) -> EngineResult<()> {
        if self.days_in_month() == 0 {
            return Err(EngineError::CalculationError {
                message: format!("Year {} is outside the supported calendar range", self.year),
            });
        }
        Ok(())
    }
}

impl std::fmt::Display for PayslipPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.month, self.year)
    }
}

/// Represents a generated payslip supplied by the backing record store.
///
/// Payslips are derived from the active CTC record and leave data at
/// generation time and are immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payslip {
    /// Owning employee, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    /// The month the payslip covers, as a full English name.
    pub month: Month,
    /// The 4-digit year the payslip covers.
    pub year: i32,
    /// The net amount payable for the period.
    pub net_pay: Decimal,
    /// Total deductions applied for the period.
    pub deductions: Decimal,
    /// When the payslip was generated.
    pub generated_on: DateTime<Utc>,
}

impl Payslip {
    /// Returns the period this payslip covers.
    pub fn period(&self) -> PayslipPeriod {
        PayslipPeriod {
            month: self.month,
            year: self.year,
        }
    }
}
