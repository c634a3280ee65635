//! Per-diem interest on the final outstanding balance.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::models::{InterestMode, RatePeriodTable};

use super::day_count::days_in_year;
use super::interest::round_currency;

/// The daily interest accruing on `balance` as of `date`.
///
/// Uses the rate in effect on `date` for the given mode; callers normally
/// pass [`InterestMode::Postjudgment`] and fall back to
/// [`InterestMode::Prejudgment`] when the postjudgment section of their UI
/// is disabled. Returns zero for a non-positive balance or when no rate
/// covers the date.
///
/// # Example
///
/// ```
/// use coi_engine::calculation::per_diem;
/// use coi_engine::models::{InterestMode, RatePeriodSpec, RatePeriodTable};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let table = RatePeriodTable::from_specs(
///     "BC",
///     vec![RatePeriodSpec {
///         start: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///         prejudgment: Decimal::from_str("5.0").unwrap(),
///         postjudgment: Decimal::from_str("7.0").unwrap(),
///     }],
///     NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
/// );
///
/// let daily = per_diem(
///     Decimal::from(13000),
///     NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
///     &table,
///     InterestMode::Postjudgment,
/// );
/// // 13000 x 0.07 / 366
/// assert_eq!(daily, Decimal::from_str("2.49").unwrap());
/// ```
pub fn per_diem(
    balance: Decimal,
    date: NaiveDate,
    table: &RatePeriodTable,
    mode: InterestMode,
) -> Decimal {
    if balance <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let rate = table.lookup_rate(date, mode);
    if rate.is_zero() {
        return Decimal::ZERO;
    }

    let divisor = Decimal::from(days_in_year(date.year()));
    round_currency(balance * rate / Decimal::ONE_HUNDRED / divisor)
}
