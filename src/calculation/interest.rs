//! The simple-interest formula shared by all segment calculations.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use super::day_count::divisor_for;

/// Rounds a monetary amount to cents, half away from zero.
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Simple interest on `principal` at `rate_percent` per annum over `days`,
/// annualized by the actual length of the year `start_date` falls in, and
/// rounded to cents.
///
/// Returns zero for a zero-day span. Interest is computed on principal only;
/// it is never compounded back into it.
///
/// # Example
///
/// ```
/// use coi_engine::calculation::segment_interest;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let interest = segment_interest(
///     Decimal::from(10000),
///     Decimal::from_str("5.0").unwrap(),
///     182,
///     start,
/// );
/// // 10000 x 0.05 x 182/366
/// assert_eq!(interest, Decimal::from_str("248.63").unwrap());
/// ```
pub fn segment_interest(
    principal: Decimal,
    rate_percent: Decimal,
    days: i64,
    start_date: NaiveDate,
) -> Decimal {
    if days <= 0 || rate_percent.is_zero() {
        return Decimal::ZERO;
    }

    let divisor = Decimal::from(divisor_for(start_date));
    let annual = principal * rate_percent / Decimal::ONE_HUNDRED;
    round_currency(annual * Decimal::from(days) / divisor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_half_year_at_five_percent_leap_year() {
        let interest = segment_interest(dec("10000"), dec("5.0"), 182, date("2024-01-01"));
        assert_eq!(interest, dec("248.63"));
    }

    #[test]
    fn test_quarter_at_five_percent() {
        let interest = segment_interest(dec("15000"), dec("5.0"), 91, date("2024-04-01"));
        assert_eq!(interest, dec("186.48"));
    }

    #[test]
    fn test_non_leap_year_divisor() {
        // 10000 x 0.05 x 365/365 = 500.00
        let interest = segment_interest(dec("10000"), dec("5.0"), 365, date("2023-01-01"));
        assert_eq!(interest, dec("500.00"));
    }

    #[test]
    fn test_zero_days_is_zero() {
        assert_eq!(
            segment_interest(dec("10000"), dec("5.0"), 0, date("2024-01-01")),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_zero_rate_is_zero() {
        assert_eq!(
            segment_interest(dec("10000"), Decimal::ZERO, 100, date("2024-01-01")),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_negative_principal_yields_negative_interest() {
        // A credit balance accrues negative interest, mirroring the credit.
        let interest = segment_interest(dec("-1000"), dec("5.0"), 366, date("2024-01-01"));
        assert_eq!(interest, dec("-50.00"));
    }

    #[test]
    fn test_rounding_to_cents() {
        // 10000 x 0.0545 x 122/366 = 181.6666... -> 181.67
        let interest = segment_interest(dec("10000"), dec("5.45"), 122, date("2024-03-01"));
        assert_eq!(interest, dec("181.67"));
    }

    #[test]
    fn test_round_currency_half_away_from_zero() {
        assert_eq!(round_currency(dec("1.005")), dec("1.01"));
        assert_eq!(round_currency(dec("-1.005")), dec("-1.01"));
        assert_eq!(round_currency(dec("1.004")), dec("1.00"));
    }
}
