//! Output segment models.
//!
//! A calculation's `details` list is a sequence of rows: interest-bearing
//! segments interleaved with zero-interest marker rows for the events that
//! changed the principal between them. The rows are modeled as an explicit
//! sum type discriminated by variant rather than by ad-hoc boolean flags.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A contiguous sub-range sharing a single rate and a single principal.
///
/// The interest formula is
/// `principal x rate/100 x days / days_in_year(start_date.year)`; the
/// segment's start year fixes the annualization divisor for the whole
/// segment even if it straddles a year boundary.
///
/// # Example
///
/// ```
/// use coi_engine::models::InterestSegment;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let segment = InterestSegment {
///     start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
///     rate: Decimal::from_str("5.0").unwrap(),
///     principal: Decimal::from_str("10000").unwrap(),
///     days: 182,
///     interest: Decimal::from_str("248.63").unwrap(),
/// };
/// assert_eq!(segment.days, 182);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterestSegment {
    /// The first date of the segment.
    pub start_date: NaiveDate,
    /// The last date of the segment (inclusive, for display).
    pub end_date: NaiveDate,
    /// The rate in effect during the segment, in percent.
    pub rate: Decimal,
    /// The outstanding principal during the segment.
    pub principal: Decimal,
    /// The number of accrual days in the segment.
    pub days: i64,
    /// The simple interest accrued over the segment, rounded to cents.
    pub interest: Decimal,
}

/// A zero-interest display row marking a special damage.
///
/// Has no day span and does not affect day totals; the principal step it
/// causes is reflected in the following interest segments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialDamageMarker {
    /// The date the damage was incurred.
    pub date: NaiveDate,
    /// A display description of the damage.
    pub description: String,
    /// The damage amount added to principal.
    pub amount: Decimal,
}

/// A zero-interest display row marking a payment and its allocation split.
///
/// The split is computed by the engine and carried here for the caller to
/// display; the input event itself is never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMarker {
    /// The date the payment was received.
    pub date: NaiveDate,
    /// The full payment amount.
    pub amount: Decimal,
    /// The portion applied to accrued interest.
    pub interest_applied: Decimal,
    /// The portion applied to principal.
    pub principal_applied: Decimal,
}

/// One row of a calculation's `details` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SegmentDetail {
    /// An interest-bearing segment.
    Interest(InterestSegment),
    /// A special damage marker row.
    SpecialDamage(SpecialDamageMarker),
    /// A payment marker row.
    Payment(PaymentMarker),
}

impl SegmentDetail {
    /// The date the row is anchored to: an interest segment's start date, or
    /// a marker's event date.
    pub fn date(&self) -> NaiveDate {
        match self {
            SegmentDetail::Interest(s) => s.start_date,
            SegmentDetail::SpecialDamage(m) => m.date,
            SegmentDetail::Payment(m) => m.date,
        }
    }

    /// The interest contributed by this row toward the calculation total.
    ///
    /// Marker rows contribute zero: a payment's `interest_applied` settles
    /// previously accrued interest, it does not accrue any.
    pub fn interest(&self) -> Decimal {
        match self {
            SegmentDetail::Interest(s) => s.interest,
            _ => Decimal::ZERO,
        }
    }

    /// The number of accrual days this row spans (zero for markers).
    pub fn days(&self) -> i64 {
        match self {
            SegmentDetail::Interest(s) => s.days,
            _ => 0,
        }
    }
}

/// Per-damage interest detail for damages within the final rate segment.
///
/// These rows let a UI show each late damage's own pro-rated interest from
/// its date to the calculation end. They are additive bookkeeping only: the
/// aggregate total already reflects the stepped principal, so these amounts
/// are never added to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageInterestDetail {
    /// The date the damage was incurred.
    pub date: NaiveDate,
    /// A display description of the damage.
    pub description: String,
    /// The damage amount.
    pub amount: Decimal,
    /// The rate applied from the damage date, in percent.
    pub rate: Decimal,
    /// Accrual days from the damage date to the calculation end.
    pub days: i64,
    /// The damage's own pro-rated interest, rounded to cents.
    pub interest: Decimal,
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

    fn interest_row() -> SegmentDetail {
        SegmentDetail::Interest(InterestSegment {
            start_date: date("2024-01-01"),
            end_date: date("2024-06-30"),
            rate: dec("5.0"),
            principal: dec("10000"),
            days: 182,
            interest: dec("248.63"),
        })
    }

    #[test]
    fn test_interest_row_accessors() {
        let row = interest_row();
        assert_eq!(row.date(), date("2024-01-01"));
        assert_eq!(row.interest(), dec("248.63"));
        assert_eq!(row.days(), 182);
    }

    #[test]
    fn test_marker_rows_contribute_no_interest_or_days() {
        let damage = SegmentDetail::SpecialDamage(SpecialDamageMarker {
            date: date("2024-02-01"),
            description: "ambulance".to_string(),
            amount: dec("1000"),
        });
        assert_eq!(damage.interest(), Decimal::ZERO);
        assert_eq!(damage.days(), 0);

        let payment = SegmentDetail::Payment(PaymentMarker {
            date: date("2024-03-01"),
            amount: dec("500"),
            interest_applied: dec("200"),
            principal_applied: dec("300"),
        });
        assert_eq!(payment.interest(), Decimal::ZERO);
        assert_eq!(payment.date(), date("2024-03-01"));
    }

    #[test]
    fn test_serde_discriminates_by_kind() {
        let json = serde_json::to_string(&interest_row()).unwrap();
        assert!(json.contains("\"kind\":\"interest\""));

        let payment = SegmentDetail::Payment(PaymentMarker {
            date: date("2024-03-01"),
            amount: dec("500"),
            interest_applied: dec("200"),
            principal_applied: dec("300"),
        });
        let json = serde_json::to_string(&payment).unwrap();
        assert!(json.contains("\"kind\":\"payment\""));
        assert!(json.contains("\"interest_applied\":\"200\""));

        let back: SegmentDetail = serde_json::from_str(&json).unwrap();
        assert_eq!(back, payment);
    }
}
