//! Principal-changing event models.
//!
//! A calculation's principal changes only through explicit events: special
//! damages increase it, payments reduce it (interest first). The engine
//! reads events in date order and never mutates them.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An event that changes the outstanding principal during a calculation.
///
/// # Example
///
/// ```
/// use coi_engine::models::PrincipalEvent;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let damage = PrincipalEvent::SpecialDamage {
///     date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
///     description: "physiotherapy".to_string(),
///     amount: Decimal::from_str("1000").unwrap(),
/// };
/// assert!(!damage.is_payment());
/// assert_eq!(damage.amount(), Decimal::from_str("1000").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PrincipalEvent {
    /// A special damage incurred on `date`, increasing principal as of that
    /// date (inclusive). Valid only in prejudgment mode.
    SpecialDamage {
        /// The date the damage was incurred.
        date: NaiveDate,
        /// A display description of the damage.
        description: String,
        /// The damage amount; must be positive.
        amount: Decimal,
    },
    /// A payment received on `date`, reducing the outstanding balance as of
    /// that date. Applied to accrued interest before principal. Valid in
    /// either mode.
    Payment {
        /// The date the payment was received.
        date: NaiveDate,
        /// The payment amount; must be positive.
        amount: Decimal,
    },
}

impl PrincipalEvent {
    /// The date the event takes effect.
    pub fn date(&self) -> NaiveDate {
        match self {
            PrincipalEvent::SpecialDamage { date, .. } => *date,
            PrincipalEvent::Payment { date, .. } => *date,
        }
    }

    /// The event amount.
    pub fn amount(&self) -> Decimal {
        match self {
            PrincipalEvent::SpecialDamage { amount, .. } => *amount,
            PrincipalEvent::Payment { amount, .. } => *amount,
        }
    }

    /// Returns true for payment events.
    pub fn is_payment(&self) -> bool {
        matches!(self, PrincipalEvent::Payment { .. })
    }

    /// Sort key giving ascending date order with payments ahead of special
    /// damages on the same date.
    ///
    /// A same-day payment is allocated against interest accrued on the
    /// pre-damage principal; the damage then raises the principal effective
    /// that date for subsequent segments.
    pub fn sort_key(&self) -> (NaiveDate, u8) {
        let kind = if self.is_payment() { 0 } else { 1 };
        (self.date(), kind)
    }
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

    fn damage(d: &str, amount: &str) -> PrincipalEvent {
        PrincipalEvent::SpecialDamage {
            date: date(d),
            description: "damages".to_string(),
            amount: dec(amount),
        }
    }

    fn payment(d: &str, amount: &str) -> PrincipalEvent {
        PrincipalEvent::Payment {
            date: date(d),
            amount: dec(amount),
        }
    }

    #[test]
    fn test_accessors() {
        let e = damage("2024-02-01", "1000");
        assert_eq!(e.date(), date("2024-02-01"));
        assert_eq!(e.amount(), dec("1000"));
        assert!(!e.is_payment());

        let p = payment("2024-03-01", "500");
        assert_eq!(p.date(), date("2024-03-01"));
        assert!(p.is_payment());
    }

    #[test]
    fn test_sort_orders_by_date() {
        let mut events = vec![damage("2024-05-01", "200"), payment("2024-02-01", "100")];
        events.sort_by_key(PrincipalEvent::sort_key);

        assert_eq!(events[0].date(), date("2024-02-01"));
        assert_eq!(events[1].date(), date("2024-05-01"));
    }

    #[test]
    fn test_same_day_payment_sorts_before_damage() {
        let mut events = vec![damage("2024-03-01", "200"), payment("2024-03-01", "100")];
        events.sort_by_key(PrincipalEvent::sort_key);

        assert!(events[0].is_payment());
        assert!(!events[1].is_payment());
    }

    #[test]
    fn test_serde_tagged_representation() {
        let json = serde_json::to_string(&payment("2024-03-01", "500")).unwrap();
        assert!(json.contains("\"type\":\"payment\""));
        assert!(json.contains("\"date\":\"2024-03-01\""));

        let e: PrincipalEvent = serde_json::from_str(
            r#"{"type": "special_damage", "date": "2024-02-01", "description": "x-ray", "amount": "250.00"}"#,
        )
        .unwrap();
        assert_eq!(e.amount(), dec("250.00"));
        assert!(!e.is_payment());
    }
}
