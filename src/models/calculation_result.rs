//! Calculation result models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{DamageInterestDetail, SegmentDetail};

/// Which statutory rate a calculation uses.
///
/// # Example
///
/// ```
/// use coi_engine::models::InterestMode;
///
/// let mode: InterestMode = serde_json::from_str("\"prejudgment\"").unwrap();
/// assert_eq!(mode, InterestMode::Prejudgment);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterestMode {
    /// Interest from the cause of action to judgment.
    Prejudgment,
    /// Interest from judgment until payment.
    Postjudgment,
}

impl std::fmt::Display for InterestMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InterestMode::Prejudgment => write!(f, "prejudgment"),
            InterestMode::Postjudgment => write!(f, "postjudgment"),
        }
    }
}

/// The complete result of an interest calculation.
///
/// `details` partitions the calculation range into interest segments with
/// marker rows for events; `total` is the sum of segment interest, accrued
/// but never compounded into principal; `principal` is the ending principal
/// after damages and the principal-applied portions of payments.
///
/// Results are value objects: calling the engine twice with identical inputs
/// yields identical results.
///
/// # Example
///
/// ```
/// use coi_engine::models::CalculationResult;
/// use rust_decimal::Decimal;
///
/// let result = CalculationResult::empty(Decimal::from(10000));
/// assert!(result.details.is_empty());
/// assert_eq!(result.total, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Ordered interest segments and event marker rows.
    pub details: Vec<SegmentDetail>,
    /// Total interest accrued across all segments.
    pub total: Decimal,
    /// The ending principal (never includes accrued interest).
    pub principal: Decimal,
    /// Per-damage interest for damages within the final rate segment.
    pub final_period_damage_interest_details: Vec<DamageInterestDetail>,
}

impl CalculationResult {
    /// The empty result used for degenerate inputs (inverted range,
    /// non-positive principal): zero rows, zero total, principal unchanged.
    pub fn empty(principal: Decimal) -> Self {
        Self {
            details: Vec::new(),
            total: Decimal::ZERO,
            principal,
            final_period_damage_interest_details: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_mode_serialization() {
        assert_eq!(
            serde_json::to_string(&InterestMode::Prejudgment).unwrap(),
            "\"prejudgment\""
        );
        assert_eq!(
            serde_json::to_string(&InterestMode::Postjudgment).unwrap(),
            "\"postjudgment\""
        );
    }

    #[test]
    fn test_mode_display() {
        assert_eq!(InterestMode::Prejudgment.to_string(), "prejudgment");
        assert_eq!(InterestMode::Postjudgment.to_string(), "postjudgment");
    }

    #[test]
    fn test_empty_result() {
        let principal = Decimal::from_str("10000").unwrap();
        let result = CalculationResult::empty(principal);

        assert!(result.details.is_empty());
        assert_eq!(result.total, Decimal::ZERO);
        assert_eq!(result.principal, principal);
        assert!(result.final_period_damage_interest_details.is_empty());
    }

    #[test]
    fn test_result_serde_round_trip() {
        let result = CalculationResult::empty(Decimal::from_str("10000").unwrap());
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"details\":[]"));
        assert!(json.contains("\"total\":\"0\""));

        let back: CalculationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
