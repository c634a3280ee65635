//! The interest period calculator.
//!
//! Top-level entry point tying the rate table, day counter, segmentation
//! engine and payment allocator together for one calculation mode.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::{
    CalculationResult, InterestMode, PrincipalEvent, RatePeriodTable, SegmentDetail,
};

use super::segmentation::build_segments;

/// Computes interest over `[start_date, end_date]` on `initial_principal`.
///
/// The calculation is a pure function of its inputs: identical arguments
/// produce identical results, so callers may recompute on every input
/// change.
///
/// # Errors
///
/// Returns [`EngineError::RatesUnavailable`] when the rate table has no
/// periods at all, a data problem the caller must surface rather than a
/// silent zero. User-input edge cases (an inverted range, a non-positive
/// principal) return an empty zero-total result instead.
///
/// # Example
///
/// ```
/// use coi_engine::calculation::compute;
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
/// let result = compute(
///     InterestMode::Prejudgment,
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
///     Decimal::from(10000),
///     &table,
///     &[],
/// ).unwrap();
///
/// assert_eq!(result.total, Decimal::from_str("248.63").unwrap());
/// ```
pub fn compute(
    mode: InterestMode,
    start_date: NaiveDate,
    end_date: NaiveDate,
    initial_principal: Decimal,
    table: &RatePeriodTable,
    events: &[PrincipalEvent],
) -> EngineResult<CalculationResult> {
    if table.is_empty() {
        return Err(EngineError::RatesUnavailable {
            jurisdiction: table.jurisdiction().to_string(),
        });
    }

    if end_date < start_date || initial_principal <= Decimal::ZERO {
        return Ok(CalculationResult::empty(initial_principal));
    }

    let events = applicable_events(mode, start_date, end_date, events);
    let outcome = build_segments(mode, start_date, end_date, initial_principal, table, &events);
    let total = outcome.details.iter().map(SegmentDetail::interest).sum();

    Ok(CalculationResult {
        details: outcome.details,
        total,
        principal: outcome.final_principal,
        final_period_damage_interest_details: outcome.final_period_damage_details,
    })
}

/// Filters the caller's events down to the ones this calculation applies,
/// sorted ascending with same-day payments ahead of special damages.
///
/// Dropped, each leaving a log line rather than aborting the calculation:
/// non-positive amounts, special damages in postjudgment mode, and events
/// outside the range. An event dated exactly at the start is treated as
/// already folded into the caller's initial principal and must not be
/// applied a second time.
fn applicable_events(
    mode: InterestMode,
    start_date: NaiveDate,
    end_date: NaiveDate,
    events: &[PrincipalEvent],
) -> Vec<PrincipalEvent> {
    let mut applicable: Vec<PrincipalEvent> = events
        .iter()
        .filter(|event| {
            if event.amount() <= Decimal::ZERO {
                warn!(date = %event.date(), amount = %event.amount(), "skipping event with non-positive amount");
                return false;
            }
            if !event.is_payment() && mode == InterestMode::Postjudgment {
                warn!(date = %event.date(), "skipping special damage in postjudgment mode");
                return false;
            }
            if event.date() == start_date {
                debug!(date = %event.date(), "event at range start treated as part of initial principal");
                return false;
            }
            if event.date() < start_date || event.date() > end_date {
                warn!(date = %event.date(), "skipping event outside calculation range");
                return false;
            }
            true
        })
        .cloned()
        .collect();

    applicable.sort_by_key(PrincipalEvent::sort_key);
    applicable
}
