//! Rate period models.
//!
//! This module defines the [`RatePeriod`] and [`RatePeriodTable`] types that
//! represent a jurisdiction's published interest rates over time. Periods are
//! contiguous and non-overlapping; each carries a prejudgment and a
//! postjudgment rate expressed in percent.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::InterestMode;

/// A single rate period as published by the rate-data provider.
///
/// Only the start date is supplied; the inclusive end date of each period is
/// derived from the start of the following period (or from the table's
/// validity horizon for the final period).
///
/// # Example
///
/// ```
/// use coi_engine::models::RatePeriodSpec;
///
/// let spec: RatePeriodSpec = serde_json::from_str(
///     r#"{"start": "2024-01-01", "prejudgment": "5.45", "postjudgment": "7.45"}"#,
/// ).unwrap();
/// assert_eq!(spec.prejudgment.to_string(), "5.45");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatePeriodSpec {
    /// The first date the rates apply to.
    pub start: NaiveDate,
    /// The prejudgment interest rate in percent.
    pub prejudgment: Decimal,
    /// The postjudgment interest rate in percent.
    pub postjudgment: Decimal,
}

/// A rate period with its derived inclusive end date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatePeriod {
    /// The first date this period covers.
    pub start_date: NaiveDate,
    /// The last date this period covers (inclusive).
    pub end_date: NaiveDate,
    /// The prejudgment interest rate in percent.
    pub prejudgment_rate: Decimal,
    /// The postjudgment interest rate in percent.
    pub postjudgment_rate: Decimal,
}

impl RatePeriod {
    /// Returns true if `date` falls within this period (inclusive both ends).
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Returns the rate for the given calculation mode.
    pub fn rate(&self, mode: InterestMode) -> Decimal {
        match mode {
            InterestMode::Prejudgment => self.prejudgment_rate,
            InterestMode::Postjudgment => self.postjudgment_rate,
        }
    }
}

/// A jurisdiction's sorted table of rate periods.
///
/// Lookups degrade gracefully: a date with no covering period yields a rate
/// of zero rather than an error, because historical rate data may have gaps.
/// An entirely empty table is the distinguished "rates unavailable" condition
/// and is rejected by the calculator before any lookup happens.
///
/// # Example
///
/// ```
/// use coi_engine::models::{InterestMode, RatePeriodSpec, RatePeriodTable};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let table = RatePeriodTable::from_specs(
///     "BC",
///     vec![
///         RatePeriodSpec {
///             start: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///             prejudgment: Decimal::from_str("5.45").unwrap(),
///             postjudgment: Decimal::from_str("7.45").unwrap(),
///         },
///         RatePeriodSpec {
///             start: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
///             prejudgment: Decimal::from_str("4.95").unwrap(),
///             postjudgment: Decimal::from_str("6.95").unwrap(),
///         },
///     ],
///     NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
/// );
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
/// assert_eq!(
///     table.lookup_rate(date, InterestMode::Prejudgment),
///     Decimal::from_str("5.45").unwrap(),
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatePeriodTable {
    jurisdiction: String,
    periods: Vec<RatePeriod>,
}

impl RatePeriodTable {
    /// Builds a table from published period specs.
    ///
    /// Specs are sorted ascending by start date. Each period's inclusive end
    /// date is the day before the next period's start; the final period ends
    /// at `valid_until`, the horizon supplied alongside the published table.
    pub fn from_specs(
        jurisdiction: impl Into<String>,
        mut specs: Vec<RatePeriodSpec>,
        valid_until: NaiveDate,
    ) -> Self {
        specs.sort_by_key(|s| s.start);

        let mut periods = Vec::with_capacity(specs.len());
        for (i, spec) in specs.iter().enumerate() {
            let end_date = match specs.get(i + 1) {
                Some(next) => next.start.pred_opt().unwrap_or(next.start),
                None => valid_until,
            };
            periods.push(RatePeriod {
                start_date: spec.start,
                end_date,
                prejudgment_rate: spec.prejudgment,
                postjudgment_rate: spec.postjudgment,
            });
        }

        Self {
            jurisdiction: jurisdiction.into(),
            periods,
        }
    }

    /// The jurisdiction code this table belongs to (e.g., "BC").
    pub fn jurisdiction(&self) -> &str {
        &self.jurisdiction
    }

    /// The derived rate periods, sorted ascending by start date.
    pub fn periods(&self) -> &[RatePeriod] {
        &self.periods
    }

    /// Returns true if the table contains no rate periods at all.
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// Finds the period covering `date`, if any.
    pub fn lookup_period(&self, date: NaiveDate) -> Option<&RatePeriod> {
        self.periods.iter().find(|p| p.contains(date))
    }

    /// Looks up the rate in effect on `date` for the given mode.
    ///
    /// Returns zero when no period covers the date (before the first period,
    /// after the validity horizon, or an empty table). The calculation then
    /// degrades to zero interest for that span rather than failing.
    pub fn lookup_rate(&self, date: NaiveDate, mode: InterestMode) -> Decimal {
        self.lookup_period(date)
            .map(|p| p.rate(mode))
            .unwrap_or(Decimal::ZERO)
    }

    /// Period start dates strictly inside `(start, end)`, ascending.
    ///
    /// These are the dates where the applicable rate changes within a
    /// calculation range. A boundary falling exactly on `end` is excluded:
    /// the end date of a calculation does not accrue, so a rate taking
    /// effect that day can never apply.
    pub fn boundaries_within(&self, start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
        self.periods
            .iter()
            .map(|p| p.start_date)
            .filter(|d| *d > start && *d < end)
            .collect()
    }
}
