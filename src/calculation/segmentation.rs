//! The segmentation engine.
//!
//! Partitions a calculation range into segments of constant rate and
//! constant principal. Breakpoints are the rate-period boundaries inside the
//! range plus the event dates; every breakpoint takes effect at the start of
//! its date, so the prior segment closes the day before and the breakpoint
//! date accrues at the new rate and principal.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::warn;

use crate::models::{
    DamageInterestDetail, InterestMode, InterestSegment, PaymentMarker, PrincipalEvent,
    RatePeriodTable, SegmentDetail, SpecialDamageMarker,
};

use super::day_count::days_between;
use super::interest::segment_interest;
use super::payment_allocation::allocate_payment;

/// The output of a segmentation walk.
#[derive(Debug, Clone)]
pub struct SegmentationOutcome {
    /// Interest segments interleaved with event marker rows, in date order.
    pub details: Vec<SegmentDetail>,
    /// The principal after all events have been applied.
    pub final_principal: Decimal,
    /// Per-damage interest for damages within the final rate segment.
    pub final_period_damage_details: Vec<DamageInterestDetail>,
}

/// Walks `[start_date, end_date]` and emits one interest segment per
/// contiguous sub-range sharing a single rate and principal, with marker
/// rows wherever an event changed the principal.
///
/// `events` must already be filtered to the range and mode and sorted
/// ascending with the same-day payment-before-damage tie-break; the
/// calculator in [`super::compute`] does this.
///
/// Accrued interest is tracked beside the principal and never folded into
/// it. A payment settles accrued interest first and only the remainder
/// reduces principal; a special damage steps the principal up from its date.
pub fn build_segments(
    mode: InterestMode,
    start_date: NaiveDate,
    end_date: NaiveDate,
    initial_principal: Decimal,
    table: &RatePeriodTable,
    events: &[PrincipalEvent],
) -> SegmentationOutcome {
    let mut details = Vec::new();
    let mut cursor = start_date;
    let mut principal = initial_principal;
    let mut accrued_unpaid = Decimal::ZERO;

    // Rate boundaries strictly inside the range, then event dates. Event
    // dates may coincide with each other or with a boundary; the set keeps
    // each breakpoint date once.
    let mut breakpoints: BTreeSet<NaiveDate> =
        table.boundaries_within(start_date, end_date).into_iter().collect();
    for event in events {
        breakpoints.insert(event.date());
    }

    for breakpoint in breakpoints {
        if breakpoint > cursor {
            if let Some(segment) =
                close_segment(mode, table, cursor, breakpoint, principal)
            {
                accrued_unpaid += segment.interest;
                details.push(SegmentDetail::Interest(segment));
            }
            cursor = breakpoint;
        }

        // Events on the breakpoint date, payments first (input order).
        for event in events.iter().filter(|e| e.date() == breakpoint) {
            match event {
                PrincipalEvent::Payment { date, amount } => {
                    let allocation = allocate_payment(accrued_unpaid, principal, *amount);
                    accrued_unpaid -= allocation.interest_applied;
                    principal = allocation.remaining_principal;
                    details.push(SegmentDetail::Payment(PaymentMarker {
                        date: *date,
                        amount: *amount,
                        interest_applied: allocation.interest_applied,
                        principal_applied: allocation.principal_applied,
                    }));
                }
                PrincipalEvent::SpecialDamage {
                    date,
                    description,
                    amount,
                } => {
                    principal += *amount;
                    details.push(SegmentDetail::SpecialDamage(SpecialDamageMarker {
                        date: *date,
                        description: description.clone(),
                        amount: *amount,
                    }));
                }
            }
        }
    }

    // The remainder of the range at the then-current rate and principal.
    // Displayed through the calculation end date, which itself does not
    // accrue; empty when an event landed exactly on the end date.
    let days = days_between(cursor, end_date);
    if days > 0 {
        let rate = rate_at(mode, table, cursor);
        details.push(SegmentDetail::Interest(InterestSegment {
            start_date: cursor,
            end_date,
            rate,
            principal,
            days,
            interest: segment_interest(principal, rate, days, cursor),
        }));
    }

    let final_period_damage_details =
        final_period_damages(mode, start_date, end_date, table, events);

    SegmentationOutcome {
        details,
        final_principal: principal,
        final_period_damage_details,
    }
}

/// Emits the segment from `cursor` up to the day before `breakpoint`, or
/// `None` for a zero-day span.
fn close_segment(
    mode: InterestMode,
    table: &RatePeriodTable,
    cursor: NaiveDate,
    breakpoint: NaiveDate,
    principal: Decimal,
) -> Option<InterestSegment> {
    let days = days_between(cursor, breakpoint);
    if days <= 0 {
        return None;
    }

    let rate = rate_at(mode, table, cursor);
    Some(InterestSegment {
        start_date: cursor,
        end_date: breakpoint.pred_opt().unwrap_or(breakpoint),
        rate,
        principal,
        days,
        interest: segment_interest(principal, rate, days, cursor),
    })
}

/// The rate in effect on `date`, degrading to zero with a warning when no
/// period covers it.
fn rate_at(mode: InterestMode, table: &RatePeriodTable, date: NaiveDate) -> Decimal {
    match table.lookup_period(date) {
        Some(period) => period.rate(mode),
        None => {
            warn!(
                jurisdiction = table.jurisdiction(),
                %date,
                "no rate period covers date, treating rate as 0%"
            );
            Decimal::ZERO
        }
    }
}

/// Pro-rates each special damage dated within the final rate segment from
/// its date to the calculation end.
///
/// Additive bookkeeping for display only: the aggregate total already
/// reflects the stepped principal, so these amounts are never added to it.
fn final_period_damages(
    mode: InterestMode,
    start_date: NaiveDate,
    end_date: NaiveDate,
    table: &RatePeriodTable,
    events: &[PrincipalEvent],
) -> Vec<DamageInterestDetail> {
    let final_span_start = table
        .boundaries_within(start_date, end_date)
        .last()
        .copied()
        .unwrap_or(start_date);

    events
        .iter()
        .filter_map(|event| match event {
            PrincipalEvent::SpecialDamage {
                date,
                description,
                amount,
            } if *date >= final_span_start => {
                let days = days_between(*date, end_date);
                let rate = table.lookup_rate(*date, mode);
                Some(DamageInterestDetail {
                    date: *date,
                    description: description.clone(),
                    amount: *amount,
                    rate,
                    days,
                    interest: segment_interest(*amount, rate, days, *date),
                })
            }
            _ => None,
        })
        .collect()
}
