//! Calculation logic for the Court Order Interest Engine.
//!
//! This module contains the calculation pipeline: day counting, the
//! simple-interest formula, the segmentation engine that partitions a date
//! range at rate boundaries and event dates, payment allocation under the
//! interest-first rule, the top-level interest period calculator, and the
//! per-diem accrual on the final balance.

mod day_count;
mod interest;
mod interest_period;
mod payment_allocation;
mod per_diem;
mod segmentation;

pub use day_count::{days_between, days_in_year, divisor_for, is_leap_year};
pub use interest::{round_currency, segment_interest};
pub use interest_period::compute;
pub use payment_allocation::{PaymentAllocation, allocate_payment};
pub use per_diem::per_diem;
pub use segmentation::{SegmentationOutcome, build_segments};
