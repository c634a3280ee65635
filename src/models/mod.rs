//! Core data models for the Court Order Interest Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod event;
mod rate_period;
mod segment;

pub use calculation_result::{CalculationResult, InterestMode};
pub use event::PrincipalEvent;
pub use rate_period::{RatePeriod, RatePeriodSpec, RatePeriodTable};
pub use segment::{
    DamageInterestDetail, InterestSegment, PaymentMarker, SegmentDetail, SpecialDamageMarker,
};
