//! Configuration types for the interest regime.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::models::RatePeriodSpec;

/// Metadata about the interest regime.
///
/// Identifies the statute the rates are published under and where the
/// published table came from.
#[derive(Debug, Clone, Deserialize)]
pub struct RegimeMetadata {
    /// The human-readable name of the regime.
    pub name: String,
    /// The statute the rates are published under.
    pub statute: String,
    /// The version or publication date of the rate data.
    pub version: String,
    /// URL to the official rate publication.
    pub source_url: String,
}

/// A per-jurisdiction rate file.
///
/// Each file carries the jurisdiction code, the horizon through which the
/// final period's rates remain valid, and the published period specs (start
/// date plus the two rates; end dates are derived, not supplied).
#[derive(Debug, Clone, Deserialize)]
pub struct RateTableFile {
    /// The jurisdiction code (e.g., "BC").
    pub jurisdiction: String,
    /// The last date the final period's rates are valid for.
    pub valid_until: NaiveDate,
    /// The published rate periods.
    pub periods: Vec<RatePeriodSpec>,
}
