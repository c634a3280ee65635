//! Request types for the Court Order Interest Engine API.
//!
//! This module defines the JSON request structures for the `/calculate`
//! endpoint.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::{InterestMode, PrincipalEvent};

/// Request body for the `/calculate` endpoint.
///
/// Event dates arrive as ISO-8601 strings rather than typed dates so that a
/// single malformed entry can be skipped without rejecting the whole
/// request; see [`CalculationRequest::events`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The jurisdiction whose rate table applies (e.g., "BC").
    pub jurisdiction: String,
    /// Which statutory rate to use.
    pub mode: InterestMode,
    /// The first date of the calculation range.
    pub start_date: NaiveDate,
    /// The last date of the calculation range.
    pub end_date: NaiveDate,
    /// The initial principal at the start date.
    pub principal: Decimal,
    /// Special damages incurred during the range.
    #[serde(default)]
    pub special_damages: Vec<SpecialDamageRequest>,
    /// Payments received during the range.
    #[serde(default)]
    pub payments: Vec<PaymentRequest>,
    /// Whether to include the per-diem accrual in the response.
    #[serde(default = "default_include_per_diem")]
    pub include_per_diem: bool,
}

fn default_include_per_diem() -> bool {
    true
}

/// A special damage entry in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecialDamageRequest {
    /// The date the damage was incurred, as "YYYY-MM-DD".
    pub date: String,
    /// A display description of the damage.
    #[serde(default)]
    pub description: String,
    /// The damage amount.
    pub amount: Decimal,
}

/// A payment entry in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentRequest {
    /// The date the payment was received, as "YYYY-MM-DD".
    pub date: String,
    /// The payment amount.
    pub amount: Decimal,
}

impl CalculationRequest {
    /// Converts the request's event lists into typed engine events.
    ///
    /// Partial-failure isolation: an entry with an unparseable date or a
    /// non-positive amount is skipped with a warning and the remaining
    /// events still take part in the calculation.
    pub fn events(&self) -> Vec<PrincipalEvent> {
        let mut events = Vec::with_capacity(self.special_damages.len() + self.payments.len());

        for damage in &self.special_damages {
            match parse_event_date(&damage.date) {
                Some(date) if damage.amount > Decimal::ZERO => {
                    events.push(PrincipalEvent::SpecialDamage {
                        date,
                        description: damage.description.clone(),
                        amount: damage.amount,
                    });
                }
                Some(_) => {
                    warn!(date = %damage.date, amount = %damage.amount, "skipping special damage with non-positive amount");
                }
                None => {
                    warn!(date = %damage.date, "skipping special damage with malformed date");
                }
            }
        }

        for payment in &self.payments {
            match parse_event_date(&payment.date) {
                Some(date) if payment.amount > Decimal::ZERO => {
                    events.push(PrincipalEvent::Payment {
                        date,
                        amount: payment.amount,
                    });
                }
                Some(_) => {
                    warn!(date = %payment.date, amount = %payment.amount, "skipping payment with non-positive amount");
                }
                None => {
                    warn!(date = %payment.date, "skipping payment with malformed date");
                }
            }
        }

        events
    }
}

fn parse_event_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}
