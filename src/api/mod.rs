//! HTTP API module for the Court Order Interest Engine.
//!
//! This module provides the REST API endpoint for calculating court order
//! interest on a judgment.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, PaymentRequest, SpecialDamageRequest};
pub use response::{ApiError, CalculationResponse};
pub use state::AppState;
