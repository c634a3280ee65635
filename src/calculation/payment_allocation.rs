//! Payment allocation under simple-interest semantics.
//!
//! A payment always extinguishes outstanding accrued interest before it
//! reduces principal. Unpaid interest is tracked as a separate running total
//! and is never added to principal, so interest never earns interest.

use rust_decimal::Decimal;

/// The split of a payment between accrued interest and principal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentAllocation {
    /// The portion applied to accrued-but-unpaid interest.
    pub interest_applied: Decimal,
    /// The portion applied to principal.
    pub principal_applied: Decimal,
    /// The principal remaining after the payment. Negative when the payment
    /// exceeds the balance: a credit, not an error.
    pub remaining_principal: Decimal,
}

/// Splits `payment_amount` against the interest accrued since the last
/// payment (or the calculation start), interest first.
///
/// # Example
///
/// ```
/// use coi_engine::calculation::allocate_payment;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s| Decimal::from_str(s).unwrap();
/// let allocation = allocate_payment(dec("200"), dec("10000"), dec("500"));
/// assert_eq!(allocation.interest_applied, dec("200"));
/// assert_eq!(allocation.principal_applied, dec("300"));
/// assert_eq!(allocation.remaining_principal, dec("9700"));
/// ```
pub fn allocate_payment(
    accrued_interest: Decimal,
    running_principal: Decimal,
    payment_amount: Decimal,
) -> PaymentAllocation {
    let interest_applied = payment_amount.min(accrued_interest.max(Decimal::ZERO));
    let principal_applied = payment_amount - interest_applied;

    PaymentAllocation {
        interest_applied,
        principal_applied,
        remaining_principal: running_principal - principal_applied,
    }
}
