//! Marginal tax over a single progressive schedule.

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::trace;

use crate::models::BracketSchedule;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BracketTaxError {
    #[error("income must not be negative, got {0}")]
    NegativeIncome(Decimal),
}

/// Computes the tax owed on `income` under `schedule`.
///
/// Walks the brackets in order. Every bracket whose upper bound the income
/// reaches is taxed in full; the bracket the income falls into (or the
/// unbounded tail) is taxed on the remaining slice and ends the walk. The
/// result is not rounded.
///
/// # Errors
///
/// Returns [`BracketTaxError::NegativeIncome`] for income below zero.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::compute_bracket_tax;
/// use tax_core::{Bracket, BracketSchedule};
///
/// let schedule = BracketSchedule::new(
///     "example",
///     vec![Bracket::bounded(dec!(0.10), dec!(100)), Bracket::unbounded(dec!(0.20))],
/// )
/// .unwrap();
///
/// assert_eq!(compute_bracket_tax(dec!(150), &schedule), Ok(dec!(20.00)));
/// ```
pub fn compute_bracket_tax(
    income: Decimal,
    schedule: &BracketSchedule,
) -> Result<Decimal, BracketTaxError> {
    if income < Decimal::ZERO {
        return Err(BracketTaxError::NegativeIncome(income));
    }

    let mut previous_bound = Decimal::ZERO;
    let mut tax = Decimal::ZERO;

    for bracket in schedule.brackets() {
        match bracket.upper_bound {
            Some(bound) if income >= bound => {
                let slice = (bound - previous_bound) * bracket.rate;
                trace!(schedule = schedule.name(), %bound, rate = %bracket.rate, %slice, "full bracket");
                tax += slice;
                previous_bound = bound;
            }
            _ => {
                let slice = (income - previous_bound) * bracket.rate;
                trace!(schedule = schedule.name(), rate = %bracket.rate, %slice, "final bracket");
                tax += slice;
                break;
            }
        }
    }

    Ok(tax)
}
