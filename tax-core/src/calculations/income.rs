//! Validation of user-entered income.

use rust_decimal::Decimal;
use thiserror::Error;

/// Largest accepted income (one quadrillion). Keeps every report line
/// representable with two fractional digits.
pub const MAX_INCOME: Decimal = Decimal::from_parts(0xA4C6_8000, 0x38D7E, 0, false, 0);

#[derive(Debug, Error)]
pub enum IncomeError {
    #[error("income is required")]
    Missing,

    #[error("invalid income '{input}': {source}")]
    NotANumber {
        input: String,
        #[source]
        source: rust_decimal::Error,
    },

    #[error("income must be zero or greater, got {0}")]
    Negative(Decimal),

    #[error("income {0} exceeds the maximum of {MAX_INCOME}")]
    TooLarge(Decimal),
}

/// Normalizes input: trims whitespace, drops a leading `$` and comma thousands separators.
fn normalize_income_input(s: &str) -> String {
    let trimmed = s.trim();
    trimmed
        .strip_prefix('$')
        .unwrap_or(trimmed)
        .trim()
        .replace(',', "")
}

/// Parses an income string into a non-negative [`Decimal`].
///
/// Accepts `"50000"`, `"50,000.00"` and `"$50,000"`.
///
/// # Errors
///
/// Returns [`IncomeError::Missing`] for empty input,
/// [`IncomeError::NotANumber`] when the input is not a decimal, and
/// [`IncomeError::Negative`] for values below zero and
/// [`IncomeError::TooLarge`] above [`MAX_INCOME`].
pub fn parse_income(s: &str) -> Result<Decimal, IncomeError> {
    let normalized = normalize_income_input(s);
    if normalized.is_empty() {
        return Err(IncomeError::Missing);
    }

    let income: Decimal = normalized.parse().map_err(|e| {
        tracing::warn!(input = %s, "invalid income: {}", e);
        IncomeError::NotANumber {
            input: s.to_string(),
            source: e,
        }
    })?;

    if income < Decimal::ZERO {
        return Err(IncomeError::Negative(income));
    }
    if income > MAX_INCOME {
        return Err(IncomeError::TooLarge(income));
    }

    Ok(income)
}
