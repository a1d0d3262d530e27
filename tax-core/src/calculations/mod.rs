//! Tax calculations over progressive bracket schedules.
//!
//! [`compute_bracket_tax`] handles one schedule; [`TaxReportBuilder`]
//! combines the federal, state, medicare and social security schedules into
//! a rounded [`TaxReport`](crate::TaxReport).

pub mod bracket;
pub mod common;
pub mod income;
pub mod report;

pub use bracket::{BracketTaxError, compute_bracket_tax};
pub use income::{IncomeError, MAX_INCOME, parse_income};
pub use report::{TaxReportBuilder, TaxReportError, build_tax_report};
