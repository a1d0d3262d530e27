//! Builds a [`TaxReport`] from a gross income and a [`ScheduleSet`].
//!
//! # Report Structure
//!
//! | Line | Description |
//! |------|-------------|
//! | 1    | Gross income, rounded |
//! | 2    | Federal tax over the federal schedule, rounded |
//! | 3    | State tax over the state schedule, rounded |
//! | 4    | Medicare tax over the medicare schedule, rounded |
//! | 5    | Social security tax over the social security schedule, rounded |
//! | 6    | Total tax (Line 2 + Line 3 + Line 4 + Line 5) |
//! | 7    | Net income (Line 1 - Line 6) |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tax_core::ScheduleSet;
//! use tax_core::calculations::TaxReportBuilder;
//!
//! let schedules = ScheduleSet::reference();
//! let report = TaxReportBuilder::new(&schedules).build(dec!(50000.00)).unwrap();
//!
//! assert_eq!(report.total_tax, dec!(13229.47));
//! assert_eq!(report.net_income, dec!(36770.53));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;

use crate::calculations::bracket::{BracketTaxError, compute_bracket_tax};
use crate::calculations::common::round_half_up;
use crate::calculations::income::MAX_INCOME;
use crate::models::{ScheduleKind, ScheduleSet, TaxReport};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaxReportError {
    /// Income was negative; no report is produced.
    #[error("invalid income {0}: must be zero or greater")]
    InvalidIncome(Decimal),

    #[error("invalid income {0}: exceeds the maximum of {MAX_INCOME}")]
    IncomeTooLarge(Decimal),

    #[error(transparent)]
    Bracket(#[from] BracketTaxError),
}

/// Runs the bracket calculator over each schedule of a [`ScheduleSet`].
#[derive(Debug, Clone)]
pub struct TaxReportBuilder<'a> {
    schedules: &'a ScheduleSet,
}

impl<'a> TaxReportBuilder<'a> {
    pub fn new(schedules: &'a ScheduleSet) -> Self {
        Self { schedules }
    }

    /// Computes every report line for `income`.
    ///
    /// # Errors
    ///
    /// Returns [`TaxReportError::InvalidIncome`] for negative income and
    /// [`TaxReportError::IncomeTooLarge`] above [`MAX_INCOME`].
    pub fn build(
        &self,
        income: Decimal,
    ) -> Result<TaxReport, TaxReportError> {
        if income < Decimal::ZERO {
            return Err(TaxReportError::InvalidIncome(income));
        }
        if income > MAX_INCOME {
            return Err(TaxReportError::IncomeTooLarge(income));
        }

        let gross_income = round_half_up(income);
        let federal_tax = self.schedule_tax(ScheduleKind::Federal, income)?;
        let state_tax = self.schedule_tax(ScheduleKind::State, income)?;
        let medicare_tax = self.schedule_tax(ScheduleKind::Medicare, income)?;
        let social_security_tax = self.schedule_tax(ScheduleKind::SocialSecurity, income)?;

        let total_tax = self.total_tax(&[federal_tax, state_tax, medicare_tax, social_security_tax]);
        let net_income = self.net_income(gross_income, total_tax);

        debug!(%gross_income, %total_tax, %net_income, "built tax report");

        Ok(TaxReport {
            gross_income,
            federal_tax,
            state_tax,
            medicare_tax,
            social_security_tax,
            total_tax,
            net_income,
        })
    }

    /// Tax owed under one schedule, rounded.
    fn schedule_tax(
        &self,
        kind: ScheduleKind,
        income: Decimal,
    ) -> Result<Decimal, TaxReportError> {
        let tax = compute_bracket_tax(income, self.schedules.get(kind))?;
        Ok(round_half_up(tax))
    }

    /// Sum of the already rounded tax lines.
    fn total_tax(
        &self,
        taxes: &[Decimal],
    ) -> Decimal {
        round_half_up(taxes.iter().copied().sum())
    }

    fn net_income(
        &self,
        gross_income: Decimal,
        total_tax: Decimal,
    ) -> Decimal {
        round_half_up(gross_income - total_tax)
    }
}

/// Builds a report against [`ScheduleSet::reference`].
pub fn build_tax_report(income: Decimal) -> Result<TaxReport, TaxReportError> {
    TaxReportBuilder::new(&ScheduleSet::reference()).build(income)
}
