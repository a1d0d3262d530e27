use std::fmt;

use serde::{Deserialize, Serialize};

/// A labeled line of a [`TaxReport`](super::TaxReport), in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxCategory {
    GrossIncome,
    FederalTax,
    StateTax,
    MedicareTax,
    SocialSecurityTax,
    TotalTax,
    NetIncome,
}

impl TaxCategory {
    pub fn all() -> &'static [TaxCategory] {
        &[
            TaxCategory::GrossIncome,
            TaxCategory::FederalTax,
            TaxCategory::StateTax,
            TaxCategory::MedicareTax,
            TaxCategory::SocialSecurityTax,
            TaxCategory::TotalTax,
            TaxCategory::NetIncome,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaxCategory::GrossIncome => "Gross Income",
            TaxCategory::FederalTax => "Federal Tax",
            TaxCategory::StateTax => "State Tax",
            TaxCategory::MedicareTax => "Medicare Tax",
            TaxCategory::SocialSecurityTax => "Social Security Tax",
            TaxCategory::TotalTax => "Total Tax",
            TaxCategory::NetIncome => "Net Income",
        }
    }
}

impl fmt::Display for TaxCategory {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.label())
    }
}
