use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::tax_category::TaxCategory;

/// Result of a tax estimate, every amount rounded to two decimal places.
///
/// `total_tax` is the sum of the four tax lines and `net_income` is
/// `gross_income - total_tax`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxReport {
    pub gross_income: Decimal,
    pub federal_tax: Decimal,
    pub state_tax: Decimal,
    pub medicare_tax: Decimal,
    pub social_security_tax: Decimal,
    pub total_tax: Decimal,
    pub net_income: Decimal,
}

impl TaxReport {
    pub fn amount(
        &self,
        category: TaxCategory,
    ) -> Decimal {
        match category {
            TaxCategory::GrossIncome => self.gross_income,
            TaxCategory::FederalTax => self.federal_tax,
            TaxCategory::StateTax => self.state_tax,
            TaxCategory::MedicareTax => self.medicare_tax,
            TaxCategory::SocialSecurityTax => self.social_security_tax,
            TaxCategory::TotalTax => self.total_tax,
            TaxCategory::NetIncome => self.net_income,
        }
    }

    /// The seven report lines in category order.
    pub fn lines(&self) -> impl Iterator<Item = (TaxCategory, Decimal)> + '_ {
        TaxCategory::all()
            .iter()
            .map(move |category| (*category, self.amount(*category)))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn sample() -> TaxReport {
        TaxReport {
            gross_income: dec!(1000.00),
            federal_tax: dec!(100.00),
            state_tax: dec!(35.40),
            medicare_tax: dec!(14.50),
            social_security_tax: dec!(62.00),
            total_tax: dec!(211.90),
            net_income: dec!(788.10),
        }
    }

    #[test]
    fn lines_follow_category_order() {
        let labels: Vec<_> = sample().lines().map(|(c, _)| c.label()).collect();

        assert_eq!(
            labels,
            vec![
                "Gross Income",
                "Federal Tax",
                "State Tax",
                "Medicare Tax",
                "Social Security Tax",
                "Total Tax",
                "Net Income",
            ]
        );
    }

    #[test]
    fn lines_pair_each_category_with_its_amount() {
        let report = sample();
        let lines: Vec<_> = report.lines().collect();

        assert_eq!(lines[2], (TaxCategory::StateTax, dec!(35.40)));
        assert_eq!(lines[6], (TaxCategory::NetIncome, dec!(788.10)));
    }

    #[test]
    fn report_serializes_with_snake_case_fields() {
        let json = serde_json::to_value(sample()).unwrap();

        assert_eq!(json["social_security_tax"], "62.00");
        assert_eq!(json["net_income"], "788.10");
    }
}
