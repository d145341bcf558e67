use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{LoanError, Result};

/// unit the loan term is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TermUnit {
    #[default]
    Months,
    Years,
}

impl TermUnit {
    /// convert a term value in this unit to months
    pub fn to_months(self, term_value: u32) -> u32 {
        match self {
            TermUnit::Months => term_value,
            TermUnit::Years => term_value.saturating_mul(12),
        }
    }
}

/// loan parameters, rebuilt from widget input on every change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanParameters {
    pub principal: Money,
    pub annual_rate: Rate,
    pub term_value: u32,
    pub term_unit: TermUnit,
}

impl LoanParameters {
    pub fn new(principal: Money, annual_rate: Rate, term_value: u32, term_unit: TermUnit) -> Self {
        Self {
            principal,
            annual_rate,
            term_value,
            term_unit,
        }
    }

    pub fn builder() -> LoanParametersBuilder {
        LoanParametersBuilder::new()
    }

    /// total number of monthly installments
    pub fn term_months(&self) -> u32 {
        self.term_unit.to_months(self.term_value)
    }

    /// check the preconditions of the EMI calculation
    pub fn validate(&self) -> Result<()> {
        if !self.principal.is_positive() {
            return Err(LoanError::InvalidPrincipal {
                amount: self.principal,
            });
        }
        if self.annual_rate.is_negative() {
            return Err(LoanError::InvalidInterestRate {
                rate: self.annual_rate,
            });
        }
        if self.term_value == 0 {
            return Err(LoanError::InvalidTerm {
                term_value: self.term_value,
            });
        }
        Ok(())
    }
}

/// builder for loan parameters
#[derive(Debug, Default)]
pub struct LoanParametersBuilder {
    principal: Option<Money>,
    annual_rate: Option<Rate>,
    term_value: Option<u32>,
    term_unit: TermUnit,
}

impl LoanParametersBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn principal(mut self, principal: Money) -> Self {
        self.principal = Some(principal);
        self
    }

    /// annual rate as a percentage (8.5 for 8.5%)
    pub fn rate_percent(mut self, percent: Decimal) -> Self {
        self.annual_rate = Some(Rate::from_percent(percent));
        self
    }

    pub fn rate(mut self, rate: Rate) -> Self {
        self.annual_rate = Some(rate);
        self
    }

    pub fn term_months(mut self, months: u32) -> Self {
        self.term_value = Some(months);
        self.term_unit = TermUnit::Months;
        self
    }

    pub fn term_years(mut self, years: u32) -> Self {
        self.term_value = Some(years);
        self.term_unit = TermUnit::Years;
        self
    }

    pub fn build(self) -> Result<LoanParameters> {
        let params = LoanParameters {
            principal: self
                .principal
                .ok_or(LoanError::MissingParameter { name: "principal" })?,
            annual_rate: self
                .annual_rate
                .ok_or(LoanError::MissingParameter { name: "annual_rate" })?,
            term_value: self
                .term_value
                .ok_or(LoanError::MissingParameter { name: "term" })?,
            term_unit: self.term_unit,
        };
        params.validate()?;
        Ok(params)
    }
}

/// monthly payment and aggregate totals for a loan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LoanResult {
    pub monthly_payment: Money,
    pub total_interest: Money,
    pub total_payment: Money,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_term_unit_conversion() {
        assert_eq!(TermUnit::Months.to_months(18), 18);
        assert_eq!(TermUnit::Years.to_months(20), 240);
        assert_eq!(TermUnit::Years.to_months(u32::MAX), u32::MAX);
    }

    #[test]
    fn test_builder() {
        let params = LoanParameters::builder()
            .principal(Money::from_major(1_200_000))
            .rate_percent(dec!(8.5))
            .term_years(20)
            .build()
            .unwrap();

        assert_eq!(params.term_unit, TermUnit::Years);
        assert_eq!(params.term_months(), 240);
        assert_eq!(params.annual_rate.as_decimal(), dec!(0.085));
    }

    #[test]
    fn test_builder_missing_field() {
        let err = LoanParameters::builder()
            .principal(Money::from_major(1_000))
            .term_months(12)
            .build()
            .unwrap_err();
        assert_eq!(err, LoanError::MissingParameter { name: "annual_rate" });
    }

    #[test]
    fn test_validate_rejects_bad_inputs() {
        let good = LoanParameters::new(Money::from_major(1_000), Rate::ZERO, 1, TermUnit::Months);
        assert!(good.validate().is_ok());

        let zero_principal = LoanParameters { principal: Money::ZERO, ..good };
        assert!(matches!(zero_principal.validate(), Err(LoanError::InvalidPrincipal { .. })));

        let negative_rate = LoanParameters { annual_rate: Rate::from_percent(dec!(-0.5)), ..good };
        assert!(matches!(negative_rate.validate(), Err(LoanError::InvalidInterestRate { .. })));

        let zero_term = LoanParameters { term_value: 0, ..good };
        assert_eq!(zero_term.validate(), Err(LoanError::InvalidTerm { term_value: 0 }));
    }

    #[test]
    fn test_term_unit_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&TermUnit::Years).unwrap(), "\"years\"");
        let unit: TermUnit = serde_json::from_str("\"months\"").unwrap();
        assert_eq!(unit, TermUnit::Months);
    }
}
