use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{LoanError, Result};
use crate::input::Field;
use crate::types::{LoanParameters, TermUnit};

/// calculator widget configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    pub defaults: DefaultInputs,
    pub principal_bounds: SliderBounds,
    pub rate_bounds: SliderBounds,
    pub term_months_bounds: SliderBounds,
    pub term_years_bounds: SliderBounds,
    pub labels: DisplayLabels,
    pub palette: Palette,
}

/// values shown before the user touches anything
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultInputs {
    pub principal: Money,
    pub rate_percent: Decimal,
    pub term_value: u32,
    pub term_unit: TermUnit,
}

/// range slider bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliderBounds {
    pub min: Decimal,
    pub max: Decimal,
    pub step: Decimal,
}

/// captions for results, inputs and chart legend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayLabels {
    pub principal: String,
    pub interest: String,
    pub monthly_emi: String,
    pub total_interest: String,
    pub total_amount: String,
    pub loan_amount: String,
    pub interest_rate: String,
    pub loan_tenure: String,
    pub apply_now: String,
}

/// chart and slider colours
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub principal: String,
    pub interest: String,
    pub track: String,
}

impl SliderBounds {
    pub const fn new(min: Decimal, max: Decimal, step: Decimal) -> Self {
        Self { min, max, step }
    }

    /// clamp into `[min, max]`
    pub fn clamp(&self, value: Decimal) -> Decimal {
        value.max(self.min).min(self.max)
    }

    /// snap to the nearest step from `min`, then clamp
    pub fn snap(&self, value: Decimal) -> Decimal {
        let clamped = self.clamp(value);
        if self.step <= Decimal::ZERO {
            return clamped;
        }
        clamped
            .checked_sub(self.min)
            .and_then(|offset| offset.checked_div(self.step))
            .and_then(|steps| steps.round().checked_mul(self.step))
            .and_then(|offset| self.min.checked_add(offset))
            .map_or(clamped, |snapped| self.clamp(snapped))
    }

    fn validate(&self, name: &str) -> Result<()> {
        if self.min > self.max {
            return Err(LoanError::InvalidConfiguration {
                message: format!("{} bounds inverted: min {} > max {}", name, self.min, self.max),
            });
        }
        if self.step <= Decimal::ZERO {
            return Err(LoanError::InvalidConfiguration {
                message: format!("{} step must be positive, got {}", name, self.step),
            });
        }
        // (max - min) / step must be representable for snapping
        let positions = self
            .max
            .checked_sub(self.min)
            .and_then(|range| range.checked_div(self.step));
        if positions.is_none() {
            return Err(LoanError::InvalidConfiguration {
                message: format!(
                    "{} step {} is too fine for range {}..{}",
                    name, self.step, self.min, self.max
                ),
            });
        }
        Ok(())
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            defaults: DefaultInputs::default(),
            principal_bounds: SliderBounds::new(dec!(100000), dec!(10000000), dec!(100000)),
            rate_bounds: SliderBounds::new(dec!(1), dec!(30), dec!(0.01)),
            term_months_bounds: SliderBounds::new(dec!(1), dec!(360), dec!(1)),
            term_years_bounds: SliderBounds::new(dec!(1), dec!(30), dec!(1)),
            labels: DisplayLabels::default(),
            palette: Palette::default(),
        }
    }
}

impl Default for DefaultInputs {
    fn default() -> Self {
        Self {
            principal: Money::from_major(100_000),
            rate_percent: dec!(1.0),
            term_value: 1,
            term_unit: TermUnit::Months,
        }
    }
}

impl Default for DisplayLabels {
    fn default() -> Self {
        Self {
            principal: "Principal Amount".to_string(),
            interest: "Interest Amount".to_string(),
            monthly_emi: "Monthly EMI:".to_string(),
            total_interest: "Total Interest:".to_string(),
            total_amount: "Total Amount:".to_string(),
            loan_amount: "Loan Amount".to_string(),
            interest_rate: "Rate of Interest (%)".to_string(),
            loan_tenure: "Loan Tenure".to_string(),
            apply_now: "Apply Now".to_string(),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            principal: "#24256A".to_string(),
            interest: "#F47D20".to_string(),
            track: "#D0D5DD".to_string(),
        }
    }
}

impl CalculatorConfig {
    /// default widget with the tenure initially in the given unit
    pub fn with_term_unit(term_unit: TermUnit) -> Self {
        let mut config = Self::default();
        config.defaults.term_unit = term_unit;
        config
    }

    /// parse a (possibly partial) json config, missing keys take defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: CalculatorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// slider bounds for the tenure in the given unit
    pub fn term_bounds(&self, unit: TermUnit) -> &SliderBounds {
        match unit {
            TermUnit::Months => &self.term_months_bounds,
            TermUnit::Years => &self.term_years_bounds,
        }
    }

    /// slider bounds for a field
    pub fn bounds(&self, field: Field, unit: TermUnit) -> &SliderBounds {
        match field {
            Field::Principal => &self.principal_bounds,
            Field::InterestRate => &self.rate_bounds,
            Field::Term => self.term_bounds(unit),
        }
    }

    /// parameters the widget starts with
    pub fn initial_parameters(&self) -> LoanParameters {
        LoanParameters::new(
            self.defaults.principal,
            Rate::from_percent(self.defaults.rate_percent),
            self.defaults.term_value,
            self.defaults.term_unit,
        )
    }

    pub fn validate(&self) -> Result<()> {
        self.principal_bounds.validate("principal")?;
        self.rate_bounds.validate("interest rate")?;
        self.term_months_bounds.validate("term (months)")?;
        self.term_years_bounds.validate("term (years)")?;

        self.initial_parameters()
            .validate()
            .map_err(|err| LoanError::InvalidConfiguration {
                message: format!("default inputs: {}", err),
            })
    }
}
