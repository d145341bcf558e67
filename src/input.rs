//! Parsing of widget input before it reaches the calculator.
//!
//! Text fields are masked the way the widget masks them: the amount and
//! tenure keep only digits, the rate keeps digits, `.` and `-`. Slider values
//! are clamped and snapped to the slider's bounds.

use std::fmt;
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::SliderBounds;
use crate::decimal::{Money, Rate};
use crate::errors::{LoanError, Result};

/// an editable field of the widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Principal,
    InterestRate,
    Term,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Principal => "principal",
            Field::InterestRate => "interest rate",
            Field::Term => "term",
        };
        f.write_str(name)
    }
}

/// parse the loan amount text field (`₹1,00,000` -> 100000)
pub fn parse_principal_text(text: &str) -> Result<Money> {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    let amount = parse_masked(Field::Principal, text, &digits)?;
    let principal = Money::from_decimal(amount);
    if !principal.is_positive() {
        return Err(LoanError::InvalidPrincipal { amount: principal });
    }
    Ok(principal)
}

/// parse the interest rate text field (`8.50%` -> 8.50)
pub fn parse_rate_text(text: &str) -> Result<Decimal> {
    let masked: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    let percent = parse_masked(Field::InterestRate, text, &masked)?;
    if percent < Decimal::ZERO {
        return Err(LoanError::InvalidInterestRate {
            rate: Rate::from_percent(percent),
        });
    }
    Ok(percent)
}

/// parse the tenure text field (`12 Months` -> 12)
pub fn parse_term_text(text: &str) -> Result<u32> {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    let term = parse_masked(Field::Term, text, &digits)?
        .to_u32()
        .ok_or_else(|| invalid(Field::Term, text))?;
    if term == 0 {
        return Err(LoanError::InvalidTerm { term_value: term });
    }
    Ok(term)
}

/// clamp and snap a slider position for the field
pub fn slider_value(bounds: &SliderBounds, value: Decimal) -> Decimal {
    bounds.snap(value)
}

/// slider position as a whole-number tenure
pub fn slider_term(bounds: &SliderBounds, value: Decimal) -> Result<u32> {
    bounds
        .snap(value)
        .round()
        .to_u32()
        .filter(|term| *term > 0)
        .ok_or_else(|| invalid(Field::Term, &value.to_string()))
}

fn parse_masked(field: Field, original: &str, masked: &str) -> Result<Decimal> {
    if masked.is_empty() {
        return Err(invalid(field, original));
    }
    Decimal::from_str(masked).map_err(|_| invalid(field, original))
}

fn invalid(field: Field, input: &str) -> LoanError {
    LoanError::InvalidInput {
        field,
        input: input.to_string(),
    }
}
