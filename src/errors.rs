use thiserror::Error;

use crate::decimal::{Money, Rate};
use crate::input::Field;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoanError {
    #[error("invalid principal: {amount} (must be greater than zero)")]
    InvalidPrincipal {
        amount: Money,
    },

    #[error("invalid interest rate: {rate} (must not be negative)")]
    InvalidInterestRate {
        rate: Rate,
    },

    #[error("invalid term: {term_value} (must be at least 1)")]
    InvalidTerm {
        term_value: u32,
    },

    #[error("invalid input for {field}: {input:?}")]
    InvalidInput {
        field: Field,
        input: String,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },

    #[error("calculation error: {message}")]
    CalculationError {
        message: String,
    },

    #[error("missing parameter: {name}")]
    MissingParameter {
        name: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, LoanError>;

impl From<serde_json::Error> for LoanError {
    fn from(err: serde_json::Error) -> Self {
        LoanError::InvalidConfiguration {
            message: err.to_string(),
        }
    }
}
