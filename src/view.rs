//! Serializable snapshot of everything the widget displays.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::chart::DonutChart;
use crate::types::{LoanParameters, LoanResult, TermUnit};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorView {
    pub parameters: LoanParameters,
    pub result: LoanResult,
    pub summary: SummaryView,
    pub inputs: InputsView,
    pub chart: DonutChart,
    pub apply_now_label: String,
}

/// result rows under the chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryView {
    pub monthly_emi: LabeledValue,
    pub total_interest: LabeledValue,
    pub total_amount: LabeledValue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledValue {
    pub label: String,
    pub value: String,
}

/// text fields and sliders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputsView {
    pub principal: InputView,
    pub interest_rate: InputView,
    pub term: InputView,
    pub term_unit: TermUnit,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputView {
    pub label: String,
    pub text: String,
    pub slider_value: Decimal,
    pub slider_min: Decimal,
    pub slider_max: Decimal,
    pub slider_step: Decimal,
    pub fill_percentage: Decimal,
    pub fill_style: String,
}

impl LabeledValue {
    pub fn new(label: &str, value: String) -> Self {
        Self {
            label: label.to_string(),
            value,
        }
    }
}

impl CalculatorView {
    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
