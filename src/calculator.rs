use log::{debug, warn};
use rust_decimal::Decimal;

use crate::chart::DonutChart;
use crate::config::CalculatorConfig;
use crate::decimal::{Money, Rate};
use crate::emi::compute;
use crate::errors::{LoanError, Result};
use crate::events::InputEvent;
use crate::format::{format_currency, format_principal_input, format_rate, format_term, unit_name};
use crate::input::{
    parse_principal_text, parse_rate_text, parse_term_text, slider_term, slider_value, Field,
};
use crate::slider::{fill_gradient, fill_percentage};
use crate::types::{LoanParameters, LoanResult, TermUnit};
use crate::view::{CalculatorView, InputView, InputsView, LabeledValue, SummaryView};

/// calculator widget state
///
/// Holds the current parameters and the result computed from them. Every
/// accepted input replaces both; rejected input leaves both untouched.
#[derive(Debug)]
pub struct LoanCalculator {
    config: CalculatorConfig,
    parameters: LoanParameters,
    result: LoanResult,
}

impl LoanCalculator {
    pub fn new(config: CalculatorConfig) -> Result<Self> {
        config.validate()?;
        let parameters = config.initial_parameters();
        let result = compute(&parameters)?;
        debug!(
            "calculator initialised: principal={} rate={} term={:?}",
            parameters.principal,
            parameters.annual_rate,
            (parameters.term_value, parameters.term_unit)
        );

        Ok(Self {
            config,
            parameters,
            result,
        })
    }

    /// calculator with the stock widget configuration
    pub fn with_defaults() -> Result<Self> {
        Self::new(CalculatorConfig::default())
    }

    /// handle one widget event
    pub fn apply(&mut self, event: InputEvent) -> Result<&LoanResult> {
        let candidate = match &event {
            InputEvent::Slider { field, value } => self.params_from_slider(*field, *value),
            InputEvent::Text { field, text } => self.params_from_text(*field, text),
            InputEvent::SetTermUnit(unit) => Ok(LoanParameters {
                term_unit: *unit,
                ..self.parameters
            }),
        };

        match candidate.and_then(|params| compute(&params).map(|result| (params, result))) {
            Ok((params, result)) => {
                self.commit(params, result);
                Ok(&self.result)
            }
            Err(err) => {
                warn!("rejected {:?}: {}", event, err);
                Err(err)
            }
        }
    }

    /// slider moved
    pub fn slide(&mut self, field: Field, value: Decimal) -> Result<&LoanResult> {
        self.apply(InputEvent::Slider { field, value })
    }

    /// text field edited
    pub fn type_text(&mut self, field: Field, text: &str) -> Result<&LoanResult> {
        self.apply(InputEvent::Text {
            field,
            text: text.to_string(),
        })
    }

    /// months/years toggle; the numeric tenure is kept as is
    pub fn set_term_unit(&mut self, unit: TermUnit) -> Result<&LoanResult> {
        self.apply(InputEvent::SetTermUnit(unit))
    }

    pub fn parameters(&self) -> &LoanParameters {
        &self.parameters
    }

    pub fn result(&self) -> &LoanResult {
        &self.result
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// current position of a field's slider
    pub fn slider_position(&self, field: Field) -> Decimal {
        match field {
            Field::Principal => self.parameters.principal.as_decimal(),
            Field::InterestRate => self.parameters.annual_rate.as_percentage(),
            Field::Term => Decimal::from(self.parameters.term_value),
        }
    }

    /// fill percentage of a field's slider
    pub fn slider_fill(&self, field: Field) -> Decimal {
        let bounds = self.config.bounds(field, self.parameters.term_unit);
        fill_percentage(bounds, self.slider_position(field))
    }

    pub fn chart(&self) -> DonutChart {
        DonutChart::new(
            &self.parameters,
            &self.result,
            &self.config.labels,
            &self.config.palette,
        )
    }

    /// everything the widget renders
    pub fn view(&self) -> CalculatorView {
        let labels = &self.config.labels;
        let params = &self.parameters;

        CalculatorView {
            parameters: *params,
            result: self.result,
            summary: SummaryView {
                monthly_emi: LabeledValue::new(
                    &labels.monthly_emi,
                    format_currency(self.result.monthly_payment),
                ),
                total_interest: LabeledValue::new(
                    &labels.total_interest,
                    format_currency(self.result.total_interest),
                ),
                total_amount: LabeledValue::new(
                    &labels.total_amount,
                    format_currency(self.result.total_payment),
                ),
            },
            inputs: InputsView {
                principal: self.input_view(
                    Field::Principal,
                    labels.loan_amount.clone(),
                    format_principal_input(params.principal),
                ),
                interest_rate: self.input_view(
                    Field::InterestRate,
                    labels.interest_rate.clone(),
                    format_rate(params.annual_rate),
                ),
                term: self.input_view(
                    Field::Term,
                    format!("{} ({})", labels.loan_tenure, unit_name(params.term_unit)),
                    format_term(params.term_value, params.term_unit),
                ),
                term_unit: params.term_unit,
            },
            chart: self.chart(),
            apply_now_label: labels.apply_now.clone(),
        }
    }

    /// get json representation of current state
    pub fn to_json_pretty(&self) -> String {
        self.view()
            .to_json_pretty()
            .unwrap_or_else(|e| format!("JSON error: {}", e))
    }

    /// short alias for json output
    pub fn json(&self) -> String {
        self.to_json_pretty()
    }

    fn input_view(&self, field: Field, label: String, text: String) -> InputView {
        let bounds = self.config.bounds(field, self.parameters.term_unit);
        let fill = self.slider_fill(field);

        InputView {
            label,
            text,
            // the range input shows the clamped position even when typed text is out of range
            slider_value: bounds.clamp(self.slider_position(field)),
            slider_min: bounds.min,
            slider_max: bounds.max,
            slider_step: bounds.step,
            fill_percentage: fill,
            fill_style: fill_gradient(fill, &self.config.palette),
        }
    }

    fn params_from_slider(&self, field: Field, value: Decimal) -> Result<LoanParameters> {
        let bounds = self.config.bounds(field, self.parameters.term_unit);
        let mut params = self.parameters;
        match field {
            Field::Principal => params.principal = Money::from_decimal(slider_value(bounds, value)),
            Field::InterestRate => params.annual_rate = Rate::from_percent(slider_value(bounds, value)),
            Field::Term => params.term_value = slider_term(bounds, value)?,
        }
        Ok(params)
    }

    fn params_from_text(&self, field: Field, text: &str) -> Result<LoanParameters> {
        let mut params = self.parameters;
        match field {
            Field::Principal => params.principal = parse_principal_text(text)?,
            Field::InterestRate => params.annual_rate = Rate::from_percent(parse_rate_text(text)?),
            Field::Term => params.term_value = parse_term_text(text)?,
        }
        Ok(params)
    }

    fn commit(&mut self, params: LoanParameters, result: LoanResult) {
        if params.term_unit != self.parameters.term_unit {
            debug!("term unit {:?} -> {:?}", self.parameters.term_unit, params.term_unit);
        }

        self.parameters = params;
        self.result = result;
        debug!(
            "recomputed: {} months, emi={} total_interest={} total_payment={}",
            params.term_months(),
            result.monthly_payment,
            result.total_interest,
            result.total_payment
        );
    }
}

impl TryFrom<CalculatorConfig> for LoanCalculator {
    type Error = LoanError;

    fn try_from(config: CalculatorConfig) -> Result<Self> {
        Self::new(config)
    }
}
