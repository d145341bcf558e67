pub mod calculator;
pub mod chart;
pub mod config;
pub mod decimal;
pub mod emi;
pub mod errors;
pub mod events;
pub mod format;
pub mod input;
pub mod slider;
pub mod types;
pub mod view;

// re-export key types
pub use calculator::LoanCalculator;
pub use chart::{ChartSegment, DonutChart};
pub use config::{CalculatorConfig, DefaultInputs, DisplayLabels, Palette, SliderBounds};
pub use decimal::{Money, Rate};
pub use emi::{calculate_emi_amount, compute, compute_loan};
pub use errors::{LoanError, Result};
pub use events::InputEvent;
pub use format::{format_currency, format_grouped, format_rate, format_term};
pub use input::Field;
pub use slider::{fill_gradient, percentage_of};
pub use types::{LoanParameters, LoanParametersBuilder, LoanResult, TermUnit};
pub use view::CalculatorView;

// re-export external dependencies that users will need
pub use rust_decimal::Decimal;
