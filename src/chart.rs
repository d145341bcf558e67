use serde::{Deserialize, Serialize};

use crate::config::{DisplayLabels, Palette};
use crate::decimal::Money;
use crate::types::{LoanParameters, LoanResult};

/// one slice of the donut chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSegment {
    pub label: String,
    pub value: Money,
    pub color: String,
}

/// principal vs total interest breakdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DonutChart {
    pub principal: ChartSegment,
    pub interest: ChartSegment,
}

impl DonutChart {
    pub fn new(
        params: &LoanParameters,
        result: &LoanResult,
        labels: &DisplayLabels,
        palette: &Palette,
    ) -> Self {
        Self {
            principal: ChartSegment {
                label: labels.principal.clone(),
                value: params.principal,
                color: palette.principal.clone(),
            },
            interest: ChartSegment {
                label: labels.interest.clone(),
                value: result.total_interest,
                color: palette.interest.clone(),
            },
        }
    }

    /// segments in legend order
    pub fn segments(&self) -> [&ChartSegment; 2] {
        [&self.principal, &self.interest]
    }

    /// sum of both slices, equal to the total amount payable
    pub fn total(&self) -> Money {
        self.principal.value + self.interest.value
    }
}
