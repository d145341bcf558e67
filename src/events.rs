use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::input::Field;
use crate::types::TermUnit;

/// input coming from the widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// range slider moved
    Slider {
        field: Field,
        value: Decimal,
    },
    /// text field edited
    Text {
        field: Field,
        text: String,
    },
    /// months/years toggle pressed
    SetTermUnit(TermUnit),
}
