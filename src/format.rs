//! Display strings for the widget, using Indian digit grouping (`12,34,567.89`).

use rust_decimal::{Decimal, RoundingStrategy};

use crate::decimal::{Money, Rate};
use crate::types::TermUnit;

pub const RUPEE: char = '₹';

/// group an amount en-IN style: last three integer digits, then pairs
pub fn format_grouped(amount: Decimal) -> String {
    let text = amount.abs().to_string();
    let (integer, fraction) = match text.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (text.as_str(), None),
    };

    let mut grouped = group_indian(integer);
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    if amount.is_sign_negative() && !amount.is_zero() {
        grouped.insert(0, '-');
    }
    grouped
}

/// result figure: rupee sign, grouping and exactly two decimals
pub fn format_currency(amount: Money) -> String {
    let mut rounded = amount
        .as_decimal()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    format!("{}{}", RUPEE, format_grouped(rounded))
}

/// loan amount text field: rupee sign and grouped whole rupees
pub fn format_principal_input(principal: Money) -> String {
    let whole = principal
        .as_decimal()
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    format!("{}{}", RUPEE, format_grouped(whole.normalize()))
}

/// interest rate text field, always two decimals (`8.50%`)
pub fn format_rate(rate: Rate) -> String {
    let mut percent = rate
        .as_percentage()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    percent.rescale(2);
    format!("{}%", percent)
}

/// tenure text field (`1 Month`, `20 Years`)
pub fn format_term(term_value: u32, unit: TermUnit) -> String {
    let noun = match (unit, term_value > 1) {
        (TermUnit::Months, false) => "Month",
        (TermUnit::Months, true) => "Months",
        (TermUnit::Years, false) => "Year",
        (TermUnit::Years, true) => "Years",
    };
    format!("{} {}", term_value, noun)
}

/// unit name shown next to the tenure label
pub fn unit_name(unit: TermUnit) -> &'static str {
    match unit {
        TermUnit::Months => "months",
        TermUnit::Years => "years",
    }
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, last_three) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), last_three)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_indian_grouping() {
        assert_eq!(format_grouped(dec!(0)), "0");
        assert_eq!(format_grouped(dec!(999)), "999");
        assert_eq!(format_grouped(dec!(1000)), "1,000");
        assert_eq!(format_grouped(dec!(100000)), "1,00,000");
        assert_eq!(format_grouped(dec!(1234567.89)), "12,34,567.89");
        assert_eq!(format_grouped(dec!(10000000)), "1,00,00,000");
        assert_eq!(format_grouped(dec!(-2500000)), "-25,00,000");
    }

    #[test]
    fn test_currency_has_two_decimals() {
        assert_eq!(format_currency(Money::from_major(100_000)), "₹1,00,000.00");
        assert_eq!(
            format_currency(Money::from_decimal(dec!(10413.87880039))),
            "₹10,413.88"
        );
        assert_eq!(
            format_currency(Money::from_decimal(dec!(83.33333333))),
            "₹83.33"
        );
        assert_eq!(format_currency(Money::from_decimal(dec!(0.005))), "₹0.01");
    }

    #[test]
    fn test_principal_input() {
        assert_eq!(format_principal_input(Money::from_major(2_500_000)), "₹25,00,000");
        assert_eq!(format_principal_input(Money::from_decimal(dec!(100.00))), "₹100");
    }

    #[test]
    fn test_rate_and_term() {
        assert_eq!(format_rate(Rate::from_percent(dec!(8.5))), "8.50%");
        assert_eq!(format_rate(Rate::from_percent(dec!(1))), "1.00%");
        assert_eq!(format_term(1, TermUnit::Months), "1 Month");
        assert_eq!(format_term(12, TermUnit::Months), "12 Months");
        assert_eq!(format_term(1, TermUnit::Years), "1 Year");
        assert_eq!(format_term(20, TermUnit::Years), "20 Years");
        assert_eq!(unit_name(TermUnit::Years), "years");
    }
}
