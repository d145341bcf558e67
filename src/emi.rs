//! Equated monthly installment (EMI) calculation.
//!
//! The payment on an amortizing loan with monthly rate `r` over `n` months is
//! `P * r * (1 + r)^n / ((1 + r)^n - 1)`, falling back to straight-line
//! division when the rate is zero.

use log::debug;
use rust_decimal::Decimal;

use crate::decimal::{Money, Rate};
use crate::errors::{LoanError, Result};
use crate::types::{LoanParameters, LoanResult, TermUnit};

/// compute monthly payment and totals from raw widget values
///
/// `annual_rate_percent` is the annual rate as entered by the user, so `8.5`
/// means 8.5% a year.
pub fn compute_loan(
    principal: Money,
    annual_rate_percent: Decimal,
    term_value: u32,
    term_unit: TermUnit,
) -> Result<LoanResult> {
    let params = LoanParameters::new(
        principal,
        Rate::from_percent(annual_rate_percent),
        term_value,
        term_unit,
    );
    compute(&params)
}

/// compute monthly payment and totals for validated parameters
///
/// Fails with `CalculationError` only when the payment or its total over the
/// term does not fit in a decimal.
pub fn compute(params: &LoanParameters) -> Result<LoanResult> {
    params.validate()?;

    let months = params.term_months();
    let monthly_payment = calculate_emi_amount(params.principal, params.annual_rate, months)?;
    let total_payment = monthly_payment
        .checked_times(months)
        .ok_or_else(|| out_of_range("total payment", params.principal, months))?;
    // straight-line payments can lose a few 1e-8 units to rounding
    let total_interest = (total_payment - params.principal).max(Money::ZERO);

    Ok(LoanResult {
        monthly_payment,
        total_interest,
        total_payment,
    })
}

/// calculate EMI amount
pub fn calculate_emi_amount(principal: Money, annual_rate: Rate, months: u32) -> Result<Money> {
    if months == 0 {
        return Err(LoanError::InvalidTerm { term_value: months });
    }

    let monthly_rate = annual_rate.monthly_rate().as_decimal();
    let straight_line = principal / Decimal::from(months);

    if monthly_rate.is_zero() {
        return Ok(straight_line);
    }

    // EMI = P * r * (1 + r)^n / ((1 + r)^n - 1), built as P * (r * c / (c - 1))
    // so the intermediate stays near the size of the payment itself
    let r = monthly_rate;
    let factor = match compound_factor(Decimal::ONE + r, months) {
        Some(compound) => {
            let denominator = compound - Decimal::ONE;
            if denominator.is_zero() {
                // rate too small to register against 1 at 28 digits
                return Ok(straight_line);
            }
            compound
                .checked_div(denominator)
                .and_then(|ratio| ratio.checked_mul(r))
        }
        None => {
            // c / (c - 1) is 1 to full precision by now
            debug!("compound factor overflowed for r={} n={}, using interest-only limit", r, months);
            Some(r)
        }
    };

    factor
        .and_then(|factor| principal.checked_scale(factor))
        .ok_or_else(|| out_of_range("monthly payment", principal, months))
}

fn out_of_range(what: &str, principal: Money, months: u32) -> LoanError {
    LoanError::CalculationError {
        message: format!(
            "{} for principal {} over {} months exceeds the decimal range",
            what, principal, months
        ),
    }
}

/// `base^exponent` by repeated squaring, `None` once the result leaves decimal range
fn compound_factor(base: Decimal, exponent: u32) -> Option<Decimal> {
    let mut result = Decimal::ONE;
    let mut square = base;
    let mut remaining = exponent;

    while remaining > 0 {
        if remaining & 1 == 1 {
            result = result.checked_mul(square)?;
        }
        remaining >>= 1;
        if remaining > 0 {
            square = square.checked_mul(square)?;
        }
    }

    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn money(d: Decimal) -> Money {
        Money::from_decimal(d)
    }

    fn assert_close(actual: Money, expected: Money, tolerance: Decimal) {
        let diff = (actual.as_decimal() - expected.as_decimal()).abs();
        assert!(
            diff <= tolerance,
            "expected {} to be within {} of {}",
            actual,
            tolerance,
            expected
        );
    }

    #[test]
    fn test_single_month_loan() {
        let result = compute_loan(Money::from_major(100_000), dec!(1.0), 1, TermUnit::Months).unwrap();

        // one period: principal plus one month of interest
        assert_eq!(result.monthly_payment.round_dp(2), money(dec!(100083.33)));
        assert_eq!(result.total_interest.round_dp(2), money(dec!(83.33)));
        assert_eq!(result.total_payment.round_dp(2), money(dec!(100083.33)));
    }

    #[test]
    fn test_twenty_year_loan_regression() {
        let result = compute_loan(Money::from_major(1_200_000), dec!(8.5), 20, TermUnit::Years).unwrap();

        assert_eq!(result.monthly_payment.round_dp(2), money(dec!(10413.88)));
        assert_eq!(result.total_payment.round_dp(2), money(dec!(2499330.91)));
        assert_eq!(result.total_interest.round_dp(2), money(dec!(1299330.91)));
    }

    #[test]
    fn test_known_payments() {
        let cases = [
            (100_000, dec!(12), 12, dec!(8884.88)),
            (500_000, dec!(10), 60, dec!(10623.52)),
            (1_000_000, dec!(7.25), 360, dec!(6821.76)),
        ];

        for (principal, rate, months, expected) in cases {
            let result = compute_loan(Money::from_major(principal), rate, months, TermUnit::Months).unwrap();
            assert_eq!(result.monthly_payment.round_dp(2), money(expected));
        }
    }

    #[test]
    fn test_zero_rate_is_straight_line() {
        let principal = Money::from_major(120_000);
        let result = compute_loan(principal, Decimal::ZERO, 24, TermUnit::Months).unwrap();

        assert_eq!(result.monthly_payment, principal / dec!(24));
        assert_eq!(result.total_payment, principal);
        assert_eq!(result.total_interest, Money::ZERO);
    }

    #[test]
    fn test_zero_rate_non_terminating_division() {
        let result = compute_loan(Money::from_major(100_000), Decimal::ZERO, 3, TermUnit::Months).unwrap();

        assert_eq!(result.monthly_payment, money(dec!(33333.33333333)));
        assert!(result.total_interest >= Money::ZERO);
        assert_close(result.total_payment, Money::from_major(100_000), dec!(0.0000001));
    }

    #[test]
    fn test_totals_invariants() {
        let cases = [
            (250_000, dec!(9.99), 7, TermUnit::Years),
            (100_000, dec!(30), 360, TermUnit::Months),
            (10_000_000, dec!(1), 1, TermUnit::Months),
            (345_678, dec!(0.01), 30, TermUnit::Years),
        ];

        for (principal, rate, term, unit) in cases {
            let principal = Money::from_major(principal);
            let result = compute_loan(principal, rate, term, unit).unwrap();
            let months = unit.to_months(term);

            assert!(result.monthly_payment >= Money::ZERO);
            assert!(result.total_interest >= Money::ZERO);
            assert!(result.total_payment >= Money::ZERO);
            assert_eq!(result.total_payment, result.monthly_payment.checked_times(months).unwrap());
            assert_eq!(result.total_interest, result.total_payment - principal);
        }
    }

    #[test]
    fn test_higher_rate_raises_payment_and_interest() {
        let principal = Money::from_major(500_000);
        let mut previous: Option<LoanResult> = None;

        for rate in [dec!(0), dec!(0.5), dec!(1), dec!(4.75), dec!(8.5), dec!(15), dec!(30)] {
            let result = compute_loan(principal, rate, 120, TermUnit::Months).unwrap();
            if let Some(prev) = previous {
                assert!(result.monthly_payment > prev.monthly_payment);
                assert!(result.total_interest > prev.total_interest);
            }
            previous = Some(result);
        }
    }

    #[test]
    fn test_longer_term_lowers_payment_raises_total() {
        let principal = Money::from_major(500_000);
        let mut previous: Option<LoanResult> = None;

        for months in [1, 2, 12, 60, 120, 240, 360] {
            let result = compute_loan(principal, dec!(6.5), months, TermUnit::Months).unwrap();
            if let Some(prev) = previous {
                assert!(result.monthly_payment < prev.monthly_payment);
                assert!(result.total_payment > prev.total_payment);
            }
            previous = Some(result);
        }
    }

    #[test]
    fn test_years_equal_twelve_months() {
        let principal = Money::from_major(750_000);
        for rate in [dec!(0), dec!(3.25), dec!(11)] {
            let yearly = compute_loan(principal, rate, 1, TermUnit::Years).unwrap();
            let monthly = compute_loan(principal, rate, 12, TermUnit::Months).unwrap();
            assert_eq!(yearly, monthly);
        }
    }

    #[test]
    fn test_extreme_rate_converges_to_interest_only() {
        let principal = Money::from_major(100_000);
        // 1200% a year is 100% a month; 2^360 does not fit in a decimal
        let result = compute_loan(principal, dec!(1200), 360, TermUnit::Months).unwrap();

        assert_eq!(result.monthly_payment, principal);
        assert_eq!(result.total_payment, principal.checked_times(360).unwrap());
    }

    #[test]
    fn test_large_principal_with_steep_rate() {
        // 100% a month for 60 months: c = 2^60 fits, but P * r * c would not
        let principal = Money::from_major(1_000_000_000_000);
        let result = compute_loan(principal, dec!(1200), 60, TermUnit::Months).unwrap();

        assert_eq!(result.monthly_payment.round_dp(2), principal);
        assert_eq!(result.total_payment.round_dp(2), Money::from_major(60_000_000_000_000));
    }

    #[test]
    fn test_out_of_range_totals_are_errors() {
        let principal = Money::from_major(10_000_000);

        // payment fits, payment * 360 does not
        assert!(matches!(
            compute_loan(principal, dec!(1000000000000000000000000), 360, TermUnit::Months),
            Err(LoanError::CalculationError { .. })
        ));
        // payment itself does not fit
        assert!(matches!(
            compute_loan(principal, dec!(1000000000000000000000000000), 360, TermUnit::Months),
            Err(LoanError::CalculationError { .. })
        ));
    }

    #[test]
    fn test_invalid_inputs_are_rejected() {
        assert!(matches!(
            compute_loan(Money::ZERO, dec!(5), 12, TermUnit::Months),
            Err(LoanError::InvalidPrincipal { .. })
        ));
        assert!(matches!(
            compute_loan(Money::from_major(1_000), dec!(-1), 12, TermUnit::Months),
            Err(LoanError::InvalidInterestRate { .. })
        ));
        assert_eq!(
            compute_loan(Money::from_major(1_000), dec!(5), 0, TermUnit::Years),
            Err(LoanError::InvalidTerm { term_value: 0 })
        );
        assert!(calculate_emi_amount(Money::from_major(1_000), Rate::ZERO, 0).is_err());
    }

    #[test]
    fn test_compound_factor() {
        assert_eq!(compound_factor(dec!(1.01), 0), Some(Decimal::ONE));
        assert_eq!(compound_factor(dec!(2), 10), Some(dec!(1024)));
        assert_eq!(compound_factor(dec!(1.5), 3), Some(dec!(3.375)));
        assert_eq!(compound_factor(dec!(2), 200), None);
    }
}
