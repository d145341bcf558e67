/// quick start - compute an EMI in one call
use loan_emi_rs::{compute_loan, format_currency, Money, TermUnit};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ₹12,00,000 at 8.5% for 20 years
    let result = compute_loan(Money::from_major(1_200_000), dec!(8.5), 20, TermUnit::Years)?;

    println!("monthly emi:    {}", format_currency(result.monthly_payment));
    println!("total interest: {}", format_currency(result.total_interest));
    println!("total amount:   {}", format_currency(result.total_payment));

    Ok(())
}
