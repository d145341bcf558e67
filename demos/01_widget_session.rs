/// widget session - drive the calculator the way a ui would
use loan_emi_rs::{Field, InputEvent, LoanCalculator, TermUnit};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut calc = LoanCalculator::with_defaults()?;
    println!("initial: {}", calc.view().summary.monthly_emi.value);

    // user drags sliders, then switches to years
    for (field, value) in [
        (Field::Principal, dec!(2500000)),
        (Field::InterestRate, dec!(9.25)),
    ] {
        let result = calc.slide(field, value)?;
        println!("{} -> emi {}", field, result.monthly_payment.round_dp(2));
    }
    calc.apply(InputEvent::SetTermUnit(TermUnit::Years))?;
    let result = calc.slide(Field::Term, dec!(15))?;
    println!("15 years -> emi {}", result.monthly_payment.round_dp(2));

    // user clears the amount field; previous state is kept
    if let Err(err) = calc.type_text(Field::Principal, "₹") {
        println!("ignored input: {}", err);
    }

    let view = calc.view();
    println!("{} {}", view.summary.monthly_emi.label, view.summary.monthly_emi.value);
    println!("{} {}", view.summary.total_interest.label, view.summary.total_interest.value);
    println!("{} {}", view.summary.total_amount.label, view.summary.total_amount.value);
    println!("term slider: {}", view.inputs.term.fill_style);

    println!("\n{}", calc.json());

    Ok(())
}
