/// custom config - load labels, bounds and defaults from json
use loan_emi_rs::{CalculatorConfig, LoanCalculator};

const CONFIG: &str = r##"{
    "defaults": { "principal": "3000000", "rate_percent": "7.4", "term_value": 25, "term_unit": "years" },
    "principal_bounds": { "min": "500000", "max": "50000000", "step": "500000" },
    "labels": { "monthly_emi": "EMI per month:", "apply_now": "Get a quote" },
    "palette": { "principal": "#0B3D91" }
}"##;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = CalculatorConfig::from_json(CONFIG)?;
    let calc = LoanCalculator::new(config)?;
    let view = calc.view();

    println!("{} {}", view.summary.monthly_emi.label, view.summary.monthly_emi.value);
    for segment in view.chart.segments() {
        println!("{:<16} {:>16} {}", segment.label, segment.value.round_dp(2), segment.color);
    }
    println!("[{}]", view.apply_now_label);

    Ok(())
}
