// Colored terminal output for results, errors and advisories

use calc_core::{Advisory, Calculator, EvalError};
use crossterm::style::{Color, Stylize};

const WARNING_COLOR: Color = Color::AnsiValue(208);

pub fn print_error(err: &EvalError) {
    eprintln!(
        "{}{}",
        format!("{}: ", err.category()).red().bold(),
        err.to_string().red()
    );
}

pub fn print_warning(advisory: &Advisory) {
    eprintln!(
        "{}{}",
        "Warning: ".with(WARNING_COLOR).bold(),
        advisory.to_string().with(WARNING_COLOR)
    );
}

/// Evaluate one expression and print its outcome. Advisories are printed
/// only when evaluation succeeds. Returns `false` on error.
pub fn report(calculator: &Calculator, expression: &str) -> bool {
    match calculator.evaluate_with_advisories(expression) {
        Ok(evaluation) => {
            for advisory in &evaluation.advisories {
                print_warning(advisory);
            }
            println!("{}", evaluation.value);
            true
        }
        Err(err) => {
            log::debug!("{:?} failed: {:?}", expression, err);
            print_error(&err);
            false
        }
    }
}
