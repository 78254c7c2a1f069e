//! Calc CLI - one-shot evaluation and interactive REPL
//!
//! This is a thin wrapper around calc-core. Everything it knows about
//! expressions comes from `Calculator::evaluate_with_advisories`.

mod console;
mod repl;

use calc_core::{Calculator, Settings};
use structopt::clap::AppSettings;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "calc",
    about = "Evaluate arithmetic expressions",
    setting = AppSettings::AllowLeadingHyphen
)]
struct Options {
    /// Decimal digits kept in floating-point results
    #[structopt(short, long, default_value = "2")]
    precision: u32,

    /// Largest exponent magnitude accepted by `**`
    #[structopt(long, default_value = "100000")]
    max_exponent: f64,

    /// Expression to evaluate; starts the REPL when omitted
    expression: Vec<String>,
}

impl Options {
    fn settings(&self) -> Settings {
        Settings::new()
            .with_precision(self.precision)
            .with_max_exponent(self.max_exponent)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let options = Options::from_args();
    log::debug!("starting with {:?}", options);
    let calculator = Calculator::with_settings(options.settings());

    if options.expression.is_empty() {
        return repl::run_repl(&calculator);
    }

    let expression = options.expression.join(" ");
    if !console::report(&calculator, &expression) {
        std::process::exit(1);
    }
    Ok(())
}
