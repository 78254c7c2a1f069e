use crate::compat::Vec;
use crate::error::EvalError;
use crate::evaluator::Evaluator;
use crate::number::Number;
use crate::settings::Settings;
use crate::tokenizer::tokenize;
use crate::validator::{check_braces, validate, Advisory};

/// A successful evaluation together with any non-fatal advisories.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub value: Number,
    pub advisories: Vec<Advisory>,
}

// RUST CONCEPT: A stateless entry point
// Calculator only holds its settings. Every call builds its own tokens and
// cursor, so one instance can be reused after a failure or shared between
// threads without any reset step.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    settings: Settings,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Evaluate `expression`, logging any advisories at warn level.
    pub fn evaluate(&self, expression: &str) -> Result<Number, EvalError> {
        let evaluation = self.evaluate_with_advisories(expression)?;
        for advisory in &evaluation.advisories {
            log::warn!("{}", advisory);
        }
        Ok(evaluation.value)
    }

    /// Evaluate `expression` and hand advisories back to the caller.
    ///
    /// Pipeline: tokenize, validate adjacent tokens, count braces, run the
    /// grammar, then round a float result to the configured precision.
    pub fn evaluate_with_advisories(&self, expression: &str) -> Result<Evaluation, EvalError> {
        let tokens = tokenize(expression)?;
        let advisories = validate(&tokens)?;
        check_braces(&tokens)?;

        let value = Evaluator::new(&tokens, &self.settings)
            .evaluate()?
            .rounded(self.settings.precision);

        log::debug!("{:?} evaluated to {} ({})", expression, value, value.type_name());
        Ok(Evaluation { value, advisories })
    }
}

/// Evaluate with default settings.
pub fn evaluate(expression: &str) -> Result<Number, EvalError> {
    Calculator::new().evaluate(expression)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SyntaxError;

    #[test]
    fn test_validation_runs_before_brace_count() {
        // Both problems present: adjacency is reported first
        assert_eq!(evaluate("(1)(2"), Err(SyntaxError::NoOperatorBetween.into()));
    }

    #[test]
    fn test_precision_setting() {
        let calc = Calculator::with_settings(Settings::new().with_precision(4));
        assert!(matches!(calc.evaluate("1/3"), Ok(Number::Float(n)) if n == 0.3333));

        let calc = Calculator::with_settings(Settings::new().with_precision(0));
        assert!(matches!(calc.evaluate("7/2"), Ok(Number::Float(n)) if n == 4.0));
    }

    #[test]
    fn test_max_exponent_setting() {
        let calc = Calculator::with_settings(Settings::new().with_max_exponent(8.0));
        assert!(matches!(calc.evaluate("2**8"), Ok(Number::Integer(256))));
        assert!(calc.evaluate("2**9").is_err());
    }

    #[test]
    fn test_advisories_returned() {
        let calc = Calculator::new();
        let evaluation = calc.evaluate_with_advisories("3--4").unwrap();
        assert!(matches!(evaluation.value, Number::Integer(7)));
        assert_eq!(evaluation.advisories.len(), 1);

        let evaluation = calc.evaluate_with_advisories("3-4").unwrap();
        assert!(evaluation.advisories.is_empty());
    }

    #[test]
    fn test_calculator_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Calculator>();
    }
}
