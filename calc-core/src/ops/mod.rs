//! Arithmetic on [`Number`] values
//!
//! One module per operator, sharing the promotion rules in [`promotion`].
//! The evaluator only talks to [`binary`] and [`unary`].

pub mod divide;
pub mod floor_div;
pub mod modulo;
pub mod multiply;
pub mod pow;
pub mod promotion;
pub mod sum;
pub mod unary;

use crate::error::ArithmeticError;
use crate::number::Number;
use crate::settings::Settings;
use crate::tokenizer::Operator;

/// Apply a binary operator.
pub fn binary(op: Operator, lhs: Number, rhs: Number, settings: &Settings) -> Result<Number, ArithmeticError> {
    match op {
        Operator::Plus => Ok(sum::add(lhs, rhs)),
        Operator::Minus => Ok(sum::subtract(lhs, rhs)),
        Operator::Multiply => Ok(multiply::multiply(lhs, rhs)),
        Operator::Divide => divide::divide(lhs, rhs),
        Operator::FloorDivide => floor_div::floor_div(lhs, rhs),
        Operator::Modulo => modulo::modulo(lhs, rhs),
        Operator::Power => pow::pow(lhs, rhs, settings.max_exponent),
    }
}

/// Apply a sign. Only `+` and `-` have a unary form.
pub fn unary(op: Operator, operand: Number) -> Number {
    match op {
        Operator::Minus => unary::negate(operand),
        _ => unary::identity(operand),
    }
}
