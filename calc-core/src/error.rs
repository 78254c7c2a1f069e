//! Error types for the evaluation pipeline
//!
//! Failures fall into two families. [`SyntaxError`] covers everything the
//! tokenizer, the validator and the grammar reject before a value exists.
//! [`ArithmeticError`] covers operations that were well formed but cannot be
//! carried out on the operands they received. Both abort the whole call.

use crate::compat::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("Empty expression")]
    EmptyExpression,
    #[error("Unknown char in expression: '{found}' at position {offset}")]
    UnknownChar { found: char, offset: usize },
    #[error("Too many dots in float at position {offset}")]
    TooManyDots { offset: usize },
    #[error("Bad input format")]
    BadFormat,
    #[error("No operator between expressions")]
    NoOperatorBetween,
    #[error("A few operators in a row")]
    MultipleOperatorsInRow,
    #[error("Braces don't match")]
    BracesMismatch,
    #[error("Expression is nested too deeply")]
    TooDeep,
}

/// The two operations that only accept integral operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegerOp {
    FloorDivision,
    Modulo,
}

impl fmt::Display for IntegerOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntegerOp::FloorDivision => write!(f, "Floor division"),
            IntegerOp::Modulo => write!(f, "Mod operation"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Unable to perform some operations with complex-typed values")]
    ComplexUnsupported,
    #[error("{0} with float appeared")]
    FractionalOperand(IntegerOp),
    #[error("Too big operand for pow")]
    ExponentTooLarge,
    #[error("Numeric overflow in {0}")]
    Overflow(&'static str),
}

/// Anything that can stop [`crate::evaluate`] from producing a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
}

impl EvalError {
    /// Short category label, used by front ends as a message prefix.
    pub fn category(&self) -> &'static str {
        match self {
            EvalError::Syntax(_) => "Syntax error",
            EvalError::Arithmetic(_) => "Math error",
        }
    }
}
