// RUST CONCEPT: Numeric type promotion system
// Binary operators never look at two differently tagged numbers. Both
// operands are first lifted to the higher of their two types:
//
//   Integer < Float < Complex
//
// Integer arithmetic stays exact; once a float joins, the result is
// inexact; once a complex joins, the result is complex.

use crate::error::{ArithmeticError, IntegerOp};
use crate::number::Number;
use num_complex::Complex64;
use num_traits::ToPrimitive;

#[cfg(target_os = "none")]
use num_traits::Float;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Promoted {
    Integers(i64, i64),
    Floats(f64, f64),
    Complexes(Complex64, Complex64),
}

pub fn promote_pair(a: Number, b: Number) -> Promoted {
    match (a, b) {
        (Number::Integer(x), Number::Integer(y)) => Promoted::Integers(x, y),
        (Number::Complex(_), _) | (_, Number::Complex(_)) => {
            Promoted::Complexes(a.to_complex(), b.to_complex())
        }
        // Neither side is complex here, so both have a real value
        _ => Promoted::Floats(
            a.to_f64().unwrap_or(f64::NAN),
            b.to_f64().unwrap_or(f64::NAN),
        ),
    }
}

fn to_integral(op: IntegerOp, n: Number) -> Result<i64, ArithmeticError> {
    match n {
        Number::Integer(i) => Ok(i),
        Number::Float(x) => {
            if !x.is_finite() || x.fract() != 0.0 {
                return Err(ArithmeticError::FractionalOperand(op));
            }
            x.to_i64().ok_or(ArithmeticError::Overflow(match op {
                IntegerOp::FloorDivision => "floor division",
                IntegerOp::Modulo => "modulo",
            }))
        }
        Number::Complex(_) => Err(ArithmeticError::ComplexUnsupported),
    }
}

// RUST CONCEPT: Shared operand checks for `//` and `%`
// Order matters: complex operands are reported before a zero divisor, and a
// zero divisor before fractional operands.
pub fn integral_pair(op: IntegerOp, a: Number, b: Number) -> Result<(i64, i64), ArithmeticError> {
    if a.is_complex() || b.is_complex() {
        return Err(ArithmeticError::ComplexUnsupported);
    }
    if b.is_zero() {
        return Err(ArithmeticError::DivisionByZero);
    }
    Ok((to_integral(op, a)?, to_integral(op, b)?))
}
