// Floor division primitive

use crate::error::{ArithmeticError, IntegerOp};
use crate::number::Number;
use crate::ops::promotion::integral_pair;

// RUST CONCEPT: Floor division on integral operands
// Rust's `/` truncates toward zero; floor division rounds toward negative
// infinity, so the quotient is adjusted when the signs differ and there is
// a remainder. Integral floats are accepted and the result is an Integer.
pub fn floor_div(a: Number, b: Number) -> Result<Number, ArithmeticError> {
    let (x, y) = integral_pair(IntegerOp::FloorDivision, a, b)?;

    // Only i64::MIN / -1 can fail here
    let quotient = x
        .checked_div(y)
        .ok_or(ArithmeticError::Overflow("floor division"))?;
    let remainder = x % y;

    if remainder != 0 && (x < 0) != (y < 0) {
        Ok(Number::Integer(quotient - 1))
    } else {
        Ok(Number::Integer(quotient))
    }
}
