// Modulo primitive

use crate::error::{ArithmeticError, IntegerOp};
use crate::number::Number;
use crate::ops::promotion::integral_pair;

// RUST CONCEPT: Floored modulo
// The remainder takes the sign of the divisor, consistent with floor_div:
// a == (a // b) * b + a % b
pub fn modulo(a: Number, b: Number) -> Result<Number, ArithmeticError> {
    let (x, y) = integral_pair(IntegerOp::Modulo, a, b)?;

    // wrapping_rem only differs from % for i64::MIN % -1, where it gives 0
    let remainder = x.wrapping_rem(y);

    if remainder != 0 && (remainder < 0) != (y < 0) {
        Ok(Number::Integer(remainder + y))
    } else {
        Ok(Number::Integer(remainder))
    }
}
