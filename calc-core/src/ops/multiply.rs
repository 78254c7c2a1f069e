// Multiplication primitive

use crate::number::Number;
use crate::ops::promotion::{promote_pair, Promoted};

// Multiplication: a * b
pub fn multiply(a: Number, b: Number) -> Number {
    match promote_pair(a, b) {
        Promoted::Integers(x, y) => match x.checked_mul(y) {
            Some(result) => Number::Integer(result),
            None => Number::Float(x as f64 * y as f64),
        },
        Promoted::Floats(x, y) => Number::Float(x * y),
        Promoted::Complexes(x, y) => Number::Complex(x * y),
    }
}
