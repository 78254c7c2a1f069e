// Unary sign primitives

use crate::number::Number;

// Negation: -a
// -i64::MIN has no i64 representation and becomes a float
pub fn negate(a: Number) -> Number {
    match a {
        Number::Integer(i) => match i.checked_neg() {
            Some(result) => Number::Integer(result),
            None => Number::Float(-(i as f64)),
        },
        Number::Float(n) => Number::Float(-n),
        Number::Complex(c) => Number::Complex(-c),
    }
}

// Identity: +a
pub fn identity(a: Number) -> Number {
    a
}
