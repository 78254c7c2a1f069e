// Addition and subtraction

use crate::number::Number;
use crate::ops::promotion::{promote_pair, Promoted};

// Addition: a + b
// Integer overflow falls back to float arithmetic
pub fn add(a: Number, b: Number) -> Number {
    match promote_pair(a, b) {
        Promoted::Integers(x, y) => match x.checked_add(y) {
            Some(result) => Number::Integer(result),
            None => Number::Float(x as f64 + y as f64),
        },
        Promoted::Floats(x, y) => Number::Float(x + y),
        Promoted::Complexes(x, y) => Number::Complex(x + y),
    }
}

// Subtraction: a - b
pub fn subtract(a: Number, b: Number) -> Number {
    match promote_pair(a, b) {
        Promoted::Integers(x, y) => match x.checked_sub(y) {
            Some(result) => Number::Integer(result),
            None => Number::Float(x as f64 - y as f64),
        },
        Promoted::Floats(x, y) => Number::Float(x - y),
        Promoted::Complexes(x, y) => Number::Complex(x - y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;

    #[test]
    fn test_add() {
        assert!(matches!(add(Number::Integer(2), Number::Integer(3)), Number::Integer(5)));
        assert!(matches!(add(Number::Integer(2), Number::Float(0.5)), Number::Float(n) if n == 2.5));

        let c = add(Number::Complex(Complex64::new(1.0, 1.0)), Number::Integer(1));
        assert!(matches!(c, Number::Complex(z) if z == Complex64::new(2.0, 1.0)));
    }

    #[test]
    fn test_add_overflow_falls_back_to_float() {
        let result = add(Number::Integer(i64::MAX), Number::Integer(1));
        assert!(matches!(result, Number::Float(n) if n == 9223372036854775808.0));
    }

    #[test]
    fn test_subtract() {
        assert!(matches!(subtract(Number::Integer(3), Number::Integer(-4)), Number::Integer(7)));
        assert!(matches!(subtract(Number::Float(1.5), Number::Integer(2)), Number::Float(n) if n == -0.5));

        let result = subtract(Number::Integer(i64::MIN), Number::Integer(1));
        assert!(matches!(result, Number::Float(_)));
    }
}
