// Division primitive

use crate::error::ArithmeticError;
use crate::number::Number;
use crate::ops::promotion::{promote_pair, Promoted};

// RUST CONCEPT: True division with zero checking
// a / b always produces an inexact result: Integer / Integer is a Float
pub fn divide(a: Number, b: Number) -> Result<Number, ArithmeticError> {
    if b.is_zero() {
        return Err(ArithmeticError::DivisionByZero);
    }

    let result = match promote_pair(a, b) {
        Promoted::Integers(x, y) => Number::Float(x as f64 / y as f64),
        Promoted::Floats(x, y) => Number::Float(x / y),
        Promoted::Complexes(x, y) => Number::Complex(x / y),
    };
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;

    #[test]
    fn test_divide() {
        assert!(matches!(divide(Number::Integer(8), Number::Integer(2)), Ok(Number::Float(n)) if n == 4.0));
        assert!(matches!(divide(Number::Integer(1), Number::Integer(4)), Ok(Number::Float(n)) if n == 0.25));

        let z = divide(Number::Complex(Complex64::new(2.0, 2.0)), Number::Integer(2)).unwrap();
        assert!(matches!(z, Number::Complex(c) if c == Complex64::new(1.0, 1.0)));
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(divide(Number::Integer(10), Number::Integer(0)), Err(ArithmeticError::DivisionByZero));
        assert_eq!(divide(Number::Float(1.0), Number::Float(-0.0)), Err(ArithmeticError::DivisionByZero));
        assert_eq!(
            divide(Number::Integer(1), Number::Complex(Complex64::new(0.0, 0.0))),
            Err(ArithmeticError::DivisionByZero)
        );
    }
}
