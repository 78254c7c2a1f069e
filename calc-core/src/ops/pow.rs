// Power primitive

use crate::error::ArithmeticError;
use crate::number::Number;
use crate::ops::promotion::{promote_pair, Promoted};
use num_complex::Complex64;
use num_traits::Zero;

#[cfg(target_os = "none")]
use num_traits::Float;

// Real power with overflow detection. Infinite results are only an error
// when both operands were finite.
fn real_pow(base: f64, exponent: f64) -> Result<Number, ArithmeticError> {
    if base == 0.0 && exponent < 0.0 {
        return Err(ArithmeticError::DivisionByZero);
    }

    // A negative base with a fractional exponent has no real result
    if base < 0.0 && exponent.fract() != 0.0 {
        return Ok(Number::Complex(Complex64::new(base, 0.0).powf(exponent)));
    }

    let result = base.powf(exponent);
    if result.is_infinite() && base.is_finite() && exponent.is_finite() {
        return Err(ArithmeticError::Overflow("power"));
    }
    Ok(Number::Float(result))
}

fn complex_pow(base: Complex64, exponent: Complex64) -> Result<Number, ArithmeticError> {
    if base.is_zero() {
        if exponent.is_zero() {
            return Ok(Number::Complex(Complex64::new(1.0, 0.0)));
        }
        if exponent.im != 0.0 || exponent.re < 0.0 {
            return Err(ArithmeticError::DivisionByZero);
        }
        return Ok(Number::Complex(Complex64::zero()));
    }

    // Integral real exponents go through repeated multiplication, which
    // keeps results such as (1+i)**2 exact
    if exponent.im == 0.0
        && exponent.re.fract() == 0.0
        && exponent.re.abs() <= i32::MAX as f64
    {
        return Ok(Number::Complex(base.powi(exponent.re as i32)));
    }
    Ok(Number::Complex(base.powc(exponent)))
}

// RUST CONCEPT: Exponentiation across the numeric tower
// base ** exponent, where a real exponent beyond `max_exponent` in magnitude
// is refused before any work is done.
pub fn pow(base: Number, exponent: Number, max_exponent: f64) -> Result<Number, ArithmeticError> {
    if let Some(e) = exponent.to_f64() {
        if e.abs() > max_exponent {
            return Err(ArithmeticError::ExponentTooLarge);
        }
    }

    match promote_pair(base, exponent) {
        Promoted::Integers(b, e) if e >= 0 => {
            let exact = u32::try_from(e).ok().and_then(|e| b.checked_pow(e));
            match exact {
                Some(result) => Ok(Number::Integer(result)),
                None => real_pow(b as f64, e as f64),
            }
        }
        Promoted::Integers(b, e) => real_pow(b as f64, e as f64),
        Promoted::Floats(b, e) => real_pow(b, e),
        Promoted::Complexes(b, e) => complex_pow(b, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIMIT: f64 = 100_000.0;

    #[test]
    fn test_integer_pow_stays_exact() {
        assert!(matches!(pow(Number::Integer(2), Number::Integer(9), LIMIT), Ok(Number::Integer(512))));
        assert!(matches!(pow(Number::Integer(-3), Number::Integer(3), LIMIT), Ok(Number::Integer(-27))));
        assert!(matches!(pow(Number::Integer(0), Number::Integer(0), LIMIT), Ok(Number::Integer(1))));
    }

    #[test]
    fn test_negative_integer_exponent_is_float() {
        assert!(matches!(pow(Number::Integer(2), Number::Integer(-1), LIMIT), Ok(Number::Float(n)) if n == 0.5));
        assert_eq!(
            pow(Number::Integer(0), Number::Integer(-1), LIMIT),
            Err(ArithmeticError::DivisionByZero)
        );
    }

    #[test]
    fn test_integer_overflow_falls_back_to_float() {
        let result = pow(Number::Integer(10), Number::Integer(30), LIMIT);
        assert!(matches!(result, Ok(Number::Float(n)) if (n - 1e30).abs() < 1e16));

        assert_eq!(
            pow(Number::Integer(10), Number::Integer(400), LIMIT),
            Err(ArithmeticError::Overflow("power"))
        );
    }

    #[test]
    fn test_float_pow() {
        assert!(matches!(pow(Number::Float(2.5), Number::Integer(2), LIMIT), Ok(Number::Float(n)) if n == 6.25));
        assert!(matches!(pow(Number::Integer(4), Number::Float(0.5), LIMIT), Ok(Number::Float(n)) if n == 2.0));
    }

    #[test]
    fn test_negative_base_fractional_exponent_is_complex() {
        let result = pow(Number::Integer(-1), Number::Float(0.5), LIMIT).unwrap();
        match result {
            Number::Complex(z) => {
                assert!(z.re.abs() < 1e-15);
                assert!((z.im - 1.0).abs() < 1e-15);
            }
            other => panic!("expected complex, got {:?}", other),
        }
    }

    #[test]
    fn test_complex_pow() {
        let i = Number::Complex(Complex64::new(0.0, 1.0));
        assert!(matches!(pow(i, Number::Integer(2), LIMIT), Ok(Number::Complex(z)) if z == Complex64::new(-1.0, 0.0)));

        let zero = Number::Complex(Complex64::zero());
        assert!(matches!(pow(zero, Number::Integer(0), LIMIT), Ok(Number::Complex(z)) if z == Complex64::new(1.0, 0.0)));
        assert_eq!(pow(zero, Number::Integer(-2), LIMIT), Err(ArithmeticError::DivisionByZero));
    }

    #[test]
    fn test_exponent_limit() {
        assert_eq!(
            pow(Number::Integer(2), Number::Integer(1_000_000), LIMIT),
            Err(ArithmeticError::ExponentTooLarge)
        );
        assert_eq!(
            pow(Number::Integer(2), Number::Float(-100_000.5), LIMIT),
            Err(ArithmeticError::ExponentTooLarge)
        );
        // Exactly at the limit is allowed
        assert!(pow(Number::Integer(1), Number::Integer(100_000), LIMIT).is_ok());
        // Complex exponents are not limited
        let big = Number::Complex(Complex64::new(1e6, 0.0));
        assert!(pow(Number::Integer(1), big, LIMIT).is_ok());
    }
}
