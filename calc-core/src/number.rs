use crate::compat::{fmt, String};
use core::fmt::Write;
use num_complex::Complex64;
use num_traits::Zero;

#[cfg(target_os = "none")]
use num_traits::Float;

/// Beyond this many decimal places every finite `f64` is already exact.
pub const MAX_ROUNDING_DIGITS: u32 = 323;

// RUST CONCEPT: A closed numeric tower
// Every value produced by the evaluator is one of these three variants.
// Which one depends on the literals and the operations applied; the
// promotion rules live in ops::promotion.
#[derive(Debug, Clone, Copy)]
pub enum Number {
    Integer(i64),        // Literal without a decimal point, or integral result
    Float(f64),          // Literal with a decimal point, or inexact result
    Complex(Complex64),  // Only reachable through `**`
}

impl Number {
    pub fn type_name(&self) -> &'static str {
        match self {
            Number::Integer(_) => "integer",
            Number::Float(_) => "float",
            Number::Complex(_) => "complex",
        }
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Number::Integer(i) => *i == 0,
            Number::Float(n) => *n == 0.0,
            Number::Complex(c) => c.is_zero(),
        }
    }

    pub fn is_complex(&self) -> bool {
        matches!(self, Number::Complex(_))
    }

    /// Real value as `f64`, or `None` for complex numbers.
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            Number::Integer(i) => Some(*i as f64),
            Number::Float(n) => Some(*n),
            Number::Complex(_) => None,
        }
    }

    pub fn to_complex(&self) -> Complex64 {
        match self {
            Number::Integer(i) => Complex64::new(*i as f64, 0.0),
            Number::Float(n) => Complex64::new(*n, 0.0),
            Number::Complex(c) => *c,
        }
    }

    /// Round a float to `digits` decimal places; other variants pass through.
    ///
    /// Applied once to the final result of an evaluation. The decimal
    /// formatter is exact, so the result is the correctly rounded value with
    /// ties going to the even digit. Non-finite values, and precisions past
    /// [`MAX_ROUNDING_DIGITS`], are returned unchanged.
    pub fn rounded(self, digits: u32) -> Self {
        match self {
            Number::Float(n) if n.is_finite() && digits <= MAX_ROUNDING_DIGITS => {
                let mut text = String::new();
                if write!(text, "{:.*}", digits as usize, n).is_err() {
                    return Number::Float(n);
                }
                Number::Float(text.parse::<f64>().unwrap_or(n))
            }
            other => other,
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Integer(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl From<Complex64> for Number {
    fn from(value: Complex64) -> Self {
        Number::Complex(value)
    }
}

// RUST CONCEPT: Numeric equality across variants
// Integer(3), Float(3.0) and Complex(3+0i) all compare equal, the way the
// values themselves do. NaN never equals anything.
impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Number::Integer(a), Number::Integer(b)) => a == b,
            (Number::Complex(_), _) | (_, Number::Complex(_)) => {
                self.to_complex() == other.to_complex()
            }
            _ => self.to_f64() == other.to_f64(),
        }
    }
}

impl PartialEq<i64> for Number {
    fn eq(&self, other: &i64) -> bool {
        *self == Number::Integer(*other)
    }
}

impl PartialEq<f64> for Number {
    fn eq(&self, other: &f64) -> bool {
        *self == Number::Float(*other)
    }
}

fn write_float(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_nan() {
        write!(f, "nan")
    } else if n.is_infinite() {
        write!(f, "{}", if n > 0.0 { "inf" } else { "-inf" })
    } else if n.fract() == 0.0 && n.abs() < 1e16 {
        // Keep the decimal point so floats stay distinguishable from integers
        write!(f, "{:.1}", n)
    } else {
        write!(f, "{}", n)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(n) => write_float(f, *n),
            Number::Complex(c) => {
                write_float(f, c.re)?;
                if c.im >= 0.0 || c.im.is_nan() {
                    write!(f, "+")?;
                }
                write_float(f, c.im)?;
                write!(f, "i")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compat::ToString;

    #[test]
    fn test_cross_variant_equality() {
        assert_eq!(Number::Integer(3), Number::Float(3.0));
        assert_eq!(Number::Float(2.5), Number::Complex(Complex64::new(2.5, 0.0)));
        assert_ne!(Number::Integer(3), Number::Complex(Complex64::new(3.0, 1.0)));
        assert_ne!(Number::Float(f64::NAN), Number::Float(f64::NAN));
        assert!(Number::Integer(14) == 14);
        assert!(Number::Float(6.82) == 6.82);
    }

    #[test]
    fn test_rounding_only_touches_floats() {
        assert!(matches!(Number::Float(6.8200000001).rounded(2), Number::Float(n) if n == 6.82));
        assert!(matches!(Number::Float(2.64).rounded(1), Number::Float(n) if n == 2.6));
        assert!(matches!(Number::Integer(7).rounded(2), Number::Integer(7)));

        let c = Complex64::new(0.123456, 1.0);
        assert!(matches!(Number::Complex(c).rounded(2), Number::Complex(r) if r == c));

        assert!(matches!(Number::Float(f64::MAX).rounded(2), Number::Float(n) if n == f64::MAX));
        assert!(matches!(Number::Float(f64::INFINITY).rounded(2), Number::Float(n) if n == f64::INFINITY));
    }

    #[test]
    fn test_rounding_is_correctly_rounded_with_ties_to_even() {
        // 2.675 is stored just below the tie
        assert!(matches!(Number::Float(2.675).rounded(2), Number::Float(n) if n == 2.67));
        // Exact ties go to the even digit
        assert!(matches!(Number::Float(0.125).rounded(2), Number::Float(n) if n == 0.12));
        assert!(matches!(Number::Float(0.375).rounded(2), Number::Float(n) if n == 0.38));
        assert!(matches!(Number::Float(-0.125).rounded(2), Number::Float(n) if n == -0.12));
        assert!(matches!(Number::Float(2.5).rounded(0), Number::Float(n) if n == 2.0));
    }

    #[test]
    fn test_huge_precision_leaves_value_unchanged() {
        assert!(matches!(Number::Float(6.82).rounded(u32::MAX), Number::Float(n) if n == 6.82));
        assert!(matches!(Number::Float(1.0 / 3.0).rounded(i32::MAX as u32 + 1), Number::Float(n) if n == 1.0 / 3.0));
        assert!(matches!(Number::Float(1.0 / 3.0).rounded(MAX_ROUNDING_DIGITS), Number::Float(n) if n == 1.0 / 3.0));
    }

    #[test]
    fn test_is_zero() {
        assert!(Number::Integer(0).is_zero());
        assert!(Number::Float(-0.0).is_zero());
        assert!(Number::Complex(Complex64::new(0.0, 0.0)).is_zero());
        assert!(!Number::Complex(Complex64::new(0.0, 1.0)).is_zero());
    }

    #[test]
    fn test_display() {
        assert_eq!(Number::Integer(-4).to_string(), "-4");
        assert_eq!(Number::Float(38.0).to_string(), "38.0");
        assert_eq!(Number::Float(6.82).to_string(), "6.82");
        assert_eq!(Number::Float(f64::INFINITY).to_string(), "inf");
        assert_eq!(Number::Complex(Complex64::new(1.0, -2.5)).to_string(), "1.0-2.5i");
        assert_eq!(Number::Complex(Complex64::new(0.5, 2.0)).to_string(), "0.5+2.0i");
    }
}
