// Runtime knobs for a Calculator

/// Decimal digits kept in floating-point results.
pub const DEFAULT_PRECISION: u32 = 2;

/// Largest real exponent magnitude `**` accepts.
pub const DEFAULT_MAX_EXPONENT: f64 = 100_000.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    /// Float results are rounded to this many decimal digits, once, after
    /// the whole expression has been evaluated.
    pub precision: u32,
    pub max_exponent: f64,
}

impl Settings {
    pub fn new() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            max_exponent: DEFAULT_MAX_EXPONENT,
        }
    }

    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_max_exponent(mut self, max_exponent: f64) -> Self {
        self.max_exponent = max_exponent;
        self
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.precision, 2);
        assert_eq!(settings.max_exponent, 100_000.0);
    }

    #[test]
    fn test_builder() {
        let settings = Settings::new().with_precision(5).with_max_exponent(10.0);
        assert_eq!(settings.precision, 5);
        assert_eq!(settings.max_exponent, 10.0);
    }
}
