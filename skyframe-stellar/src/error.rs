use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("{quantity} must be positive and finite, got {value}")]
    NonPositive { quantity: &'static str, value: f64 },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Passes `value` through when it is a positive finite number.
pub(crate) fn require_positive(quantity: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(Error::NonPositive { quantity, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_positive() {
        assert_eq!(require_positive("temperature", 5800.0), Ok(5800.0));
        assert!(require_positive("temperature", 0.0).is_err());
        assert!(require_positive("temperature", f64::NAN).is_err());
        let err = require_positive("wavelength", -1.0).unwrap_err();
        assert_eq!(err.to_string(), "wavelength must be positive and finite, got -1");
    }
}
