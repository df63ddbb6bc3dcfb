//! Error types for angle parsing and formatting.
//!
//! [`AngleError`] covers the three ways an angle conversion can fail: the text
//! is not a valid `W:M:S` triple, an hour-angle quantity is negative, or a
//! value is NaN/infinite.
//!
//! | Variant | Raised by |
//! |---------|-----------|
//! | [`Parse`](AngleError::Parse) | [`dms_to_decimal`](crate::angle::dms_to_decimal), [`hms_to_decimal`](crate::angle::hms_to_decimal) |
//! | [`NegativeHourAngle`](AngleError::NegativeHourAngle) | [`hms_to_decimal`](crate::angle::hms_to_decimal), [`decimal_to_hms`](crate::angle::decimal_to_hms) |
//! | [`NotFinite`](AngleError::NotFinite) | every formatter |
//!
//! ```
//! use skyframe_core::{AngleError, angle::dms_to_decimal};
//!
//! let err = dms_to_decimal("12:30").unwrap_err();
//! assert!(matches!(err, AngleError::Parse { .. }));
//! ```

use thiserror::Error;

/// Failure of an angle conversion.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AngleError {
    /// Malformed sexagesimal text (wrong field count, non-numeric field).
    #[error("Cannot parse '{input}' as sexagesimal: {message}")]
    Parse { input: String, message: String },

    /// Hour angles and right ascensions are non-negative in this library.
    #[error("Hour angle must not be negative, got {value}")]
    NegativeHourAngle { value: String },

    /// NaN or infinite input.
    #[error("Non-finite value passed to {operation}")]
    NotFinite { operation: String },
}

/// Convenience alias for `Result<T, AngleError>`.
pub type AngleResult<T> = Result<T, AngleError>;

impl AngleError {
    /// Creates a [`Parse`](Self::Parse) error.
    pub fn parse(input: &str, reason: &str) -> Self {
        Self::Parse {
            input: input.to_string(),
            message: reason.to_string(),
        }
    }

    /// Creates a [`NegativeHourAngle`](Self::NegativeHourAngle) error from the offending text.
    pub fn negative_hour_angle(value: impl ToString) -> Self {
        Self::NegativeHourAngle {
            value: value.to_string(),
        }
    }

    /// Creates a [`NotFinite`](Self::NotFinite) error.
    pub fn not_finite(operation: &str) -> Self {
        Self::NotFinite {
            operation: operation.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_message() {
        let err = AngleError::parse("12:xx:00", "invalid minutes");
        assert_eq!(
            err.to_string(),
            "Cannot parse '12:xx:00' as sexagesimal: invalid minutes"
        );
    }

    #[test]
    fn test_negative_hour_angle_message() {
        let err = AngleError::negative_hour_angle(-15.0);
        assert!(err.to_string().contains("-15"));
    }

    #[test]
    fn test_not_finite_message() {
        let err = AngleError::not_finite("decimal_to_dms");
        assert!(err.to_string().contains("decimal_to_dms"));
    }

    #[test]
    fn test_send_sync() {
        fn _assert_send<T: Send>() {}
        fn _assert_sync<T: Sync>() {}
        _assert_send::<AngleError>();
        _assert_sync::<AngleError>();
    }
}
