use skyframe_core::AngleError;
use thiserror::Error;

pub type CoordResult<T> = Result<T, CoordError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordError {
    #[error("Missing argument: {message}")]
    MissingArgument { message: String },

    #[error("Direction can either be positive or negative only, got '{direction}'")]
    InvalidDirection { direction: String },

    #[error("Magnitude cannot be less than 0, got {magnitude}")]
    InvalidMagnitude { magnitude: f64 },

    /// `cartesian_to_spherical` at the origin, where the angles are undefined.
    #[error("Spherical angles are undefined at the origin")]
    DegenerateOrigin,

    #[error("Invalid coordinate: {message}")]
    InvalidCoordinate { message: String },

    #[error(transparent)]
    Angle(#[from] AngleError),
}

impl CoordError {
    pub fn missing_argument(message: impl Into<String>) -> Self {
        Self::MissingArgument {
            message: message.into(),
        }
    }

    pub fn invalid_direction(direction: impl Into<String>) -> Self {
        Self::InvalidDirection {
            direction: direction.into(),
        }
    }

    pub fn invalid_magnitude(magnitude: f64) -> Self {
        Self::InvalidMagnitude { magnitude }
    }

    pub fn invalid_coordinate(message: impl Into<String>) -> Self {
        Self::InvalidCoordinate {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_argument() {
        let err = CoordError::missing_argument("hour angle or right ascension");
        assert!(err.to_string().contains("hour angle or right ascension"));
    }

    #[test]
    fn test_invalid_direction() {
        let err = CoordError::invalid_direction("up");
        assert!(err.to_string().contains("'up'"));
    }

    #[test]
    fn test_angle_error_converts() {
        let err: CoordError = AngleError::negative_hour_angle("-1:0:0").into();
        assert!(matches!(
            err,
            CoordError::Angle(AngleError::NegativeHourAngle { .. })
        ));
        assert!(err.to_string().contains("-1:0:0"));
    }
}
