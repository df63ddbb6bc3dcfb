//! Typed sky positions and the transforms between them.
//!
//! Every position type validates on construction: longitudes (right
//! ascension, hour angle, azimuth, ecliptic and galactic longitude) are
//! normalized into [0, 360) and latitudes (declination, altitude, ecliptic and
//! galactic latitude, observer latitude) must lie within [-90, +90].

mod ecliptic;
mod equatorial;
mod galactic;
mod horizontal;

pub use ecliptic::EclipticPosition;
pub use equatorial::{
    hour_angle_from_right_ascension, right_ascension_from_hour_angle, EquatorialPosition,
    HourAnglePosition, Observer,
};
pub use galactic::GalacticPosition;
pub use horizontal::{altitude_to_zenith_angle, zenith_angle_to_altitude, HorizontalPosition};

use crate::{CoordError, CoordResult};
use skyframe_core::Angle;

/// Slack on the +/-90 degree bound so that values produced by `asin` and
/// sexagesimal round-trips are not rejected.
const LATITUDE_TOLERANCE_DEG: f64 = 1e-9;

pub(crate) fn validate_longitude(name: &str, angle: Angle) -> CoordResult<Angle> {
    if !angle.is_finite() {
        return Err(CoordError::invalid_coordinate(format!(
            "{name} must be finite"
        )));
    }
    Ok(angle.normalized())
}

pub(crate) fn validate_latitude(name: &str, angle: Angle) -> CoordResult<Angle> {
    if !angle.is_finite() {
        return Err(CoordError::invalid_coordinate(format!(
            "{name} must be finite"
        )));
    }
    let degrees = angle.degrees();
    if degrees.abs() > 90.0 + LATITUDE_TOLERANCE_DEG {
        return Err(CoordError::invalid_coordinate(format!(
            "{name} must be within [-90, 90] degrees, got {degrees}"
        )));
    }
    Ok(Angle::from_radians(skyframe_core::angle::clamp_dec(
        angle.radians(),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_longitude_wraps() {
        let wrapped = validate_longitude("azimuth", Angle::from_degrees(-30.0)).unwrap();
        assert!((wrapped.degrees() - 330.0).abs() < 1e-10);
        assert!(validate_longitude("azimuth", Angle::from_radians(f64::NAN)).is_err());
    }

    #[test]
    fn test_validate_latitude_bounds() {
        assert!(validate_latitude("declination", Angle::from_degrees(90.0)).is_ok());
        assert!(validate_latitude("declination", Angle::from_degrees(-90.0)).is_ok());
        let err = validate_latitude("declination", Angle::from_degrees(91.0)).unwrap_err();
        assert!(err.to_string().contains("declination"));
        assert!(validate_latitude("latitude", Angle::from_radians(f64::INFINITY)).is_err());
    }
}
