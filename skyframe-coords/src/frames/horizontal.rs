//! Horizontal (alt-azimuth) coordinates.
//!
//! Azimuth runs from north through east. South of the equator the azimuth is
//! reported reflected, `A' = 180 - A` (normalized), and the inverse transform
//! undoes the same reflection before solving, so the two directions remain
//! inverses at every latitude.
//!
//! ```
//! use skyframe_coords::frames::{HourAnglePosition, Observer};
//!
//! let observer = Observer::from_degrees(45.0).unwrap();
//! let star = HourAnglePosition::from_degrees(0.0, 45.0).unwrap();
//! let horizontal = star.to_horizontal(&observer);
//! assert!((horizontal.altitude().degrees() - 90.0).abs() < 1e-9);
//! ```

use super::{validate_latitude, validate_longitude, HourAnglePosition, Observer};
use crate::CoordResult;
use skyframe_core::Angle;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HorizontalPosition {
    azimuth: Angle,
    altitude: Angle,
}

impl HorizontalPosition {
    pub fn new(azimuth: Angle, altitude: Angle) -> CoordResult<Self> {
        let azimuth = validate_longitude("azimuth", azimuth)?;
        let altitude = validate_latitude("altitude", altitude)?;
        Ok(Self { azimuth, altitude })
    }

    pub fn from_degrees(az_deg: f64, alt_deg: f64) -> CoordResult<Self> {
        Self::new(Angle::from_degrees(az_deg), Angle::from_degrees(alt_deg))
    }

    /// Builds a position from azimuth and zenith angle (`90 - altitude`).
    pub fn from_zenith_angle(azimuth: Angle, zenith_angle: Angle) -> CoordResult<Self> {
        Self::new(azimuth, zenith_angle.complement())
    }

    pub fn azimuth(&self) -> Angle {
        self.azimuth
    }

    pub fn altitude(&self) -> Angle {
        self.altitude
    }

    pub fn zenith_angle(&self) -> Angle {
        self.altitude.complement()
    }

    pub fn is_above_horizon(&self) -> bool {
        self.altitude.radians() > 0.0
    }

    /// Solves for hour angle and declination as seen by `observer`.
    pub fn to_hour_angle(&self, observer: &Observer) -> HourAnglePosition {
        let azimuth = if observer.is_southern() {
            let unreflected = reflect_azimuth(self.azimuth);
            tracing::debug!(
                reported = self.azimuth.degrees(),
                azimuth = unreflected.degrees(),
                "undoing southern-hemisphere azimuth reflection"
            );
            unreflected
        } else {
            self.azimuth
        };

        let (sin_az, cos_az) = azimuth.sin_cos();
        let (sin_alt, cos_alt) = self.altitude.sin_cos();
        let (sin_lat, cos_lat) = observer.latitude().sin_cos();

        let dec = Angle::asin(sin_lat * sin_alt + cos_lat * cos_alt * cos_az);
        let hour_angle = Angle::atan2(
            -sin_az * cos_alt,
            sin_alt * cos_lat - cos_alt * cos_az * sin_lat,
        );

        HourAnglePosition::from_unchecked(hour_angle, dec)
    }
}

impl HourAnglePosition {
    /// Azimuth and altitude of this position as seen by `observer`.
    pub fn to_horizontal(&self, observer: &Observer) -> HorizontalPosition {
        let (sin_ha, cos_ha) = self.hour_angle().sin_cos();
        let (sin_dec, cos_dec) = self.dec().sin_cos();
        let (sin_lat, cos_lat) = observer.latitude().sin_cos();

        let altitude = Angle::asin(sin_lat * sin_dec + cos_lat * cos_dec * cos_ha);
        let azimuth = -Angle::atan2(
            cos_dec * sin_ha,
            cos_lat * sin_dec - sin_lat * cos_dec * cos_ha,
        );
        let azimuth = azimuth.normalized();

        let azimuth = if observer.is_southern() {
            reflect_azimuth(azimuth)
        } else {
            azimuth
        };

        HorizontalPosition { azimuth, altitude }
    }
}

impl fmt::Display for HorizontalPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Az={:.6}°, Alt={:.6}°",
            self.azimuth.degrees(),
            self.altitude.degrees()
        )
    }
}

/// `180 - A`, normalized. Its own inverse.
fn reflect_azimuth(azimuth: Angle) -> Angle {
    (Angle::PI - azimuth).normalized()
}

/// `z = 90 - a`, in degrees.
pub fn altitude_to_zenith_angle(altitude_deg: f64) -> f64 {
    90.0 - altitude_deg
}

/// `a = 90 - z`, in degrees.
pub fn zenith_angle_to_altitude(zenith_deg: f64) -> f64 {
    90.0 - zenith_deg
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn horizontal(lat: f64, ha: f64, dec: f64) -> HorizontalPosition {
        let observer = Observer::from_degrees(lat).unwrap();
        HourAnglePosition::from_degrees(ha, dec)
            .unwrap()
            .to_horizontal(&observer)
    }

    #[test]
    fn test_meridian_transit_south_of_zenith() {
        let pos = horizontal(45.0, 0.0, 20.0);
        assert!((pos.altitude().degrees() - 65.0).abs() < EPSILON);
        assert!((pos.azimuth().degrees() - 180.0).abs() < EPSILON);
    }

    #[test]
    fn test_meridian_transit_north_of_zenith() {
        let pos = horizontal(45.0, 0.0, 60.0);
        assert!((pos.altitude().degrees() - 75.0).abs() < EPSILON);
        assert!(pos.azimuth().degrees().abs() < EPSILON);
    }

    #[test]
    fn test_setting_star_is_in_the_west() {
        let pos = horizontal(30.0, 90.0, 0.0);
        assert!(pos.altitude().degrees().abs() < EPSILON);
        assert!((pos.azimuth().degrees() - 270.0).abs() < EPSILON);
        let rising = horizontal(30.0, 270.0, 0.0);
        assert!((rising.azimuth().degrees() - 90.0).abs() < EPSILON);
    }

    #[test]
    fn test_southern_azimuth_is_reflected() {
        // Same geometry as the northern case, mirrored: the star transits north
        // of the zenith and the raw azimuth of 0 is reported as 180.
        let pos = horizontal(-45.0, 0.0, -20.0);
        assert!((pos.altitude().degrees() - 65.0).abs() < EPSILON);
        assert!((pos.azimuth().degrees() - 180.0).abs() < EPSILON);
    }

    #[test]
    fn test_inverse_recovers_hour_angle() {
        for lat in [-60.0, -10.0, 0.0, 35.0, 70.0] {
            let observer = Observer::from_degrees(lat).unwrap();
            for (ha, dec) in [(15.0, 10.0), (120.0, -25.0), (300.0, 40.0)] {
                let start = HourAnglePosition::from_degrees(ha, dec).unwrap();
                let back = start.to_horizontal(&observer).to_hour_angle(&observer);
                assert!((back.hour_angle().degrees() - ha).abs() < 1e-8);
                assert!((back.dec().degrees() - dec).abs() < 1e-8);
            }
        }
    }

    #[test]
    fn test_zenith_angle() {
        let pos = HorizontalPosition::from_degrees(10.0, 30.0).unwrap();
        assert!((pos.zenith_angle().degrees() - 60.0).abs() < EPSILON);
        let same = HorizontalPosition::from_zenith_angle(pos.azimuth(), pos.zenith_angle()).unwrap();
        assert!((same.altitude().degrees() - 30.0).abs() < EPSILON);
        assert!(same.is_above_horizon());
        assert_eq!(altitude_to_zenith_angle(30.0), 60.0);
        assert_eq!(zenith_angle_to_altitude(120.0), -30.0);
    }
}
