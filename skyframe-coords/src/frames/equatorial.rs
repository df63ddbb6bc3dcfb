use super::{validate_latitude, validate_longitude};
use crate::CoordResult;
use skyframe_core::Angle;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Right ascension and declination.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EquatorialPosition {
    ra: Angle,
    dec: Angle,
}

impl EquatorialPosition {
    pub fn new(ra: Angle, dec: Angle) -> CoordResult<Self> {
        let ra = validate_longitude("right ascension", ra)?;
        let dec = validate_latitude("declination", dec)?;
        Ok(Self { ra, dec })
    }

    pub fn from_degrees(ra_deg: f64, dec_deg: f64) -> CoordResult<Self> {
        Self::new(Angle::from_degrees(ra_deg), Angle::from_degrees(dec_deg))
    }

    pub(crate) fn from_unchecked(ra: Angle, dec: Angle) -> Self {
        Self {
            ra: ra.normalized(),
            dec,
        }
    }

    pub fn ra(&self) -> Angle {
        self.ra
    }

    pub fn dec(&self) -> Angle {
        self.dec
    }

    /// Hour angle of this position for the given local sidereal time.
    pub fn to_hour_angle(&self, local_time: Angle) -> HourAnglePosition {
        HourAnglePosition {
            hour_angle: hour_angle_from_right_ascension(self.ra, local_time),
            dec: self.dec,
        }
    }
}

impl fmt::Display for EquatorialPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RA={:.6}°, Dec={:.6}°",
            self.ra.degrees(),
            self.dec.degrees()
        )
    }
}

/// Hour angle and declination.
///
/// The hour angle is kept in [0, 360) degrees, measured westward from the
/// meridian.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HourAnglePosition {
    hour_angle: Angle,
    dec: Angle,
}

impl HourAnglePosition {
    pub fn new(hour_angle: Angle, dec: Angle) -> CoordResult<Self> {
        let hour_angle = validate_longitude("hour angle", hour_angle)?;
        let dec = validate_latitude("declination", dec)?;
        Ok(Self { hour_angle, dec })
    }

    pub fn from_degrees(hour_angle_deg: f64, dec_deg: f64) -> CoordResult<Self> {
        Self::new(
            Angle::from_degrees(hour_angle_deg),
            Angle::from_degrees(dec_deg),
        )
    }

    pub(crate) fn from_unchecked(hour_angle: Angle, dec: Angle) -> Self {
        Self {
            hour_angle: hour_angle.normalized(),
            dec,
        }
    }

    pub fn hour_angle(&self) -> Angle {
        self.hour_angle
    }

    pub fn dec(&self) -> Angle {
        self.dec
    }

    /// Right ascension for the given local sidereal time.
    pub fn to_equatorial(&self, local_time: Angle) -> EquatorialPosition {
        EquatorialPosition {
            ra: right_ascension_from_hour_angle(self.hour_angle, local_time),
            dec: self.dec,
        }
    }
}

/// Where the observer stands. Only the geographic latitude enters the
/// horizontal transforms.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Observer {
    latitude: Angle,
}

impl Observer {
    pub fn new(latitude: Angle) -> CoordResult<Self> {
        Ok(Self {
            latitude: validate_latitude("observer latitude", latitude)?,
        })
    }

    pub fn from_degrees(latitude_deg: f64) -> CoordResult<Self> {
        Self::new(Angle::from_degrees(latitude_deg))
    }

    pub fn latitude(&self) -> Angle {
        self.latitude
    }

    /// South of the equator, where azimuths are reported reflected as
    /// `180 - A`.
    pub fn is_southern(&self) -> bool {
        self.latitude.radians() < 0.0
    }
}

/// `H = LST - RA`, normalized into [0, 360).
///
/// ```
/// use skyframe_coords::frames::hour_angle_from_right_ascension;
/// use skyframe_core::Angle;
///
/// let ha = hour_angle_from_right_ascension(Angle::from_degrees(350.0), Angle::from_degrees(10.0));
/// assert!((ha.degrees() - 20.0).abs() < 1e-10);
/// ```
pub fn hour_angle_from_right_ascension(ra: Angle, local_time: Angle) -> Angle {
    (local_time - ra).normalized()
}

/// `RA = LST - H`, normalized into [0, 360).
pub fn right_ascension_from_hour_angle(hour_angle: Angle, local_time: Angle) -> Angle {
    (local_time - hour_angle).normalized()
}
