//! Galactic coordinates.
//!
//! The transform is a rotation defined by three numbers held in
//! [`GalacticPole`]: the equatorial position of the north galactic pole and
//! the galactic longitude of the north celestial pole.
//!
//! ```
//! use skyframe_coords::constants::GalacticPole;
//! use skyframe_coords::frames::EquatorialPosition;
//!
//! // Galactic centre
//! let sgr_a = EquatorialPosition::from_degrees(266.405, -28.936).unwrap();
//! let gal = sgr_a.to_galactic(&GalacticPole::default());
//! assert!(gal.latitude().degrees().abs() < 1e-3);
//! assert!(gal.longitude().degrees() < 1e-3);
//! ```

use super::{validate_latitude, validate_longitude, EquatorialPosition};
use crate::constants::GalacticPole;
use crate::CoordResult;
use skyframe_core::Angle;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Galactic latitude (b) and longitude (l).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GalacticPosition {
    latitude: Angle,
    longitude: Angle,
}

impl GalacticPosition {
    pub fn new(latitude: Angle, longitude: Angle) -> CoordResult<Self> {
        let latitude = validate_latitude("galactic latitude", latitude)?;
        let longitude = validate_longitude("galactic longitude", longitude)?;
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn from_degrees(latitude_deg: f64, longitude_deg: f64) -> CoordResult<Self> {
        Self::new(
            Angle::from_degrees(latitude_deg),
            Angle::from_degrees(longitude_deg),
        )
    }

    pub fn latitude(&self) -> Angle {
        self.latitude
    }

    pub fn longitude(&self) -> Angle {
        self.longitude
    }

    pub fn galactic_center() -> Self {
        Self {
            latitude: Angle::ZERO,
            longitude: Angle::ZERO,
        }
    }

    pub fn is_in_galactic_plane(&self, tolerance_deg: f64) -> bool {
        self.latitude.abs().degrees() <= tolerance_deg
    }

    pub fn to_equatorial(&self, pole: &GalacticPole) -> EquatorialPosition {
        let (sin_dg, cos_dg) = pole.dec_angle().sin_cos();
        let (sin_b, cos_b) = self.latitude.sin_cos();
        let (sin_dl, cos_dl) = (pole.node_angle() - self.longitude).sin_cos();

        let dec = Angle::asin(sin_b * sin_dg + cos_b * cos_dg * cos_dl);
        let ra = pole.ra_angle()
            + Angle::atan2(cos_b * sin_dl, sin_b * cos_dg - cos_b * sin_dg * cos_dl);

        EquatorialPosition::from_unchecked(ra, dec)
    }
}

impl EquatorialPosition {
    pub fn to_galactic(&self, pole: &GalacticPole) -> GalacticPosition {
        let (sin_dg, cos_dg) = pole.dec_angle().sin_cos();
        let (sin_dec, cos_dec) = self.dec().sin_cos();
        let (sin_da, cos_da) = (self.ra() - pole.ra_angle()).sin_cos();

        let latitude = Angle::asin(sin_dec * sin_dg + cos_dec * cos_dg * cos_da);
        let longitude = pole.node_angle()
            - Angle::atan2(cos_dec * sin_da, sin_dec * cos_dg - cos_dec * sin_dg * cos_da);

        GalacticPosition {
            latitude,
            longitude: longitude.normalized(),
        }
    }
}

impl fmt::Display for GalacticPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "b={:.6}°, l={:.6}°",
            self.latitude.degrees(),
            self.longitude.degrees()
        )
    }
}
