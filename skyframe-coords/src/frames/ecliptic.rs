use super::{validate_latitude, validate_longitude, EquatorialPosition};
use crate::CoordResult;
use skyframe_core::Angle;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ecliptic latitude (beta) and longitude (lambda).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EclipticPosition {
    latitude: Angle,
    longitude: Angle,
}

impl EclipticPosition {
    pub fn new(latitude: Angle, longitude: Angle) -> CoordResult<Self> {
        let latitude = validate_latitude("ecliptic latitude", latitude)?;
        let longitude = validate_longitude("ecliptic longitude", longitude)?;
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

    pub fn north_ecliptic_pole() -> Self {
        Self {
            latitude: Angle::HALF_PI,
            longitude: Angle::ZERO,
        }
    }

    pub fn is_near_ecliptic_plane(&self) -> bool {
        self.latitude.abs().degrees() < 5.0
    }

    /// Rotates back to the equator about the vernal-equinox axis.
    pub fn to_equatorial(&self, obliquity: Angle) -> EquatorialPosition {
        let (sin_eps, cos_eps) = obliquity.sin_cos();
        let (sin_beta, cos_beta) = self.latitude.sin_cos();
        let (sin_lambda, cos_lambda) = self.longitude.sin_cos();

        let dec = Angle::asin(sin_beta * cos_eps + cos_beta * sin_eps * sin_lambda);
        let ra = Angle::atan2(
            sin_lambda * cos_beta * cos_eps - sin_beta * sin_eps,
            cos_lambda * cos_beta,
        );

        EquatorialPosition::from_unchecked(ra, dec)
    }
}

impl EquatorialPosition {
    /// Rotates onto the ecliptic about the vernal-equinox axis.
    ///
    /// ```
    /// use skyframe_coords::frames::EquatorialPosition;
    /// use skyframe_core::Angle;
    ///
    /// let eps = Angle::from_degrees(23.43927944);
    /// let summer_solstice = EquatorialPosition::from_degrees(90.0, 23.43927944).unwrap();
    /// let ecl = summer_solstice.to_ecliptic(eps);
    /// assert!(ecl.latitude().degrees().abs() < 1e-9);
    /// assert!((ecl.longitude().degrees() - 90.0).abs() < 1e-9);
    /// ```
    pub fn to_ecliptic(&self, obliquity: Angle) -> EclipticPosition {
        let (sin_eps, cos_eps) = obliquity.sin_cos();
        let (sin_dec, cos_dec) = self.dec().sin_cos();
        let (sin_ra, cos_ra) = self.ra().sin_cos();

        let latitude = Angle::asin(sin_dec * cos_eps - cos_dec * sin_eps * sin_ra);
        let longitude = Angle::atan2(
            sin_ra * cos_dec * cos_eps + sin_dec * sin_eps,
            cos_ra * cos_dec,
        );

        EclipticPosition {
            latitude,
            longitude: longitude.normalized(),
        }
    }
}

impl fmt::Display for EclipticPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "β={:.6}°, λ={:.6}°",
            self.latitude.degrees(),
            self.longitude.degrees()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eps() -> Angle {
        Angle::from_degrees(23.43927944)
    }

    #[test]
    fn test_vernal_equinox_is_fixed() {
        let ecl = EquatorialPosition::from_degrees(0.0, 0.0)
            .unwrap()
            .to_ecliptic(eps());
        assert!(ecl.latitude().degrees().abs() < 1e-12);
        assert!(ecl.longitude().degrees().abs() < 1e-12);
    }

    #[test]
    fn test_celestial_pole_latitude() {
        let ecl = EquatorialPosition::from_degrees(0.0, 90.0)
            .unwrap()
            .to_ecliptic(eps());
        assert!((ecl.latitude().degrees() - (90.0 - 23.43927944)).abs() < 1e-9);
        assert!((ecl.longitude().degrees() - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_ecliptic_pole_maps_to_equatorial() {
        let eq = EclipticPosition::north_ecliptic_pole().to_equatorial(eps());
        assert!((eq.ra().degrees() - 270.0).abs() < 1e-9);
        assert!((eq.dec().degrees() - (90.0 - 23.43927944)).abs() < 1e-9);
    }

    #[test]
    fn test_round_trip() {
        for (ra, dec) in [(10.0, 5.0), (123.4, -45.6), (359.0, 80.0), (200.0, -10.0)] {
            let eq = EquatorialPosition::from_degrees(ra, dec).unwrap();
            let back = eq.to_ecliptic(eps()).to_equatorial(eps());
            assert!((back.ra().degrees() - ra).abs() < 1e-9);
            assert!((back.dec().degrees() - dec).abs() < 1e-9);
        }
    }

    #[test]
    fn test_rejects_out_of_range_latitude() {
        assert!(EclipticPosition::from_degrees(120.0, 0.0).is_err());
        let ecl = EclipticPosition::from_degrees(1.0, -90.0).unwrap();
        assert!((ecl.longitude().degrees() - 270.0).abs() < 1e-10);
        assert!(ecl.is_near_ecliptic_plane());
    }
}
