//! Frame constants.
//!
//! The ecliptic and galactic transforms are parameterised by a handful of
//! numbers. [`FrameConstants::default`] carries the values used throughout the
//! library; callers wanting a different epoch or pole definition build their
//! own and pass it in.

use skyframe_core::constants::{
    DEFAULT_OBLIQUITY_DEG, NCP_GALACTIC_LONGITUDE_DEG, NGP_DEC_DEG, NGP_RA_DEG,
};
use skyframe_core::Angle;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Orientation of the galactic frame relative to the equator, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GalacticPole {
    /// Right ascension of the north galactic pole.
    pub ra: f64,
    /// Declination of the north galactic pole.
    pub dec: f64,
    /// Galactic longitude of the north celestial pole.
    pub ascending_node_longitude: f64,
}

impl Default for GalacticPole {
    fn default() -> Self {
        Self {
            ra: NGP_RA_DEG,
            dec: NGP_DEC_DEG,
            ascending_node_longitude: NCP_GALACTIC_LONGITUDE_DEG,
        }
    }
}

impl GalacticPole {
    pub fn ra_angle(&self) -> Angle {
        Angle::from_degrees(self.ra)
    }

    pub fn dec_angle(&self) -> Angle {
        Angle::from_degrees(self.dec)
    }

    pub fn node_angle(&self) -> Angle {
        Angle::from_degrees(self.ascending_node_longitude)
    }
}

/// Constants for the ecliptic and galactic transforms.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FrameConstants {
    /// Obliquity of the ecliptic in degrees.
    pub obliquity: f64,
    pub galactic_pole: GalacticPole,
}

impl Default for FrameConstants {
    fn default() -> Self {
        Self {
            obliquity: DEFAULT_OBLIQUITY_DEG,
            galactic_pole: GalacticPole::default(),
        }
    }
}

impl FrameConstants {
    pub fn new(obliquity: f64, galactic_pole: GalacticPole) -> Self {
        Self {
            obliquity,
            galactic_pole,
        }
    }

    pub fn obliquity_angle(&self) -> Angle {
        Angle::from_degrees(self.obliquity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let constants = FrameConstants::default();
        assert_eq!(constants.obliquity, 23.43927944);
        assert_eq!(constants.galactic_pole.ra, 192.85948);
        assert_eq!(constants.galactic_pole.dec, 27.12825);
        assert_eq!(constants.galactic_pole.ascending_node_longitude, 122.93192);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let constants: FrameConstants = serde_json::from_str(r#"{"obliquity": 23.5}"#).unwrap();
        assert_eq!(constants.obliquity, 23.5);
        assert_eq!(constants.galactic_pole, GalacticPole::default());
    }
}
