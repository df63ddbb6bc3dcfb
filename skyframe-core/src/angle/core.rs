//! Core angle type.
//!
//! [`Angle`] stores radians and converts to and from degrees and hours
//! (1h = 15 deg). The frame transforms do all their trigonometry on `Angle`s and
//! only drop to plain degrees at the edges.
//!
//! ```
//! use skyframe_core::Angle;
//!
//! let ra = Angle::from_hours(6.0);
//! assert!((ra.degrees() - 90.0).abs() < 1e-10);
//!
//! let (sin, cos) = Angle::from_degrees(30.0).sin_cos();
//! assert!((sin - 0.5).abs() < 1e-10);
//! assert!((cos - 0.866025).abs() < 1e-5);
//! ```
//!
//! Sexagesimal rendering goes through [`Angle::to_dms`] and [`Angle::to_hms`],
//! which share their algorithm with the free functions in
//! [`sexagesimal`](super::sexagesimal).

use crate::constants::{DEGREES_PER_HOUR, HALF_PI, PI};
use crate::AngleResult;

/// An angular measurement stored as radians.
///
/// `Eq` and `Ord` are not implemented because the payload can be NaN.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd, Default)]
pub struct Angle {
    rad: f64,
}

impl Angle {
    pub const ZERO: Self = Self { rad: 0.0 };

    pub const PI: Self = Self { rad: PI };

    pub const HALF_PI: Self = Self { rad: HALF_PI };

    /// Creates an angle from radians.
    #[inline]
    pub const fn from_radians(rad: f64) -> Self {
        Self { rad }
    }

    /// Creates an angle from degrees.
    ///
    /// ```
    /// use skyframe_core::Angle;
    ///
    /// let angle = Angle::from_degrees(180.0);
    /// assert!((angle.radians() - std::f64::consts::PI).abs() < 1e-10);
    /// ```
    #[inline]
    pub fn from_degrees(deg: f64) -> Self {
        Self {
            rad: deg.to_radians(),
        }
    }

    /// Creates an angle from hours, 24h being a full turn.
    #[inline]
    pub fn from_hours(h: f64) -> Self {
        Self::from_degrees(h * DEGREES_PER_HOUR)
    }

    /// `asin(x)` as an angle, with `x` clamped to [-1, 1] first.
    #[inline]
    pub fn asin(x: f64) -> Self {
        Self::from_radians(libm::asin(super::normalize::clamp_unit(x)))
    }

    /// `acos(x)` as an angle, with `x` clamped to [-1, 1] first.
    #[inline]
    pub fn acos(x: f64) -> Self {
        Self::from_radians(libm::acos(super::normalize::clamp_unit(x)))
    }

    /// Quadrant-preserving `atan2(y, x)` as an angle in (-pi, pi].
    #[inline]
    pub fn atan2(y: f64, x: f64) -> Self {
        Self::from_radians(libm::atan2(y, x))
    }

    #[inline]
    pub fn radians(self) -> f64 {
        self.rad
    }

    #[inline]
    pub fn degrees(self) -> f64 {
        self.rad.to_degrees()
    }

    /// Returns the angle in hours, for right ascension and hour angle.
    #[inline]
    pub fn hours(self) -> f64 {
        self.degrees() / DEGREES_PER_HOUR
    }

    #[inline]
    pub fn sin(self) -> f64 {
        libm::sin(self.rad)
    }

    #[inline]
    pub fn cos(self) -> f64 {
        libm::cos(self.rad)
    }

    /// Returns `(sin, cos)`.
    #[inline]
    pub fn sin_cos(self) -> (f64, f64) {
        libm::sincos(self.rad)
    }

    #[inline]
    pub fn abs(self) -> Self {
        Self {
            rad: self.rad.abs(),
        }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.rad.is_finite()
    }

    /// Normalizes to [0, 360) degrees.
    ///
    /// ```
    /// use skyframe_core::Angle;
    ///
    /// let angle = Angle::from_degrees(-90.0).normalized();
    /// assert!((angle.degrees() - 270.0).abs() < 1e-10);
    /// ```
    #[inline]
    pub fn normalized(self) -> Self {
        Self {
            rad: super::normalize::wrap_0_2pi(self.rad),
        }
    }

    /// Complement `90 deg - self`, used for altitude <-> zenith angle.
    #[inline]
    pub fn complement(self) -> Self {
        Self {
            rad: HALF_PI - self.rad,
        }
    }

    /// Renders the angle as `D:M:S` text.
    #[inline]
    pub fn to_dms(self) -> AngleResult<String> {
        super::sexagesimal::decimal_to_dms(self.degrees())
    }

    /// Renders the angle as `H:M:S` text. Negative angles are rejected.
    #[inline]
    pub fn to_hms(self) -> AngleResult<String> {
        super::sexagesimal::decimal_to_hms(self.degrees())
    }
}

/// Shorthand for [`Angle::from_radians`].
#[inline]
pub fn rad(v: f64) -> Angle {
    Angle::from_radians(v)
}

/// Shorthand for [`Angle::from_degrees`].
#[inline]
pub fn deg(v: f64) -> Angle {
    Angle::from_degrees(v)
}

/// Shorthand for [`Angle::from_hours`].
///
/// ```
/// use skyframe_core::angle::hours;
///
/// let ra = hours(6.0);
/// assert!((ra.degrees() - 90.0).abs() < 1e-10);
/// ```
#[inline]
pub fn hours(v: f64) -> Angle {
    Angle::from_hours(v)
}
