//! Angle normalization.
//!
//! | Quantity | Range | Function |
//! |----------|-------|----------|
//! | Right ascension, hour angle, azimuth, ecliptic/galactic longitude | [0, 2pi) | [`wrap_0_2pi`] |
//! | Same, in degrees, before sexagesimal output | [0, 360) | [`wrap_0_360`] |
//! | Declination, latitude, altitude | [-pi/2, +pi/2] | [`clamp_dec`] |
//!
//! Wrapping uses `libm::fmod` (via [`crate::math::fmod`]), whose result keeps
//! the sign of the dividend, and then shifts negative results up by one turn.
//!
//! ```
//! use skyframe_core::angle::{wrap_0_2pi, wrap_0_360};
//!
//! assert!((wrap_0_360(-90.0) - 270.0).abs() < 1e-12);
//! assert!(wrap_0_2pi(-0.5) > 0.0);
//! ```

use crate::constants::{DEGREES_PER_CIRCLE, HALF_PI, TWOPI};
use crate::math::fmod;

/// Wraps an angle to [0, 2pi) radians.
///
/// A tiny negative input such as `-1e-17` would land exactly on `2pi` after the
/// shift; that case is folded back to zero so the upper bound stays open.
///
/// ```
/// use skyframe_core::angle::wrap_0_2pi;
/// use std::f64::consts::PI;
///
/// let x = wrap_0_2pi(-PI / 2.0);
/// assert!((x - 3.0 * PI / 2.0).abs() < 1e-10);
/// ```
#[inline]
pub fn wrap_0_2pi(x: f64) -> f64 {
    wrap_positive(x, TWOPI)
}

/// Wraps an angle to [0, 360) degrees.
///
/// Applied to full-turn quantities just before they are rendered.
#[inline]
pub fn wrap_0_360(x: f64) -> f64 {
    wrap_positive(x, DEGREES_PER_CIRCLE)
}

#[inline]
fn wrap_positive(x: f64, turn: f64) -> f64 {
    let w = fmod(x, turn);
    let w = if w < 0.0 { w + turn } else { w };
    if w >= turn {
        0.0
    } else {
        // fmod(-0.0, _) is -0.0
        w + 0.0
    }
}

/// Clamps an angle to [-pi/2, +pi/2] radians.
#[inline]
pub fn clamp_dec(x: f64) -> f64 {
    x.clamp(-HALF_PI, HALF_PI)
}

/// Clamps the argument of `asin`/`acos` to [-1, 1].
///
/// Spherical-trig sums can overshoot unity by an ulp at the poles, which would
/// otherwise turn a valid pole position into NaN.
#[inline]
pub fn clamp_unit(x: f64) -> f64 {
    x.clamp(-1.0, 1.0)
}
