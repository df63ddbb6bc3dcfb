//! Cartesian and spherical points in 3D space.
//!
//! Spherical coordinates follow the physics convention: `rho` is the distance
//! from the origin, `theta` the azimuthal angle in the xy-plane measured from
//! +x, and `phi` the polar angle measured from +z.
//!
//! ```text
//! x = rho sin(phi) cos(theta)
//! y = rho sin(phi) sin(theta)
//! z = rho cos(phi)
//! ```

use crate::{CoordError, CoordResult};
use skyframe_core::Angle;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CartesianPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl CartesianPoint {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Distance from the origin. Uses `hypot` so that neither very small nor
    /// very large components underflow or overflow in the squares.
    pub fn magnitude(&self) -> f64 {
        norm(self.x, self.y, self.z)
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: &Self) -> f64 {
        norm(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    pub fn is_origin(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Moves the point by a displacement.
    pub fn translate(&self, dx: f64, dy: f64, dz: f64) -> Self {
        Self::new(self.x + dx, self.y + dy, self.z + dz)
    }

    pub fn to_spherical(&self) -> CoordResult<SphericalPoint> {
        cartesian_to_spherical(self)
    }
}

fn norm(x: f64, y: f64, z: f64) -> f64 {
    libm::hypot(libm::hypot(x, y), z)
}

impl fmt::Display for CartesianPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SphericalPoint {
    rho: f64,
    theta: Angle,
    phi: Angle,
}

impl SphericalPoint {
    /// # Errors
    ///
    /// [`CoordError::InvalidCoordinate`] for a negative or non-finite `rho`,
    /// or non-finite angles.
    pub fn new(rho: f64, theta: Angle, phi: Angle) -> CoordResult<Self> {
        if !rho.is_finite() || rho < 0.0 {
            return Err(CoordError::invalid_coordinate(format!(
                "rho must be finite and non-negative, got {rho}"
            )));
        }
        if !theta.is_finite() || !phi.is_finite() {
            return Err(CoordError::invalid_coordinate(
                "spherical angles must be finite",
            ));
        }
        Ok(Self { rho, theta, phi })
    }

    pub fn from_degrees(rho: f64, theta_deg: f64, phi_deg: f64) -> CoordResult<Self> {
        Self::new(
            rho,
            Angle::from_degrees(theta_deg),
            Angle::from_degrees(phi_deg),
        )
    }

    pub fn rho(&self) -> f64 {
        self.rho
    }

    pub fn theta(&self) -> Angle {
        self.theta
    }

    pub fn phi(&self) -> Angle {
        self.phi
    }

    pub fn to_cartesian(&self) -> CartesianPoint {
        spherical_to_cartesian(self)
    }
}

impl fmt::Display for SphericalPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<{}, {:.6}°, {:.6}°>",
            self.rho,
            self.theta.degrees(),
            self.phi.degrees()
        )
    }
}

pub fn spherical_to_cartesian(point: &SphericalPoint) -> CartesianPoint {
    let (sin_theta, cos_theta) = point.theta.sin_cos();
    let (sin_phi, cos_phi) = point.phi.sin_cos();
    CartesianPoint::new(
        point.rho * sin_phi * cos_theta,
        point.rho * sin_phi * sin_theta,
        point.rho * cos_phi,
    )
}

/// `theta` comes back in (-180, 180] degrees and `phi` in [0, 180].
///
/// # Errors
///
/// [`CoordError::DegenerateOrigin`] at the origin, where neither angle is
/// defined. [`CoordError::InvalidCoordinate`] for non-finite components, or
/// when the distance itself exceeds `f64::MAX`.
pub fn cartesian_to_spherical(point: &CartesianPoint) -> CoordResult<SphericalPoint> {
    if !point.is_finite() {
        return Err(CoordError::invalid_coordinate(
            "cartesian components must be finite",
        ));
    }
    if point.is_origin() {
        return Err(CoordError::DegenerateOrigin);
    }
    let rho = point.magnitude();
    if !rho.is_finite() {
        return Err(CoordError::invalid_coordinate(format!(
            "distance of {point} from the origin overflows"
        )));
    }
    Ok(SphericalPoint {
        rho,
        theta: Angle::atan2(point.y, point.x),
        phi: Angle::acos(point.z / rho),
    })
}
