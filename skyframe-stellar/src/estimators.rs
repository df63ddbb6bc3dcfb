//! Rough stellar parameters from effective temperature and surface gravity.
//!
//! The chain is:
//!
//! 1. mass from temperature and gravity, scaled against the Sun
//!    ([`mass_from_surface_gravity`]),
//! 2. luminosity from mass via a piecewise mass-luminosity relation
//!    ([`luminosity_from_mass`]),
//! 3. radius from luminosity and temperature via Stefan-Boltzmann
//!    ([`radius_from_luminosity`]).
//!
//! These are order-of-magnitude estimates for main-sequence stars, not fits.

use crate::constants::{
    GRAVITATIONAL_CONSTANT, SOLAR_LUMINOSITY, SOLAR_MASS, SOLAR_RADIUS, SOLAR_TEMPERATURE,
    STEFAN_BOLTZMANN,
};
use crate::error::{require_positive, Result};
use core::f64::consts::PI;

/// Mass in kg from effective temperature (K) and surface gravity (m/s^2).
///
/// Combines `g = GM/R^2`, `L ~ R^2 T^4` and `L ~ 1.4 M^3.5`, normalized to the
/// solar radius and temperature:
///
/// ```text
/// M = (G T^4 / (g R_sun^2 T_sun^4) * M_sun^3.5 / 1.4)^(1/2.5)
/// ```
pub fn mass_from_surface_gravity(temperature: f64, surface_gravity: f64) -> Result<f64> {
    let t = require_positive("temperature", temperature)?;
    let g = require_positive("surface gravity", surface_gravity)?;

    let ratio = (GRAVITATIONAL_CONSTANT * libm::pow(t, 4.0))
        / (g * SOLAR_RADIUS * SOLAR_RADIUS * libm::pow(SOLAR_TEMPERATURE, 4.0));
    let scale = libm::pow(SOLAR_MASS, 3.5) / 1.4;
    Ok(libm::pow(ratio * scale, 1.0 / 2.5))
}

/// Mass in kg from surface gravity (m/s^2) and a known radius (m), `g R^2 / G`.
pub fn mass_from_gravity_and_radius(surface_gravity: f64, radius: f64) -> Result<f64> {
    let g = require_positive("surface gravity", surface_gravity)?;
    let r = require_positive("radius", radius)?;
    Ok(g * r * r / GRAVITATIONAL_CONSTANT)
}

/// Which branch of the mass-luminosity relation applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MassRegime {
    /// M < 0.43 M_sun: `L = 0.23 M^2.3`
    LowMass,
    /// 0.43 <= M < 2: `L = M^4`
    SolarLike,
    /// 2 <= M < 55: `L = 1.4 M^3.5`
    Intermediate,
    /// M >= 55: `L = 32000 M`
    Massive,
}

impl MassRegime {
    pub fn for_solar_masses(m: f64) -> Self {
        if m < 0.43 {
            Self::LowMass
        } else if m < 2.0 {
            Self::SolarLike
        } else if m < 55.0 {
            Self::Intermediate
        } else {
            Self::Massive
        }
    }

    /// Luminosity in solar units for a mass in solar units.
    pub fn solar_luminosity(self, m: f64) -> f64 {
        match self {
            Self::LowMass => 0.23 * libm::pow(m, 2.3),
            Self::SolarLike => libm::pow(m, 4.0),
            Self::Intermediate => 1.4 * libm::pow(m, 3.5),
            Self::Massive => 32000.0 * m,
        }
    }
}

/// Luminosity in W from mass in kg.
///
/// ```
/// use skyframe_stellar::{luminosity_from_mass, constants::{SOLAR_LUMINOSITY, SOLAR_MASS}};
///
/// let l = luminosity_from_mass(SOLAR_MASS).unwrap();
/// assert!((l / SOLAR_LUMINOSITY - 1.0).abs() < 1e-12);
/// ```
pub fn luminosity_from_mass(mass: f64) -> Result<f64> {
    let m = require_positive("mass", mass)? / SOLAR_MASS;
    let regime = MassRegime::for_solar_masses(m);
    tracing::debug!(solar_masses = m, ?regime, "mass-luminosity regime");
    Ok(regime.solar_luminosity(m) * SOLAR_LUMINOSITY)
}

/// Radius in m from luminosity (W) and effective temperature (K),
/// `sqrt(L / (4 pi sigma T^4))`.
pub fn radius_from_luminosity(luminosity: f64, temperature: f64) -> Result<f64> {
    let l = require_positive("luminosity", luminosity)?;
    let t = require_positive("temperature", temperature)?;
    Ok(libm::sqrt(
        l / (4.0 * PI * STEFAN_BOLTZMANN * libm::pow(t, 4.0)),
    ))
}

/// Luminosity in W from radius (m) and effective temperature (K),
/// `4 pi R^2 sigma T^4`.
pub fn luminosity_from_radius(radius: f64, temperature: f64) -> Result<f64> {
    let r = require_positive("radius", radius)?;
    let t = require_positive("temperature", temperature)?;
    Ok(4.0 * PI * r * r * STEFAN_BOLTZMANN * libm::pow(t, 4.0))
}

/// Converts `log10 g` in cgs (cm/s^2) to m/s^2.
pub fn surface_gravity_from_log_g(log_g_cgs: f64) -> f64 {
    libm::pow(10.0, log_g_cgs) / 100.0
}

/// Mass, luminosity and radius estimated for one star, SI units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StellarParameters {
    pub temperature: f64,
    pub surface_gravity: f64,
    pub mass: f64,
    pub luminosity: f64,
    pub radius: f64,
}

impl StellarParameters {
    /// Runs the full estimate chain from effective temperature (K) and
    /// `log10 g` in cgs units, as catalogues usually tabulate it.
    pub fn estimate(temperature: f64, log_g_cgs: f64) -> Result<Self> {
        let surface_gravity = surface_gravity_from_log_g(log_g_cgs);
        let mass = mass_from_surface_gravity(temperature, surface_gravity)?;
        let luminosity = luminosity_from_mass(mass)?;
        let radius = radius_from_luminosity(luminosity, temperature)?;
        Ok(Self {
            temperature,
            surface_gravity,
            mass,
            luminosity,
            radius,
        })
    }

    pub fn solar_masses(&self) -> f64 {
        self.mass / SOLAR_MASS
    }

    pub fn solar_luminosities(&self) -> f64 {
        self.luminosity / SOLAR_LUMINOSITY
    }

    pub fn solar_radii(&self) -> f64 {
        self.radius / SOLAR_RADIUS
    }
}
