//! Physical constants (CODATA 2018) and nominal solar values, SI units.

/// Planck constant, J s.
#[allow(clippy::excessive_precision)]
pub const PLANCK: f64 = 6.62607015e-34;

/// Speed of light in vacuum, m/s.
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

/// Boltzmann constant, J/K.
pub const BOLTZMANN: f64 = 1.380649e-23;

/// Newtonian constant of gravitation, m^3 kg^-1 s^-2.
pub const GRAVITATIONAL_CONSTANT: f64 = 6.67430e-11;

/// Stefan-Boltzmann constant, W m^-2 K^-4.
#[allow(clippy::excessive_precision)]
pub const STEFAN_BOLTZMANN: f64 = 5.670374419e-8;

pub const SOLAR_RADIUS: f64 = 6.957e8;

pub const SOLAR_MASS: f64 = 1.9884e30;

pub const SOLAR_LUMINOSITY: f64 = 3.828e26;

/// Reference temperature for the mass estimate, K.
pub const SOLAR_TEMPERATURE: f64 = 5800.0;

pub const ANGSTROM: f64 = 1e-10;
