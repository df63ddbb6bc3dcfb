//! Stellar parameter estimators.
//!
//! Small closed-form relations used to put rough numbers on a star from its
//! effective temperature and surface gravity, plus the Planck function for
//! overlaying a blackbody curve on an observed spectrum.
//!
//! ```
//! use skyframe_stellar::StellarParameters;
//!
//! let sun = StellarParameters::estimate(5800.0, 4.438).unwrap();
//! assert!(sun.solar_masses() > 0.5 && sun.solar_masses() < 1.5);
//! ```

pub mod constants;
pub mod error;
pub mod estimators;
pub mod spectrum;

pub use error::{Error, Result};
pub use estimators::{
    luminosity_from_mass, luminosity_from_radius, mass_from_gravity_and_radius,
    mass_from_surface_gravity, radius_from_luminosity, surface_gravity_from_log_g, MassRegime,
    StellarParameters,
};
pub use spectrum::{blackbody_spectrum, planck_function, vacuum_to_air};
