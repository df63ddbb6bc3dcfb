//! Blackbody radiation and wavelength conversion.

use crate::constants::{ANGSTROM, BOLTZMANN, PLANCK, SPEED_OF_LIGHT};
use crate::error::{require_positive, Result};

/// Spectral radiance `B(lambda, T)` in W sr^-1 m^-3.
///
/// `wavelength` is in metres and `temperature` in kelvin. Far on the Wien
/// side the exponential overflows and the radiance is reported as zero.
///
/// ```
/// use skyframe_stellar::planck_function;
///
/// // A 5800 K blackbody peaks near 500 nm.
/// let peak = planck_function(500e-9, 5800.0).unwrap();
/// assert!(peak > planck_function(400e-9, 5800.0).unwrap());
/// assert!(peak > planck_function(700e-9, 5800.0).unwrap());
/// ```
pub fn planck_function(wavelength: f64, temperature: f64) -> Result<f64> {
    let w = require_positive("wavelength", wavelength)?;
    let t = require_positive("temperature", temperature)?;

    let prefactor = 2.0 * PLANCK * SPEED_OF_LIGHT * SPEED_OF_LIGHT / libm::pow(w, 5.0);
    let exponent = PLANCK * SPEED_OF_LIGHT / (w * BOLTZMANN * t);
    Ok(prefactor / libm::expm1(exponent))
}

/// Vacuum to air wavelength, both in angstroms.
///
/// `lambda_air = lambda_vac / (1 + 2.735182e-4 + 131.4182 / lambda^2 + 2.76249e8 / lambda^4)`
pub fn vacuum_to_air(wavelength: f64) -> Result<f64> {
    let w = require_positive("wavelength", wavelength)?;
    let w2 = w * w;
    Ok(w / (1.0 + 2.735182e-4 + 131.4182 / w2 + 2.76249e8 / (w2 * w2)))
}

/// Blackbody radiance at each wavelength in `wavelengths` (angstroms).
pub fn blackbody_spectrum(wavelengths: &[f64], temperature: f64) -> Result<Vec<f64>> {
    wavelengths
        .iter()
        .map(|&w| planck_function(w * ANGSTROM, temperature))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_planck_reference_value() {
        assert_relative_eq!(
            planck_function(500e-9, 5800.0).unwrap(),
            2.688_219_962_592_9e13,
            max_relative = 1e-9
        );
    }

    #[test]
    fn test_planck_rises_with_temperature() {
        let cool = planck_function(1e-6, 3000.0).unwrap();
        let hot = planck_function(1e-6, 6000.0).unwrap();
        assert!(hot > cool);
    }

    #[test]
    fn test_planck_wien_tail_underflows_to_zero() {
        assert_eq!(planck_function(1e-9, 10.0).unwrap(), 0.0);
    }

    #[test]
    fn test_vacuum_to_air() {
        assert_relative_eq!(vacuum_to_air(5000.0).unwrap(), 4998.604305, max_relative = 1e-9);
        assert!(vacuum_to_air(0.0).is_err());
    }

    #[test]
    fn test_spectrum_matches_pointwise() {
        let wavelengths = [4000.0, 5000.0, 6000.0];
        let spectrum = blackbody_spectrum(&wavelengths, 5800.0).unwrap();
        assert_eq!(spectrum.len(), 3);
        assert_eq!(spectrum[1], planck_function(5000.0 * ANGSTROM, 5800.0).unwrap());
        assert!(blackbody_spectrum(&[5000.0, -1.0], 5800.0).is_err());
        assert!(blackbody_spectrum(&[], 5800.0).unwrap().is_empty());
    }
}
