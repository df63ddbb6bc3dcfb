use approx::assert_relative_eq;
use skyframe_stellar::constants::{SOLAR_LUMINOSITY, SOLAR_MASS, SOLAR_RADIUS};
use skyframe_stellar::{
    luminosity_from_mass, mass_from_surface_gravity, radius_from_luminosity, Error,
    StellarParameters,
};

#[test]
fn solar_luminosity_reproduces_solar_radius() {
    let radius = radius_from_luminosity(SOLAR_LUMINOSITY, 5772.0).unwrap();
    assert_relative_eq!(radius, SOLAR_RADIUS, max_relative = 1e-5);
}

#[test]
fn solar_gravity_gives_scaled_solar_mass() {
    // With T = T_sun and g = G M_sun / R_sun^2 the relation collapses to
    // M_sun * 1.4^(-0.4).
    let g = 6.67430e-11 * SOLAR_MASS / (SOLAR_RADIUS * SOLAR_RADIUS);
    let mass = mass_from_surface_gravity(5800.0, g).unwrap();
    assert_relative_eq!(mass, SOLAR_MASS * 1.4f64.powf(-0.4), max_relative = 1e-10);
}

#[test]
fn estimate_chain_for_a_sunlike_star() {
    let star = StellarParameters::estimate(5800.0, 4.438).unwrap();
    assert_relative_eq!(star.surface_gravity, 274.16, max_relative = 1e-3);
    assert_relative_eq!(star.solar_masses(), 0.8741, max_relative = 1e-3);
    assert_relative_eq!(
        star.luminosity,
        luminosity_from_mass(star.mass).unwrap(),
        max_relative = 1e-12
    );
    assert_relative_eq!(star.solar_luminosities(), 0.5838, max_relative = 1e-3);
    assert_relative_eq!(star.solar_radii(), 0.7567, max_relative = 1e-3);
}

#[test]
fn hotter_stars_come_out_more_massive() {
    let cool = StellarParameters::estimate(4500.0, 4.5).unwrap();
    let hot = StellarParameters::estimate(9000.0, 4.5).unwrap();
    assert!(hot.mass > cool.mass);
    assert!(hot.luminosity > cool.luminosity);
}

#[test]
fn zero_temperature_is_rejected() {
    assert_eq!(
        StellarParameters::estimate(0.0, 4.4),
        Err(Error::NonPositive {
            quantity: "temperature",
            value: 0.0
        })
    );
}
