#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.141592653589793238462643;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const HALF_PI: f64 = 1.5707963267948966192313216;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const TWOPI: f64 = 6.283185307179586476925287;

#[allow(clippy::excessive_precision)]
pub const DEG_TO_RAD: f64 = 1.745329251994329576923691e-2;

#[allow(clippy::excessive_precision)]
pub const RAD_TO_DEG: f64 = 57.29577951308232087679815;

pub const DEGREES_PER_CIRCLE: f64 = 360.0;

pub const DEGREES_PER_HOUR: f64 = 15.0;

pub const MINUTES_PER_UNIT: f64 = 60.0;

pub const SECONDS_PER_UNIT: f64 = 3600.0;

/// Decimal places kept on the seconds field of formatted sexagesimal text.
pub const SEXAGESIMAL_SECONDS_DIGITS: usize = 4;

/// Mean obliquity of the ecliptic used by the ecliptic transforms, in degrees.
pub const DEFAULT_OBLIQUITY_DEG: f64 = 23.43927944;

/// Right ascension of the north galactic pole, in degrees.
pub const NGP_RA_DEG: f64 = 192.85948;

/// Declination of the north galactic pole, in degrees.
pub const NGP_DEC_DEG: f64 = 27.12825;

/// Galactic longitude of the north celestial pole (ascending node), in degrees.
pub const NCP_GALACTIC_LONGITUDE_DEG: f64 = 122.93192;
