//! Celestial and geometric coordinate conversions.
//!
//! Two layers:
//!
//! - [`frames`]: typed positions ([`EquatorialPosition`], [`HorizontalPosition`],
//!   [`EclipticPosition`], [`GalacticPosition`], ...) built from
//!   [`Angle`]s, with the transforms as methods.
//! - [`convert`]: free functions taking decimal degrees or sexagesimal text
//!   and returning either, for callers working with catalogue-style strings.
//!
//! Plus [`cartesian`] (3D Cartesian and spherical points) and
//! [`number_line`] (a one-dimensional displacement model).
//!
//! ```
//! use skyframe_coords::{convert, FrameConstants, OutputFormat};
//!
//! let (ra, dec) = convert::galactic_to_equatorial(
//!     0.0, 0.0, &FrameConstants::default(), OutputFormat::Decimal,
//! ).unwrap();
//! assert!((ra.as_decimal().unwrap() - 266.405).abs() < 1e-3);
//! assert!((dec.as_decimal().unwrap() + 28.936).abs() < 1e-3);
//! ```

pub mod cartesian;
pub mod constants;
pub mod convert;
pub mod errors;
pub mod frames;
pub mod number_line;

pub use skyframe_core::Angle;
pub use errors::{CoordError, CoordResult};

pub use cartesian::{cartesian_to_spherical, spherical_to_cartesian, CartesianPoint, SphericalPoint};
pub use constants::{FrameConstants, GalacticPole};
pub use convert::{AngleValue, MeridianInput, OutputFormat, Vertical, VerticalKind};
pub use frames::{
    EclipticPosition, EquatorialPosition, GalacticPosition, HorizontalPosition, HourAnglePosition,
    Observer,
};
pub use number_line::{Direction, NumberLine};
