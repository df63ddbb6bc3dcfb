//! Angle primitives for the skyframe coordinate library.
//!
//! `skyframe-core` holds the pieces every frame transform needs: an [`Angle`]
//! type stored in radians, sexagesimal (DMS/HMS) text conversion, range
//! normalization, and the numeric constants shared across the workspace.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`angle`] | [`Angle`], DMS/HMS parsing and formatting, normalization |
//! | [`constants`] | Unit conversions, sexagesimal precision, default frame constants |
//! | [`math`] | `fmod` and decimal rounding helpers |
//! | [`errors`] | [`AngleError`] and [`AngleResult`] |
//!
//! # Sexagesimal text
//!
//! ```
//! use skyframe_core::angle::{decimal_to_dms, hms_to_decimal};
//!
//! assert_eq!(decimal_to_dms(-0.5).unwrap(), "-0:30:0");
//! assert!((hms_to_decimal("6:0:0").unwrap() - 90.0).abs() < 1e-12);
//! ```
//!
//! # Design Notes
//!
//! - **Radians internally**: trigonometry runs on radians via `libm`; degrees
//!   and hours are conversions at the edges.
//! - **Hour angles are non-negative**: HMS parsing and formatting reject
//!   negative values rather than wrapping them.

pub mod angle;
pub mod constants;
pub mod errors;
pub mod math;

pub use angle::Angle;
pub use errors::{AngleError, AngleResult};
