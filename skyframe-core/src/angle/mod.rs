mod core;
mod normalize;
mod ops;
mod sexagesimal;
#[cfg(feature = "serde")]
mod serde_;

pub use self::core::Angle;
pub use normalize::{clamp_dec, clamp_unit, wrap_0_2pi, wrap_0_360};
pub use sexagesimal::{
    decimal_to_dms, decimal_to_hms, dms_to_decimal, hms_to_decimal, Sexagesimal, SexagesimalKind,
};

pub use self::core::{deg, hours, rad};
