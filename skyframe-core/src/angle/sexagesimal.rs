//! Sexagesimal (base-60) angle text.
//!
//! Two notations share one `W:M:S` layout:
//!
//! - **DMS** (degrees:minutes:seconds) for declination, latitude, altitude,
//!   azimuth and ecliptic/galactic coordinates. 1 deg = 60' = 3600".
//! - **HMS** (hours:minutes:seconds) for right ascension, hour angle and local
//!   sidereal time. 1h = 15 deg, so 1m = 1/4 deg and 1s = 1/240 deg.
//!
//! # Sign convention
//!
//! The sign belongs to the whole field only: `-12:30:0` is -12.5 deg, and
//! `-0:30:0` is -0.5 deg. Minutes and seconds are magnitudes; a sign on either
//! of them is a parse error. Hour angles are never negative here, so any
//! negative HMS input or output is rejected with
//! [`AngleError::NegativeHourAngle`].
//!
//! # Formatting
//!
//! The whole part is truncated toward zero, the residual is scaled by 60 and
//! truncated for minutes, and the remaining residual is scaled by 60 and
//! rounded to four decimals for seconds. Rounding can produce exactly 60
//! seconds; that carries into the minutes (and 60 minutes into the whole
//! part), so `60` never appears in a seconds field. Whole-number seconds
//! print without a fractional part.
//!
//! ```
//! use skyframe_core::angle::{decimal_to_dms, dms_to_decimal, decimal_to_hms, hms_to_decimal};
//!
//! assert_eq!(decimal_to_dms(-12.5).unwrap(), "-12:30:0");
//! assert_eq!(decimal_to_dms(10.2625).unwrap(), "10:15:45");
//! assert!((dms_to_decimal("-0:30:0").unwrap() + 0.5).abs() < 1e-12);
//!
//! assert_eq!(decimal_to_hms(187.5).unwrap(), "12:30:0");
//! assert!((hms_to_decimal("12:30:0").unwrap() - 187.5).abs() < 1e-12);
//! ```

use super::normalize::wrap_0_360;
use crate::constants::{
    DEGREES_PER_CIRCLE, DEGREES_PER_HOUR, MINUTES_PER_UNIT, SECONDS_PER_UNIT,
    SEXAGESIMAL_SECONDS_DIGITS,
};
use crate::math::round_to;
use crate::{AngleError, AngleResult};
use core::fmt;
use core::str::FromStr;

/// Which scale the whole field of a sexagesimal triple is in.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SexagesimalKind {
    /// Whole field in degrees.
    Dms,
    /// Whole field in hours; only non-negative values are accepted.
    Hms,
}

impl SexagesimalKind {
    /// Parses `text` in this notation to decimal degrees.
    pub fn to_degrees(self, text: &str) -> AngleResult<f64> {
        match self {
            Self::Dms => dms_to_decimal(text),
            Self::Hms => hms_to_decimal(text),
        }
    }

    /// Formats decimal degrees in this notation.
    pub fn format(self, degrees: f64) -> AngleResult<String> {
        match self {
            Self::Dms => decimal_to_dms(degrees),
            Self::Hms => decimal_to_hms(degrees),
        }
    }

    /// Formats a full-turn quantity (right ascension, hour angle, azimuth or a
    /// longitude), wrapped to [0, 360) degrees first.
    ///
    /// Seconds rounding can carry a value just below a full turn up to
    /// `24:0:0` or `360:0:0`; that prints as `0:0:0` instead.
    ///
    /// ```
    /// use skyframe_core::angle::SexagesimalKind;
    ///
    /// assert_eq!(SexagesimalKind::Hms.format_turn(360.0 - 1e-9).unwrap(), "0:0:0");
    /// assert_eq!(SexagesimalKind::Dms.format_turn(-90.0).unwrap(), "270:0:0");
    /// ```
    pub fn format_turn(self, degrees: f64) -> AngleResult<String> {
        if !degrees.is_finite() {
            return Err(AngleError::not_finite("format_turn"));
        }
        let (value, turn) = match self {
            Self::Dms => (wrap_0_360(degrees), DEGREES_PER_CIRCLE),
            Self::Hms => (
                wrap_0_360(degrees) / DEGREES_PER_HOUR,
                DEGREES_PER_CIRCLE / DEGREES_PER_HOUR,
            ),
        };
        let parts = Sexagesimal::from_decimal(value);
        if parts.whole >= turn {
            tracing::trace!(degrees, "rounded up to a full turn, printing zero");
            return Ok(Sexagesimal::from_decimal(0.0).to_string());
        }
        Ok(parts.to_string())
    }
}

/// A decomposed `W:M:S` value.
///
/// `whole` and `minutes` are integral magnitudes, `seconds` is a magnitude
/// rounded to four decimals when built from a number, and `negative` carries
/// the sign of the whole quantity.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sexagesimal {
    negative: bool,
    whole: f64,
    minutes: f64,
    seconds: f64,
}

impl Sexagesimal {
    /// Decomposes a decimal value (degrees for DMS, hours for HMS).
    ///
    /// The caller is responsible for rejecting non-finite input.
    pub fn from_decimal(value: f64) -> Self {
        let magnitude = value.abs();
        let mut whole = libm::trunc(magnitude);
        let minutes_exact = (magnitude - whole) * MINUTES_PER_UNIT;
        let mut minutes = libm::trunc(minutes_exact);
        let mut seconds = round_to(
            (minutes_exact - minutes) * MINUTES_PER_UNIT,
            SEXAGESIMAL_SECONDS_DIGITS,
        );

        if seconds >= MINUTES_PER_UNIT {
            tracing::trace!(value, "seconds rounded to 60, carrying into minutes");
            minutes += 1.0;
            seconds = 0.0;
        }
        if minutes >= MINUTES_PER_UNIT {
            whole += 1.0;
            minutes = 0.0;
        }

        let is_zero = whole == 0.0 && minutes == 0.0 && seconds == 0.0;
        Self {
            negative: value < 0.0 && !is_zero,
            whole,
            minutes,
            seconds,
        }
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn whole(&self) -> f64 {
        self.whole
    }

    pub fn minutes(&self) -> f64 {
        self.minutes
    }

    pub fn seconds(&self) -> f64 {
        self.seconds
    }

    /// Signed decimal value in the unit of the whole field.
    ///
    /// ```
    /// use skyframe_core::angle::Sexagesimal;
    ///
    /// let s: Sexagesimal = "-10:15:45".parse().unwrap();
    /// assert!((s.value() + 10.2625).abs() < 1e-12);
    /// ```
    pub fn value(&self) -> f64 {
        let magnitude =
            self.whole + self.minutes / MINUTES_PER_UNIT + self.seconds / SECONDS_PER_UNIT;
        if self.negative {
            -magnitude
        } else {
            magnitude
        }
    }
}

impl FromStr for Sexagesimal {
    type Err = AngleError;

    /// Parses `W:M:S`. Exactly three numeric fields are required; surrounding
    /// whitespace on each field is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.trim().split(':').map(str::trim).collect();
        if fields.len() != 3 {
            return Err(AngleError::parse(
                s,
                &format!("expected 3 ':'-separated fields, found {}", fields.len()),
            ));
        }

        let whole = parse_field(s, fields[0], "whole")?;
        let minutes = parse_magnitude(s, fields[1], "minutes")?;
        let seconds = parse_magnitude(s, fields[2], "seconds")?;

        // `is_sign_negative` so that "-0:30:0" keeps its sign
        Ok(Self {
            negative: whole.is_sign_negative(),
            whole: whole.abs(),
            minutes,
            seconds,
        })
    }
}

impl fmt::Display for Sexagesimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.negative { "-" } else { "" };
        write!(
            f,
            "{sign}{:.0}:{:.0}:{}",
            self.whole,
            self.minutes,
            format_seconds(self.seconds)
        )
    }
}

fn parse_field(input: &str, field: &str, name: &str) -> AngleResult<f64> {
    let value = field
        .parse::<f64>()
        .map_err(|_| AngleError::parse(input, &format!("invalid {name} field '{field}'")))?;
    if !value.is_finite() {
        return Err(AngleError::parse(input, &format!("{name} field is not finite")));
    }
    Ok(value)
}

fn parse_magnitude(input: &str, field: &str, name: &str) -> AngleResult<f64> {
    if field.starts_with(['+', '-']) {
        return Err(AngleError::parse(
            input,
            &format!("{name} must be unsigned; the sign belongs to the first field"),
        ));
    }
    parse_field(input, field, name)
}

fn format_seconds(seconds: f64) -> String {
    if seconds.fract() == 0.0 {
        return format!("{seconds:.0}");
    }
    let text = format!("{seconds:.prec$}", prec = SEXAGESIMAL_SECONDS_DIGITS);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Converts `D:M:S` text to decimal degrees.
///
/// A negative degrees field negates the minutes and seconds as well.
///
/// # Errors
///
/// [`AngleError::Parse`] when the text is not three numeric fields.
pub fn dms_to_decimal(s: &str) -> AngleResult<f64> {
    Ok(s.parse::<Sexagesimal>()?.value())
}

/// Converts decimal degrees to `D:M:S` text.
///
/// ```
/// use skyframe_core::angle::decimal_to_dms;
///
/// // 59.99999 arcseconds rounds to 60 and carries into the minutes
/// let d = 1.0 + 29.0 / 60.0 + 59.99999 / 3600.0;
/// assert_eq!(decimal_to_dms(d).unwrap(), "1:30:0");
/// ```
///
/// # Errors
///
/// [`AngleError::NotFinite`] for NaN or infinite input.
pub fn decimal_to_dms(degrees: f64) -> AngleResult<String> {
    if !degrees.is_finite() {
        return Err(AngleError::not_finite("decimal_to_dms"));
    }
    Ok(Sexagesimal::from_decimal(degrees).to_string())
}

/// Converts `H:M:S` text to decimal degrees (`h*15 + m/4 + s/240`).
///
/// # Errors
///
/// [`AngleError::Parse`] for malformed text, [`AngleError::NegativeHourAngle`]
/// when the hours field is negative (including `-0`).
pub fn hms_to_decimal(s: &str) -> AngleResult<f64> {
    let parsed = s.parse::<Sexagesimal>()?;
    if parsed.is_negative() {
        return Err(AngleError::negative_hour_angle(s.trim()));
    }
    Ok(parsed.value() * DEGREES_PER_HOUR)
}

/// Converts decimal degrees to `H:M:S` text.
///
/// # Errors
///
/// [`AngleError::NegativeHourAngle`] for negative input,
/// [`AngleError::NotFinite`] for NaN or infinite input.
pub fn decimal_to_hms(degrees: f64) -> AngleResult<String> {
    if !degrees.is_finite() {
        return Err(AngleError::not_finite("decimal_to_hms"));
    }
    if degrees < 0.0 {
        return Err(AngleError::negative_hour_angle(degrees));
    }
    Ok(Sexagesimal::from_decimal(degrees / DEGREES_PER_HOUR).to_string())
}
