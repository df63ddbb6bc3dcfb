//! Text-or-number front end to the frame transforms.
//!
//! Each function accepts angles as [`AngleValue`]s, so a caller can pass
//! `12.5`, `"12.5"` or `"0:50:0"` interchangeably. Sexagesimal text is read as
//! HMS for right ascension, hour angle and local sidereal time, and as DMS for
//! everything else. Results come back in the representation chosen by
//! [`OutputFormat`], with the same HMS/DMS split.
//!
//! ```
//! use skyframe_coords::convert::{
//!     equatorial_to_horizontal, AngleValue, MeridianInput, OutputFormat, VerticalKind,
//! };
//!
//! let (az, alt) = equatorial_to_horizontal(
//!     45.0,
//!     "20:0:0",
//!     &MeridianInput::from_hour_angle("0:0:0"),
//!     VerticalKind::Altitude,
//!     OutputFormat::Sexagesimal,
//! )
//! .unwrap();
//! assert_eq!(az, AngleValue::from("180:0:0"));
//! assert_eq!(alt.to_string(), "65:0:0");
//! ```

use crate::constants::FrameConstants;
use crate::frames::{
    hour_angle_from_right_ascension, EclipticPosition, EquatorialPosition, GalacticPosition,
    HorizontalPosition, HourAnglePosition, Observer,
};
use crate::{CoordError, CoordResult};
use skyframe_core::angle::{wrap_0_360, SexagesimalKind};
use skyframe_core::{Angle, AngleError};
use std::fmt;
use std::str::FromStr;

/// An angle in decimal degrees or as sexagesimal text.
#[derive(Debug, Clone, PartialEq)]
pub enum AngleValue {
    Decimal(f64),
    Sexagesimal(String),
}

impl AngleValue {
    /// Decimal degrees, reading sexagesimal text in the notation `kind`.
    ///
    /// # Errors
    ///
    /// Parse failures from the sexagesimal reader, non-finite decimals, and
    /// negative values where `kind` is [`SexagesimalKind::Hms`].
    pub fn to_degrees(&self, kind: SexagesimalKind) -> CoordResult<f64> {
        match self {
            Self::Decimal(degrees) => {
                if !degrees.is_finite() {
                    return Err(AngleError::not_finite("angle input").into());
                }
                if kind == SexagesimalKind::Hms && *degrees < 0.0 {
                    return Err(AngleError::negative_hour_angle(degrees).into());
                }
                Ok(*degrees)
            }
            Self::Sexagesimal(text) => Ok(kind.to_degrees(text)?),
        }
    }

    pub fn to_angle(&self, kind: SexagesimalKind) -> CoordResult<Angle> {
        self.to_degrees(kind).map(Angle::from_degrees)
    }

    pub fn as_decimal(&self) -> Option<f64> {
        match self {
            Self::Decimal(degrees) => Some(*degrees),
            Self::Sexagesimal(_) => None,
        }
    }

    pub fn as_sexagesimal(&self) -> Option<&str> {
        match self {
            Self::Decimal(_) => None,
            Self::Sexagesimal(text) => Some(text),
        }
    }
}

impl From<f64> for AngleValue {
    fn from(degrees: f64) -> Self {
        Self::Decimal(degrees)
    }
}

/// Text that parses as a plain number is a decimal; anything else is kept as
/// sexagesimal text and validated when used.
impl From<&str> for AngleValue {
    fn from(text: &str) -> Self {
        match text.trim().parse::<f64>() {
            Ok(degrees) => Self::Decimal(degrees),
            Err(_) => Self::Sexagesimal(text.to_string()),
        }
    }
}

impl From<String> for AngleValue {
    fn from(text: String) -> Self {
        match text.trim().parse::<f64>() {
            Ok(degrees) => Self::Decimal(degrees),
            Err(_) => Self::Sexagesimal(text),
        }
    }
}

impl FromStr for AngleValue {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for AngleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decimal(degrees) => write!(f, "{degrees}"),
            Self::Sexagesimal(text) => f.write_str(text),
        }
    }
}

/// Representation of returned angles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Sexagesimal,
    Decimal,
}

impl OutputFormat {
    pub fn render(self, degrees: f64, kind: SexagesimalKind) -> CoordResult<AngleValue> {
        match self {
            Self::Decimal => Ok(AngleValue::Decimal(degrees)),
            Self::Sexagesimal => Ok(AngleValue::Sexagesimal(kind.format(degrees)?)),
        }
    }

    /// Like [`render`](Self::render) for right ascension, hour angle, azimuth
    /// and longitudes. The result stays in [0, 360) degrees even when seconds
    /// rounding would carry it up to a full turn.
    pub fn render_turn(self, degrees: f64, kind: SexagesimalKind) -> CoordResult<AngleValue> {
        match self {
            Self::Decimal => Ok(AngleValue::Decimal(wrap_0_360(degrees))),
            Self::Sexagesimal => Ok(AngleValue::Sexagesimal(kind.format_turn(degrees)?)),
        }
    }
}

/// How the hour angle for [`equatorial_to_horizontal`] is obtained.
///
/// An explicit `hour_angle` takes precedence. Otherwise it is derived as
/// `local_time - right_ascension`, which needs both fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeridianInput {
    pub hour_angle: Option<AngleValue>,
    pub right_ascension: Option<AngleValue>,
    pub local_time: Option<AngleValue>,
}

impl MeridianInput {
    pub fn from_hour_angle(hour_angle: impl Into<AngleValue>) -> Self {
        Self {
            hour_angle: Some(hour_angle.into()),
            ..Self::default()
        }
    }

    pub fn from_right_ascension(
        right_ascension: impl Into<AngleValue>,
        local_time: impl Into<AngleValue>,
    ) -> Self {
        Self {
            hour_angle: None,
            right_ascension: Some(right_ascension.into()),
            local_time: Some(local_time.into()),
        }
    }

    /// The hour angle in [0, 360) degrees.
    pub fn resolve(&self) -> CoordResult<Angle> {
        if let Some(hour_angle) = &self.hour_angle {
            if self.right_ascension.is_some() {
                tracing::warn!("both hour angle and right ascension given, using the hour angle");
            }
            return Ok(hour_angle.to_angle(SexagesimalKind::Hms)?.normalized());
        }

        match (&self.right_ascension, &self.local_time) {
            (Some(ra), Some(local_time)) => {
                let hour_angle = hour_angle_from_right_ascension(
                    ra.to_angle(SexagesimalKind::Hms)?,
                    local_time.to_angle(SexagesimalKind::Hms)?,
                );
                tracing::debug!(
                    hour_angle = hour_angle.degrees(),
                    "derived hour angle from right ascension and local sidereal time"
                );
                Ok(hour_angle)
            }
            (Some(_), None) => Err(CoordError::missing_argument(
                "right ascension needs a local sidereal time to give an hour angle",
            )),
            (None, _) => Err(CoordError::missing_argument(
                "either an hour angle or a right ascension with local sidereal time is required",
            )),
        }
    }
}

/// Which vertical coordinate [`equatorial_to_horizontal`] returns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VerticalKind {
    #[default]
    Altitude,
    Zenith,
}

/// The vertical coordinate given to [`horizontal_to_equatorial`].
#[derive(Debug, Clone, PartialEq)]
pub enum Vertical {
    Altitude(AngleValue),
    Zenith(AngleValue),
}

impl Vertical {
    fn altitude(&self) -> CoordResult<Angle> {
        match self {
            Self::Altitude(value) => value.to_angle(SexagesimalKind::Dms),
            Self::Zenith(value) => Ok(value.to_angle(SexagesimalKind::Dms)?.complement()),
        }
    }
}

/// Equatorial to horizontal: returns `(azimuth, altitude)` or
/// `(azimuth, zenith angle)` depending on `vertical`.
///
/// # Errors
///
/// [`CoordError::MissingArgument`] when `meridian` cannot produce an hour
/// angle, plus any parse or range error of the inputs.
pub fn equatorial_to_horizontal(
    latitude: impl Into<AngleValue>,
    declination: impl Into<AngleValue>,
    meridian: &MeridianInput,
    vertical: VerticalKind,
    format: OutputFormat,
) -> CoordResult<(AngleValue, AngleValue)> {
    let observer = Observer::new(latitude.into().to_angle(SexagesimalKind::Dms)?)?;
    let dec = declination.into().to_angle(SexagesimalKind::Dms)?;
    let position = HourAnglePosition::new(meridian.resolve()?, dec)?;

    let horizontal = position.to_horizontal(&observer);
    let vertical_angle = match vertical {
        VerticalKind::Altitude => horizontal.altitude(),
        VerticalKind::Zenith => horizontal.zenith_angle(),
    };

    Ok((
        format.render_turn(horizontal.azimuth().degrees(), SexagesimalKind::Dms)?,
        format.render(vertical_angle.degrees(), SexagesimalKind::Dms)?,
    ))
}

/// Horizontal to equatorial: returns `(right ascension, declination)` when
/// `local_time` is given, `(hour angle, declination)` otherwise.
pub fn horizontal_to_equatorial(
    latitude: impl Into<AngleValue>,
    azimuth: impl Into<AngleValue>,
    vertical: Vertical,
    local_time: Option<AngleValue>,
    format: OutputFormat,
) -> CoordResult<(AngleValue, AngleValue)> {
    let observer = Observer::new(latitude.into().to_angle(SexagesimalKind::Dms)?)?;
    let horizontal = HorizontalPosition::new(
        azimuth.into().to_angle(SexagesimalKind::Dms)?,
        vertical.altitude()?,
    )?;

    let position = horizontal.to_hour_angle(&observer);
    let first = match local_time {
        Some(local_time) => position
            .to_equatorial(local_time.to_angle(SexagesimalKind::Hms)?)
            .ra(),
        None => position.hour_angle(),
    };

    Ok((
        format.render_turn(first.degrees(), SexagesimalKind::Hms)?,
        format.render(position.dec().degrees(), SexagesimalKind::Dms)?,
    ))
}

/// Returns `(ecliptic latitude, ecliptic longitude)`.
pub fn equatorial_to_ecliptic(
    ra: impl Into<AngleValue>,
    dec: impl Into<AngleValue>,
    constants: &FrameConstants,
    format: OutputFormat,
) -> CoordResult<(AngleValue, AngleValue)> {
    let ecliptic = equatorial(ra.into(), dec.into())?.to_ecliptic(constants.obliquity_angle());
    Ok((
        format.render(ecliptic.latitude().degrees(), SexagesimalKind::Dms)?,
        format.render_turn(ecliptic.longitude().degrees(), SexagesimalKind::Dms)?,
    ))
}

/// Returns `(right ascension, declination)`.
pub fn ecliptic_to_equatorial(
    latitude: impl Into<AngleValue>,
    longitude: impl Into<AngleValue>,
    constants: &FrameConstants,
    format: OutputFormat,
) -> CoordResult<(AngleValue, AngleValue)> {
    let ecliptic = EclipticPosition::new(
        latitude.into().to_angle(SexagesimalKind::Dms)?,
        longitude.into().to_angle(SexagesimalKind::Dms)?,
    )?;
    render_equatorial(&ecliptic.to_equatorial(constants.obliquity_angle()), format)
}

/// Returns `(galactic latitude, galactic longitude)`.
pub fn equatorial_to_galactic(
    ra: impl Into<AngleValue>,
    dec: impl Into<AngleValue>,
    constants: &FrameConstants,
    format: OutputFormat,
) -> CoordResult<(AngleValue, AngleValue)> {
    let galactic = equatorial(ra.into(), dec.into())?.to_galactic(&constants.galactic_pole);
    Ok((
        format.render(galactic.latitude().degrees(), SexagesimalKind::Dms)?,
        format.render_turn(galactic.longitude().degrees(), SexagesimalKind::Dms)?,
    ))
}

/// Returns `(right ascension, declination)`.
pub fn galactic_to_equatorial(
    latitude: impl Into<AngleValue>,
    longitude: impl Into<AngleValue>,
    constants: &FrameConstants,
    format: OutputFormat,
) -> CoordResult<(AngleValue, AngleValue)> {
    let galactic = GalacticPosition::new(
        latitude.into().to_angle(SexagesimalKind::Dms)?,
        longitude.into().to_angle(SexagesimalKind::Dms)?,
    )?;
    render_equatorial(&galactic.to_equatorial(&constants.galactic_pole), format)
}

fn equatorial(ra: AngleValue, dec: AngleValue) -> CoordResult<EquatorialPosition> {
    EquatorialPosition::new(
        ra.to_angle(SexagesimalKind::Hms)?,
        dec.to_angle(SexagesimalKind::Dms)?,
    )
}

fn render_equatorial(
    position: &EquatorialPosition,
    format: OutputFormat,
) -> CoordResult<(AngleValue, AngleValue)> {
    Ok((
        format.render_turn(position.ra().degrees(), SexagesimalKind::Hms)?,
        format.render(position.dec().degrees(), SexagesimalKind::Dms)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decimal(value: &AngleValue) -> f64 {
        value.as_decimal().unwrap()
    }

    #[test]
    fn test_angle_value_detection() {
        assert_eq!(AngleValue::from("12.5"), AngleValue::Decimal(12.5));
        assert_eq!(AngleValue::from(" -3 "), AngleValue::Decimal(-3.0));
        assert_eq!(
            AngleValue::from("12:30:0"),
            AngleValue::Sexagesimal("12:30:0".to_string())
        );
        assert_eq!(
            AngleValue::from(String::from("1:2:3")).as_sexagesimal(),
            Some("1:2:3")
        );
        let parsed: AngleValue = "7".parse().unwrap();
        assert_eq!(parsed.as_decimal(), Some(7.0));
    }

    #[test]
    fn test_angle_value_to_degrees() {
        let value = AngleValue::from("12:0:0");
        assert!((value.to_degrees(SexagesimalKind::Hms).unwrap() - 180.0).abs() < 1e-12);
        assert!((value.to_degrees(SexagesimalKind::Dms).unwrap() - 12.0).abs() < 1e-12);
        assert!(matches!(
            AngleValue::from(-15.0).to_degrees(SexagesimalKind::Hms),
            Err(CoordError::Angle(AngleError::NegativeHourAngle { .. }))
        ));
        assert!(AngleValue::from(f64::NAN)
            .to_degrees(SexagesimalKind::Dms)
            .is_err());
        assert!(matches!(
            AngleValue::from("12:x:0").to_degrees(SexagesimalKind::Dms),
            Err(CoordError::Angle(AngleError::Parse { .. }))
        ));
    }

    #[test]
    fn test_meridian_prefers_hour_angle() {
        let meridian = MeridianInput {
            hour_angle: Some(AngleValue::from(30.0)),
            right_ascension: Some(AngleValue::from(100.0)),
            local_time: Some(AngleValue::from(10.0)),
        };
        assert!((meridian.resolve().unwrap().degrees() - 30.0).abs() < 1e-10);
    }

    #[test]
    fn test_meridian_derives_hour_angle() {
        let meridian = MeridianInput::from_right_ascension(350.0, 10.0);
        assert!((meridian.resolve().unwrap().degrees() - 20.0).abs() < 1e-10);
        let meridian = MeridianInput::from_right_ascension("23:0:0", "1:0:0");
        assert!((meridian.resolve().unwrap().degrees() - 30.0).abs() < 1e-10);
    }

    #[test]
    fn test_meridian_missing_argument() {
        assert!(matches!(
            MeridianInput::default().resolve(),
            Err(CoordError::MissingArgument { .. })
        ));
        let ra_only = MeridianInput {
            right_ascension: Some(AngleValue::from(10.0)),
            ..MeridianInput::default()
        };
        assert!(matches!(
            ra_only.resolve(),
            Err(CoordError::MissingArgument { .. })
        ));
    }

    #[test]
    fn test_equatorial_to_horizontal_zenith_output() {
        let (az, zenith) = equatorial_to_horizontal(
            45.0,
            20.0,
            &MeridianInput::from_hour_angle(0.0),
            VerticalKind::Zenith,
            OutputFormat::Decimal,
        )
        .unwrap();
        assert!((decimal(&az) - 180.0).abs() < 1e-9);
        assert!((decimal(&zenith) - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_equatorial_to_horizontal_missing_meridian() {
        let result = equatorial_to_horizontal(
            45.0,
            20.0,
            &MeridianInput::default(),
            VerticalKind::Altitude,
            OutputFormat::Decimal,
        );
        assert!(matches!(result, Err(CoordError::MissingArgument { .. })));
    }

    #[test]
    fn test_horizontal_to_equatorial_hour_angle_or_ra() {
        let (ha, dec) = horizontal_to_equatorial(
            45.0,
            180.0,
            Vertical::Altitude(65.0.into()),
            None,
            OutputFormat::Decimal,
        )
        .unwrap();
        assert!(decimal(&ha).abs() < 1e-9 || (decimal(&ha) - 360.0).abs() < 1e-9);
        assert!((decimal(&dec) - 20.0).abs() < 1e-9);

        let (ra, _) = horizontal_to_equatorial(
            45.0,
            180.0,
            Vertical::Zenith(25.0.into()),
            Some("6:0:0".into()),
            OutputFormat::Decimal,
        )
        .unwrap();
        assert!((decimal(&ra) - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_sexagesimal_output_uses_hms_for_ra() {
        let (ra, dec) = ecliptic_to_equatorial(
            0.0,
            90.0,
            &FrameConstants::default(),
            OutputFormat::Sexagesimal,
        )
        .unwrap();
        assert_eq!(ra.to_string(), "6:0:0");
        assert_eq!(dec.to_string(), "23:26:21.406");
    }

    #[test]
    fn test_equatorial_to_ecliptic_order_is_latitude_longitude() {
        let (lat, long) = equatorial_to_ecliptic(
            90.0,
            23.43927944,
            &FrameConstants::default(),
            OutputFormat::Decimal,
        )
        .unwrap();
        assert!(decimal(&lat).abs() < 1e-9);
        assert!((decimal(&long) - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_galactic_round_trip_through_text() {
        let constants = FrameConstants::default();
        let (b, l) =
            equatorial_to_galactic("5:35:17.3", "-5:23:28", &constants, OutputFormat::Sexagesimal)
                .unwrap();
        let (ra, dec) =
            galactic_to_equatorial(b, l, &constants, OutputFormat::Decimal).unwrap();
        let expected_ra = (5.0 + 35.0 / 60.0 + 17.3 / 3600.0) * 15.0;
        let expected_dec = -(5.0 + 23.0 / 60.0 + 28.0 / 3600.0);
        assert!((decimal(&ra) - expected_ra).abs() < 1e-3);
        assert!((decimal(&dec) - expected_dec).abs() < 1e-3);
    }

    #[test]
    fn test_invalid_latitude_is_rejected() {
        let result = equatorial_to_horizontal(
            95.0,
            0.0,
            &MeridianInput::from_hour_angle(0.0),
            VerticalKind::Altitude,
            OutputFormat::Decimal,
        );
        assert!(matches!(result, Err(CoordError::InvalidCoordinate { .. })));
    }

    #[test]
    fn test_render_turn_stays_below_a_full_turn() {
        let just_below = 360.0 - 1e-9;
        assert_eq!(
            OutputFormat::Sexagesimal
                .render_turn(just_below, SexagesimalKind::Hms)
                .unwrap(),
            AngleValue::from("0:0:0")
        );
        assert_eq!(
            OutputFormat::Sexagesimal
                .render_turn(just_below, SexagesimalKind::Dms)
                .unwrap(),
            AngleValue::from("0:0:0")
        );
        assert_eq!(
            OutputFormat::Decimal
                .render_turn(360.0, SexagesimalKind::Hms)
                .unwrap(),
            AngleValue::Decimal(0.0)
        );
    }

    #[test]
    fn test_ecliptic_round_trip_at_zero_right_ascension() {
        let constants = FrameConstants::default();
        for dec in [-60.0, -15.0, 0.0, 15.0] {
            let (lat, lon) =
                equatorial_to_ecliptic(0.0, dec, &constants, OutputFormat::Decimal).unwrap();
            let (ra, _) =
                ecliptic_to_equatorial(lat, lon, &constants, OutputFormat::Sexagesimal).unwrap();
            assert_eq!(ra.to_string(), "0:0:0", "dec {dec}");
        }
    }

    #[test]
    fn test_galactic_round_trip_at_zero_right_ascension() {
        let constants = FrameConstants::default();
        for dec in [-15.0, 0.0] {
            let (b, l) =
                equatorial_to_galactic(0.0, dec, &constants, OutputFormat::Decimal).unwrap();
            let (ra, _) =
                galactic_to_equatorial(b, l, &constants, OutputFormat::Sexagesimal).unwrap();
            assert_eq!(ra.to_string(), "0:0:0", "dec {dec}");
        }
    }
}
