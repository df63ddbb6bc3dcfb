use crate::cli::{Cli, Commands};
use crate::error::Result;
use skyframe_coords::convert::{self, MeridianInput, Vertical, VerticalKind};
use skyframe_coords::{
    cartesian_to_spherical, spherical_to_cartesian, AngleValue, CartesianPoint, NumberLine,
    SphericalPoint,
};
use skyframe_core::angle::{decimal_to_dms, decimal_to_hms, dms_to_decimal, hms_to_decimal};
use skyframe_stellar::{blackbody_spectrum, vacuum_to_air, StellarParameters};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutput {
    Text(String),
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
}

impl CommandOutput {
    fn pair(first: &str, second: &str, values: (AngleValue, AngleValue)) -> Self {
        Self::Table {
            headers: vec![first.to_string(), second.to_string()],
            rows: vec![vec![values.0.to_string(), values.1.to_string()]],
        }
    }
}

impl fmt::Display for CommandOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Table { headers, rows } => {
                let mut widths: Vec<usize> = headers.iter().map(String::len).collect();
                for row in rows {
                    for (width, cell) in widths.iter_mut().zip(row) {
                        *width = (*width).max(cell.len());
                    }
                }
                write_row(f, headers, &widths)?;
                for row in rows {
                    writeln!(f)?;
                    write_row(f, row, &widths)?;
                }
                Ok(())
            }
        }
    }
}

fn write_row(f: &mut fmt::Formatter<'_>, cells: &[String], widths: &[usize]) -> fmt::Result {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    f.write_str(line.trim_end())
}

pub fn execute(cli: &Cli) -> Result<CommandOutput> {
    let format = cli.output_format();
    let constants = cli.frame_constants();
    tracing::debug!(
        ?format,
        obliquity = constants.obliquity,
        ngp_ra = constants.galactic_pole.ra,
        ngp_dec = constants.galactic_pole.dec,
        node_longitude = constants.galactic_pole.ascending_node_longitude,
        "resolved frame constants"
    );

    let output = match &cli.command {
        Commands::DmsToDeg { value } => CommandOutput::Text(dms_to_decimal(value)?.to_string()),
        Commands::DegToDms { degrees } => CommandOutput::Text(decimal_to_dms(*degrees)?),
        Commands::HmsToDeg { value } => CommandOutput::Text(hms_to_decimal(value)?.to_string()),
        Commands::DegToHms { degrees } => CommandOutput::Text(decimal_to_hms(*degrees)?),
        Commands::EqToHor {
            latitude,
            declination,
            hour_angle,
            ra,
            lst,
            zenith,
        } => {
            let meridian = MeridianInput {
                hour_angle: hour_angle.as_deref().map(AngleValue::from),
                right_ascension: ra.as_deref().map(AngleValue::from),
                local_time: lst.as_deref().map(AngleValue::from),
            };
            let (vertical, label) = if *zenith {
                (VerticalKind::Zenith, "zenith_angle")
            } else {
                (VerticalKind::Altitude, "altitude")
            };
            let result = convert::equatorial_to_horizontal(
                latitude.as_str(),
                declination.as_str(),
                &meridian,
                vertical,
                format,
            )?;
            CommandOutput::pair("azimuth", label, result)
        }
        Commands::HorToEq {
            latitude,
            azimuth,
            vertical,
            zenith,
            lst,
        } => {
            let value = AngleValue::from(vertical.as_str());
            let vertical = if *zenith {
                Vertical::Zenith(value)
            } else {
                Vertical::Altitude(value)
            };
            let first = if lst.is_some() {
                "right_ascension"
            } else {
                "hour_angle"
            };
            let result = convert::horizontal_to_equatorial(
                latitude.as_str(),
                azimuth.as_str(),
                vertical,
                lst.as_deref().map(AngleValue::from),
                format,
            )?;
            CommandOutput::pair(first, "declination", result)
        }
        Commands::EqToEcl { ra, dec } => CommandOutput::pair(
            "latitude",
            "longitude",
            convert::equatorial_to_ecliptic(ra.as_str(), dec.as_str(), &constants, format)?,
        ),
        Commands::EclToEq {
            latitude,
            longitude,
        } => CommandOutput::pair(
            "right_ascension",
            "declination",
            convert::ecliptic_to_equatorial(
                latitude.as_str(),
                longitude.as_str(),
                &constants,
                format,
            )?,
        ),
        Commands::EqToGal { ra, dec } => CommandOutput::pair(
            "latitude",
            "longitude",
            convert::equatorial_to_galactic(ra.as_str(), dec.as_str(), &constants, format)?,
        ),
        Commands::GalToEq {
            latitude,
            longitude,
        } => CommandOutput::pair(
            "right_ascension",
            "declination",
            convert::galactic_to_equatorial(
                latitude.as_str(),
                longitude.as_str(),
                &constants,
                format,
            )?,
        ),
        Commands::SphToCart { rho, theta, phi } => {
            let point = spherical_to_cartesian(&SphericalPoint::from_degrees(*rho, *theta, *phi)?);
            CommandOutput::Table {
                headers: vec!["x".into(), "y".into(), "z".into()],
                rows: vec![vec![
                    point.x.to_string(),
                    point.y.to_string(),
                    point.z.to_string(),
                ]],
            }
        }
        Commands::CartToSph { x, y, z } => {
            let point = cartesian_to_spherical(&CartesianPoint::new(*x, *y, *z))?;
            CommandOutput::Table {
                headers: vec!["rho".into(), "theta".into(), "phi".into()],
                rows: vec![vec![
                    point.rho().to_string(),
                    point.theta().degrees().to_string(),
                    point.phi().degrees().to_string(),
                ]],
            }
        }
        Commands::NumberLine {
            magnitude,
            start,
            direction,
            signed,
        } => {
            let line = NumberLine::new(*magnitude, *start);
            match direction {
                Some(direction) => CommandOutput::Text(
                    line.magnitude_with_separate_direction(direction)?
                        .to_string(),
                ),
                None if *signed => CommandOutput::Text(line.magnitude_with_direction().to_string()),
                None => {
                    let [positive, negative] = line.magnitude_without_direction()?;
                    CommandOutput::Text(format!("{positive} or {negative}"))
                }
            }
        }
        Commands::Stellar {
            temperature,
            log_g,
        } => {
            let star = StellarParameters::estimate(*temperature, *log_g)?;
            CommandOutput::Table {
                headers: vec!["quantity".into(), "SI".into(), "solar".into()],
                rows: vec![
                    vec![
                        "mass".into(),
                        format!("{:.4e}", star.mass),
                        format!("{:.4}", star.solar_masses()),
                    ],
                    vec![
                        "luminosity".into(),
                        format!("{:.4e}", star.luminosity),
                        format!("{:.4}", star.solar_luminosities()),
                    ],
                    vec![
                        "radius".into(),
                        format!("{:.4e}", star.radius),
                        format!("{:.4}", star.solar_radii()),
                    ],
                ],
            }
        }
        Commands::Blackbody {
            temperature,
            wavelengths,
            air,
        } => {
            let radiance = blackbody_spectrum(wavelengths, *temperature)?;
            let mut headers = vec!["wavelength".to_string()];
            if *air {
                headers.push("air_wavelength".into());
            }
            headers.push("radiance".into());

            let mut rows = Vec::with_capacity(wavelengths.len());
            for (wavelength, value) in wavelengths.iter().zip(radiance) {
                let mut row = vec![wavelength.to_string()];
                if *air {
                    row.push(format!("{:.4}", vacuum_to_air(*wavelength)?));
                }
                row.push(format!("{value:.6e}"));
                rows.push(row);
            }
            CommandOutput::Table { headers, rows }
        }
    };

    Ok(output)
}
