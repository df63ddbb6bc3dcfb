use clap::{Parser, Subcommand};
use skyframe_coords::{FrameConstants, GalacticPole, OutputFormat};

#[derive(Parser, Debug)]
#[command(name = "skyframe")]
#[command(about = "Convert between sexagesimal, celestial and Cartesian coordinate systems")]
#[command(version)]
pub struct Cli {
    /// Print decimal degrees instead of HMS/DMS
    #[arg(long, global = true)]
    pub decimal: bool,

    /// Log intermediate values (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Obliquity of the ecliptic in degrees
    #[arg(long, global = true)]
    pub obliquity: Option<f64>,

    /// Right ascension of the north galactic pole in degrees
    #[arg(long, global = true)]
    pub ngp_ra: Option<f64>,

    /// Declination of the north galactic pole in degrees
    #[arg(long, global = true)]
    pub ngp_dec: Option<f64>,

    /// Galactic longitude of the north celestial pole in degrees
    #[arg(long, global = true)]
    pub node_longitude: Option<f64>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn output_format(&self) -> OutputFormat {
        if self.decimal {
            OutputFormat::Decimal
        } else {
            OutputFormat::Sexagesimal
        }
    }

    /// Default frame constants with any command-line overrides applied.
    pub fn frame_constants(&self) -> FrameConstants {
        let defaults = FrameConstants::default();
        let pole = defaults.galactic_pole;
        FrameConstants::new(
            self.obliquity.unwrap_or(defaults.obliquity),
            GalacticPole {
                ra: self.ngp_ra.unwrap_or(pole.ra),
                dec: self.ngp_dec.unwrap_or(pole.dec),
                ascending_node_longitude: self.node_longitude.unwrap_or(pole.ascending_node_longitude),
            },
        )
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert D:M:S to decimal degrees
    DmsToDeg {
        /// Angle as D:M:S, e.g. -12:30:0
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Convert decimal degrees to D:M:S
    DegToDms {
        #[arg(allow_hyphen_values = true)]
        degrees: f64,
    },
    /// Convert H:M:S to decimal degrees
    HmsToDeg {
        /// Angle as H:M:S, e.g. 18:36:56.3
        value: String,
    },
    /// Convert decimal degrees to H:M:S
    DegToHms {
        #[arg(allow_hyphen_values = true)]
        degrees: f64,
    },
    /// Equatorial to horizontal (azimuth, altitude)
    EqToHor {
        /// Observer latitude (degrees or D:M:S)
        #[arg(allow_hyphen_values = true)]
        latitude: String,
        /// Declination (degrees or D:M:S)
        #[arg(allow_hyphen_values = true)]
        declination: String,
        /// Hour angle (degrees or H:M:S); takes precedence over --ra
        #[arg(long)]
        hour_angle: Option<String>,
        /// Right ascension (degrees or H:M:S), used with --lst
        #[arg(long)]
        ra: Option<String>,
        /// Local sidereal time (degrees or H:M:S)
        #[arg(long)]
        lst: Option<String>,
        /// Report the zenith angle instead of the altitude
        #[arg(long)]
        zenith: bool,
    },
    /// Horizontal to equatorial (hour angle, or right ascension with --lst)
    HorToEq {
        /// Observer latitude (degrees or D:M:S)
        #[arg(allow_hyphen_values = true)]
        latitude: String,
        /// Azimuth, north through east (degrees or D:M:S)
        #[arg(allow_hyphen_values = true)]
        azimuth: String,
        /// Altitude, or zenith angle with --zenith (degrees or D:M:S)
        #[arg(allow_hyphen_values = true)]
        vertical: String,
        /// Treat the vertical coordinate as a zenith angle
        #[arg(long)]
        zenith: bool,
        /// Local sidereal time (degrees or H:M:S); report right ascension
        #[arg(long)]
        lst: Option<String>,
    },
    /// Equatorial to ecliptic (latitude, longitude)
    EqToEcl {
        #[arg(allow_hyphen_values = true)]
        ra: String,
        #[arg(allow_hyphen_values = true)]
        dec: String,
    },
    /// Ecliptic to equatorial (right ascension, declination)
    EclToEq {
        #[arg(allow_hyphen_values = true)]
        latitude: String,
        #[arg(allow_hyphen_values = true)]
        longitude: String,
    },
    /// Equatorial to galactic (latitude, longitude)
    EqToGal {
        #[arg(allow_hyphen_values = true)]
        ra: String,
        #[arg(allow_hyphen_values = true)]
        dec: String,
    },
    /// Galactic to equatorial (right ascension, declination)
    GalToEq {
        #[arg(allow_hyphen_values = true)]
        latitude: String,
        #[arg(allow_hyphen_values = true)]
        longitude: String,
    },
    /// Spherical <rho, theta, phi> (degrees) to Cartesian
    SphToCart {
        rho: f64,
        #[arg(allow_hyphen_values = true)]
        theta: f64,
        #[arg(allow_hyphen_values = true)]
        phi: f64,
    },
    /// Cartesian (x, y, z) to spherical <rho, theta, phi>
    CartToSph {
        #[arg(allow_hyphen_values = true)]
        x: f64,
        #[arg(allow_hyphen_values = true)]
        y: f64,
        #[arg(allow_hyphen_values = true)]
        z: f64,
    },
    /// Position on a number line after moving by a magnitude
    NumberLine {
        #[arg(allow_hyphen_values = true)]
        magnitude: f64,
        /// Starting position
        #[arg(long, default_value = "0.0", allow_hyphen_values = true)]
        start: f64,
        /// "positive" or "negative"
        #[arg(long, conflicts_with = "signed")]
        direction: Option<String>,
        /// Treat the magnitude as signed and report a single position
        #[arg(long)]
        signed: bool,
    },
    /// Estimate mass, luminosity and radius from temperature and log g
    Stellar {
        /// Effective temperature in K
        temperature: f64,
        /// log10 of surface gravity in cm/s^2
        log_g: f64,
    },
    /// Blackbody radiance at the given wavelengths
    Blackbody {
        /// Temperature in K
        temperature: f64,
        /// Vacuum wavelengths in angstroms
        #[arg(required = true)]
        wavelengths: Vec<f64>,
        /// Also list the air wavelength
        #[arg(long)]
        air: bool,
    },
}
