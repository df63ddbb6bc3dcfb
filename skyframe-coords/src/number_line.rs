//! A point moving along a one-dimensional number line.
//!
//! ```
//! use skyframe_coords::number_line::NumberLine;
//!
//! let line = NumberLine::new(5.0, 2.0);
//! assert_eq!(line.magnitude_without_direction().unwrap(), [7.0, -3.0]);
//! assert_eq!(line.magnitude_with_direction(), 7.0);
//! assert_eq!(line.magnitude_with_separate_direction("negative").unwrap(), -3.0);
//! ```

use crate::{CoordError, CoordResult};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Positive,
    Negative,
}

impl FromStr for Direction {
    type Err = CoordError;

    /// Accepts exactly `"positive"` or `"negative"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "positive" => Ok(Self::Positive),
            "negative" => Ok(Self::Negative),
            other => Err(CoordError::invalid_direction(other)),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberLine {
    magnitude: f64,
    starting_position: f64,
}

impl NumberLine {
    pub fn new(magnitude: f64, starting_position: f64) -> Self {
        Self {
            magnitude,
            starting_position,
        }
    }

    /// A line starting at the origin.
    pub fn from_origin(magnitude: f64) -> Self {
        Self::new(magnitude, 0.0)
    }

    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    pub fn starting_position(&self) -> f64 {
        self.starting_position
    }

    /// Both candidate end positions, `[start + m, start - m]`.
    ///
    /// # Errors
    ///
    /// [`CoordError::InvalidMagnitude`] for a negative magnitude.
    pub fn magnitude_without_direction(&self) -> CoordResult<[f64; 2]> {
        self.check_magnitude()?;
        let positions = [
            self.starting_position + self.magnitude,
            self.starting_position - self.magnitude,
        ];
        tracing::debug!(
            start = self.starting_position,
            positive = positions[0],
            negative = positions[1],
            "no direction given, two end positions possible"
        );
        Ok(positions)
    }

    /// End position for a signed magnitude, `start + m`.
    pub fn magnitude_with_direction(&self) -> f64 {
        self.starting_position + self.magnitude
    }

    /// End position for a direction given as `"positive"` or `"negative"`.
    ///
    /// # Errors
    ///
    /// [`CoordError::InvalidMagnitude`] for a negative magnitude, then
    /// [`CoordError::InvalidDirection`] for any other direction text.
    pub fn magnitude_with_separate_direction(&self, direction: &str) -> CoordResult<f64> {
        self.check_magnitude()?;
        self.move_towards(direction.parse()?)
    }

    /// Typed form of [`magnitude_with_separate_direction`](Self::magnitude_with_separate_direction).
    pub fn move_towards(&self, direction: Direction) -> CoordResult<f64> {
        self.check_magnitude()?;
        Ok(match direction {
            Direction::Positive => self.starting_position + self.magnitude,
            Direction::Negative => self.starting_position - self.magnitude,
        })
    }

    fn check_magnitude(&self) -> CoordResult<()> {
        if self.magnitude < 0.0 || self.magnitude.is_nan() {
            return Err(CoordError::invalid_magnitude(self.magnitude));
        }
        Ok(())
    }
}
