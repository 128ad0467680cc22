//! Axis-aligned ellipse.

use std::io;

use crate::error::GeoError;
use crate::figure::{write_coordinates, Coordinates, Figure};
use crate::scanner::Scanner;

/// An axis-aligned ellipse given by its center and two half-axes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Ellipse {
    center: Coordinates,
    half_a: f64,
    half_b: f64,
}

impl Ellipse {
    /// Create an ellipse with horizontal half-axis `half_a` and vertical
    /// half-axis `half_b`.
    pub const fn new(center: Coordinates, half_a: f64, half_b: f64) -> Self {
        Self {
            center,
            half_a,
            half_b,
        }
    }

    /// The center point.
    pub fn center(&self) -> Coordinates {
        self.center
    }

    /// The `(horizontal, vertical)` half-axes.
    pub fn half_axes(&self) -> (f64, f64) {
        (self.half_a, self.half_b)
    }
}

impl Figure for Ellipse {
    fn write_to(&self, out: &mut dyn io::Write) -> io::Result<()> {
        write!(out, "\\draw ")?;
        write_coordinates(out, self.center)?;
        writeln!(out, " ellipse ({} and {});", self.half_a, self.half_b)
    }

    fn read_from(&mut self, input: &mut Scanner<'_>) -> Result<(), GeoError> {
        let center = input.next_coordinates()?;
        let half_a = input.next_f64("horizontal half-axis")?;
        let half_b = input.next_f64("vertical half-axis")?;
        *self = Self::new(center, half_a, half_b);
        Ok(())
    }
}
