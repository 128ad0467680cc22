//! A filled dot at a single position.

use std::io;

use crate::error::GeoError;
use crate::figure::{Coordinates, Figure};
use crate::scanner::Scanner;

/// A point drawn as a small filled circle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    point: Coordinates,
}

impl Point {
    /// Radius of the rendered dot, in points.
    pub const RADIUS_PT: f64 = 2.0;

    /// Create a point at `point`.
    pub const fn new(point: Coordinates) -> Self {
        Self { point }
    }

    /// The point's position.
    pub fn coordinates(&self) -> Coordinates {
        self.point
    }
}

impl Figure for Point {
    fn write_to(&self, out: &mut dyn io::Write) -> io::Result<()> {
        let (x, y) = self.point;
        writeln!(out, "\\fill({x}, {y}) circle({}pt);", Self::RADIUS_PT)
    }

    fn read_from(&mut self, input: &mut Scanner<'_>) -> Result<(), GeoError> {
        self.point = input.next_coordinates()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_fill_circle() {
        let p = Point::new((1.0, 2.5));
        assert_eq!(p.to_tikz().unwrap(), "\\fill(1, 2.5) circle(2pt);\n");
    }

    #[test]
    fn default_is_origin() {
        assert_eq!(Point::default().coordinates(), (0.0, 0.0));
    }

    #[test]
    fn read_replaces_position() {
        let mut p = Point::default();
        p.read_from(&mut Scanner::new("3 -4")).unwrap();
        assert_eq!(p.coordinates(), (3.0, -4.0));
    }

    #[test]
    fn failed_read_leaves_point() {
        let mut p = Point::new((1.0, 1.0));
        assert!(p.read_from(&mut Scanner::new("5")).is_err());
        assert_eq!(p.coordinates(), (1.0, 1.0));
    }
}
