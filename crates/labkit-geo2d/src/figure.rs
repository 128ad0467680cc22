//! The [`Figure`] capability trait.

use std::io;

use crate::error::GeoError;
use crate::scanner::Scanner;

/// A point in the drawing plane, `(x, y)`.
pub type Coordinates = (f64, f64);

/// A shape that can be emitted as TikZ markup and read back from text.
///
/// Implementations write complete lines: each statement ends with `;` and
/// a newline. Object safe, so a [`Canvas`](crate::Canvas) can hold a
/// heterogeneous `Vec<Box<dyn Figure>>`.
pub trait Figure {
    /// Write this figure's TikZ statement(s) to `out`.
    fn write_to(&self, out: &mut dyn io::Write) -> io::Result<()>;

    /// Populate this figure from whitespace-separated numbers.
    ///
    /// On error the figure is left unchanged.
    fn read_from(&mut self, input: &mut Scanner<'_>) -> Result<(), GeoError>;

    /// Render this figure's output to a `String`.
    fn to_tikz(&self) -> io::Result<String> {
        let mut buf = Vec::new();
        self.write_to(&mut buf)?;
        String::from_utf8(buf).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
    }
}

/// Write `(x, y)` with the separator used by figure statements.
pub(crate) fn write_coordinates(out: &mut dyn io::Write, (x, y): Coordinates) -> io::Result<()> {
    write!(out, "({x}, {y})")
}

/// Write a vertex chain `(x0, y0) -- (x1, y1) -- ...`.
pub(crate) fn write_path(out: &mut dyn io::Write, vertices: &[Coordinates]) -> io::Result<()> {
    for (i, &vertex) in vertices.iter().enumerate() {
        if i > 0 {
            write!(out, " -- ")?;
        }
        write_coordinates(out, vertex)?;
    }
    Ok(())
}
