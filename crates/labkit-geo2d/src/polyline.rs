//! Open chain of line segments.

use std::io;

use smallvec::SmallVec;

use crate::error::GeoError;
use crate::figure::{write_path, Coordinates, Figure};
use crate::scanner::Scanner;
use crate::style::Width;

/// Inline vertex storage; most polylines in a scene are short.
pub type Vertices = SmallVec<[Coordinates; 4]>;

/// A chain of straight segments through its vertices, in order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polyline {
    vertices: Vertices,
    line_width: Width,
}

impl Polyline {
    /// An empty polyline with the default stroke.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the stroke width.
    pub fn with_line_width(mut self, width: Width) -> Self {
        self.line_width = width;
        self
    }

    /// Append a vertex.
    pub fn push(&mut self, vertex: Coordinates) {
        self.vertices.push(vertex);
    }

    /// The vertices in drawing order.
    pub fn vertices(&self) -> &[Coordinates] {
        &self.vertices
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Whether the polyline has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The stroke width.
    pub fn line_width(&self) -> Width {
        self.line_width
    }
}

impl FromIterator<Coordinates> for Polyline {
    fn from_iter<I: IntoIterator<Item = Coordinates>>(iter: I) -> Self {
        Self {
            vertices: iter.into_iter().collect(),
            line_width: Width::DEFAULT,
        }
    }
}

impl Figure for Polyline {
    /// Emits nothing when there are no vertices.
    fn write_to(&self, out: &mut dyn io::Write) -> io::Result<()> {
        if self.vertices.is_empty() {
            return Ok(());
        }
        write!(out, "\\draw ")?;
        if self.line_width != Width::DEFAULT {
            write!(out, "[line width={}pt] ", self.line_width.points())?;
        }
        write_path(out, &self.vertices)?;
        writeln!(out, ";")
    }

    /// Reads one `x y` pair and appends it as a vertex.
    fn read_from(&mut self, input: &mut Scanner<'_>) -> Result<(), GeoError> {
        let vertex = input.next_coordinates()?;
        self.vertices.push(vertex);
        Ok(())
    }
}
