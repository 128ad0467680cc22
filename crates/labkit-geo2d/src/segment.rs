//! Filled polygonal region.

use std::io;

use crate::error::GeoError;
use crate::figure::{write_path, Coordinates, Figure};
use crate::polyline::Polyline;
use crate::scanner::Scanner;
use crate::style::Color;

/// A polyline outline drawn with a fill colour.
///
/// The outline is held by value; the segment adds only its fill style.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Segment {
    outline: Polyline,
    fill: Color,
}

impl Segment {
    /// A segment with the given outline and the default red fill.
    pub fn new(outline: Polyline) -> Self {
        Self {
            outline,
            fill: Color::default(),
        }
    }

    /// Set the fill colour.
    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = fill;
        self
    }

    /// The outline.
    pub fn outline(&self) -> &Polyline {
        &self.outline
    }

    /// The fill colour.
    pub fn fill(&self) -> &Color {
        &self.fill
    }
}

impl FromIterator<Coordinates> for Segment {
    fn from_iter<I: IntoIterator<Item = Coordinates>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Figure for Segment {
    /// Emits nothing when the outline has no vertices.
    fn write_to(&self, out: &mut dyn io::Write) -> io::Result<()> {
        if self.outline.is_empty() {
            return Ok(());
        }
        write!(
            out,
            "\\draw [fill={}, opacity={}] ",
            self.fill,
            self.fill.alpha()
        )?;
        write_path(out, self.outline.vertices())?;
        writeln!(out, ";")
    }

    /// Reads one `x y` pair and appends it to the outline.
    fn read_from(&mut self, input: &mut Scanner<'_>) -> Result<(), GeoError> {
        self.outline.read_from(input)
    }
}
