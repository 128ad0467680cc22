//! Standalone TikZ document holding a list of figures.

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::GeoError;
use crate::figure::{Coordinates, Figure};
use crate::scanner::Scanner;

const PREAMBLE: &str = "\\documentclass[tikz]{standalone}\n\
                        \\begin{document}\n\
                        \\begin{tikzpicture}[xscale=1,yscale=-1]\n";

const CLOSING: &str = "\\end{tikzpicture}\n\\end{document}\n";

/// Prefix for every line emitted inside the picture.
const INDENT: &str = "\t ";

/// An owning, ordered collection of figures rendered as a complete
/// document.
///
/// The bounding box runs from `start` to `end`; the picture is flipped
/// vertically (`yscale=-1`) so `y` grows downwards like screen space.
/// A canvas is itself a [`Figure`]: writing it emits the whole document,
/// and reading it sets the bounding box.
#[derive(Default)]
pub struct Canvas {
    start: Coordinates,
    end: Coordinates,
    shapes: Vec<Box<dyn Figure>>,
}

impl Canvas {
    /// An empty canvas with the given bounding box.
    pub fn new(start: Coordinates, end: Coordinates) -> Self {
        Self {
            start,
            end,
            shapes: Vec::new(),
        }
    }

    /// A canvas pre-populated with `shapes`, kept in the given order.
    pub fn with_shapes(
        start: Coordinates,
        end: Coordinates,
        shapes: impl IntoIterator<Item = Box<dyn Figure>>,
    ) -> Self {
        Self {
            start,
            end,
            shapes: shapes.into_iter().collect(),
        }
    }

    /// Append a figure; it is drawn after all previously added ones.
    pub fn add_shape(&mut self, shape: Box<dyn Figure>) {
        self.shapes.push(shape);
    }

    /// Number of figures.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Whether the canvas holds no figures.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// The `(start, end)` corners of the bounding box.
    pub fn bounds(&self) -> (Coordinates, Coordinates) {
        (self.start, self.end)
    }

    /// Write the document to a file at `path`, replacing it if it exists.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), GeoError> {
        let mut out = BufWriter::new(File::create(path)?);
        self.write_to(&mut out)?;
        out.flush()?;
        Ok(())
    }
}

impl Figure for Canvas {
    fn write_to(&self, out: &mut dyn io::Write) -> io::Result<()> {
        out.write_all(PREAMBLE.as_bytes())?;
        let ((sx, sy), (ex, ey)) = (self.start, self.end);
        writeln!(
            out,
            "\t\\draw[help lines,use as bounding box] ({sx},{sy}) ({ex},{ey});"
        )?;
        let mut buf = Vec::new();
        for shape in &self.shapes {
            buf.clear();
            shape.write_to(&mut buf)?;
            for line in buf.split_inclusive(|&b| b == b'\n') {
                out.write_all(INDENT.as_bytes())?;
                out.write_all(line)?;
            }
        }
        out.write_all(CLOSING.as_bytes())
    }

    /// Reads `sx sy ex ey` into the bounding box.
    fn read_from(&mut self, input: &mut Scanner<'_>) -> Result<(), GeoError> {
        let start = input.next_coordinates()?;
        let end = input.next_coordinates()?;
        self.start = start;
        self.end = end;
        Ok(())
    }
}

impl fmt::Debug for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Canvas")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("shapes", &self.shapes.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Ellipse, Point, Polyline};

    #[test]
    fn empty_canvas_is_header_and_footer() {
        let canvas = Canvas::new((0.0, 0.0), (10.0, 5.0));
        assert_eq!(
            canvas.to_tikz().unwrap(),
            "\\documentclass[tikz]{standalone}\n\
             \\begin{document}\n\
             \\begin{tikzpicture}[xscale=1,yscale=-1]\n\
             \t\\draw[help lines,use as bounding box] (0,0) (10,5);\n\
             \\end{tikzpicture}\n\
             \\end{document}\n"
        );
    }

    #[test]
    fn figures_are_indented_in_insertion_order() {
        let mut canvas = Canvas::new((0.0, 0.0), (4.0, 4.0));
        canvas.add_shape(Box::new(Point::new((1.0, 1.0))));
        canvas.add_shape(Box::new(Ellipse::new((2.0, 2.0), 1.0, 0.5)));
        let doc = canvas.to_tikz().unwrap();
        let body: Vec<&str> = doc.lines().skip(4).take(2).collect();
        assert_eq!(
            body,
            [
                "\t \\fill(1, 1) circle(2pt);",
                "\t \\draw (2, 2) ellipse (1 and 0.5);",
            ]
        );
        assert!(doc.ends_with("\\end{tikzpicture}\n\\end{document}\n"));
    }

    #[test]
    fn empty_figures_leave_no_blank_lines() {
        let canvas = Canvas::with_shapes(
            (0.0, 0.0),
            (1.0, 1.0),
            [Box::new(Polyline::new()) as Box<dyn Figure>],
        );
        assert_eq!(canvas.len(), 1);
        assert_eq!(canvas.to_tikz().unwrap().lines().count(), 6);
    }

    #[test]
    fn read_sets_bounding_box() {
        let mut canvas = Canvas::default();
        canvas.read_from(&mut Scanner::new("-1 -2 3 4")).unwrap();
        assert_eq!(canvas.bounds(), ((-1.0, -2.0), (3.0, 4.0)));
    }

    #[test]
    fn partial_read_leaves_bounding_box() {
        let mut canvas = Canvas::new((1.0, 1.0), (2.0, 2.0));
        assert!(canvas.read_from(&mut Scanner::new("7 7 7")).is_err());
        assert_eq!(canvas.bounds(), ((1.0, 1.0), (2.0, 2.0)));
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use crate::{Ellipse, Point};
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn document_is_framed_by_preamble_and_closing(
                points in proptest::collection::vec((-1e3f64..1e3, -1e3f64..1e3), 0..8),
                ellipses in proptest::collection::vec(
                    ((-1e3f64..1e3, -1e3f64..1e3), 0.0f64..50.0, 0.0f64..50.0),
                    0..8,
                ),
            ) {
                let mut canvas = Canvas::new((0.0, 0.0), (100.0, 100.0));
                for &p in &points {
                    canvas.add_shape(Box::new(Point::new(p)));
                }
                for &(center, rx, ry) in &ellipses {
                    canvas.add_shape(Box::new(Ellipse::new(center, rx, ry)));
                }

                let doc = canvas.to_tikz().unwrap();
                prop_assert!(doc.starts_with(PREAMBLE));
                prop_assert!(doc.ends_with(CLOSING));
                prop_assert_eq!(doc.lines().count(), 6 + points.len() + ellipses.len());
                for line in doc.lines().skip(4).take(canvas.len()) {
                    prop_assert!(line.starts_with(INDENT));
                }
            }
        }
    }
}
