//! Reusable figure and I/O fixtures.
//!
//! - [`sample_scene`]: a canvas with one of each figure type.
//! - [`FailingFigure`]: a figure whose write and read always fail.
//! - [`FailingWriter`]: an `io::Write` that fails after a byte budget.

use std::io;

use labkit_geo2d::{Canvas, Color, Ellipse, Figure, GeoError, Point, Polyline, Scanner, Segment};

/// Canvas `(0,0)-(10,10)` holding, in order: a point, a polyline, an
/// ellipse, and a blue segment.
pub fn sample_scene() -> Canvas {
    let mut canvas = Canvas::new((0.0, 0.0), (10.0, 10.0));
    canvas.add_shape(Box::new(Point::new((1.0, 1.0))));
    canvas.add_shape(Box::new(
        [(0.0, 0.0), (5.0, 5.0), (10.0, 0.0)]
            .into_iter()
            .collect::<Polyline>(),
    ));
    canvas.add_shape(Box::new(Ellipse::new((5.0, 5.0), 2.0, 1.0)));
    canvas.add_shape(Box::new(
        [(2.0, 8.0), (8.0, 8.0)]
            .into_iter()
            .collect::<Segment>()
            .with_fill(Color::named("blue")),
    ));
    canvas
}

/// The lines [`sample_scene`] emits between the bounding box and the
/// closing block.
pub const SAMPLE_SCENE_BODY: [&str; 4] = [
    "\t \\fill(1, 1) circle(2pt);",
    "\t \\draw (0, 0) -- (5, 5) -- (10, 0);",
    "\t \\draw (5, 5) ellipse (2 and 1);",
    "\t \\draw [fill=blue, opacity=1] (2, 8) -- (8, 8);",
];

/// Fails every write and read with a fixed message.
pub struct FailingFigure;

impl Figure for FailingFigure {
    fn write_to(&self, _out: &mut dyn io::Write) -> io::Result<()> {
        Err(io::Error::other("failing figure"))
    }

    fn read_from(&mut self, _input: &mut Scanner<'_>) -> Result<(), GeoError> {
        Err(GeoError::UnexpectedEnd {
            expected: "nothing, ever",
        })
    }
}

/// Accepts up to `budget` bytes, then fails every write.
pub struct FailingWriter {
    pub budget: usize,
    pub written: Vec<u8>,
}

impl FailingWriter {
    pub fn new(budget: usize) -> Self {
        Self {
            budget,
            written: Vec::new(),
        }
    }
}

impl io::Write for FailingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let room = self.budget.saturating_sub(self.written.len());
        if room == 0 {
            return Err(io::Error::new(io::ErrorKind::WriteZero, "budget exhausted"));
        }
        let n = room.min(buf.len());
        self.written.extend_from_slice(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
