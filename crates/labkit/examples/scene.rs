//! Builds a small scene from figures read out of text and from an array of
//! samples, then prints the TikZ document to stdout.
//!
//! ```sh
//! cargo run --example scene -p labkit > scene.tex
//! ```

use labkit::prelude::*;

const SCENE_INPUT: &str = "
    0 0 12 8
    2 2
    6 4 3 1.5
";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut input = Scanner::new(SCENE_INPUT);

    let mut canvas = Canvas::default();
    canvas.read_from(&mut input)?;

    let mut marker = Point::default();
    marker.read_from(&mut input)?;
    canvas.add_shape(Box::new(marker));

    let mut ring = Ellipse::default();
    ring.read_from(&mut input)?;
    canvas.add_shape(Box::new(ring));

    // A sampled curve, edited in place before plotting.
    let mut samples = ArrayD::with_size(6)?;
    for i in 0..samples.size() {
        samples[i] = (i as f64 * 0.9).sin() * 2.0 + 4.0;
    }
    samples.insert(7.5, 3)?;
    samples.remove(0)?;

    let curve: Polyline = samples
        .as_slice()
        .iter()
        .enumerate()
        .map(|(x, &y)| (x as f64 * 2.0, (y * 100.0).round() / 100.0))
        .collect();
    canvas.add_shape(Box::new(curve.with_line_width(Width::new(1.5))));

    let floor: Segment = [(0.0, 7.0), (12.0, 7.0), (12.0, 8.0), (0.0, 8.0)]
        .into_iter()
        .collect();
    canvas.add_shape(Box::new(
        floor.with_fill(Color::rgb(120, 90, 40).with_alpha(0.8)),
    ));

    let stdout = std::io::stdout();
    canvas.write_to(&mut stdout.lock())?;
    Ok(())
}
