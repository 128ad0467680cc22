//! Benchmark workloads for labkit.
//!
//! - [`insert_positions`]: deterministic scattered insert positions
//! - [`grid_scene`]: a canvas filled with a grid of figures

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use labkit_geo2d::{Canvas, Ellipse, Point, Polyline};

/// `count` insert positions, each valid for an array that has grown by one
/// element per previous insert (position `k` lies in `[0, k]`).
///
/// Uses a multiplicative hash so runs are reproducible without an RNG.
pub fn insert_positions(count: usize) -> Vec<isize> {
    (0..count)
        .map(|k| {
            let h = (k as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15) >> 32;
            (h % (k as u64 + 1)) as isize
        })
        .collect()
}

/// A `side x side` grid where each cell holds a point, a ring, and a
/// three-vertex polyline.
pub fn grid_scene(side: u32) -> Canvas {
    let extent = side as f64;
    let mut canvas = Canvas::new((0.0, 0.0), (extent, extent));
    for row in 0..side {
        for col in 0..side {
            let (x, y) = (col as f64, row as f64);
            canvas.add_shape(Box::new(Point::new((x + 0.5, y + 0.5))));
            canvas.add_shape(Box::new(Ellipse::new((x + 0.5, y + 0.5), 0.4, 0.25)));
            canvas.add_shape(Box::new(
                [(x, y), (x + 0.5, y + 1.0), (x + 1.0, y)]
                    .into_iter()
                    .collect::<Polyline>(),
            ));
        }
    }
    canvas
}
