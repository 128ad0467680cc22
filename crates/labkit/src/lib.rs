//! labkit: two small lab components in one workspace.
//!
//! This is the facade crate that re-exports both sub-crates. The array and
//! the figure renderer are independent of each other.
//!
//! # Quick start
//!
//! ```rust
//! use labkit::prelude::*;
//!
//! let mut samples = ArrayD::with_size(3).unwrap();
//! samples[0] = 1.0;
//! samples[1] = 2.0;
//! samples[2] = 3.0;
//! samples.insert(9.0, 1).unwrap();
//! assert_eq!(samples.to_string(), "[1, 9, 2, 3]");
//!
//! let mut canvas = Canvas::new((0.0, 0.0), (4.0, 4.0));
//! let mut outline = Polyline::new();
//! for (x, &y) in samples.as_slice().iter().enumerate() {
//!     outline.push((x as f64, y));
//! }
//! canvas.add_shape(Box::new(outline));
//! let doc = canvas.to_tikz().unwrap();
//! assert!(doc.contains("\\draw (0, 1) -- (1, 9) -- (2, 2) -- (3, 3);"));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`arrayd`] | `labkit-arrayd` | `ArrayD`, its growth config and errors |
//! | [`geo2d`] | `labkit-geo2d` | Figures, styles, `Canvas`, text `Scanner` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Growable `f64` array (`labkit-arrayd`).
pub use labkit_arrayd as arrayd;

/// 2-D figures and TikZ documents (`labkit-geo2d`).
///
/// Implement [`geo2d::Figure`] to add new shapes to a [`geo2d::Canvas`].
pub use labkit_geo2d as geo2d;

/// Common imports.
///
/// ```rust
/// use labkit::prelude::*;
/// ```
pub mod prelude {
    // Array
    pub use labkit_arrayd::{ArrayConfig, ArrayD, ArrayError};

    // Figures
    pub use labkit_geo2d::{
        Canvas, Color, Coordinates, Ellipse, Figure, GeoError, Point, Polyline, Scanner, Segment,
        Width,
    };
}
