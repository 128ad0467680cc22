//! 2-D figures rendered as TikZ.
//!
//! Every shape implements the [`Figure`] trait: it can write itself as a
//! line of TikZ markup and populate itself from whitespace-separated
//! numbers. A [`Canvas`] owns a list of figures and wraps their output in
//! a standalone LaTeX document:
//!
//! ```text
//! \documentclass[tikz]{standalone}       preamble
//! \begin{document}
//! \begin{tikzpicture}[...]
//!     \draw[help lines,...] (..) (..);   bounding box
//!     <figure lines, insertion order>
//! \end{tikzpicture}                      closing block
//! \end{document}
//! ```
//!
//! [`Segment`] is a filled [`Polyline`]: it holds a polyline value plus a
//! fill [`Color`] rather than extending it.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod canvas;
pub mod ellipse;
pub mod error;
pub mod figure;
pub mod point;
pub mod polyline;
pub mod scanner;
pub mod segment;
pub mod style;

pub use canvas::Canvas;
pub use ellipse::Ellipse;
pub use error::GeoError;
pub use figure::{Coordinates, Figure};
pub use point::Point;
pub use polyline::Polyline;
pub use scanner::Scanner;
pub use segment::Segment;
pub use style::{Color, Width};
