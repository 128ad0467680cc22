//! Fill colour and stroke width.

use std::fmt;

/// A fill colour with opacity.
///
/// Either a TikZ colour name (`red`, `blue!50`) or an 8-bit RGB triple.
#[derive(Clone, Debug, PartialEq)]
pub struct Color {
    name: Option<String>,
    r: u8,
    g: u8,
    b: u8,
    alpha: f64,
}

impl Color {
    /// Opaque named colour.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            r: 0,
            g: 0,
            b: 0,
            alpha: 1.0,
        }
    }

    /// Opaque RGB colour.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            name: None,
            r,
            g,
            b,
            alpha: 1.0,
        }
    }

    /// The same colour with opacity `alpha`, clamped to `[0, 1]`.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha.clamp(0.0, 1.0);
        self
    }

    /// Opacity in `[0, 1]`.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::named("red")
    }
}

/// The colour as TikZ expects it in a `fill=` option.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => f.write_str(name),
            None => write!(
                f,
                "{{rgb,255:red,{};green,{};blue,{}}}",
                self.r, self.g, self.b
            ),
        }
    }
}

/// Stroke width in points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Width(f64);

impl Width {
    /// TikZ's default stroke.
    pub const DEFAULT: Width = Width(1.0);

    /// Width of `points`; negative values are treated as zero.
    pub fn new(points: f64) -> Self {
        Self(points.max(0.0))
    }

    /// Width in points.
    pub fn points(&self) -> f64 {
        self.0
    }
}

impl Default for Width {
    fn default() -> Self {
        Self::DEFAULT
    }
}
