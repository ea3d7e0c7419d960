//! Drawing-surface abstractions.
//!
//! The chart does not rasterize anything itself. It issues commands to a
//! [`Painter`] (2D text) and, through it, to a [`Context3D`] (points and
//! lines under a matrix stack). Backends implement these traits.

use glam::{DMat4, Vec3};

/// An 8-bit RGB colour.
pub type Rgb = [u8; 3];

/// Stroke settings for points and lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pen {
    /// RGBA colour.
    pub color: [u8; 4],
    /// Point size or line width in pixels.
    pub width: f32,
}

impl Pen {
    /// Creates a pen.
    pub const fn new(color: [u8; 4], width: f32) -> Self {
        Self { color, width }
    }
}

impl Default for Pen {
    fn default() -> Self {
        Self::new([0, 0, 0, 255], 1.0)
    }
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Justification {
    /// Anchor at the left edge.
    #[default]
    Left,
    /// Anchor at the centre.
    Centered,
    /// Anchor at the right edge.
    Right,
}

/// Vertical text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalJustification {
    /// Anchor at the baseline.
    #[default]
    Bottom,
    /// Anchor at the middle.
    Centered,
    /// Anchor at the top.
    Top,
}

/// Text appearance.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub justification: Justification,
    pub vertical_justification: VerticalJustification,
    /// RGB colour in `[0, 1]`.
    pub color: Vec3,
    pub font_family: String,
    pub font_size: u32,
    /// Counter-clockwise rotation in degrees.
    pub orientation: f64,
}

impl TextStyle {
    /// Black text centred on its anchor in both directions.
    pub fn centered(font_family: impl Into<String>, font_size: u32) -> Self {
        Self {
            justification: Justification::Centered,
            vertical_justification: VerticalJustification::Centered,
            color: Vec3::ZERO,
            font_family: font_family.into(),
            font_size,
            orientation: 0.0,
        }
    }

    /// Returns a copy rotated by `degrees`.
    #[must_use]
    pub fn with_orientation(mut self, degrees: f64) -> Self {
        self.orientation = degrees;
        self
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::centered("Arial", 12)
    }
}

/// A 3D drawing context with its own matrix stack.
pub trait Context3D {
    /// Saves the current matrix.
    fn push_matrix(&mut self);

    /// Restores the most recently saved matrix.
    fn pop_matrix(&mut self);

    /// Multiplies the current matrix by `transform` (applied to geometry first).
    fn append_transform(&mut self, transform: &DMat4);

    /// Sets the stroke for subsequent points and lines.
    fn apply_pen(&mut self, pen: &Pen);

    /// Draws points, optionally with one colour per point.
    fn draw_points(&mut self, points: &[Vec3], colors: Option<&[Rgb]>);

    /// Draws a line segment.
    fn draw_line(&mut self, start: Vec3, end: Vec3);
}

/// A 2D painter, optionally backed by a 3D context.
pub trait Painter {
    /// Returns the 3D context, if this painter has one.
    fn context_3d(&mut self) -> Option<&mut dyn Context3D>;

    /// Sets the style for subsequent strings.
    fn apply_text_style(&mut self, style: &TextStyle);

    /// Returns `[x, y, width, height]` of `text` rendered at the origin.
    fn compute_string_bounds(&mut self, text: &str) -> [f32; 4];

    /// Draws `text` anchored at `(x, y)`.
    fn draw_string(&mut self, x: f32, y: f32, text: &str);
}
