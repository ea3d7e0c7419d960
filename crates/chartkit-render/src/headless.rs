//! A painter that records draw commands instead of rasterizing them.
//!
//! Useful for tests and for inspecting what a chart would draw without a
//! window or GPU.

use glam::{DMat4, Vec3};

use crate::context::{Context3D, Painter, Pen, Rgb, TextStyle};

/// A recorded drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// A batch of points.
    Points {
        points: Vec<Vec3>,
        colors: Option<Vec<Rgb>>,
        pen: Pen,
        /// Matrix in effect when the points were drawn.
        transform: DMat4,
    },
    /// A line segment.
    Line {
        start: Vec3,
        end: Vec3,
        pen: Pen,
        transform: DMat4,
    },
    /// A string in screen coordinates.
    Text {
        x: f32,
        y: f32,
        text: String,
        style: TextStyle,
    },
}

/// Records 3D commands under a matrix stack.
#[derive(Debug, Clone)]
pub struct HeadlessContext {
    current: DMat4,
    stack: Vec<DMat4>,
    pen: Pen,
    commands: Vec<DrawCommand>,
}

impl Default for HeadlessContext {
    fn default() -> Self {
        Self {
            current: DMat4::IDENTITY,
            stack: Vec::new(),
            pen: Pen::default(),
            commands: Vec::new(),
        }
    }
}

impl HeadlessContext {
    /// Returns the matrix currently in effect.
    pub fn current_matrix(&self) -> DMat4 {
        self.current
    }

    /// Returns the depth of the matrix stack.
    pub fn stack_depth(&self) -> usize {
        self.stack.len()
    }
}

impl Context3D for HeadlessContext {
    fn push_matrix(&mut self) {
        self.stack.push(self.current);
    }

    fn pop_matrix(&mut self) {
        if let Some(matrix) = self.stack.pop() {
            self.current = matrix;
        } else {
            log::warn!("pop_matrix called on an empty matrix stack");
            self.current = DMat4::IDENTITY;
        }
    }

    fn append_transform(&mut self, transform: &DMat4) {
        self.current *= *transform;
    }

    fn apply_pen(&mut self, pen: &Pen) {
        self.pen = *pen;
    }

    fn draw_points(&mut self, points: &[Vec3], colors: Option<&[Rgb]>) {
        self.commands.push(DrawCommand::Points {
            points: points.to_vec(),
            colors: colors.map(<[Rgb]>::to_vec),
            pen: self.pen,
            transform: self.current,
        });
    }

    fn draw_line(&mut self, start: Vec3, end: Vec3) {
        self.commands.push(DrawCommand::Line {
            start,
            end,
            pen: self.pen,
            transform: self.current,
        });
    }
}

/// A [`Painter`] that records everything it is asked to draw.
#[derive(Debug, Clone)]
pub struct HeadlessPainter {
    context: HeadlessContext,
    supports_3d: bool,
    style: TextStyle,
}

impl HeadlessPainter {
    /// Creates a painter with a 3D context.
    pub fn new() -> Self {
        Self {
            context: HeadlessContext::default(),
            supports_3d: true,
            style: TextStyle::default(),
        }
    }

    /// Creates a painter that only supports 2D drawing.
    pub fn without_3d() -> Self {
        Self {
            supports_3d: false,
            ..Self::new()
        }
    }

    /// All recorded commands, in order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.context.commands
    }

    /// The 3D context, for inspecting its matrix stack.
    pub fn context(&self) -> &HeadlessContext {
        &self.context
    }

    /// Point batches, in draw order.
    pub fn point_batches(&self) -> Vec<&[Vec3]> {
        self.commands()
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Points { points, .. } => Some(points.as_slice()),
                _ => None,
            })
            .collect()
    }

    /// Number of line segments drawn.
    pub fn line_count(&self) -> usize {
        self.commands()
            .iter()
            .filter(|command| matches!(command, DrawCommand::Line { .. }))
            .count()
    }

    /// Strings drawn, with their positions and styles.
    pub fn texts(&self) -> Vec<(f32, f32, &str, &TextStyle)> {
        self.commands()
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Text { x, y, text, style } => Some((*x, *y, text.as_str(), style)),
                _ => None,
            })
            .collect()
    }

    /// Forgets all recorded commands.
    pub fn clear(&mut self) {
        self.context.commands.clear();
    }
}

impl Default for HeadlessPainter {
    fn default() -> Self {
        Self::new()
    }
}

impl Painter for HeadlessPainter {
    fn context_3d(&mut self) -> Option<&mut dyn Context3D> {
        if self.supports_3d {
            Some(&mut self.context)
        } else {
            None
        }
    }

    fn apply_text_style(&mut self, style: &TextStyle) {
        self.style = style.clone();
    }

    #[allow(clippy::cast_precision_loss)]
    fn compute_string_bounds(&mut self, text: &str) -> [f32; 4] {
        // Monospace approximation: glyphs are 0.6 em wide, lines 1 em tall.
        let size = self.style.font_size as f32;
        [0.0, 0.0, text.chars().count() as f32 * size * 0.6, size]
    }

    fn draw_string(&mut self, x: f32, y: f32, text: &str) {
        self.context.commands.push(DrawCommand::Text {
            x,
            y,
            text: text.to_string(),
            style: self.style.clone(),
        });
    }
}
