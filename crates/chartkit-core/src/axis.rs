//! On-screen axis descriptors.
//!
//! The chart box is described by three axes, each a 2D segment in screen
//! space. The X axis contributes its horizontal extent, the Y axis its
//! vertical extent, and the Z axis reuses the vertical component of its
//! segment as depth.

use glam::{DVec3, Vec2};

use crate::error::{ChartError, Result};

/// A single axis: a screen-space segment and a title.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    /// Start point in screen coordinates.
    pub point1: Vec2,
    /// End point in screen coordinates.
    pub point2: Vec2,
    /// Title drawn next to the axis.
    pub title: String,
}

impl Axis {
    /// Creates an untitled axis.
    pub fn new(point1: Vec2, point2: Vec2) -> Self {
        Self {
            point1,
            point2,
            title: String::new(),
        }
    }

    /// Moves both end points by `offset`.
    pub fn shift(&mut self, offset: Vec2) {
        self.point1 += offset;
        self.point2 += offset;
    }
}

impl Default for Axis {
    fn default() -> Self {
        Self::new(Vec2::ZERO, Vec2::ZERO)
    }
}

/// The three axes bounding the chart box.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AxisBox {
    axes: [Axis; 3],
}

impl AxisBox {
    /// Creates an axis box from three axes (X, Y, Z).
    pub fn new(x: Axis, y: Axis, z: Axis) -> Self {
        Self { axes: [x, y, z] }
    }

    /// Creates an axis box whose screen footprint starts at `origin` and
    /// spans `size` (x = width, y = height, z = depth).
    pub fn from_origin_and_size(origin: Vec2, size: DVec3) -> Self {
        let (w, h, d) = (size.x as f32, size.y as f32, size.z as f32);
        Self::new(
            Axis::new(origin, origin + Vec2::new(w, 0.0)),
            Axis::new(origin, origin + Vec2::new(0.0, h)),
            Axis::new(origin, origin + Vec2::new(0.0, d)),
        )
    }

    /// Returns an axis by index.
    pub fn axis(&self, index: usize) -> Result<&Axis> {
        self.axes
            .get(index)
            .ok_or(ChartError::InvalidAxisIndex(index))
    }

    /// Returns a mutable axis by index.
    pub fn axis_mut(&mut self, index: usize) -> Result<&mut Axis> {
        self.axes
            .get_mut(index)
            .ok_or(ChartError::InvalidAxisIndex(index))
    }

    /// Returns all three axes.
    pub fn axes(&self) -> &[Axis; 3] {
        &self.axes
    }

    /// Screen-space corner where the three axes meet.
    pub fn origin(&self) -> DVec3 {
        DVec3::new(
            f64::from(self.axes[0].point1.x),
            f64::from(self.axes[1].point1.y),
            f64::from(self.axes[2].point1.y),
        )
    }

    /// Length of each axis in screen units.
    pub fn extents(&self) -> DVec3 {
        DVec3::new(
            f64::from(self.axes[0].point2.x - self.axes[0].point1.x),
            f64::from(self.axes[1].point2.y - self.axes[1].point1.y),
            f64::from(self.axes[2].point2.y - self.axes[2].point1.y),
        )
    }

    /// Midpoint of the box; rotation and scaling happen about this point.
    pub fn center(&self) -> DVec3 {
        self.origin() + self.extents() * 0.5
    }

    /// Returns whether any axis has zero (or non-finite) length.
    ///
    /// A degenerate box projects to a point or a plane and cannot be fitted.
    pub fn is_degenerate(&self) -> bool {
        let extents = self.extents();
        !extents.is_finite() || extents.cmpeq(DVec3::ZERO).any()
    }

    /// Recenters the box after a canvas resize.
    ///
    /// X and Y axes move by `(dx, dy)`; the Z axis only moves horizontally so
    /// that its depth range is preserved.
    pub fn shift(&mut self, dx: f32, dy: f32) {
        self.axes[0].shift(Vec2::new(dx, dy));
        self.axes[1].shift(Vec2::new(dx, dy));
        self.axes[2].shift(Vec2::new(dx, 0.0));
    }

    /// Sets the axis titles (X, Y, Z).
    pub fn set_titles(&mut self, x: &str, y: &str, z: &str) {
        self.axes[0].title = x.to_string();
        self.axes[1].title = y.to_string();
        self.axes[2].title = z.to_string();
    }
}
