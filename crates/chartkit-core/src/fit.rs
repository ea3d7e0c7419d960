//! Viewport-fit search: grows or shrinks the axis box until it fits the canvas.
//!
//! Fitting checks 14 sentinel points: the eight cube corners plus a point on
//! each side of the cube centre along every axis, at the distance of the
//! cube's half-diagonal. The axis points sit on the cube's bounding sphere,
//! which leaves room for the box to be rotated after fitting.

use glam::{DMat4, DVec3};

use crate::axis::AxisBox;
use crate::frustum::UNIT_CUBE_CORNERS;
use crate::options::Options;
use crate::transform::Transform;
use crate::transform_stack::{box_transform, TransformStack};

/// Number of sentinel points checked by the fit search.
pub const AXES_BOUNDARY_POINT_COUNT: usize = 14;

/// Half the diagonal of the unit cube, `sqrt(0.75)`.
const HALF_DIAGONAL: f64 = 0.866_025_403_784_438_6;

/// Pixel size of the drawing canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CanvasSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl CanvasSize {
    /// Creates a canvas size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns `width * height`.
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Returns whether a screen point lies in `[0, width] x [0, height]`.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= 0.0 && x <= f64::from(self.width) && y >= 0.0 && y <= f64::from(self.height)
    }
}

/// The 14 sentinel points in unit-cube coordinates.
pub fn axes_boundary_points() -> [DVec3; AXES_BOUNDARY_POINT_COUNT] {
    let mut points = [DVec3::ZERO; AXES_BOUNDARY_POINT_COUNT];
    points[..8].copy_from_slice(&UNIT_CUBE_CORNERS);

    let center = DVec3::splat(0.5);
    let axes = [DVec3::X, DVec3::Y, DVec3::Z];
    for (i, axis) in axes.iter().enumerate() {
        points[8 + 2 * i] = center + *axis * HALF_DIAGONAL;
        points[9 + 2 * i] = center - *axis * HALF_DIAGONAL;
    }
    points
}

/// A transient search over box scales.
///
/// The search works on a copy of the box scale; the real primitive is only
/// touched when the caller commits the returned zoom delta.
#[derive(Debug, Clone)]
pub struct FitSearch<'a> {
    rotation: Transform,
    working_scale: Transform,
    axes: &'a AxisBox,
    canvas: CanvasSize,
    step: f64,
    max_iterations: usize,
    sentinels: [DVec3; AXES_BOUNDARY_POINT_COUNT],
}

impl<'a> FitSearch<'a> {
    /// Starts a search from the stack's current rotation and box scale.
    pub fn new(
        stack: &TransformStack,
        axes: &'a AxisBox,
        canvas: CanvasSize,
        options: &Options,
    ) -> Self {
        Self {
            rotation: stack.rotation,
            working_scale: stack.box_scale,
            axes,
            canvas,
            step: 2f64.powf(1.0 / options.zoom_notches_per_doubling),
            max_iterations: options.fit_max_iterations,
            sentinels: axes_boundary_points(),
        }
    }

    /// The candidate box scale.
    pub fn working_scale(&self) -> &Transform {
        &self.working_scale
    }

    /// The box transform built from the candidate scale.
    pub fn future_box(&self) -> DMat4 {
        box_transform(&self.rotation, &self.working_scale, self.axes)
    }

    /// Returns whether every sentinel projects inside the canvas.
    pub fn sentinels_inside(&self) -> bool {
        let future_box = self.future_box();
        self.sentinels.iter().all(|point| {
            let p = future_box.transform_point3(*point);
            self.canvas.contains(p.x, p.y)
        })
    }

    /// Returns whether there is nothing meaningful to fit: a box with a
    /// zero-length axis or an empty canvas.
    pub fn is_degenerate(&self) -> bool {
        self.axes.is_degenerate() || self.canvas.area() == 0
    }

    /// Enlarges the box one step at a time while it still fits.
    ///
    /// Returns the number of whole steps the box can grow by, as a zoom delta
    /// (zero if it cannot grow by at least one step). A degenerate search, or
    /// one that still fits after the iteration cap, returns zero and leaves
    /// the working scale untouched.
    pub fn grow(&mut self) -> i32 {
        if self.is_degenerate() {
            log::debug!("axis fit grow skipped: degenerate box or canvas {:?}", self.canvas);
            return 0;
        }

        let start = self.working_scale;
        let mut steps = 0usize;
        loop {
            if !self.sentinels_inside() {
                break;
            }
            if steps >= self.max_iterations {
                log::warn!("axis fit still growing after {steps} steps, keeping the current scale");
                self.working_scale = start;
                return 0;
            }
            self.working_scale.uniform_scale(self.step);
            steps += 1;
        }

        // The last step pushed the box out of the canvas.
        if steps > 0 {
            self.working_scale.uniform_scale(1.0 / self.step);
        }

        log::debug!("axis fit grow: {steps} steps on {:?}", self.canvas);
        if steps > 1 {
            i32::try_from(steps - 1).unwrap_or(i32::MAX)
        } else {
            0
        }
    }

    /// Shrinks the box one step at a time until it fits.
    ///
    /// Returns a non-positive zoom delta, zero for a degenerate search.
    pub fn shrink(&mut self) -> i32 {
        if self.is_degenerate() {
            log::debug!("axis fit shrink skipped: degenerate box or canvas {:?}", self.canvas);
            return 0;
        }

        let mut steps = 0usize;
        while !self.sentinels_inside() {
            if steps >= self.max_iterations {
                log::warn!("axis fit stopped shrinking after {steps} steps");
                break;
            }
            self.working_scale.uniform_scale(1.0 / self.step);
            steps += 1;
        }

        log::debug!("axis fit shrink: {steps} steps on {:?}", self.canvas);
        -i32::try_from(steps).unwrap_or(i32::MAX)
    }
}
