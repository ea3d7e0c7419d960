//! The five camera primitives and the transforms derived from them.

use glam::{DMat4, DVec2, DVec3};

use crate::axis::AxisBox;
use crate::transform::Transform;

/// The mutable transform state of a 3D chart.
///
/// Only the five primitives are stored. The context and box transforms are
/// recomputed from them on every call.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformStack {
    /// Screen-space pan.
    pub translation: Transform,
    /// Orientation of the data and the axis box.
    pub rotation: Transform,
    /// Zoom applied to data points only.
    pub point_scale: Transform,
    /// Zoom applied to the axis box (and the data inside it).
    pub box_scale: Transform,
    /// Maps raw data coordinates onto the axis lengths.
    pub device: Transform,
}

impl Default for TransformStack {
    fn default() -> Self {
        Self::new()
    }
}

impl TransformStack {
    /// Creates a stack with every primitive at identity.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            translation: Transform::global(),
            rotation: Transform::local(),
            point_scale: Transform::global(),
            box_scale: Transform::local(),
            device: Transform::local(),
        }
    }

    /// Resets all primitives to identity.
    pub fn reset(&mut self) {
        self.translation.identity();
        self.rotation.identity();
        self.point_scale.identity();
        self.box_scale.identity();
        self.device.identity();
    }

    /// The transform mapping a raw data point into device (screen) space.
    ///
    /// Rotation and both scales act about the centre of the axis box.
    #[must_use]
    pub fn context_transform(&self, axes: &AxisBox, geometry_origin: DVec2) -> DMat4 {
        let center = axes.center();
        let origin = axes.origin();
        let placement = DVec3::new(
            origin.x - geometry_origin.x,
            origin.y - geometry_origin.y,
            origin.z,
        );

        let mut context = Transform::local();
        context.concatenate(self.translation.matrix());
        context.translate(center);
        context.concatenate(self.rotation.matrix());
        context.concatenate(self.box_scale.matrix());
        context.concatenate(self.point_scale.matrix());
        context.translate(-center);
        context.translate(placement);
        context.concatenate(self.device.matrix());
        context.matrix()
    }

    /// The transform mapping the unit cube onto the on-screen axis box.
    #[must_use]
    pub fn box_transform(&self, axes: &AxisBox) -> DMat4 {
        self.box_transform_with_scale(&self.box_scale, axes)
    }

    /// Like [`Self::box_transform`], but with a substitute box scale.
    ///
    /// Used by the viewport-fit search to try candidate scales without
    /// touching the real primitive.
    #[must_use]
    pub fn box_transform_with_scale(&self, box_scale: &Transform, axes: &AxisBox) -> DMat4 {
        box_transform(&self.rotation, box_scale, axes)
    }
}

/// Builds the unit-cube-to-screen transform from a rotation and a box scale.
#[must_use]
pub fn box_transform(rotation: &Transform, box_scale: &Transform, axes: &AxisBox) -> DMat4 {
    let mut boxed = Transform::global();
    boxed.translate(DVec3::splat(-0.5));
    boxed.concatenate(rotation.matrix());
    boxed.concatenate(box_scale.matrix());
    boxed.translate(DVec3::splat(0.5));
    boxed.scale(axes.extents());
    boxed.translate(axes.origin());
    boxed.matrix()
}
