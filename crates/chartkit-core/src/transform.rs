//! Affine transforms with an explicit composition order.
//!
//! A [`Transform`] accumulates translations, rotations and scales into a single
//! 4x4 matrix. Whether a new operation is applied in the transform's local
//! frame or after everything accumulated so far is fixed at construction by
//! its [`Composition`].

use glam::{DMat4, DVec3};

/// Where a newly applied operation sits relative to the accumulated transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Composition {
    /// New operations act in the current local frame (`M = M * A`).
    ///
    /// A point is transformed by the new operation first, then by the
    /// previously accumulated transform.
    #[default]
    Local,
    /// New operations act after everything accumulated so far (`M = A * M`).
    Global,
}

/// A 4x4 affine transform with a fixed composition order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    matrix: DMat4,
    composition: Composition,
}

impl Transform {
    /// Creates an identity transform with the given composition order.
    #[must_use]
    pub const fn new(composition: Composition) -> Self {
        Self {
            matrix: DMat4::IDENTITY,
            composition,
        }
    }

    /// Creates an identity transform composing in the local frame.
    #[must_use]
    pub const fn local() -> Self {
        Self::new(Composition::Local)
    }

    /// Creates an identity transform composing in the global frame.
    #[must_use]
    pub const fn global() -> Self {
        Self::new(Composition::Global)
    }

    /// Wraps an existing matrix.
    #[must_use]
    pub const fn from_matrix(matrix: DMat4, composition: Composition) -> Self {
        Self {
            matrix,
            composition,
        }
    }

    /// Returns the accumulated matrix.
    #[must_use]
    pub fn matrix(&self) -> DMat4 {
        self.matrix
    }

    /// Replaces the accumulated matrix, keeping the composition order.
    pub fn set_matrix(&mut self, matrix: DMat4) {
        self.matrix = matrix;
    }

    /// Returns the composition order.
    #[must_use]
    pub fn composition(&self) -> Composition {
        self.composition
    }

    /// Resets to identity.
    pub fn identity(&mut self) {
        self.matrix = DMat4::IDENTITY;
    }

    /// Returns whether the accumulated matrix is exactly identity.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.matrix == DMat4::IDENTITY
    }

    /// Composes another matrix according to this transform's composition order.
    pub fn concatenate(&mut self, other: DMat4) {
        self.matrix = match self.composition {
            Composition::Local => self.matrix * other,
            Composition::Global => other * self.matrix,
        };
    }

    /// Applies a translation.
    pub fn translate(&mut self, offset: DVec3) {
        self.concatenate(DMat4::from_translation(offset));
    }

    /// Applies a per-axis scale.
    pub fn scale(&mut self, factors: DVec3) {
        self.concatenate(DMat4::from_scale(factors));
    }

    /// Applies the same scale factor on all three axes.
    pub fn uniform_scale(&mut self, factor: f64) {
        self.scale(DVec3::splat(factor));
    }

    /// Rotates about the X axis by `degrees` (right-handed).
    pub fn rotate_x(&mut self, degrees: f64) {
        self.concatenate(DMat4::from_rotation_x(degrees.to_radians()));
    }

    /// Rotates about the Y axis by `degrees` (right-handed).
    pub fn rotate_y(&mut self, degrees: f64) {
        self.concatenate(DMat4::from_rotation_y(degrees.to_radians()));
    }

    /// Rotates about the Z axis by `degrees` (right-handed).
    pub fn rotate_z(&mut self, degrees: f64) {
        self.concatenate(DMat4::from_rotation_z(degrees.to_radians()));
    }

    /// Transforms a point (w = 1).
    #[must_use]
    pub fn transform_point(&self, point: DVec3) -> DVec3 {
        self.matrix.transform_point3(point)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::local()
    }
}

/// Returns whether two matrices agree element-wise within `epsilon`.
#[must_use]
pub fn matrices_approx_eq(a: &DMat4, b: &DMat4, epsilon: f64) -> bool {
    a.to_cols_array()
        .iter()
        .zip(b.to_cols_array().iter())
        .all(|(x, y)| (x - y).abs() <= epsilon)
}
