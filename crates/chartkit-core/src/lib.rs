//! Core geometry for chartkit-rs.
//!
//! This crate provides the transform and clipping pipeline behind the
//! interactive 3D scatter chart:
//! - [`Transform`] and the five-primitive [`TransformStack`]
//! - [`AxisBox`] describing the on-screen chart box
//! - [`ClipFrustum`] built from the box transform, used to classify points
//! - [`FitSearch`] which scales the box to fit the canvas
//! - [`Options`] and the shared error type

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]
// Screen coordinates are f32, transforms are f64
#![allow(clippy::cast_possible_truncation)]

pub mod axis;
pub mod error;
pub mod fit;
pub mod frustum;
pub mod options;
pub mod plane;
pub mod transform;
pub mod transform_stack;

pub use axis::{Axis, AxisBox};
pub use error::{ChartError, Result};
pub use fit::{axes_boundary_points, CanvasSize, FitSearch, AXES_BOUNDARY_POINT_COUNT};
pub use frustum::{ClipFrustum, ThresholdMode, UNIT_CUBE_CORNERS};
pub use options::Options;
pub use plane::ClipPlane;
pub use transform::{matrices_approx_eq, Composition, Transform};
pub use transform_stack::{box_transform, TransformStack};

// Re-export glam types for convenience
pub use glam::{DMat4, DVec2, DVec3, Vec2, Vec3};
