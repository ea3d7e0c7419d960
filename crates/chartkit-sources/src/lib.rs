//! Procedural image sources for chartkit-rs.
//!
//! - [`GaussianSource`] samples a Gaussian bump on an integer grid.
//! - [`MandelbrotSource`] samples escape-time counts of the Mandelbrot and
//!   Julia sets on a 3D slice of `(c, z)` space.
//!
//! Both produce an [`ImageData`]: one `f32` per voxel, x fastest.

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::return_self_not_must_use)]

pub mod error;
pub mod gaussian;
pub mod image;
pub mod mandelbrot;

pub use error::{Result, SourceError};
pub use gaussian::{GaussianSource, GAUSSIAN_ARRAY_NAME};
pub use image::{ImageData, ImageExtent, ImageInformation};
pub use mandelbrot::{MandelbrotSource, ITERATIONS_ARRAY_NAME};
