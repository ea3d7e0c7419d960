//! Mandelbrot and Julia set sampler.
//!
//! Each voxel is a point in the 4D space `(c_real, c_imag, z_real, z_imag)`.
//! The three projection axes pick which of those four coordinates the
//! image's x, y and z indices walk along; the remaining coordinates stay at
//! their origin. Projecting onto `(0, 1)` gives the Mandelbrot set, onto
//! `(2, 3)` a Julia set.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::image::{ImageData, ImageExtent, ImageInformation, RowProgress};

/// Name of the generated scalar array.
pub const ITERATIONS_ARRAY_NAME: &str = "Iterations";

/// Samples escape-time iteration counts on a 3D slice of 4D space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MandelbrotSource {
    max_iterations: u32,
    whole_extent: ImageExtent,
    /// `(c_real, c_imag, z_real, z_imag)` at index zero.
    origin_cx: [f64; 4],
    /// Step per index along each of the four coordinates.
    sample_cx: [f64; 4],
    projection_axes: [usize; 3],
}

impl Default for MandelbrotSource {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            whole_extent: ImageExtent::new(0, 250, 0, 250, 0, 0),
            origin_cx: [-1.75, -1.25, 0.0, 0.0],
            sample_cx: [0.01; 4],
            projection_axes: [0, 1, 2],
        }
    }
}

impl MandelbrotSource {
    /// Creates a source with the default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    pub fn set_max_iterations(&mut self, max_iterations: u32) -> &mut Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn whole_extent(&self) -> &ImageExtent {
        &self.whole_extent
    }

    pub fn set_whole_extent(&mut self, extent: ImageExtent) -> &mut Self {
        self.whole_extent = extent;
        self
    }

    pub fn origin_cx(&self) -> [f64; 4] {
        self.origin_cx
    }

    pub fn set_origin_cx(&mut self, origin: [f64; 4]) -> &mut Self {
        self.origin_cx = origin;
        self
    }

    pub fn sample_cx(&self) -> [f64; 4] {
        self.sample_cx
    }

    pub fn set_sample_cx(&mut self, sample: [f64; 4]) -> &mut Self {
        self.sample_cx = sample;
        self
    }

    pub fn projection_axes(&self) -> [usize; 3] {
        self.projection_axes
    }

    /// Chooses which 4D coordinate each image axis walks along.
    ///
    /// Values outside `0..4` are accepted here and reported when the image
    /// is generated.
    pub fn set_projection_axes(&mut self, axes: [usize; 3]) -> &mut Self {
        self.projection_axes = axes;
        self
    }

    /// The 4D coordinate driven by image axis `image_axis`, if valid.
    fn projected(&self, image_axis: usize) -> Option<usize> {
        let axis = self.projection_axes[image_axis];
        (axis < 4).then_some(axis)
    }

    /// Image geometry: origin and spacing follow the projected coordinates.
    ///
    /// An invalid projection axis is logged and gets origin 0, spacing 1.
    pub fn information(&self) -> ImageInformation {
        let mut origin = DVec3::ZERO;
        let mut spacing = DVec3::ONE;
        for image_axis in 0..3 {
            if let Some(axis) = self.projected(image_axis) {
                origin[image_axis] = self.origin_cx[axis];
                spacing[image_axis] = self.sample_cx[axis];
            } else {
                log::error!(
                    "bad projection axis {} for image axis {image_axis}",
                    self.projection_axes[image_axis]
                );
            }
        }
        ImageInformation {
            extent: self.whole_extent,
            origin,
            spacing,
        }
    }

    /// Multiplies every sample step by `factor`.
    pub fn zoom(&mut self, factor: f64) {
        if factor == 1.0 {
            return;
        }
        for sample in &mut self.sample_cx {
            *sample *= factor;
        }
    }

    /// Moves the origin by whole samples along the projected axes.
    pub fn pan(&mut self, x: f64, y: f64, z: f64) {
        let offsets = [x, y, z];
        for (image_axis, offset) in offsets.into_iter().enumerate() {
            if offset == 0.0 {
                continue;
            }
            if let Some(axis) = self.projected(image_axis) {
                self.origin_cx[axis] += self.sample_cx[axis] * offset;
            }
        }
    }

    /// Takes origin and sample steps from another source.
    pub fn copy_origin_and_sample(&mut self, other: &MandelbrotSource) {
        self.origin_cx = other.origin_cx;
        self.sample_cx = other.sample_cx;
    }

    /// Escape-time count for `p = (c_real, c_imag, z_real, z_imag)`.
    ///
    /// Returns `max_iterations` for points that never escape, otherwise the
    /// iteration count plus a fractional part interpolated on `|z|^2`
    /// crossing 4, which smooths the banding between counts.
    #[allow(clippy::cast_precision_loss)]
    pub fn evaluate_set(&self, p: [f64; 4]) -> f32 {
        let [c_real, c_imag, mut z_real, mut z_imag] = p;
        let mut z_real2 = z_real * z_real;
        let mut z_imag2 = z_imag * z_imag;

        let mut count = 0u32;
        let mut previous = 0.0;
        let mut current = z_real2 + z_imag2;
        while current < 4.0 && count < self.max_iterations {
            z_imag = 2.0 * z_real * z_imag + c_imag;
            z_real = z_real2 - z_imag2 + c_real;
            z_real2 = z_real * z_real;
            z_imag2 = z_imag * z_imag;
            count += 1;
            previous = current;
            current = z_real2 + z_imag2;
        }

        if count == self.max_iterations {
            return count as f32;
        }
        (f64::from(count) + (4.0 - previous) / (current - previous)) as f32
    }

    /// Samples the whole extent.
    pub fn generate(&self) -> Result<ImageData> {
        self.generate_with_progress(|_| {})
    }

    /// Samples the whole extent, reporting progress in `[0, 1)` per row.
    pub fn generate_with_progress(&self, progress: impl FnMut(f64)) -> Result<ImageData> {
        let extent = self.whole_extent;
        extent.validate()?;
        let information = self.information();

        let dims = extent.dimensions();
        let mut progress = RowProgress::new(u64::from(dims.y) * u64::from(dims.z), progress);
        let mut scalars = Vec::with_capacity(usize::try_from(extent.num_points()).unwrap_or(0));

        let [a0, a1, a2] = [0, 1, 2].map(|image_axis| self.projected(image_axis));
        let coordinate = |axis: usize, index: i32| self.origin_cx[axis] + f64::from(index) * self.sample_cx[axis];

        log::debug!(
            "generating mandelbrot over {:?}..{:?}, axes {:?}",
            extent.min,
            extent.max,
            self.projection_axes
        );

        let mut p = self.origin_cx;
        for z in extent.min.z..=extent.max.z {
            if let Some(axis) = a2 {
                p[axis] = coordinate(axis, z);
            }
            for y in extent.min.y..=extent.max.y {
                progress.row();
                if let Some(axis) = a1 {
                    p[axis] = coordinate(axis, y);
                }
                for x in extent.min.x..=extent.max.x {
                    if let Some(axis) = a0 {
                        p[axis] = coordinate(axis, x);
                    }
                    scalars.push(self.evaluate_set(p));
                }
            }
        }

        Ok(ImageData::new(information, ITERATIONS_ARRAY_NAME, scalars))
    }
}
