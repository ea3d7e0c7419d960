//! A Gaussian bump sampled on an integer grid.

use glam::{DVec3, IVec3};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::image::{ImageData, ImageExtent, ImageInformation, RowProgress};

/// Name of the generated scalar array.
pub const GAUSSIAN_ARRAY_NAME: &str = "Gaussian";

/// Emits `maximum * exp(-|center - index|^2 / (2 sigma^2))` per voxel.
///
/// Distances are measured in index units; the image has unit spacing and a
/// zero origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaussianSource {
    maximum: f64,
    center: DVec3,
    whole_extent: ImageExtent,
    standard_deviation: f64,
}

impl Default for GaussianSource {
    fn default() -> Self {
        Self {
            maximum: 1.0,
            center: DVec3::ZERO,
            whole_extent: ImageExtent::new(0, 255, 0, 255, 0, 0),
            standard_deviation: 100.0,
        }
    }
}

impl GaussianSource {
    /// Creates a source with the default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Peak value at the centre.
    pub fn maximum(&self) -> f64 {
        self.maximum
    }

    pub fn set_maximum(&mut self, maximum: f64) -> &mut Self {
        self.maximum = maximum;
        self
    }

    /// Centre of the bump, in index coordinates.
    pub fn center(&self) -> DVec3 {
        self.center
    }

    pub fn set_center(&mut self, center: DVec3) -> &mut Self {
        self.center = center;
        self
    }

    pub fn whole_extent(&self) -> &ImageExtent {
        &self.whole_extent
    }

    pub fn set_whole_extent(&mut self, extent: ImageExtent) -> &mut Self {
        self.whole_extent = extent;
        self
    }

    pub fn standard_deviation(&self) -> f64 {
        self.standard_deviation
    }

    pub fn set_standard_deviation(&mut self, sigma: f64) -> &mut Self {
        self.standard_deviation = sigma;
        self
    }

    /// Image geometry without samples.
    pub fn information(&self) -> ImageInformation {
        ImageInformation {
            extent: self.whole_extent,
            origin: DVec3::ZERO,
            spacing: DVec3::ONE,
        }
    }

    /// Value at an absolute index.
    pub fn evaluate(&self, index: IVec3) -> f64 {
        let inverse_two_variance = 1.0 / (2.0 * self.standard_deviation * self.standard_deviation);
        let d = self.center - index.as_dvec3();
        self.maximum * (-d.length_squared() * inverse_two_variance).exp()
    }

    /// Samples the whole extent.
    pub fn generate(&self) -> Result<ImageData> {
        self.generate_with_progress(|_| {})
    }

    /// Samples the whole extent, reporting progress in `[0, 1)` per row.
    pub fn generate_with_progress(&self, progress: impl FnMut(f64)) -> Result<ImageData> {
        let extent = self.whole_extent;
        extent.validate()?;

        let dims = extent.dimensions();
        let mut progress = RowProgress::new(u64::from(dims.y) * u64::from(dims.z), progress);
        let mut scalars = Vec::with_capacity(usize::try_from(extent.num_points()).unwrap_or(0));

        log::debug!(
            "generating gaussian over {:?}..{:?}, sigma {}",
            extent.min,
            extent.max,
            self.standard_deviation
        );

        for z in extent.min.z..=extent.max.z {
            for y in extent.min.y..=extent.max.y {
                progress.row();
                for x in extent.min.x..=extent.max.x {
                    scalars.push(self.evaluate(IVec3::new(x, y, z)) as f32);
                }
            }
        }

        Ok(ImageData::new(self.information(), GAUSSIAN_ARRAY_NAME, scalars))
    }
}
