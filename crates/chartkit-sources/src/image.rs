//! Structured-points images produced by the sources.

use glam::{DVec3, I64Vec3, IVec3, UVec3};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SourceError};

/// An inclusive integer index range per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageExtent {
    pub min: IVec3,
    pub max: IVec3,
}

impl ImageExtent {
    /// Creates an extent from `[x_min, x_max] x [y_min, y_max] x [z_min, z_max]`.
    pub const fn new(x_min: i32, x_max: i32, y_min: i32, y_max: i32, z_min: i32, z_max: i32) -> Self {
        Self {
            min: IVec3::new(x_min, y_min, z_min),
            max: IVec3::new(x_max, y_max, z_max),
        }
    }

    /// Fails if any axis has `min > max`.
    pub fn validate(&self) -> Result<()> {
        for axis in 0..3 {
            if self.min[axis] > self.max[axis] {
                return Err(SourceError::InvalidExtent {
                    axis,
                    min: self.min[axis],
                    max: self.max[axis],
                });
            }
        }
        Ok(())
    }

    /// Number of samples along each axis. Zero on inverted axes.
    ///
    /// The span is computed in `i64`; an axis covering the whole `i32` range
    /// saturates at `u32::MAX`.
    pub fn dimensions(&self) -> UVec3 {
        let span = (self.max.as_i64vec3() - self.min.as_i64vec3() + I64Vec3::ONE).max(I64Vec3::ZERO);
        let clamp = |n: i64| u32::try_from(n).unwrap_or(u32::MAX);
        UVec3::new(clamp(span.x), clamp(span.y), clamp(span.z))
    }

    /// Total number of samples.
    pub fn num_points(&self) -> u64 {
        let dims = self.dimensions();
        u64::from(dims.x) * u64::from(dims.y) * u64::from(dims.z)
    }

    /// Returns whether an absolute index lies inside the extent.
    pub fn contains(&self, index: IVec3) -> bool {
        index.cmpge(self.min).all() && index.cmple(self.max).all()
    }

    /// Flattens an absolute index, x fastest.
    pub fn flatten_index(&self, index: IVec3) -> Option<usize> {
        if !self.contains(index) {
            return None;
        }
        let local = (index.as_i64vec3() - self.min.as_i64vec3()).as_u64vec3();
        let dims = self.dimensions();
        let flat = u64::from(dims.x)
            .checked_mul(u64::from(dims.y))?
            .checked_mul(local.z)?
            .checked_add(local.y.checked_mul(u64::from(dims.x))?)?
            .checked_add(local.x)?;
        usize::try_from(flat).ok()
    }

    /// Inverse of [`Self::flatten_index`].
    #[allow(clippy::cast_possible_wrap)]
    pub fn unflatten_index(&self, flat: usize) -> Option<IVec3> {
        let flat = flat as u64;
        if flat >= self.num_points() {
            return None;
        }
        let dims = self.dimensions();
        let x = flat % u64::from(dims.x);
        let y = (flat / u64::from(dims.x)) % u64::from(dims.y);
        let z = flat / (u64::from(dims.x) * u64::from(dims.y));
        let index = self.min.as_i64vec3() + I64Vec3::new(x as i64, y as i64, z as i64);
        Some(index.as_ivec3())
    }
}

/// Geometry of an image without its samples.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImageInformation {
    pub extent: ImageExtent,
    pub origin: DVec3,
    pub spacing: DVec3,
}

/// A single-component `f32` image.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageData {
    information: ImageInformation,
    name: String,
    scalars: Vec<f32>,
}

impl ImageData {
    /// Wraps generated samples. `scalars` must hold one value per point.
    pub(crate) fn new(information: ImageInformation, name: impl Into<String>, scalars: Vec<f32>) -> Self {
        debug_assert_eq!(scalars.len() as u64, information.extent.num_points());
        Self {
            information,
            name: name.into(),
            scalars,
        }
    }

    /// The index range covered.
    pub fn extent(&self) -> &ImageExtent {
        &self.information.extent
    }

    /// World position of index `(0, 0, 0)`.
    pub fn origin(&self) -> DVec3 {
        self.information.origin
    }

    /// World distance between neighbouring samples.
    pub fn spacing(&self) -> DVec3 {
        self.information.spacing
    }

    /// Geometry of the image.
    pub fn information(&self) -> &ImageInformation {
        &self.information
    }

    /// Name of the scalar array.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All samples, x fastest.
    pub fn scalars(&self) -> &[f32] {
        &self.scalars
    }

    /// Sample at an absolute index.
    pub fn value(&self, index: IVec3) -> Option<f32> {
        self.information
            .extent
            .flatten_index(index)
            .and_then(|flat| self.scalars.get(flat).copied())
    }

    /// World position of an absolute index.
    pub fn position(&self, index: IVec3) -> DVec3 {
        self.information.origin + self.information.spacing * index.as_dvec3()
    }

    /// Smallest and largest sample, ignoring NaN.
    pub fn scalar_range(&self) -> Option<(f32, f32)> {
        self.scalars
            .iter()
            .copied()
            .filter(|v| !v.is_nan())
            .fold(None, |range, v| match range {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}

/// Reports progress once per row, about fifty times over a generation.
pub(crate) struct RowProgress<F: FnMut(f64)> {
    count: u64,
    target: u64,
    callback: F,
}

impl<F: FnMut(f64)> RowProgress<F> {
    /// `rows` is the number of x-rows (y times z) to be generated.
    pub(crate) fn new(rows: u64, callback: F) -> Self {
        Self {
            count: 0,
            target: rows / 50 + 1,
            callback,
        }
    }

    /// Call at the start of each row.
    #[allow(clippy::cast_precision_loss)]
    pub(crate) fn row(&mut self) {
        if self.count % self.target == 0 {
            (self.callback)(self.count as f64 / (50.0 * self.target as f64));
        }
        self.count += 1;
    }
}
