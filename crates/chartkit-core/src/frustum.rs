//! Clipping planes derived from the on-screen axis box.
//!
//! The unit cube is mapped through the box transform and each pair of
//! opposing faces becomes a pair of planes. A point is clipped when its
//! distance to any plane exceeds the plane's threshold.

use glam::{DMat4, DVec3};
use serde::{Deserialize, Serialize};

use crate::plane::ClipPlane;

/// Corners of the unit cube. Bit 2 of the index is x, bit 1 is y, bit 0 is z.
pub const UNIT_CUBE_CORNERS: [DVec3; 8] = [
    DVec3::new(0.0, 0.0, 0.0),
    DVec3::new(0.0, 0.0, 1.0),
    DVec3::new(0.0, 1.0, 0.0),
    DVec3::new(0.0, 1.0, 1.0),
    DVec3::new(1.0, 0.0, 0.0),
    DVec3::new(1.0, 0.0, 1.0),
    DVec3::new(1.0, 1.0, 0.0),
    DVec3::new(1.0, 1.0, 1.0),
];

/// Face planes as (edge start, edge end a, edge end b, anchor corner).
///
/// Faces come in opposing pairs: {0,1,2,3}/{4,5,6,7}, {0,1,4,5}/{2,3,6,7},
/// {0,2,4,6}/{1,3,5,7}.
const FACES: [(usize, usize, usize, usize); 6] = [
    (0, 1, 2, 3),
    (4, 5, 6, 7),
    (0, 1, 4, 5),
    (2, 3, 6, 7),
    (0, 2, 4, 6),
    (1, 3, 5, 7),
];

/// For each face, a corner lying on the opposite face.
const OPPOSITE_CORNERS: [usize; 6] = [7, 3, 7, 5, 7, 6];

/// How the out-of-bounds threshold is chosen for each plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThresholdMode {
    /// One threshold for all six planes: the depth of the box measured across
    /// the first face pair. Exact only when the box is a cube on screen.
    #[default]
    Shared,
    /// Each plane uses the distance to its opposite face.
    PerPlane,
}

/// Six clipping planes around the axis box plus their thresholds.
#[derive(Debug, Clone, PartialEq)]
pub struct ClipFrustum {
    corners: [DVec3; 8],
    planes: [ClipPlane; 6],
    thresholds: [f64; 6],
    max_distance: f64,
}

impl ClipFrustum {
    /// Builds the frustum from the unit-cube-to-screen transform.
    pub fn from_box_transform(box_transform: &DMat4, mode: ThresholdMode) -> Self {
        let corners = UNIT_CUBE_CORNERS.map(|corner| box_transform.transform_point3(corner));

        let planes = FACES.map(|(start, a, b, anchor)| {
            let normal = (corners[a] - corners[start]).cross(corners[b] - corners[start]);
            ClipPlane::new(corners[anchor], normal)
        });

        let max_distance = planes[0].distance(corners[7]);

        let thresholds = match mode {
            ThresholdMode::Shared => [max_distance; 6],
            ThresholdMode::PerPlane => {
                let mut thresholds = [0.0; 6];
                for (i, threshold) in thresholds.iter_mut().enumerate() {
                    *threshold = planes[i].distance(corners[OPPOSITE_CORNERS[i]]);
                }
                thresholds
            }
        };

        log::trace!("clip frustum rebuilt, max distance {max_distance:.3}");

        Self {
            corners,
            planes,
            thresholds,
            max_distance,
        }
    }

    /// Screen-space corners of the box, in [`UNIT_CUBE_CORNERS`] order.
    pub fn corners(&self) -> &[DVec3; 8] {
        &self.corners
    }

    /// The six face planes.
    pub fn planes(&self) -> &[ClipPlane; 6] {
        &self.planes
    }

    /// Per-plane thresholds actually used for clipping.
    pub fn thresholds(&self) -> &[f64; 6] {
        &self.thresholds
    }

    /// Distance from the first face plane to corner 7.
    pub fn max_distance(&self) -> f64 {
        self.max_distance
    }

    /// Returns whether a device-space point lies outside the box.
    pub fn should_clip(&self, point: DVec3) -> bool {
        self.planes
            .iter()
            .zip(self.thresholds.iter())
            .any(|(plane, &threshold)| plane.distance(point) > threshold)
    }

    /// Maps a data point through `context` and classifies it.
    pub fn point_should_be_clipped(&self, context: &DMat4, point: DVec3) -> bool {
        self.should_clip(context.transform_point3(point))
    }
}
