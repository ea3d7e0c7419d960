//! Clipping planes bounding the chart box.

use glam::DVec3;

/// An infinite plane given by a point on it and a unit normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipPlane {
    /// A point on the plane.
    origin: DVec3,
    /// Unit normal. Zero if the plane was built from a degenerate face.
    normal: DVec3,
}

impl ClipPlane {
    /// Creates a plane, normalizing `normal`.
    ///
    /// A zero-length normal (a collapsed box face) yields a plane every point
    /// is at distance zero from.
    pub fn new(origin: DVec3, normal: DVec3) -> Self {
        Self {
            origin,
            normal: normal.normalize_or_zero(),
        }
    }

    /// Returns the anchor point of the plane.
    pub fn origin(&self) -> DVec3 {
        self.origin
    }

    /// Returns the unit normal of the plane.
    pub fn normal(&self) -> DVec3 {
        self.normal
    }

    /// Returns the signed distance from a point to the plane.
    ///
    /// Positive values are on the side the normal points to.
    pub fn signed_distance(&self, point: DVec3) -> f64 {
        (point - self.origin).dot(self.normal)
    }

    /// Returns the unsigned distance from a point to the plane.
    pub fn distance(&self, point: DVec3) -> f64 {
        self.signed_distance(point).abs()
    }

    /// Projects a point onto the plane.
    pub fn project(&self, point: DVec3) -> DVec3 {
        point - self.signed_distance(point) * self.normal
    }
}

impl Default for ClipPlane {
    fn default() -> Self {
        Self::new(DVec3::ZERO, DVec3::Y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_is_normalized() {
        let plane = ClipPlane::new(DVec3::ZERO, DVec3::new(0.0, 0.0, 5.0));
        assert_eq!(plane.normal(), DVec3::Z);
    }

    #[test]
    fn test_signed_distance() {
        let plane = ClipPlane::new(DVec3::ZERO, DVec3::Y);
        assert!(plane.signed_distance(DVec3::new(0.0, 1.0, 0.0)) > 0.0);
        assert!(plane.signed_distance(DVec3::new(0.0, -1.0, 0.0)) < 0.0);
        assert!(plane.signed_distance(DVec3::new(1.0, 0.0, 1.0)).abs() < 1e-12);
    }

    #[test]
    fn test_distance_is_unsigned() {
        let plane = ClipPlane::new(DVec3::new(0.0, 2.0, 0.0), DVec3::NEG_Y);
        assert!((plane.distance(DVec3::new(3.0, 5.0, 0.0)) - 3.0).abs() < 1e-12);
        assert!((plane.distance(DVec3::new(3.0, -1.0, 0.0)) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_normal() {
        let plane = ClipPlane::new(DVec3::ONE, DVec3::ZERO);
        assert_eq!(plane.distance(DVec3::new(100.0, -4.0, 9.0)), 0.0);
    }

    #[test]
    fn test_project() {
        let plane = ClipPlane::new(DVec3::ZERO, DVec3::Y);
        let projected = plane.project(DVec3::new(1.0, 5.0, 2.0));
        assert!((projected - DVec3::new(1.0, 0.0, 2.0)).length() < 1e-12);
    }
}
