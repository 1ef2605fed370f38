//! Cartesian to cylindrical conversion around the canonical +Z axis.

use nalgebra::Point3;

/// A point in cylindrical coordinates around the +Z axis.
///
/// `theta` is the angle returned by `atan2`, in (−π, π].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CylindricalCoord {
    /// Distance from the axis.
    pub r: f64,
    /// Angle around the axis in radians.
    pub theta: f64,
    /// Axial coordinate.
    pub z: f64,
}

impl CylindricalCoord {
    /// Convert a Cartesian point, measuring from `center`.
    ///
    /// # Example
    ///
    /// ```
    /// use devsurf_transform::CylindricalCoord;
    /// use nalgebra::Point3;
    ///
    /// let c = CylindricalCoord::from_cartesian(Point3::new(0.0, 2.0, 5.0), Point3::origin());
    /// assert!((c.r - 2.0).abs() < 1e-12);
    /// assert!((c.theta - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    /// assert!((c.z - 5.0).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn from_cartesian(point: Point3<f64>, center: Point3<f64>) -> Self {
        let d = point - center;
        Self {
            r: d.x.hypot(d.y),
            theta: d.y.atan2(d.x),
            z: d.z,
        }
    }

    /// Convert back to a Cartesian point relative to `center`.
    #[must_use]
    pub fn to_cartesian(self, center: Point3<f64>) -> Point3<f64> {
        Point3::new(
            center.x + self.r * self.theta.cos(),
            center.y + self.r * self.theta.sin(),
            center.z + self.z,
        )
    }
}

/// Convert a coordinate array to cylindrical form around `center`.
#[must_use]
pub fn to_cylindrical(points: &[Point3<f64>], center: Point3<f64>) -> Vec<CylindricalCoord> {
    points
        .iter()
        .map(|&p| CylindricalCoord::from_cartesian(p, center))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn quadrant_angles() {
        let center = Point3::origin();
        let east = CylindricalCoord::from_cartesian(Point3::new(1.0, 0.0, 0.0), center);
        assert_relative_eq!(east.theta, 0.0, epsilon = 1e-12);

        let west = CylindricalCoord::from_cartesian(Point3::new(-1.0, 0.0, 0.0), center);
        assert_relative_eq!(west.theta, PI, epsilon = 1e-12);

        let south = CylindricalCoord::from_cartesian(Point3::new(0.0, -1.0, 0.0), center);
        assert_relative_eq!(south.theta, -PI / 2.0, epsilon = 1e-12);
    }

    #[test]
    fn offset_center() {
        let c = CylindricalCoord::from_cartesian(
            Point3::new(4.0, 1.0, 7.0),
            Point3::new(1.0, 1.0, 2.0),
        );
        assert_relative_eq!(c.r, 3.0, epsilon = 1e-12);
        assert_relative_eq!(c.theta, 0.0, epsilon = 1e-12);
        assert_relative_eq!(c.z, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn round_trip() {
        let center = Point3::new(-1.0, 2.0, 0.5);
        let p = Point3::new(3.0, -4.0, 2.0);
        let back = CylindricalCoord::from_cartesian(p, center).to_cartesian(center);
        assert_relative_eq!(back.x, p.x, epsilon = 1e-12);
        assert_relative_eq!(back.y, p.y, epsilon = 1e-12);
        assert_relative_eq!(back.z, p.z, epsilon = 1e-12);
    }

    #[test]
    fn array_conversion() {
        let points = vec![Point3::new(1.0, 0.0, 0.0), Point3::new(0.0, 1.0, 1.0)];
        let cyl = to_cylindrical(&points, Point3::origin());
        assert_eq!(cyl.len(), 2);
        assert_relative_eq!(cyl[1].theta, PI / 2.0, epsilon = 1e-12);
        assert_relative_eq!(cyl[1].z, 1.0, epsilon = 1e-12);
    }
}
