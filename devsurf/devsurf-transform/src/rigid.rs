//! Rigid rotation about an arbitrary center point.

use nalgebra::{Point3, Rotation3, Unit, Vector3};

use crate::error::{TransformError, TransformResult};

/// A rigid rotation about a center point.
///
/// Wraps an axis-angle rotation together with the pivot it is applied
/// around, so that a whole coordinate array can be re-framed in one pass.
///
/// # Example
///
/// ```
/// use devsurf_transform::RigidRotation;
/// use nalgebra::{Point3, Vector3};
///
/// let rot = RigidRotation::align_axis_with_z(
///     Point3::origin(),
///     Vector3::new(1.0, 0.0, 0.0),
///     1e-7,
/// )
/// .unwrap();
///
/// // The +X direction now maps onto +Z.
/// let p = rot.apply(Point3::new(1.0, 0.0, 0.0));
/// assert!((p.z - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RigidRotation {
    rotation: Rotation3<f64>,
    center: Point3<f64>,
}

impl RigidRotation {
    /// Create a rotation of `angle` radians around `axis`, pivoting on
    /// `center`.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::NonFiniteAxis`] for NaN/infinite axis
    /// components and [`TransformError::DegenerateAxis`] if the axis length
    /// is below `f64::EPSILON`.
    pub fn from_axis_angle(
        center: Point3<f64>,
        axis: Vector3<f64>,
        angle: f64,
    ) -> TransformResult<Self> {
        if !axis.iter().all(|c| c.is_finite()) {
            return Err(TransformError::NonFiniteAxis);
        }
        let length = axis.norm();
        if length < f64::EPSILON {
            return Err(TransformError::DegenerateAxis {
                length,
                min_length: f64::EPSILON,
            });
        }
        let unit = Unit::new_unchecked(axis / length);
        Ok(Self {
            rotation: Rotation3::from_axis_angle(&unit, angle),
            center,
        })
    }

    /// The identity rotation about `center`.
    #[must_use]
    pub fn identity(center: Point3<f64>) -> Self {
        Self {
            rotation: Rotation3::identity(),
            center,
        }
    }

    /// Build the rotation that carries `axis` onto the canonical +Z axis,
    /// pivoting on `center`.
    ///
    /// With `u` the normalized axis, the rotation axis is `u × ẑ` and the
    /// angle `asin(|u × ẑ|)`, flipped to `π − angle` when `u.z < 0`. When
    /// `|u × ẑ| ≤ eps` the axis is already parallel (identity) or
    /// antiparallel (π turn about +X) to ẑ.
    ///
    /// The arcsine construction loses precision as the axis approaches the
    /// parallel or antiparallel configuration; callers should expect reduced
    /// accuracy there rather than an error.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::NonFiniteAxis`] or
    /// [`TransformError::DegenerateAxis`] for unusable axis vectors.
    pub fn align_axis_with_z(
        center: Point3<f64>,
        axis: Vector3<f64>,
        eps: f64,
    ) -> TransformResult<Self> {
        if !axis.iter().all(|c| c.is_finite()) {
            return Err(TransformError::NonFiniteAxis);
        }
        let length = axis.norm();
        if length < f64::EPSILON {
            return Err(TransformError::DegenerateAxis {
                length,
                min_length: f64::EPSILON,
            });
        }
        let u = axis / length;

        // u × ẑ, written out: the pivot lies in the XY plane.
        let pivot = Vector3::new(u.y, -u.x, 0.0);
        let sine = pivot.norm();
        if sine > eps {
            let mut angle = sine.clamp(-1.0, 1.0).asin();
            if u.z < 0.0 {
                angle = std::f64::consts::PI - angle;
            }
            return Self::from_axis_angle(center, pivot, angle);
        }

        if u.z < 0.0 {
            // Antiparallel: any perpendicular axis serves for the half turn.
            return Self::from_axis_angle(center, Vector3::x(), std::f64::consts::PI);
        }
        Ok(Self::identity(center))
    }

    /// The pivot point.
    #[inline]
    #[must_use]
    pub const fn center(&self) -> Point3<f64> {
        self.center
    }

    /// The wrapped rotation.
    #[inline]
    #[must_use]
    pub const fn rotation(&self) -> &Rotation3<f64> {
        &self.rotation
    }

    /// Rotation angle in radians.
    #[must_use]
    pub fn angle(&self) -> f64 {
        self.rotation.angle()
    }

    /// Apply the rotation to a single point.
    #[must_use]
    pub fn apply(&self, point: Point3<f64>) -> Point3<f64> {
        self.center + self.rotation * (point - self.center)
    }

    /// Apply the rotation to a direction vector (the pivot is irrelevant).
    #[must_use]
    pub fn apply_to_vector(&self, vector: Vector3<f64>) -> Vector3<f64> {
        self.rotation * vector
    }

    /// Rotate every point in place.
    pub fn apply_in_place(&self, points: &mut [Point3<f64>]) {
        if self.angle() == 0.0 {
            return;
        }
        for point in points {
            *point = self.apply(*point);
        }
    }
}
