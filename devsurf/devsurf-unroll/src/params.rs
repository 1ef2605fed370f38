//! Unrolling parameters.

use devsurf_types::{Point3, Vector3};
use std::f64::consts::PI;

/// Direction of increasing unrolled angle.
///
/// The winding is supplied by the caller rather than inferred from mesh
/// connectivity, so the development direction is unambiguous even for
/// meshes whose cells near the reference node are degenerate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Winding {
    /// Angle grows counter-clockwise when looking down the cylinder axis.
    #[default]
    CounterClockwise,
    /// Angle grows clockwise when looking down the cylinder axis.
    Clockwise,
}

/// Parameters for developing a cylindrical slice onto a plane.
///
/// The cylinder is described by `center`, `axis` (any non-zero length) and
/// `radius`. The remaining knobs control the θ origin and the numerical
/// tolerances of the seam handling.
///
/// # Example
///
/// ```
/// use devsurf_unroll::{UnrollParams, Winding};
/// use devsurf_types::{Point3, Vector3};
///
/// let params = UnrollParams::new(Point3::origin(), Vector3::z(), 0.07)
///     .with_winding(Winding::Clockwise)
///     .with_theta_offset(std::f64::consts::FRAC_PI_2);
/// assert_eq!(params.radius, 0.07);
/// ```
#[derive(Debug, Clone)]
pub struct UnrollParams {
    /// A point on the cylinder axis.
    pub center: Point3<f64>,

    /// Cylinder axis direction; need not be normalized.
    pub axis: Vector3<f64>,

    /// Cylinder radius. Must be positive.
    pub radius: f64,

    /// Direction of increasing unrolled angle.
    pub winding: Winding,

    /// Angular offset in radians added to the θ origin, in [−π, π].
    pub theta_offset: f64,

    /// Node mapped to θ = 0 before the offset is applied.
    pub reference_node: usize,

    /// Relative tolerance for the uniform-radius check.
    pub radius_tolerance: f64,

    /// Tie-break epsilon below which |θ| is treated as exactly 0.
    ///
    /// Keeps floating-point noise near the branch cut from splitting cells
    /// that do not actually straddle it. Meshes with very small cells may
    /// need a smaller value.
    pub seam_epsilon: f64,
}

impl UnrollParams {
    /// Default relative tolerance for the uniform-radius check.
    pub const DEFAULT_RADIUS_TOLERANCE: f64 = 1e-5;

    /// Default seam tie-break epsilon.
    pub const DEFAULT_SEAM_EPSILON: f64 = 1e-7;

    /// Create parameters for the given cylinder, everything else default.
    #[must_use]
    pub fn new(center: Point3<f64>, axis: Vector3<f64>, radius: f64) -> Self {
        Self {
            center,
            axis,
            radius,
            winding: Winding::default(),
            theta_offset: 0.0,
            reference_node: 0,
            radius_tolerance: Self::DEFAULT_RADIUS_TOLERANCE,
            seam_epsilon: Self::DEFAULT_SEAM_EPSILON,
        }
    }

    /// Set the winding direction.
    #[must_use]
    pub const fn with_winding(mut self, winding: Winding) -> Self {
        self.winding = winding;
        self
    }

    /// Set the θ-origin offset in radians, clamped to [−π, π].
    #[must_use]
    pub fn with_theta_offset(mut self, offset: f64) -> Self {
        self.theta_offset = offset.clamp(-PI, PI);
        self
    }

    /// Set the node mapped to θ = 0.
    #[must_use]
    pub const fn with_reference_node(mut self, node: usize) -> Self {
        self.reference_node = node;
        self
    }

    /// Set the relative tolerance for the uniform-radius check.
    #[must_use]
    pub const fn with_radius_tolerance(mut self, tolerance: f64) -> Self {
        self.radius_tolerance = tolerance;
        self
    }

    /// Set the seam tie-break epsilon.
    #[must_use]
    pub const fn with_seam_epsilon(mut self, epsilon: f64) -> Self {
        self.seam_epsilon = epsilon;
        self
    }
}

impl Default for UnrollParams {
    /// Unit cylinder around +Z through the origin.
    fn default() -> Self {
        Self::new(Point3::origin(), Vector3::z(), 1.0)
    }
}
