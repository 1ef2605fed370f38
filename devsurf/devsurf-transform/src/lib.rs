//! Frame alignment and cylindrical parameterization.
//!
//! This crate provides the pure-geometry half of the unrolling pipeline:
//!
//! - [`RigidRotation`] - rotation about an arbitrary pivot, including the
//!   construction that aligns a supplied cylinder axis with the canonical
//!   +Z axis
//! - [`CylindricalCoord`] / [`to_cylindrical`] - Cartesian → (r, θ, z)
//!   conversion around that canonical axis
//!
//! # Example
//!
//! ```
//! use devsurf_transform::{to_cylindrical, RigidRotation};
//! use nalgebra::{Point3, Vector3};
//!
//! let center = Point3::origin();
//! let rot = RigidRotation::align_axis_with_z(center, Vector3::new(0.0, 1.0, 0.0), 1e-7).unwrap();
//!
//! let mut points = vec![Point3::new(2.0, 0.0, 0.0)];
//! rot.apply_in_place(&mut points);
//! let cyl = to_cylindrical(&points, center);
//! assert!((cyl[0].r - 2.0).abs() < 1e-12);
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]

mod cylindrical;
mod error;
mod rigid;

pub use cylindrical::{to_cylindrical, CylindricalCoord};
pub use error::{TransformError, TransformResult};
pub use rigid::RigidRotation;
