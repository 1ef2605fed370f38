//! Developed-surface unrolling of cylindrical mesh slices.
//!
//! Given a mesh restricted to a cylindrical surface (a pipe wall, a vessel
//! shell, a rotor band), this crate flattens it onto a plane by mapping the
//! cylindrical angle θ and the axial coordinate z to `(radius × θ, z)`.
//! Cells that straddle the θ = 0 / 2π branch cut are rewritten against
//! duplicated nodes so the developed strip is contiguous, and all per-node
//! and per-cell fields are carried onto the output through explicit index
//! maps.
//!
//! # Example
//!
//! ```
//! use devsurf_types::{CellType, Point3, UnstructuredMesh, Vector3};
//! use devsurf_unroll::{unroll_mesh, UnrollParams};
//! use std::f64::consts::TAU;
//!
//! // A ring of 8 segments around the unit cylinder.
//! let mut mesh = UnstructuredMesh::new();
//! for i in 0..8u32 {
//!     let t = TAU * f64::from(i) / 8.0;
//!     mesh.points.push(Point3::new(t.cos(), t.sin(), 0.0));
//!     mesh.push_cell(CellType::Segment, &[i, (i + 1) % 8]).unwrap();
//! }
//!
//! let params = UnrollParams::new(Point3::origin(), Vector3::z(), 1.0);
//! let out = unroll_mesh(&mesh, &params).unwrap();
//!
//! // The full loop develops onto a strip exactly one circumference long.
//! assert_eq!(out.seam_cells.len(), 1);
//! assert!((out.angular_span() - TAU).abs() < 1e-12);
//! ```
//!
//! # Purity
//!
//! The transform is single-threaded, synchronous and side-effect free: one
//! immutable input mesh in, one newly allocated output mesh out. Nothing
//! persists between calls.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod error;
mod params;
mod result;
mod seam;
mod unroll;
mod validate;

pub use error::{UnrollError, UnrollResult};
pub use params::{UnrollParams, Winding};
pub use result::UnrollOutput;
pub use unroll::unroll_mesh;

// Re-export nalgebra types for convenience
pub use devsurf_types::{Point3, Vector3};
