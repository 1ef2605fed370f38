//! Core mesh types for the developed-surface tooling.
//!
//! This crate provides the foundational types for the unrolling pipeline:
//!
//! - [`UnstructuredMesh`] - node coordinates plus typed, mixed-arity cells
//! - [`CellType`] / [`CellRef`] - cell classification and borrowed cell views
//! - [`Field`] / [`FieldSet`] - named per-node and per-cell data arrays
//!
//! # Units
//!
//! This library is unit-agnostic. All coordinates and field values are `f64`.
//!
//! # Example
//!
//! ```
//! use devsurf_types::{CellType, Field, MeshConnectivity, Point3, UnstructuredMesh};
//!
//! let mut mesh = UnstructuredMesh::new();
//! mesh.points.push(Point3::new(0.0, 0.0, 0.0));
//! mesh.points.push(Point3::new(1.0, 0.0, 0.0));
//! mesh.points.push(Point3::new(0.5, 1.0, 0.0));
//! mesh.push_cell(CellType::Triangle, &[0, 1, 2]).unwrap();
//! mesh.point_fields
//!     .insert(Field::scalar("pressure", vec![1.0, 2.0, 3.0]))
//!     .unwrap();
//!
//! assert_eq!(mesh.cell_count(), 1);
//! assert!(mesh.validate().is_ok());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod cell;
mod error;
mod field;
mod mesh;
mod traits;

pub use cell::{CellRef, CellType};
pub use error::{MeshError, MeshResult};
pub use field::{Field, FieldSet};
pub use mesh::UnstructuredMesh;
pub use traits::MeshConnectivity;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
