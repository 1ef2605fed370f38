//! Error types for the unrolling operation.

use devsurf_types::MeshError;
use devsurf_transform::TransformError;
use thiserror::Error;

/// Result type for unrolling operations.
pub type UnrollResult<T> = Result<T, UnrollError>;

/// Errors that can occur while developing a cylindrical slice.
#[derive(Debug, Error)]
pub enum UnrollError {
    /// Radius must be positive and finite.
    #[error("invalid radius: {0} (must be positive and finite)")]
    InvalidRadius(f64),

    /// A tolerance parameter is negative or non-finite.
    #[error("invalid {name}: {value} (must be non-negative and finite)")]
    InvalidTolerance {
        /// Parameter name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },

    /// The reference node is not a valid node index.
    #[error("reference node {node} is out of range: the mesh has {node_count} nodes")]
    ReferenceNodeOutOfRange {
        /// Requested reference node.
        node: usize,
        /// Number of nodes in the mesh.
        node_count: usize,
    },

    /// Mesh has no nodes or no cells.
    #[error("mesh has no nodes or no cells, nothing to develop")]
    EmptyMesh,

    /// The input slice is not a cylinder of the configured radius.
    #[error(
        "radius is not uniform: observed range [{min}, {max}], expected {expected} \
         within {tolerance}"
    )]
    NonUniformRadius {
        /// Smallest observed node radius.
        min: f64,
        /// Largest observed node radius.
        max: f64,
        /// Configured cylinder radius.
        expected: f64,
        /// Absolute tolerance applied.
        tolerance: f64,
    },

    /// Frame alignment failed.
    #[error(transparent)]
    Transform(#[from] TransformError),

    /// The input mesh is internally inconsistent.
    #[error(transparent)]
    Mesh(#[from] MeshError),
}
