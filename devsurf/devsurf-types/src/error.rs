//! Error types for the mesh data model.

use thiserror::Error;

/// Result type for mesh data-model operations.
pub type MeshResult<T> = Result<T, MeshError>;

/// Errors that can occur while building or validating a mesh.
#[derive(Debug, Error)]
pub enum MeshError {
    /// A fixed-arity cell was given the wrong number of nodes.
    #[error("cell arity mismatch: {kind} expects {expected} nodes, got {actual}")]
    ArityMismatch {
        /// Name of the cell type.
        kind: &'static str,
        /// Node count required by the type.
        expected: usize,
        /// Node count actually supplied.
        actual: usize,
    },

    /// A variable-arity cell was given too few nodes.
    #[error("cell has too few nodes: {kind} needs at least {min}, got {actual}")]
    TooFewNodes {
        /// Name of the cell type.
        kind: &'static str,
        /// Minimum node count for the type.
        min: usize,
        /// Node count actually supplied.
        actual: usize,
    },

    /// A cell references a node past the end of the coordinate array.
    #[error("cell {cell} references node {node}, but the mesh has only {node_count} nodes")]
    NodeIndexOutOfRange {
        /// Index of the offending cell.
        cell: usize,
        /// The out-of-range node index.
        node: u32,
        /// Number of nodes in the mesh.
        node_count: usize,
    },

    /// A field with the same name already exists in the set.
    #[error("duplicate field name: {0:?}")]
    DuplicateField(String),

    /// A field declared zero components per tuple.
    #[error("field {0:?} declares zero components")]
    ZeroComponents(String),

    /// A field's value count is not a multiple of its component count.
    #[error("field {name:?}: {values} values do not divide into {components}-component tuples")]
    RaggedField {
        /// Name of the offending field.
        name: String,
        /// Number of raw values supplied.
        values: usize,
        /// Declared component count.
        components: usize,
    },

    /// A field's tuple count disagrees with the mesh entity count.
    #[error("field {name:?} holds {tuples} tuples, expected {expected}")]
    FieldLengthMismatch {
        /// Name of the offending field.
        name: String,
        /// Tuple count the field holds.
        tuples: usize,
        /// Tuple count the mesh requires.
        expected: usize,
    },

    /// A gather map referenced a tuple past the end of a field.
    #[error("field {name:?}: gather index {index} out of range ({tuples} tuples)")]
    GatherOutOfRange {
        /// Name of the field being gathered.
        name: String,
        /// The out-of-range tuple index.
        index: usize,
        /// Tuple count the field holds.
        tuples: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = MeshError::DuplicateField("pressure".into());
        assert!(format!("{err}").contains("pressure"));

        let err = MeshError::NodeIndexOutOfRange {
            cell: 3,
            node: 42,
            node_count: 10,
        };
        let msg = format!("{err}");
        assert!(msg.contains("cell 3"));
        assert!(msg.contains("42"));
    }
}
