//! Traits for mesh types.

use crate::cell::CellRef;

/// Trait for types that expose unstructured-mesh connectivity.
///
/// This is the minimal interface the transform crates consume, allowing
/// algorithms to work with different mesh representations.
pub trait MeshConnectivity {
    /// Number of nodes.
    fn node_count(&self) -> usize;

    /// Number of cells.
    fn cell_count(&self) -> usize;

    /// Check if the mesh carries no usable geometry.
    fn is_empty(&self) -> bool {
        self.node_count() == 0 || self.cell_count() == 0
    }

    /// Get a cell by index.
    ///
    /// Returns `None` if the index is out of bounds.
    fn cell(&self, index: usize) -> Option<CellRef<'_>>;

    /// Iterate over all cells in order.
    fn cells(&self) -> impl Iterator<Item = CellRef<'_>>;
}
