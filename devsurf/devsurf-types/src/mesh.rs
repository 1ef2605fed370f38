//! Unstructured mesh with mixed-arity cells and attached fields.

use nalgebra::Point3;

use crate::cell::{CellRef, CellType};
use crate::error::{MeshError, MeshResult};
use crate::field::FieldSet;
use crate::traits::MeshConnectivity;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An unstructured mesh: ordered node coordinates plus a table of typed
/// cells of possibly mixed arity, with named per-node and per-cell fields.
///
/// Connectivity is stored flat: cell `i` occupies
/// `connectivity[offsets[i] .. offsets[i + 1]]`. Node indices are `u32`;
/// meshes beyond `u32::MAX` nodes are unsupported.
///
/// # Example
///
/// ```
/// use devsurf_types::{CellType, MeshConnectivity, Point3, UnstructuredMesh};
///
/// let mut mesh = UnstructuredMesh::new();
/// mesh.points.push(Point3::new(0.0, 0.0, 0.0));
/// mesh.points.push(Point3::new(1.0, 0.0, 0.0));
/// mesh.points.push(Point3::new(0.0, 1.0, 0.0));
/// mesh.push_cell(CellType::Triangle, &[0, 1, 2]).unwrap();
///
/// assert_eq!(mesh.node_count(), 3);
/// assert_eq!(mesh.cell_count(), 1);
/// assert!(mesh.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UnstructuredMesh {
    /// Node coordinates.
    pub points: Vec<Point3<f64>>,

    kinds: Vec<CellType>,
    connectivity: Vec<u32>,
    offsets: Vec<usize>,

    /// Fields indexed consistently with the node order.
    pub point_fields: FieldSet,

    /// Fields indexed consistently with the cell order.
    pub cell_fields: FieldSet,
}

impl Default for UnstructuredMesh {
    fn default() -> Self {
        Self::new()
    }
}

impl UnstructuredMesh {
    /// Create a new empty mesh.
    #[must_use]
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            kinds: Vec::new(),
            connectivity: Vec::new(),
            offsets: vec![0],
            point_fields: FieldSet::new(),
            cell_fields: FieldSet::new(),
        }
    }

    /// Create a mesh with pre-allocated capacity.
    ///
    /// # Arguments
    ///
    /// * `node_count` - Expected number of nodes
    /// * `cell_count` - Expected number of cells
    /// * `connectivity_len` - Expected total connectivity length
    #[must_use]
    pub fn with_capacity(node_count: usize, cell_count: usize, connectivity_len: usize) -> Self {
        let mut offsets = Vec::with_capacity(cell_count + 1);
        offsets.push(0);
        Self {
            points: Vec::with_capacity(node_count),
            kinds: Vec::with_capacity(cell_count),
            connectivity: Vec::with_capacity(connectivity_len),
            offsets,
            point_fields: FieldSet::new(),
            cell_fields: FieldSet::new(),
        }
    }

    /// Append a cell.
    ///
    /// Node indices are not range-checked here: points may legitimately be
    /// appended after cells. Call [`validate`](Self::validate) once the mesh
    /// is complete.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::ArityMismatch`] or [`MeshError::TooFewNodes`] if
    /// the node count does not fit the cell type.
    pub fn push_cell(&mut self, kind: CellType, nodes: &[u32]) -> MeshResult<()> {
        if let Some(expected) = kind.fixed_arity() {
            if nodes.len() != expected {
                return Err(MeshError::ArityMismatch {
                    kind: kind.name(),
                    expected,
                    actual: nodes.len(),
                });
            }
        } else if nodes.len() < kind.min_nodes() {
            return Err(MeshError::TooFewNodes {
                kind: kind.name(),
                min: kind.min_nodes(),
                actual: nodes.len(),
            });
        }
        self.kinds.push(kind);
        self.connectivity.extend_from_slice(nodes);
        self.offsets.push(self.connectivity.len());
        Ok(())
    }

    /// Node indices of cell `index`, or `None` if out of range.
    #[must_use]
    pub fn cell_nodes(&self, index: usize) -> Option<&[u32]> {
        let start = *self.offsets.get(index)?;
        let end = *self.offsets.get(index + 1)?;
        Some(&self.connectivity[start..end])
    }

    /// Check internal consistency.
    ///
    /// Verifies that every node index referenced by a cell is in range and
    /// that every attached field has one tuple per node (point fields) or
    /// per cell (cell fields).
    ///
    /// # Errors
    ///
    /// Returns the first inconsistency found.
    pub fn validate(&self) -> MeshResult<()> {
        let node_count = self.points.len();
        for (i, cell) in self.cells().enumerate() {
            for &node in cell.nodes {
                if node as usize >= node_count {
                    return Err(MeshError::NodeIndexOutOfRange {
                        cell: i,
                        node,
                        node_count,
                    });
                }
            }
        }
        for field in self.point_fields.iter() {
            if field.tuple_count() != node_count {
                return Err(MeshError::FieldLengthMismatch {
                    name: field.name().to_owned(),
                    tuples: field.tuple_count(),
                    expected: node_count,
                });
            }
        }
        let cell_count = self.cell_count();
        for field in self.cell_fields.iter() {
            if field.tuple_count() != cell_count {
                return Err(MeshError::FieldLengthMismatch {
                    name: field.name().to_owned(),
                    tuples: field.tuple_count(),
                    expected: cell_count,
                });
            }
        }
        Ok(())
    }
}

impl MeshConnectivity for UnstructuredMesh {
    #[inline]
    fn node_count(&self) -> usize {
        self.points.len()
    }

    #[inline]
    fn cell_count(&self) -> usize {
        self.kinds.len()
    }

    fn cell(&self, index: usize) -> Option<CellRef<'_>> {
        let kind = *self.kinds.get(index)?;
        let nodes = self.cell_nodes(index)?;
        Some(CellRef { kind, nodes })
    }

    fn cells(&self) -> impl Iterator<Item = CellRef<'_>> {
        self.kinds
            .iter()
            .zip(self.offsets.windows(2))
            .map(|(&kind, span)| CellRef {
                kind,
                nodes: &self.connectivity[span[0]..span[1]],
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Field;

    fn triangle_pair() -> UnstructuredMesh {
        let mut mesh = UnstructuredMesh::new();
        mesh.points.push(Point3::new(0.0, 0.0, 0.0));
        mesh.points.push(Point3::new(1.0, 0.0, 0.0));
        mesh.points.push(Point3::new(1.0, 1.0, 0.0));
        mesh.points.push(Point3::new(0.0, 1.0, 0.0));
        mesh.push_cell(CellType::Triangle, &[0, 1, 2]).unwrap();
        mesh.push_cell(CellType::Triangle, &[0, 2, 3]).unwrap();
        mesh
    }

    #[test]
    fn empty_mesh() {
        let mesh = UnstructuredMesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.cell_count(), 0);
        assert!(mesh.cell(0).is_none());
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn mixed_arity_cells() {
        let mut mesh = UnstructuredMesh::new();
        for i in 0..5 {
            mesh.points.push(Point3::new(f64::from(i), 0.0, 0.0));
        }
        mesh.push_cell(CellType::Segment, &[0, 1]).unwrap();
        mesh.push_cell(CellType::Quad, &[0, 1, 2, 3]).unwrap();
        mesh.push_cell(CellType::Polygon, &[0, 1, 2, 3, 4]).unwrap();

        assert_eq!(mesh.cell_count(), 3);
        assert_eq!(mesh.cell(0).unwrap().nodes, &[0, 1]);
        assert_eq!(mesh.cell(2).unwrap().node_count(), 5);
        assert_eq!(mesh.cells().count(), 3);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn arity_mismatch_rejected() {
        let mut mesh = UnstructuredMesh::new();
        let err = mesh.push_cell(CellType::Triangle, &[0, 1]);
        assert!(matches!(err, Err(MeshError::ArityMismatch { .. })));
        let err = mesh.push_cell(CellType::Polygon, &[0, 1]);
        assert!(matches!(err, Err(MeshError::TooFewNodes { .. })));
        assert_eq!(mesh.cell_count(), 0);
    }

    #[test]
    fn validate_catches_bad_index() {
        let mut mesh = triangle_pair();
        mesh.push_cell(CellType::Triangle, &[0, 1, 9]).unwrap();
        let err = mesh.validate();
        assert!(matches!(
            err,
            Err(MeshError::NodeIndexOutOfRange { cell: 2, node: 9, .. })
        ));
    }

    #[test]
    fn validate_catches_short_field() {
        let mut mesh = triangle_pair();
        mesh.point_fields
            .insert(Field::scalar("t", vec![1.0, 2.0]))
            .unwrap();
        assert!(matches!(
            mesh.validate(),
            Err(MeshError::FieldLengthMismatch { .. })
        ));
    }

    #[test]
    fn validate_accepts_matching_fields() {
        let mut mesh = triangle_pair();
        mesh.point_fields
            .insert(Field::scalar("t", vec![1.0, 2.0, 3.0, 4.0]))
            .unwrap();
        mesh.cell_fields
            .insert(Field::scalar("c", vec![10.0, 20.0]))
            .unwrap();
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn cells_iterate_in_order() {
        let mesh = triangle_pair();
        let kinds: Vec<CellType> = mesh.cells().map(|c| c.kind).collect();
        assert_eq!(kinds, [CellType::Triangle, CellType::Triangle]);
        let second: Vec<u32> = mesh.cells().nth(1).unwrap().nodes.to_vec();
        assert_eq!(second, [0, 2, 3]);
    }
}
