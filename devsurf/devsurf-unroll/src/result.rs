//! Unroll result types.

use devsurf_types::{MeshConnectivity, UnstructuredMesh};

use crate::params::UnrollParams;

/// Result of developing a cylindrical slice onto the plane.
///
/// The mesh holds the flattened geometry: node coordinates are
/// `(radius × θ, z, 0)` and all input fields are gathered onto the output
/// node and cell orders. The index maps relate the output back to the
/// input.
#[derive(Debug)]
pub struct UnrollOutput {
    /// The flattened mesh, fields included.
    pub mesh: UnstructuredMesh,

    /// Input node index of each output node.
    ///
    /// Identity for the original nodes; entries past the input node count
    /// name the source of each seam duplicate.
    pub node_map: Vec<usize>,

    /// Input cell index of each output cell.
    ///
    /// Cells are partitioned: all non-seam cells first (original relative
    /// order), then the rebuilt seam cells.
    pub cell_map: Vec<usize>,

    /// Input indices of the cells that straddled the branch cut.
    pub seam_cells: Vec<usize>,

    /// Canonical unrolled angle per output node, in [0, 2π] (duplicated
    /// nodes carry their source angle plus 2π).
    pub unrolled_theta: Vec<f64>,

    /// Parameters used.
    pub params: UnrollParams,
}

impl UnrollOutput {
    /// Number of nodes appended by seam duplication.
    #[must_use]
    pub fn duplicated_node_count(&self) -> usize {
        self.node_map
            .iter()
            .enumerate()
            .filter(|&(i, &src)| i != src)
            .count()
    }

    /// Total unrolled angular span (max − min of the node angles).
    ///
    /// A slice forming a full loop around the cylinder spans exactly 2π.
    #[must_use]
    pub fn angular_span(&self) -> f64 {
        let mut min = f64::MAX;
        let mut max = f64::MIN;
        for &t in &self.unrolled_theta {
            min = min.min(t);
            max = max.max(t);
        }
        if max >= min {
            max - min
        } else {
            0.0
        }
    }
}

impl std::fmt::Display for UnrollOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "UnrollOutput: {} cells, {} nodes ({} duplicated), span {:.4} rad",
            self.mesh.cell_count(),
            self.mesh.node_count(),
            self.duplicated_node_count(),
            self.angular_span()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use devsurf_types::Point3;

    fn output_with(node_map: Vec<usize>, theta: Vec<f64>) -> UnrollOutput {
        let mut mesh = UnstructuredMesh::new();
        for &t in &theta {
            mesh.points.push(Point3::new(t, 0.0, 0.0));
        }
        UnrollOutput {
            mesh,
            node_map,
            cell_map: Vec::new(),
            seam_cells: Vec::new(),
            unrolled_theta: theta,
            params: UnrollParams::default(),
        }
    }

    #[test]
    fn duplicate_count_from_map() {
        let out = output_with(vec![0, 1, 2, 0, 2], vec![0.0; 5]);
        assert_eq!(out.duplicated_node_count(), 2);
    }

    #[test]
    fn span_over_angles() {
        let out = output_with(vec![0, 1], vec![0.5, 2.5]);
        assert!((out.angular_span() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn empty_span_is_zero() {
        let out = output_with(Vec::new(), Vec::new());
        assert!(out.angular_span().abs() < f64::EPSILON);
    }

    #[test]
    fn display_summary() {
        let out = output_with(vec![0, 1], vec![0.0, 1.0]);
        let text = format!("{out}");
        assert!(text.contains("0 cells"));
        assert!(text.contains("2 nodes"));
    }
}
