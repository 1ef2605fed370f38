//! Branch-cut detection and node duplication.
//!
//! A cell whose node angles span more than π after normalization to
//! [0, 2π) is taken to straddle the θ = 0 / 2π branch cut rather than to be
//! a genuinely wide cell. Such cells are rewritten to reference duplicates
//! of their low-angle nodes, shifted up by one full turn, so the cell
//! becomes contiguous in unrolled angle space.

use std::f64::consts::PI;

use devsurf_types::{MeshConnectivity, UnstructuredMesh};

/// Outcome of splitting cells across the branch cut.
#[derive(Debug, Default)]
pub(crate) struct SeamSplit {
    /// Source node of each appended duplicate, in append order.
    pub dup_sources: Vec<usize>,
    /// Input indices of cells that straddle the cut.
    pub seam_cells: Vec<usize>,
    /// Rewritten connectivity per seam cell, parallel to `seam_cells`.
    pub rebuilt: Vec<Vec<u32>>,
}

impl SeamSplit {
    /// Number of node duplicates the split appends.
    pub fn duplicate_count(&self) -> usize {
        self.dup_sources.len()
    }
}

/// Find the cells straddling the cut and rewrite their connectivity.
///
/// `theta` holds the canonical unrolled angle per node, already normalized
/// to [0, 2π). Duplicates are appended per (cell, vertex) incidence: a node
/// shared by two seam cells is duplicated once for each.
#[allow(clippy::cast_possible_truncation)]
// Node indices are u32; meshes beyond u32::MAX nodes are unsupported.
pub(crate) fn split_seam_cells(mesh: &UnstructuredMesh, theta: &[f64]) -> SeamSplit {
    let node_count = mesh.node_count();
    let mut split = SeamSplit::default();

    for (index, cell) in mesh.cells().enumerate() {
        let mut min = f64::MAX;
        let mut max = f64::MIN;
        for &node in cell.nodes {
            let t = theta[node as usize];
            min = min.min(t);
            max = max.max(t);
        }
        if max - min <= PI {
            continue;
        }

        let rewritten: Vec<u32> = cell
            .nodes
            .iter()
            .map(|&node| {
                if theta[node as usize] <= PI {
                    let dup = (node_count + split.dup_sources.len()) as u32;
                    split.dup_sources.push(node as usize);
                    dup
                } else {
                    node
                }
            })
            .collect();
        split.seam_cells.push(index);
        split.rebuilt.push(rewritten);
    }

    split
}
