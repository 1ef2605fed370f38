//! Cell types and borrowed cell views.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Geometric type of a cell.
///
/// Fixed-arity types (`Segment`, `Triangle`, `Quad`) require an exact node
/// count; `Polygon` accepts any simple loop of three or more nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CellType {
    /// Two-node line segment.
    Segment,
    /// Three-node triangle.
    Triangle,
    /// Four-node quadrilateral.
    Quad,
    /// Simple polygon with three or more nodes.
    Polygon,
}

impl CellType {
    /// Node count required by the type, `None` for variable-arity polygons.
    ///
    /// # Example
    ///
    /// ```
    /// use devsurf_types::CellType;
    ///
    /// assert_eq!(CellType::Quad.fixed_arity(), Some(4));
    /// assert_eq!(CellType::Polygon.fixed_arity(), None);
    /// ```
    #[inline]
    #[must_use]
    pub const fn fixed_arity(self) -> Option<usize> {
        match self {
            Self::Segment => Some(2),
            Self::Triangle => Some(3),
            Self::Quad => Some(4),
            Self::Polygon => None,
        }
    }

    /// Minimum node count for the type.
    #[inline]
    #[must_use]
    pub const fn min_nodes(self) -> usize {
        match self {
            Self::Segment => 2,
            Self::Triangle | Self::Polygon => 3,
            Self::Quad => 4,
        }
    }

    /// Short name of the type.
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Segment => "segment",
            Self::Triangle => "triangle",
            Self::Quad => "quad",
            Self::Polygon => "polygon",
        }
    }
}

impl std::fmt::Display for CellType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A borrowed view of one cell: its geometric type and its node indices.
///
/// The node slice points into the mesh's flat connectivity array; the order
/// of indices is the cell's loop order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRef<'a> {
    /// Geometric type of the cell.
    pub kind: CellType,
    /// Ordered node indices into the mesh coordinate array.
    pub nodes: &'a [u32],
}

impl CellRef<'_> {
    /// Number of nodes in the cell.
    #[inline]
    #[must_use]
    pub const fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arity_table() {
        assert_eq!(CellType::Segment.fixed_arity(), Some(2));
        assert_eq!(CellType::Triangle.fixed_arity(), Some(3));
        assert_eq!(CellType::Quad.fixed_arity(), Some(4));
        assert_eq!(CellType::Polygon.fixed_arity(), None);
        assert_eq!(CellType::Polygon.min_nodes(), 3);
    }

    #[test]
    fn display_names() {
        assert_eq!(format!("{}", CellType::Quad), "quad");
        assert_eq!(format!("{}", CellType::Polygon), "polygon");
    }

    #[test]
    fn cell_ref_node_count() {
        let nodes = [0u32, 1, 2];
        let cell = CellRef {
            kind: CellType::Triangle,
            nodes: &nodes,
        };
        assert_eq!(cell.node_count(), 3);
    }
}
