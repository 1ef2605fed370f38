//! Pre-flight validation of parameters and input mesh.

use devsurf_types::{MeshConnectivity, UnstructuredMesh};

use crate::error::{UnrollError, UnrollResult};
use crate::params::UnrollParams;

/// Reject configuration errors and inconsistent input before any geometry
/// is touched.
pub(crate) fn check_preconditions(
    mesh: &UnstructuredMesh,
    params: &UnrollParams,
) -> UnrollResult<()> {
    if !params.radius.is_finite() || params.radius <= 0.0 {
        return Err(UnrollError::InvalidRadius(params.radius));
    }
    if !params.radius_tolerance.is_finite() || params.radius_tolerance < 0.0 {
        return Err(UnrollError::InvalidTolerance {
            name: "radius tolerance",
            value: params.radius_tolerance,
        });
    }
    if !params.seam_epsilon.is_finite() || params.seam_epsilon < 0.0 {
        return Err(UnrollError::InvalidTolerance {
            name: "seam epsilon",
            value: params.seam_epsilon,
        });
    }
    if mesh.is_empty() {
        return Err(UnrollError::EmptyMesh);
    }
    if params.reference_node >= mesh.node_count() {
        return Err(UnrollError::ReferenceNodeOutOfRange {
            node: params.reference_node,
            node_count: mesh.node_count(),
        });
    }
    mesh.validate()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use devsurf_types::{CellType, Point3, Vector3};

    fn one_segment() -> UnstructuredMesh {
        let mut mesh = UnstructuredMesh::new();
        mesh.points.push(Point3::new(1.0, 0.0, 0.0));
        mesh.points.push(Point3::new(0.0, 1.0, 0.0));
        mesh.push_cell(CellType::Segment, &[0, 1]).unwrap();
        mesh
    }

    fn unit_params() -> UnrollParams {
        UnrollParams::new(Point3::origin(), Vector3::z(), 1.0)
    }

    #[test]
    fn accepts_valid_input() {
        assert!(check_preconditions(&one_segment(), &unit_params()).is_ok());
    }

    #[test]
    fn rejects_non_positive_radius() {
        let mut params = unit_params();
        params.radius = 0.0;
        assert!(matches!(
            check_preconditions(&one_segment(), &params),
            Err(UnrollError::InvalidRadius(_))
        ));
        params.radius = f64::NAN;
        assert!(matches!(
            check_preconditions(&one_segment(), &params),
            Err(UnrollError::InvalidRadius(_))
        ));
    }

    #[test]
    fn rejects_negative_tolerance() {
        let params = unit_params().with_radius_tolerance(-1.0);
        assert!(matches!(
            check_preconditions(&one_segment(), &params),
            Err(UnrollError::InvalidTolerance { name: "radius tolerance", .. })
        ));
        let params = unit_params().with_seam_epsilon(f64::INFINITY);
        assert!(matches!(
            check_preconditions(&one_segment(), &params),
            Err(UnrollError::InvalidTolerance { name: "seam epsilon", .. })
        ));
    }

    #[test]
    fn rejects_empty_mesh() {
        let mesh = UnstructuredMesh::new();
        assert!(matches!(
            check_preconditions(&mesh, &unit_params()),
            Err(UnrollError::EmptyMesh)
        ));
    }

    #[test]
    fn rejects_out_of_range_reference() {
        let params = unit_params().with_reference_node(5);
        assert!(matches!(
            check_preconditions(&one_segment(), &params),
            Err(UnrollError::ReferenceNodeOutOfRange { node: 5, .. })
        ));
    }

    #[test]
    fn rejects_invalid_connectivity() {
        let mut mesh = one_segment();
        mesh.push_cell(CellType::Segment, &[0, 7]).unwrap();
        assert!(matches!(
            check_preconditions(&mesh, &unit_params()),
            Err(UnrollError::Mesh(_))
        ));
    }
}
