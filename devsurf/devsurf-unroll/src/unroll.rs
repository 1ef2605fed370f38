//! The developed-surface unrolling transform.
//!
//! Maps a mesh lying on a cylinder onto the plane: the cylindrical angle θ
//! and the axial coordinate z become the two planar coordinates, with θ
//! scaled by the radius. Cells that straddle the θ = 0 / 2π branch cut are
//! rewritten against duplicated nodes so the flattened mesh is contiguous.

use std::f64::consts::TAU;

use devsurf_transform::{to_cylindrical, RigidRotation};
use devsurf_types::{MeshConnectivity, Point3, UnstructuredMesh};
use tracing::{debug, info};

use crate::error::{UnrollError, UnrollResult};
use crate::params::{UnrollParams, Winding};
use crate::result::UnrollOutput;
use crate::seam::split_seam_cells;
use crate::validate::check_preconditions;

/// Develop a cylindrical slice onto the plane.
///
/// The input mesh is never mutated; the output mesh, its fields and the
/// index maps are newly allocated. The transform is a pure function of
/// `(mesh, params)` and keeps no state between calls.
///
/// Output node coordinates are `(radius × θ, z, 0)` where θ is the
/// unrolled angle in [0, 2π] and z the axial coordinate in the aligned
/// frame.
///
/// # Errors
///
/// Fails fast, producing no output, on configuration errors (non-positive
/// radius, degenerate axis, out-of-range reference node, negative
/// tolerances), on an empty or inconsistent input mesh, and on the
/// geometric precondition that every node lie at the configured radius
/// within `params.radius_tolerance`.
///
/// # Example
///
/// ```
/// use devsurf_types::{CellType, Point3, UnstructuredMesh, Vector3, MeshConnectivity};
/// use devsurf_unroll::{unroll_mesh, UnrollParams};
///
/// // Quarter arc of a unit cylinder: three nodes, two segments.
/// let mut mesh = UnstructuredMesh::new();
/// for i in 0..3 {
///     let t = f64::from(i) * std::f64::consts::FRAC_PI_4;
///     mesh.points.push(Point3::new(t.cos(), t.sin(), 0.0));
/// }
/// mesh.push_cell(CellType::Segment, &[0, 1]).unwrap();
/// mesh.push_cell(CellType::Segment, &[1, 2]).unwrap();
///
/// let params = UnrollParams::new(Point3::origin(), Vector3::z(), 1.0);
/// let out = unroll_mesh(&mesh, &params).unwrap();
/// assert_eq!(out.mesh.cell_count(), 2);
/// assert!(out.seam_cells.is_empty());
/// ```
pub fn unroll_mesh(mesh: &UnstructuredMesh, params: &UnrollParams) -> UnrollResult<UnrollOutput> {
    check_preconditions(mesh, params)?;

    info!(
        nodes = mesh.node_count(),
        cells = mesh.cell_count(),
        radius = params.radius,
        "developing cylindrical slice"
    );

    // Align the supplied cylinder axis with +Z.
    let rotation =
        RigidRotation::align_axis_with_z(params.center, params.axis, params.seam_epsilon)?;
    let mut points = mesh.points.clone();
    rotation.apply_in_place(&mut points);

    let cyl = to_cylindrical(&points, params.center);

    // The slice must actually be a cylinder of the configured radius.
    let mut min_r = f64::MAX;
    let mut max_r = f64::MIN;
    for c in &cyl {
        min_r = min_r.min(c.r);
        max_r = max_r.max(c.r);
    }
    let tolerance = params.radius * params.radius_tolerance;
    if (min_r - params.radius).abs() > tolerance || (max_r - params.radius).abs() > tolerance {
        return Err(UnrollError::NonUniformRadius {
            min: min_r,
            max: max_r,
            expected: params.radius,
            tolerance,
        });
    }

    // θ origin at the reference node, shifted by the configured offset.
    let theta0 = cyl[params.reference_node].theta + params.theta_offset;
    let mut theta: Vec<f64> = cyl.iter().map(|c| c.theta - theta0).collect();

    // A negative offset can push the whole range positive; fold anything
    // past a full turn back down before normalizing.
    if theta.iter().all(|&t| t > 0.0) {
        for t in &mut theta {
            if *t >= TAU {
                *t -= TAU;
            }
        }
    }

    // Angles within the tie-break epsilon of the cut count as exactly 0.
    for t in &mut theta {
        if t.abs() <= params.seam_epsilon {
            *t = 0.0;
        }
    }

    if params.winding == Winding::Clockwise {
        for t in &mut theta {
            *t = -*t;
            if *t == 0.0 {
                *t = 0.0;
            }
        }
    }

    // Canonical range [0, 2π).
    for t in &mut theta {
        if *t < 0.0 {
            *t += TAU;
        }
    }

    let split = split_seam_cells(mesh, &theta);
    debug!(
        seam_cells = split.seam_cells.len(),
        duplicates = split.duplicate_count(),
        "branch-cut cells rewritten"
    );

    // Output node order: all input nodes, then the seam duplicates.
    let node_count = mesh.node_count();
    let mut node_map: Vec<usize> = (0..node_count).collect();
    node_map.extend_from_slice(&split.dup_sources);

    let mut unrolled_theta = theta;
    unrolled_theta.reserve(split.dup_sources.len());
    for &src in &split.dup_sources {
        let shifted = unrolled_theta[src] + TAU;
        unrolled_theta.push(shifted);
    }

    // Planar embedding: (radius·θ, z, 0).
    let out_points: Vec<Point3<f64>> = node_map
        .iter()
        .zip(&unrolled_theta)
        .map(|(&src, &t)| Point3::new(params.radius * t, cyl[src].z, 0.0))
        .collect();

    // Non-seam cells keep their connectivity; seam cells use the rebuilt
    // one. The cell map records the permutation for field gathering.
    let mut is_seam = vec![false; mesh.cell_count()];
    for &c in &split.seam_cells {
        is_seam[c] = true;
    }

    let mut out = UnstructuredMesh::with_capacity(
        out_points.len(),
        mesh.cell_count(),
        mesh.cells().map(|c| c.node_count()).sum(),
    );
    out.points = out_points;

    let mut cell_map = Vec::with_capacity(mesh.cell_count());
    for (index, cell) in mesh.cells().enumerate() {
        if !is_seam[index] {
            out.push_cell(cell.kind, cell.nodes)?;
            cell_map.push(index);
        }
    }
    for (rebuilt, &index) in split.rebuilt.iter().zip(&split.seam_cells) {
        let kind = mesh.cell(index).map_or(devsurf_types::CellType::Polygon, |c| c.kind);
        out.push_cell(kind, rebuilt)?;
        cell_map.push(index);
    }

    out.point_fields = mesh.point_fields.gather(&node_map)?;
    out.cell_fields = mesh.cell_fields.gather(&cell_map)?;

    info!(
        out_nodes = out.node_count(),
        out_cells = out.cell_count(),
        "development complete"
    );

    Ok(UnrollOutput {
        mesh: out,
        node_map,
        cell_map,
        seam_cells: split.seam_cells,
        unrolled_theta,
        params: params.clone(),
    })
}
