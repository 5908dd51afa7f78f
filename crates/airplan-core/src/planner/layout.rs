// ── Deployment resolver ──

use crate::model::access_point::GridPosition;
use crate::model::facility::Facility;
use crate::model::layout::DeploymentLayout;

/// Reconcile the coverage and capacity counts into a spatial grid.
///
/// `ap_count = max(coverage, capacity)`, floored at 1. Rows follow the
/// facility's aspect ratio so cells stay near-square; columns fill to
/// cover the count, surplus cells in the last row stay empty. The
/// result is fully determined by its inputs.
pub fn resolve(
    coverage_count: u32,
    capacity_count: u32,
    facility: &Facility,
) -> DeploymentLayout {
    let ap_count = coverage_count.max(capacity_count).max(1);

    let width_m = facility.dimensions.width_m;
    let length_m = facility.dimensions.length_m;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let aspect_rows = (f64::from(ap_count) * length_m / width_m).sqrt().ceil() as u32;
    let rows = aspect_rows.clamp(1, ap_count);
    let cols = ap_count.div_ceil(rows);

    let positions = (0..ap_count)
        .map(|i| GridPosition {
            row: i / cols,
            col: i % cols,
        })
        .collect();

    DeploymentLayout {
        ap_count,
        rows,
        cols,
        spacing_x_m: width_m / f64::from(cols),
        spacing_y_m: length_m / f64::from(rows),
        positions,
    }
}
