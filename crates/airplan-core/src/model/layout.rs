// ── Deployment layout domain type ──

use serde::{Deserialize, Serialize};

use super::access_point::GridPosition;

/// The resolved AP grid: shape, spacing, and the filled positions.
///
/// Deterministic by construction -- the same facility always produces
/// the same grid shape and the same row-major position ordering, which
/// the channel assigner's reuse-distance checks rely on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeploymentLayout {
    pub ap_count: u32,
    pub rows: u32,
    pub cols: u32,
    pub spacing_x_m: f64,
    pub spacing_y_m: f64,
    /// Row-major, exactly `ap_count` entries; surplus grid cells in the
    /// last row stay unfilled.
    pub positions: Vec<GridPosition>,
}

impl DeploymentLayout {
    /// Cell-center world coordinates of a grid position, in meters.
    pub fn world_position(&self, pos: GridPosition) -> (f64, f64) {
        (
            (f64::from(pos.col) + 0.5) * self.spacing_x_m,
            (f64::from(pos.row) + 0.5) * self.spacing_y_m,
        )
    }

    /// Euclidean distance between two grid positions, in meters.
    pub fn distance_m(&self, a: GridPosition, b: GridPosition) -> f64 {
        let (ax, ay) = self.world_position(a);
        let (bx, by) = self.world_position(b);
        (ax - bx).hypot(ay - by)
    }
}
