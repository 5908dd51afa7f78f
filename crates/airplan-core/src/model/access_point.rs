// ── Access point domain types ──

use serde::{Deserialize, Serialize};
use std::fmt;

use super::channel::Band;

/// Cell coordinates in the deployment grid. Row-major, zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPosition {
    pub row: u32,
    pub col: u32,
}

impl fmt::Display for GridPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(r{}, c{})", self.row, self.col)
    }
}

/// Recommended transmit power tier, derived from the design coverage
/// radius. Bigger cells need hotter radios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TxPower {
    Low,
    Medium,
    High,
}

impl TxPower {
    pub fn for_radius_m(radius_m: f64) -> Self {
        if radius_m <= 20.0 {
            Self::Low
        } else if radius_m <= 30.0 {
            Self::Medium
        } else {
            Self::High
        }
    }
}

impl fmt::Display for TxPower {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "low (10-13 dBm)"),
            Self::Medium => write!(f, "medium (14-17 dBm)"),
            Self::High => write!(f, "high (18-20 dBm)"),
        }
    }
}

/// One radio in the final plan: a grid position, a band, and the
/// channel assigned to it.
///
/// Created only by the channel assigner and never mutated afterwards --
/// re-planning produces a new collection. A dual-band plan carries two
/// of these per physical position, sharing the `GridPosition`, with ids
/// numbered sequentially across the whole plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessPoint {
    pub id: String,
    pub position: GridPosition,
    pub band: Band,
    pub channel: u16,
    pub tx_power: TxPower,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tx_power_tiers_follow_radius() {
        assert_eq!(TxPower::for_radius_m(15.0), TxPower::Low);
        assert_eq!(TxPower::for_radius_m(20.0), TxPower::Low);
        assert_eq!(TxPower::for_radius_m(25.0), TxPower::Medium);
        assert_eq!(TxPower::for_radius_m(35.0), TxPower::High);
    }

    #[test]
    fn grid_position_display_names_the_cell() {
        let pos = GridPosition { row: 2, col: 3 };
        assert_eq!(pos.to_string(), "(r2, c3)");
    }
}
