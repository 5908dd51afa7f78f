// ── Optimization report domain types ──

use serde::{Deserialize, Serialize};
use std::fmt;

use super::access_point::{AccessPoint, GridPosition};
use super::channel::Band;
use super::facility::EnvironmentType;
use super::interference::InterferenceSource;
use super::layout::DeploymentLayout;

/// Which constraint drove the final AP count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanDriver {
    CoverageBound,
    CapacityBound,
}

impl fmt::Display for PlanDriver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CoverageBound => write!(f, "coverage-bound"),
            Self::CapacityBound => write!(f, "capacity-bound"),
        }
    }
}

/// A same-band AP pair left sharing a channel inside the band's reuse
/// distance. Names the responsible grid cells so a reviewer can act on
/// the advisory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelConflict {
    pub band: Band,
    pub channel: u16,
    pub a: GridPosition,
    pub b: GridPosition,
    pub separation_m: f64,
}

/// The one externally visible artifact of a planning run.
///
/// Immutable aggregate, built once per run. Carries no timestamp:
/// identical inputs must produce bit-identical reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationReport {
    pub facility_name: String,
    pub environment: EnvironmentType,

    // AP counts
    pub ap_count: u32,
    pub coverage_ap_count: u32,
    pub capacity_ap_count: u32,
    pub driver: PlanDriver,

    // Spatial plan
    pub layout: DeploymentLayout,
    /// 2.4 GHz radios first, then 5 GHz, row-major within a band.
    pub ap_layout: Vec<AccessPoint>,

    // Demand summary
    pub total_offered_load_mbps: f64,

    // Findings and advisories
    pub interference_findings: Vec<InterferenceSource>,
    /// Empty when channel reuse fully resolved; non-empty is the
    /// degraded-but-usable advisory (not an error).
    pub channel_conflicts: Vec<ChannelConflict>,
    pub recommendations: Vec<String>,
}

impl OptimizationReport {
    /// True when the channel assigner fell back to a best-effort plan.
    pub fn is_degraded(&self) -> bool {
        !self.channel_conflicts.is_empty()
    }

    /// Radios assigned on the given band, in layout order.
    pub fn radios_on(&self, band: Band) -> impl Iterator<Item = &AccessPoint> {
        self.ap_layout.iter().filter(move |ap| ap.band == band)
    }
}
