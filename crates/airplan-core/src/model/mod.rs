// ── Planning domain model ──
//
// Every type in this module is the canonical representation of a
// planning concept. Inputs (`Facility`, `DeviceProfile`) are immutable
// after construction; outputs (`AccessPoint`, `OptimizationReport`) are
// created once per run and never mutated -- re-planning produces fresh
// values.

pub mod access_point;
pub mod channel;
pub mod facility;
pub mod interference;
pub mod layout;
pub mod report;

// ── Re-exports ──────────────────────────────────────────────────────
// Flat access: `use airplan_core::model::*` gives you everything.

// Facility and device population
pub use facility::{DeviceProfile, DeviceType, Dimensions, EnvironmentType, Facility};

// Bands and channels
pub use channel::{Band, ChannelSet, center_frequency_mhz, overlap_pct};

// Access points
pub use access_point::{AccessPoint, GridPosition, TxPower};

// Interference
pub use interference::{InterferenceKind, InterferenceSource, Severity};

// Layout and report
pub use layout::DeploymentLayout;
pub use report::{ChannelConflict, OptimizationReport, PlanDriver};
