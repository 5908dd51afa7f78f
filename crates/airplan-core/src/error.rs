// ── Engine error types ──
//
// Planning failures cross the crate boundary as explicit values --
// nothing is silently defaulted. Channel-assignment degradation is NOT
// an error: over-dense small grids are an expected outcome, so leftover
// conflicts ride on the report as an advisory instead of aborting the run.

use thiserror::Error;

/// Unified error type for the planning engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// The facility description cannot be planned (non-positive
    /// dimensions, empty name, non-positive per-device bandwidth).
    /// Fatal -- rejected before any planning occurs.
    #[error("Invalid facility: {reason}")]
    InvalidFacility { reason: String },

    /// The configuration bundle cannot drive a planning run.
    #[error("Invalid planner configuration: {field}: {reason}")]
    InvalidConfig { field: String, reason: String },

    /// The environment type has no interference entries. Skipping the
    /// interference analysis would produce a misleadingly clean report,
    /// so this is fatal and surfaced to the caller.
    #[error("Unknown environment type: {environment}")]
    UnknownEnvironment { environment: String },
}
