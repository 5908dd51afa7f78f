// ── Coverage planner ──

use std::f64::consts::PI;

use crate::config::PlannerConfig;
use crate::error::PlanError;
use crate::model::facility::Facility;

/// APs required to blanket the floor area.
///
/// Per-AP coverage is a disc at the environment's effective radius; the
/// overlap factor (> 1.0) buys redundant coverage at cell boundaries so
/// clients roam without dead spots. Always at least 1 for a valid
/// facility.
pub fn plan_coverage(facility: &Facility, config: &PlannerConfig) -> Result<u32, PlanError> {
    facility.validate()?;

    let radius_m = config.coverage.radius_m(facility.environment);
    let per_ap_area_m2 = PI * radius_m * radius_m;
    let demand_m2 = facility.dimensions.floor_area_m2() * config.coverage.overlap_factor;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let required = (demand_m2 / per_ap_area_m2).ceil() as u32;
    Ok(required.max(1))
}
