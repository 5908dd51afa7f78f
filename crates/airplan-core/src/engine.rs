// ── Planning orchestrator ──
//
// One synchronous pass: validate, derive both AP counts, resolve the
// grid, color it, pull the interference findings, fold the report.
// Pure function of (facility, config, catalog) -- independent runs can
// execute concurrently with no coordination.

use tracing::{debug, info, warn};

use crate::catalog::InterferenceCatalog;
use crate::config::PlannerConfig;
use crate::error::PlanError;
use crate::model::facility::Facility;
use crate::model::report::OptimizationReport;
use crate::planner::{assign, plan_capacity, plan_coverage, resolve};
use crate::report;

/// Run the full optimization against the built-in interference
/// catalog.
pub fn optimize(
    facility: &Facility,
    config: &PlannerConfig,
) -> Result<OptimizationReport, PlanError> {
    optimize_with_catalog(facility, config, &InterferenceCatalog::builtin())
}

/// Run the full optimization against a caller-supplied catalog.
///
/// A catalog that lacks the facility's environment fails with
/// `UnknownEnvironment` -- a plan without its interference analysis
/// would read as misleadingly clean.
pub fn optimize_with_catalog(
    facility: &Facility,
    config: &PlannerConfig,
    catalog: &InterferenceCatalog,
) -> Result<OptimizationReport, PlanError> {
    config.validate()?;
    facility.validate()?;

    let coverage_ap_count = plan_coverage(facility, config)?;
    let capacity_ap_count = plan_capacity(facility, config)?;
    debug!(coverage_ap_count, capacity_ap_count, "planned AP counts");

    let layout = resolve(coverage_ap_count, capacity_ap_count, facility);
    debug!(
        rows = layout.rows,
        cols = layout.cols,
        ap_count = layout.ap_count,
        "resolved deployment grid"
    );

    let channel_plan = assign(&layout, facility.environment, config);
    if !channel_plan.conflicts.is_empty() {
        warn!(
            conflicts = channel_plan.conflicts.len(),
            "channel plan degraded -- co-channel conflicts remain"
        );
    }

    let interference_findings = catalog.lookup(facility.environment)?.to_vec();

    let report = report::build(
        facility,
        coverage_ap_count,
        capacity_ap_count,
        layout,
        channel_plan,
        interference_findings,
        config,
    );
    info!(
        facility = %report.facility_name,
        ap_count = report.ap_count,
        driver = %report.driver,
        "optimization complete"
    );
    Ok(report)
}
