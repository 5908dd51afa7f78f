// ── Report builder ──
//
// Pure aggregation: everything the planners produced, folded into the
// one externally visible artifact, plus rule-evaluated advisory lines.
// Every non-fatal condition surfaces here -- a reviewer reading only
// the report sees all of them.

use crate::config::PlannerConfig;
use crate::model::access_point::TxPower;
use crate::model::channel::Band;
use crate::model::facility::{EnvironmentType, Facility};
use crate::model::interference::InterferenceSource;
use crate::model::layout::DeploymentLayout;
use crate::model::report::{ChannelConflict, OptimizationReport, PlanDriver};
use crate::planner::channel::ChannelPlan;

/// Assemble the final report. Never mutates its inputs; always
/// succeeds given valid ones.
pub fn build(
    facility: &Facility,
    coverage_ap_count: u32,
    capacity_ap_count: u32,
    layout: DeploymentLayout,
    channel_plan: ChannelPlan,
    interference_findings: Vec<InterferenceSource>,
    config: &PlannerConfig,
) -> OptimizationReport {
    let driver = if capacity_ap_count > coverage_ap_count {
        PlanDriver::CapacityBound
    } else {
        PlanDriver::CoverageBound
    };

    let recommendations =
        recommendations(facility, driver, &layout, &channel_plan.conflicts, config);

    OptimizationReport {
        facility_name: facility.name.clone(),
        environment: facility.environment,
        ap_count: layout.ap_count,
        coverage_ap_count,
        capacity_ap_count,
        driver,
        ap_layout: channel_plan.access_points,
        layout,
        total_offered_load_mbps: facility.offered_load_mbps(),
        interference_findings,
        channel_conflicts: channel_plan.conflicts,
        recommendations,
    }
}

/// Advisory lines, in a fixed order so reports diff cleanly.
fn recommendations(
    facility: &Facility,
    driver: PlanDriver,
    layout: &DeploymentLayout,
    conflicts: &[ChannelConflict],
    config: &PlannerConfig,
) -> Vec<String> {
    let mut recs = Vec::new();

    recs.push(format!(
        "Deploy {} access points in a {}x{} grid pattern",
        layout.ap_count, layout.rows, layout.cols
    ));

    recs.push(match driver {
        PlanDriver::CoverageBound => {
            "Coverage-bound, not capacity-bound: the AP count is driven by floor area, \
             leaving capacity headroom for device growth"
                .to_owned()
        }
        PlanDriver::CapacityBound => {
            "Capacity-bound: device density is the bottleneck; added floor coverage alone \
             will not relieve congestion"
                .to_owned()
        }
    });

    if !conflicts.is_empty() {
        recs.push(format!(
            "Channel reuse could not be fully resolved: {} AP pair(s) within reuse \
             distance share a channel; expect co-channel interference at the listed grid cells",
            conflicts.len()
        ));
        if conflicts.iter().any(|c| c.band == Band::Band24) {
            recs.push(
                "Move load to 5 GHz: the 2.4 GHz grid is too dense for three \
                 non-overlapping channels"
                    .to_owned(),
            );
        }
    }

    let bands = config.band_policy.bands();
    if bands.len() > 1 {
        recs.push("Implement band steering to move capable devices to 5 GHz".to_owned());
        recs.push("Enable 802.11k/v/r so clients roam seamlessly between cells".to_owned());
    }

    if facility.dimensions.height_m > config.coverage.high_ceiling_m {
        recs.push("High ceiling detected - consider downtilt antennas".to_owned());
    } else if facility.environment == EnvironmentType::Warehouse {
        recs.push("Standard ceiling height - omnidirectional antennas suitable".to_owned());
    }

    let radius_m = config.coverage.radius_m(facility.environment);
    recs.push(format!(
        "Set transmit power to {} for the {radius_m} m design radius",
        TxPower::for_radius_m(radius_m)
    ));

    if bands.contains(&Band::Band5) {
        recs.push(
            match config.channel_width_mhz {
                20 => "Configure 20 MHz channels on 5 GHz for maximum AP density",
                40 => "Configure 40 MHz channels on 5 GHz to balance AP density and throughput",
                _ => "Configure 80 MHz channels on 5 GHz for throughput-first coverage \
                      with fewer clean channels",
            }
            .to_owned(),
        );
    }

    recs
}
