// ── Capacity planner ──

use crate::config::PlannerConfig;
use crate::error::PlanError;
use crate::model::facility::Facility;

/// APs required to carry the device population.
///
/// Two independent ceilings, ceil-rounded, max of both: a facility can
/// be throughput-bound (few devices, heavy streams) or density-bound
/// (many devices, light polling), and either must drive the count up on
/// its own. A facility with no devices needs 0 -- the coverage planner
/// sets the floor.
pub fn plan_capacity(facility: &Facility, config: &PlannerConfig) -> Result<u32, PlanError> {
    facility.validate()?;

    let total_devices = facility.total_devices();
    if total_devices == 0 {
        return Ok(0);
    }

    let density_ceiling = total_devices.div_ceil(u64::from(config.capacity.max_devices_per_ap));

    let offered_mbps = facility.offered_load_mbps();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let throughput_ceiling =
        (offered_mbps / config.capacity.max_throughput_per_ap_mbps).ceil() as u64;

    #[allow(clippy::cast_possible_truncation)]
    Ok(density_ceiling.max(throughput_ceiling).min(u64::from(u32::MAX)) as u32)
}
