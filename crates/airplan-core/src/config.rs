// ── Planner configuration ──
//
// These types describe *how* to plan: coverage geometry, capacity
// ceilings, channel sets, reuse distances. Built by the caller (or by
// `airplan-config` from a TOML profile) and passed into every run --
// core never reads config files. Never mutated mid-run, so concurrent
// runs share one `PlannerConfig` freely.

use crate::error::PlanError;
use crate::model::channel::{Band, ChannelSet};
use crate::model::facility::EnvironmentType;

/// Coverage-model tuning.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageConfig {
    /// Effective coverage radius per environment, in meters. Warehouses
    /// get a shorter radius than offices (racking attenuation);
    /// data centers shorter still (cabinet rows).
    pub office_radius_m: f64,
    pub warehouse_radius_m: f64,
    pub data_center_radius_m: f64,
    /// Redundancy factor (> 1.0) guaranteeing overlap at cell edges for
    /// roaming.
    pub overlap_factor: f64,
    /// Above this ceiling height the report recommends downtilt
    /// antennas.
    pub high_ceiling_m: f64,
}

impl CoverageConfig {
    pub fn radius_m(&self, environment: EnvironmentType) -> f64 {
        match environment {
            EnvironmentType::Office => self.office_radius_m,
            EnvironmentType::Warehouse => self.warehouse_radius_m,
            EnvironmentType::DataCenter => self.data_center_radius_m,
        }
    }
}

impl Default for CoverageConfig {
    fn default() -> Self {
        Self {
            office_radius_m: 30.0,
            warehouse_radius_m: 25.0,
            data_center_radius_m: 15.0,
            overlap_factor: 1.3,
            high_ceiling_m: 10.0,
        }
    }
}

/// Per-AP capacity ceilings.
#[derive(Debug, Clone, PartialEq)]
pub struct CapacityConfig {
    pub max_devices_per_ap: u32,
    /// Real usable throughput per AP, in Mbps. Growth headroom belongs
    /// here, not in a hidden multiplier.
    pub max_throughput_per_ap_mbps: f64,
}

impl Default for CapacityConfig {
    fn default() -> Self {
        Self {
            max_devices_per_ap: 60,
            max_throughput_per_ap_mbps: 150.0,
        }
    }
}

/// Per-band assignment parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct BandConfig {
    pub channel_set: ChannelSet,
    /// Minimum separation before two APs may share a channel, in
    /// meters.
    pub reuse_distance_m: f64,
}

impl BandConfig {
    pub fn default_for(band: Band) -> Self {
        let reuse_distance_m = match band {
            // Three channels reach far and repeat often -- keep repeats
            // apart. 5 GHz decays faster and has more channels to burn.
            Band::Band24 => 40.0,
            Band::Band5 => 25.0,
        };
        Self {
            channel_set: ChannelSet::default_for(band),
            reuse_distance_m,
        }
    }
}

/// Which bands every AP position hosts a radio on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BandPolicy {
    #[default]
    DualBand,
    Band24Only,
    Band5Only,
}

impl BandPolicy {
    /// Bands to plan, in assignment order.
    pub fn bands(&self) -> &'static [Band] {
        match self {
            Self::DualBand => &[Band::Band24, Band::Band5],
            Self::Band24Only => &[Band::Band24],
            Self::Band5Only => &[Band::Band5],
        }
    }
}

/// The full configuration bundle for a planning run.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerConfig {
    pub coverage: CoverageConfig,
    pub capacity: CapacityConfig,
    pub band24: BandConfig,
    pub band5: BandConfig,
    pub band_policy: BandPolicy,
    /// 5 GHz channel width guidance surfaced in the report: 20, 40, or
    /// 80 MHz.
    pub channel_width_mhz: u16,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            coverage: CoverageConfig::default(),
            capacity: CapacityConfig::default(),
            band24: BandConfig::default_for(Band::Band24),
            band5: BandConfig::default_for(Band::Band5),
            band_policy: BandPolicy::default(),
            channel_width_mhz: 20,
        }
    }
}

impl PlannerConfig {
    pub fn band_config(&self, band: Band) -> &BandConfig {
        match band {
            Band::Band24 => &self.band24,
            Band::Band5 => &self.band5,
        }
    }

    /// Reject a bundle that cannot drive a planning run. Called once at
    /// the top of `engine::optimize`.
    pub fn validate(&self) -> Result<(), PlanError> {
        let radii = [
            ("coverage.office_radius_m", self.coverage.office_radius_m),
            ("coverage.warehouse_radius_m", self.coverage.warehouse_radius_m),
            (
                "coverage.data_center_radius_m",
                self.coverage.data_center_radius_m,
            ),
        ];
        for (field, value) in radii {
            if !value.is_finite() || value <= 0.0 {
                return Err(invalid(field, format!("must be positive meters, got {value}")));
            }
        }

        let overlap = self.coverage.overlap_factor;
        if !overlap.is_finite() || overlap <= 1.0 {
            return Err(invalid(
                "coverage.overlap_factor",
                format!("must exceed 1.0 for edge redundancy, got {overlap}"),
            ));
        }

        if !self.coverage.high_ceiling_m.is_finite() || self.coverage.high_ceiling_m <= 0.0 {
            return Err(invalid(
                "coverage.high_ceiling_m",
                format!("must be positive meters, got {}", self.coverage.high_ceiling_m),
            ));
        }

        if self.capacity.max_devices_per_ap == 0 {
            return Err(invalid("capacity.max_devices_per_ap", "must be at least 1".into()));
        }
        let throughput = self.capacity.max_throughput_per_ap_mbps;
        if !throughput.is_finite() || throughput <= 0.0 {
            return Err(invalid(
                "capacity.max_throughput_per_ap_mbps",
                format!("must be positive Mbps, got {throughput}"),
            ));
        }

        for band in [Band::Band24, Band::Band5] {
            let cfg = self.band_config(band);
            if cfg.channel_set.band != band {
                return Err(invalid(
                    "band channel set",
                    format!("{band} slot holds a {} set", cfg.channel_set.band),
                ));
            }
            if cfg.channel_set.is_empty() {
                return Err(invalid(
                    "band channel set",
                    format!("{band} has no channels to assign"),
                ));
            }
            if !cfg.reuse_distance_m.is_finite() || cfg.reuse_distance_m < 0.0 {
                return Err(invalid(
                    "reuse_distance_m",
                    format!("{band} reuse distance must be non-negative meters"),
                ));
            }
        }

        if ![20, 40, 80].contains(&self.channel_width_mhz) {
            return Err(invalid(
                "channel_width_mhz",
                format!("must be 20, 40, or 80, got {}", self.channel_width_mhz),
            ));
        }

        Ok(())
    }
}

fn invalid(field: &str, reason: String) -> PlanError {
    PlanError::InvalidConfig {
        field: field.to_owned(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        assert_eq!(PlannerConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_overlap_factor_without_redundancy() {
        let mut config = PlannerConfig::default();
        config.coverage.overlap_factor = 1.0;
        assert!(matches!(
            config.validate(),
            Err(PlanError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn rejects_zero_device_ceiling() {
        let mut config = PlannerConfig::default();
        config.capacity.max_devices_per_ap = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_mismatched_band_slot() {
        let mut config = PlannerConfig::default();
        config.band24.channel_set = ChannelSet::default_for(Band::Band5);
        assert!(config.validate().is_err());
    }

    #[test]
    fn obstructed_environments_get_shorter_radii() {
        let coverage = CoverageConfig::default();
        assert!(coverage.radius_m(EnvironmentType::Warehouse) < coverage.office_radius_m);
        assert!(
            coverage.radius_m(EnvironmentType::DataCenter)
                < coverage.radius_m(EnvironmentType::Warehouse)
        );
    }
}
