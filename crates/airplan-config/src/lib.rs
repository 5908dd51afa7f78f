//! Shared configuration for the airplan toolchain.
//!
//! TOML profiles layered with environment overrides, validated and
//! translated into `airplan_core::PlannerConfig`. The engine itself
//! never reads files -- this crate is the only disk-touching surface.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use airplan_core::{
    Band, BandConfig, BandPolicy, CapacityConfig, ChannelSet, CoverageConfig, PlanError,
    PlannerConfig,
};

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

impl From<PlanError> for ConfigError {
    fn from(err: PlanError) -> Self {
        match err {
            PlanError::InvalidConfig { field, reason } => Self::Validation { field, reason },
            other => Self::Validation {
                field: "config".into(),
                reason: other.to_string(),
            },
        }
    }
}

// ── TOML settings structs ───────────────────────────────────────────

/// Top-level TOML settings for a planning profile.
///
/// Every field has a default mirroring `PlannerConfig::default()`, so a
/// profile only states what it changes.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub coverage: CoverageSettings,

    #[serde(default)]
    pub capacity: CapacitySettings,

    #[serde(default = "BandSettings::band24_defaults")]
    pub band24: BandSettings,

    #[serde(default = "BandSettings::band5_defaults")]
    pub band5: BandSettings,

    #[serde(default)]
    pub band_policy: BandPolicySetting,

    #[serde(default = "default_channel_width")]
    pub channel_width_mhz: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            coverage: CoverageSettings::default(),
            capacity: CapacitySettings::default(),
            band24: BandSettings::band24_defaults(),
            band5: BandSettings::band5_defaults(),
            band_policy: BandPolicySetting::default(),
            channel_width_mhz: default_channel_width(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CoverageSettings {
    pub office_radius_m: f64,
    pub warehouse_radius_m: f64,
    pub data_center_radius_m: f64,
    pub overlap_factor: f64,
    pub high_ceiling_m: f64,
}

impl Default for CoverageSettings {
    fn default() -> Self {
        let core = CoverageConfig::default();
        Self {
            office_radius_m: core.office_radius_m,
            warehouse_radius_m: core.warehouse_radius_m,
            data_center_radius_m: core.data_center_radius_m,
            overlap_factor: core.overlap_factor,
            high_ceiling_m: core.high_ceiling_m,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CapacitySettings {
    pub max_devices_per_ap: u32,
    pub max_throughput_per_ap_mbps: f64,
}

impl Default for CapacitySettings {
    fn default() -> Self {
        let core = CapacityConfig::default();
        Self {
            max_devices_per_ap: core.max_devices_per_ap,
            max_throughput_per_ap_mbps: core.max_throughput_per_ap_mbps,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BandSettings {
    pub channels: Vec<u16>,
    pub reuse_distance_m: f64,
}

impl BandSettings {
    pub fn band24_defaults() -> Self {
        let core = BandConfig::default_for(Band::Band24);
        Self {
            channels: core.channel_set.channels,
            reuse_distance_m: core.reuse_distance_m,
        }
    }

    pub fn band5_defaults() -> Self {
        let core = BandConfig::default_for(Band::Band5);
        Self {
            channels: core.channel_set.channels,
            reuse_distance_m: core.reuse_distance_m,
        }
    }
}

/// Serialized mirror of `airplan_core::BandPolicy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BandPolicySetting {
    #[default]
    DualBand,
    Band24Only,
    Band5Only,
}

impl From<BandPolicySetting> for BandPolicy {
    fn from(setting: BandPolicySetting) -> Self {
        match setting {
            BandPolicySetting::DualBand => Self::DualBand,
            BandPolicySetting::Band24Only => Self::Band24Only,
            BandPolicySetting::Band5Only => Self::Band5Only,
        }
    }
}

fn default_channel_width() -> u16 {
    20
}

impl Settings {
    /// Validate and translate into the engine's configuration bundle.
    pub fn into_planner_config(self) -> Result<PlannerConfig, ConfigError> {
        let config = PlannerConfig {
            coverage: CoverageConfig {
                office_radius_m: self.coverage.office_radius_m,
                warehouse_radius_m: self.coverage.warehouse_radius_m,
                data_center_radius_m: self.coverage.data_center_radius_m,
                overlap_factor: self.coverage.overlap_factor,
                high_ceiling_m: self.coverage.high_ceiling_m,
            },
            capacity: CapacityConfig {
                max_devices_per_ap: self.capacity.max_devices_per_ap,
                max_throughput_per_ap_mbps: self.capacity.max_throughput_per_ap_mbps,
            },
            band24: BandConfig {
                channel_set: ChannelSet::new(Band::Band24, self.band24.channels)?,
                reuse_distance_m: self.band24.reuse_distance_m,
            },
            band5: BandConfig {
                channel_set: ChannelSet::new(Band::Band5, self.band5.channels)?,
                reuse_distance_m: self.band5.reuse_distance_m,
            },
            band_policy: self.band_policy.into(),
            channel_width_mhz: self.channel_width_mhz,
        };

        config.validate()?;
        Ok(config)
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "airplan", "airplan").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("airplan");
    p
}

// ── Settings loading ────────────────────────────────────────────────

/// Load settings from the canonical path + environment.
pub fn load_settings() -> Result<Settings, ConfigError> {
    load_settings_from(&config_path())
}

/// Load settings from an explicit TOML path + environment.
///
/// Layering, lowest to highest: built-in defaults, the TOML file (if it
/// exists), then `AIRPLAN_*` environment variables with `__` as the
/// table separator (e.g. `AIRPLAN_CAPACITY__MAX_DEVICES_PER_AP`).
pub fn load_settings_from(path: &Path) -> Result<Settings, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Settings::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("AIRPLAN_").split("__"));

    let settings: Settings = figment.extract()?;
    Ok(settings)
}

// ── Settings saving ─────────────────────────────────────────────────

/// Serialize settings to TOML at the canonical config path.
pub fn save_settings(settings: &Settings) -> Result<(), ConfigError> {
    save_settings_to(settings, &config_path())
}

/// Serialize settings to TOML at an explicit path.
pub fn save_settings_to(settings: &Settings, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(settings)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}
