// ── Facility and device population domain types ──

use serde::{Deserialize, Serialize};

use crate::error::PlanError;

/// Physical footprint of the facility, in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width_m: f64,
    pub length_m: f64,
    pub height_m: f64,
}

impl Dimensions {
    pub fn floor_area_m2(&self) -> f64 {
        self.width_m * self.length_m
    }
}

/// Facility environment class.
///
/// Drives the effective coverage radius (racking and cabinet rows eat
/// into reach) and selects the interference catalog entries.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EnvironmentType {
    Office,
    Warehouse,
    DataCenter,
}

impl EnvironmentType {
    /// Parse an environment name, surfacing unknown values as
    /// `UnknownEnvironment` -- never a silent default.
    pub fn from_name(name: &str) -> Result<Self, PlanError> {
        name.parse().map_err(|_| PlanError::UnknownEnvironment {
            environment: name.to_owned(),
        })
    }
}

/// Class of wireless client device served by the deployment.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DeviceType {
    HandheldScanner,
    Tablet,
    Laptop,
    VoiceTerminal,
    FixedSensor,
    MobileRobot,
}

impl DeviceType {
    /// Typical sustained per-device bandwidth, in Mbps.
    ///
    /// Used when a caller has a device census but no traffic profile;
    /// `DeviceProfile::with_bandwidth` overrides it.
    pub fn default_bandwidth_mbps(&self) -> f64 {
        match self {
            Self::HandheldScanner => 0.5,
            Self::Tablet => 2.0,
            Self::Laptop => 5.0,
            Self::VoiceTerminal => 0.1,
            Self::FixedSensor => 0.05,
            Self::MobileRobot => 1.0,
        }
    }
}

/// One homogeneous slice of the device population.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceProfile {
    pub device_type: DeviceType,
    pub count: u32,
    pub per_device_bandwidth_mbps: f64,
}

impl DeviceProfile {
    /// Profile with the device type's default bandwidth.
    pub fn new(device_type: DeviceType, count: u32) -> Self {
        Self {
            device_type,
            count,
            per_device_bandwidth_mbps: device_type.default_bandwidth_mbps(),
        }
    }

    /// Profile with an explicit per-device bandwidth in Mbps.
    pub fn with_bandwidth(device_type: DeviceType, count: u32, mbps: f64) -> Self {
        Self {
            device_type,
            count,
            per_device_bandwidth_mbps: mbps,
        }
    }

    /// Aggregate offered load of this profile, in Mbps.
    pub fn offered_load_mbps(&self) -> f64 {
        f64::from(self.count) * self.per_device_bandwidth_mbps
    }
}

/// Static description of the space and the devices it must serve.
///
/// Immutable after construction -- `Facility::new` validates once and
/// every planner can rely on the invariants from then on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facility {
    pub name: String,
    pub dimensions: Dimensions,
    pub environment: EnvironmentType,
    pub devices: Vec<DeviceProfile>,
}

impl Facility {
    pub fn new(
        name: impl Into<String>,
        dimensions: Dimensions,
        environment: EnvironmentType,
        devices: Vec<DeviceProfile>,
    ) -> Result<Self, PlanError> {
        let facility = Self {
            name: name.into(),
            dimensions,
            environment,
            devices,
        };
        facility.validate()?;
        Ok(facility)
    }

    /// Check the construction invariants.
    ///
    /// Public so planners can re-assert them on a hand-assembled value.
    pub fn validate(&self) -> Result<(), PlanError> {
        if self.name.trim().is_empty() {
            return Err(PlanError::InvalidFacility {
                reason: "facility name is empty".into(),
            });
        }

        let d = self.dimensions;
        for (axis, value) in [("width", d.width_m), ("length", d.length_m), ("height", d.height_m)]
        {
            if !value.is_finite() || value <= 0.0 {
                return Err(PlanError::InvalidFacility {
                    reason: format!("{axis} must be a positive number of meters, got {value}"),
                });
            }
        }

        for profile in &self.devices {
            let mbps = profile.per_device_bandwidth_mbps;
            if !mbps.is_finite() || mbps <= 0.0 {
                return Err(PlanError::InvalidFacility {
                    reason: format!(
                        "per-device bandwidth for {} must be positive, got {mbps}",
                        profile.device_type
                    ),
                });
            }
        }

        Ok(())
    }

    /// Total device population across all profiles.
    pub fn total_devices(&self) -> u64 {
        self.devices.iter().map(|p| u64::from(p.count)).sum()
    }

    /// Total offered load across all profiles, in Mbps.
    pub fn offered_load_mbps(&self) -> f64 {
        self.devices.iter().map(DeviceProfile::offered_load_mbps).sum()
    }
}
