// ── Interference domain types ──
//
// Static catalog facts. Entries are selected per environment, never
// created at plan time.

use serde::{Deserialize, Serialize};

use super::channel::Band;

/// Known class of interference source.
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
pub enum InterferenceKind {
    MetalRacking,
    Microwave,
    ForkliftRadio,
    CoChannel,
    RogueAp,
    Bluetooth,
    WirelessCamera,
}

/// How badly a source degrades the affected bands.
/// Ordered: Low < Medium < High.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// One catalog fact: a source, the bands it touches, and what to do
/// about it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterferenceSource {
    pub kind: InterferenceKind,
    pub affected_bands: Vec<Band>,
    pub severity: Severity,
    pub mitigation: String,
}

impl InterferenceSource {
    pub fn affects(&self, band: Band) -> bool {
        self.affected_bands.contains(&band)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_is_ordered() {
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::Medium < Severity::High);
    }

    #[test]
    fn affects_checks_band_membership() {
        let source = InterferenceSource {
            kind: InterferenceKind::Microwave,
            affected_bands: vec![Band::Band24],
            severity: Severity::High,
            mitigation: "Avoid channel 11 near break areas".into(),
        };
        assert!(source.affects(Band::Band24));
        assert!(!source.affects(Band::Band5));
    }
}
