// ── Interference catalog ──
//
// Static knowledge base mapping environment types to the interference
// sources known to plague them, with mitigations. Entries are selected
// per environment, never computed. Build it once per process and share
// it read-only.

use indexmap::IndexMap;

use crate::error::PlanError;
use crate::model::channel::Band;
use crate::model::facility::EnvironmentType;
use crate::model::interference::{InterferenceKind, InterferenceSource, Severity};

/// Environment-keyed interference knowledge base.
#[derive(Debug, Clone)]
pub struct InterferenceCatalog {
    entries: IndexMap<EnvironmentType, Vec<InterferenceSource>>,
}

impl InterferenceCatalog {
    /// The built-in catalog. Covers every `EnvironmentType`.
    pub fn builtin() -> Self {
        let mut entries = IndexMap::new();

        entries.insert(
            EnvironmentType::Office,
            vec![
                source(
                    InterferenceKind::Microwave,
                    &[Band::Band24],
                    Severity::High,
                    "Avoid channel 11 on APs near break areas",
                ),
                source(
                    InterferenceKind::WirelessCamera,
                    &[Band::Band24, Band::Band5],
                    Severity::Medium,
                    "Move cameras to wired backhaul",
                ),
                source(
                    InterferenceKind::CoChannel,
                    &[Band::Band24],
                    Severity::Medium,
                    "Keep same-channel APs beyond the reuse distance or lower transmit power",
                ),
            ],
        );

        entries.insert(
            EnvironmentType::Warehouse,
            vec![
                source(
                    InterferenceKind::MetalRacking,
                    &[Band::Band24, Band::Band5],
                    Severity::High,
                    "Shorten the design radius and validate with a post-install site survey",
                ),
                source(
                    InterferenceKind::ForkliftRadio,
                    &[Band::Band24],
                    Severity::Medium,
                    "Reserve 5 GHz for latency-sensitive traffic",
                ),
                source(
                    InterferenceKind::Bluetooth,
                    &[Band::Band24],
                    Severity::Low,
                    "Steer critical devices to 5 GHz",
                ),
                source(
                    InterferenceKind::CoChannel,
                    &[Band::Band24, Band::Band5],
                    Severity::High,
                    "Keep same-channel APs beyond the reuse distance or lower transmit power",
                ),
            ],
        );

        entries.insert(
            EnvironmentType::DataCenter,
            vec![
                source(
                    InterferenceKind::CoChannel,
                    &[Band::Band24, Band::Band5],
                    Severity::High,
                    "Keep same-channel APs beyond the reuse distance or lower transmit power",
                ),
                source(
                    InterferenceKind::RogueAp,
                    &[Band::Band24, Band::Band5],
                    Severity::Medium,
                    "Enable rogue AP detection and trace offenders on the wired side",
                ),
            ],
        );

        Self { entries }
    }

    /// Catalog from caller-supplied entries. Environments left out of
    /// the map will fail `lookup` -- deliberately, never a default.
    pub fn from_entries(entries: IndexMap<EnvironmentType, Vec<InterferenceSource>>) -> Self {
        Self { entries }
    }

    /// The known interference sources for an environment, in catalog
    /// order.
    pub fn lookup(&self, environment: EnvironmentType) -> Result<&[InterferenceSource], PlanError> {
        self.entries
            .get(&environment)
            .map(Vec::as_slice)
            .ok_or_else(|| PlanError::UnknownEnvironment {
                environment: environment.to_string(),
            })
    }
}

impl Default for InterferenceCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn source(
    kind: InterferenceKind,
    bands: &[Band],
    severity: Severity,
    mitigation: &str,
) -> InterferenceSource {
    InterferenceSource {
        kind,
        affected_bands: bands.to_vec(),
        severity,
        mitigation: mitigation.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_covers_every_environment() {
        let catalog = InterferenceCatalog::builtin();
        for environment in [
            EnvironmentType::Office,
            EnvironmentType::Warehouse,
            EnvironmentType::DataCenter,
        ] {
            let findings = catalog.lookup(environment).expect("covered");
            assert!(!findings.is_empty());
        }
    }

    #[test]
    fn warehouse_findings_lead_with_racking() {
        let catalog = InterferenceCatalog::builtin();
        let findings = catalog.lookup(EnvironmentType::Warehouse).expect("covered");
        assert_eq!(findings[0].kind, InterferenceKind::MetalRacking);
        assert!(
            findings
                .iter()
                .any(|f| f.kind == InterferenceKind::ForkliftRadio)
        );
    }

    #[test]
    fn missing_environment_is_an_error_not_a_default() {
        let catalog = InterferenceCatalog::from_entries(IndexMap::new());
        let err = catalog
            .lookup(EnvironmentType::Office)
            .expect_err("must surface the gap");
        assert_eq!(
            err,
            PlanError::UnknownEnvironment {
                environment: "office".into()
            }
        );
    }

    #[test]
    fn lookup_order_is_stable() {
        let catalog = InterferenceCatalog::builtin();
        let first = catalog.lookup(EnvironmentType::DataCenter).expect("covered");
        let second = catalog.lookup(EnvironmentType::DataCenter).expect("covered");
        assert_eq!(first, second);
    }
}
