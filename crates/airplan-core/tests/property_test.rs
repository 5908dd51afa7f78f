// Property tests over randomized facilities.

use proptest::prelude::*;

use airplan_core::planner::{plan_capacity, plan_coverage};
use airplan_core::{
    DeviceProfile, DeviceType, Dimensions, EnvironmentType, Facility, PlannerConfig, optimize,
};

fn facility(width_m: f64, length_m: f64, scanners: u32, tablets: u32, sensors: u32) -> Facility {
    Facility::new(
        "PROP-01",
        Dimensions {
            width_m,
            length_m,
            height_m: 8.0,
        },
        EnvironmentType::Warehouse,
        vec![
            DeviceProfile::with_bandwidth(DeviceType::HandheldScanner, scanners, 1.0),
            DeviceProfile::with_bandwidth(DeviceType::Tablet, tablets, 5.0),
            DeviceProfile::with_bandwidth(DeviceType::FixedSensor, sensors, 0.1),
        ],
    )
    .expect("valid facility")
}

proptest! {
    #[test]
    fn prop_ap_count_is_exactly_max_of_planners(
        w in 20.0f64..400.0,
        l in 20.0f64..400.0,
        scanners in 0u32..1500,
        tablets in 0u32..400,
        sensors in 0u32..1500,
    ) {
        let config = PlannerConfig::default();
        let site = facility(w, l, scanners, tablets, sensors);

        let report = optimize(&site, &config).expect("plans");
        let coverage = plan_coverage(&site, &config).expect("plans");
        let capacity = plan_capacity(&site, &config).expect("plans");

        prop_assert_eq!(report.coverage_ap_count, coverage);
        prop_assert_eq!(report.capacity_ap_count, capacity);
        prop_assert_eq!(report.ap_count, coverage.max(capacity));
        prop_assert!(report.ap_count >= 1);
    }

    #[test]
    fn prop_identical_inputs_replan_identically(
        w in 20.0f64..250.0,
        l in 20.0f64..250.0,
        scanners in 0u32..800,
    ) {
        let config = PlannerConfig::default();
        let site = facility(w, l, scanners, 0, 0);

        let first = optimize(&site, &config).expect("plans");
        let second = optimize(&site, &config).expect("plans");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_more_devices_never_shrink_the_plan(
        w in 20.0f64..300.0,
        l in 20.0f64..300.0,
        base in 0u32..1000,
        extra in 0u32..1000,
    ) {
        let config = PlannerConfig::default();

        let before = optimize(&facility(w, l, base, 0, 0), &config).expect("plans");
        let after = optimize(&facility(w, l, base + extra, 0, 0), &config).expect("plans");
        prop_assert!(
            after.ap_count >= before.ap_count,
            "{} devices -> {} APs, but {} devices -> {} APs",
            base, before.ap_count, base + extra, after.ap_count,
        );
    }

    #[test]
    fn prop_clean_plans_honor_the_reuse_invariant(
        w in 20.0f64..300.0,
        l in 20.0f64..300.0,
        scanners in 0u32..1200,
    ) {
        let config = PlannerConfig::default();
        let site = facility(w, l, scanners, 0, 0);
        let report = optimize(&site, &config).expect("plans");

        // The invariant is only promised for fully resolved plans;
        // degraded ones carry their violations as advisories instead.
        prop_assume!(report.channel_conflicts.is_empty());

        for (i, a) in report.ap_layout.iter().enumerate() {
            for b in report.ap_layout.iter().skip(i + 1) {
                if a.band != b.band {
                    continue;
                }
                let reuse_m = config.band_config(a.band).reuse_distance_m;
                let separation_m = report.layout.distance_m(a.position, b.position);
                if separation_m < reuse_m {
                    prop_assert_ne!(
                        a.channel, b.channel,
                        "{} and {} share channel {} at {:.1} m on {}",
                        a.position, b.position, a.channel, separation_m, a.band,
                    );
                }
            }
        }
    }
}
