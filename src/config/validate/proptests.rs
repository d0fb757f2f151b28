//! Property-based tests for configuration validation

use super::error::ValidationError;
use super::validator::{validate_config, MAX_DPI};
use crate::config::schema::*;
use proptest::prelude::*;

fn arb_valid_config() -> impl Strategy<Value = VizConfig> {
    (
        1usize..20,                              // top_k
        proptest::collection::vec(1u32..100, 1..4), // class counts
        1u32..=MAX_DPI,                          // dpi
    )
        .prop_map(|(top_k, counts, dpi)| VizConfig {
            top_k,
            class_dirs: counts.iter().map(|c| format!("{c}_classes")).collect(),
            chart: ChartStyle { dpi },
            ..Default::default()
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_valid_config_passes(config in arb_valid_config()) {
        prop_assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn prop_zero_top_k_fails(config in arb_valid_config()) {
        let config = VizConfig { top_k: 0, ..config };
        prop_assert_eq!(validate_config(&config), Err(ValidationError::InvalidTopK(0)));
    }

    #[test]
    fn prop_dpi_above_max_fails(config in arb_valid_config(), dpi in (MAX_DPI + 1)..10_000u32) {
        let config = VizConfig { chart: ChartStyle { dpi }, ..config };
        prop_assert_eq!(validate_config(&config), Err(ValidationError::InvalidDpi(dpi)));
    }

    #[test]
    fn prop_yaml_roundtrip_stays_valid(config in arb_valid_config()) {
        let yaml = serde_yaml::to_string(&config).unwrap();
        let back: VizConfig = serde_yaml::from_str(&yaml).unwrap();
        prop_assert_eq!(&back, &config);
        prop_assert!(validate_config(&back).is_ok());
    }
}
