//! # Configuration Tests
//!
//! Defaults, derived capacities, JSON deserialization and validation.

use procsim_core::common::{ConfigError, SimError, UnitClass};
use procsim_core::config::*;
use rstest::rstest;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert!(!config.general.trace_instructions);
    assert!(!config.general.record_timeline);
    assert_eq!(config.pipeline.fetch_width, 4);
    assert_eq!(config.pipeline.k0_units, 1);
    assert_eq!(config.pipeline.k1_units, 2);
    assert_eq!(config.pipeline.k2_units, 3);
    assert_eq!(config.pipeline.dispatch_multiplier, 2);
    assert_eq!(config.pipeline.schedule_multiplier, 2);
    assert!(config.validate().is_ok());
}

#[test]
fn test_derived_capacities() {
    let p = PipelineConfig::default();
    assert_eq!(p.rs_capacity(UnitClass::K0), 2);
    assert_eq!(p.rs_capacity(UnitClass::K1), 4);
    assert_eq!(p.rs_capacity(UnitClass::K2), 6);
    assert_eq!(p.total_rs_capacity(), 12);
    assert_eq!(p.dispatch_queue_capacity(), 24);
}

#[test]
fn test_empty_json_is_default() {
    let config = Config::from_json("{}").unwrap();
    assert_eq!(config.pipeline.dispatch_queue_capacity(), 24);
    assert!(!config.general.record_timeline);
}

#[test]
fn test_partial_pipeline_section() {
    let config = Config::from_json(r#"{ "pipeline": { "k0_units": 3, "dispatch_multiplier": 1 } }"#)
        .unwrap();
    assert_eq!(config.pipeline.k0_units, 3);
    assert_eq!(config.pipeline.k1_units, 2);
    // 1 * (3*2 + 2*2 + 3*2)
    assert_eq!(config.pipeline.dispatch_queue_capacity(), 16);
}

#[test]
fn test_malformed_json_is_parse_error() {
    let err = Config::from_json(r#"{ "pipeline": { "fetch_width": "four" } }"#).unwrap_err();
    assert!(matches!(err, SimError::ConfigParse(_)));
}

#[rstest]
#[case::fetch(r#"{ "pipeline": { "fetch_width": 0 } }"#, ConfigError::ZeroFetchWidth)]
#[case::k0(r#"{ "pipeline": { "k0_units": 0 } }"#, ConfigError::ZeroUnits { class: UnitClass::K0 })]
#[case::k2(r#"{ "pipeline": { "k2_units": 0 } }"#, ConfigError::ZeroUnits { class: UnitClass::K2 })]
#[case::dispatch(
    r#"{ "pipeline": { "dispatch_multiplier": 0 } }"#,
    ConfigError::ZeroMultiplier { name: "dispatch" }
)]
#[case::schedule(
    r#"{ "pipeline": { "schedule_multiplier": 0 } }"#,
    ConfigError::ZeroMultiplier { name: "schedule" }
)]
fn test_zero_parameters_rejected(#[case] json: &str, #[case] expected: ConfigError) {
    match Config::from_json(json) {
        Err(SimError::Config(e)) => assert_eq!(e, expected),
        other => panic!("expected {expected:?}, got {other:?}"),
    }
}

#[test]
fn test_negative_count_does_not_parse() {
    let err = Config::from_json(r#"{ "pipeline": { "k1_units": -1 } }"#).unwrap_err();
    assert!(matches!(err, SimError::ConfigParse(_)));
}

#[test]
fn test_error_messages_name_the_parameter() {
    let err = ConfigError::ZeroUnits {
        class: UnitClass::K1,
    };
    assert_eq!(err.to_string(), "k1 unit count must be at least 1");
    let err = SimError::from(ConfigError::ZeroMultiplier { name: "schedule" });
    assert_eq!(
        err.to_string(),
        "invalid configuration: schedule multiplier must be at least 1"
    );
}
