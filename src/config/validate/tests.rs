//! Unit tests for configuration validation

use super::error::ValidationError;
use super::validator::{class_count, validate_config};
use crate::config::schema::*;

#[test]
fn test_default_config_is_valid() {
    assert!(validate_config(&VizConfig::default()).is_ok());
}

#[test]
fn test_zero_top_k() {
    let config = VizConfig { top_k: 0, ..Default::default() };
    assert_eq!(validate_config(&config), Err(ValidationError::InvalidTopK(0)));
}

#[test]
fn test_empty_class_dirs() {
    let config = VizConfig { class_dirs: vec![], ..Default::default() };
    assert_eq!(validate_config(&config), Err(ValidationError::EmptyClassDirs));
}

#[test]
fn test_class_dir_without_count() {
    let config = VizConfig {
        class_dirs: vec!["10_classes".into(), "classes_18".into()],
        ..Default::default()
    };
    assert_eq!(
        validate_config(&config),
        Err(ValidationError::InvalidClassDir("classes_18".into()))
    );
}

#[test]
fn test_dpi_bounds() {
    let zero = VizConfig { chart: ChartStyle { dpi: 0 }, ..Default::default() };
    assert_eq!(validate_config(&zero), Err(ValidationError::InvalidDpi(0)));

    let huge = VizConfig { chart: ChartStyle { dpi: 601 }, ..Default::default() };
    assert_eq!(validate_config(&huge), Err(ValidationError::InvalidDpi(601)));

    let max = VizConfig { chart: ChartStyle { dpi: 600 }, ..Default::default() };
    assert!(validate_config(&max).is_ok());
}

#[test]
fn test_class_count() {
    assert_eq!(class_count("10_classes"), Some(10));
    assert_eq!(class_count("18_classes"), Some(18));
    assert_eq!(class_count("7"), Some(7));
    assert_eq!(class_count("classes"), None);
    assert_eq!(class_count(""), None);
}

#[test]
fn test_error_messages() {
    assert!(ValidationError::InvalidTopK(0).to_string().contains("top_k"));
    assert!(ValidationError::InvalidDpi(0).to_string().contains("dpi"));
    assert!(ValidationError::InvalidClassDir("x".into()).to_string().contains("10_classes"));
}
