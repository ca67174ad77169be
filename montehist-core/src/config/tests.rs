use crate::config::{ConfigError, DEFAULT_BIN_WIDTH, DEFAULT_UNIT, ReportConfig};
use crate::summary::AxisRange;
use pretty_assertions::assert_eq;
use std::fs;
use std::str::FromStr;
use tempfile::tempdir;

#[test]
fn empty_config_uses_defaults() {
    // Act
    let cfg = ReportConfig::from_str("").unwrap();

    // Assert
    assert_eq!(cfg, ReportConfig::default());
    assert!(cfg.parse.skip_blank_lines);
    assert!(!cfg.parse.allow_non_positive);
    assert_eq!(cfg.histogram.bin_width, DEFAULT_BIN_WIDTH);
    assert_eq!(cfg.report.unit, DEFAULT_UNIT);
    assert_eq!(cfg.axis_override().unwrap(), None);
}

#[test]
fn all_sections_can_be_overridden() {
    // Arrange
    let toml = r#"
        [parse]
        skip_blank_lines = false
        allow_non_positive = true

        [histogram]
        bin_width = 0.25
        x_min = 0
        x_max = 7

        [report]
        unit = "Yen"
    "#;

    // Act
    let cfg = ReportConfig::from_str(toml).unwrap();

    // Assert
    assert!(!cfg.parse.skip_blank_lines);
    assert!(cfg.parse.allow_non_positive);
    assert_eq!(cfg.histogram.bin_width, 0.25);
    assert_eq!(cfg.report.unit, "Yen");
    assert_eq!(
        cfg.axis_override().unwrap(),
        Some(AxisRange { lo: 0, hi: 7 })
    );
}

#[test]
fn unknown_keys_are_rejected() {
    let result = ReportConfig::from_str("[histogram]\nbins = 10\n");

    assert!(result.is_err());
}

#[test]
fn zero_bin_width_is_invalid() {
    let cfg = ReportConfig {
        histogram: crate::config::HistogramConfig {
            bin_width: 0.0,
            ..Default::default()
        },
        ..Default::default()
    };

    assert!(matches!(
        cfg.validate(),
        Err(ConfigError::InvalidBinWidth { .. })
    ));
}

#[test]
fn bin_width_too_fine_for_the_axis_is_invalid() {
    // Arrange
    let tiny = "[histogram]\nbin_width = 1e-300\n";
    let fine_over_wide_range = "[histogram]\nbin_width = 0.001\nx_min = -300\nx_max = 300\n";

    // Act
    let tiny = ReportConfig::from_str(tiny).unwrap_err();
    let fine = ReportConfig::from_str(fine_over_wide_range).unwrap_err();

    // Assert
    assert!(matches!(
        tiny.downcast::<ConfigError>().unwrap(),
        ConfigError::TooManyBins { .. }
    ));
    assert!(matches!(
        fine.downcast::<ConfigError>().unwrap(),
        ConfigError::TooManyBins { .. }
    ));
}

#[test]
fn huge_range_is_too_wide() {
    let err = ReportConfig::from_str("[histogram]\nx_min = -5000\nx_max = 5000\n").unwrap_err();

    let err = err.downcast::<ConfigError>().unwrap();
    assert!(matches!(
        err,
        ConfigError::RangeTooWide {
            lo: -5000,
            hi: 5000,
            ..
        }
    ));
}

#[test]
fn half_a_range_is_incomplete() {
    let err = ReportConfig::from_str("[histogram]\nx_min = 1\n").unwrap_err();

    let err = err.downcast::<ConfigError>().unwrap();
    assert!(matches!(
        err,
        ConfigError::IncompleteRange {
            lo: Some(1),
            hi: None
        }
    ));
}

#[test]
fn reversed_range_is_invalid() {
    let err = ReportConfig::from_str("[histogram]\nx_min = 5\nx_max = 2\n").unwrap_err();

    assert!(matches!(
        err.downcast::<ConfigError>().unwrap(),
        ConfigError::InvalidRange { lo: 5, hi: 2 }
    ));
}

#[test]
fn loads_from_file() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("montehist.toml");
    fs::write(&path, "[report]\nunit = \"Billion Yen\"\n").unwrap();

    // Act
    let cfg = ReportConfig::from_file(&path).unwrap();

    // Assert
    assert_eq!(cfg.report.unit, "Billion Yen");
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempdir().unwrap();

    let result = ReportConfig::from_file(&dir.path().join("missing.toml"));

    assert!(matches!(result, Err(ConfigError::ReadFile { .. })));
}

#[test]
fn bad_toml_is_a_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[histogram\n").unwrap();

    let result = ReportConfig::from_file(&path);

    assert!(matches!(result, Err(ConfigError::Parse { .. })));
}
