use crate::cli::report::{ReportArgs, build_report_output, render_json, render_plain};
use crate::logging::OutputMode;
use crate::sections::SectionData;
use crate::summary::Report;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::tempdir;

fn sample_report() -> Report {
    let sections = vec![
        SectionData::new("ordinary", vec![0.0, 1.0, 2.0]),
        SectionData::new("empty", vec![]),
    ];
    Report::build(&sections, None, 1.0).unwrap()
}

#[test]
fn plain_report_starts_with_averages() {
    // Act
    let out = render_plain(&sample_report(), "Million Yen", false);

    // Assert
    let mut lines = out.lines();
    assert_eq!(lines.next(), Some("Average of ordinary: 10.000 Million Yen"));
    assert_eq!(lines.next(), Some("Average of empty: <no values>"));
}

#[test]
fn plain_report_draws_bars_and_axis() {
    let out = render_plain(&sample_report(), "Million Yen", false);

    assert!(out.contains("ordinary (3 values)\n==================="), "{out}");
    assert!(out.contains("0.00..1.00"), "{out}");
    assert!(out.contains("1.00..2.00"), "{out}");
    assert!(out.contains("█"), "{out}");
    assert!(out.contains("empty (0 values)"), "{out}");
    assert!(out.contains("<no samples>"), "{out}");
    assert!(out.ends_with("Axis (log10): 0=¥1M 1=¥10M 2=¥100M\n"), "{out}");
}

#[test]
fn plain_report_has_no_escape_codes() {
    let out = render_plain(&sample_report(), "Million Yen", false);

    assert!(!out.contains('\x1b'));
}

#[test]
fn json_report_is_machine_readable() {
    // Act
    let json = render_json(&sample_report()).unwrap();

    // Assert
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["sections"][0]["label"], "ordinary");
    assert_eq!(value["sections"][0]["count"], 3);
    assert_eq!(value["sections"][1]["mean_log10"], serde_json::Value::Null);
    assert_eq!(value["axis"]["ticks"][2]["label"], "¥100M");
    assert_eq!(value["sections"][0]["histogram"]["lo"], 0.0);
    assert_eq!(value["sections"][0]["histogram"]["hi"], 2.0);
    assert_eq!(value["sections"][0]["histogram"]["bin_width"], 1.0);
}

#[test]
fn bin_width_flag_too_fine_is_an_error_not_a_panic() {
    // Arrange
    let dir = tempdir().unwrap();
    let input = dir.path().join("results.txt");
    fs::write(&input, "# A\n1\n10\n").unwrap();

    let args = ReportArgs {
        input: Some(input),
        bin_width: Some(1e-300),
        ..ReportArgs::default()
    };

    // Act
    let err = build_report_output(&args).unwrap_err();

    // Assert
    assert!(err.to_string().contains("bins"), "{err:#}");
}

#[test]
fn report_from_file_with_cli_overrides() {
    // Arrange
    let dir = tempdir().unwrap();
    let input = dir.path().join("results.txt");
    fs::write(&input, "# A\n1\n10\n100\n# B\n1000\n").unwrap();

    let args = ReportArgs {
        input: Some(input),
        json: true,
        x_min: Some(0),
        x_max: Some(4),
        bin_width: Some(0.5),
        ..ReportArgs::default()
    };

    // Act
    let out = build_report_output(&args).unwrap();

    // Assert
    assert_eq!(args.mode(), OutputMode::Json);
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["axis"]["lo"], 0);
    assert_eq!(value["axis"]["hi"], 4);
    assert_eq!(value["sections"][1]["label"], "B");
    assert_eq!(value["sections"][0]["histogram"]["bins"].as_array().unwrap().len(), 8);
}

#[test]
fn config_file_sets_unit() {
    // Arrange
    let dir = tempdir().unwrap();
    let input = dir.path().join("results.txt");
    let config = dir.path().join("montehist.toml");
    fs::write(&input, "# A\n100\n").unwrap();
    fs::write(&config, "[report]\nunit = \"Yen\"\n").unwrap();

    let args = ReportArgs {
        input: Some(input),
        config: Some(config),
        plain: true,
        ..ReportArgs::default()
    };

    // Act
    let out = build_report_output(&args).unwrap();

    // Assert
    assert!(out.starts_with("Average of A: 100.000 Yen\n"), "{out}");
}

#[test]
fn malformed_input_surfaces_the_section_error() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("results.txt");
    fs::write(&input, "# A\nabc\n").unwrap();

    let args = ReportArgs {
        input: Some(input),
        plain: true,
        ..ReportArgs::default()
    };

    let err = build_report_output(&args).unwrap_err();

    assert!(err.downcast_ref::<crate::sections::SectionError>().is_some());
}
