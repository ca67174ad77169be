use crate::cli::input::read_input;
use crate::cli::report::args::ReportArgs;
use crate::cli::report::render::render;
use crate::config::ReportConfig;
use crate::summary::Report;
use anyhow::Result;
use std::io::{self, Write};
use tracing::info;

pub fn run_report(args: ReportArgs) -> Result<()> {
    let output = build_report_output(&args)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Everything `run_report` does short of printing.
pub fn build_report_output(args: &ReportArgs) -> Result<String> {
    let cfg = load_config(args)?;

    let sections = read_input(args.input.as_deref(), cfg.parse)?;
    let report = Report::build(
        &sections,
        cfg.axis_override()?,
        cfg.histogram.bin_width,
    )?;

    info!(
        sections = report.sections.len(),
        values = report.sections.iter().map(|s| s.summary.count).sum::<usize>(),
        "report built"
    );

    render(&report, &cfg.report.unit, args.mode())
}

fn load_config(args: &ReportArgs) -> Result<ReportConfig> {
    let mut cfg = match &args.config {
        Some(path) => ReportConfig::from_file(path)?,
        None => ReportConfig::default(),
    };

    // Command line wins over the file
    if args.x_min.is_some() || args.x_max.is_some() {
        cfg.histogram.x_min = args.x_min;
        cfg.histogram.x_max = args.x_max;
    }
    if let Some(width) = args.bin_width {
        cfg.histogram.bin_width = width;
    }

    cfg.validate()?;
    Ok(cfg)
}
