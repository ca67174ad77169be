use crate::logging::OutputMode;
use crate::summary::{AxisReport, HistogramReport, Report, SectionReport};
use owo_colors::OwoColorize;

pub fn render(report: &Report, unit: &str, mode: OutputMode) -> anyhow::Result<String> {
    match mode {
        OutputMode::Json => {
            let mut json = render_json(report)?;
            json.push('\n');
            Ok(json)
        }
        OutputMode::Plain => Ok(render_plain(report, unit, false)),
        OutputMode::Pretty => Ok(render_plain(report, unit, true)),
    }
}

pub fn render_json(report: &Report) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

pub fn render_plain(report: &Report, unit: &str, color: bool) -> String {
    let mut out = String::new();

    for section in &report.sections {
        let s = &section.summary;
        match s.geometric_mean {
            Some(mean) => out.push_str(&format!("Average of {}: {:.3} {}\n", s.label, mean, unit)),
            None => out.push_str(&format!("Average of {}: <no values>\n", s.label)),
        }
    }
    out.push('\n');

    for section in &report.sections {
        render_section(&mut out, section, color);
    }

    if let Some(axis) = &report.axis {
        render_axis(&mut out, axis);
    }

    out
}

fn render_section(out: &mut String, section: &SectionReport, color: bool) {
    let s = &section.summary;
    let title = format!("{} ({} values)", s.label, s.count);
    let rule = "=".repeat(title.chars().count());

    if color {
        out.push_str(&format!("{}\n{}\n", title.bold(), rule));
    } else {
        out.push_str(&format!("{title}\n{rule}\n"));
    }

    if let (Some(min), Some(max)) = (s.min_log10, s.max_log10) {
        out.push_str(&format!("log10 range: {min:.3} .. {max:.3}\n"));
    }

    match &section.histogram {
        Some(histogram) if histogram.bins.iter().any(|b| b.count > 0) => {
            render_histogram(out, histogram, color);
        }
        _ => out.push_str("  <no samples>\n"),
    }
    out.push('\n');
}

fn render_histogram(out: &mut String, histogram: &HistogramReport, color: bool) {
    let total: u64 = histogram.bins.iter().map(|b| b.count).sum();

    // Trim empty bins at both ends
    let first = histogram.bins.iter().position(|b| b.count > 0).unwrap_or(0);
    let last = histogram
        .bins
        .iter()
        .rposition(|b| b.count > 0)
        .unwrap_or(first);

    for bin in &histogram.bins[first..=last] {
        let pct = (bin.count as f64 / total as f64) * 100.0;
        let bars = if bin.count == 0 {
            0
        } else {
            ((pct / 5.0).floor() as usize).max(1)
        };
        let bar = format!("{:<20}", "█".repeat(bars));
        let range = format!("{:.2}..{:.2}", bin.lo, bin.hi);

        if color {
            out.push_str(&format!("  {:<12} {} {:>5.1}%\n", range, bar.green(), pct));
        } else {
            out.push_str(&format!("  {:<12} {} {:>5.1}%\n", range, bar, pct));
        }
    }

    if histogram.underflow > 0 || histogram.overflow > 0 {
        out.push_str(&format!(
            "  outside axis: below={} above={}\n",
            histogram.underflow, histogram.overflow
        ));
    }
}

fn render_axis(out: &mut String, axis: &AxisReport) {
    out.push_str("Axis (log10): ");
    let ticks: Vec<String> = axis
        .ticks
        .iter()
        .map(|t| format!("{}={}", t.value, t.label))
        .collect();
    out.push_str(&ticks.join(" "));
    out.push('\n');
}
