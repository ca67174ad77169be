use crate::sections::SectionData;
use crate::summary::error::SummaryError;
use crate::summary::histogram::{HistogramReport, LogHistogram};
use crate::summary::stats::SectionSummary;
use crate::summary::ticks::{AxisRange, Tick};
use serde::Serialize;

/// Everything a renderer needs about one run: per-section statistics and
/// histograms drawn on a shared axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub sections: Vec<SectionReport>,
    pub axis: Option<AxisReport>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionReport {
    #[serde(flatten)]
    pub summary: SectionSummary,
    pub histogram: Option<HistogramReport>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisReport {
    #[serde(flatten)]
    pub range: AxisRange,
    pub ticks: Vec<Tick>,
}

impl Report {
    /// Builds the report. `axis` overrides the range derived from the data.
    ///
    /// Without any finite value and without an override there is no axis and
    /// no histogram.
    pub fn build(
        sections: &[SectionData],
        axis: Option<AxisRange>,
        bin_width: f64,
    ) -> Result<Self, SummaryError> {
        let range = axis.or_else(|| AxisRange::auto(sections));

        let sections = sections
            .iter()
            .map(|section| -> Result<SectionReport, SummaryError> {
                let histogram = range
                    .map(|r| LogHistogram::from_values(r, bin_width, &section.values))
                    .transpose()?
                    .map(|h| h.report());

                Ok(SectionReport {
                    summary: SectionSummary::compute(section),
                    histogram,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            sections,
            axis: range.map(|range| AxisReport {
                range,
                ticks: range.ticks(),
            }),
        })
    }
}
