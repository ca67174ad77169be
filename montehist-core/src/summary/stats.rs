use crate::sections::{SectionData, from_log10};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionSummary {
    pub label: String,
    pub count: usize,

    /// Arithmetic mean of the log10 values.
    pub mean_log10: Option<f64>,

    /// `10^mean_log10`, the geometric mean of the original values.
    pub geometric_mean: Option<f64>,

    pub min_log10: Option<f64>,
    pub max_log10: Option<f64>,
}

impl SectionSummary {
    /// Statistics are `None` for an empty section.
    pub fn compute(section: &SectionData) -> Self {
        let values = &section.values;
        let count = values.len();

        if count == 0 {
            return Self {
                label: section.label.clone(),
                count,
                mean_log10: None,
                geometric_mean: None,
                min_log10: None,
                max_log10: None,
            };
        }

        let mean = values.iter().sum::<f64>() / count as f64;
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Self {
            label: section.label.clone(),
            count,
            mean_log10: Some(mean),
            geometric_mean: Some(from_log10(mean)),
            min_log10: Some(min),
            max_log10: Some(max),
        }
    }
}

pub fn summarize(sections: &[SectionData]) -> Vec<SectionSummary> {
    sections.iter().map(SectionSummary::compute).collect()
}
