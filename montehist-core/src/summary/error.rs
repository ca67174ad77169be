use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SummaryError {
    #[error("axis range {lo}..{hi} is empty")]
    EmptyRange { lo: i32, hi: i32 },

    #[error("axis range {lo}..{hi} spans more than {max} decades")]
    AxisTooWide { lo: i32, hi: i32, max: i32 },

    #[error("histogram bin width must be a positive number, got {width}")]
    InvalidBinWidth { width: f64 },

    #[error("histogram bin width {width} would need more than {max} bins")]
    TooManyBins { width: f64, max: usize },
}
