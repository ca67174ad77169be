use crate::summary::error::SummaryError;
use crate::summary::ticks::AxisRange;
use serde::Serialize;

/// Upper bound on the number of bins a histogram may allocate.
pub const MAX_BINS: usize = 100_000;

/// Fixed-width histogram over log10 values.
///
/// Bins are half-open `[lo, lo + width)`, except the last one which also
/// takes `hi`. Values outside the axis land in `underflow` / `overflow`.
#[derive(Debug, Clone, PartialEq)]
pub struct LogHistogram {
    lo: f64,
    hi: f64,
    bin_width: f64,
    counts: Vec<u64>,
    underflow: u64,
    overflow: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramReport {
    pub lo: f64,
    pub hi: f64,
    pub bin_width: f64,
    pub bins: Vec<HistogramBin>,
    pub underflow: u64,
    pub overflow: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    pub lo: f64,
    pub hi: f64,
    pub count: u64,
    pub density: f64,
}

impl LogHistogram {
    pub fn new(range: AxisRange, bin_width: f64) -> Result<Self, SummaryError> {
        let bins = bin_count(range, bin_width)?;

        Ok(Self {
            lo: f64::from(range.lo),
            hi: f64::from(range.hi),
            bin_width,
            counts: vec![0; bins],
            underflow: 0,
            overflow: 0,
        })
    }

    pub fn from_values(
        range: AxisRange,
        bin_width: f64,
        values: &[f64],
    ) -> Result<Self, SummaryError> {
        let mut histogram = Self::new(range, bin_width)?;
        for &value in values {
            histogram.record(value);
        }
        Ok(histogram)
    }

    pub fn record(&mut self, value: f64) {
        // NaN only comes from log10 of a negative value; count it as underflow.
        if value.is_nan() || value < self.lo {
            self.underflow += 1;
            return;
        }
        if value > self.hi {
            self.overflow += 1;
            return;
        }

        let idx = ((value - self.lo) / self.bin_width).floor() as usize;
        let last = self.counts.len() - 1;
        self.counts[idx.min(last)] += 1;
    }

    /// Number of values that landed inside the axis.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn underflow(&self) -> u64 {
        self.underflow
    }

    pub fn overflow(&self) -> u64 {
        self.overflow
    }

    pub fn bin_width(&self) -> f64 {
        self.bin_width
    }

    /// Per-bin count and density. Densities of in-range values integrate to 1.
    pub fn bins(&self) -> Vec<HistogramBin> {
        let total = self.total();

        self.counts
            .iter()
            .enumerate()
            .map(|(i, &count)| {
                let lo = self.lo + i as f64 * self.bin_width;
                let hi = (lo + self.bin_width).min(self.hi);
                let density = if total == 0 || hi <= lo {
                    0.0
                } else {
                    count as f64 / (total as f64 * (hi - lo))
                };

                HistogramBin {
                    lo,
                    hi,
                    count,
                    density,
                }
            })
            .collect()
    }

    pub fn report(&self) -> HistogramReport {
        HistogramReport {
            lo: self.lo,
            hi: self.hi,
            bin_width: self.bin_width,
            bins: self.bins(),
            underflow: self.underflow,
            overflow: self.overflow,
        }
    }
}

/// Number of bins of width `bin_width` needed to cover `range`.
///
/// Fails when the width is not a positive number or the count would exceed
/// [`MAX_BINS`].
pub fn bin_count(range: AxisRange, bin_width: f64) -> Result<usize, SummaryError> {
    if !(bin_width.is_finite() && bin_width > 0.0) {
        return Err(SummaryError::InvalidBinWidth { width: bin_width });
    }

    let span = f64::from(range.hi) - f64::from(range.lo);
    // Tolerate rounding in span / width, e.g. 4.0 / 0.1.
    let bins = (span / bin_width - 1e-9).ceil();
    if !bins.is_finite() || bins > MAX_BINS as f64 {
        return Err(SummaryError::TooManyBins {
            width: bin_width,
            max: MAX_BINS,
        });
    }

    Ok((bins as usize).max(1))
}
