mod error;

#[cfg(test)]
mod tests;

pub use error::ConfigError;

use crate::sections::ParseOptions;
use crate::summary::{AxisRange, MAX_BINS, SummaryError, bin_count};
use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::str::FromStr;

pub const DEFAULT_BIN_WIDTH: f64 = 0.1;
pub const DEFAULT_UNIT: &str = "Million Yen";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HistogramConfig {
    /// Bin width in log10 units.
    pub bin_width: f64,

    /// Fixed axis range. Both or neither; derived from the data when unset.
    pub x_min: Option<i32>,
    pub x_max: Option<i32>,
}

impl Default for HistogramConfig {
    fn default() -> Self {
        Self {
            bin_width: DEFAULT_BIN_WIDTH,
            x_min: None,
            x_max: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Unit printed after the averaged value, e.g. "Million Yen".
    pub unit: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            unit: DEFAULT_UNIT.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    pub parse: ParseOptions,
    pub histogram: HistogramConfig,
    pub report: OutputConfig,
}

impl ReportConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        let cfg: Self = toml::from_str(&contents).map_err(|e| ConfigError::parse(path, e))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let width = self.histogram.bin_width;
        if !(width.is_finite() && width > 0.0) {
            return Err(ConfigError::InvalidBinWidth { width });
        }

        // Without an explicit range the axis is at least one decade wide.
        let axis = self
            .axis_override()?
            .unwrap_or(AxisRange { lo: 0, hi: 1 });
        bin_count(axis, width).map_err(|_| ConfigError::TooManyBins {
            width,
            max: MAX_BINS,
        })?;

        Ok(())
    }

    /// The configured axis range, if both ends are set.
    pub fn axis_override(&self) -> Result<Option<AxisRange>, ConfigError> {
        match (self.histogram.x_min, self.histogram.x_max) {
            (None, None) => Ok(None),
            (Some(lo), Some(hi)) => AxisRange::new(lo, hi).map(Some).map_err(|e| match e {
                SummaryError::AxisTooWide { max, .. } => ConfigError::RangeTooWide { lo, hi, max },
                _ => ConfigError::InvalidRange { lo, hi },
            }),
            (lo, hi) => Err(ConfigError::IncompleteRange { lo, hi }),
        }
    }
}

impl FromStr for ReportConfig {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        let cfg: Self = toml::from_str(s).context("failed to parse montehist config from string")?;
        cfg.validate()?;

        Ok(cfg)
    }
}
