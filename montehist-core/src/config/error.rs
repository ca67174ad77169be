use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration file: {path}\n\n{source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("histogram bin width must be a positive number, got {width}")]
    InvalidBinWidth { width: f64 },

    #[error("histogram bin width {width} would need more than {max} bins")]
    TooManyBins { width: f64, max: usize },

    #[error("histogram range {lo}..{hi} is empty")]
    InvalidRange { lo: i32, hi: i32 },

    #[error("histogram range {lo}..{hi} spans more than {max} decades")]
    RangeTooWide { lo: i32, hi: i32, max: i32 },

    #[error("histogram range needs both x_min and x_max (x_min = {lo:?}, x_max = {hi:?})")]
    IncompleteRange { lo: Option<i32>, hi: Option<i32> },
}

impl ConfigError {
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: toml::de::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}
