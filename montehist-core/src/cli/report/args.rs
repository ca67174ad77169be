use crate::logging::{OutputMode, default_output_mode};
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Clone, Default)]
pub struct ReportArgs {
    /// Input file (stdin when omitted or `-`)
    pub input: Option<PathBuf>,

    /// Path to a montehist.toml
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, conflicts_with_all = ["plain", "pretty"])]
    pub json: bool,

    /// Plain text without colors
    #[arg(long, conflicts_with = "pretty")]
    pub plain: bool,

    /// Colored text
    #[arg(long)]
    pub pretty: bool,

    /// Left end of the log10 axis (overrides the config)
    #[arg(long, allow_negative_numbers = true, requires = "x_max")]
    pub x_min: Option<i32>,

    /// Right end of the log10 axis (overrides the config)
    #[arg(long, allow_negative_numbers = true, requires = "x_min")]
    pub x_max: Option<i32>,

    /// Histogram bin width in log10 units (overrides the config)
    #[arg(long)]
    pub bin_width: Option<f64>,
}

impl ReportArgs {
    pub fn mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else if self.plain {
            OutputMode::Plain
        } else if self.pretty {
            OutputMode::Pretty
        } else {
            default_output_mode()
        }
    }
}
