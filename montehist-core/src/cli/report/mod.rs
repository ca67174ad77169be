//! Report Pipeline
//!
//! Reads a simulation result stream, summarizes every section, and prints the
//! result either as text or as JSON for an external plotting tool.
//!
//! The overall data processing architecture is:
//!
//! input (file or stdin)
//! read_input
//! SectionData
//! Report::build
//! Report
//! render
//!

mod args;
mod render;
mod run;

#[cfg(test)]
mod tests;

pub use args::ReportArgs;
pub use render::{render, render_json, render_plain};
pub use run::{build_report_output, run_report};
