//! Summaries of read sections: mean and its inverse transform, a log-scale
//! histogram, and the axis the histogram is drawn on.

mod error;
mod histogram;
mod report;
mod stats;
mod ticks;

#[cfg(test)]
mod tests;

pub use error::SummaryError;
pub use histogram::*;
pub use report::*;
pub use stats::*;
pub use ticks::*;
