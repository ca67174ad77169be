//! Chunked Section Reader
//!
//! Simulation output arrives as one line-oriented stream split into labeled
//! sections:
//!
//! ```text
//! # Without leverage
//! 1.52
//! 0.87
//! # With leverage
//! 3.10
//! ```
//!
//! Every section starts with a header line (`#` followed by the label) and is
//! followed by zero or more decimal values, one per line. Each value is turned
//! into its base-10 logarithm as it is read.
//!
//! The reader is lazy: nothing past the first header is read until a section
//! cursor is pulled. The data processing architecture is:
//!
//! line source
//! SectionReader (header / exhaustion state)
//! Section (cursor, one value per pull)
//! parse_value + to_log10
//! SectionData
//!

mod collect;
mod error;
mod header;
mod options;
mod reader;
mod value;
mod writer;

#[cfg(test)]
mod tests;

pub use collect::*;
pub use error::*;
pub use header::parse_header;
pub use options::ParseOptions;
pub use reader::*;
pub use value::*;
pub use writer::SectionWriter;
