use crate::sections::error::SectionError;
use crate::sections::options::ParseOptions;
use crate::sections::reader::SectionReader;
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// A fully read section: its label and the log10 of each value, in input order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionData {
    pub label: String,
    pub values: Vec<f64>,
}

impl SectionData {
    pub fn new(label: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            values,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

pub type Sections = Vec<SectionData>;

pub fn read_sections<R: BufRead>(source: R) -> Result<Sections, SectionError> {
    read_sections_with(source, ParseOptions::default())
}

/// Reads every section of `source`, in order.
///
/// The first error aborts the read; no partial result is returned.
pub fn read_sections_with<R: BufRead>(
    source: R,
    options: ParseOptions,
) -> Result<Sections, SectionError> {
    let mut reader = SectionReader::with_options(source, options)?;
    let mut sections = Vec::new();

    while let Some(section) = reader.next_section() {
        let section = section?;
        let label = section.label().to_owned();
        let values = section.collect_values()?;

        debug!(section = %label, values = values.len(), "section complete");
        sections.push(SectionData { label, values });
    }

    Ok(sections)
}

pub fn read_sections_from_path(
    path: &Path,
    options: ParseOptions,
) -> Result<Sections, SectionError> {
    let file = File::open(path).map_err(|e| SectionError::open(path, e))?;
    read_sections_with(BufReader::new(file), options)
}
