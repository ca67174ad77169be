use crate::sections::value::ValueFault;
use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum SectionError {
    //-------------------------------------------------------------------------
    // IO
    //-------------------------------------------------------------------------
    #[error("failed to open input file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    //-------------------------------------------------------------------------
    // Structure
    //-------------------------------------------------------------------------
    #[error("input must start with a section header line, found {}", describe_found(.found))]
    #[diagnostic(code(montehist::missing_header))]
    MissingHeader {
        line_number: usize,
        found: Option<String>,
    },

    #[error("section label {label:?} cannot be written: {reason}")]
    InvalidLabel { label: String, reason: &'static str },

    //-------------------------------------------------------------------------
    // Values
    //-------------------------------------------------------------------------
    #[error("malformed value {line:?} in section '{section}' at line {line_number}: {fault}")]
    #[diagnostic(code(montehist::malformed_value))]
    MalformedValue {
        section: String,
        line_number: usize,
        line: String,
        #[source]
        fault: ValueFault,
    },

    #[error("cannot write value {value} in section '{section}': {fault}")]
    UnwritableValue {
        section: String,
        value: f64,
        #[source]
        fault: ValueFault,
    },
}

impl SectionError {
    pub fn open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }

    /// 1-based line of the input the error points at, when there is one.
    pub fn line_number(&self) -> Option<usize> {
        match self {
            Self::MissingHeader { line_number, .. } | Self::MalformedValue { line_number, .. } => {
                Some(*line_number)
            }
            _ => None,
        }
    }
}

fn describe_found(found: &Option<String>) -> String {
    match found {
        Some(line) => format!("{line:?}"),
        None => "end of input".to_string(),
    }
}
