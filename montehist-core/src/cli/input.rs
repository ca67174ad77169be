use crate::sections::{
    ParseOptions, SectionData, SectionError, read_sections_from_path, read_sections_with,
};
use std::io;
use std::path::Path;

/// Reads all sections from `input`, or from stdin when it is `None` or `-`.
pub fn read_input(
    input: Option<&Path>,
    options: ParseOptions,
) -> Result<Vec<SectionData>, SectionError> {
    match input {
        Some(path) if path != Path::new("-") => read_sections_from_path(path, options),
        _ => {
            let stdin = io::stdin();
            read_sections_with(stdin.lock(), options)
        }
    }
}
