use crate::sections::error::SectionError;
use crate::sections::value::ValueFault;
use std::io::Write;

/// Writes sections in the format [`SectionReader`](crate::sections::SectionReader)
/// reads: a `# <label>` line followed by one raw value per line.
///
/// Values are written untransformed; the reader applies log10 on the way in.
/// Anything the reader could never hand back (multi-line or
/// whitespace-led labels, `NaN`, infinities) is refused before a byte is
/// written. Zero and negative values are written as-is and only read back
/// with [`ParseOptions::allow_non_positive`](crate::sections::ParseOptions).
pub struct SectionWriter<W> {
    out: W,
    sections: usize,
}

impl<W: Write> SectionWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, sections: 0 }
    }

    pub fn write_section<I>(&mut self, label: &str, values: I) -> Result<(), SectionError>
    where
        I: IntoIterator<Item = f64>,
    {
        check_label(label)?;

        let values: Vec<f64> = values.into_iter().collect();
        if let Some(&value) = values.iter().find(|v| !v.is_finite()) {
            return Err(SectionError::UnwritableValue {
                section: label.to_string(),
                value,
                fault: ValueFault::NotFinite,
            });
        }

        writeln!(self.out, "# {label}")?;
        for value in values {
            writeln!(self.out, "{value}")?;
        }

        self.sections += 1;
        Ok(())
    }

    pub fn sections_written(&self) -> usize {
        self.sections
    }

    pub fn into_inner(mut self) -> Result<W, SectionError> {
        self.out.flush()?;
        Ok(self.out)
    }
}

fn check_label(label: &str) -> Result<(), SectionError> {
    let reason = if label.contains(['\n', '\r']) {
        "it spans more than one line"
    } else if label.starts_with(char::is_whitespace) {
        "leading whitespace is lost when read back"
    } else {
        return Ok(());
    };

    Err(SectionError::InvalidLabel {
        label: label.to_string(),
        reason,
    })
}
