use crate::sections::error::SectionError;
use crate::sections::header::parse_header;
use crate::sections::options::ParseOptions;
use crate::sections::value::{parse_value, to_log10};
use std::io::{BufRead, Lines};
use std::iter::FusedIterator;
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReaderMode {
    /// The current header is known and no cursor has read past it.
    AwaitingSection,
    /// A cursor was handed out and has not reached the next header yet.
    InSection,
    /// The line source ran dry. Terminal.
    Exhausted,
    /// A pull failed. Terminal.
    Failed,
}

/// Splits a line source into sections.
///
/// The reader owns the line source for its whole life and lends out one
/// [`Section`] at a time through [`SectionReader::next_section`]. Each section
/// borrows the reader mutably, so a second cursor cannot be created while the
/// first one is alive.
///
/// Sections are expected to be drained before asking for the next one. If a
/// section is dropped early, the next call to `next_section` finishes reading
/// it (parsing and discarding its values) before handing out a new cursor.
pub struct SectionReader<R> {
    lines: Lines<R>,
    options: ParseOptions,
    header: String,
    mode: ReaderMode,
    line_number: usize,
}

impl<R: BufRead> SectionReader<R> {
    pub fn new(source: R) -> Result<Self, SectionError> {
        Self::with_options(source, ParseOptions::default())
    }

    /// Reads the first line of `source`, which must be a header.
    pub fn with_options(source: R, options: ParseOptions) -> Result<Self, SectionError> {
        let mut reader = Self {
            lines: source.lines(),
            options,
            header: String::new(),
            mode: ReaderMode::AwaitingSection,
            line_number: 0,
        };

        let Some(first) = reader.read_line()? else {
            return Err(SectionError::MissingHeader {
                line_number: reader.line_number + 1,
                found: None,
            });
        };

        match parse_header(&first).map(str::to_owned) {
            Some(label) => {
                debug!(section = %label, line = reader.line_number, "section header");
                reader.header = label;
                Ok(reader)
            }
            None => Err(SectionError::MissingHeader {
                line_number: reader.line_number,
                found: Some(first),
            }),
        }
    }

    /// Hands out a cursor over the next section, or `None` once the input is
    /// exhausted.
    ///
    /// An error is only possible when the previous section was abandoned and
    /// finishing it hit a malformed line.
    pub fn next_section(&mut self) -> Option<Result<Section<'_, R>, SectionError>> {
        if self.mode == ReaderMode::InSection {
            debug!(section = %self.header, "draining abandoned section");
            if let Err(e) = self.drain() {
                return Some(Err(e));
            }
        }

        match self.mode {
            ReaderMode::Exhausted | ReaderMode::Failed => None,
            ReaderMode::AwaitingSection | ReaderMode::InSection => {
                self.mode = ReaderMode::InSection;
                Some(Ok(Section {
                    label: self.header.clone(),
                    reader: self,
                    stopped: false,
                }))
            }
        }
    }

    /// Label of the section the reader is positioned in, or of the next one
    /// once a cursor stopped on its header.
    pub fn current_header(&self) -> &str {
        &self.header
    }

    pub fn is_exhausted(&self) -> bool {
        self.mode == ReaderMode::Exhausted
    }

    pub fn mode(&self) -> ReaderMode {
        self.mode
    }

    /// Number of physical lines consumed so far.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    fn read_line(&mut self) -> Result<Option<String>, SectionError> {
        for line in self.lines.by_ref() {
            let line = line?;
            self.line_number += 1;

            if self.options.skip_blank_lines && line.trim().is_empty() {
                continue;
            }
            return Ok(Some(line));
        }
        Ok(None)
    }

    /// One step of the current section. `None` means the section ended.
    fn pull(&mut self) -> Option<Result<f64, SectionError>> {
        let line = match self.read_line() {
            Ok(Some(line)) => line,
            Ok(None) => {
                trace!(line = self.line_number, "end of input");
                self.mode = ReaderMode::Exhausted;
                return None;
            }
            Err(e) => {
                self.mode = ReaderMode::Failed;
                return Some(Err(e));
            }
        };

        if let Some(label) = parse_header(&line) {
            debug!(section = %label, line = self.line_number, "section header");
            self.header = label.to_owned();
            self.mode = ReaderMode::AwaitingSection;
            return None;
        }

        match parse_value(&line, &self.options) {
            Ok(value) => Some(Ok(to_log10(value))),
            Err(fault) => {
                self.mode = ReaderMode::Failed;
                Some(Err(SectionError::MalformedValue {
                    section: self.header.clone(),
                    line_number: self.line_number,
                    line,
                    fault,
                }))
            }
        }
    }

    fn drain(&mut self) -> Result<(), SectionError> {
        while let Some(item) = self.pull() {
            item?;
        }
        Ok(())
    }
}

/// Lazy cursor over the log10 values of one section.
///
/// Stops at the next header or at the end of input. Once stopped (or after
/// yielding an error) it keeps returning `None`; it never resumes.
pub struct Section<'a, R> {
    reader: &'a mut SectionReader<R>,
    label: String,
    stopped: bool,
}

impl<R: BufRead> Section<'_, R> {
    /// The header this section was opened with. Stays the same after the
    /// cursor has moved the reader on to the next header.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn collect_values(self) -> Result<Vec<f64>, SectionError> {
        self.collect()
    }
}

impl<R: BufRead> Iterator for Section<'_, R> {
    type Item = Result<f64, SectionError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.stopped {
            return None;
        }

        let item = self.reader.pull();
        if !matches!(item, Some(Ok(_))) {
            self.stopped = true;
        }
        item
    }
}

impl<R: BufRead> FusedIterator for Section<'_, R> {}
