//! Status codes and the diagnostics channel.
//!
//! A [`Status`] records the most recent terminal condition of a parse. Soft
//! failures are reported as a [`Diagnostic`] through a [`DiagnosticSink`] and
//! never unwind: callers check [`crate::ParseState::status`] after each phase.

use std::fmt;
use std::path::{Path, PathBuf};

/// Terminal and diagnostic conditions, with their fixed numeric codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// Normal continuation
    Ok,
    /// Tokenizer reached the padding character
    EndOfInput,
    /// Cursor addressed a column the buffer does not hold
    ColumnOverflow,
    /// Input file does not exist
    MissingFile,
    /// Input file has the wrong extension
    InvalidFile,
    /// Heading and italic passes found nothing
    MissingOrInvalidData,
}

impl Status {
    pub fn code(self) -> u16 {
        match self {
            Status::Ok => 100,
            Status::EndOfInput => 200,
            Status::ColumnOverflow => 300,
            Status::MissingFile => 400,
            Status::InvalidFile => 500,
            Status::MissingOrInvalidData => 600,
        }
    }

    /// Human label used in diagnostic lines.
    pub fn label(self) -> &'static str {
        match self {
            Status::Ok => "E_OK",
            Status::EndOfInput => "EOF",
            Status::ColumnOverflow => "ColumnOverflow",
            Status::MissingFile => "MissingFile",
            Status::InvalidFile => "Invalid File",
            Status::MissingOrInvalidData => "Missing/Invalid data",
        }
    }

    pub fn from_code(code: u16) -> Option<Self> {
        [
            Status::Ok,
            Status::EndOfInput,
            Status::ColumnOverflow,
            Status::MissingFile,
            Status::InvalidFile,
            Status::MissingOrInvalidData,
        ]
        .into_iter()
        .find(|s| s.code() == code)
    }

    /// True when no source data was loaded, so tokenizing and parsing are
    /// skipped.
    pub fn blocks_parsing(self) -> bool {
        matches!(self, Status::MissingFile | Status::InvalidFile)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One reported condition with its source location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub status: Status,
    pub row: usize,
    pub col: usize,
    pub path: PathBuf,
}

impl Diagnostic {
    pub fn new(status: Status, row: usize, col: usize, path: impl AsRef<Path>) -> Self {
        Self {
            status,
            row,
            col,
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Parsing error \"{}\" found at {}:{} in {}",
            self.status.label(),
            self.row,
            self.col,
            self.path.display()
        )
    }
}

/// Where reported diagnostics go.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Writes each diagnostic as one line on standard error.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        eprintln!("{diagnostic}");
    }
}

/// Collects diagnostics in memory.
impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(Status::Ok, 100, "E_OK")]
    #[case(Status::EndOfInput, 200, "EOF")]
    #[case(Status::ColumnOverflow, 300, "ColumnOverflow")]
    #[case(Status::MissingFile, 400, "MissingFile")]
    #[case(Status::InvalidFile, 500, "Invalid File")]
    #[case(Status::MissingOrInvalidData, 600, "Missing/Invalid data")]
    fn status_table(#[case] status: Status, #[case] code: u16, #[case] label: &str) {
        assert_eq!(status.code(), code);
        assert_eq!(status.label(), label);
        assert_eq!(Status::from_code(code), Some(status));
    }

    #[test]
    fn unknown_code_has_no_status() {
        assert_eq!(Status::from_code(700), None);
    }

    #[test]
    fn diagnostic_line_format() {
        let d = Diagnostic::new(Status::MissingOrInvalidData, 3, 7, "notes/today.md");
        assert_eq!(
            d.to_string(),
            "Parsing error \"Missing/Invalid data\" found at 3:7 in notes/today.md"
        );
    }

    #[test]
    fn vec_sink_collects_in_order() {
        let mut sink: Vec<Diagnostic> = Vec::new();
        sink.report(Diagnostic::new(Status::InvalidFile, 0, 0, "a.txt"));
        sink.report(Diagnostic::new(Status::MissingFile, 0, 0, "b.md"));
        assert_eq!(sink.len(), 2);
        assert_eq!(sink[0].status, Status::InvalidFile);
        assert_eq!(sink[1].status, Status::MissingFile);
    }

    #[test]
    fn only_load_failures_block_parsing() {
        assert!(Status::MissingFile.blocks_parsing());
        assert!(Status::InvalidFile.blocks_parsing());
        assert!(!Status::EndOfInput.blocks_parsing());
        assert!(!Status::MissingOrInvalidData.blocks_parsing());
    }
}
