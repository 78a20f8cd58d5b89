//! # Parse State
//!
//! [`ParseState`] is the single owned context a parse threads through its
//! phases:
//!
//! ```text
//! load → SourceBuffer → tokenize → Tokens → rules (heading, italic, literal) → spans
//! ```
//!
//! The buffer is written once at construction. Tokenizing writes the token
//! sequence and cursor once; afterwards tokens change only by masking. The
//! span list is append-only while rules run, then optionally sorted by
//! `start` as the final step (see [`SpanOrder`]).
//!
//! Soft failures set [`ParseState::status`] and report a [`Diagnostic`]; they
//! never abort the pipeline.

use std::path::{Path, PathBuf};

use crate::cursor::Cursor;
use crate::diagnostics::{Diagnostic, DiagnosticSink, Status};
use crate::options::{ParseOptions, SpanOrder};
use crate::rules::RuleSet;
use crate::source::{LoadError, Loaded, SourceBuffer, load_file};
use crate::span::SpanNode;
use crate::token::Tokens;
use crate::tokenizer::tokenize;

/// Path reported for sources that did not come from a file.
pub const IN_MEMORY_PATH: &str = "<input>";

#[derive(Debug, Clone)]
pub struct ParseState {
    path: PathBuf,
    options: ParseOptions,
    source: SourceBuffer,
    cursor: Cursor,
    tokens: Tokens,
    tokenized: bool,
    parsed: bool,
    spans: Vec<SpanNode>,
    status: Status,
}

impl ParseState {
    pub fn new(path: impl AsRef<Path>, source: SourceBuffer, options: ParseOptions) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            options,
            source,
            cursor: Cursor::new(),
            tokens: Tokens::default(),
            tokenized: false,
            parsed: false,
            spans: Vec::new(),
            status: Status::Ok,
        }
    }

    pub fn from_text(text: &str, options: ParseOptions) -> Self {
        Self::new(IN_MEMORY_PATH, SourceBuffer::from_text(text), options)
    }

    /// Load `path` into a fresh state.
    ///
    /// A wrong extension yields a state with no data and status
    /// [`Status::InvalidFile`]. A missing file reports
    /// [`Status::MissingFile`] and then fails, as does any other read error.
    pub fn load(
        path: impl AsRef<Path>,
        options: ParseOptions,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<Self, LoadError> {
        let path = path.as_ref();
        match load_file(path, &options.extension) {
            Ok(Loaded::Source(source)) => Ok(Self::new(path, source, options)),
            Ok(Loaded::InvalidFile) => {
                let mut state = Self::new(path, SourceBuffer::empty(), options);
                state.report(Status::InvalidFile, sink);
                Ok(state)
            }
            Err(err @ LoadError::NotFound(_)) => {
                let diagnostic = Diagnostic::new(Status::MissingFile, 0, 0, path);
                log::debug!("reported: {diagnostic}");
                sink.report(diagnostic);
                Err(err)
            }
            Err(err) => Err(err),
        }
    }

    fn report(&mut self, status: Status, sink: &mut dyn DiagnosticSink) {
        self.status = status;
        let diagnostic = Diagnostic::new(status, self.cursor.row, self.cursor.col, &self.path);
        log::debug!("reported: {diagnostic}");
        sink.report(diagnostic);
    }

    /// Run the tokenizer over the buffer. Does nothing if already tokenized
    /// or if loading failed.
    pub fn tokenize(&mut self) -> Status {
        if self.tokenized || self.status.blocks_parsing() {
            return self.status;
        }
        let out = tokenize(&self.source);
        self.tokens = out.tokens;
        self.cursor = out.cursor;
        self.status = out.status;
        self.tokenized = true;
        self.status
    }

    /// Tokenize if needed, then run every rule of the standard set in order.
    pub fn parse(&mut self, sink: &mut dyn DiagnosticSink) {
        let rules = RuleSet::standard(&self.options);
        self.parse_with(&rules, sink);
    }

    /// Tokenize if needed, then run `rules` in order. Runs at most once per
    /// state; later calls leave the spans untouched.
    ///
    /// Before the first non-structural rule runs, an empty span list is
    /// reported as [`Status::MissingOrInvalidData`]; parsing carries on.
    pub fn parse_with(&mut self, rules: &RuleSet, sink: &mut dyn DiagnosticSink) {
        if self.parsed {
            return;
        }
        self.tokenize();
        if self.status.blocks_parsing() {
            return;
        }
        self.parsed = true;

        let mut checked = false;
        for rule in rules.iter() {
            if !rule.is_structural() && !checked {
                checked = true;
                if self.spans.is_empty() {
                    self.report(Status::MissingOrInvalidData, sink);
                }
            }
            let found = rule.apply(&mut self.tokens, &self.spans, 0);
            log::debug!("rule {} produced {} spans", rule.name(), found.len());
            self.spans.extend(found);
        }

        if self.options.span_order == SpanOrder::Source {
            self.spans.sort_by_key(|span| span.start);
        }
        log::info!(
            "parsed {}: {} tokens, {} spans",
            self.path.display(),
            self.tokens.len(),
            self.spans.len()
        );
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    pub fn source(&self) -> &SourceBuffer {
        &self.source
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn tokens(&self) -> &Tokens {
        &self.tokens
    }

    pub fn spans(&self) -> &[SpanNode] {
        &self.spans
    }

    pub fn into_spans(self) -> Vec<SpanNode> {
        self.spans
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Current text of the tokens `span` covers.
    pub fn text_of(&self, span: &SpanNode) -> String {
        self.tokens.text(span.covered())
    }
}
